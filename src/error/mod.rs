//! The unified error handling system for the application.

use std::fmt::Display;

pub use types::AnalyticsError;

/// A unified `Result` type for the entire application.
///
/// All functions that can fail should return this type.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

pub mod types;

/// Context trait for adding context to errors.
pub trait Context<T, E> {
    #[track_caller]
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display;

    #[track_caller]
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T, E> Context<T, E> for std::result::Result<T, E>
where
    E: Into<AnalyticsError>,
{
    #[track_caller]
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display,
    {
        self.with_context(|| context)
    }

    #[track_caller]
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => {
                let context_message = context().to_string();
                Err(AnalyticsError::Context {
                    context: context_message,
                    source: Box::new(error.into()),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_wraps_database_error() {
        let err: std::result::Result<(), sea_orm::DbErr> =
            Err(sea_orm::DbErr::Custom("boom".to_string()));
        let wrapped = err.context("读取时间窗口失败").unwrap_err();
        assert!(wrapped.to_string().contains("读取时间窗口失败"));
    }

    #[test]
    fn invalid_choice_becomes_validation_error() {
        let err: AnalyticsError = entity::InvalidChoice {
            field: "time_frame",
            value: "biweekly".to_string(),
        }
        .into();
        assert!(matches!(err, AnalyticsError::Validation { .. }));
    }
}
