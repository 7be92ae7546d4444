//! # 自定义指标实体定义
//!
//! 用户定义的指标：公式仅作为文本存储，本模块不求值

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

/// 自定义指标实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "metrics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub formula: String,
    pub unit: String,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Model {
    /// 展示名，即指标名称本身
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// `created_at` 只写一次，`updated_at` 每次保存刷新
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = chrono::Utc::now().naive_utc();
        if insert {
            if self.created_at.is_not_set() {
                self.created_at = Set(now);
            }
        } else {
            self.created_at = NotSet;
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}
