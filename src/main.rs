//! # Site Analytics 主程序
//!
//! 站点分析持久化平台的数据库管理入口

use clap::{Parser, Subcommand};
use tracing::info;

use site_analytics::{
    AnalyticsError, Result, config,
    database::{check_database_status, init_database, run_migrations},
    logging,
};

#[derive(Parser)]
#[command(name = "site-analytics", about = "站点分析数据库管理工具", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 应用全部待执行的数据库迁移
    Migrate,
    /// 查看数据库迁移状态
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 配置文件缺失时退回默认配置，便于本地启动
    let config = config::load_config().unwrap_or_else(|e| {
        eprintln!("加载配置失败，使用默认配置: {e}");
        config::AppConfig::default()
    });

    logging::init(config.log_level.as_deref());

    config.database.ensure_database_path()?;
    let db = init_database(&config.database.url)
        .await
        .map_err(|e| AnalyticsError::database_with_source("数据库连接失败", e))?;

    match cli.command {
        Command::Migrate => {
            run_migrations(&db)
                .await
                .map_err(|e| AnalyticsError::database_with_source("数据库迁移失败", e))?;
            info!("迁移执行完毕");
        }
        Command::Status => {
            check_database_status(&db)
                .await
                .map_err(|e| AnalyticsError::database_with_source("查询迁移状态失败", e))?;
        }
    }

    Ok(())
}
