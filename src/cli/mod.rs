//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `harvest`: 从数据库收集结构与 XAS 光谱，写出两张 CSV 表
//! - `discover`: 查询二元过渡金属氧化物，打印材料 id 列表
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: harvest, discover

pub mod discover;
pub mod harvest;

use clap::{Parser, Subcommand};

/// mpharvest - Materials Project XAS 数据收集工具
#[derive(Parser)]
#[command(name = "mpharvest")]
#[command(version)]
#[command(about = "A Materials Project XAS dataset collection toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Download structures and XAS spectra, write label and spectrum tables
    Harvest(harvest::HarvestArgs),

    /// Query binary transition metal oxides and print matching material ids
    Discover(discover::DiscoverArgs),
}
