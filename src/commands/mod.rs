//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `mp/`, `chemenv/`, `table/`, `utils/`
//! - 子模块: harvest, discover

pub mod discover;
pub mod harvest;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Harvest(args) => harvest::execute(args),
        Commands::Discover(args) => discover::execute(args),
    }
}
