//! # mpharvest - Materials Project XAS 数据收集工具
//!
//! 从材料数据库下载晶体结构与 X 射线吸收谱，为结构标注
//! 配位环境描述符，写出两张平面 CSV 表。
//!
//! ## 子命令
//! - `harvest` - 按标准输入的材料 id 收集数据，写出标签表与光谱表
//! - `discover` - 查询二元过渡金属氧化物，打印材料 id 列表
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── mp/        (远程数据库客户端)
//!   │     ├── chemenv/   (配位环境分析)
//!   │     ├── models/    (数据模型)
//!   │     └── table/     (表投影与写出)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod chemenv;
mod cli;
mod commands;
mod error;
mod models;
mod mp;
mod table;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
