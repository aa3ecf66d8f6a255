//! # discover 子命令 CLI 定义
//!
//! 查询含氧二元过渡金属化合物，打印匹配的材料 id。
//! 输出可直接通过管道喂给 `harvest`。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/discover.rs`

use clap::Args;

/// discover 子命令参数
#[derive(Args, Debug)]
pub struct DiscoverArgs {
    /// Materials Project API key
    #[arg(env = "MP_API_KEY")]
    pub api_key: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}
