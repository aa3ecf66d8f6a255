//! # harvest 子命令 CLI 定义
//!
//! 从数据库收集结构与 XAS 光谱，材料 id 逐行读自标准输入。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/harvest.rs`

use clap::Args;

/// harvest 子命令参数
#[derive(Args, Debug)]
pub struct HarvestArgs {
    /// Materials Project API key
    #[arg(env = "MP_API_KEY")]
    pub api_key: String,

    /// Prefix for the output tables: <prefix>_labels.csv and <prefix>_spectra.csv
    pub out_prefix: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Fetch each element's spectrum once per structure instead of once per site
    #[arg(long, default_value_t = false)]
    pub dedup_elements: bool,
}
