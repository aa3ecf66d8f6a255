//! # 配位环境分析模块
//!
//! 为晶体结构的每个原子位点计算配位环境描述符
//! （几何符号 + 尺寸因子）。
//!
//! ## 子模块
//! - `geometries`: 参考配位几何数据库
//! - `finder`: 邻居壳层识别与分类
//!
//! ## 依赖关系
//! - 被 `commands/harvest.rs` 使用
//! - 使用 `models/structure.rs`

pub mod finder;
pub mod geometries;

pub use finder::{annotate_structure, GeometryFinder, SiteEnvironment};
