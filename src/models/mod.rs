//! # 数据模型模块
//!
//! 定义晶体结构和 XAS 光谱数据模型。
//!
//! ## 依赖关系
//! - 被 `mp/`、`chemenv/` 和 `table/` 使用
//! - 子模块: structure, spectrum

pub mod spectrum;
pub mod structure;

pub use spectrum::XasSpectrum;
pub use structure::{Lattice, Site, Structure};
