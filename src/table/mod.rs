//! # 表投影模块
//!
//! 把标注过的结构和光谱投影为平面行，行内携带来源材料 id
//! 作为连接键。
//!
//! ## 子模块
//! - `write`: 累积表的拼接与 CSV 写出
//!
//! ## 依赖关系
//! - 被 `commands/harvest.rs` 使用
//! - 使用 `models/` 数据模型

pub mod write;

use crate::error::{HarvestError, Result};
use crate::models::{Structure, XasSpectrum};

/// 标签表的一行：一个标注过的原子位点
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRow {
    /// 配位环境符号
    pub symbol: String,
    /// 配位环境尺寸因子
    pub size: f64,
    /// 元素符号
    pub element: String,
    /// 材料 id
    pub id: String,
}

/// 光谱表的一行：一个 (x, y) 采样点
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumRow {
    /// 吸收元素符号（同一光谱内恒定）
    pub element: String,
    /// 能量 (eV)
    pub x: f64,
    /// 吸收强度
    pub y: f64,
    /// 材料 id
    pub id: String,
}

/// 结构 -> 标签行，每个位点一行
///
/// 只接受完整标注过的结构，缺描述符的位点是类型化错误。
pub fn structure_rows(structure: &Structure, material_id: &str) -> Result<Vec<LabelRow>> {
    structure
        .sites
        .iter()
        .enumerate()
        .map(|(index, site)| {
            let symbol = site
                .symbol
                .clone()
                .ok_or(HarvestError::MissingDescriptors { index })?;
            let size = site
                .size
                .ok_or(HarvestError::MissingDescriptors { index })?;
            Ok(LabelRow {
                symbol,
                size,
                element: site.element.clone(),
                id: material_id.to_string(),
            })
        })
        .collect()
}

/// 光谱 -> 光谱行，每个采样点一行
pub fn spectrum_rows(spectrum: &XasSpectrum, material_id: &str) -> Vec<SpectrumRow> {
    spectrum
        .x
        .iter()
        .zip(spectrum.y.iter())
        .map(|(&x, &y)| SpectrumRow {
            element: spectrum.absorbing_element.clone(),
            x,
            y,
            id: material_id.to_string(),
        })
        .collect()
}
