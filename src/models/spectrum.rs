//! # XAS 光谱数据模型
//!
//! 定义校验过的 X 射线吸收谱表示。构造时检查数值内容，
//! 数据库偶尔会返回长度不一致或含非法数值的光谱记录。
//!
//! ## 依赖关系
//! - 被 `mp/records.rs` 和 `table/` 使用
//! - 使用 `error.rs` 的 InvalidSpectrum 变体

use serde::{Deserialize, Serialize};

use crate::error::{HarvestError, Result};

/// 校验过的 XAS 光谱
///
/// 每条光谱对应一个结构中的一种吸收元素。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XasSpectrum {
    /// 能量采样点 (eV)，严格递增
    pub x: Vec<f64>,

    /// 吸收强度采样点，与 x 等长
    pub y: Vec<f64>,

    /// 吸收元素符号
    pub absorbing_element: String,

    /// 吸收边标签（如 "K"）
    pub edge: String,
}

impl XasSpectrum {
    /// 从原始采样数据构造光谱，校验失败返回 InvalidSpectrum
    pub fn new(
        x: Vec<f64>,
        y: Vec<f64>,
        absorbing_element: impl Into<String>,
        edge: impl Into<String>,
    ) -> Result<Self> {
        if x.is_empty() {
            return Err(HarvestError::InvalidSpectrum {
                reason: "spectrum contains no sample points".to_string(),
            });
        }
        if x.len() != y.len() {
            return Err(HarvestError::InvalidSpectrum {
                reason: format!(
                    "energy and intensity arrays differ in length ({} vs {})",
                    x.len(),
                    y.len()
                ),
            });
        }
        if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
            return Err(HarvestError::InvalidSpectrum {
                reason: "spectrum contains non-finite values".to_string(),
            });
        }
        if x.windows(2).any(|w| w[1] <= w[0]) {
            return Err(HarvestError::InvalidSpectrum {
                reason: "energy values are not strictly increasing".to_string(),
            });
        }
        // 强度大半为非正值说明记录已损坏
        let non_positive = y.iter().filter(|v| **v <= 0.0).count();
        if non_positive * 2 > y.len() {
            return Err(HarvestError::InvalidSpectrum {
                reason: "most intensity values are non-positive".to_string(),
            });
        }

        Ok(XasSpectrum {
            x,
            y,
            absorbing_element: absorbing_element.into(),
            edge: edge.into(),
        })
    }

    /// 采样点数量
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
