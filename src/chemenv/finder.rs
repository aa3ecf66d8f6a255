//! # 配位环境识别器
//!
//! 基于最近邻壳层的简化配位环境分析。
//!
//! ## 算法概述
//! 1. 在 3x3x3 周期映像内计算位点到所有原子的距离
//! 2. 以最近邻距离 d_min 为基准，收集 d <= d_min * 因子 的邻居壳层
//! 3. 壳层原子数作为配位数，查参考几何表得到符号
//! 4. 尺寸因子 = 壳层平均距离 / d_min
//!
//! ## 依赖关系
//! - 被 `commands/harvest.rs` 调用
//! - 使用 `models/structure.rs` 的 Structure
//! - 使用 `chemenv/geometries.rs` 查询参考几何

use crate::chemenv::geometries;
use crate::models::Structure;

/// 邻居壳层的最大距离因子（相对最近邻距离）
pub const MAX_DISTANCE_FACTOR: f64 = 1.41;

/// 单个位点的配位环境描述符
#[derive(Debug, Clone)]
pub struct SiteEnvironment {
    /// 几何符号，如 "O:6"
    pub symbol: String,
    /// 尺寸因子（壳层平均距离 / 最近邻距离，恒 >= 1）
    pub size: f64,
}

/// 配位环境识别器
pub struct GeometryFinder {
    /// 邻居壳层距离因子
    max_distance_factor: f64,
}

impl Default for GeometryFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryFinder {
    /// 使用默认距离因子创建识别器
    pub fn new() -> Self {
        Self {
            max_distance_factor: MAX_DISTANCE_FACTOR,
        }
    }

    /// 使用自定义距离因子创建识别器
    pub fn with_max_distance_factor(max_distance_factor: f64) -> Self {
        Self {
            max_distance_factor,
        }
    }

    /// 计算单个位点的配位环境，配位数超出参考几何表时返回 None
    pub fn site_environment(
        &self,
        structure: &Structure,
        index: usize,
    ) -> Option<SiteEnvironment> {
        let distances = self.neighbor_distances(structure, index);
        let d_min = distances.iter().copied().fold(f64::INFINITY, f64::min);
        if !d_min.is_finite() || d_min <= 0.0 {
            return None;
        }

        let cutoff = d_min * self.max_distance_factor;
        let shell: Vec<f64> = distances.into_iter().filter(|d| *d <= cutoff).collect();

        let geometry = geometries::by_coordination(shell.len())?;
        let mean = shell.iter().sum::<f64>() / shell.len() as f64;

        Some(SiteEnvironment {
            symbol: geometry.symbol.to_string(),
            size: mean / d_min,
        })
    }

    /// 位点到 3x3x3 周期映像内所有原子的距离（排除自身的零距离像）
    fn neighbor_distances(&self, structure: &Structure, index: usize) -> Vec<f64> {
        let center = structure.cartesian_coords(index);
        let mut distances = Vec::new();

        for (j, site) in structure.sites.iter().enumerate() {
            for ia in -1i32..=1 {
                for ib in -1i32..=1 {
                    for ic in -1i32..=1 {
                        if j == index && ia == 0 && ib == 0 && ic == 0 {
                            continue;
                        }
                        let frac = [
                            site.frac_coords[0] + ia as f64,
                            site.frac_coords[1] + ib as f64,
                            site.frac_coords[2] + ic as f64,
                        ];
                        let cart = structure.lattice.cartesian(frac);
                        let dx = cart[0] - center[0];
                        let dy = cart[1] - center[1];
                        let dz = cart[2] - center[2];
                        distances.push((dx * dx + dy * dy + dz * dz).sqrt());
                    }
                }
            }
        }

        distances
    }
}

/// 为结构中的每个位点计算配位环境描述符并写入位点属性。
/// 任一位点无法分类则整体失败，结构保持未修改。
pub fn annotate_structure(structure: &mut Structure) -> bool {
    let finder = GeometryFinder::new();

    let mut environments = Vec::with_capacity(structure.num_sites());
    for index in 0..structure.num_sites() {
        match finder.site_environment(structure, index) {
            Some(env) => environments.push(env),
            None => return false,
        }
    }

    for (site, env) in structure.sites.iter_mut().zip(environments) {
        site.symbol = Some(env.symbol);
        site.size = Some(env.size);
    }

    true
}
