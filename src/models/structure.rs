//! # 晶体结构数据模型
//!
//! 定义从数据库下载的晶体结构表示。标注步骤会为每个原子位点
//! 补充配位环境描述符（符号 + 尺寸）。
//!
//! ## 依赖关系
//! - 被 `mp/records.rs`、`chemenv/` 和 `table/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 晶格参数表示
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lattice {
    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c
    /// [[a1, a2, a3], [b1, b2, b3], [c1, c2, c3]]
    pub matrix: [[f64; 3]; 3],
}

impl Lattice {
    /// 从晶格参数 (a, b, c, alpha, beta, gamma) 创建晶格
    /// 角度单位：度
    pub fn from_parameters(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        let alpha_rad = alpha.to_radians();
        let beta_rad = beta.to_radians();
        let gamma_rad = gamma.to_radians();

        // 计算晶格向量
        let cos_alpha = alpha_rad.cos();
        let cos_beta = beta_rad.cos();
        let cos_gamma = gamma_rad.cos();
        let sin_gamma = gamma_rad.sin();

        let a_vec = [a, 0.0, 0.0];
        let b_vec = [b * cos_gamma, b * sin_gamma, 0.0];

        let c1 = c * cos_beta;
        let c2 = c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
        let c3 = (c * c - c1 * c1 - c2 * c2).sqrt();
        let c_vec = [c1, c2, c3];

        Lattice {
            matrix: [a_vec, b_vec, c_vec],
        }
    }

    /// 从晶格向量矩阵创建
    pub fn from_vectors(matrix: [[f64; 3]; 3]) -> Self {
        Lattice { matrix }
    }

    /// 获取晶格参数 (a, b, c, alpha, beta, gamma)
    pub fn parameters(&self) -> (f64, f64, f64, f64, f64, f64) {
        let a_vec = self.matrix[0];
        let b_vec = self.matrix[1];
        let c_vec = self.matrix[2];

        let a = (a_vec[0].powi(2) + a_vec[1].powi(2) + a_vec[2].powi(2)).sqrt();
        let b = (b_vec[0].powi(2) + b_vec[1].powi(2) + b_vec[2].powi(2)).sqrt();
        let c = (c_vec[0].powi(2) + c_vec[1].powi(2) + c_vec[2].powi(2)).sqrt();

        let dot_bc: f64 = b_vec.iter().zip(c_vec.iter()).map(|(x, y)| x * y).sum();
        let dot_ac: f64 = a_vec.iter().zip(c_vec.iter()).map(|(x, y)| x * y).sum();
        let dot_ab: f64 = a_vec.iter().zip(b_vec.iter()).map(|(x, y)| x * y).sum();

        let alpha = (dot_bc / (b * c)).acos().to_degrees();
        let beta = (dot_ac / (a * c)).acos().to_degrees();
        let gamma = (dot_ab / (a * b)).acos().to_degrees();

        (a, b, c, alpha, beta, gamma)
    }

    /// 分数坐标转换为笛卡尔坐标 (Å)
    pub fn cartesian(&self, frac: [f64; 3]) -> [f64; 3] {
        let m = &self.matrix;
        [
            frac[0] * m[0][0] + frac[1] * m[1][0] + frac[2] * m[2][0],
            frac[0] * m[0][1] + frac[1] * m[1][1] + frac[2] * m[2][1],
            frac[0] * m[0][2] + frac[1] * m[1][2] + frac[2] * m[2][2],
        ]
    }
}

/// 原子位点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    /// 元素符号
    pub element: String,

    /// 分数坐标 [x, y, z]
    pub frac_coords: [f64; 3],

    /// 配位环境符号（标注成功后填充，如 "O:6"）
    pub symbol: Option<String>,

    /// 配位环境尺寸因子（标注成功后填充，恒为正）
    pub size: Option<f64>,
}

impl Site {
    pub fn new(element: impl Into<String>, frac_coords: [f64; 3]) -> Self {
        Site {
            element: element.into(),
            frac_coords,
            symbol: None,
            size: None,
        }
    }
}

/// 晶体结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    /// 晶格
    pub lattice: Lattice,

    /// 原子位点列表（顺序与数据库记录一致）
    pub sites: Vec<Site>,
}

impl Structure {
    pub fn new(lattice: Lattice, sites: Vec<Site>) -> Self {
        Structure { lattice, sites }
    }

    /// 位点数量
    pub fn num_sites(&self) -> usize {
        self.sites.len()
    }

    /// 按位点顺序返回元素符号，重复元素不去重
    pub fn species_symbols(&self) -> Vec<String> {
        self.sites.iter().map(|s| s.element.clone()).collect()
    }

    /// 位点的笛卡尔坐标 (Å)
    pub fn cartesian_coords(&self, index: usize) -> [f64; 3] {
        self.lattice.cartesian(self.sites[index].frac_coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_from_parameters_cubic() {
        let lattice = Lattice::from_parameters(5.0, 5.0, 5.0, 90.0, 90.0, 90.0);
        let (a, b, c, alpha, beta, gamma) = lattice.parameters();

        assert!((a - 5.0).abs() < 1e-6);
        assert!((b - 5.0).abs() < 1e-6);
        assert!((c - 5.0).abs() < 1e-6);
        assert!((alpha - 90.0).abs() < 1e-6);
        assert!((beta - 90.0).abs() < 1e-6);
        assert!((gamma - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_lattice_hexagonal() {
        let lattice = Lattice::from_parameters(3.0, 3.0, 5.0, 90.0, 90.0, 120.0);
        let (a, b, c, _, _, gamma) = lattice.parameters();

        assert!((a - 3.0).abs() < 0.01);
        assert!((b - 3.0).abs() < 0.01);
        assert!((c - 5.0).abs() < 0.01);
        assert!((gamma - 120.0).abs() < 0.01);
    }

    #[test]
    fn test_lattice_cartesian_cubic() {
        let lattice = Lattice::from_vectors([[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]]);
        let cart = lattice.cartesian([0.5, 0.5, 0.25]);

        assert!((cart[0] - 2.0).abs() < 1e-9);
        assert!((cart[1] - 2.0).abs() < 1e-9);
        assert!((cart[2] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_species_symbols_keep_duplicates_in_site_order() {
        let lattice = Lattice::from_parameters(5.0, 5.0, 5.0, 90.0, 90.0, 90.0);
        let sites = vec![
            Site::new("Fe", [0.0, 0.0, 0.0]),
            Site::new("O", [0.5, 0.0, 0.0]),
            Site::new("Fe", [0.5, 0.5, 0.5]),
            Site::new("O", [0.0, 0.5, 0.5]),
        ];
        let structure = Structure::new(lattice, sites);

        assert_eq!(structure.species_symbols(), vec!["Fe", "O", "Fe", "O"]);
    }

    #[test]
    fn test_new_site_has_no_descriptors() {
        let site = Site::new("Ti", [0.0, 0.0, 0.0]);
        assert!(site.symbol.is_none());
        assert!(site.size.is_none());
    }
}
