//! # 参考配位几何数据库
//!
//! 按配位数索引的参考几何构型表。符号沿用配位环境分析的
//! 通用记号（几何缩写:配位数）。
//!
//! ## 依赖关系
//! - 被 `chemenv/finder.rs` 调用查询几何符号
//! - 纯静态数据，无外部依赖

use std::collections::HashMap;
use std::sync::LazyLock;

/// 参考配位几何
#[derive(Debug, Clone, Copy)]
pub struct CoordinationGeometry {
    /// 几何符号，如 "O:6"
    pub symbol: &'static str,
    /// 几何名称
    pub name: &'static str,
}

/// 配位数 -> 参考几何
pub static COORDINATION_GEOMETRIES: LazyLock<HashMap<usize, CoordinationGeometry>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();

        m.insert(
            1,
            CoordinationGeometry {
                symbol: "S:1",
                name: "Single neighbor",
            },
        );
        m.insert(
            2,
            CoordinationGeometry {
                symbol: "L:2",
                name: "Linear",
            },
        );
        m.insert(
            3,
            CoordinationGeometry {
                symbol: "TL:3",
                name: "Trigonal plane",
            },
        );
        m.insert(
            4,
            CoordinationGeometry {
                symbol: "T:4",
                name: "Tetrahedron",
            },
        );
        m.insert(
            5,
            CoordinationGeometry {
                symbol: "T:5",
                name: "Trigonal bipyramid",
            },
        );
        m.insert(
            6,
            CoordinationGeometry {
                symbol: "O:6",
                name: "Octahedron",
            },
        );
        m.insert(
            7,
            CoordinationGeometry {
                symbol: "PB:7",
                name: "Pentagonal bipyramid",
            },
        );
        m.insert(
            8,
            CoordinationGeometry {
                symbol: "C:8",
                name: "Cube",
            },
        );

        m
    });

/// 按配位数查询参考几何，超出表范围返回 None
pub fn by_coordination(cn: usize) -> Option<CoordinationGeometry> {
    COORDINATION_GEOMETRIES.get(&cn).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octahedron_lookup() {
        let geometry = by_coordination(6).unwrap();
        assert_eq!(geometry.symbol, "O:6");
        assert_eq!(geometry.name, "Octahedron");
    }

    #[test]
    fn test_tetrahedron_lookup() {
        assert_eq!(by_coordination(4).unwrap().symbol, "T:4");
    }

    #[test]
    fn test_out_of_table_coordination_is_none() {
        assert!(by_coordination(0).is_none());
        assert!(by_coordination(14).is_none());
    }
}
