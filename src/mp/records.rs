//! # 原始 API 记录
//!
//! 数据库 REST 接口返回的 JSON 形状，以及到内部数据模型的转换。
//! 所有端点共用一个 `valid_response`/`response`/`error` 信封。
//!
//! ## 依赖关系
//! - 被 `mp/client.rs` 反序列化使用
//! - 转换目标为 `models/` 数据模型

use serde::Deserialize;

use crate::error::{HarvestError, Result};
use crate::models::{Lattice, Site, Structure, XasSpectrum};

/// 通用响应信封
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub valid_response: bool,
    #[serde(default)]
    pub response: Vec<T>,
    #[serde(default)]
    pub error: Option<String>,
}

/// 结构端点的单条记录
#[derive(Debug, Deserialize)]
pub struct StructureRecord {
    pub structure: RawStructure,
}

/// 序列化的晶体结构
#[derive(Debug, Deserialize)]
pub struct RawStructure {
    pub lattice: RawLattice,
    pub sites: Vec<RawSite>,
}

#[derive(Debug, Deserialize)]
pub struct RawLattice {
    pub matrix: [[f64; 3]; 3],
}

/// 序列化的原子位点，species 按占据度列出
#[derive(Debug, Deserialize)]
pub struct RawSite {
    pub species: Vec<RawSpecies>,
    pub abc: [f64; 3],
}

#[derive(Debug, Deserialize)]
pub struct RawSpecies {
    pub element: String,
    #[serde(default = "default_occupancy")]
    pub occu: f64,
}

fn default_occupancy() -> f64 {
    1.0
}

/// XAS 端点的单条记录
#[derive(Debug, Deserialize)]
pub struct XasRecord {
    pub spectrum: RawSpectrum,
}

/// 原始光谱数据，字段与数据库记录一一对应
#[derive(Debug, Deserialize)]
pub struct RawSpectrum {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub structure: RawStructure,
    pub absorption_specie: String,
    pub edge: String,
}

/// 查询端点的单条记录
#[derive(Debug, Deserialize)]
pub struct QueryRecord {
    pub material_id: String,
}

impl RawStructure {
    /// 转换为内部结构模型，每个位点取占据度最高的 species
    pub fn into_structure(self) -> Result<Structure> {
        let lattice = Lattice::from_vectors(self.lattice.matrix);

        let mut sites = Vec::with_capacity(self.sites.len());
        for (index, raw) in self.sites.into_iter().enumerate() {
            let dominant = raw
                .species
                .into_iter()
                .max_by(|a, b| a.occu.total_cmp(&b.occu))
                .ok_or_else(|| HarvestError::InvalidStructure {
                    reason: format!("site {} lists no species", index),
                })?;
            sites.push(Site::new(dominant.element, raw.abc));
        }

        Ok(Structure::new(lattice, sites))
    }
}

impl XasRecord {
    /// 转换为校验过的光谱对象（光谱构造步骤）
    pub fn into_spectrum(self) -> Result<XasSpectrum> {
        let raw = self.spectrum;

        // 吸收元素必须出现在记录自带的结构里
        let present = raw
            .structure
            .sites
            .iter()
            .any(|site| site.species.iter().any(|s| s.element == raw.absorption_specie));
        if !present {
            return Err(HarvestError::InvalidSpectrum {
                reason: format!(
                    "absorbing element '{}' does not occur in the record's structure",
                    raw.absorption_specie
                ),
            });
        }

        XasSpectrum::new(raw.x, raw.y, raw.absorption_specie, raw.edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRUCTURE_JSON: &str = r#"{
        "valid_response": true,
        "response": [{
            "structure": {
                "lattice": {"matrix": [[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]]},
                "sites": [
                    {"species": [{"element": "Fe", "occu": 1.0}], "abc": [0.0, 0.0, 0.0]},
                    {"species": [{"element": "O", "occu": 1.0}], "abc": [0.5, 0.5, 0.5]}
                ]
            }
        }]
    }"#;

    #[test]
    fn test_parse_structure_envelope() {
        let envelope: ApiEnvelope<StructureRecord> =
            serde_json::from_str(STRUCTURE_JSON).unwrap();
        assert!(envelope.valid_response);
        assert_eq!(envelope.response.len(), 1);

        let structure = envelope
            .response
            .into_iter()
            .next()
            .unwrap()
            .structure
            .into_structure()
            .unwrap();

        assert_eq!(structure.num_sites(), 2);
        assert_eq!(structure.species_symbols(), vec!["Fe", "O"]);
        assert!((structure.lattice.matrix[0][0] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_error_envelope_carries_message() {
        let json = r#"{"valid_response": false, "error": "API key invalid"}"#;
        let envelope: ApiEnvelope<StructureRecord> = serde_json::from_str(json).unwrap();
        assert!(!envelope.valid_response);
        assert!(envelope.response.is_empty());
        assert_eq!(envelope.error.as_deref(), Some("API key invalid"));
    }

    #[test]
    fn test_dominant_species_wins() {
        let json = r#"{
            "lattice": {"matrix": [[3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 3.0]]},
            "sites": [{"species": [
                {"element": "Fe", "occu": 0.25},
                {"element": "Ni", "occu": 0.75}
            ], "abc": [0.0, 0.0, 0.0]}]
        }"#;
        let raw: RawStructure = serde_json::from_str(json).unwrap();
        let structure = raw.into_structure().unwrap();
        assert_eq!(structure.species_symbols(), vec!["Ni"]);
    }

    #[test]
    fn test_site_without_species_is_malformed() {
        let json = r#"{
            "lattice": {"matrix": [[3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 3.0]]},
            "sites": [{"species": [], "abc": [0.0, 0.0, 0.0]}]
        }"#;
        let raw: RawStructure = serde_json::from_str(json).unwrap();
        let err = raw.into_structure().unwrap_err();
        assert!(err.to_string().contains("no species"));
    }

    fn xas_record_json(x: &str, y: &str, specie: &str) -> String {
        format!(
            r#"{{
                "spectrum": {{
                    "x": {x},
                    "y": {y},
                    "structure": {{
                        "lattice": {{"matrix": [[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]]}},
                        "sites": [
                            {{"species": [{{"element": "Fe"}}], "abc": [0.0, 0.0, 0.0]}},
                            {{"species": [{{"element": "O"}}], "abc": [0.5, 0.5, 0.5]}}
                        ]
                    }},
                    "absorption_specie": "{specie}",
                    "edge": "K"
                }}
            }}"#
        )
    }

    #[test]
    fn test_xas_record_to_spectrum() {
        let json = xas_record_json("[7100.0, 7101.0]", "[0.2, 0.8]", "Fe");
        let record: XasRecord = serde_json::from_str(&json).unwrap();
        let spectrum = record.into_spectrum().unwrap();

        assert_eq!(spectrum.len(), 2);
        assert_eq!(spectrum.absorbing_element, "Fe");
        assert_eq!(spectrum.edge, "K");
    }

    #[test]
    fn test_xas_record_with_foreign_absorber_rejected() {
        let json = xas_record_json("[7100.0, 7101.0]", "[0.2, 0.8]", "Cu");
        let record: XasRecord = serde_json::from_str(&json).unwrap();
        let err = record.into_spectrum().unwrap_err();
        assert!(err.to_string().contains("does not occur"));
    }

    #[test]
    fn test_xas_record_with_malformed_samples_rejected() {
        let json = xas_record_json("[7100.0, 7101.0]", "[0.2]", "Fe");
        let record: XasRecord = serde_json::from_str(&json).unwrap();
        assert!(record.into_spectrum().is_err());
    }
}
