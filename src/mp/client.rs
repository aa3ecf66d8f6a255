//! # 数据库 HTTP 客户端
//!
//! Materials Project 风格 REST 接口的阻塞式客户端。
//! 凭证通过 `X-API-KEY` 请求头携带，每次请求受超时约束，
//! 超时与网络错误一样按该步骤的抓取失败处理。
//!
//! ## 依赖关系
//! - 实现 `mp/mod.rs` 的 MaterialsDatabase trait
//! - 使用 `mp/records.rs` 的记录形状
//! - 使用 `reqwest` (blocking) 与 `serde_json`

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{HarvestError, Result};
use crate::models::Structure;
use crate::mp::records::{ApiEnvelope, QueryRecord, StructureRecord, XasRecord};
use crate::mp::MaterialsDatabase;

/// 默认接口地址
pub const DEFAULT_BASE_URL: &str = "https://legacy.materialsproject.org/rest/v2";

/// 数据库客户端
pub struct MpClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl MpClient {
    /// 创建客户端，每次请求的超时以秒计
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| HarvestError::RequestError {
                url: DEFAULT_BASE_URL.to_string(),
                source: e,
            })?;

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// 覆盖接口地址（镜像站点）
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// GET 请求并反序列化响应信封
    fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiEnvelope<T>> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .header("X-API-KEY", &self.api_key)
            .query(query)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| HarvestError::RequestError {
                url: url.clone(),
                source: e,
            })?;

        response
            .json::<ApiEnvelope<T>>()
            .map_err(|e| HarvestError::RequestError { url, source: e })
    }

    /// 解开信封：API 拒绝、记录缺失分别映射到独立错误变体
    fn unwrap_envelope<T>(
        envelope: ApiEnvelope<T>,
        kind: &str,
        material_id: &str,
    ) -> Result<T> {
        if !envelope.valid_response {
            return Err(HarvestError::ApiError {
                message: envelope
                    .error
                    .unwrap_or_else(|| "no error message supplied".to_string()),
            });
        }

        envelope
            .response
            .into_iter()
            .next()
            .ok_or_else(|| HarvestError::MissingRecord {
                kind: kind.to_string(),
                material_id: material_id.to_string(),
            })
    }

    /// 按条件查询材料 id 列表（id 发现辅助工具使用）
    pub fn query_material_ids(&self, criteria: &serde_json::Value) -> Result<Vec<String>> {
        let url = format!("{}/query", self.base_url);
        let body = serde_json::json!({
            "criteria": criteria,
            "properties": ["material_id"],
        });

        let response = self
            .http
            .post(&url)
            .header("X-API-KEY", &self.api_key)
            .json(&body)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| HarvestError::RequestError {
                url: url.clone(),
                source: e,
            })?;

        let envelope: ApiEnvelope<QueryRecord> = response
            .json()
            .map_err(|e| HarvestError::RequestError { url, source: e })?;

        if !envelope.valid_response {
            return Err(HarvestError::ApiError {
                message: envelope
                    .error
                    .unwrap_or_else(|| "no error message supplied".to_string()),
            });
        }

        Ok(envelope
            .response
            .into_iter()
            .map(|record| record.material_id)
            .collect())
    }
}

impl MaterialsDatabase for MpClient {
    fn structure(&self, material_id: &str) -> Result<Structure> {
        // 最终弛豫结构，非常规晶胞
        let envelope = self.get_envelope::<StructureRecord>(
            &format!("materials/{}/structure", material_id),
            &[("final", "true"), ("conventional", "false")],
        )?;
        let record = Self::unwrap_envelope(envelope, "structure", material_id)?;
        record.structure.into_structure()
    }

    fn xas_record(&self, material_id: &str, element: &str) -> Result<XasRecord> {
        let envelope = self.get_envelope::<XasRecord>(
            &format!("xas/{}", material_id),
            &[("absorbing_element", element)],
        )?;
        Self::unwrap_envelope(envelope, "XAS", material_id)
    }
}
