//! # 统一错误处理模块
//!
//! 定义 mpharvest 的所有错误类型，使用 `thiserror` 派生。
//! 每个下载/校验步骤都有独立的错误变体，调用方可以区分
//! 网络失败、API 拒绝和数据校验失败。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// mpharvest 统一错误类型
#[derive(Error, Debug)]
pub enum HarvestError {
    // ─────────────────────────────────────────────────────────────
    // 网络 / API 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Request to {url} failed")]
    RequestError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Materials Project API rejected the request: {message}")]
    ApiError { message: String },

    #[error("No {kind} record for '{material_id}' in the database")]
    MissingRecord { kind: String, material_id: String },

    // ─────────────────────────────────────────────────────────────
    // 数据校验错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed structure record: {reason}")]
    InvalidStructure { reason: String },

    #[error("Invalid spectrum data: {reason}")]
    InvalidSpectrum { reason: String },

    #[error("Site {index} carries no coordination descriptors")]
    MissingDescriptors { index: usize },

    // ─────────────────────────────────────────────────────────────
    // 写出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Nothing to write: the {table} table is empty")]
    EmptyTable { table: String },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read material ids from input")]
    InputReadError {
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 序列化错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, HarvestError>;
