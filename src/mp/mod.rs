//! # 远程数据库模块
//!
//! 封装对材料数据库 REST 接口的访问。抓取面由
//! `MaterialsDatabase` trait 描述，摄取循环只依赖该 trait，
//! 测试时用脚本化的桩实现替换 HTTP 客户端。
//!
//! ## 子模块
//! - `client`: 阻塞式 HTTP 客户端实现
//! - `records`: 原始 API 记录形状与模型转换
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/` 数据模型

pub mod client;
pub mod records;

use crate::error::Result;
use crate::models::Structure;
use crate::mp::records::XasRecord;

pub use client::MpClient;

/// 摄取循环消费的抓取面
///
/// 结构抓取直接返回解析好的模型；光谱抓取返回原始记录，
/// 由调用方执行校验构造，抓取失败与校验失败得以区分。
pub trait MaterialsDatabase {
    /// 按材料 id 抓取最终结构
    fn structure(&self, material_id: &str) -> Result<Structure>;

    /// 按 (材料 id, 吸收元素) 抓取原始 XAS 记录
    fn xas_record(&self, material_id: &str, element: &str) -> Result<XasRecord>;
}
