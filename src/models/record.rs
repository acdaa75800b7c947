//! # 二维码记录数据模型
//!
//! 答题卡扫描页上二维码携带的 JSON 负载：
//!
//! ```text
//! {"rb_id": 101, "set_id": 1, "name": "Alice Smith", "page": 1}
//! ```
//!
//! 没有可用记录时以 `None` 表示（而不是全部字段为空的记录）。
//!
//! ## 依赖关系
//! - 被 `decoders/` 和 `batch/renamer.rs` 使用
//! - 使用 `serde` / `serde_json` 解析负载

use crate::error::{Result, ScanError};
use serde::Deserialize;
use serde_json::error::Category;
use std::fmt;

/// 记录编号 / 套题编号，负载中可能是数字也可能是字符串
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Number(n) => write!(f, "{}", n),
            Identifier::Text(s) => write!(f, "{}", s),
        }
    }
}

/// 从二维码解析出的完整记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRecord {
    /// 答题册编号（负载中的 `rb_id`）
    pub record_id: Identifier,
    /// 套题编号
    pub set_id: Identifier,
    /// 学生姓名
    pub name: String,
    /// 页码，从 1 开始
    pub page: u32,
}

/// 负载原始形态，字段均可缺失或为 null
#[derive(Debug, Deserialize)]
struct RawPayload {
    rb_id: Option<Identifier>,
    set_id: Option<Identifier>,
    name: Option<String>,
    page: Option<u32>,
}

impl QrRecord {
    /// 解析二维码文本负载
    ///
    /// - 非法 JSON → `InvalidPayload`
    /// - JSON 合法但字段类型不符 → `MalformedPayload`
    /// - 没有 `page` → `Ok(None)`，与未检测到二维码等同
    /// - 有 `page` 但缺少其他字段 → `IncompletePayload`
    pub fn from_payload(payload: &str) -> Result<Option<QrRecord>> {
        let raw: RawPayload = serde_json::from_str(payload).map_err(|e| match e.classify() {
            Category::Data => ScanError::MalformedPayload {
                reason: e.to_string(),
            },
            Category::Io | Category::Syntax | Category::Eof => ScanError::InvalidPayload {
                reason: e.to_string(),
            },
        })?;

        let page = match raw.page {
            Some(page) => page,
            None => return Ok(None),
        };

        let record_id = raw
            .rb_id
            .ok_or(ScanError::IncompletePayload { field: "rb_id" })?;
        let set_id = raw
            .set_id
            .ok_or(ScanError::IncompletePayload { field: "set_id" })?;
        let name = raw
            .name
            .ok_or(ScanError::IncompletePayload { field: "name" })?;

        Ok(Some(QrRecord {
            record_id,
            set_id,
            name,
            page,
        }))
    }
}

impl fmt::Display for QrRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rb_id={} set_id={} name=\"{}\" page={}",
            self.record_id, self.set_id, self.name, self.page
        )
    }
}
