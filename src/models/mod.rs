//! # 数据模型模块
//!
//! 定义二维码负载解析后的记录模型。
//!
//! ## 依赖关系
//! - 被 `decoders/`, `batch/` 和 `commands/` 使用
//! - 子模块: record

pub mod record;

pub use record::QrRecord;
