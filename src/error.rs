//! # 统一错误处理模块
//!
//! 定义 barcode-checker 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// barcode-checker 统一错误类型
#[derive(Error, Debug)]
pub enum ScanError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to rename '{from}' to '{to}'")]
    RenameError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 图像与二维码负载错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to load image: {path}\nReason: {reason}")]
    ImageLoadError { path: String, reason: String },

    #[error("QR payload is not valid JSON: {reason}")]
    InvalidPayload { reason: String },

    #[error("QR payload is malformed: {reason}")]
    MalformedPayload { reason: String },

    #[error("QR payload has a page but no '{field}' field")]
    IncompletePayload { field: &'static str },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ScanError>;
