//! # 批量处理模块
//!
//! 提供扫描目录下图像的批量处理能力。
//!
//! ## 功能
//! - 收集匹配文件列表（大小写不敏感、自然排序）
//! - 按二维码记录重命名，避免文件名冲突
//! - 每个解码后端的识别统计
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 使用
//! - 使用 `walkdir` / `glob` 收集文件
//! - 使用 `tabled` 输出统计表格

pub mod collector;
pub mod natural;
pub mod renamer;
pub mod report;

pub use collector::FileCollector;
pub use renamer::RenameOutcome;
pub use report::ScanReport;
