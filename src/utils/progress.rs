//! # 进度条工具
//!
//! 封装 `indicatif`，逐张图像推进，消息栏显示当前文件名。
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};

/// 创建扫描进度条
pub fn create_scan_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}",
        )
        .unwrap()
        .progress_chars("#>-"),
    );
    pb
}
