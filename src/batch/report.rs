//! # 扫描统计
//!
//! 统计每个解码后端成功识别的图像数量，并在结束时输出汇总。
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 使用
//! - 使用 `decoders::Backend` 区分后端
//! - 使用 `tabled` 输出表格

use crate::decoders::Backend;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 扫描结果统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// 扫描的图像总数
    pub total: usize,
    /// rqrr 识别成功数
    pub rqrr_detected: usize,
    /// bardecoder 识别成功数
    pub bardecoder_detected: usize,
    /// 实际重命名的文件数
    pub renamed: usize,
}

#[derive(Tabled)]
struct BackendRow {
    #[tabled(rename = "Backend")]
    backend: String,
    #[tabled(rename = "Detected")]
    detected: usize,
    #[tabled(rename = "Failed")]
    failed: usize,
}

impl ScanReport {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    /// 记录一次成功识别
    pub fn record_detection(&mut self, backend: Backend) {
        match backend {
            Backend::Rqrr => self.rqrr_detected += 1,
            Backend::Bardecoder => self.bardecoder_detected += 1,
        }
    }

    pub fn detected(&self, backend: Backend) -> usize {
        match backend {
            Backend::Rqrr => self.rqrr_detected,
            Backend::Bardecoder => self.bardecoder_detected,
        }
    }

    pub fn failed(&self, backend: Backend) -> usize {
        self.total.saturating_sub(self.detected(backend))
    }

    /// 汇总文本（不含表格）
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Total number of images scanned: {}", self.total),
            String::new(),
        ];
        for backend in Backend::ALL {
            lines.push(format!(
                "Num images with {} QR detected: {}",
                backend.label(),
                self.detected(backend)
            ));
            lines.push(format!(
                "Num images {} FAILED: {}",
                backend.label(),
                self.failed(backend)
            ));
            lines.push(String::new());
        }
        lines
    }

    /// 打印汇总
    pub fn print_summary(&self) {
        for line in self.summary_lines() {
            println!("{}", line);
        }

        let rows: Vec<BackendRow> = Backend::ALL
            .iter()
            .map(|&backend| BackendRow {
                backend: backend.label().to_string(),
                detected: self.detected(backend),
                failed: self.failed(backend),
            })
            .collect();
        println!("{}", Table::new(&rows));

        output::print_done(&format!("Renamed {} file(s)", self.renamed));
    }
}
