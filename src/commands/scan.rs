//! # scan 命令实现
//!
//! 扫描目录下的 `*.jpg` 图像，识别二维码并按记录重命名。
//!
//! ## 功能
//! - 按自然顺序逐张处理（单线程）
//! - 每张图像依次交给所有解码后端，后运行的后端结果覆盖先运行的
//! - 识别到记录时重命名，避开已有文件名
//! - 单张图像失败只记警告，不中断整批
//! - 结束时输出每个后端的识别统计
//!
//! ## 依赖关系
//! - 使用 `cli.rs` 定义的参数
//! - 使用 `batch/`, `decoders/`, `models/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{renamer, FileCollector, RenameOutcome, ScanReport};
use crate::cli::Cli;
use crate::decoders::{self, Backend, QrBackend};
use crate::error::{Result, ScanError};
use crate::models::QrRecord;
use crate::utils::{output, progress};

use image::DynamicImage;
use std::path::{Path, PathBuf};

/// 待扫描文件的匹配模式（大小写不敏感）
pub const IMAGE_PATTERN: &str = "*.jpg";

/// 执行 scan 命令
pub fn execute(args: Cli) -> Result<()> {
    output::print_header("Scanning QR codes");

    let files = FileCollector::new(&args.folder)
        .with_pattern(IMAGE_PATTERN)
        .collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            IMAGE_PATTERN,
            args.folder.display()
        ));
    } else {
        output::print_info(&format!("Found {} image(s) to scan", files.len()));
    }

    let scanner = Scanner::new(&args.folder, decoders::default_backends());
    let report = scanner.run(&files);
    report.print_summary();

    Ok(())
}

/// 单张图像处理过程中产生的状态行，处理结束后统一输出
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Detected(Backend, String),
    Missed(Backend),
    Warning(String),
    Renamed { from: String, to: String },
    Unchanged,
}

impl Status {
    fn print(&self, file_name: &str) {
        match self {
            Status::Detected(backend, record) => {
                output::print_detected(*backend, file_name, record)
            }
            Status::Missed(backend) => output::print_missed(*backend, file_name),
            Status::Warning(msg) => output::print_warning(msg),
            Status::Renamed { from, to } => output::print_rename(from, to),
            Status::Unchanged => {
                output::print_skip(&format!("{} already matches its QR code", file_name))
            }
        }
    }
}

/// 逐张扫描图像的处理器
pub struct Scanner {
    folder: PathBuf,
    /// 按运行顺序排列
    backends: Vec<Box<dyn QrBackend>>,
}

impl Scanner {
    pub fn new(folder: impl Into<PathBuf>, backends: Vec<Box<dyn QrBackend>>) -> Self {
        Self {
            folder: folder.into(),
            backends,
        }
    }

    /// 处理文件列表，返回统计结果
    ///
    /// 单张图像的任何失败（无法读取、负载无效、重命名失败）都只影响该图像。
    pub fn run(&self, files: &[String]) -> ScanReport {
        let mut report = ScanReport::new(files.len());
        let pb = progress::create_scan_bar(files.len() as u64);

        for file_name in files {
            pb.set_message(file_name.clone());
            let statuses = self.process(file_name, &mut report);
            pb.suspend(|| {
                for status in &statuses {
                    status.print(file_name);
                }
                println!();
            });
            pb.inc(1);
        }

        pb.finish_and_clear();
        report
    }

    /// 处理单张图像，返回待输出的状态行
    fn process(&self, file_name: &str, report: &mut ScanReport) -> Vec<Status> {
        let path = self.folder.join(file_name);
        let mut statuses = Vec::new();

        let image = match load_image(&path) {
            Ok(image) => image,
            Err(e) => {
                log::error!("{}", e);
                statuses.push(Status::Warning(format!(
                    "{}: unreadable image, skipped",
                    file_name
                )));
                statuses.extend(self.backends.iter().map(|b| Status::Missed(b.backend())));
                return statuses;
            }
        };

        let record = match self.decode(&image, file_name, report, &mut statuses) {
            Some(record) => record,
            None => return statuses,
        };

        match renamer::apply(&self.folder, file_name, &record) {
            Ok(RenameOutcome::Renamed { from, to }) => {
                report.renamed += 1;
                statuses.push(Status::Renamed { from, to });
            }
            Ok(RenameOutcome::Unchanged) => statuses.push(Status::Unchanged),
            Err(e) => {
                log::error!("{}", e);
                statuses.push(Status::Warning(format!(
                    "{}: {}, file left unchanged",
                    file_name, e
                )));
            }
        }

        statuses
    }

    /// 依次运行所有后端，返回最后一个成功后端的记录
    fn decode(
        &self,
        image: &DynamicImage,
        file_name: &str,
        report: &mut ScanReport,
        statuses: &mut Vec<Status>,
    ) -> Option<QrRecord> {
        let mut chosen = None;

        for backend in &self.backends {
            let kind = backend.backend();
            match decoders::read_record(backend.as_ref(), image, file_name) {
                Ok(Some(record)) => {
                    report.record_detection(kind);
                    statuses.push(Status::Detected(kind, record.to_string()));
                    chosen = Some(record);
                }
                Ok(None) => statuses.push(Status::Missed(kind)),
                Err(e) => {
                    log::error!("{}: {}: {}", kind, file_name, e);
                    statuses.push(Status::Warning(format!("{}: {}: {}", kind, file_name, e)));
                    statuses.push(Status::Missed(kind));
                }
            }
        }

        chosen
    }
}

/// 读取图像
fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| ScanError::ImageLoadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
