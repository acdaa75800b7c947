//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。只有一个必填参数：扫描目录。
//! 缺少 `--folder` 时 clap 报告用法错误并以退出码 2 结束。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/scan.rs`

use clap::Parser;
use std::path::PathBuf;

/// barcode-checker - 扫描答题卡图像上的二维码并按内容重命名
#[derive(Parser, Debug)]
#[command(name = "barcode-checker")]
#[command(version)]
#[command(about = "Scan barcodes in the images in a folder.", long_about = None)]
pub struct Cli {
    /// Folder with images to scan.
    #[arg(short, long)]
    pub folder: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_folder_flags() {
        let cli = Cli::try_parse_from(["barcode-checker", "-f", "scans"]).unwrap();
        assert_eq!(cli.folder, PathBuf::from("scans"));

        let cli = Cli::try_parse_from(["barcode-checker", "--folder", "/tmp/pages"]).unwrap();
        assert_eq!(cli.folder, PathBuf::from("/tmp/pages"));
    }

    #[test]
    fn test_missing_folder_is_usage_error() {
        let err = Cli::try_parse_from(["barcode-checker"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
