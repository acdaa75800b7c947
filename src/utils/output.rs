//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被 `commands/`, `batch/report.rs` 和 `main.rs` 使用
//! - 使用 `colored` crate

use crate::decoders::Backend;
use colored::Colorize;

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印跳过消息
pub fn print_skip(msg: &str) {
    println!("{} {}", "[SKIP]".dimmed(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印某个后端识别成功
pub fn print_detected(backend: Backend, file_name: &str, record: &str) {
    let (marker, _) = backend.markers();
    println!(
        "{} {}: {}: {}",
        marker.green().bold(),
        backend.label().bold(),
        file_name,
        record
    );
}

/// 打印某个后端未识别
pub fn print_missed(backend: Backend, file_name: &str) {
    let (_, marker) = backend.markers();
    println!(
        "{} {}: {}: {}",
        marker.red().bold(),
        backend.label().bold(),
        file_name,
        "No QR found!!!".red()
    );
}

/// 打印重命名消息
pub fn print_rename(from: &str, to: &str) {
    println!(
        "{} {} {} {}",
        "[OK]".green().bold(),
        from.dimmed(),
        "->".cyan(),
        to
    );
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}
