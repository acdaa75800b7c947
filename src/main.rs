//! # barcode-checker - 答题卡扫描页二维码整理工具
//!
//! 扫描目录中的 `*.jpg` 图像，用两个独立的解码库识别页面上的二维码，
//! 解析其中的 JSON 负载（学生姓名、答题册编号、套题编号、页码），
//! 并据此重命名图像文件。结束时输出每个解码库的识别统计。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli.rs      (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/    (文件收集、重命名、统计)
//!   │     ├── decoders/ (二维码解码后端)
//!   │     └── models/   (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod decoders;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        log::debug!("fatal: {:?}", e);
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
