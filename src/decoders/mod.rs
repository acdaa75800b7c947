//! # 二维码解码后端
//!
//! 两个互相独立的解码库，统一在 [`QrBackend`] 接口之后：
//! - `rqrr`：后端 A，先运行
//! - `bardecoder`：后端 B，后运行；两者都识别成功时以它的结果为准
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 使用
//! - 使用 `models/record.rs` 解析负载
//! - 子模块: rqrr_backend, bardecoder_backend

pub mod bardecoder_backend;
pub mod rqrr_backend;

pub use bardecoder_backend::BardecoderBackend;
pub use rqrr_backend::RqrrBackend;

use crate::error::Result;
use crate::models::QrRecord;

use image::DynamicImage;
use std::fmt;

/// 解码后端标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Rqrr,
    Bardecoder,
}

impl Backend {
    /// 运行顺序
    pub const ALL: [Backend; 2] = [Backend::Rqrr, Backend::Bardecoder];

    /// 输出中使用的名称
    pub fn label(&self) -> &'static str {
        match self {
            Backend::Rqrr => "RQRR",
            Backend::Bardecoder => "BARDECODER",
        }
    }

    /// 状态行前缀：(识别成功, 未识别)
    pub fn markers(&self) -> (&'static str, &'static str) {
        match self {
            Backend::Rqrr => ("++++", "===="),
            Backend::Bardecoder => ("oooo", "xxxx"),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 二维码解码能力
pub trait QrBackend {
    /// 后端标识
    fn backend(&self) -> Backend;

    /// 返回图像中所有成功解码的二维码文本，按检测顺序排列
    fn detect(&self, image: &DynamicImage) -> Vec<String>;
}

/// 用指定后端读取图像上的记录
///
/// 每页只应有一个二维码，因此只取第一个负载。未检测到二维码时返回
/// `Ok(None)`；检测到但负载无法解析时返回错误，由调用方决定如何处理。
pub fn read_record(
    backend: &dyn QrBackend,
    image: &DynamicImage,
    file_name: &str,
) -> Result<Option<QrRecord>> {
    let payloads = backend.detect(image);
    let payload = match payloads.first() {
        Some(payload) => payload,
        None => return Ok(None),
    };
    log::debug!("{} payload for {}: {}", backend.backend(), file_name, payload);

    QrRecord::from_payload(payload)
}

/// 标准后端组合，按运行顺序排列
pub fn default_backends() -> Vec<Box<dyn QrBackend>> {
    let backends: Vec<Box<dyn QrBackend>> =
        vec![Box::new(RqrrBackend), Box::new(BardecoderBackend::new())];
    backends
}
