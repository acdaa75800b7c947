//! # bardecoder 解码后端
//!
//! 使用 bardecoder 的默认流水线（灰度化 → 二值化 → 定位 → 提取 → 解码）。
//!
//! ## 依赖关系
//! - 被 `decoders/mod.rs` 使用
//! - 使用 `bardecoder`, `image`

use super::{Backend, QrBackend};

use bardecoder::Decoder;
use image::{DynamicImage, GrayImage};

/// bardecoder 后端
pub struct BardecoderBackend {
    decoder: Decoder<DynamicImage, GrayImage, String>,
}

impl BardecoderBackend {
    pub fn new() -> Self {
        Self {
            decoder: bardecoder::default_decoder(),
        }
    }
}

impl Default for BardecoderBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl QrBackend for BardecoderBackend {
    fn backend(&self) -> Backend {
        Backend::Bardecoder
    }

    fn detect(&self, image: &DynamicImage) -> Vec<String> {
        self.decoder
            .decode(image)
            .into_iter()
            .filter_map(|result| match result {
                Ok(content) => Some(content),
                Err(e) => {
                    log::debug!("bardecoder: located a code but could not decode it: {}", e);
                    None
                }
            })
            .collect()
    }
}
