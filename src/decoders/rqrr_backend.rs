//! # rqrr 解码后端
//!
//! 纯 Rust 的 QR 识别库。图像先转为 8 位灰度，再交给 rqrr 定位和解码。
//!
//! ## 依赖关系
//! - 被 `decoders/mod.rs` 使用
//! - 使用 `rqrr`, `image`

use super::{Backend, QrBackend};

use image::DynamicImage;
use rqrr::PreparedImage;

/// rqrr 后端
#[derive(Debug, Default, Clone, Copy)]
pub struct RqrrBackend;

impl QrBackend for RqrrBackend {
    fn backend(&self) -> Backend {
        Backend::Rqrr
    }

    fn detect(&self, image: &DynamicImage) -> Vec<String> {
        let gray = image.to_luma8();
        let mut prepared = PreparedImage::prepare_from_greyscale(
            gray.width() as usize,
            gray.height() as usize,
            |x, y| gray.get_pixel(x as u32, y as u32).0[0],
        );

        prepared
            .detect_grids()
            .into_iter()
            .filter_map(|grid| match grid.decode() {
                Ok((_meta, content)) => Some(content),
                Err(e) => {
                    log::debug!("rqrr: located a grid but could not decode it: {}", e);
                    None
                }
            })
            .collect()
    }
}
