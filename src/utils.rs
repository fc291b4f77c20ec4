use std::path::Path;

use anyhow::{anyhow, Context, Result};
use fast_image_resize::{images::Image, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::RgbImage;
use log::{debug, info};

/// Decodes `path` into RGB8, resizing to exactly `resize` when given.
///
/// Alpha is dropped, not composited.
pub fn load_rgb_image(path: &Path, resize: Option<(u32, u32)>) -> Result<RgbImage> {
    let img = image::open(path)
        .with_context(|| format!("failed to open image {}", path.display()))?;
    debug!("{} decoded as {:?}", path.display(), img.color());
    let img = img.into_rgb8();
    info!("source image {}x{}", img.width(), img.height());

    match resize {
        Some((width, height)) => resize_bilinear(img, width, height),
        None => Ok(img),
    }
}

pub fn resize_bilinear(src: RgbImage, dst_width: u32, dst_height: u32) -> Result<RgbImage> {
    if src.width() == dst_width && src.height() == dst_height {
        debug!("image already {dst_width}x{dst_height}, skip resize");
        return Ok(src);
    }
    info!(
        "resize {}x{} -> {dst_width}x{dst_height}",
        src.width(),
        src.height()
    );

    let src_image = Image::from_vec_u8(src.width(), src.height(), src.into_raw(), PixelType::U8x3)?;
    let mut dst_image = Image::new(dst_width, dst_height, PixelType::U8x3);

    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear));
    let mut resizer = Resizer::new();
    resizer.resize(&src_image, &mut dst_image, &options)?;

    RgbImage::from_raw(dst_width, dst_height, dst_image.buffer().to_vec())
        .ok_or_else(|| anyhow!("resized buffer does not match {dst_width}x{dst_height}"))
}
