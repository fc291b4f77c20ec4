use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::{bgr565, utils::load_rgb_image};

#[derive(Clone, Debug)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub resize: Option<(u32, u32)>,
    //量化后的预览图
    pub preview: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvertReport {
    pub width: u32,
    pub height: u32,
    pub bytes: usize,
}

pub fn convert(options: &ConvertOptions) -> Result<ConvertReport> {
    let img = load_rgb_image(&options.input, options.resize)?;
    let (width, height) = img.dimensions();

    let packed = bgr565::pack(img.as_raw());
    drop(img);

    std::fs::write(&options.output, &packed)
        .with_context(|| format!("failed to write {}", options.output.display()))?;
    info!(
        "{} bytes ({width}x{height}) written to {}",
        packed.len(),
        options.output.display()
    );

    if let Some(preview) = &options.preview {
        bgr565::unpack(&packed, width, height)
            .save(preview)
            .with_context(|| format!("failed to save preview {}", preview.display()))?;
        info!("preview saved to {}", preview.display());
    }

    Ok(ConvertReport {
        width,
        height,
        bytes: packed.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bgr565-{}-{name}", std::process::id()))
    }

    #[test]
    fn convert_without_resize() -> Result<()> {
        let input = temp_path("plain.png");
        let output = temp_path("plain.raw");
        RgbImage::from_fn(4, 3, |x, _| if x == 0 { Rgb([255, 0, 0]) } else { Rgb([0, 0, 0]) })
            .save(&input)?;

        let report = convert(&ConvertOptions {
            input: input.clone(),
            output: output.clone(),
            resize: None,
            preview: None,
        })?;
        let bytes = std::fs::read(&output)?;
        assert_eq!(report, ConvertReport { width: 4, height: 3, bytes: 24 });
        assert_eq!(bytes.len(), 24);
        assert_eq!(&bytes[0..4], &[0x00, 0x1F, 0x00, 0x00]);

        std::fs::remove_file(input)?;
        std::fs::remove_file(output)?;
        Ok(())
    }

    #[test]
    fn resize_sets_output_length() -> Result<()> {
        let input = temp_path("resize.png");
        let output = temp_path("resize.raw");
        RgbImage::from_pixel(50, 30, Rgb([12, 34, 56])).save(&input)?;

        convert(&ConvertOptions {
            input: input.clone(),
            output: output.clone(),
            resize: Some((16, 9)),
            preview: None,
        })?;
        assert_eq!(std::fs::read(&output)?.len(), 2 * 16 * 9);

        std::fs::remove_file(input)?;
        std::fs::remove_file(output)?;
        Ok(())
    }

    #[test]
    fn alpha_is_dropped() -> Result<()> {
        let input = temp_path("alpha.png");
        let output = temp_path("alpha.raw");
        RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 0])).save(&input)?;

        convert(&ConvertOptions {
            input: input.clone(),
            output: output.clone(),
            resize: None,
            preview: None,
        })?;
        assert_eq!(std::fs::read(&output)?, vec![0xFF; 8]);

        std::fs::remove_file(input)?;
        std::fs::remove_file(output)?;
        Ok(())
    }

    #[test]
    fn preview_matches_quantized_pixels() -> Result<()> {
        let input = temp_path("preview-src.png");
        let output = temp_path("preview.raw");
        let preview = temp_path("preview.png");
        RgbImage::from_pixel(3, 3, Rgb([201, 103, 55])).save(&input)?;

        convert(&ConvertOptions {
            input: input.clone(),
            output: output.clone(),
            resize: None,
            preview: Some(preview.clone()),
        })?;
        let img = image::open(&preview)?.into_rgb8();
        assert_eq!(img.dimensions(), (3, 3));
        assert!(img.pixels().all(|p| p.0 == [200, 100, 48]));

        std::fs::remove_file(input)?;
        std::fs::remove_file(output)?;
        std::fs::remove_file(preview)?;
        Ok(())
    }

    #[test]
    fn missing_input_fails() {
        let result = convert(&ConvertOptions {
            input: temp_path("missing.png"),
            output: temp_path("missing.raw"),
            resize: None,
            preview: None,
        });
        assert!(result.is_err());
        assert!(!temp_path("missing.raw").exists());
    }
}
