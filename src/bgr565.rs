use image::RgbImage;

/// A 16bit pixel that has 5 blue bits, 6 green bits and 5 red bits
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Bgr565Pixel(pub u16);

impl Bgr565Pixel {
    const B_MASK: u16 = 0b1111_1000_0000_0000;
    const G_MASK: u16 = 0b0000_0111_1110_0000;
    const R_MASK: u16 = 0b0000_0000_0001_1111;

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r5 = (r as u16 >> 3) & 0x1F;
        let g6 = (g as u16 >> 2) & 0x3F;
        let b5 = (b as u16 >> 3) & 0x1F;
        Self((b5 << 11) | (g6 << 5) | r5)
    }

    /// Return the red component as a u8.
    ///
    /// The bits are shifted so that the result is between 0 and 255
    pub fn red(self) -> u8 {
        ((self.0 & Self::R_MASK) << 3) as u8
    }
    /// Return the green component as a u8.
    ///
    /// The bits are shifted so that the result is between 0 and 255
    pub fn green(self) -> u8 {
        ((self.0 & Self::G_MASK) >> 3) as u8
    }
    /// Return the blue component as a u8.
    ///
    /// The bits are shifted so that the result is between 0 and 255
    pub fn blue(self) -> u8 {
        ((self.0 & Self::B_MASK) >> 8) as u8
    }

    /// The two bytes as they are stored on disk: high byte first.
    pub fn to_swapped_bytes(self) -> [u8; 2] {
        self.0.swap_bytes().to_le_bytes()
    }

    pub fn from_swapped_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes).swap_bytes())
    }
}

/// Packs row-major RGB888 triples into byte-swapped BGR565 words.
///
/// A trailing partial triple is ignored.
pub fn pack(rgb: &[u8]) -> Vec<u8> {
    let mut bgr565 = Vec::with_capacity(rgb.len() / 3 * 2);
    for p in rgb.chunks_exact(3) {
        let pixel = Bgr565Pixel::from_rgb(p[0], p[1], p[2]);
        bgr565.extend_from_slice(&pixel.to_swapped_bytes());
    }
    bgr565
}

/// Expands a packed stream back into an RGB image of `width` x `height`.
///
/// Pixels missing from a short stream stay black.
pub fn unpack(packed: &[u8], width: u32, height: u32) -> RgbImage {
    let mut rgb = RgbImage::new(width, height);
    for (p, bytes) in rgb.pixels_mut().zip(packed.chunks_exact(2)) {
        let pixel = Bgr565Pixel::from_swapped_bytes([bytes[0], bytes[1]]);
        p[0] = pixel.red();
        p[1] = pixel.green();
        p[2] = pixel.blue();
    }
    rgb
}
