//! Luma conversion using ITU-R BT.601 coefficients.
//!
//! These are the weights used by the classic JPEG/YCbCr colour model, so a
//! grayscale raster produced here re-encodes to a JPEG whose Y channel matches.

/// ITU-R BT.601 coefficient for red channel.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green channel.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue channel.
pub const LUMA_B: f32 = 0.114;

/// Calculate luma from u8 RGB values (0 to 255).
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let y = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    y.clamp(0.0, 255.0).round() as u8
}

/// Premultiply a colour channel by its alpha (compositing onto black).
#[inline]
pub fn premultiply(channel: u8, alpha: u8) -> u8 {
    if alpha == u8::MAX {
        return channel;
    }
    ((channel as u32 * alpha as u32 + 127) / 255) as u8
}

/// Calculate luma of an RGBA pixel as it would appear composited onto black.
#[inline]
pub fn luma_rgba(px: [u8; 4]) -> u8 {
    let [r, g, b, a] = px;
    luma_u8(premultiply(r, a), premultiply(g, a), premultiply(b, a))
}
