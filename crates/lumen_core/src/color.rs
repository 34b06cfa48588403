//! Linear RGB colour helpers.

use lumen_math::Vec3;

/// Color type alias (linear RGB, nominally 0-1 per channel)
pub type Color = Vec3;

/// Named colours used by scenes and tests.
pub mod colors {
    use super::Color;

    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const GRAY: Color = Color::new(0.5, 0.5, 0.5);
}

/// Rescale a colour so that no channel exceeds 1, preserving hue.
///
/// Colours already within range are returned unchanged.
#[inline]
pub fn max_to_one(color: Color) -> Color {
    let max = color.max_element();
    if max > 1.0 {
        color / max
    } else {
        color
    }
}

/// Quantize a colour to 8 bits per channel.
///
/// Applies [`max_to_one`] first; negative channels clamp to 0.
pub fn to_rgb8(color: Color) -> [u8; 3] {
    let c = max_to_one(color).clamp(Vec3::ZERO, Vec3::ONE) * 255.0;
    [c.x as u8, c.y as u8, c.z as u8]
}
