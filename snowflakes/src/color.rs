use serde::{Deserialize, Serialize};

/// Packed `0xAARRGGBB` color.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize, Hash)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffff_ffff);
    pub const BLACK: Color = Color(0xff00_0000);

    pub const fn from_argb(alpha: u8, red: u8, green: u8, blue: u8) -> Color {
        Color((alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    pub const fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(&self) -> u8 {
        self.0 as u8
    }

    /// Replaces the alpha channel, leaving the color channels untouched.
    pub const fn with_alpha(&self, alpha: u8) -> Color {
        Color((self.0 & 0x00ff_ffff) | (alpha as u32) << 24)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_unpack_from_argb() {
        let color = Color::from_argb(0x80, 0x12, 0x34, 0x56);

        assert_eq!(color, Color(0x8012_3456));
        assert_eq!(color.alpha(), 0x80);
        assert_eq!(color.red(), 0x12);
        assert_eq!(color.green(), 0x34);
        assert_eq!(color.blue(), 0x56);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let color = Color(0xff12_3456).with_alpha(0x07);

        assert_eq!(color, Color(0x0712_3456));
    }
}
