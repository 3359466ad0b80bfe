/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

    /// Parse a CSS-style hex color string (`#RGB`, `#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');

        let byte = |s: &str| -> Option<f32> { u8::from_str_radix(s, 16).ok().map(|b| b as f32 / 255.0) };
        // "#abc" is shorthand for "#aabbcc"
        let nibble = |c: char| -> Option<f32> { c.to_digit(16).map(|d| (d * 17) as f32 / 255.0) };

        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            3 => {
                let mut chars = hex.chars();
                Some(Self {
                    r: nibble(chars.next()?)?,
                    g: nibble(chars.next()?)?,
                    b: nibble(chars.next()?)?,
                    a: 1.0,
                })
            }
            6 => Some(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
                a: 1.0,
            }),
            8 => Some(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
                a: byte(&hex[6..8])?,
            }),
            _ => None,
        }
    }

    /// Format as `#rrggbb` (or `#rrggbbaa` when not fully opaque).
    pub fn to_hex(self) -> String {
        let ch = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if ch(self.a) == 255 {
            format!("#{:02x}{:02x}{:02x}", ch(self.r), ch(self.g), ch(self.b))
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", ch(self.r), ch(self.g), ch(self.b), ch(self.a))
        }
    }
}
