//! Hex color parsing shared by the validator and the stylesheet renderer.

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `#RGB` (leading `#` required, any case)
    ///
    /// Returns `None` for anything else, including surrounding whitespace.
    pub fn from_hex(color: &str) -> Option<Self> {
        let hex = color.strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            6 => Some(Self {
                r: u8::from_str_radix(&hex[0..2], 16).ok()?,
                g: u8::from_str_radix(&hex[2..4], 16).ok()?,
                b: u8::from_str_radix(&hex[4..6], 16).ok()?,
            }),
            3 => {
                // #abc is shorthand for #aabbcc
                let expand = |i: usize| u8::from_str_radix(&hex[i..i + 1].repeat(2), 16).ok();
                Some(Self {
                    r: expand(0)?,
                    g: expand(1)?,
                    b: expand(2)?,
                })
            }
            _ => None,
        }
    }

    /// Lowercase, zero-padded `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// True for `#RRGGBB` and `#RGB`
pub fn is_hex_color(color: &str) -> bool {
    Rgb::from_hex(color).is_some()
}
