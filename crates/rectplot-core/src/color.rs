//! CSS colors and the rectangle palette.
//!
//! Rectangles without an explicit color take the next entry of
//! [`DEFAULT_PALETTE`], wrapping around after eight.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};

/// Default color cycle for rectangles without an explicit color.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "blue", "red", "green", "orange", "purple", "brown", "pink", "gray",
];

/// A parsed CSS color with alpha.
///
/// Equality and hashing follow the CSS serialization, so `"red"` and
/// `"red"` parsed twice compare equal.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Parses any CSS color: a name, `#rrggbb`, `rgb(..)`, `hsl(..)` and so on.
    ///
    /// ```
    /// use rectplot_core::color::Color;
    ///
    /// assert!(Color::new(" #ff0000 ").is_ok());
    /// assert!(Color::new("navy").is_ok());
    /// assert!(Color::new("reddish").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str.trim()) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Palette color for the rectangle at zero-based `index`.
    ///
    /// ```
    /// use rectplot_core::color::Color;
    ///
    /// assert_eq!(Color::from_palette(0).to_string(), "blue");
    /// assert_eq!(Color::from_palette(9).to_string(), "red");
    /// ```
    pub fn from_palette(index: usize) -> Self {
        let name = DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()];
        Self::new(name).expect("palette entries are valid CSS colors")
    }

    /// Same color with its alpha replaced; `0.0` is fully transparent.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Returns the opaque `#rrggbb` form of this color.
    ///
    /// SVG paint attributes use this form; alpha goes into the matching
    /// `*-opacity` attribute so every renderer agrees on the result.
    ///
    /// ```
    /// use rectplot_core::color::Color;
    ///
    /// let red = Color::new("red").unwrap().with_alpha(0.3);
    /// assert_eq!(red.to_hex(), "#ff0000");
    /// ```
    pub fn to_hex(&self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}
