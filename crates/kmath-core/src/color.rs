//! Packed 32 bit ARGB colors.
//!
//! Conversions to and from the [`rgb`](https://crates.io/crates/rgb) crate's
//! 8 bit types are provided so colors can be handed to APIs built on it.

use std::fmt;
use std::str::FromStr;

pub use rgb::{RGB8, RGBA8};

use crate::error::{Error, Result};
use crate::math::{lerp, lerp_u8};

/// A color packed as `0xAARRGGBB`.
///
/// Equality and hashing are by the packed value.
#[repr(transparent)]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, bytemuck::Zeroable, bytemuck::Pod)]
pub struct Color(pub u32);

/// The reserved color names accepted by [`Color::parse`].
const NAMED_COLORS: [(&str, Color); 9] = [
    ("transparent", Color::TRANSPARENT),
    ("white", Color::WHITE),
    ("black", Color::BLACK),
    ("red", Color::RED),
    ("green", Color::GREEN),
    ("blue", Color::BLUE),
    ("yellow", Color::YELLOW),
    ("magenta", Color::MAGENTA),
    ("cyan", Color::CYAN),
];

impl Color {
    /// A color with no opacity
    pub const TRANSPARENT: Self = Self(0x00000000);
    /// The color white with full opacity
    pub const WHITE: Self = Self(0xFFFFFFFF);
    /// The color black with full opacity
    pub const BLACK: Self = Self(0xFF000000);
    pub const RED: Self = Self(0xFFFF0000);
    pub const GREEN: Self = Self(0xFF00FF00);
    pub const BLUE: Self = Self(0xFF0000FF);
    pub const YELLOW: Self = Self(0xFFFFFF00);
    pub const MAGENTA: Self = Self(0xFFFF00FF);
    pub const CYAN: Self = Self(0xFF00FFFF);

    /// Creates a [`Color`] from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Creates a fully opaque [`Color`] from a packed `0xRRGGBB` value.
    ///
    /// Any bits above the low 24 are ignored.
    pub const fn from_rgb(rgb: u32) -> Self {
        Self(0xFF000000 | (rgb & 0xFFFFFF))
    }

    /// Creates a [`Color`] from 8 bit ARGB components.
    pub const fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Creates a fully opaque [`Color`] from 8 bit RGB components.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_channels(255, r, g, b)
    }

    /// Creates a [`Color`] from normalized ARGB components.
    ///
    /// Each component is scaled by 255 and truncated. Components outside of
    /// `0.0..=1.0` are clamped.
    pub fn from_f32(a: f32, r: f32, g: f32, b: f32) -> Self {
        let in_range = [a, r, g, b].iter().all(|c| (0.0..=1.0).contains(c));

        if !in_range {
            log::warn!("Color components must be within 0.0..=1.0 range, got ({a}, {r}, {g}, {b}).");
        }

        fn channel(c: f32) -> u8 {
            (c.clamp(0.0, 1.0) * 255.0) as u8
        }

        Self::from_channels(channel(a), channel(r), channel(g), channel(b))
    }

    /// Creates a [`Color`] from hue, saturation and brightness, each in `0.0..=1.0`.
    ///
    /// The hue wraps around, so `1.25` is the same hue as `0.25`.
    pub fn hsb(hue: f32, saturation: f32, brightness: f32, alpha: u8) -> Self {
        // `rem_euclid` rounds tiny negative hues up to exactly `1.0`.
        let h = (hue.rem_euclid(1.0) * 6.0) % 6.0;
        let sector = h as u32;
        let f = h - sector as f32;

        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - f * saturation);
        let t = brightness * (1.0 - (1.0 - f) * saturation);

        let (r, g, b) = match sector {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };

        Self::from_channels(
            alpha,
            (r * 255.0) as u8,
            (g * 255.0) as u8,
            (b * 255.0) as u8,
        )
    }

    /// Returns the color with the given reserved name, if any.
    pub fn named(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, color)| *color)
    }

    /// Returns the reserved name of this color, if it has one.
    pub fn name(&self) -> Option<&'static str> {
        NAMED_COLORS
            .iter()
            .find(|(_, color)| color == self)
            .map(|(name, _)| *name)
    }

    /// Parses `#RRGGBB`, `#AARRGGBB` or one of the reserved color names.
    pub fn parse(s: &str) -> Result<Self> {
        if let Some(color) = Self::named(s) {
            return Ok(color);
        }

        let invalid = || Error::InvalidColorFormat(s.to_string());

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;

        if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;

        if hex.len() == 6 {
            Ok(Self::from_rgb(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Parses a color like [`Color::parse`] and then replaces its alpha.
    pub fn parse_with_alpha(s: &str, alpha: u8) -> Result<Self> {
        Self::parse(s).map(|color| color.with_alpha(alpha))
    }

    /// The packed `0xAARRGGBB` value.
    pub const fn argb(&self) -> u32 {
        self.0
    }

    /// The packed `0xRRGGBB` value without alpha.
    pub const fn rgb(&self) -> u32 {
        self.0 & 0xFFFFFF
    }

    /// The alpha channel.
    pub const fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The red channel.
    pub const fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// The green channel.
    pub const fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// The blue channel.
    pub const fn blue(&self) -> u8 {
        self.0 as u8
    }

    /// The alpha channel in `0.0..=1.0`.
    pub fn alpha_f32(&self) -> f32 {
        f32::from(self.alpha()) / 255.0
    }

    /// The red channel in `0.0..=1.0`.
    pub fn red_f32(&self) -> f32 {
        f32::from(self.red()) / 255.0
    }

    /// The green channel in `0.0..=1.0`.
    pub fn green_f32(&self) -> f32 {
        f32::from(self.green()) / 255.0
    }

    /// The blue channel in `0.0..=1.0`.
    pub fn blue_f32(&self) -> f32 {
        f32::from(self.blue()) / 255.0
    }

    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self::from_channels(alpha, self.red(), self.green(), self.blue())
    }

    /// Replaces the alpha with a normalized value, truncated to 8 bits.
    pub fn with_alpha_f32(self, alpha: f32) -> Self {
        self.with_alpha((alpha * 255.0) as u8)
    }

    /// Fades the color out over the last `fade_duration` of `max_time`.
    ///
    /// Colors whose lifetime is shorter than the fade window are never faded.
    pub fn fade_out(self, time: f32, max_time: f32, fade_duration: f32) -> Self {
        if max_time < fade_duration {
            log::trace!("fade window {fade_duration} does not fit in lifetime {max_time}");
            self
        } else if time >= max_time {
            self.with_alpha(0)
        } else if time >= max_time - fade_duration {
            self.with_alpha_f32(lerp(
                (max_time - time) / fade_duration,
                0.0,
                self.alpha_f32(),
            ))
        } else {
            self
        }
    }

    /// Linearly interpolates every channel, alpha included.
    pub fn lerp(self, delta: f32, other: Color) -> Self {
        if delta <= 0.0 || self == other {
            self
        } else if delta >= 1.0 {
            other
        } else {
            Self::from_channels(
                lerp_u8(delta, self.alpha(), other.alpha()),
                lerp_u8(delta, self.red(), other.red()),
                lerp_u8(delta, self.green(), other.green()),
                lerp_u8(delta, self.blue(), other.blue()),
            )
        }
    }

    /// Linearly interpolates the color channels and forces the result's alpha.
    pub fn lerp_with_alpha(self, delta: f32, other: Color, alpha: u8) -> Self {
        if delta <= 0.0 && alpha == self.alpha() {
            self
        } else if delta >= 1.0 && alpha == other.alpha() {
            other
        } else {
            Self::from_channels(
                alpha,
                lerp_u8(delta, self.red(), other.red()),
                lerp_u8(delta, self.green(), other.green()),
                lerp_u8(delta, self.blue(), other.blue()),
            )
        }
    }

    pub const fn is_transparent(&self) -> bool {
        self.alpha() == 0
    }

    /// The packed ARGB value, or `None` when fully transparent.
    pub const fn to_optional_argb(&self) -> Option<u32> {
        if self.is_transparent() {
            None
        } else {
            Some(self.0)
        }
    }

    /// The packed RGB value, or `None` when fully transparent.
    pub const fn to_optional_rgb(&self) -> Option<u32> {
        if self.is_transparent() {
            None
        } else {
            Some(self.rgb())
        }
    }

    /// The packed value with red and blue swapped, for APIs that expect `0xAABBGGRR`.
    pub const fn abgr(&self) -> u32 {
        (self.0 & 0xFF00FF00) | ((self.0 & 0x00FF0000) >> 16) | ((self.0 & 0x000000FF) << 16)
    }

    pub fn to_rgb_string(&self) -> String {
        format!("#{:06X}", self.rgb())
    }

    pub fn to_argb_string(&self) -> String {
        format!("#{:08X}", self.0)
    }

    pub fn hue(&self) -> f32 {
        self.to_hsb()[0]
    }

    /// Returns `[hue, saturation, brightness]`, each in `0.0..=1.0`.
    ///
    /// The hue is always below `1.0`.
    pub fn to_hsb(&self) -> [f32; 3] {
        let (r, g, b) = (self.red(), self.green(), self.blue());

        let cmax = r.max(g).max(b);
        let cmin = r.min(g).min(b);

        let brightness = f32::from(cmax) / 255.0;

        let saturation = if cmax != 0 {
            f32::from(cmax - cmin) / f32::from(cmax)
        } else {
            0.0
        };

        let hue = if saturation == 0.0 {
            0.0
        } else {
            let range = f32::from(cmax - cmin);
            let redc = f32::from(cmax - r) / range;
            let greenc = f32::from(cmax - g) / range;
            let bluec = f32::from(cmax - b) / range;

            let mut hue = if r == cmax {
                bluec - greenc
            } else if g == cmax {
                2.0 + redc - bluec
            } else {
                4.0 + greenc - redc
            };

            hue /= 6.0;

            if hue < 0.0 {
                hue += 1.0;
            }

            hue
        };

        [hue, saturation, brightness]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha() == 255 {
            write!(f, "#{:06X}", self.rgb())
        } else {
            write!(f, "#{:08X}", self.0)
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<RGBA8> for Color {
    fn from(color: RGBA8) -> Self {
        Self::from_channels(color.a, color.r, color.g, color.b)
    }
}

impl From<RGB8> for Color {
    fn from(color: RGB8) -> Self {
        Self::from_rgb8(color.r, color.g, color.b)
    }
}

impl From<Color> for RGBA8 {
    fn from(color: Color) -> Self {
        RGBA8 {
            r: color.red(),
            g: color.green(),
            b: color.blue(),
            a: color.alpha(),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_round_trip() {
        for (a, r, g, b) in [(0, 0, 0, 0), (255, 1, 2, 3), (128, 200, 100, 50), (7, 255, 0, 255)] {
            let c = Color::from_channels(a, r, g, b);
            assert_eq!(c.alpha(), a);
            assert_eq!(c.red(), r);
            assert_eq!(c.green(), g);
            assert_eq!(c.blue(), b);
        }
    }

    #[test]
    fn named_constants() {
        assert_eq!(Color::from_channels(255, 255, 0, 0), Color::RED);
        assert_eq!(Color::from_rgb8(0, 255, 255), Color::CYAN);
        assert_eq!(Color::from_argb(0), Color::TRANSPARENT);
        assert_eq!(Color::default(), Color::TRANSPARENT);
        assert_eq!(Color::MAGENTA.name(), Some("magenta"));
        assert_eq!(Color::from_argb(0xFF123456).name(), None);
    }

    #[test]
    fn normalized_channels() {
        let c = Color::from_argb(0xFF00337F);
        assert_eq!(c.alpha_f32(), 1.0);
        assert_eq!(c.red_f32(), 0.0);
        assert!((c.green_f32() - 0.2).abs() < 1e-6);
        assert!((c.blue_f32() - 127.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn from_f32_truncates_and_clamps() {
        assert_eq!(Color::from_f32(1.0, 1.0, 0.5, 0.0), Color::from_argb(0xFFFF7F00));
        assert_eq!(Color::from_f32(2.0, -1.0, 0.0, 0.0), Color::BLACK);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Color::from_argb(0xFF112233);
        assert_eq!(c.with_alpha(0x80), Color::from_argb(0x80112233));
        assert_eq!(c.with_alpha_f32(0.5), Color::from_argb(0x7F112233));
        assert_eq!(c.with_alpha(0).rgb(), 0x112233);
    }

    #[test]
    fn formatting() {
        assert_eq!(Color::from_argb(0xFF112233).to_rgb_string(), "#112233");
        assert_eq!(Color::from_argb(0x80112233).to_argb_string(), "#80112233");
        assert_eq!(Color::from_argb(0xFFABCDEF).to_string(), "#ABCDEF");
        assert_eq!(Color::from_argb(0x00ABCDEF).to_string(), "#00ABCDEF");
    }

    #[test]
    fn parsing() {
        assert_eq!(Color::parse("#112233"), Ok(Color::from_argb(0xFF112233)));
        assert_eq!(Color::parse("#80112233"), Ok(Color::from_argb(0x80112233)));
        assert_eq!(Color::parse("#abcdef"), Ok(Color::from_argb(0xFFABCDEF)));
        assert_eq!(Color::parse("yellow"), Ok(Color::YELLOW));
        assert_eq!("transparent".parse::<Color>(), Ok(Color::TRANSPARENT));
        assert_eq!(Color::parse_with_alpha("red", 0x40), Ok(Color::from_argb(0x40FF0000)));
    }

    #[test]
    fn parsing_rejects_other_shapes() {
        for s in ["", "#", "112233", "#12345", "#1234567", "#GG2233", "#+1234567", "Red", "#1122334455"] {
            assert_eq!(
                Color::parse(s),
                Err(Error::InvalidColorFormat(s.to_string())),
                "{s:?} should not parse"
            );
        }
    }

    #[test]
    fn text_round_trip() {
        for argb in [0x00000000, 0xFF000000, 0x12345678, 0xFFFFFFFF, 0x7F7F7F7F, 0xFEDCBA98] {
            let c = Color::from_argb(argb);
            assert_eq!(Color::parse(&c.to_string()), Ok(c));
        }
    }

    #[test]
    fn lerp_short_circuits() {
        let a = Color::from_argb(0xFF102030);
        let b = Color::from_argb(0x80F0E0D0);
        assert_eq!(a.lerp(0.0, b), a);
        assert_eq!(a.lerp(-1.0, b), a);
        assert_eq!(a.lerp(1.0, b), b);
        assert_eq!(a.lerp(3.0, b), b);
        for t in [0.0, 0.3, 0.5, 1.0] {
            assert_eq!(a.lerp(t, a), a);
        }
    }

    #[test]
    fn lerp_rounds_each_channel() {
        let c = Color::BLACK.lerp(0.5, Color::WHITE);
        assert_eq!(c, Color::from_argb(0xFF808080));

        let c = Color::TRANSPARENT.lerp(0.25, Color::from_argb(0x0A0A0A0A));
        assert_eq!(c, Color::from_argb(0x03030303));
    }

    #[test]
    fn lerp_with_forced_alpha() {
        let a = Color::from_argb(0xFF000000);
        let b = Color::from_argb(0xFF646464);
        assert_eq!(a.lerp_with_alpha(0.0, b, 255), a);
        assert_eq!(a.lerp_with_alpha(1.0, b, 255), b);
        assert_eq!(a.lerp_with_alpha(0.0, b, 0x10), Color::from_argb(0x10000000));
        assert_eq!(a.lerp_with_alpha(0.5, b, 0x10), Color::from_argb(0x10323232));
    }

    #[test]
    fn fade_out_window() {
        let c = Color::WHITE;
        assert_eq!(c.fade_out(5.0, 10.0, 4.0), c);
        assert_eq!(c.fade_out(10.0, 10.0, 4.0), c.with_alpha(0));
        assert_eq!(c.fade_out(12.0, 10.0, 4.0), c.with_alpha(0));
        assert_eq!(c.fade_out(6.0, 10.0, 4.0), c);
        assert_eq!(c.fade_out(8.0, 10.0, 4.0), c.with_alpha(127));
    }

    #[test]
    fn fade_out_skipped_when_window_does_not_fit() {
        let c = Color::WHITE;
        assert_eq!(c.fade_out(100.0, 2.0, 4.0), c);
    }

    #[test]
    fn hsb_decomposition() {
        assert_eq!(Color::RED.to_hsb(), [0.0, 1.0, 1.0]);
        assert_eq!(Color::BLACK.to_hsb(), [0.0, 0.0, 0.0]);
        assert_eq!(Color::WHITE.to_hsb(), [0.0, 0.0, 1.0]);

        assert!((Color::GREEN.hue() - 1.0 / 3.0).abs() < 1e-6);
        assert!((Color::BLUE.hue() - 2.0 / 3.0).abs() < 1e-6);
        assert!((Color::MAGENTA.hue() - 5.0 / 6.0).abs() < 1e-6);

        let [h, s, b] = Color::from_rgb8(255, 0, 1).to_hsb();
        assert!(h > 0.99 && h < 1.0);
        assert_eq!(s, 1.0);
        assert_eq!(b, 1.0);
    }

    #[test]
    fn hsb_construction() {
        assert_eq!(Color::hsb(0.0, 1.0, 1.0, 255), Color::RED);
        assert_eq!(Color::hsb(1.0 / 3.0, 1.0, 1.0, 255).green(), 255);
        assert_eq!(Color::hsb(0.5, 0.0, 1.0, 0x80), Color::WHITE.with_alpha(0x80));
        assert_eq!(Color::hsb(0.0, 0.0, 0.0, 255), Color::BLACK);
    }

    #[test]
    fn hsb_hue_wraps_around() {
        assert_eq!(Color::hsb(1.25, 1.0, 1.0, 255), Color::hsb(0.25, 1.0, 1.0, 255));
        assert_eq!(Color::hsb(-0.75, 1.0, 1.0, 255), Color::hsb(0.25, 1.0, 1.0, 255));
        assert_eq!(Color::hsb(-0.5, 0.5, 0.8, 255), Color::hsb(0.5, 0.5, 0.8, 255));
        assert_eq!(Color::hsb(1.0, 1.0, 1.0, 255), Color::RED);

        // Just below zero wraps to the top of the range, which is still red.
        assert_eq!(Color::hsb(-1.0e-9, 1.0, 1.0, 255), Color::RED);
        assert_eq!(Color::hsb(0.99999999, 1.0, 1.0, 255), Color::RED);
    }

    #[test]
    fn abgr_swaps_red_and_blue() {
        assert_eq!(Color::from_argb(0x80112233).abgr(), 0x80332211);
        assert_eq!(Color::RED.abgr(), 0xFF0000FF);
        assert_eq!(Color::GREEN.abgr(), Color::GREEN.argb());
    }

    #[test]
    fn optional_values() {
        assert_eq!(Color::TRANSPARENT.to_optional_argb(), None);
        assert_eq!(Color::from_argb(0x00FFFFFF).to_optional_rgb(), None);
        assert_eq!(Color::from_argb(0x01123456).to_optional_rgb(), Some(0x123456));
        assert_eq!(Color::WHITE.to_optional_argb(), Some(0xFFFFFFFF));
    }

    #[test]
    fn rgb_crate_conversions() {
        let c = Color::from_argb(0x80112233);
        let rgba: RGBA8 = c.into();
        assert_eq!(rgba, RGBA8::new(0x11, 0x22, 0x33, 0x80));
        assert_eq!(Color::from(rgba), c);
        assert_eq!(Color::from(RGB8::new(1, 2, 3)), Color::from_argb(0xFF010203));
    }

    #[test]
    fn casts_as_raw_bytes() {
        let colors = [Color::RED, Color::BLUE];
        let words: &[u32] = bytemuck::cast_slice(&colors);
        assert_eq!(words, &[0xFFFF0000, 0xFF0000FF]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_text_form() {
        let json = serde_json::to_string(&Color::from_argb(0x80112233)).unwrap();
        assert_eq!(json, "\"#80112233\"");
        let c: Color = serde_json::from_str("\"cyan\"").unwrap();
        assert_eq!(c, Color::CYAN);
        assert!(serde_json::from_str::<Color>("\"#12\"").is_err());
    }
}
