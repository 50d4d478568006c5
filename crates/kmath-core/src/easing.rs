//! Named easing curves.
//!
//! See <https://easings.net/> for plots of most of these. Every curve is
//! evaluated in double precision. The order of [`Easing::ALL`] is part of the
//! binary encoding (a curve is encoded as its index) and must never change.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::math::{ismoothstep, smootherstep, smoothstep};

const BACK_C1: f64 = 1.70158;
const BACK_C2: f64 = 2.5949095;
const BACK_C3: f64 = 2.70158;

const BOUNCE_N1: f64 = 7.5625;
const BOUNCE_D1: f64 = 2.75;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Always `0.0`.
    Min,
    /// Always `1.0`.
    Max,
    /// Always `0.5`.
    Half,
    #[default]
    Linear,
    Smoothstep,
    /// Inverse of [`Easing::Smoothstep`].
    ISmoothstep,
    Smootherstep,
    SineIn,
    SineOut,
    SineInOut,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    QuintIn,
    QuintOut,
    QuintInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    CircIn,
    CircOut,
    CircInOut,
    /// Overshoots below `0.0` before heading to `1.0`.
    BackIn,
    BackOut,
    BackInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
    BounceOut,
    BounceIn,
    BounceInOut,
}

impl Easing {
    /// Every easing, in encoding order.
    pub const ALL: [Easing; 37] = [
        Easing::Min,
        Easing::Max,
        Easing::Half,
        Easing::Linear,
        Easing::Smoothstep,
        Easing::ISmoothstep,
        Easing::Smootherstep,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::QuartIn,
        Easing::QuartOut,
        Easing::QuartInOut,
        Easing::QuintIn,
        Easing::QuintOut,
        Easing::QuintInOut,
        Easing::ExpoIn,
        Easing::ExpoOut,
        Easing::ExpoInOut,
        Easing::CircIn,
        Easing::CircOut,
        Easing::CircInOut,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
        Easing::ElasticIn,
        Easing::ElasticOut,
        Easing::ElasticInOut,
        Easing::BounceOut,
        Easing::BounceIn,
        Easing::BounceInOut,
    ];

    pub fn ease(self, x: f64) -> f64 {
        match self {
            Easing::Min => 0.0,
            Easing::Max => 1.0,
            Easing::Half => 0.5,
            Easing::Linear => x,
            Easing::Smoothstep => smoothstep(x),
            Easing::ISmoothstep => ismoothstep(x),
            Easing::Smootherstep => smootherstep(x),
            Easing::SineIn => 1.0 - (x * PI / 2.0).cos(),
            Easing::SineOut => (x * PI / 2.0).sin(),
            Easing::SineInOut => -((PI * x).cos() - 1.0) / 2.0,
            Easing::QuadIn => x * x,
            Easing::QuadOut => 1.0 - (1.0 - x) * (1.0 - x),
            Easing::QuadInOut => in_out(x, |x| 2.0 * x * x, |x| 1.0 - (-2.0 * x + 2.0).powi(2) / 2.0),
            Easing::CubicIn => x * x * x,
            Easing::CubicOut => 1.0 - (1.0 - x).powi(3),
            Easing::CubicInOut => {
                in_out(x, |x| 4.0 * x * x * x, |x| 1.0 - (-2.0 * x + 2.0).powi(3) / 2.0)
            }
            Easing::QuartIn => x * x * x * x,
            Easing::QuartOut => 1.0 - (1.0 - x).powi(4),
            Easing::QuartInOut => {
                in_out(x, |x| 8.0 * x * x * x * x, |x| 1.0 - (-2.0 * x + 2.0).powi(4) / 2.0)
            }
            Easing::QuintIn => x * x * x * x * x,
            Easing::QuintOut => 1.0 - (1.0 - x).powi(5),
            Easing::QuintInOut => in_out(
                x,
                |x| 16.0 * x * x * x * x * x,
                |x| 1.0 - (-2.0 * x + 2.0).powi(5) / 2.0,
            ),
            Easing::ExpoIn => expo_in(x),
            Easing::ExpoOut => expo_out(x),
            Easing::ExpoInOut => expo_in_out(x),
            Easing::CircIn => 1.0 - (1.0 - x * x).sqrt(),
            Easing::CircOut => (1.0 - (x - 1.0) * (x - 1.0)).sqrt(),
            Easing::CircInOut => in_out(
                x,
                |x| (1.0 - (1.0 - 4.0 * x * x).sqrt()) / 2.0,
                |x| ((1.0 - (-2.0 * x + 2.0).powi(2)).sqrt() + 1.0) / 2.0,
            ),
            Easing::BackIn => x * x * (BACK_C3 * x - BACK_C1),
            Easing::BackOut => 1.0 - (1.0 - x) * (1.0 - x) * (BACK_C3 * (1.0 - x) - BACK_C1),
            Easing::BackInOut => in_out(
                x,
                |x| (2.0 * x).powi(2) * ((BACK_C2 + 1.0) * 2.0 * x - BACK_C2) / 2.0,
                |x| ((2.0 * x - 2.0).powi(2) * ((BACK_C2 + 1.0) * (x * 2.0 - 2.0) + BACK_C2) + 2.0) / 2.0,
            ),
            Easing::ElasticIn => (13.0 * PI / 2.0 * x).sin() * 2f64.powf(10.0 * x - 10.0),
            Easing::ElasticOut => (-13.0 * PI / 2.0 * (x + 1.0)).sin() * 2f64.powf(-10.0 * x) + 1.0,
            Easing::ElasticInOut => in_out(
                x,
                |x| (13.0 * PI / 2.0 * (2.0 * x)).sin() * 2f64.powf(10.0 * (2.0 * x) - 10.0) / 2.0,
                |x| {
                    (-13.0 * PI / 2.0 * (2.0 * x - 1.0)).sin() * 2f64.powf(-10.0 * (2.0 * x - 1.0)) / 2.0
                        + 1.0
                },
            ),
            Easing::BounceOut => bounce_out(x),
            Easing::BounceIn => bounce_in(x),
            Easing::BounceInOut => in_out(x, |x| bounce_in(x * 2.0) / 2.0, |x| bounce_out(x * 2.0 - 1.0) / 2.0 + 0.5),
        }
    }

    /// Evaluates the curve in double precision and rounds the result once.
    pub fn ease_f32(self, x: f32) -> f32 {
        self.ease(f64::from(x)) as f32
    }

    /// The stable serialized name of this curve.
    pub const fn name(self) -> &'static str {
        match self {
            Easing::Min => "min",
            Easing::Max => "max",
            Easing::Half => "half",
            Easing::Linear => "linear",
            Easing::Smoothstep => "smoothstep",
            Easing::ISmoothstep => "ismoothstep",
            Easing::Smootherstep => "smootherstep",
            Easing::SineIn => "sine_in",
            Easing::SineOut => "sine_out",
            Easing::SineInOut => "sine_in_out",
            Easing::QuadIn => "quad_in",
            Easing::QuadOut => "quad_out",
            Easing::QuadInOut => "quad_in_out",
            Easing::CubicIn => "cubic_in",
            Easing::CubicOut => "cubic_out",
            Easing::CubicInOut => "cubic_in_out",
            Easing::QuartIn => "quart_in",
            Easing::QuartOut => "quart_out",
            Easing::QuartInOut => "quart_in_out",
            Easing::QuintIn => "quint_in",
            Easing::QuintOut => "quint_out",
            Easing::QuintInOut => "quint_in_out",
            Easing::ExpoIn => "expo_in",
            Easing::ExpoOut => "expo_out",
            Easing::ExpoInOut => "expo_in_out",
            Easing::CircIn => "circ_in",
            Easing::CircOut => "circ_out",
            Easing::CircInOut => "circ_in_out",
            Easing::BackIn => "back_in",
            Easing::BackOut => "back_out",
            Easing::BackInOut => "back_in_out",
            Easing::ElasticIn => "elastic_in",
            Easing::ElasticOut => "elastic_out",
            Easing::ElasticInOut => "elastic_in_out",
            Easing::BounceOut => "bounce_out",
            Easing::BounceIn => "bounce_in",
            Easing::BounceInOut => "bounce_in_out",
        }
    }

    /// Looks up a curve by its exact serialized name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|easing| easing.name() == name)
            .ok_or_else(|| Error::EasingNotFound(name.to_string()))
    }

    /// The position of this curve in [`Easing::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Splits the domain at `0.5`, evaluating `first` below it and `second` from it on.
#[inline]
fn in_out(x: f64, first: impl Fn(f64) -> f64, second: impl Fn(f64) -> f64) -> f64 {
    if x < 0.5 {
        first(x)
    } else {
        second(x)
    }
}

fn expo_in(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        2f64.powf(10.0 * x - 10.0)
    }
}

fn expo_out(x: f64) -> f64 {
    if x == 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * x)
    }
}

fn expo_in_out(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x == 1.0 {
        1.0
    } else if x < 0.5 {
        2f64.powf(20.0 * x - 10.0) / 2.0
    } else {
        (2.0 - 2f64.powf(-20.0 * x + 10.0)) / 2.0
    }
}

fn bounce_out(x: f64) -> f64 {
    if x < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * x * x
    } else if x < 2.0 / BOUNCE_D1 {
        let x = x - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.75
    } else if x < 2.5 / BOUNCE_D1 {
        let x = x - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.9375
    } else {
        let x = x - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.984375
    }
}

fn bounce_in(x: f64) -> f64 {
    1.0 - bounce_out(1.0 - x)
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Easing {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Easing {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        Easing::from_name(&name).map_err(serde::de::Error::custom)
    }
}
