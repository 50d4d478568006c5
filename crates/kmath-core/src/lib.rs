pub mod color;
pub mod easing;
pub mod error;
pub mod math;
pub mod rotation;

#[cfg(feature = "gradient")]
pub mod gradient;

pub use color::Color;
pub use easing::Easing;
pub use error::{Error, Result};
pub use rotation::{AngleUnit, Rotation};

#[cfg(feature = "gradient")]
pub use gradient::{Gradient, PairGradient};
