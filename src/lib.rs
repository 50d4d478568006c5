//! Colors, gradients, easing curves and rotation math.
//!
//! Every type in this crate is an immutable value, so all operations are pure
//! and safe to call from any thread.

pub use kmath_core::*;

pub mod prelude {
    pub use kmath_core::math::{point3, Point3, Vec3, Vec3f};
    pub use kmath_core::{AngleUnit, Color, Easing, Error, Rotation};

    #[cfg(feature = "gradient")]
    pub use kmath_core::{Gradient, PairGradient};
}
