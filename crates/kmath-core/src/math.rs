use std::f64::consts::PI;

pub use euclid;

/// A position in world space.
///
/// Alias for ```euclid::default::Point3D<f64>```.
pub type Point3 = euclid::default::Point3D<f64>;

/// A direction or offset in world space.
///
/// Alias for ```euclid::default::Vector3D<f64>```.
pub type Vec3 = euclid::default::Vector3D<f64>;

/// A direction or offset in world space, single precision.
///
/// Alias for ```euclid::default::Vector3D<f32>```.
pub type Vec3f = euclid::default::Vector3D<f32>;

/// A pair of view angles, `x` being the pitch and `y` the yaw.
///
/// Alias for ```euclid::default::Vector2D<f32>```.
pub type Vec2f = euclid::default::Vector2D<f32>;

/// Alias for ```euclid::default::Transform3D<f32>```
pub type Mat4 = euclid::default::Transform3D<f32>;

/// An angle in radians (f32).
///
/// Alias for ```euclid::Angle<f32>```
pub type Angle = euclid::Angle<f32>;

pub const HALF_PI: f64 = PI / 2.0;

/// Multiply radians by this to get degrees.
pub const TO_DEG: f64 = 180.0 / PI;
/// Multiply degrees by this to get radians.
pub const TO_RAD: f64 = PI / 180.0;

pub const F_TO_DEG: f32 = TO_DEG as f32;
pub const F_TO_RAD: f32 = TO_RAD as f32;

/// Maximum difference at which two floats are considered the same value.
pub const SIMILARITY_EPSILON: f32 = 1.0e-4;

#[inline]
pub fn lerp(delta: f32, start: f32, end: f32) -> f32 {
    start + delta * (end - start)
}

#[inline]
pub fn lerp_f64(delta: f64, start: f64, end: f64) -> f64 {
    start + delta * (end - start)
}

/// Interpolates between two 8 bit channels, rounding to the nearest value.
#[inline]
pub fn lerp_u8(delta: f32, start: u8, end: u8) -> u8 {
    // `as` saturates, so extrapolated deltas stay in 0..=255.
    lerp(delta, f32::from(start), f32::from(end)).round() as u8
}

#[inline]
pub fn smoothstep(x: f64) -> f64 {
    x * x * (3.0 - 2.0 * x)
}

/// The inverse of [`smoothstep`] over `[0, 1]`.
#[inline]
pub fn ismoothstep(x: f64) -> f64 {
    0.5 - ((1.0 - 2.0 * x).asin() / 3.0).sin()
}

#[inline]
pub fn smootherstep(x: f64) -> f64 {
    x * x * x * (x * (x * 6.0 - 15.0) + 10.0)
}

#[inline]
pub fn are_floats_similar(a: f32, b: f32) -> bool {
    (a - b).abs() < SIMILARITY_EPSILON
}

/// Shorthand for `Point3::new(x, y, z)`.
#[inline]
pub const fn point3(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

/// Shorthand for `Angle { radians: value }`.
#[inline]
pub const fn radians(radians: f32) -> Angle {
    Angle { radians }
}

/// Shorthand for `Angle { radians: value * PI / 180.0 }`.
#[inline]
pub fn degrees(degrees: f32) -> Angle {
    Angle {
        radians: degrees * F_TO_RAD,
    }
}
