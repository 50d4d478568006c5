//! Yaw/pitch/roll orientations.
//!
//! A [`Rotation`] keeps the unit its components were given in, so values read
//! back in that unit are exactly the values that were stored. Yaw turns about
//! the vertical axis, pitch about the lateral axis and roll about the forward
//! axis. Positive pitch looks down.

use std::fmt;

use smallvec::{smallvec, SmallVec};

use crate::error::{Error, Result};
use crate::math::{
    are_floats_similar, lerp, radians, Mat4, Point3, Vec2f, Vec3, Vec3f, F_TO_DEG, F_TO_RAD,
    HALF_PI,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    Deg,
    Rad,
}

impl AngleUnit {
    /// The all-zero rotation in this unit.
    pub const fn none(self) -> Rotation {
        Rotation {
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            unit: self,
        }
    }

    /// Creates a rotation in this unit, returning [`AngleUnit::none`] when every component is zero.
    pub fn of(self, yaw: f32, pitch: f32, roll: f32) -> Rotation {
        if yaw == 0.0 && pitch == 0.0 && roll == 0.0 {
            self.none()
        } else {
            Rotation {
                yaw,
                pitch,
                roll,
                unit: self,
            }
        }
    }

    /// The size of a full turn in this unit.
    pub fn full_turn(self) -> f32 {
        match self {
            AngleUnit::Deg => 360.0,
            AngleUnit::Rad => std::f32::consts::TAU,
        }
    }

    fn to_deg(self, value: f32) -> f32 {
        match self {
            AngleUnit::Deg => value,
            AngleUnit::Rad => value * F_TO_DEG,
        }
    }

    fn to_rad(self, value: f32) -> f32 {
        match self {
            AngleUnit::Deg => value * F_TO_RAD,
            AngleUnit::Rad => value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    yaw: f32,
    pitch: f32,
    roll: f32,
    unit: AngleUnit,
}

impl Rotation {
    /// No rotation.
    pub const NONE: Rotation = AngleUnit::Rad.none();

    pub fn deg(yaw: f32, pitch: f32, roll: f32) -> Self {
        AngleUnit::Deg.of(yaw, pitch, roll)
    }

    pub fn deg_yaw_pitch(yaw: f32, pitch: f32) -> Self {
        AngleUnit::Deg.of(yaw, pitch, 0.0)
    }

    pub fn deg_yaw(yaw: f32) -> Self {
        AngleUnit::Deg.of(yaw, 0.0, 0.0)
    }

    pub fn rad(yaw: f32, pitch: f32, roll: f32) -> Self {
        AngleUnit::Rad.of(yaw, pitch, roll)
    }

    pub fn rad_yaw_pitch(yaw: f32, pitch: f32) -> Self {
        AngleUnit::Rad.of(yaw, pitch, 0.0)
    }

    pub fn rad_yaw(yaw: f32) -> Self {
        AngleUnit::Rad.of(yaw, 0.0, 0.0)
    }

    /// Creates a rotation from view angles in degrees, `x` being the pitch and `y` the yaw.
    pub fn from_view_angles(angles: Vec2f) -> Self {
        Self::deg_yaw_pitch(angles.y, angles.x)
    }

    /// The rotation that faces `target` from `source`, in radians.
    pub fn compute(source: Point3, target: Point3) -> Self {
        Self::compute_with_roll(source, target, 0.0)
    }

    pub fn compute_with_roll(source: Point3, target: Point3, roll: f32) -> Self {
        let d = target - source;

        // Zero yaw faces +Z.
        let yaw = d.z.atan2(d.x) - HALF_PI;
        let pitch = -d.y.atan2((d.x * d.x + d.z * d.z).sqrt());

        Self::rad(yaw as f32, pitch as f32, roll)
    }

    /// The raw yaw in [`Rotation::unit`].
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// The raw pitch in [`Rotation::unit`].
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// The raw roll in [`Rotation::unit`].
    pub fn roll(&self) -> f32 {
        self.roll
    }

    pub fn unit(&self) -> AngleUnit {
        self.unit
    }

    pub fn yaw_deg(&self) -> f32 {
        self.unit.to_deg(self.yaw)
    }

    pub fn pitch_deg(&self) -> f32 {
        self.unit.to_deg(self.pitch)
    }

    pub fn roll_deg(&self) -> f32 {
        self.unit.to_deg(self.roll)
    }

    pub fn yaw_rad(&self) -> f32 {
        self.unit.to_rad(self.yaw)
    }

    pub fn pitch_rad(&self) -> f32 {
        self.unit.to_rad(self.pitch)
    }

    pub fn roll_rad(&self) -> f32 {
        self.unit.to_rad(self.roll)
    }

    pub fn to_deg(self) -> Self {
        if self.is_none() || self.unit == AngleUnit::Deg {
            self
        } else {
            Self {
                yaw: self.yaw_deg(),
                pitch: self.pitch_deg(),
                roll: self.roll_deg(),
                unit: AngleUnit::Deg,
            }
        }
    }

    pub fn to_rad(self) -> Self {
        if self.is_none() || self.unit == AngleUnit::Rad {
            self
        } else {
            Self {
                yaw: self.yaw_rad(),
                pitch: self.pitch_rad(),
                roll: self.roll_rad(),
                unit: AngleUnit::Rad,
            }
        }
    }

    /// Interpolates every component.
    ///
    /// Rotations in the same unit are interpolated in that unit. Otherwise
    /// both are interpolated in degrees and the result is in degrees.
    pub fn lerp(self, delta: f32, to: Rotation) -> Self {
        if self.unit == to.unit {
            self.unit.of(
                lerp(delta, self.yaw, to.yaw),
                lerp(delta, self.pitch, to.pitch),
                lerp(delta, self.roll, to.roll),
            )
        } else {
            Self::deg(
                lerp(delta, self.yaw_deg(), to.yaw_deg()),
                lerp(delta, self.pitch_deg(), to.pitch_deg()),
                lerp(delta, self.roll_deg(), to.roll_deg()),
            )
        }
    }

    /// The direction this rotation faces, scaled to `dist`. Roll is ignored.
    pub fn look_vec3(&self, dist: f64) -> Vec3 {
        let [x, y, z] = self.look_components();
        Vec3::new(
            f64::from(x) * dist,
            f64::from(y) * dist,
            f64::from(z) * dist,
        )
    }

    pub fn look_vec3f(&self, dist: f32) -> Vec3f {
        let [x, y, z] = self.look_components();
        Vec3f::new(x * dist, y * dist, z * dist)
    }

    fn look_components(&self) -> [f32; 3] {
        let (ys, yc) = (-self.yaw_rad()).sin_cos();
        let (ps, pc) = self.pitch_rad().sin_cos();
        [ys * pc, -ps, yc * pc]
    }

    pub fn is_none(&self) -> bool {
        self.yaw == 0.0 && self.pitch == 0.0 && self.roll == 0.0
    }

    /// Whether this only turns about the vertical axis.
    pub fn is_yaw_only(&self) -> bool {
        self.yaw != 0.0 && self.pitch == 0.0 && self.roll == 0.0
    }

    /// Applies yaw, then pitch, then roll on top of `mat`, so vectors are
    /// rolled first.
    pub fn rotate_yxz(&self, mat: Mat4) -> Mat4 {
        if self.is_yaw_only() {
            mat.pre_rotate(0.0, 1.0, 0.0, radians(self.yaw_rad()))
        } else {
            mat.pre_rotate(0.0, 1.0, 0.0, radians(self.yaw_rad()))
                .pre_rotate(1.0, 0.0, 0.0, radians(self.pitch_rad()))
                .pre_rotate(0.0, 0.0, 1.0, radians(self.roll_rad()))
        }
    }

    /// Applies roll, then pitch, then yaw on top of `mat`, so vectors are
    /// turned by yaw first.
    pub fn rotate_zxy(&self, mat: Mat4) -> Mat4 {
        if self.is_yaw_only() {
            mat.pre_rotate(0.0, 1.0, 0.0, radians(self.yaw_rad()))
        } else {
            mat.pre_rotate(0.0, 0.0, 1.0, radians(self.roll_rad()))
                .pre_rotate(1.0, 0.0, 0.0, radians(self.pitch_rad()))
                .pre_rotate(0.0, 1.0, 0.0, radians(self.yaw_rad()))
        }
    }

    /// Whether every component matches `other` once both are in degrees.
    pub fn is_similar(&self, other: &Rotation) -> bool {
        are_floats_similar(self.yaw_deg(), other.yaw_deg())
            && are_floats_similar(self.pitch_deg(), other.pitch_deg())
            && are_floats_similar(self.roll_deg(), other.roll_deg())
    }

    /// The serialized form in degrees, without trailing zero components.
    pub fn to_degrees_list(&self) -> SmallVec<[f32; 3]> {
        if self.pitch == 0.0 && self.roll == 0.0 {
            smallvec![self.yaw_deg()]
        } else if self.roll == 0.0 {
            smallvec![self.yaw_deg(), self.pitch_deg()]
        } else {
            smallvec![self.yaw_deg(), self.pitch_deg(), self.roll_deg()]
        }
    }

    /// Reads the serialized form: 1 to 3 components in degrees.
    pub fn from_degrees_list(values: &[f32]) -> Result<Self> {
        match *values {
            [yaw] => Ok(Self::deg_yaw(yaw)),
            [yaw, pitch] => Ok(Self::deg_yaw_pitch(yaw, pitch)),
            [yaw, pitch, roll] => Ok(Self::deg(yaw, pitch, roll)),
            _ => Err(Error::InvalidRotationListSize(values.len())),
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = self.to_degrees_list();
        write!(f, "Rotation[")?;
        for (i, value) in list.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, "]")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rotation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let list = self.to_degrees_list();

        match list[..] {
            [yaw] => serializer.serialize_f32(yaw),
            _ => serde::Serialize::serialize(&list[..], serializer),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rotation {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use serde::de::{self, SeqAccess, Visitor};

        struct RotationVisitor;

        impl<'de> Visitor<'de> for RotationVisitor {
            type Value = Rotation;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a yaw in degrees or a list of 1 to 3 angles in degrees")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Rotation, E> {
                Ok(Rotation::deg_yaw(v as f32))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Rotation, E> {
                Ok(Rotation::deg_yaw(v as f32))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Rotation, E> {
                Ok(Rotation::deg_yaw(v as f32))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Rotation, A::Error> {
                let mut values: SmallVec<[f32; 3]> = SmallVec::new();
                while let Some(value) = seq.next_element::<f32>()? {
                    values.push(value);
                }
                Rotation::from_degrees_list(&values).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(RotationVisitor)
    }
}
