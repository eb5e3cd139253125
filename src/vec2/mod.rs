mod access;
mod ops;

pub use access::{Vec2Read, Vec2Write};

use log::trace;

use crate::{
    constants::{DEG_TO_RAD, RAD_TO_DEG},
    math::{default_math, MathProvider},
    rounding::RoundingMethod,
    structs::ComponentValue,
};

/// A 2D vector of `f32` components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

#[allow(clippy::should_implement_trait)]
impl Vec2f {
    /// All zeroes.
    pub const ZERO: Self = Self::splat(0.0);
    /// All ones.
    pub const ONE: Self = Self::splat(1.0);
    /// All negative ones.
    pub const NEG_ONE: Self = Self::splat(-1.0);
    /// Unit vector along the x axis.
    pub const X: Self = Self::new(1.0, 0.0);
    /// Unit vector along the y axis.
    pub const Y: Self = Self::new(0.0, 1.0);

    #[inline(always)]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with all elements set to `v`.
    #[inline]
    #[must_use]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    /// Checks whether both components are finite.
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Checks whether either component is `NaN`.
    #[inline]
    #[must_use]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Checks whether both components lie within `tolerance` of zero.
    #[inline]
    #[must_use]
    pub fn is_zero_within(self, tolerance: f32) -> bool {
        self.x.abs() <= tolerance && self.y.abs() <= tolerance
    }

    // ---------------------------------------------------------------------
    // Arithmetic
    // ---------------------------------------------------------------------

    /// Adds two vectors.
    #[inline]
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts `other` from self.
    #[inline]
    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Subtracts self from `other`.
    #[inline]
    #[must_use]
    pub fn rev_sub(self, other: Self) -> Self {
        other.sub(self)
    }

    /// Component-wise product.
    #[inline]
    #[must_use]
    pub fn mul(self, other: Self) -> Self {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }

    /// Multiplies the vector by a scalar.
    #[inline]
    #[must_use]
    pub fn scale(self, f: f32) -> Self {
        Self {
            x: self.x * f,
            y: self.y * f,
        }
    }

    /// Component-wise quotient. Zero divisors give `±Inf` or `NaN`.
    #[inline]
    #[must_use]
    pub fn div(self, other: Self) -> Self {
        Self {
            x: self.x / other.x,
            y: self.y / other.y,
        }
    }

    /// Divides each component by `f`.
    ///
    /// Divides per component instead of multiplying by the reciprocal, so the
    /// rounding matches scalar division exactly.
    #[inline]
    #[must_use]
    pub fn div_scalar(self, f: f32) -> Self {
        Self {
            x: self.x / f,
            y: self.y / f,
        }
    }

    /// Component-wise `other / self`.
    #[inline]
    #[must_use]
    pub fn rev_div(self, other: Self) -> Self {
        other.div(self)
    }

    /// Fused multiply-add: `self * a + b`, component-wise.
    #[inline]
    #[must_use]
    pub fn fma(self, a: Self, b: Self) -> Self {
        self.fma_with(a, b, default_math())
    }

    #[inline]
    #[must_use]
    pub fn fma_with<M>(self, a: Self, b: Self, math: &M) -> Self
    where
        M: MathProvider + ?Sized,
    {
        Self {
            x: math.fma(self.x, a.x, b.x),
            y: math.fma(self.y, a.y, b.y),
        }
    }

    /// Linear interpolation between self and other by factor `t`.
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let s = 1.0 - t;
        Self {
            x: self.x * s + other.x * t,
            y: self.y * s + other.y * t,
        }
    }

    // ---------------------------------------------------------------------
    // Magnitude
    // ---------------------------------------------------------------------

    /// Dot product of two vectors.
    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (perp-dot). Positive when `other` is counter-clockwise of self.
    #[inline]
    #[must_use]
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Returns the squared length of the vector.
    #[inline]
    #[must_use]
    pub fn squared_length(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Returns the length of the vector. Exactly `0.0` for the zero vector.
    #[inline]
    #[must_use]
    pub fn length(self) -> f32 {
        self.length_with(default_math())
    }

    #[inline]
    #[must_use]
    pub fn length_with<M>(self, math: &M) -> f32
    where
        M: MathProvider + ?Sized,
    {
        if self.x == 0.0 && self.y == 0.0 {
            return 0.0;
        }
        math.sqrt(self.squared_length())
    }

    /// Like [`length`](Self::length), but vectors within `tolerance` of zero
    /// on both axes have length `0.0`.
    #[inline]
    #[must_use]
    pub fn length_tolerance(self, tolerance: f32) -> f32 {
        self.length_tolerance_with(tolerance, default_math())
    }

    #[inline]
    #[must_use]
    pub fn length_tolerance_with<M>(self, tolerance: f32, math: &M) -> f32
    where
        M: MathProvider + ?Sized,
    {
        if self.is_zero_within(tolerance) {
            return 0.0;
        }
        math.sqrt(self.squared_length())
    }

    /// Returns `1 / length`.
    ///
    /// The zero vector is not special-cased and yields `+Inf`.
    #[inline]
    #[must_use]
    pub fn inverse_length(self) -> f32 {
        self.inverse_length_with(default_math())
    }

    #[inline]
    #[must_use]
    pub fn inverse_length_with<M>(self, math: &M) -> f32
    where
        M: MathProvider + ?Sized,
    {
        math.inv_sqrt(self.squared_length())
    }

    // ---------------------------------------------------------------------
    // Normalization
    // ---------------------------------------------------------------------

    /// Returns a unit vector pointing the same way, or [`ZERO`](Self::ZERO)
    /// for the zero vector.
    ///
    /// The vector is first divided by its largest absolute component, so
    /// subnormal and near-`f32::MAX` inputs still give a unit vector.
    #[inline]
    #[must_use]
    pub fn normalize(self) -> Self {
        self.normalize_with(default_math())
    }

    #[inline]
    #[must_use]
    pub fn normalize_with<M>(self, math: &M) -> Self
    where
        M: MathProvider + ?Sized,
    {
        if self.x == 0.0 && self.y == 0.0 {
            trace!("normalize: zero vector");
            return Self::ZERO;
        }
        self.unit_with(math)
    }

    /// Like [`normalize`](Self::normalize), but vectors within `tolerance`
    /// of zero on both axes map to [`ZERO`](Self::ZERO).
    #[inline]
    #[must_use]
    pub fn normalize_tolerance(self, tolerance: f32) -> Self {
        self.normalize_tolerance_with(tolerance, default_math())
    }

    #[inline]
    #[must_use]
    pub fn normalize_tolerance_with<M>(self, tolerance: f32, math: &M) -> Self
    where
        M: MathProvider + ?Sized,
    {
        if self.is_zero_within(tolerance) {
            trace!("normalize: {self:?} within {tolerance} of zero");
            return Self::ZERO;
        }
        self.unit_with(math)
    }

    /// Non-zero input only. Scaled so the largest component is `±1` and the
    /// squared length stays in `[1, 2]`.
    #[inline]
    fn unit_with<M>(self, math: &M) -> Self
    where
        M: MathProvider + ?Sized,
    {
        let scaled = self.div_scalar(self.x.abs().max(self.y.abs()));
        scaled.scale(math.inv_sqrt(scaled.squared_length()))
    }

    // ---------------------------------------------------------------------
    // Geometric transforms
    // ---------------------------------------------------------------------

    /// Returns the negated vector.
    #[inline]
    #[must_use]
    pub fn negate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }

    /// Component-wise reciprocal `(1/x, 1/y)`.
    #[inline]
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            x: 1.0 / self.x,
            y: 1.0 / self.y,
        }
    }

    /// Component-wise absolute value.
    #[inline]
    #[must_use]
    pub fn abs(self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Rotates by 90 degrees counter-clockwise.
    #[inline]
    #[must_use]
    pub fn perp(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// Rotates counter-clockwise by `rad` radians.
    #[inline]
    #[must_use]
    pub fn rotate_rad(self, rad: f32) -> Self {
        self.rotate_rad_with(rad, default_math())
    }

    #[inline]
    #[must_use]
    pub fn rotate_rad_with<M>(self, rad: f32, math: &M) -> Self
    where
        M: MathProvider + ?Sized,
    {
        let (sin, cos) = (math.sin(rad), math.cos(rad));
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Rotates counter-clockwise by `deg` degrees.
    #[inline]
    #[must_use]
    pub fn rotate_deg(self, deg: f32) -> Self {
        self.rotate_rad(deg * DEG_TO_RAD)
    }

    #[inline]
    #[must_use]
    pub fn rotate_deg_with<M>(self, deg: f32, math: &M) -> Self
    where
        M: MathProvider + ?Sized,
    {
        self.rotate_rad_with(deg * DEG_TO_RAD, math)
    }

    /// Counter-clockwise angle from the positive x axis, in `(-π, π]`.
    #[inline]
    #[must_use]
    pub fn angle_rad(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Counter-clockwise angle from the positive x axis, in `(-180, 180]`.
    #[inline]
    #[must_use]
    pub fn angle_deg(self) -> f32 {
        self.angle_rad() * RAD_TO_DEG
    }

    // ---------------------------------------------------------------------
    // Projection and reflection
    // ---------------------------------------------------------------------

    /// Projects self onto the unit vector `target`.
    ///
    /// `target` is not normalized here; a non-unit `target` gives a scaled result.
    #[inline]
    #[must_use]
    pub fn project(self, target: Self) -> Self {
        target.scale(self.dot(target))
    }

    /// Returns the component of self orthogonal to the unit vector `target`.
    #[inline]
    #[must_use]
    pub fn reject(self, target: Self) -> Self {
        self.sub(self.project(target))
    }

    /// Reflects self about the unit surface normal `normal`.
    #[inline]
    #[must_use]
    pub fn reflect(self, normal: Self) -> Self {
        let d = 2.0 * self.dot(normal);
        Self {
            x: self.x - d * normal.x,
            y: self.y - d * normal.y,
        }
    }

    // ---------------------------------------------------------------------
    // Min/max
    // ---------------------------------------------------------------------

    /// Smallest component and its index. `x` wins ties.
    #[inline]
    #[must_use]
    pub fn min(self) -> ComponentValue {
        if self.y < self.x {
            ComponentValue::new(self.y, 1)
        } else {
            ComponentValue::new(self.x, 0)
        }
    }

    /// Largest component and its index. `x` wins ties.
    #[inline]
    #[must_use]
    pub fn max(self) -> ComponentValue {
        if self.y > self.x {
            ComponentValue::new(self.y, 1)
        } else {
            ComponentValue::new(self.x, 0)
        }
    }

    #[inline]
    #[must_use]
    pub fn min_value(self) -> f32 {
        self.min().value
    }

    #[inline]
    #[must_use]
    pub fn max_value(self) -> f32 {
        self.max().value
    }

    #[inline]
    #[must_use]
    pub fn min_component(self) -> usize {
        self.min().index
    }

    #[inline]
    #[must_use]
    pub fn max_component(self) -> usize {
        self.max().index
    }

    /// Component-wise minimum of two vectors. A `NaN` component loses to a number.
    #[inline]
    #[must_use]
    pub fn min_vector(self, other: Self) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    /// Component-wise maximum of two vectors. A `NaN` component loses to a number.
    #[inline]
    #[must_use]
    pub fn max_vector(self, other: Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }

    // ---------------------------------------------------------------------
    // Distance and midpoint
    // ---------------------------------------------------------------------

    #[inline]
    #[must_use]
    pub fn distance_to(self, other: Self) -> f32 {
        other.sub(self).length()
    }

    #[inline]
    #[must_use]
    pub fn distance_to_with<M>(self, other: Self, math: &M) -> f32
    where
        M: MathProvider + ?Sized,
    {
        other.sub(self).length_with(math)
    }

    #[inline]
    #[must_use]
    pub fn distance_to_tolerance(self, other: Self, tolerance: f32) -> f32 {
        other.sub(self).length_tolerance(tolerance)
    }

    #[inline]
    #[must_use]
    pub fn squared_distance_to(self, other: Self) -> f32 {
        other.sub(self).squared_length()
    }

    /// `1 / distance`. Coincident points yield `+Inf`.
    #[inline]
    #[must_use]
    pub fn inverse_distance_to(self, other: Self) -> f32 {
        other.sub(self).inverse_length()
    }

    #[inline]
    #[must_use]
    pub fn inverse_distance_to_with<M>(self, other: Self, math: &M) -> f32
    where
        M: MathProvider + ?Sized,
    {
        other.sub(self).inverse_length_with(math)
    }

    /// Half the displacement from self to `other`.
    #[inline]
    #[must_use]
    pub fn half_vector_to(self, other: Self) -> Self {
        Self {
            x: (other.x - self.x) * 0.5,
            y: (other.y - self.y) * 0.5,
        }
    }

    /// Returns the midpoint between two points.
    #[inline]
    #[must_use]
    pub fn half_point_between(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) * 0.5,
            y: (self.y + other.y) * 0.5,
        }
    }

    // ---------------------------------------------------------------------
    // Rounding
    // ---------------------------------------------------------------------

    #[inline]
    #[must_use]
    pub fn ceil(self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil())
    }

    #[inline]
    #[must_use]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    /// Rounds each component to the nearest integer, ties away from zero.
    ///
    /// For ties toward positive infinity use `round_with(&Rounding::HalfUp)`.
    #[inline]
    #[must_use]
    pub fn round(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    /// Rounds each component toward zero.
    #[inline]
    #[must_use]
    pub fn trunc(self) -> Self {
        Self::new(self.x.trunc(), self.y.trunc())
    }

    /// Rounds each component with a caller-supplied strategy.
    #[inline]
    #[must_use]
    pub fn round_with<R>(self, method: &R) -> Self
    where
        R: RoundingMethod + ?Sized,
    {
        Self::new(method.round(self.x), method.round(self.y))
    }
}
