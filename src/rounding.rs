/// Strategy used by [`Vec2f::round_with`](crate::vec2::Vec2f::round_with).
pub trait RoundingMethod {
    fn round(&self, v: f32) -> f32;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Toward positive infinity.
    Ceil,

    /// Toward negative infinity.
    Floor,

    /// Nearest integer, ties away from zero.
    Nearest,

    /// Nearest integer, ties toward positive infinity.
    HalfUp,

    /// Nearest integer, ties to even.
    HalfEven,

    /// Toward zero.
    Trunc,
}

impl RoundingMethod for Rounding {
    #[inline]
    fn round(&self, v: f32) -> f32 {
        match self {
            Rounding::Ceil => v.ceil(),
            Rounding::Floor => v.floor(),
            Rounding::Nearest => v.round(),
            Rounding::HalfUp => {
                // `v - floor(v)` is exact; `v + 0.5` is not
                let f = v.floor();
                if v - f >= 0.5 {
                    f + 1.0
                } else {
                    f
                }
            }
            Rounding::HalfEven => v.round_ties_even(),
            Rounding::Trunc => v.trunc(),
        }
    }
}

impl<F> RoundingMethod for F
where
    F: Fn(f32) -> f32,
{
    #[inline]
    fn round(&self, v: f32) -> f32 {
        self(v)
    }
}
