use std::{fmt, iter::Sum, ops::*};

use super::Vec2f;

impl Add for Vec2f {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Vec2f::add(self, rhs)
    }
}

impl Sub for Vec2f {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Vec2f::sub(self, rhs)
    }
}

impl Mul for Vec2f {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Vec2f::mul(self, rhs)
    }
}

impl Mul<f32> for Vec2f {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Vec2f> for f32 {
    type Output = Vec2f;

    #[inline]
    fn mul(self, rhs: Vec2f) -> Vec2f {
        rhs.scale(self)
    }
}

impl Div for Vec2f {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        Vec2f::div(self, rhs)
    }
}

impl Div<f32> for Vec2f {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        self.div_scalar(rhs)
    }
}

impl Neg for Vec2f {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl AddAssign for Vec2f {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = Vec2f::add(*self, rhs);
    }
}

impl SubAssign for Vec2f {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = Vec2f::sub(*self, rhs);
    }
}

impl MulAssign<f32> for Vec2f {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}

impl DivAssign<f32> for Vec2f {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = self.div_scalar(rhs);
    }
}

impl Sum for Vec2f {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Vec2f::ZERO, Vec2f::add)
    }
}

impl Index<usize> for Vec2f {
    type Output = f32;

    /// Panics for any index other than `0` or `1`.
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2f index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vec2f {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2f index out of range: {index}"),
        }
    }
}

impl fmt::Display for Vec2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        fmt::Display::fmt(&self.x, f)?;
        write!(f, ", ")?;
        fmt::Display::fmt(&self.y, f)?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_match_methods() {
        let a = Vec2f::new(1.0, 2.0);
        let b = Vec2f::new(3.0, 4.0);
        assert_eq!(a + b, Vec2f::new(4.0, 6.0));
        assert_eq!(a - b, Vec2f::new(-2.0, -2.0));
        assert_eq!(a * b, Vec2f::new(3.0, 8.0));
        assert_eq!(a * 2.0, Vec2f::new(2.0, 4.0));
        assert_eq!(2.0 * a, Vec2f::new(2.0, 4.0));
        assert_eq!(b / a, Vec2f::new(3.0, 2.0));
        assert_eq!(b / 2.0, Vec2f::new(1.5, 2.0));
        assert_eq!(-a, Vec2f::new(-1.0, -2.0));
    }

    #[test]
    fn assign_ops() {
        let mut v = Vec2f::ONE;
        v += Vec2f::new(1.0, 2.0);
        v -= Vec2f::Y;
        v *= 3.0;
        v /= 2.0;
        assert_eq!(v, Vec2f::new(3.0, 3.0));
    }

    #[test]
    fn sum_and_index() {
        let total: Vec2f = [Vec2f::X, Vec2f::Y, Vec2f::ONE].into_iter().sum();
        assert_eq!(total, Vec2f::new(2.0, 2.0));

        let mut v = Vec2f::new(5.0, 6.0);
        assert_eq!(v[v.max_component()], 6.0);
        v[0] = -1.0;
        assert_eq!(v.x, -1.0);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let _ = Vec2f::ZERO[2];
    }

    #[test]
    fn display() {
        assert_eq!(format!("{:.2}", Vec2f::new(1.2345, -0.5)), "(1.23, -0.50)");
    }
}
