use log::trace;

use super::Vec2f;
use crate::structs::{VecError, VecResult};

/// Anything that can hand out an `x` and a `y`.
pub trait Vec2Read {
    fn x(&self) -> f32;
    fn y(&self) -> f32;
}

/// Anything that can accept an `x` and a `y`.
pub trait Vec2Write {
    fn set(&mut self, x: f32, y: f32);
}

impl Vec2Read for Vec2f {
    #[inline]
    fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    fn y(&self) -> f32 {
        self.y
    }
}

impl Vec2Write for Vec2f {
    #[inline]
    fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }
}

impl Vec2Read for [f32; 2] {
    #[inline]
    fn x(&self) -> f32 {
        self[0]
    }

    #[inline]
    fn y(&self) -> f32 {
        self[1]
    }
}

impl Vec2Write for [f32; 2] {
    #[inline]
    fn set(&mut self, x: f32, y: f32) {
        *self = [x, y];
    }
}

impl Vec2Read for (f32, f32) {
    #[inline]
    fn x(&self) -> f32 {
        self.0
    }

    #[inline]
    fn y(&self) -> f32 {
        self.1
    }
}

impl Vec2Write for (f32, f32) {
    #[inline]
    fn set(&mut self, x: f32, y: f32) {
        *self = (x, y);
    }
}

impl Vec2f {
    /// Copies the components out of any readable vector.
    #[inline]
    #[must_use]
    pub fn load<V>(src: &V) -> Self
    where
        V: Vec2Read + ?Sized,
    {
        Self::new(src.x(), src.y())
    }

    /// Writes the components into `dst` and hands it back.
    #[inline]
    pub fn store<V>(self, dst: &mut V) -> &mut V
    where
        V: Vec2Write + ?Sized,
    {
        dst.set(self.x, self.y);
        dst
    }

    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Reads `buf[offset]` and `buf[offset + 1]`.
    pub fn read_from(buf: &[f32], offset: usize) -> VecResult<Self> {
        let needed = offset.saturating_add(2);
        match buf.get(offset..needed) {
            Some(&[x, y]) => Ok(Self::new(x, y)),
            _ => {
                trace!("read_from: offset {offset} out of range for {} floats", buf.len());
                Err(VecError::BufferTooShort {
                    needed,
                    len: buf.len(),
                })
            }
        }
    }

    /// Writes into `buf[offset]` and `buf[offset + 1]`, leaving the rest untouched.
    pub fn write_to(self, buf: &mut [f32], offset: usize) -> VecResult<()> {
        let needed = offset.saturating_add(2);
        let len = buf.len();
        match buf.get_mut(offset..needed) {
            Some(slot) => {
                slot.copy_from_slice(&self.to_array());
                Ok(())
            }
            None => {
                trace!("write_to: offset {offset} out of range for {len} floats");
                Err(VecError::BufferTooShort { needed, len })
            }
        }
    }
}

impl From<[f32; 2]> for Vec2f {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f32, f32)> for Vec2f {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2f> for [f32; 2] {
    #[inline]
    fn from(v: Vec2f) -> Self {
        v.to_array()
    }
}

impl From<Vec2f> for (f32, f32) {
    #[inline]
    fn from(v: Vec2f) -> Self {
        (v.x, v.y)
    }
}

/// Takes the first two floats; longer slices are accepted.
impl TryFrom<&[f32]> for Vec2f {
    type Error = VecError;

    fn try_from(buf: &[f32]) -> VecResult<Self> {
        Self::read_from(buf, 0)
    }
}
