//! JavaScript bindings.

use wasm_bindgen::prelude::*;

use crate::vec2::Vec2f;

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector2 {
    inner: Vec2f,
}

impl From<Vec2f> for Vector2 {
    fn from(inner: Vec2f) -> Self {
        Self { inner }
    }
}

impl From<Vector2> for Vec2f {
    fn from(v: Vector2) -> Self {
        v.inner
    }
}

#[wasm_bindgen]
impl Vector2 {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f32, y: f32) -> Vector2 {
        Vec2f::new(x, y).into()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 {
        self.inner.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 {
        self.inner.y
    }

    pub fn add(&self, other: &Vector2) -> Vector2 {
        self.inner.add(other.inner).into()
    }

    pub fn sub(&self, other: &Vector2) -> Vector2 {
        self.inner.sub(other.inner).into()
    }

    pub fn scale(&self, f: f32) -> Vector2 {
        self.inner.scale(f).into()
    }

    pub fn dot(&self, other: &Vector2) -> f32 {
        self.inner.dot(other.inner)
    }

    pub fn length(&self) -> f32 {
        self.inner.length()
    }

    pub fn normalize(&self) -> Vector2 {
        self.inner.normalize().into()
    }

    #[wasm_bindgen(js_name = rotateDeg)]
    pub fn rotate_deg(&self, deg: f32) -> Vector2 {
        self.inner.rotate_deg(deg).into()
    }

    #[wasm_bindgen(js_name = rotateRad)]
    pub fn rotate_rad(&self, rad: f32) -> Vector2 {
        self.inner.rotate_rad(rad).into()
    }

    pub fn project(&self, target: &Vector2) -> Vector2 {
        self.inner.project(target.inner).into()
    }

    pub fn reflect(&self, normal: &Vector2) -> Vector2 {
        self.inner.reflect(normal.inner).into()
    }

    #[wasm_bindgen(js_name = distanceTo)]
    pub fn distance_to(&self, other: &Vector2) -> f32 {
        self.inner.distance_to(other.inner)
    }

    #[wasm_bindgen(js_name = halfPointBetween)]
    pub fn half_point_between(&self, other: &Vector2) -> Vector2 {
        self.inner.half_point_between(other.inner).into()
    }

    /// Returns `[x, y]` as a `Float32Array`.
    #[wasm_bindgen(js_name = toArray)]
    pub fn to_array(&self) -> Vec<f32> {
        self.inner.to_array().to_vec()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_core_operations() {
        let a = Vector2::new(3.0, 4.0);
        assert_eq!(a.length(), 5.0);
        assert_eq!(a.add(&Vector2::new(1.0, 1.0)).to_array(), vec![4.0, 5.0]);
        assert_eq!(Vec2f::from(a.normalize()).length().round(), 1.0);
        assert_eq!(a.to_js_string(), "(3, 4)");
    }
}
