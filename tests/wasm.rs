#![cfg(target_arch = "wasm32")]

use vec2f::wasm::Vector2;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn length_and_rotation() {
    let v = Vector2::new(3.0, 4.0);
    assert_eq!(v.length(), 5.0);

    let turned = Vector2::new(1.0, 0.0).rotate_deg(90.0);
    assert!(turned.x().abs() < 1e-6);
    assert!((turned.y() - 1.0).abs() < 1e-6);
}

#[wasm_bindgen_test]
fn midpoint() {
    let mid = Vector2::new(2.0, 2.0).half_point_between(&Vector2::new(6.0, 6.0));
    assert_eq!(mid.to_array(), vec![4.0, 4.0]);
}
