use log::info;
use vec2f::{Rounding, Vec2f};

fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .try_init();
}

fn main() {
    init_logger();

    let sum = Vec2f::new(1.0, 2.0) + Vec2f::new(3.0, 4.0);
    assert_eq!(sum, Vec2f::new(4.0, 6.0));
    info!("add: {sum}");

    let len = Vec2f::new(3.0, 4.0).length();
    assert_eq!(len, 5.0);
    info!("length: {len}");

    let turned = Vec2f::X.rotate_deg(90.0);
    assert!((turned.x - 0.0).abs() < 1e-6 && (turned.y - 1.0).abs() < 1e-6);
    info!("rotate 90deg: {turned}");

    let projected = Vec2f::new(2.0, 2.0).project(Vec2f::X);
    assert_eq!(projected, Vec2f::new(2.0, 0.0));
    info!("project: {projected}");

    let a = Vec2f::new(2.0, 2.0);
    let b = Vec2f::new(6.0, 6.0);
    assert_eq!(a.half_point_between(b), Vec2f::new(4.0, 4.0));
    assert_eq!(a.half_vector_to(b), Vec2f::new(2.0, 2.0));
    info!(
        "midpoint {} / half vector {}",
        a.half_point_between(b),
        a.half_vector_to(b)
    );

    assert_eq!(Vec2f::ZERO.normalize(), Vec2f::ZERO);
    assert_eq!(Vec2f::ZERO.inverse_length(), f32::INFINITY);

    let snapped = Vec2f::new(0.5, -0.5).round_with(&Rounding::HalfUp);
    assert_eq!(snapped, Vec2f::new(1.0, 0.0));
    info!("half-up rounding: {snapped}");

    let mut out = [0.0f32; 2];
    Vec2f::new(7.0, 8.0).store(&mut out);
    assert_eq!(out, [7.0, 8.0]);

    info!("Walkthrough finished");
}
