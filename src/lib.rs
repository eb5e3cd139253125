//! 2D `f32` vector math.
//!
//! Every operation is a method on the [`Vec2f`] value type and returns its
//! result by value. Arrays, tuples and slices convert in and out through
//! `From`/`TryFrom`, and user types can take part through [`Vec2Read`] and
//! [`Vec2Write`]. Length, normalization, rotation and fused multiply-add go
//! through a [`MathProvider`], which defaults to the standard library.

pub mod constants;
pub mod math;
pub mod rounding;
pub mod structs;
pub mod vec2;
pub mod wasm;

pub use math::{default_math, install_default_math, MathProvider, StdMath};
pub use rounding::{Rounding, RoundingMethod};
pub use structs::{ComponentValue, VecError, VecResult};
pub use vec2::{Vec2Read, Vec2Write, Vec2f};

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logger() {
        let _ = env_logger::builder()
            .filter_level(log::LevelFilter::Info)
            .is_test(true)
            .try_init();
    }

    #[test]
    fn buffer_pipeline() {
        init_logger();

        // interleaved xy positions, moved half-way toward a target in place
        let mut positions = [0.0f32, 0.0, 2.0, 2.0, -4.0, 8.0];
        let target = Vec2f::new(4.0, 4.0);

        for offset in (0..positions.len()).step_by(2) {
            let p = Vec2f::read_from(&positions, offset).unwrap();
            p.half_point_between(target)
                .write_to(&mut positions, offset)
                .unwrap();
        }

        assert_eq!(positions, [2.0, 2.0, 3.0, 3.0, 0.0, 6.0]);
    }

    #[test]
    fn centroid_and_spread() {
        init_logger();

        let points = [
            Vec2f::new(1.0, 1.0),
            Vec2f::new(3.0, 1.0),
            Vec2f::new(3.0, 3.0),
            Vec2f::new(1.0, 3.0),
        ];
        let centroid = points.iter().copied().sum::<Vec2f>() / points.len() as f32;
        assert_eq!(centroid, Vec2f::new(2.0, 2.0));

        let lo = points.iter().fold(points[0], |acc, p| acc.min_vector(*p));
        let hi = points.iter().fold(points[0], |acc, p| acc.max_vector(*p));
        assert_eq!(lo, Vec2f::ONE);
        assert_eq!(hi, Vec2f::splat(3.0));
        assert_eq!(lo.half_point_between(hi), centroid);
    }
}
