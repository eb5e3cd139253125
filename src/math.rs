use std::sync::OnceLock;

use log::{info, warn};

use crate::structs::{VecError, VecResult};

/// Source of the transcendental functions used by length, normalization,
/// rotation and fused multiply-add.
pub trait MathProvider: Send + Sync {
    fn sqrt(&self, v: f32) -> f32;

    /// `1 / sqrt(v)`. Zero maps to `+Inf`.
    fn inv_sqrt(&self, v: f32) -> f32;

    fn sin(&self, rad: f32) -> f32;

    fn cos(&self, rad: f32) -> f32;

    /// `a * b + c`.
    fn fma(&self, a: f32, b: f32, c: f32) -> f32;
}

/// Provider backed by the `f32` intrinsics of the standard library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdMath;

impl MathProvider for StdMath {
    #[inline]
    fn sqrt(&self, v: f32) -> f32 {
        v.sqrt()
    }

    #[inline]
    fn inv_sqrt(&self, v: f32) -> f32 {
        1.0 / v.sqrt()
    }

    #[inline]
    fn sin(&self, rad: f32) -> f32 {
        rad.sin()
    }

    #[inline]
    fn cos(&self, rad: f32) -> f32 {
        rad.cos()
    }

    #[inline]
    fn fma(&self, a: f32, b: f32, c: f32) -> f32 {
        a.mul_add(b, c)
    }
}

static STD_MATH: StdMath = StdMath;
static DEFAULT_MATH: OnceLock<&'static dyn MathProvider> = OnceLock::new();

/// Returns the process-wide provider used by methods without a `_with` suffix.
#[inline]
pub fn default_math() -> &'static dyn MathProvider {
    let fallback: &'static dyn MathProvider = &STD_MATH;
    DEFAULT_MATH.get().copied().unwrap_or(fallback)
}

/// Replaces the process-wide provider.
///
/// Can succeed at most once per process, and only affects calls made after it returns.
pub fn install_default_math(provider: &'static dyn MathProvider) -> VecResult<()> {
    match DEFAULT_MATH.set(provider) {
        Ok(()) => {
            info!("Installed custom default math provider");
            Ok(())
        }
        Err(_) => {
            warn!("Default math provider already installed, keeping the existing one");
            Err(VecError::DefaultMathInstalled)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::vec2::Vec2f;

    fn init_logger() {
        let _ = env_logger::builder()
            .filter_level(log::LevelFilter::Info)
            .is_test(true)
            .try_init();
    }

    /// Delegates to `StdMath` so other tests in this binary see identical results.
    struct CountingMath {
        sqrt_calls: AtomicUsize,
    }

    impl MathProvider for CountingMath {
        fn sqrt(&self, v: f32) -> f32 {
            self.sqrt_calls.fetch_add(1, Ordering::Relaxed);
            StdMath.sqrt(v)
        }

        fn inv_sqrt(&self, v: f32) -> f32 {
            StdMath.inv_sqrt(v)
        }

        fn sin(&self, rad: f32) -> f32 {
            StdMath.sin(rad)
        }

        fn cos(&self, rad: f32) -> f32 {
            StdMath.cos(rad)
        }

        fn fma(&self, a: f32, b: f32, c: f32) -> f32 {
            StdMath.fma(a, b, c)
        }
    }

    static COUNTING: CountingMath = CountingMath {
        sqrt_calls: AtomicUsize::new(0),
    };

    #[test]
    fn std_math_values() {
        assert_eq!(StdMath.sqrt(16.0), 4.0);
        assert_eq!(StdMath.inv_sqrt(4.0), 0.5);
        assert_eq!(StdMath.inv_sqrt(0.0), f32::INFINITY);
        assert_eq!(StdMath.fma(2.0, 3.0, 1.0), 7.0);
        assert_eq!(StdMath.sin(0.0), 0.0);
        assert_eq!(StdMath.cos(0.0), 1.0);
    }

    #[test]
    fn install_once() {
        init_logger();

        assert!(install_default_math(&COUNTING).is_ok());
        assert_eq!(
            install_default_math(&StdMath),
            Err(VecError::DefaultMathInstalled)
        );

        let before = COUNTING.sqrt_calls.load(Ordering::Relaxed);
        assert_eq!(Vec2f::new(3.0, 4.0).length(), 5.0);
        assert!(COUNTING.sqrt_calls.load(Ordering::Relaxed) > before);
    }
}
