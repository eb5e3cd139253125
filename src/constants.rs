/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// Multiply radians by this to get degrees.
pub const RAD_TO_DEG: f32 = 180.0 / std::f32::consts::PI;

/// Tolerance used by the `*_tolerance` helpers when callers have no better value.
pub const DEFAULT_TOLERANCE: f32 = 1e-6;
