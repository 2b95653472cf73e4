//! Frame-rate independent smoothing.
//!
//! [`approach`] moves a value toward a target by a fraction of the remaining
//! distance that depends only on `rate * delta_t`, so the curve looks the same
//! at 30 or 300 frames per second. Used by the camera to trail the player.
use raylib::prelude::Vector2;

/// Distance below which the value snaps onto the target.
pub const SNAP_EPSILON: f32 = 0.001;

/// Step `value` toward `target`, covering `1 - 2^(-rate * delta_t)` of the gap.
///
/// Negative `delta_t` is treated as zero. A non-positive `rate` leaves the
/// value untouched.
pub fn approach(value: f32, target: f32, delta_t: f32, rate: f32) -> f32 {
    if rate <= 0.0 {
        return value;
    }
    let delta_t = delta_t.max(0.0);
    let next = value + (target - value) * (1.0 - 2.0_f32.powf(-rate * delta_t));
    if (next - target).abs() <= SNAP_EPSILON {
        target
    } else {
        next
    }
}

/// [`approach`] applied independently to each axis.
pub fn approach_v2(value: Vector2, target: Vector2, delta_t: f32, rate: f32) -> Vector2 {
    Vector2 {
        x: approach(value.x, target.x, delta_t, rate),
        y: approach(value.y, target.y, delta_t, rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approach_moves_toward_target() {
        let v = approach(0.0, 100.0, 0.016, 8.0);
        assert!(v > 0.0 && v < 100.0);
    }

    #[test]
    fn test_approach_converges_monotonically() {
        let mut v = 0.0_f32;
        let mut last_gap = 100.0_f32;
        for _ in 0..1000 {
            v = approach(v, 100.0, 0.016, 8.0);
            let gap = (100.0 - v).abs();
            assert!(gap <= last_gap);
            assert!(v <= 100.0);
            last_gap = gap;
        }
        assert_eq!(v, 100.0);
    }

    #[test]
    fn test_approach_converges_from_above() {
        let mut v = 50.0_f32;
        for _ in 0..1000 {
            let next = approach(v, -50.0, 0.016, 8.0);
            assert!(next <= v);
            assert!(next >= -50.0);
            v = next;
        }
        assert_eq!(v, -50.0);
    }

    #[test]
    fn test_approach_snaps_within_epsilon() {
        assert_eq!(approach(9.9995, 10.0, 0.0001, 1.0), 10.0);
    }

    #[test]
    fn test_approach_half_gap_after_one_half_life() {
        // rate * delta_t == 1 halves the distance
        let v = approach(0.0, 10.0, 0.5, 2.0);
        assert!((v - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_approach_zero_rate_is_noop() {
        assert_eq!(approach(3.0, 10.0, 1.0, 0.0), 3.0);
    }

    #[test]
    fn test_approach_negative_delta_does_not_overshoot() {
        assert_eq!(approach(3.0, 10.0, -1.0, 8.0), 3.0);
    }

    #[test]
    fn test_approach_v2_per_axis() {
        let v = approach_v2(
            Vector2 { x: 0.0, y: 0.0 },
            Vector2 { x: 10.0, y: -10.0 },
            0.5,
            2.0,
        );
        assert!((v.x - 5.0).abs() < 1e-5);
        assert!((v.y + 5.0).abs() < 1e-5);
    }
}
