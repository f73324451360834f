/// 3D line rasterization over the voxel grid
/// Dominant-axis Bresenham stepping shared by trace and paint modes
use crate::count_call;
use crate::perf::FUNCTION_COUNTERS;
use glam::Vec3;

/// Walk the segment `p0 -> p1` in increments of `step`, invoking `visit` at
/// each sampled point.
///
/// The axis with the greatest absolute delta drives the loop; the other two
/// axes advance by Bresenham error accumulation against the dominant delta.
/// The loop ends once the position is within one `step` of `p1` along the
/// dominant axis, so the endpoint itself may or may not be visited depending
/// on alignment.
///
/// Callers must guarantee `step > 0`; a zero step would never terminate.
/// This is a documented precondition, checked only in debug builds.
pub fn rasterize_line<F>(p0: Vec3, p1: Vec3, step: f32, mut visit: F)
where
    F: FnMut(Vec3),
{
    debug_assert!(step > 0.0, "rasterize_line requires a positive step");

    let delta = p1 - p0;
    let abs = delta.abs();
    let major = dominant_axis(abs);
    let minor_a = (major + 1) % 3;
    let minor_b = (major + 2) % 3;

    let major_delta = abs[major];
    let major_step = step.copysign(delta[major]);
    let a_step = step.copysign(delta[minor_a]);
    let b_step = step.copysign(delta[minor_b]);

    // Midpoint seeding, as in the 2D algorithm.
    let mut err_a = abs[minor_a] - major_delta * 0.5;
    let mut err_b = abs[minor_b] - major_delta * 0.5;

    let mut pos = p0;
    loop {
        count_call!(FUNCTION_COUNTERS.raster_steps);
        visit(pos);

        if (p1[major] - pos[major]).abs() <= step {
            break;
        }

        if err_a > 0.0 {
            pos[minor_a] += a_step;
            err_a -= major_delta;
        }
        if err_b > 0.0 {
            pos[minor_b] += b_step;
            err_b -= major_delta;
        }
        pos[major] += major_step;
        err_a += abs[minor_a];
        err_b += abs[minor_b];
    }
}

/// Trace mode: collect the sampled points of the segment without touching
/// any field.
pub fn line_points(p0: Vec3, p1: Vec3, step: f32) -> Vec<Vec3> {
    let mut points = Vec::new();
    rasterize_line(p0, p1, step, |p| points.push(p));
    points
}

/// Index of the axis with the greatest absolute extent (ties go to the
/// lower index).
#[inline]
fn dominant_axis(abs: Vec3) -> usize {
    if abs.x >= abs.y && abs.x >= abs.z {
        0
    } else if abs.y >= abs.z {
        1
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_aligned_line_samples_every_step() {
        let points = line_points(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 1.0);
        assert_eq!(points.len(), 10);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(*p, Vec3::new(i as f32, 0.0, 0.0));
        }
    }

    #[test]
    fn test_negative_direction_line() {
        let points = line_points(Vec3::ZERO, Vec3::new(-5.0, 0.0, 0.0), 1.0);
        assert_eq!(points.len(), 5);
        assert_eq!(points[4], Vec3::new(-4.0, 0.0, 0.0));
    }

    #[test]
    fn test_diagonal_line_advances_minor_axes() {
        let points = line_points(Vec3::ZERO, Vec3::new(8.0, 8.0, 0.0), 1.0);
        // A 45 degree line should advance y alongside x, one step behind at most.
        for p in &points {
            assert!((p.x - p.y).abs() <= 1.0, "diagonal drifted: {:?}", p);
        }
        let last = points.last().unwrap();
        assert!(last.x >= 7.0);
    }

    #[test]
    fn test_dominant_axis_selection() {
        assert_eq!(dominant_axis(Vec3::new(3.0, 1.0, 2.0)), 0);
        assert_eq!(dominant_axis(Vec3::new(1.0, 3.0, 2.0)), 1);
        assert_eq!(dominant_axis(Vec3::new(1.0, 2.0, 3.0)), 2);
        assert_eq!(dominant_axis(Vec3::splat(1.0)), 0);
    }

    #[test]
    fn test_degenerate_segment_visits_origin_once() {
        let points = line_points(Vec3::splat(2.0), Vec3::splat(2.0), 1.0);
        assert_eq!(points, vec![Vec3::splat(2.0)]);
    }
}
