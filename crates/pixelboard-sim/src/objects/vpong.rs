//! VPong: steps across the grid along its velocity, bounces off the four
//! edges, and paints every square it lands on.
//!
//! Each axis is resolved independently, so a corner hit reflects both
//! components in the same tick and an object spawned against a wall bounces
//! on its first update.

use glam::IVec2;

use pixelboard_core::error::Result;

use crate::board::{BoardState, ObjectBody};

/// Advance one VPong by one tick and paint its new square.
pub fn update(body: &mut ObjectBody, board: &mut BoardState) -> Result<()> {
    let bounds = IVec2::new(board.grid.columns() as i32, board.grid.rows() as i32);
    let (position, velocity) = step(body.position, body.velocity, bounds);

    body.position = position;
    body.velocity = velocity;

    let color = body.paint_color(&board.active_scheme);
    board.grid.apply_color(position.x, position.y, color)?;
    body.steps += 1;
    Ok(())
}

/// Next position and velocity inside `[0, bounds)` on both axes.
pub fn step(position: IVec2, velocity: IVec2, bounds: IVec2) -> (IVec2, IVec2) {
    let (x, dx) = reflect_axis(position.x, velocity.x, bounds.x);
    let (y, dy) = reflect_axis(position.y, velocity.y, bounds.y);
    (IVec2::new(x, y), IVec2::new(dx, dy))
}

/// One axis of `step`. A candidate outside `[0, len)` flips the velocity and
/// is recomputed with the flipped value, then clamped. Arithmetic saturates,
/// so any velocity a host hands in stays inside the grid.
fn reflect_axis(pos: i32, vel: i32, len: i32) -> (i32, i32) {
    let candidate = pos.saturating_add(vel);
    if (0..len).contains(&candidate) {
        return (candidate, vel);
    }
    let vel = vel.saturating_neg();
    (pos.saturating_add(vel).clamp(0, len - 1), vel)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: IVec2 = IVec2::new(4, 4);

    #[test]
    fn test_free_flight() {
        let (p, v) = step(IVec2::new(1, 1), IVec2::new(1, 1), BOUNDS);
        assert_eq!(p, IVec2::new(2, 2));
        assert_eq!(v, IVec2::new(1, 1));
    }

    #[test]
    fn test_left_wall_bounce_in_one_tick() {
        let (p, v) = step(IVec2::new(0, 2), IVec2::new(-1, 0), BOUNDS);
        assert_eq!(p, IVec2::new(1, 2));
        assert_eq!(v, IVec2::new(1, 0));
    }

    #[test]
    fn test_corner_reflects_both_axes() {
        let (p, v) = step(IVec2::new(0, 0), IVec2::new(-1, -1), BOUNDS);
        assert_eq!(p, IVec2::new(1, 1));
        assert_eq!(v, IVec2::new(1, 1));

        let (p, v) = step(IVec2::new(3, 3), IVec2::new(1, 1), BOUNDS);
        assert_eq!(p, IVec2::new(2, 2));
        assert_eq!(v, IVec2::new(-1, -1));
    }

    #[test]
    fn test_single_axis_reflection_keeps_other_axis() {
        let (p, v) = step(IVec2::new(3, 1), IVec2::new(1, 1), BOUNDS);
        assert_eq!(p, IVec2::new(2, 2));
        assert_eq!(v, IVec2::new(-1, 1));
    }

    #[test]
    fn test_zero_velocity_stays_put() {
        let (p, v) = step(IVec2::new(2, 3), IVec2::ZERO, BOUNDS);
        assert_eq!(p, IVec2::new(2, 3));
        assert_eq!(v, IVec2::ZERO);
    }

    #[test]
    fn test_fast_object_reflects_and_clamps() {
        // Speed 2 from x=1 heading left: -1 is out, reflected candidate is 3.
        let (p, v) = step(IVec2::new(1, 0), IVec2::new(-2, 0), BOUNDS);
        assert_eq!(p, IVec2::new(3, 0));
        assert_eq!(v, IVec2::new(2, 0));

        // Speed larger than the grid clamps to the far edge.
        let (p, v) = step(IVec2::new(0, 0), IVec2::new(-9, 0), BOUNDS);
        assert_eq!(p, IVec2::new(3, 0));
        assert_eq!(v, IVec2::new(9, 0));
    }

    #[test]
    fn test_extreme_velocities_stay_in_bounds() {
        let (p, v) = step(IVec2::new(3, 0), IVec2::new(i32::MAX, 0), BOUNDS);
        assert_eq!(p, IVec2::new(0, 0));
        assert_eq!(v, IVec2::new(-i32::MAX, 0));

        let (p, v) = step(IVec2::new(0, 0), IVec2::new(i32::MIN, i32::MIN), BOUNDS);
        assert_eq!(p, IVec2::new(3, 3));
        assert_eq!(v, IVec2::new(i32::MAX, i32::MAX));

        let (p, _) = step(IVec2::new(2, 2), IVec2::new(i32::MIN, i32::MAX), BOUNDS);
        assert!((0..BOUNDS.x).contains(&p.x));
        assert!((0..BOUNDS.y).contains(&p.y));
    }

    #[test]
    fn test_one_wide_axis_pins_to_zero() {
        let (p, v) = step(IVec2::new(0, 0), IVec2::new(1, 1), IVec2::new(1, 4));
        assert_eq!(p, IVec2::new(0, 1));
        assert_eq!(v, IVec2::new(-1, 1));
    }

    #[test]
    fn test_bounds_hold_for_long_runs() {
        let bounds = IVec2::new(7, 5);
        for velocity in [
            IVec2::new(1, 1),
            IVec2::new(-1, 1),
            IVec2::new(2, -1),
            IVec2::new(0, 3),
        ] {
            let mut p = IVec2::new(3, 2);
            let mut v = velocity;
            for _ in 0..500 {
                (p, v) = step(p, v, bounds);
                assert!((0..bounds.x).contains(&p.x), "x escaped: {p:?}");
                assert!((0..bounds.y).contains(&p.y), "y escaped: {p:?}");
            }
        }
    }
}
