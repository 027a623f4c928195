//! Motion math
//!
//! Converts between the two ways an entity's movement is described:
//! - Editor form: start point, destination point and a scalar speed
//! - Level file form: start point and a velocity vector (units/second)
//!
//! The destination is recovered from a velocity by walking the entity's
//! bounding box across the playfield one velocity step at a time until it
//! leaves the field.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default step budget for [`destination_from_velocity`]
pub const DEFAULT_MAX_STEPS: u32 = 1_000_000;

/// A location in playfield coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A rate of movement in playfield units per second
///
/// Shares its layout with [`Point`] but is never used as a location.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Width and height of a graphic
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

/// The rectangle entities move across, anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Playfield {
    /// Dimensions the game runtime renders at
    pub const STANDARD: Playfield = Playfield { width: 1334.0, height: 750.0 };
}

impl Default for Playfield {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Failure to project a velocity onto the playfield edge
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("non-finite input to motion projection")]
    NonFinite,
    #[error("entity did not leave the playfield within {steps} steps")]
    StepLimit { steps: u32 },
}

/// Velocity pointing from `start` to `destination` with magnitude `speed`
///
/// Coincident points or a zero/non-finite speed describe no motion and give
/// [`Vector::ZERO`].
pub fn velocity_from_points(start: Point, destination: Point, speed: f64) -> Vector {
    let dx = destination.x - start.x;
    let dy = destination.y - start.y;
    let distance = dx.hypot(dy);

    if !(distance > 0.0) || speed == 0.0 || !speed.is_finite() {
        return Vector::ZERO;
    }

    let scale = speed / distance;
    Vector::new(scale * dx, scale * dy)
}

/// Exit rule for one axis of the bounds walk
#[derive(Debug, Clone, Copy)]
struct AxisScan {
    /// Added to the coordinate before walking, removed afterwards
    offset: f64,
    exit: AxisExit,
}

#[derive(Debug, Clone, Copy)]
enum AxisExit {
    Never,
    Above(f64),
    BelowZero,
}

impl AxisScan {
    fn new(velocity: f64, extent: f64, field: f64) -> Self {
        if velocity > 0.0 {
            // Trailing edge leads the scan when moving toward the far side
            Self { offset: -extent / 2.0, exit: AxisExit::Above(field) }
        } else if velocity < 0.0 {
            Self { offset: extent / 2.0, exit: AxisExit::BelowZero }
        } else {
            Self { offset: 0.0, exit: AxisExit::Never }
        }
    }

    fn exited(&self, coordinate: f64) -> bool {
        match self.exit {
            AxisExit::Never => false,
            AxisExit::Above(limit) => coordinate > limit,
            AxisExit::BelowZero => coordinate < 0.0,
        }
    }
}

/// Where a box of `size` at `position` leaves the playfield moving at `velocity`
///
/// Steps by the whole velocity vector until either axis crosses its exit edge
/// and returns the position (same frame as `position`) after the last step.
/// A zero velocity returns `position` unchanged. The walk is capped at
/// `max_steps`.
pub fn destination_from_velocity(
    position: Point,
    size: Size,
    velocity: Vector,
    playfield: &Playfield,
    max_steps: u32,
) -> Result<Point, MotionError> {
    if !position.is_finite() || !size.is_finite() || !velocity.is_finite() {
        return Err(MotionError::NonFinite);
    }
    if velocity.is_zero() {
        return Ok(position);
    }

    let x_scan = AxisScan::new(velocity.x, size.width, playfield.width);
    let y_scan = AxisScan::new(velocity.y, size.height, playfield.height);

    let mut cx = position.x + x_scan.offset;
    let mut cy = position.y + y_scan.offset;
    let mut steps = 0u32;

    while !x_scan.exited(cx) && !y_scan.exited(cy) {
        if steps >= max_steps {
            return Err(MotionError::StepLimit { steps });
        }
        cx += velocity.x;
        cy += velocity.y;
        steps += 1;
    }

    // Offsets only steer the scan; the result is built from the step count
    let n = f64::from(steps);
    Ok(Point::new(position.x + n * velocity.x, position.y + n * velocity.y))
}

/// Scalar speed of an entity moving from `position` to `destination` at `velocity`
///
/// The destination always lies along the velocity ray, so the speed is the
/// velocity's magnitude. No motion (zero velocity, or a destination equal to
/// the position) gives 0.
pub fn speed_from_velocity(position: Point, destination: Point, velocity: Vector) -> f64 {
    if velocity.is_zero() || position == destination {
        return 0.0;
    }
    velocity.magnitude()
}
