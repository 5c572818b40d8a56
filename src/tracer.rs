use crate::geometry::{Direction, Grid, Point};
use crate::mirrors::MirrorField;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// One straight run of a ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub steps: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Reached a dot other than the one it was fired from.
    DotRing,
    /// Left the board entirely.
    OutOfBounds,
    /// Hit the step cap. Unreachable with single-reflection mirrors.
    StepLimit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub segments: Vec<Segment>,
    /// Product of every segment's step count. Saturates at `u64::MAX`.
    pub product: u64,
    pub final_dot: Point,
    pub termination: Termination,
}

/// Walks a ray from `entry` heading `direction` until it stops.
pub fn shoot_laser(grid: &Grid, mirrors: &MirrorField, entry: Point, direction: Direction) -> Trace {
    let mut heading = direction;
    let mut pos = entry;
    let mut seg_start = entry;
    let mut steps: u32 = 0;
    let mut product: u64 = 1;
    let mut segments = Vec::new();

    let limit = grid.max_trace_steps();
    let mut walked = 0usize;

    loop {
        pos = pos.step(heading);
        steps += 1;
        walked += 1;

        let stop = if !grid.in_bounds(pos) {
            Some(Termination::OutOfBounds)
        } else if grid.on_dot_ring(pos) && pos != entry {
            Some(Termination::DotRing)
        } else if walked >= limit {
            Some(Termination::StepLimit)
        } else {
            None
        };

        if let Some(termination) = stop {
            segments.push(Segment {
                start: seg_start,
                end: pos,
                steps,
            });
            product = product.saturating_mul(steps as u64);
            return Trace {
                segments,
                product,
                final_dot: pos,
                termination,
            };
        }

        if let Some(mirror) = grid.offset_of(pos).and_then(|o| mirrors.get(o)) {
            segments.push(Segment {
                start: seg_start,
                end: pos,
                steps,
            });
            product = product.saturating_mul(steps as u64);
            heading = mirror.reflect(heading);
            seg_start = pos;
            steps = 0;
        }
    }
}
