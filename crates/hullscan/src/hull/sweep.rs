//! Gift-wrapping sweep (Jarvis march split into upper and lower passes).
//!
//! Model
//! - Anchors: `x_min` is the leftmost point (ties: highest), `x_max` the
//!   rightmost (ties: lowest).
//! - Upper pass: from `x_min`, only points at or right of the current x are
//!   candidates; take the steepest segment (co-linear ties: farther) until
//!   `x_max` is reached.
//! - Lower pass: from `x_max`, only points at or left of the current x are
//!   candidates; upward verticals rank as downward ones, then the same
//!   selection runs until `x_min` is reached again.
//! - In both passes the current point and the one accepted just before it are
//!   never candidates.
//!
//! The result is traversed clockwise starting at `x_min`.

use crate::geom::{fan, leftmost, max_slope_by, rightmost, PointSet, Segment, Slope};

use super::types::{
    validate, Chain, HullBuilder, HullError, HullObserver, HullResult, Phase, StepEvent,
};

/// Sweep (gift-wrapping) hull builder.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sweep;

impl HullBuilder for Sweep {
    fn name(&self) -> &'static str {
        "sweep"
    }

    fn build_observed(
        &self,
        points: &PointSet,
        observer: &mut dyn HullObserver,
    ) -> Result<HullResult, HullError> {
        validate(points)?;
        let x_min = leftmost(points).ok_or(HullError::InsufficientPoints { unique: 0 })?;
        let x_max = rightmost(points).ok_or(HullError::InsufficientPoints { unique: 0 })?;

        let mut chain = Chain::new(x_min);
        while chain.last() != x_max {
            let edge = step(points, &chain, Phase::Upper, observer)?;
            chain.extend(edge);
            guard(&chain, points, Phase::Upper)?;
        }
        loop {
            let edge = step(points, &chain, Phase::Lower, observer)?;
            if edge.end() == x_min {
                return Ok(chain.close(edge));
            }
            chain.extend(edge);
            guard(&chain, points, Phase::Lower)?;
        }
    }
}

/// Pick the next edge out of `chain.last()` for the given pass.
fn step(
    points: &PointSet,
    chain: &Chain,
    phase: Phase,
    observer: &mut dyn HullObserver,
) -> Result<Segment, HullError> {
    let current = chain.last();
    let previous = chain.previous();
    let sweep_x = points[current].x;
    let candidates = fan(points, current, |id, p| {
        Some(id) != previous
            && match phase {
                Phase::Lower => p.x <= sweep_x,
                _ => p.x >= sweep_x,
            }
    });
    let key = |s: &Segment| -> Slope {
        match phase {
            Phase::Lower => s.slope().downward(),
            _ => s.slope(),
        }
    };
    let chosen = *max_slope_by(&candidates, key).ok_or(HullError::NoProgress { phase })?;
    observer.on_step(&StepEvent::chosen(phase, candidates, chosen));
    Ok(chosen)
}

/// A chain can never hold more vertices than there are points.
fn guard(chain: &Chain, points: &PointSet, phase: Phase) -> Result<(), HullError> {
    if chain.len() > points.len() {
        return Err(HullError::NoProgress { phase });
    }
    Ok(())
}
