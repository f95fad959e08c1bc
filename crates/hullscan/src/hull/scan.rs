//! Angle-ordered scan with retraction (Graham-scan style).
//!
//! Model
//! - Start at the leftmost point (ties: highest). It is always a hull vertex and
//!   doubles as the pivot of the scan.
//! - The steepest segment out of the pivot fixes the second vertex and the
//!   reference direction. Every other point lies clockwise of that direction.
//! - Remaining points are visited by descending rotation from the reference
//!   (co-linear ties: farther first). Each visit proposes an edge from the last
//!   hull vertex; while that edge makes a left turn with the last accepted edge,
//!   the last vertex is retracted.
//! - The pivot is visited last, which closes the cycle.
//!
//! The result is traversed clockwise starting at the pivot.

use std::iter;

use crate::geom::{fan, leftmost, same_direction, sort_by_rotation, sort_by_slope, PointSet, Segment};

use super::types::{
    validate, Chain, HullBuilder, HullError, HullObserver, HullResult, Phase, StepEvent,
};

/// Angle-scan hull builder.
#[derive(Clone, Copy, Debug, Default)]
pub struct AngleScan;

impl HullBuilder for AngleScan {
    fn name(&self) -> &'static str {
        "angle-scan"
    }

    fn build_observed(
        &self,
        points: &PointSet,
        observer: &mut dyn HullObserver,
    ) -> Result<HullResult, HullError> {
        validate(points)?;
        let pivot = leftmost(points).ok_or(HullError::InsufficientPoints { unique: 0 })?;

        let mut seeds = fan(points, pivot, |_, _| true);
        sort_by_slope(&mut seeds);
        let seed = *seeds.first().ok_or(HullError::NoProgress { phase: Phase::Seed })?;
        observer.on_step(&StepEvent::chosen(Phase::Seed, seeds.clone(), seed));

        let mut chain = Chain::new(pivot);
        chain.extend(seed);

        // Points on the seed ray are either the second vertex or lie on the first edge.
        let reference = seed.vector();
        let mut rays: Vec<Segment> = seeds
            .into_iter()
            .filter(|s| !same_direction(reference, s.vector()))
            .collect();
        sort_by_rotation(reference, &mut rays);
        observer.on_step(&StepEvent::candidates(Phase::Scan, rays.clone()));

        let targets = rays.iter().map(|r| (Some(*r), r.end())).chain(iter::once((None, pivot)));
        for (ray, target) in targets {
            let mut edge = Segment::new(points, chain.last(), target);
            while chain.last_edge().is_some_and(|prev| prev.is_left_turn_to(&edge)) {
                let Some(gone) = chain.retract() else {
                    break;
                };
                observer.on_step(&StepEvent::retracted(Phase::Scan, gone));
                edge = Segment::new(points, chain.last(), target);
            }
            let considered = ray.into_iter().collect();
            observer.on_step(&StepEvent::chosen(Phase::Scan, considered, edge));
            if target == pivot {
                return Ok(chain.close(edge));
            }
            chain.extend(edge);
        }
        Err(HullError::NoProgress { phase: Phase::Scan })
    }
}
