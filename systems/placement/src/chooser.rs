//! Randomised selection between intersecting and free candidates.

use log::trace;
use rand::{seq::SliceRandom, Rng};

use crate::{candidates::Candidate, PlacementConfig};

/// Candidate list a [`Choice`] was drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandidateSource {
    /// The biased coin favoured intersections.
    Intersecting,
    /// Picked from the free scan.
    Free,
    /// The coin favoured free placements but none existed, so an
    /// intersecting candidate was taken instead.
    IntersectingFallback,
}

/// Candidate selected for commit together with where it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice<'w> {
    /// Selected placement.
    pub candidate: Candidate<'w>,
    /// List the placement was drawn from.
    pub source: CandidateSource,
}

/// Picks one candidate per word from the two candidate lists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementChooser {
    intersection_bias: f64,
}

impl Default for PlacementChooser {
    fn default() -> Self {
        Self::new(PlacementConfig::default())
    }
}

impl PlacementChooser {
    /// Creates a chooser using the configured intersection bias.
    #[must_use]
    pub fn new(config: PlacementConfig) -> Self {
        Self {
            intersection_bias: config.intersection_bias(),
        }
    }

    /// Selects a candidate, or `None` when both lists are empty.
    ///
    /// A coin weighted by the intersection bias is flipped only when
    /// intersecting candidates exist. Within a list the pick is uniform.
    /// When the coin favours free placements but the free list is empty, the
    /// intersecting list is used so that any available candidate is taken.
    pub fn choose<'w, R>(
        &self,
        intersecting: &[Candidate<'w>],
        free: &[Candidate<'w>],
        rng: &mut R,
    ) -> Option<Choice<'w>>
    where
        R: Rng + ?Sized,
    {
        let prefer_intersecting =
            !intersecting.is_empty() && rng.gen_bool(self.intersection_bias);
        trace!(
            "choosing among {} intersecting and {} free candidates (prefer intersecting: {prefer_intersecting})",
            intersecting.len(),
            free.len()
        );

        let (list, source) = if prefer_intersecting {
            (intersecting, CandidateSource::Intersecting)
        } else if !free.is_empty() {
            (free, CandidateSource::Free)
        } else {
            (intersecting, CandidateSource::IntersectingFallback)
        };

        list.choose(rng).map(|candidate| Choice {
            candidate: *candidate,
            source,
        })
    }
}
