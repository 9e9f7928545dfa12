use tracing::debug;

use crate::core::{
    filters::evaluate_place,
    random::{unit_to_index, RandomSource},
    scoring::{DesirabilityScorer, PlaceScorer},
};
use crate::models::{
    DebugTrace, Evaluation, FilterSet, Place, SelectionMode, SelectionPath, SelectionResult,
    TraceEntry,
};

/// Picks one place out of a candidate list - the "surprise me" engine
///
/// # Pipeline Stages
/// 1. Evaluate every candidate against the filters (one trace entry each)
/// 2. Keep the passing candidates
/// 3. Draw uniformly (random mode) or in proportion to score (weighted mode)
///
/// The selector keeps no state between calls; randomness comes from the caller's
/// [`RandomSource`].
#[derive(Debug, Clone, Default)]
pub struct Selector<S = DesirabilityScorer> {
    scorer: S,
}

impl Selector {
    pub fn new() -> Self {
        Self {
            scorer: DesirabilityScorer,
        }
    }
}

impl<S: PlaceScorer> Selector<S> {
    /// Selector driven by a custom scorer
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    /// Select a suggestion from `places`
    ///
    /// # Arguments
    /// * `places` - All candidates supplied by the data source
    /// * `filters` - Active preference filters
    /// * `mode` - Uniform or score-weighted draw
    /// * `rng` - Source of unit draws
    ///
    /// # Returns
    /// The chosen place (none only when nothing passes) and a trace of how it was chosen
    pub fn select<'a, R>(
        &self,
        places: &'a [Place],
        filters: &FilterSet,
        mode: SelectionMode,
        rng: &mut R,
    ) -> SelectionResult<'a>
    where
        R: RandomSource + ?Sized,
    {
        let evaluations: Vec<Evaluation<'a>> = places
            .iter()
            .map(|place| evaluate_place(place, filters))
            .collect();

        // One score per candidate; the trace and the draw read the same values
        let scores: Vec<Option<f64>> = evaluations
            .iter()
            .map(|evaluation| match mode {
                SelectionMode::Weighted => Some(self.scorer.score(evaluation, filters)),
                SelectionMode::Random => None,
            })
            .collect();

        let entries: Vec<TraceEntry> = evaluations
            .iter()
            .zip(&scores)
            .map(|(evaluation, score)| TraceEntry {
                id: evaluation.place.id.clone(),
                score: *score,
                distance_km: evaluation.distance_km,
                matches: evaluation.matches,
            })
            .collect();

        let passing: Vec<(&'a Place, Option<f64>)> = evaluations
            .iter()
            .zip(&scores)
            .filter(|(evaluation, _)| evaluation.passes)
            .map(|(evaluation, score)| (evaluation.place, *score))
            .collect();

        let (place, path) = if passing.is_empty() {
            (None, SelectionPath::NoMatch)
        } else {
            match mode {
                SelectionMode::Random => {
                    let index = unit_to_index(rng.next_unit(), passing.len());
                    (Some(passing[index].0), SelectionPath::Random { index })
                }
                SelectionMode::Weighted => {
                    let scored: Vec<(&'a Place, f64)> = passing
                        .iter()
                        .map(|(place, score)| (*place, score.unwrap_or(0.0)))
                        .collect();
                    let (place, path) = weighted_pick(&scored, rng);
                    (Some(place), path)
                }
            }
        };

        debug!(
            mode = %mode,
            total_candidates = places.len(),
            filtered_count = passing.len(),
            selected = place.map(|p| p.id.as_str()),
            path = ?path,
            "Selection complete"
        );

        SelectionResult {
            place,
            debug: DebugTrace {
                mode,
                total_candidates: places.len(),
                filtered_count: passing.len(),
                entries,
                note: path.note(),
                path,
            },
        }
    }
}

/// Score-proportional draw over a non-empty passing list
///
/// Inverse-CDF sampling: draw a threshold in `[0, total)` and walk the list in input
/// order, subtracting each score until the threshold drops to zero or below.
fn weighted_pick<'a, R>(scored: &[(&'a Place, f64)], rng: &mut R) -> (&'a Place, SelectionPath)
where
    R: RandomSource + ?Sized,
{
    let total_score: f64 = scored.iter().map(|(_, score)| score).sum();

    if total_score <= 0.0 {
        let index = unit_to_index(rng.next_unit(), scored.len());
        return (scored[index].0, SelectionPath::WeightedZeroFallback { index });
    }

    let mut threshold = rng.next_unit() * total_score;
    for (place, score) in scored {
        threshold -= score;
        if threshold <= 0.0 {
            return (*place, SelectionPath::Weighted { total_score });
        }
    }

    // Only reachable through rounding, out-of-range draws or non-finite scores.
    // Keep the first of equal scores and treat NaN as lowest.
    let mut best = scored[0];
    for candidate in &scored[1..] {
        if candidate.1 > best.1 || (best.1.is_nan() && !candidate.1.is_nan()) {
            best = *candidate;
        }
    }
    (best.0, SelectionPath::WeightedWalkFallback)
}


/// Select a suggestion with the default desirability scorer
pub fn select<'a, R>(
    places: &'a [Place],
    filters: &FilterSet,
    mode: SelectionMode,
    rng: &mut R,
) -> SelectionResult<'a>
where
    R: RandomSource + ?Sized,
{
    Selector::new().select(places, filters, mode, rng)
}
