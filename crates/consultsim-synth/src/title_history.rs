//! Promotion-chain generator.
//!
//! Each consultant gets one to three contiguous title records: an entry title
//! drawn toward junior levels, then up to two promotions, each starting the
//! month the previous title ended. The final title is usually still held.

use chrono::NaiveDate;
use consultsim_core::config::TitleHistoryConfig;
use consultsim_core::errors::SynthError;
use consultsim_core::models::{ConsultantId, TitleHistoryRecord};
use rand::distributions::{Bernoulli, Distribution, WeightedIndex};
use rand::Rng;

use crate::calendar::{add_months, first_of_month, months_between};
use crate::ladder::TitleLadder;

/// A chain has zero, one or two promotions.
const PROMOTION_OUTCOMES: usize = 3;

/// Window and probabilities shaping every chain.
#[derive(Debug, Clone)]
pub struct ChainParams {
    /// Earliest entry month.
    pub simulation_start: NaiveDate,
    /// Latest entry month.
    pub entry_cutoff: NaiveDate,
    /// Cap on every end date.
    pub simulation_end: NaiveDate,
    pub still_active_probability: f64,
    pub min_tenure_months: u32,
    pub max_tenure_months: u32,
    /// Weights for 0, 1, 2 promotions.
    pub promotion_weights: Vec<f64>,
}

impl ChainParams {
    /// Resolve effective values; window bounds are floored to month starts.
    pub fn from_config(config: &TitleHistoryConfig) -> Self {
        Self {
            simulation_start: first_of_month(config.effective_simulation_start()),
            entry_cutoff: first_of_month(config.effective_entry_cutoff()),
            simulation_end: first_of_month(config.effective_simulation_end()),
            still_active_probability: config.effective_still_active_probability(),
            min_tenure_months: config.effective_min_tenure_months(),
            max_tenure_months: config.effective_max_tenure_months(),
            promotion_weights: config.effective_promotion_weights(),
        }
    }
}

impl Default for ChainParams {
    fn default() -> Self {
        Self::from_config(&TitleHistoryConfig::default())
    }
}

/// Produces title-history chains. Holds no random state: the caller threads
/// one seeded generator through every call.
#[derive(Debug, Clone)]
pub struct PromotionChainGenerator {
    ladder: TitleLadder,
    params: ChainParams,
    promotions: WeightedIndex<f64>,
    entry_rank: WeightedIndex<f64>,
    still_active: Bernoulli,
}

impl PromotionChainGenerator {
    pub fn new(ladder: TitleLadder, params: ChainParams) -> Result<Self, SynthError> {
        if params.promotion_weights.len() != PROMOTION_OUTCOMES {
            return Err(SynthError::InvalidDistribution {
                what: "promotion count".to_string(),
                message: format!(
                    "expected {PROMOTION_OUTCOMES} weights (0, 1, 2 promotions), got {}",
                    params.promotion_weights.len()
                ),
            });
        }
        let promotions = WeightedIndex::new(&params.promotion_weights).map_err(|e| {
            SynthError::InvalidDistribution {
                what: "promotion count".to_string(),
                message: e.to_string(),
            }
        })?;
        let entry_rank = WeightedIndex::new(ladder.entry_weights()).map_err(|e| {
            SynthError::InvalidDistribution {
                what: "entry title".to_string(),
                message: e.to_string(),
            }
        })?;
        let still_active = Bernoulli::new(params.still_active_probability).map_err(|e| {
            SynthError::InvalidDistribution {
                what: "still-active".to_string(),
                message: e.to_string(),
            }
        })?;
        if params.min_tenure_months > params.max_tenure_months {
            return Err(SynthError::InvalidDistribution {
                what: "tenure".to_string(),
                message: format!(
                    "min {} exceeds max {}",
                    params.min_tenure_months, params.max_tenure_months
                ),
            });
        }

        Ok(Self {
            ladder,
            params,
            promotions,
            entry_rank,
            still_active,
        })
    }

    pub fn ladder(&self) -> &TitleLadder {
        &self.ladder
    }

    pub fn params(&self) -> &ChainParams {
        &self.params
    }

    /// Generate the full chain for one consultant.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        consultant_id: &ConsultantId,
    ) -> Vec<TitleHistoryRecord> {
        let drawn = self.promotions.sample(rng);
        let initial_rank = self.entry_rank.sample(rng);
        self.build_chain(rng, consultant_id, drawn, initial_rank)
    }

    /// Build a chain from an already drawn promotion target and entry rank.
    /// The promotion count is clamped so nobody climbs past the top rank.
    pub fn build_chain<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        consultant_id: &ConsultantId,
        drawn_promotions: usize,
        initial_rank: usize,
    ) -> Vec<TitleHistoryRecord> {
        let top = self.ladder.top_rank();
        let initial_rank = initial_rank.min(top);
        let promotions = drawn_promotions.min(top - initial_rank);

        let mut chain: Vec<TitleHistoryRecord> = Vec::with_capacity(promotions + 1);
        let mut rank = initial_rank;

        for i in 0..=promotions {
            let is_last = i == promotions;

            let start_date = if i == 0 {
                self.entry_month(rng)
            } else {
                match chain.last().and_then(|prev| prev.end_date) {
                    Some(prev_end) => prev_end,
                    None => break,
                }
            };

            let end_date = if is_last && self.still_active.sample(rng) {
                None
            } else {
                Some(self.tenure_end(rng, start_date))
            };

            let level = self.ladder.level(rank);
            chain.push(TitleHistoryRecord {
                consultant_id: consultant_id.clone(),
                title_id: level.title_id,
                start_date,
                end_date,
                salary: level.salary.sample(rng),
            });

            rank = (rank + 1).min(top);
        }

        chain
    }

    /// Uniform first-of-month between the simulation start and the entry cutoff.
    fn entry_month<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDate {
        let start = self.params.simulation_start;
        let span = months_between(start, self.params.entry_cutoff);
        if span <= 0 {
            return first_of_month(start);
        }
        let offset = rng.gen_range(0..=span as u32);
        first_of_month(add_months(start, offset))
    }

    /// End of a tenure starting at `start`, capped at the simulation end.
    fn tenure_end<R: Rng + ?Sized>(&self, rng: &mut R, start: NaiveDate) -> NaiveDate {
        let months =
            rng.gen_range(self.params.min_tenure_months..=self.params.max_tenure_months);
        first_of_month(add_months(start, months)).min(self.params.simulation_end)
    }
}
