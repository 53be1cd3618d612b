//! Title-level salary model: the ordered ladder of titles, each with a salary
//! distribution and an entry weight.

use consultsim_core::constants::{
    DEFAULT_TITLE_SALARIES, DEFAULT_TITLE_WEIGHTS, FALLBACK_TITLE_SALARY, FALLBACK_TITLE_WEIGHT,
    SYNTHETIC_TITLE_COUNT,
};
use consultsim_core::errors::SynthError;
use consultsim_core::models::TitleId;
use rand::distributions::Distribution;
use rand::Rng;
use rand_distr::Normal;

use crate::calendar::round2;

/// Normal salary distribution for one title level.
#[derive(Debug, Clone, Copy)]
pub struct SalaryBand {
    pub mean: f64,
    pub std_dev: f64,
    normal: Normal<f64>,
}

impl SalaryBand {
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, SynthError> {
        let normal = Normal::new(mean, std_dev).map_err(|e| SynthError::InvalidDistribution {
            what: "salary".to_string(),
            message: format!("mean {mean}, std {std_dev}: {e}"),
        })?;
        Ok(Self {
            mean,
            std_dev,
            normal,
        })
    }

    /// Lowest salary ever drawn: two standard deviations below the mean.
    pub fn floor(&self) -> f64 {
        self.mean - 2.0 * self.std_dev
    }

    /// Draw a salary, floored at [`Self::floor`] and rounded to cents.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        round2(self.normal.sample(rng).max(self.floor()))
    }
}

/// One rung of the ladder.
#[derive(Debug, Clone)]
pub struct TitleLevel {
    pub title_id: TitleId,
    pub salary: SalaryBand,
    /// Relative likelihood of a consultant entering at this level.
    pub entry_weight: f64,
}

/// Titles ordered junior to senior. Rank is the position in the ladder.
#[derive(Debug, Clone)]
pub struct TitleLadder {
    levels: Vec<TitleLevel>,
    synthetic: bool,
}

impl TitleLadder {
    /// Build a ladder from the title ids found in the store.
    ///
    /// Ids are sorted ascending and deduplicated; salary bands and entry
    /// weights are assigned by position, with a fallback entry past the
    /// built-in tables. No ids at all yields the synthetic ladder `1..=6`.
    pub fn from_title_ids(title_ids: &[TitleId]) -> Result<Self, SynthError> {
        let mut ids = title_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        let synthetic = ids.is_empty();
        if synthetic {
            ids = (1..=SYNTHETIC_TITLE_COUNT).map(TitleId).collect();
        }

        let levels = ids
            .into_iter()
            .enumerate()
            .map(|(rank, title_id)| {
                let (mean, std_dev) = DEFAULT_TITLE_SALARIES
                    .get(rank)
                    .copied()
                    .unwrap_or(FALLBACK_TITLE_SALARY);
                let entry_weight = DEFAULT_TITLE_WEIGHTS
                    .get(rank)
                    .copied()
                    .unwrap_or(FALLBACK_TITLE_WEIGHT);
                Ok(TitleLevel {
                    title_id,
                    salary: SalaryBand::new(mean, std_dev)?,
                    entry_weight,
                })
            })
            .collect::<Result<Vec<_>, SynthError>>()?;

        Ok(Self { levels, synthetic })
    }

    /// The fallback ladder used when the store has no titles.
    pub fn synthetic() -> Result<Self, SynthError> {
        Self::from_title_ids(&[])
    }

    /// True when the ladder was synthesized rather than read from the store.
    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn levels(&self) -> &[TitleLevel] {
        &self.levels
    }

    /// Level at `rank`, clamped to the top of the ladder.
    pub fn level(&self, rank: usize) -> &TitleLevel {
        &self.levels[rank.min(self.top_rank())]
    }

    /// Rank of the most senior level.
    pub fn top_rank(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    /// Rank of a title id, if it is on the ladder.
    pub fn rank_of(&self, title_id: TitleId) -> Option<usize> {
        self.levels.iter().position(|l| l.title_id == title_id)
    }

    pub fn entry_weights(&self) -> Vec<f64> {
        self.levels.iter().map(|l| l.entry_weight).collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn empty_store_falls_back_to_six_levels() {
        let ladder = TitleLadder::from_title_ids(&[]).unwrap();
        assert!(ladder.is_synthetic());
        assert_eq!(ladder.len(), 6);
        assert_eq!(ladder.level(0).title_id, TitleId(1));
        assert_eq!(ladder.level(5).title_id, TitleId(6));
        assert_eq!(ladder.top_rank(), 5);
    }

    #[test]
    fn positional_defaults_and_fallback_entries() {
        let ids: Vec<TitleId> = [10, 20, 30, 40, 50, 60, 70, 80].map(TitleId).to_vec();
        let ladder = TitleLadder::from_title_ids(&ids).unwrap();
        assert!(!ladder.is_synthetic());
        assert_eq!(ladder.level(0).salary.mean, 100_000.0);
        assert_eq!(ladder.level(3).salary.std_dev, 20_000.0);
        assert_eq!(ladder.level(6).salary.mean, 200_000.0);
        assert_eq!(ladder.level(7).entry_weight, 0.05);
        assert_eq!(
            ladder.entry_weights(),
            vec![0.30, 0.30, 0.20, 0.10, 0.05, 0.05, 0.05, 0.05]
        );
    }

    #[test]
    fn ids_are_sorted_and_deduplicated() {
        let ids = [3, 1, 3, 2].map(TitleId);
        let ladder = TitleLadder::from_title_ids(&ids).unwrap();
        let order: Vec<i64> = ladder.levels().iter().map(|l| l.title_id.0).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(ladder.rank_of(TitleId(2)), Some(1));
        assert_eq!(ladder.rank_of(TitleId(9)), None);
    }

    #[test]
    fn level_clamps_past_top() {
        let ladder = TitleLadder::from_title_ids(&[TitleId(4), TitleId(7)]).unwrap();
        assert_eq!(ladder.level(9).title_id, TitleId(7));
    }

    #[test]
    fn salary_never_below_floor() {
        let band = SalaryBand::new(100_000.0, 10_000.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..5_000 {
            let s = band.sample(&mut rng);
            assert!(s >= 80_000.0);
            assert_eq!(s, round2(s));
        }
    }

    #[test]
    fn negative_std_is_rejected() {
        assert!(SalaryBand::new(1.0, -1.0).is_err());
    }
}
