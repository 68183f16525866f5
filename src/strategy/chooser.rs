use super::profile::StrategyProfile;
use crate::error::GameError;
use crate::game::history::RoundHistory;
use crate::game::moves::MoveValue;
use rand::distr::weighted::{Error as WeightError, WeightedIndex};
use rand::distr::Distribution;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Draws one move per round from a profile's active weights.
pub struct OpponentChooser<R = SmallRng> {
    rng: R,
}

impl OpponentChooser<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        OpponentChooser::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> OpponentChooser<R> {
    pub fn new(rng: R) -> Self {
        OpponentChooser { rng }
    }

    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Adapts the profile to `history` (adaptive profiles only), then samples.
    pub fn choose(
        &mut self,
        profile: &mut StrategyProfile,
        history: &RoundHistory,
    ) -> Result<MoveValue, GameError> {
        profile.adapt(history)?;
        let weights = profile.active_weights();
        let distribution =
            WeightedIndex::new(weights.iter().map(|(_, w)| w)).map_err(|e| match e {
                WeightError::InsufficientNonZero => GameError::EmptyDistribution,
                WeightError::Overflow => GameError::WeightOverflow { max: u32::MAX },
                other => GameError::StrategyInvariantViolation(other.to_string()),
            })?;
        let choice = MoveValue::from_index(distribution.sample(&mut self.rng))?;
        tracing::debug!(?weights, %choice, "sampled opponent move");
        Ok(choice)
    }
}
