use super::profile::{StrategyProfile, DEFAULT_THRESHOLD_PERCENT};
use crate::analysis::weights::WeightTable;
use crate::error::GameError;
use clap::ValueEnum;
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Named computer opponents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Personality {
    /// Fully adaptive
    Hal,
    /// Adaptive in name only: depressed weights stay at 10
    ZxSpectrum,
    /// Stubborn: never plays lizard or spock
    Atari,
    /// Stubborn: mostly plays spock
    Spock,
}

impl Personality {
    pub const ALL: [Personality; 4] = [
        Personality::Hal,
        Personality::ZxSpectrum,
        Personality::Atari,
        Personality::Spock,
    ];

    /// Picks stubborn or smart with even odds, then one opponent of that kind.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let smart = rng.random_bool(0.5);
        let first = rng.random_bool(0.5);
        match (smart, first) {
            (true, true) => Personality::Hal,
            (true, false) => Personality::ZxSpectrum,
            (false, true) => Personality::Atari,
            (false, false) => Personality::Spock,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Personality::Hal => "HAL",
            Personality::ZxSpectrum => "ZX Spectrum",
            Personality::Atari => "Atari",
            Personality::Spock => "Spock",
        }
    }

    pub fn profile(self, threshold: u32) -> Result<StrategyProfile, GameError> {
        match self {
            Personality::Hal => StrategyProfile::adaptive_with(WeightTable::uniform(10)?, 10, threshold),
            Personality::ZxSpectrum => {
                StrategyProfile::adaptive_with(WeightTable::uniform(10)?, 0, threshold)
            }
            Personality::Atari => Ok(StrategyProfile::fixed(WeightTable::new([10, 10, 10, 0, 0])?)),
            Personality::Spock => Ok(StrategyProfile::fixed(WeightTable::new([1, 2, 2, 2, 10])?)),
        }
    }

    pub fn default_profile(self) -> Result<StrategyProfile, GameError> {
        self.profile(DEFAULT_THRESHOLD_PERCENT)
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::moves::MoveValue;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn profiles_match_their_kind() {
        assert!(Personality::Hal.default_profile().unwrap().is_adaptive());
        assert!(Personality::ZxSpectrum.default_profile().unwrap().is_adaptive());
        assert!(!Personality::Atari.default_profile().unwrap().is_adaptive());

        let spock = Personality::Spock.default_profile().unwrap();
        assert_eq!(spock.active_weights().get(MoveValue::Spock), 10);
        assert_eq!(spock.active_weights().get(MoveValue::Rock), 1);
    }

    #[test]
    fn random_reaches_every_opponent() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(Personality::random(&mut rng));
        }
        assert_eq!(seen.len(), Personality::ALL.len());
    }
}
