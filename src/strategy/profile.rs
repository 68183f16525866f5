use crate::analysis::frequency::percent_frequencies;
use crate::analysis::weights::WeightTable;
use crate::error::GameError;
use crate::game::history::{Actor, RoundHistory};
use crate::game::moves::WinRelation;
use serde::Serialize;

pub const MAX_ADAPTIVENESS: u32 = 10;
pub const DEFAULT_THRESHOLD_PERCENT: u32 = 30;

/// Opponent that re-derives its weights from the human's move frequencies
/// before every choice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adaptive {
    baseline: WeightTable,
    active: WeightTable,
    adaptiveness: u32,
    threshold: u32,
    #[serde(skip)]
    relation: WinRelation,
}

impl Adaptive {
    pub fn new(baseline: WeightTable, adaptiveness: u32, threshold: u32) -> Result<Self, GameError> {
        if adaptiveness > MAX_ADAPTIVENESS {
            return Err(GameError::StrategyInvariantViolation(format!(
                "adaptiveness {} outside 0..={}",
                adaptiveness, MAX_ADAPTIVENESS
            )));
        }
        if !baseline.all_positive() {
            return Err(GameError::StrategyInvariantViolation(
                "adaptive baseline weights must all be positive".to_string(),
            ));
        }
        Ok(Adaptive {
            baseline,
            active: baseline,
            adaptiveness,
            threshold,
            relation: WinRelation::STANDARD,
        })
    }

    pub fn with_relation(mut self, relation: WinRelation) -> Self {
        self.relation = relation;
        self
    }

    pub fn adaptiveness(&self) -> u32 {
        self.adaptiveness
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn baseline(&self) -> &WeightTable {
        &self.baseline
    }

    /// Weight given to a move that loses to a dominant human move.
    pub fn depressed_weight(&self) -> u32 {
        MAX_ADAPTIVENESS.saturating_sub(self.adaptiveness)
    }

    /// Recomputes the active table from scratch. Where several dominant
    /// human moves depress the same target, the lowest weight wins.
    pub fn adapt(&mut self, history: &RoundHistory) -> Result<(), GameError> {
        self.active = self.baseline;
        let frequencies = percent_frequencies(history, Actor::Human);
        let depressed = self.depressed_weight();

        for (dominant, pct) in frequencies.iter() {
            if pct <= self.threshold as f64 {
                continue;
            }
            for target in self.relation.defeated_by(dominant) {
                let weight = self.active.get(target).min(depressed);
                self.active.set(target, weight);
            }
            tracing::debug!(
                %dominant,
                pct,
                depressed,
                "human favours a move, depressing the moves it beats"
            );
        }

        if self.active.total() == 0 {
            return Err(GameError::StrategyInvariantViolation(
                "adaptation left no selectable move".to_string(),
            ));
        }
        Ok(())
    }
}

/// Opponent policy: adaptive, or fixed weights that ignore history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StrategyProfile {
    Adaptive(Adaptive),
    Static { weights: WeightTable },
}

impl StrategyProfile {
    pub fn adaptive(adaptiveness: u32) -> Result<Self, GameError> {
        Self::adaptive_with(WeightTable::uniform(10)?, adaptiveness, DEFAULT_THRESHOLD_PERCENT)
    }

    pub fn adaptive_with(
        baseline: WeightTable,
        adaptiveness: u32,
        threshold: u32,
    ) -> Result<Self, GameError> {
        Ok(StrategyProfile::Adaptive(Adaptive::new(
            baseline,
            adaptiveness,
            threshold,
        )?))
    }

    pub fn fixed(weights: WeightTable) -> Self {
        StrategyProfile::Static { weights }
    }

    pub fn is_adaptive(&self) -> bool {
        matches!(self, StrategyProfile::Adaptive(_))
    }

    pub fn adapt(&mut self, history: &RoundHistory) -> Result<(), GameError> {
        match self {
            StrategyProfile::Adaptive(adaptive) => adaptive.adapt(history),
            StrategyProfile::Static { .. } => Ok(()),
        }
    }

    pub fn active_weights(&self) -> &WeightTable {
        match self {
            StrategyProfile::Adaptive(adaptive) => &adaptive.active,
            StrategyProfile::Static { weights } => weights,
        }
    }

    pub fn baseline(&self) -> &WeightTable {
        match self {
            StrategyProfile::Adaptive(adaptive) => &adaptive.baseline,
            StrategyProfile::Static { weights } => weights,
        }
    }
}
