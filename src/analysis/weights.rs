use crate::error::GameError;
use crate::game::moves::MoveValue;
use serde::Serialize;

/// Sampling weight per move, canonical order. Zero excludes a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeightTable {
    weights: [u32; 5],
}

impl WeightTable {
    /// Builds a table from weights in canonical order. An all-zero table
    /// could never be sampled and is rejected, as is one whose total does
    /// not fit in a `u32`.
    pub fn new(weights: [u32; 5]) -> Result<Self, GameError> {
        let table = WeightTable { weights };
        match table.total() {
            0 => Err(GameError::EmptyDistribution),
            total if total > u32::MAX as u64 => Err(GameError::WeightOverflow { max: u32::MAX }),
            _ => Ok(table),
        }
    }

    pub fn uniform(weight: u32) -> Result<Self, GameError> {
        Self::new([weight; 5])
    }

    /// Builds a table from explicit pairs; every move must appear exactly once.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = (MoveValue, u32)>,
    {
        let mut weights = [None; 5];
        for (m, w) in pairs {
            if weights[m.index()].replace(w).is_some() {
                return Err(GameError::InvalidMove(format!("{} listed twice", m)));
            }
        }
        let mut filled = [0u32; 5];
        for (slot, m) in filled.iter_mut().zip(MoveValue::ALL) {
            *slot = weights[m.index()]
                .ok_or_else(|| GameError::InvalidMove(format!("{} has no weight", m)))?;
        }
        Self::new(filled)
    }

    pub fn get(&self, m: MoveValue) -> u32 {
        self.weights[m.index()]
    }

    /// Only lowers weights in practice; callers keep at least one positive.
    pub(crate) fn set(&mut self, m: MoveValue, weight: u32) {
        self.weights[m.index()] = weight;
    }

    pub fn total(&self) -> u64 {
        self.weights.iter().map(|w| *w as u64).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MoveValue, u32)> + '_ {
        MoveValue::ALL.into_iter().map(|m| (m, self.get(m)))
    }

    pub fn all_positive(&self) -> bool {
        self.weights.iter().all(|w| *w > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_all_zero_tables() {
        assert_eq!(WeightTable::new([0; 5]), Err(GameError::EmptyDistribution));
        assert!(WeightTable::new([0, 0, 0, 0, 1]).is_ok());
    }

    #[test]
    fn from_pairs_requires_every_move_once() {
        let table = WeightTable::from_pairs([
            (MoveValue::Spock, 10),
            (MoveValue::Rock, 1),
            (MoveValue::Paper, 2),
            (MoveValue::Scissors, 2),
            (MoveValue::Lizard, 2),
        ])
        .unwrap();
        assert_eq!(table.get(MoveValue::Spock), 10);
        assert_eq!(table.get(MoveValue::Rock), 1);

        assert!(WeightTable::from_pairs([(MoveValue::Rock, 1)]).is_err());
        assert!(WeightTable::from_pairs([
            (MoveValue::Rock, 1),
            (MoveValue::Rock, 1),
            (MoveValue::Paper, 2),
            (MoveValue::Scissors, 2),
            (MoveValue::Lizard, 2),
        ])
        .is_err());
    }

    #[test]
    fn rejects_totals_past_u32() {
        assert_eq!(
            WeightTable::new([u32::MAX, 1, 1, 1, 1]),
            Err(GameError::WeightOverflow { max: u32::MAX })
        );
        let table = WeightTable::new([u32::MAX, 0, 0, 0, 0]).unwrap();
        assert_eq!(table.total(), u32::MAX as u64);
        assert!(WeightTable::uniform(u32::MAX / 4).is_err());
    }
}
