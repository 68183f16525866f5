use super::history::{Outcome, RoundRecord};
use super::moves::{MoveValue, WinRelation};
use crate::error::GameError;

/// Progress of a single round. `Evaluated` is terminal; the next round
/// starts again from `AwaitingMoves`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingMoves { human: Option<MoveValue> },
    Evaluated(RoundRecord),
}

impl Default for RoundState {
    fn default() -> Self {
        RoundState::AwaitingMoves { human: None }
    }
}

impl RoundState {
    pub fn submit_human(&mut self, human: MoveValue) -> Result<(), GameError> {
        match self {
            RoundState::AwaitingMoves { human: slot } => {
                *slot = Some(human);
                Ok(())
            }
            RoundState::Evaluated(_) => Err(GameError::RoundOutOfOrder(
                "round already evaluated".to_string(),
            )),
        }
    }

    pub fn human(&self) -> Option<MoveValue> {
        match self {
            RoundState::AwaitingMoves { human } => *human,
            RoundState::Evaluated(record) => Some(record.human),
        }
    }

    /// Moves to `Evaluated` once the computer move is known.
    pub fn evaluate(
        &mut self,
        relation: &WinRelation,
        computer: MoveValue,
    ) -> Result<RoundRecord, GameError> {
        let human = match self {
            RoundState::AwaitingMoves { human: Some(human) } => *human,
            RoundState::AwaitingMoves { human: None } => {
                return Err(GameError::RoundOutOfOrder(
                    "human move not submitted".to_string(),
                ))
            }
            RoundState::Evaluated(_) => {
                return Err(GameError::RoundOutOfOrder(
                    "round already evaluated".to_string(),
                ))
            }
        };
        let record = evaluate(relation, human, computer);
        *self = RoundState::Evaluated(record);
        Ok(record)
    }
}

pub fn decide(relation: &WinRelation, human: MoveValue, computer: MoveValue) -> Outcome {
    if relation.beats(human, computer) {
        Outcome::Human
    } else if relation.beats(computer, human) {
        Outcome::Computer
    } else {
        Outcome::Tie
    }
}

pub fn evaluate(relation: &WinRelation, human: MoveValue, computer: MoveValue) -> RoundRecord {
    RoundRecord {
        human,
        computer,
        outcome: decide(relation, human, computer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paper_covers_rock() {
        let record = evaluate(&WinRelation::STANDARD, MoveValue::Paper, MoveValue::Rock);
        assert_eq!(record.outcome, Outcome::Human);
    }

    #[test]
    fn identical_moves_tie() {
        let record = evaluate(&WinRelation::STANDARD, MoveValue::Rock, MoveValue::Rock);
        assert_eq!(record.outcome, Outcome::Tie);
    }

    #[test]
    fn spock_vaporizes_rock() {
        assert_eq!(
            decide(&WinRelation::STANDARD, MoveValue::Rock, MoveValue::Spock),
            Outcome::Computer
        );
    }

    #[test]
    fn state_machine_requires_human_first() {
        let relation = WinRelation::STANDARD;
        let mut state = RoundState::default();
        assert!(matches!(
            state.evaluate(&relation, MoveValue::Rock),
            Err(GameError::RoundOutOfOrder(_))
        ));

        state.submit_human(MoveValue::Lizard).unwrap();
        let record = state.evaluate(&relation, MoveValue::Spock).unwrap();
        assert_eq!(record.outcome, Outcome::Human);
        assert_eq!(state, RoundState::Evaluated(record));
        assert!(state.submit_human(MoveValue::Rock).is_err());
        assert!(state.evaluate(&relation, MoveValue::Rock).is_err());
    }
}
