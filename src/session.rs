use crate::analysis::frequency::{percent_frequencies, Frequencies};
use crate::error::GameError;
use crate::game::history::{Actor, Outcome, RoundHistory, RoundRecord};
use crate::game::moves::{MoveValue, WinRelation};
use crate::game::round::{self, RoundState};
use crate::strategy::chooser::OpponentChooser;
use crate::strategy::profile::StrategyProfile;
use rand::rngs::SmallRng;
use rand::Rng;

pub const DEFAULT_FINAL_SCORE: u32 = 5;

/// Samples the computer's move for the coming round.
pub fn request_computer_move<R: Rng>(
    chooser: &mut OpponentChooser<R>,
    profile: &mut StrategyProfile,
    history: &RoundHistory,
) -> Result<MoveValue, GameError> {
    chooser.choose(profile, history)
}

pub fn frequency_report(history: &RoundHistory, actor: Actor) -> Frequencies {
    percent_frequencies(history, actor)
}

/// One match against one computer opponent, played to a final score.
///
/// The session owns its history, profile and random source; concurrent
/// games each need their own session.
pub struct GameSession<R = SmallRng> {
    opponent: String,
    relation: WinRelation,
    profile: StrategyProfile,
    chooser: OpponentChooser<R>,
    history: RoundHistory,
    state: RoundState,
    human_score: u32,
    computer_score: u32,
    final_score: u32,
}

impl<R: Rng> GameSession<R> {
    pub fn new(
        opponent: impl Into<String>,
        profile: StrategyProfile,
        chooser: OpponentChooser<R>,
        final_score: u32,
    ) -> Self {
        GameSession {
            opponent: opponent.into(),
            relation: WinRelation::STANDARD,
            profile,
            chooser,
            history: RoundHistory::new(),
            state: RoundState::default(),
            human_score: 0,
            computer_score: 0,
            final_score: final_score.max(1),
        }
    }

    pub fn with_relation(mut self, relation: WinRelation) -> Self {
        self.relation = relation;
        self
    }

    pub fn submit_human_move(&mut self, human: MoveValue) -> Result<(), GameError> {
        if self.is_match_over() {
            return Err(GameError::RoundOutOfOrder("match is already decided".to_string()));
        }
        if matches!(self.state, RoundState::Evaluated(_)) {
            self.state = RoundState::default();
        }
        self.state.submit_human(human)
    }

    /// Computer move for the pending round; the human must have moved first.
    pub fn request_computer_move(&mut self) -> Result<MoveValue, GameError> {
        match self.state {
            RoundState::AwaitingMoves { human: Some(_) } => {}
            _ => {
                return Err(GameError::RoundOutOfOrder(
                    "human move not submitted".to_string(),
                ))
            }
        }
        request_computer_move(&mut self.chooser, &mut self.profile, &self.history)
    }

    /// Decides the round, records it and updates the score.
    ///
    /// If a human move was submitted for this round, `human` must match it.
    /// A decided match accepts no further rounds.
    pub fn evaluate_round(
        &mut self,
        human: MoveValue,
        computer: MoveValue,
    ) -> Result<RoundRecord, GameError> {
        if self.is_match_over() {
            return Err(GameError::RoundOutOfOrder("match is already decided".to_string()));
        }
        let record = match self.state {
            RoundState::AwaitingMoves {
                human: Some(submitted),
            } if submitted != human => {
                return Err(GameError::RoundOutOfOrder(format!(
                    "human submitted {} but round was evaluated with {}",
                    submitted, human
                )))
            }
            RoundState::AwaitingMoves { human: Some(_) } => {
                self.state.evaluate(&self.relation, computer)?
            }
            _ => {
                let record = round::evaluate(&self.relation, human, computer);
                self.state = RoundState::Evaluated(record);
                record
            }
        };
        self.history.append(record);
        match record.outcome {
            Outcome::Human => self.human_score += 1,
            Outcome::Computer => self.computer_score += 1,
            Outcome::Tie => {}
        }
        tracing::info!(
            opponent = %self.opponent,
            %human,
            %computer,
            outcome = ?record.outcome,
            human_score = self.human_score,
            computer_score = self.computer_score,
            "round evaluated"
        );
        Ok(record)
    }

    pub fn play_round(&mut self, human: MoveValue) -> Result<RoundRecord, GameError> {
        self.submit_human_move(human)?;
        let computer = self.request_computer_move()?;
        self.evaluate_round(human, computer)
    }

    pub fn frequency_report(&self, actor: Actor) -> Frequencies {
        frequency_report(&self.history, actor)
    }

    pub fn is_match_over(&self) -> bool {
        self.human_score >= self.final_score || self.computer_score >= self.final_score
    }

    pub fn match_winner(&self) -> Option<Actor> {
        if self.human_score >= self.final_score {
            Some(Actor::Human)
        } else if self.computer_score >= self.final_score {
            Some(Actor::Computer)
        } else {
            None
        }
    }

    /// Starts a new match against the same opponent.
    pub fn reset(&mut self) {
        self.history.clear();
        self.state = RoundState::default();
        self.human_score = 0;
        self.computer_score = 0;
    }

    pub fn opponent(&self) -> &str {
        &self.opponent
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    pub fn profile(&self) -> &StrategyProfile {
        &self.profile
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.human_score, self.computer_score)
    }

    pub fn final_score(&self) -> u32 {
        self.final_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::weights::WeightTable;

    fn always(m: MoveValue, seed: u64) -> GameSession {
        let mut weights = [0; 5];
        weights[m.index()] = 1;
        GameSession::new(
            "Echo",
            StrategyProfile::fixed(WeightTable::new(weights).unwrap()),
            OpponentChooser::seeded(seed),
            3,
        )
    }

    #[test]
    fn computer_move_requires_a_human_move() {
        let mut session = always(MoveValue::Rock, 1);
        assert!(matches!(
            session.request_computer_move(),
            Err(GameError::RoundOutOfOrder(_))
        ));
        session.submit_human_move(MoveValue::Paper).unwrap();
        assert_eq!(session.request_computer_move(), Ok(MoveValue::Rock));
    }

    #[test]
    fn match_ends_at_final_score() {
        let mut session = always(MoveValue::Rock, 1);
        for _ in 0..3 {
            let record = session.play_round(MoveValue::Paper).unwrap();
            assert_eq!(record.outcome, Outcome::Human);
        }
        assert!(session.is_match_over());
        assert_eq!(session.match_winner(), Some(Actor::Human));
        assert_eq!(session.scores(), (3, 0));
        assert!(session.play_round(MoveValue::Paper).is_err());

        session.reset();
        assert!(session.history().is_empty());
        assert_eq!(session.scores(), (0, 0));
        assert_eq!(session.match_winner(), None);
    }

    #[test]
    fn ties_do_not_score() {
        let mut session = always(MoveValue::Spock, 5);
        let record = session.play_round(MoveValue::Spock).unwrap();
        assert_eq!(record.outcome, Outcome::Tie);
        assert_eq!(session.scores(), (0, 0));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn evaluate_round_appends_to_history() {
        let mut session = always(MoveValue::Rock, 1);
        let record = session
            .evaluate_round(MoveValue::Rock, MoveValue::Lizard)
            .unwrap();
        assert_eq!(record.outcome, Outcome::Human);
        assert_eq!(session.history().last(), Some(&record));
        assert_eq!(session.state(), &RoundState::Evaluated(record));

        let report = session.frequency_report(Actor::Computer);
        assert_eq!(report.get(MoveValue::Lizard), 100.0);
    }

    #[test]
    fn evaluate_round_checks_the_submitted_move() {
        let mut session = always(MoveValue::Rock, 1);
        session.submit_human_move(MoveValue::Paper).unwrap();
        assert!(matches!(
            session.evaluate_round(MoveValue::Scissors, MoveValue::Rock),
            Err(GameError::RoundOutOfOrder(_))
        ));
        assert!(session.history().is_empty());

        let record = session
            .evaluate_round(MoveValue::Paper, MoveValue::Rock)
            .unwrap();
        assert_eq!(record.outcome, Outcome::Human);
        assert_eq!(session.scores(), (1, 0));
    }

    #[test]
    fn evaluate_round_stops_at_final_score() {
        let mut session = always(MoveValue::Rock, 1);
        for _ in 0..3 {
            session
                .evaluate_round(MoveValue::Spock, MoveValue::Rock)
                .unwrap();
        }
        assert!(session.is_match_over());
        assert!(matches!(
            session.evaluate_round(MoveValue::Spock, MoveValue::Rock),
            Err(GameError::RoundOutOfOrder(_))
        ));
        assert_eq!(session.scores(), (3, 0));
        assert_eq!(session.history().len(), 3);
    }
}
