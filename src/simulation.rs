use crate::analysis::frequency::{percent_frequencies, Frequencies};
use crate::analysis::weights::WeightTable;
use crate::error::GameError;
use crate::game::history::{Actor, RoundHistory};
use crate::session::GameSession;
use crate::strategy::chooser::OpponentChooser;
use crate::strategy::personality::Personality;
use crate::strategy::profile::StrategyProfile;
use chrono::{DateTime, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

pub const DEFAULT_MAX_ROUNDS: usize = 1_000;

#[derive(Debug, Clone)]
pub struct SimulationSettings {
    /// Fixed opponent, or `None` to draw one per match.
    pub opponent: Option<Personality>,
    pub matches: usize,
    pub final_score: u32,
    pub threshold: u32,
    pub seed: u64,
    /// Weights of the scripted human, who never adapts.
    pub human_weights: WeightTable,
    pub max_rounds: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub number: usize,
    pub opponent: Personality,
    pub human_score: u32,
    pub computer_score: u32,
    pub rounds: usize,
    pub winner: Option<Actor>,
    /// Set when a round failed and the match was abandoned.
    pub aborted: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub played_at: DateTime<Utc>,
    pub seed: u64,
    pub human_weights: WeightTable,
    pub matches: Vec<MatchReport>,
    pub human_frequencies: Frequencies,
    pub computer_frequencies: Frequencies,
}

impl SimulationReport {
    pub fn wins(&self, actor: Actor) -> usize {
        self.matches
            .iter()
            .filter(|m| m.winner == Some(actor))
            .count()
    }

    pub fn undecided(&self) -> usize {
        self.matches.iter().filter(|m| m.winner.is_none()).count()
    }
}

/// Plays `settings.matches` matches, calling `on_match` after each one.
pub fn run<F>(settings: &SimulationSettings, mut on_match: F) -> Result<SimulationReport, GameError>
where
    F: FnMut(&MatchReport),
{
    let mut rng = SmallRng::seed_from_u64(settings.seed);
    let mut human_profile = StrategyProfile::fixed(settings.human_weights);
    let mut human = OpponentChooser::seeded(rng.random());
    let mut all_rounds = RoundHistory::new();
    let mut matches = Vec::with_capacity(settings.matches);

    for number in 1..=settings.matches {
        let personality = match settings.opponent {
            Some(p) => p,
            None => Personality::random(&mut rng),
        };
        let mut session = GameSession::new(
            personality.name(),
            personality.profile(settings.threshold)?,
            OpponentChooser::seeded(rng.random()),
            settings.final_score,
        );

        let mut aborted = None;
        while !session.is_match_over() && session.history().len() < settings.max_rounds {
            let human_move = human.choose(&mut human_profile, session.history())?;
            if let Err(e) = session.play_round(human_move) {
                tracing::warn!(match_number = number, opponent = %personality, error = %e, "round failed, abandoning match");
                aborted = Some(e.to_string());
                break;
            }
        }

        for record in session.history() {
            all_rounds.append(*record);
        }

        let (human_score, computer_score) = session.scores();
        let report = MatchReport {
            number,
            opponent: personality,
            human_score,
            computer_score,
            rounds: session.history().len(),
            winner: session.match_winner(),
            aborted,
        };
        tracing::debug!(?report, "match finished");
        on_match(&report);
        matches.push(report);
    }

    Ok(SimulationReport {
        played_at: Utc::now(),
        seed: settings.seed,
        human_weights: settings.human_weights,
        matches,
        human_frequencies: percent_frequencies(&all_rounds, Actor::Human),
        computer_frequencies: percent_frequencies(&all_rounds, Actor::Computer),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::moves::MoveValue;

    fn settings(opponent: Option<Personality>, human_weights: [u32; 5]) -> SimulationSettings {
        SimulationSettings {
            opponent,
            matches: 6,
            final_score: 5,
            threshold: 30,
            seed: 11,
            human_weights: WeightTable::new(human_weights).unwrap(),
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    #[test]
    fn hal_punishes_a_rock_heavy_human() {
        let report = run(&settings(Some(Personality::Hal), [1, 0, 0, 0, 0]), |_| {}).unwrap();
        assert_eq!(report.matches.len(), 6);
        // after the first round HAL never plays scissors or lizard
        assert_eq!(report.wins(Actor::Computer), 6);
        assert_eq!(report.human_frequencies.get(MoveValue::Rock), 100.0);
    }

    #[test]
    fn same_seed_replays_identically() {
        let s = settings(None, [3, 1, 1, 1, 1]);
        let a = run(&s, |_| {}).unwrap();
        let b = run(&s, |_| {}).unwrap();
        let summary = |r: &SimulationReport| {
            r.matches
                .iter()
                .map(|m| (m.opponent, m.human_score, m.computer_score, m.rounds))
                .collect::<Vec<_>>()
        };
        assert_eq!(summary(&a), summary(&b));
    }

    #[test]
    fn callback_sees_every_match() {
        let mut seen = Vec::new();
        let report = run(&settings(Some(Personality::Atari), [1, 1, 1, 1, 1]), |m| {
            seen.push(m.number)
        })
        .unwrap();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
        assert!(report
            .matches
            .iter()
            .all(|m| m.winner.is_some() && m.aborted.is_none()));
        assert_eq!(report.computer_frequencies.get(MoveValue::Lizard), 0.0);
        assert_eq!(report.computer_frequencies.get(MoveValue::Spock), 0.0);
    }

    #[test]
    fn round_cap_leaves_match_undecided() {
        let mut s = settings(Some(Personality::Spock), [0, 0, 0, 0, 1]);
        s.max_rounds = 0;
        let report = run(&s, |_| {}).unwrap();
        assert_eq!(report.undecided(), 6);
        assert!(report.matches.iter().all(|m| m.rounds == 0));
    }
}
