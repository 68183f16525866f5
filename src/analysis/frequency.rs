use crate::game::history::{Actor, RoundHistory};
use crate::game::moves::MoveValue;
use serde::Serialize;

/// Percentage share of each move among one actor's past choices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frequencies {
    pub actor: Actor,
    pub rounds: usize,
    percents: [f64; 5],
}

impl Frequencies {
    pub fn get(&self, m: MoveValue) -> f64 {
        self.percents[m.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (MoveValue, f64)> + '_ {
        MoveValue::ALL.into_iter().map(|m| (m, self.get(m)))
    }

    pub fn total(&self) -> f64 {
        self.percents.iter().sum()
    }

    /// Most played move, first in canonical order on ties. `None` before
    /// any round was played.
    pub fn dominant(&self) -> Option<MoveValue> {
        if self.rounds == 0 {
            return None;
        }
        self.iter()
            .fold(None, |best: Option<(MoveValue, f64)>, (m, pct)| match best {
                Some((_, top)) if top >= pct => best,
                _ => Some((m, pct)),
            })
            .map(|(m, _)| m)
    }
}

pub fn percent_frequencies(history: &RoundHistory, actor: Actor) -> Frequencies {
    let mut counts = [0usize; 5];
    for m in history.moves_of(actor) {
        counts[m.index()] += 1;
    }
    let rounds: usize = counts.iter().sum();

    let mut percents = [0.0; 5];
    if rounds > 0 {
        for (pct, count) in percents.iter_mut().zip(counts) {
            *pct = count as f64 * 100.0 / rounds as f64;
        }
    }

    Frequencies {
        actor,
        rounds,
        percents,
    }
}
