use super::moves::MoveValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
    Human,
    Computer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Human,
    Computer,
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub human: MoveValue,
    pub computer: MoveValue,
    pub outcome: Outcome,
}

impl RoundRecord {
    pub fn move_of(&self, actor: Actor) -> MoveValue {
        match actor {
            Actor::Human => self.human,
            Actor::Computer => self.computer,
        }
    }
}

/// Append-only log of completed rounds, most recent last.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoundHistory {
    records: Vec<RoundRecord>,
}

impl RoundHistory {
    pub fn new() -> Self {
        RoundHistory {
            records: Vec::new(),
        }
    }

    pub fn append(&mut self, record: RoundRecord) {
        self.records.push(record);
    }

    /// Chronological moves of one actor. Borrowing the history again
    /// restarts the sequence.
    pub fn moves_of(&self, actor: Actor) -> impl Iterator<Item = MoveValue> + Clone + '_ {
        self.records.iter().map(move |r| r.move_of(actor))
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&RoundRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RoundHistory {
    type Item = &'a RoundRecord;
    type IntoIter = std::slice::Iter<'a, RoundRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
