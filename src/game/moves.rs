use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five hand signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveValue {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl MoveValue {
    /// Canonical iteration order, used by every per-move table.
    pub const ALL: [MoveValue; 5] = [
        MoveValue::Rock,
        MoveValue::Paper,
        MoveValue::Scissors,
        MoveValue::Lizard,
        MoveValue::Spock,
    ];

    pub fn index(self) -> usize {
        match self {
            MoveValue::Rock => 0,
            MoveValue::Paper => 1,
            MoveValue::Scissors => 2,
            MoveValue::Lizard => 3,
            MoveValue::Spock => 4,
        }
    }

    pub fn from_index(index: usize) -> Result<Self, GameError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| GameError::InvalidMove(format!("index {}", index)))
    }

    pub fn name(self) -> &'static str {
        match self {
            MoveValue::Rock => "rock",
            MoveValue::Paper => "paper",
            MoveValue::Scissors => "scissors",
            MoveValue::Lizard => "lizard",
            MoveValue::Spock => "spock",
        }
    }

    /// True iff `self` defeats `other` under the standard relation.
    pub fn beats(self, other: MoveValue) -> bool {
        WinRelation::STANDARD.beats(self, other)
    }

    pub fn loses_to(self, other: MoveValue) -> bool {
        WinRelation::STANDARD.loses_to(self, other)
    }
}

impl fmt::Display for MoveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoveValue {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoveValue::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GameError::InvalidMove(s.to_string()))
    }
}

/// Which two moves each move defeats, indexed by `MoveValue::index`.
///
/// Only tournaments are accepted: for every pair of distinct moves exactly
/// one beats the other, and no move beats itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinRelation {
    defeats: [[MoveValue; 2]; 5],
}

impl WinRelation {
    pub const STANDARD: WinRelation = WinRelation {
        defeats: [
            [MoveValue::Scissors, MoveValue::Lizard], // rock
            [MoveValue::Rock, MoveValue::Spock],      // paper
            [MoveValue::Paper, MoveValue::Lizard],    // scissors
            [MoveValue::Spock, MoveValue::Paper],     // lizard
            [MoveValue::Scissors, MoveValue::Rock],   // spock
        ],
    };

    pub fn new(defeats: [[MoveValue; 2]; 5]) -> Result<Self, GameError> {
        let relation = WinRelation { defeats };
        relation.validate()?;
        Ok(relation)
    }

    fn validate(&self) -> Result<(), GameError> {
        for a in MoveValue::ALL {
            let [x, y] = self.defeated_by(a);
            if x == y {
                return Err(GameError::InvalidRelation(format!(
                    "{} lists {} twice",
                    a, x
                )));
            }
            if self.beats(a, a) {
                return Err(GameError::InvalidRelation(format!("{} beats itself", a)));
            }
            for b in MoveValue::ALL.into_iter().filter(|b| *b != a) {
                if self.beats(a, b) == self.beats(b, a) {
                    return Err(GameError::InvalidRelation(format!(
                        "{} and {} must have exactly one winner",
                        a, b
                    )));
                }
            }
        }
        Ok(())
    }

    /// The two moves that `m` defeats.
    pub fn defeated_by(&self, m: MoveValue) -> [MoveValue; 2] {
        self.defeats[m.index()]
    }

    pub fn beats(&self, a: MoveValue, b: MoveValue) -> bool {
        self.defeats[a.index()].contains(&b)
    }

    pub fn loses_to(&self, a: MoveValue, b: MoveValue) -> bool {
        self.beats(b, a)
    }
}

impl Default for WinRelation {
    fn default() -> Self {
        WinRelation::STANDARD
    }
}
