//! Rock-Paper-Scissors-Lizard-Spock engine with an adaptive computer
//! opponent that steers away from moves the human keeps beating.

pub mod analysis;
pub mod config;
pub mod display;
pub mod error;
pub mod game;
pub mod logging;
pub mod session;
pub mod simulation;
pub mod strategy;

pub use analysis::frequency::{percent_frequencies, Frequencies};
pub use analysis::weights::WeightTable;
pub use error::{AppError, GameError};
pub use game::history::{Actor, Outcome, RoundHistory, RoundRecord};
pub use game::moves::{MoveValue, WinRelation};
pub use session::GameSession;
pub use strategy::chooser::OpponentChooser;
pub use strategy::personality::Personality;
pub use strategy::profile::StrategyProfile;
