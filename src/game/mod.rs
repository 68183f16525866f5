pub mod history;
pub mod moves;
pub mod round;
