pub mod frequency;
pub mod weights;
