pub mod chooser;
pub mod personality;
pub mod profile;
