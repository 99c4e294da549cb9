pub mod configuration;
pub mod stage;
pub mod status;
