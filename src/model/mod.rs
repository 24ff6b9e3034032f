pub mod constants;
pub mod contribution;
pub mod progress;
pub mod rks_model;
pub mod structures;
