pub mod args;
pub mod data;
pub mod model;
pub mod processor;
pub mod report;
pub mod utils;
