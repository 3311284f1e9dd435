pub mod config;
pub mod easings;
pub mod simulate;
