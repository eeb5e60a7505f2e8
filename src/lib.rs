//! gator - a command-line RSS feed aggregator

pub mod domain;
pub mod application;
pub mod infrastructure;
