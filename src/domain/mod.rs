//! Domain layer - Core business objects and the seams to infrastructure
//! 
//! This layer contains:
//! - Entities: Users, feeds and commands
//! - Traits: Abstractions for infrastructure (Repository, ConfigStore, FeedSource)

pub mod entities;
pub mod traits;
