// Player profile generation engine.
//
// Builds batches of unique, plausible American football and basketball
// player records from a `GenerationConfig` and a seeded random stream.

pub mod config;
pub mod data;
pub mod draft_class;
pub mod generator;
pub mod player;
pub mod resolve;
pub mod rng;
pub mod sport;

pub use config::GenerationConfig;
pub use data::ReferenceData;
pub use generator::{Batch, BatchGenerator, PositionBreakdown};
pub use player::PlayerRecord;
pub use sport::{Position, Sport};
