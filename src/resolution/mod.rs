//! Propositional resolution: clause database, resolvents, and saturation.

mod database;
mod engine;
mod saturation;

pub use database::ClauseDatabase;
pub use engine::{negate, resolve, ResolutionEngine};
pub use saturation::{Saturation, SaturationLimits, SaturationStats};
