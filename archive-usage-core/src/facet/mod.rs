//! Controlled-vocabulary classification of dataset identifiers.

mod classify;
mod vocabulary;

pub use classify::*;
pub use vocabulary::*;
