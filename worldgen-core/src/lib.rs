//! World Gen Core - World Model and Generator
//!
//! Pure generation: the world record, themed content tables, and the
//! random generator that combines them. No I/O beyond optionally loading
//! substitute content tables from disk.

pub mod content;
pub mod error;
pub mod generator;
pub mod world;

pub use content::ContentTables;
pub use error::{CoreError, CoreResult};
pub use generator::Generator;
pub use world::{Category, Climate, Theme, World, MAX_POPULATION};
