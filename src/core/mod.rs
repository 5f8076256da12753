/*!
 * Core Module
 * Container abstractions, unsynchronized cores, configuration and errors
 */

pub mod config;
pub mod data_structures;
pub mod errors;
pub mod traits;

// Re-export for convenience
pub use config::ContainerConfig;
pub use data_structures::{ArrayList, HashBidiMap, HashMap, HashSet};
pub use errors::*;
pub use traits::*;
