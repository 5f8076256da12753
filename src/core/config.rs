/*!
 * Container Configuration
 *
 * Construction-time tuning shared by every synchronized container
 */

use serde::{Deserialize, Serialize};

/// Container configuration
///
/// Deserializes from a partial object; missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Capacity reserved by the core container at construction
    pub initial_capacity: usize,
    /// Release backing storage on `clear` instead of keeping it for reuse
    pub shrink_on_clear: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            shrink_on_clear: true,
        }
    }
}

impl ContainerConfig {
    /// Configuration for short-lived or sparsely populated containers
    pub const fn small() -> Self {
        Self {
            initial_capacity: 16,
            shrink_on_clear: true,
        }
    }

    /// Configuration for containers that are repeatedly filled and cleared
    ///
    /// Storage survives `clear`, so refills do not reallocate.
    pub const fn bulk() -> Self {
        Self {
            initial_capacity: 1024,
            shrink_on_clear: false,
        }
    }

    /// Override the initial capacity
    pub const fn with_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Override the clear policy
    pub const fn with_shrink_on_clear(mut self, shrink_on_clear: bool) -> Self {
        self.shrink_on_clear = shrink_on_clear;
        self
    }
}
