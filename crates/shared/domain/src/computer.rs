//! The [`Computer`] snapshot assembled by builders.

use crate::constants::NOT_AVAILABLE;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// Fields of a [`Computer`] that hold a value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    pub struct Components: u8 {
        const CPU = 1 << 0;
        const RAM = 1 << 1;
        const STORAGE = 1 << 2;
        const GPU = 1 << 3;
        const COOLER = 1 << 4;

        const ALL = Self::CPU.bits()
            | Self::RAM.bits()
            | Self::STORAGE.bits()
            | Self::GPU.bits()
            | Self::COOLER.bits();
    }
}

/// Coarse progress of a configuration, derived from its [`Components`].
///
/// A configuration never goes back to [`BuildStage::Empty`] once a field was set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildStage {
    Empty,
    PartiallyConfigured,
    FullyConfigured,
}

/// A finalized computer configuration.
///
/// Instances are plain values: two computers are the same computer when their fields are equal.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Computer {
    pub cpu: Option<String>,
    /// Memory modules in installation order.
    pub ram: Vec<String>,
    pub storage: Option<String>,
    pub gpu: Option<String>,
    pub cooler: Option<String>,
}

impl Computer {
    /// Returns the set of populated fields.
    #[must_use]
    pub fn components(&self) -> Components {
        let mut set = Components::empty();
        set.set(Components::CPU, self.cpu.is_some());
        set.set(Components::RAM, !self.ram.is_empty());
        set.set(Components::STORAGE, self.storage.is_some());
        set.set(Components::GPU, self.gpu.is_some());
        set.set(Components::COOLER, self.cooler.is_some());
        set
    }

    #[must_use]
    pub fn stage(&self) -> BuildStage {
        match self.components() {
            c if c.is_empty() => BuildStage::Empty,
            c if c.is_all() => BuildStage::FullyConfigured,
            _ => BuildStage::PartiallyConfigured,
        }
    }
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = |value: &Option<String>| value.as_deref().unwrap_or(NOT_AVAILABLE).to_owned();
        let ram = if self.ram.is_empty() { NOT_AVAILABLE.to_owned() } else { self.ram.join(", ") };

        writeln!(f, "--- Computer Specifications ---")?;
        writeln!(f, "CPU: {}", field(&self.cpu))?;
        writeln!(f, "RAM: {ram}")?;
        writeln!(f, "Storage: {}", field(&self.storage))?;
        writeln!(f, "GPU: {}", field(&self.gpu))?;
        writeln!(f, "Cooler: {}", field(&self.cooler))?;
        write!(f, "-----------------------------")
    }
}
