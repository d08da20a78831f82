//! Facade crate for the foundry creational patterns.
//! Re-exports domain/kernel primitives and every pattern crate, and wires them together in
//! a [`CreationRegistry`](registry::CreationRegistry).
//! Keep this crate thin: it should compose other crates, not implement pattern logic.
//!
//! ## Usage
//! - Depend on `foundry` only; reach individual patterns through [`patterns`].
//! - Build a [`registry::CreationRegistry`] to create products from string tags.

pub use foundry_domain as domain;
pub use foundry_journal as journal;
pub use foundry_kernel as kernel;

pub mod registry;

/// Pattern crates, one per creational pattern.
pub mod patterns {
    pub use foundry_assembly as assembly;
    pub use foundry_documents as documents;
    pub use foundry_widgets as widgets;
}

pub use registry::{CreationRegistry, RegistryError, RegistryErrorExt};
