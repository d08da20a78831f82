//! # Assembly
//!
//! Builders that configure a [`Computer`](foundry_domain::computer::Computer) one part at a
//! time, and a director ([`ComputerAssembler`]) that replays a named [`Preset`] on any of them.
//!
//! | Builder             | Tag      | Behaviour                                              |
//! |---------------------|----------|--------------------------------------------------------|
//! | [`CustomPcBuilder`] | `custom` | stores values verbatim                                 |
//! | [`GamingPcBuilder`] | `gaming` | prefixes gaming-grade labels                           |
//! | [`OfficePcBuilder`] | `office` | prefixes office-grade labels, GPU is always integrated |
//!
//! ```rust
//! use foundry_assembly::{ComputerAssembler, ComputerBuilder, GamingPcBuilder};
//!
//! let mut builder = GamingPcBuilder::new();
//! ComputerAssembler::new(&mut builder).build_high_end_gaming_pc();
//!
//! let pc = builder.get_computer();
//! assert_eq!(pc.ram.len(), 2);
//! assert_eq!(pc.cooler.as_deref(), Some("Liquid Cooler: 360mm AIO Liquid Cooler"));
//! ```
//!
//! [`Preset`]: foundry_domain::kinds::Preset

mod builder;
mod director;
mod error;

pub use crate::builder::{
    AnyBuilder, ComputerBuilder, CustomPcBuilder, GamingPcBuilder, OfficePcBuilder,
};
pub use crate::director::{ComputerAssembler, HIGH_END, MINIMAL, PresetSpec, assemble};
pub use crate::error::{AssemblyError, AssemblyErrorExt};
pub use foundry_domain as domain;
