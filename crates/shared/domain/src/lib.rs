//! # Domain Models
//!
//! Pure domain types shared by every creational slice: the discriminators used to pick a
//! concrete variant, the [`computer::Computer`] snapshot produced by builders, and the
//! configuration tree. Dependencies are limited to `serde`, `bitflags` and `strum`.
//! No I/O, no logging, no construction logic lives here.

pub mod computer;
pub mod config;
pub mod constants;
pub mod kinds;
