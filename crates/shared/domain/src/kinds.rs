//! Discriminators: the tags used to select a concrete variant or family.
//!
//! Every kind parses case-insensitively from its tag (`"PDF".parse::<DocumentKind>()`)
//! and renders back to its canonical lowercase form through `Display`.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Document variants produced by the document factories.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Word,
}

/// Widget families. Every product of one bundle shares the same family.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    #[strum(to_string = "windows")]
    Windows,
    #[strum(to_string = "mac", serialize = "macos")]
    #[serde(alias = "macos")]
    Mac,
}

/// Concrete builder variants.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum BuilderKind {
    /// Stores every value verbatim.
    Custom,
    /// Decorates values with gaming-grade labels.
    Gaming,
    /// Decorates values with office-grade labels and forces integrated graphics.
    Office,
}

/// Named director presets.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    #[strum(to_string = "minimal")]
    Minimal,
    #[strum(to_string = "high-end", serialize = "high_end")]
    #[serde(alias = "high_end")]
    HighEnd,
}
