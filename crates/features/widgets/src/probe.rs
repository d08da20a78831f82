use crate::error::{WidgetError, WidgetErrorExt};
use crate::factory::{WidgetFactory, factory_for};
use tracing::info;

/// Policy that decides which family tag to use.
///
/// Factories stay pure with respect to the tag they are handed; anything environmental
/// (host OS, configuration, user choice) lives behind this trait.
pub trait FamilyProbe {
    fn detect(&self) -> String;
}

/// Always answers with the injected tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedProbe(String);

impl FixedProbe {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }
}

impl FamilyProbe for FixedProbe {
    fn detect(&self) -> String {
        self.0.clone()
    }
}

/// Maps the compile-time target OS to a family tag.
///
/// `windows` maps to `windows`, `macos` to `mac`; every other OS name is passed through
/// unchanged and therefore resolves to no factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostProbe;

impl HostProbe {
    #[must_use]
    pub fn family_tag(os: &str) -> String {
        match os {
            "macos" => "mac".to_owned(),
            other => other.to_owned(),
        }
    }
}

impl FamilyProbe for HostProbe {
    fn detect(&self) -> String {
        Self::family_tag(std::env::consts::OS)
    }
}

impl<F> FamilyProbe for F
where
    F: Fn() -> String,
{
    fn detect(&self) -> String {
        self()
    }
}

/// Asks `probe` for a tag and resolves its factory.
///
/// # Errors
/// Returns [`WidgetError::UnimplementedFamily`] when the detected tag has no factory.
pub fn factory_from_probe(probe: &impl FamilyProbe) -> Result<Box<dyn WidgetFactory>, WidgetError> {
    let tag = probe.detect();
    info!(detected = %tag, "Resolving widget family");
    factory_for(&tag).context("Family probe")
}
