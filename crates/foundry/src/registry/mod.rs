mod error;

pub use error::{RegistryError, RegistryErrorExt};

use foundry_assembly::{AnyBuilder, AssemblyError, ComputerAssembler, ComputerBuilder};
use foundry_documents::Document;
use foundry_domain::computer::Computer;
use foundry_domain::kinds::{BuilderKind, DocumentKind, Family, Preset};
use foundry_widgets::{WidgetBundle, WidgetError, WidgetFactory};
use fxhash::FxHashMap;
use tracing::{debug, info};

pub type DocumentCtor = fn() -> Box<dyn Document>;
pub type FactoryCtor = fn() -> Box<dyn WidgetFactory>;
pub type BuilderCtor = fn() -> AnyBuilder;

/// Maps string tags to creators for every pattern in the workspace.
///
/// Tags are trimmed and compared case-insensitively. Registering a tag twice replaces the
/// earlier creator.
///
/// ```rust
/// use foundry::CreationRegistry;
/// use foundry::domain::kinds::Family;
///
/// let registry = CreationRegistry::default();
/// assert_eq!(registry.documents(), ["pdf", "word"]);
///
/// let bundle = registry.bundle("MacOS")?;
/// assert_eq!(bundle.family(), Family::Mac);
///
/// let pc = registry.computer("custom", "minimal")?;
/// assert_eq!(pc.cpu.as_deref(), Some("Entry-level CPU"));
/// # Ok::<(), foundry::RegistryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CreationRegistry {
    documents: FxHashMap<String, DocumentCtor>,
    families: FxHashMap<String, FactoryCtor>,
    builders: FxHashMap<String, BuilderCtor>,
}

impl Default for CreationRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();

        registry
            .register_document(DocumentKind::Pdf.as_ref(), || {
                foundry_documents::create(DocumentKind::Pdf)
            })
            .register_document(DocumentKind::Word.as_ref(), || {
                foundry_documents::create(DocumentKind::Word)
            });

        registry
            .register_family(Family::Windows.as_ref(), || foundry_widgets::factory(Family::Windows))
            .register_family(Family::Mac.as_ref(), || foundry_widgets::factory(Family::Mac))
            .register_family("macos", || foundry_widgets::factory(Family::Mac));

        registry
            .register_builder(BuilderKind::Custom.as_ref(), || AnyBuilder::new(BuilderKind::Custom))
            .register_builder(BuilderKind::Gaming.as_ref(), || AnyBuilder::new(BuilderKind::Gaming))
            .register_builder(BuilderKind::Office.as_ref(), || AnyBuilder::new(BuilderKind::Office));

        registry
    }
}

impl CreationRegistry {
    /// A registry without any creators.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            documents: FxHashMap::default(),
            families: FxHashMap::default(),
            builders: FxHashMap::default(),
        }
    }

    pub fn register_document(&mut self, tag: &str, ctor: DocumentCtor) -> &mut Self {
        let key = normalize(tag);
        debug!(tag = %key, "Registering document creator");
        self.documents.insert(key, ctor);
        self
    }

    pub fn register_family(&mut self, tag: &str, ctor: FactoryCtor) -> &mut Self {
        let key = normalize(tag);
        debug!(tag = %key, "Registering widget family");
        self.families.insert(key, ctor);
        self
    }

    pub fn register_builder(&mut self, tag: &str, ctor: BuilderCtor) -> &mut Self {
        let key = normalize(tag);
        debug!(tag = %key, "Registering computer builder");
        self.builders.insert(key, ctor);
        self
    }

    /// Creates a document, or `None` for an unregistered tag.
    #[must_use]
    pub fn document(&self, tag: &str) -> Option<Box<dyn Document>> {
        self.documents.get(&normalize(tag)).map(|ctor| ctor())
    }

    /// Creates a button and a textbox from the factory registered under `tag`.
    ///
    /// # Errors
    /// [`RegistryError::Widget`] wrapping [`WidgetError::UnimplementedFamily`] for unknown
    /// tags, or [`WidgetError::FamilyMismatch`] for an inconsistent registered factory.
    pub fn bundle(&self, tag: &str) -> Result<WidgetBundle, RegistryError> {
        let ctor = self.families.get(&normalize(tag)).ok_or_else(|| {
            WidgetError::UnimplementedFamily {
                message: format!("Widget factory for OS '{tag}' is not implemented.").into(),
                context: None,
            }
        })?;

        let factory = ctor();
        info!(tag, family = %factory.family(), "Creating widget bundle");
        Ok(WidgetBundle::from_factory(factory.as_ref())?)
    }

    /// Runs the director preset `preset_tag` on a fresh builder registered as `builder_tag`.
    ///
    /// # Errors
    /// [`RegistryError::Assembly`] wrapping [`AssemblyError::UnknownBuilder`] or
    /// [`AssemblyError::UnknownPreset`].
    pub fn computer(&self, builder_tag: &str, preset_tag: &str) -> Result<Computer, RegistryError> {
        let ctor = self.builders.get(&normalize(builder_tag)).ok_or_else(|| {
            AssemblyError::UnknownBuilder {
                message: format!("no builder named '{builder_tag}'").into(),
                context: None,
            }
        })?;
        let preset = preset_tag.trim().parse::<Preset>().map_err(|_| {
            AssemblyError::UnknownPreset {
                message: format!("no preset named '{preset_tag}'").into(),
                context: None,
            }
        })?;

        let mut builder = ctor();
        ComputerAssembler::new(&mut builder).build(preset);
        info!(builder = builder_tag, %preset, "Computer assembled");
        Ok(builder.get_computer())
    }

    /// Registered document tags, sorted.
    #[must_use]
    pub fn documents(&self) -> Vec<&str> {
        sorted_keys(&self.documents)
    }

    /// Registered family tags, sorted.
    #[must_use]
    pub fn families(&self) -> Vec<&str> {
        sorted_keys(&self.families)
    }

    /// Registered builder tags, sorted.
    #[must_use]
    pub fn builders(&self) -> Vec<&str> {
        sorted_keys(&self.builders)
    }
}

fn normalize(tag: &str) -> String {
    tag.trim().to_ascii_lowercase()
}

fn sorted_keys<V>(map: &FxHashMap<String, V>) -> Vec<&str> {
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}
