use foundry::domain::kinds::{DocumentKind, Family};
use foundry::patterns::assembly::AssemblyError;
use foundry::patterns::widgets::{MacFactory, WidgetError, WidgetFactory};
use foundry::{CreationRegistry, RegistryError};

#[test]
fn document_tags_are_case_insensitive() {
    let registry = CreationRegistry::default();

    let doc = registry.document("  Pdf ").expect("pdf is registered");
    assert_eq!(doc.kind(), DocumentKind::Pdf);
    assert_eq!(doc.open(), "Opening PDF document...");
    assert!(registry.document("odt").is_none());
}

#[test]
fn unknown_family_keeps_widget_message() {
    let registry = CreationRegistry::default();

    let err = registry.bundle("Linux").expect_err("linux has no factory");
    assert!(matches!(err, RegistryError::Widget { source: WidgetError::UnimplementedFamily { .. }, .. }));
    assert!(err.to_string().contains("Widget factory for OS 'Linux' is not implemented."));
}

#[test]
fn every_family_yields_a_consistent_bundle() -> Result<(), RegistryError> {
    let registry = CreationRegistry::default();

    for tag in registry.families() {
        let bundle = registry.bundle(tag)?;
        assert_eq!(bundle.button().family(), bundle.family());
        assert_eq!(bundle.textbox().family(), bundle.family());
    }
    assert_eq!(registry.bundle("macos")?.family(), Family::Mac);
    Ok(())
}

#[test]
fn custom_family_can_be_registered() -> Result<(), RegistryError> {
    fn mac() -> Box<dyn WidgetFactory> {
        Box::new(MacFactory)
    }

    let mut registry = CreationRegistry::default();
    registry.register_family("Darwin", mac);

    assert!(registry.families().contains(&"darwin"));
    assert_eq!(registry.bundle("DARWIN")?.family(), Family::Mac);
    Ok(())
}

#[test]
fn computer_runs_director_preset() -> Result<(), RegistryError> {
    let registry = CreationRegistry::default();

    let pc = registry.computer("Gaming", "high-end")?;
    assert_eq!(pc.cpu.as_deref(), Some("High-end Gaming CPU: Latest Gen i9/Ryzen 9"));
    assert_eq!(pc.ram.len(), 2);

    let office = registry.computer("office", "HIGH-END")?;
    assert_eq!(office.gpu.as_deref(), Some("Integrated Graphics"));
    Ok(())
}

#[test]
fn computer_rejects_unknown_preset() {
    let registry = CreationRegistry::default();

    let err = registry.computer("custom", "budget").expect_err("no budget preset");
    assert!(matches!(err, RegistryError::Assembly { source: AssemblyError::UnknownPreset { .. }, .. }));
}
