use foundry_assembly::domain::computer::BuildStage;
use foundry_assembly::domain::kinds::{BuilderKind, Preset};
use foundry_assembly::{
    AnyBuilder, ComputerAssembler, ComputerBuilder, CustomPcBuilder, GamingPcBuilder, HIGH_END,
    OfficePcBuilder, PresetSpec, assemble,
};
use strum::IntoEnumIterator;

#[test]
fn high_end_preset_matches_literals_exactly() {
    let mut builder = CustomPcBuilder::new();
    ComputerAssembler::new(&mut builder).build(Preset::HighEnd);
    let pc = builder.get_computer();

    assert_eq!(pc.cpu.as_deref(), Some("Latest Gen i9/Ryzen 9"));
    assert_eq!(pc.gpu.as_deref(), Some("Top-tier RTX/Radeon GPU"));
    assert_eq!(pc.cooler.as_deref(), Some("360mm AIO Liquid Cooler"));
    assert_eq!(pc.storage.as_deref(), Some("2TB NVMe Gen4 SSD"));
    assert_eq!(pc.ram.len(), HIGH_END.ram.len());
    assert_eq!(pc.ram.len(), 2);
    assert_eq!(pc.stage(), BuildStage::FullyConfigured);
}

#[test]
fn gaming_builder_decorates_director_values() {
    let mut builder = GamingPcBuilder::new();
    ComputerAssembler::new(&mut builder).build_high_end_gaming_pc();
    let pc = builder.get_computer();

    assert_eq!(pc.cpu.as_deref(), Some("High-end Gaming CPU: Latest Gen i9/Ryzen 9"));
    assert_eq!(pc.storage.as_deref(), Some("Fast NVMe SSD: 2TB NVMe Gen4 SSD"));
    assert_eq!(pc.gpu.as_deref(), Some("Powerful Gaming GPU: Top-tier RTX/Radeon GPU"));
    assert!(pc.ram.iter().all(|m| m == "Gaming RAM: 32GB DDR5 6000MHz"));
}

#[test]
fn director_drives_every_builder_variant() {
    for kind in BuilderKind::iter() {
        for preset in Preset::iter() {
            let mut builder = AnyBuilder::from(kind);
            ComputerAssembler::new(&mut builder).build(preset);
            let pc = builder.get_computer();

            let spec = PresetSpec::of(preset);
            assert_eq!(pc.ram.len(), spec.ram.len(), "{kind}/{preset}");
            assert!(pc.cpu.is_some());
            assert!(pc.storage.is_some());
            assert_eq!(pc.cooler.is_some(), spec.cooler.is_some());
        }
    }
}

#[test]
fn office_builder_with_high_end_preset_still_gets_integrated_graphics() {
    let mut builder = OfficePcBuilder::new();
    ComputerAssembler::new(&mut builder).build(Preset::HighEnd);

    assert_eq!(builder.get_computer().gpu.as_deref(), Some("Integrated Graphics"));
}

#[test]
fn assemble_by_tags() {
    let pc = assemble("Custom", "high_end").expect("known tags");
    assert_eq!(pc.cpu.as_deref(), Some(HIGH_END.cpu));

    let pc = assemble("office", "minimal").expect("known tags");
    assert!(pc.gpu.is_none());
    assert_eq!(pc.storage.as_deref(), Some("SATA SSD: 256GB SATA SSD"));
}
