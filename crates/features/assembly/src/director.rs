use crate::builder::{AnyBuilder, ComputerBuilder};
use crate::error::AssemblyError;
use foundry_domain::computer::Computer;
use foundry_domain::kinds::{BuilderKind, Preset};
use tracing::info;

/// The fixed parts list behind a [`Preset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetSpec {
    pub cpu: &'static str,
    pub ram: &'static [&'static str],
    pub storage: &'static str,
    pub gpu: Option<&'static str>,
    pub cooler: Option<&'static str>,
}

pub const MINIMAL: PresetSpec = PresetSpec {
    cpu: "Entry-level CPU",
    ram: &["8GB DDR4"],
    storage: "256GB SATA SSD",
    gpu: None,
    cooler: None,
};

pub const HIGH_END: PresetSpec = PresetSpec {
    cpu: "Latest Gen i9/Ryzen 9",
    ram: &["32GB DDR5 6000MHz", "32GB DDR5 6000MHz"],
    storage: "2TB NVMe Gen4 SSD",
    gpu: Some("Top-tier RTX/Radeon GPU"),
    cooler: Some("360mm AIO Liquid Cooler"),
};

impl PresetSpec {
    #[must_use]
    pub const fn of(preset: Preset) -> &'static Self {
        match preset {
            Preset::Minimal => &MINIMAL,
            Preset::HighEnd => &HIGH_END,
        }
    }
}

/// Drives any [`ComputerBuilder`] through a named preset.
///
/// The assembler borrows the builder and keeps no product state; read the result from the
/// builder afterwards.
#[derive(Debug)]
pub struct ComputerAssembler<'a, B: ComputerBuilder> {
    builder: &'a mut B,
}

impl<'a, B: ComputerBuilder> ComputerAssembler<'a, B> {
    pub const fn new(builder: &'a mut B) -> Self {
        Self { builder }
    }

    /// CPU, one memory module and storage.
    pub fn build_minimal_viable_pc(&mut self) {
        self.build(Preset::Minimal);
    }

    /// Every part, with two memory modules.
    pub fn build_high_end_gaming_pc(&mut self) {
        self.build(Preset::HighEnd);
    }

    pub fn build(&mut self, preset: Preset) {
        let spec = PresetSpec::of(preset);
        info!(%preset, builder = %self.builder.kind(), "Director assembling preset");

        self.builder.set_cpu(spec.cpu);
        for module in spec.ram {
            self.builder.add_ram(module);
        }
        self.builder.set_storage(spec.storage);
        if let Some(gpu) = spec.gpu {
            self.builder.set_gpu(gpu);
        }
        if let Some(cooler) = spec.cooler {
            self.builder.set_cooler(cooler);
        }
    }
}

/// Parses both tags, runs the preset on a fresh builder and finalizes it.
///
/// # Errors
/// Returns [`AssemblyError::UnknownBuilder`] or [`AssemblyError::UnknownPreset`] for
/// unrecognized tags.
pub fn assemble(builder: &str, preset: &str) -> Result<Computer, AssemblyError> {
    let kind = builder.trim().parse::<BuilderKind>().map_err(|_| AssemblyError::UnknownBuilder {
        message: format!("no builder named '{builder}'").into(),
        context: None,
    })?;
    let preset = preset.trim().parse::<Preset>().map_err(|_| AssemblyError::UnknownPreset {
        message: format!("no preset named '{preset}'").into(),
        context: None,
    })?;

    let mut builder = AnyBuilder::new(kind);
    ComputerAssembler::new(&mut builder).build(preset);
    Ok(builder.get_computer())
}
