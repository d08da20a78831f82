use foundry_domain::computer::Computer;
use foundry_domain::constants::INTEGRATED_GRAPHICS;
use foundry_domain::kinds::BuilderKind;
use tracing::{debug, trace};

/// Incrementally configures a [`Computer`].
///
/// Setters overwrite (last write wins), [`ComputerBuilder::add_ram`] appends in call order,
/// and every mutator returns the builder so calls can be chained:
///
/// ```rust
/// use foundry_assembly::{ComputerBuilder, CustomPcBuilder};
///
/// let mut builder = CustomPcBuilder::new();
/// let pc = builder.set_cpu("X").set_cpu("Y").add_ram("A").add_ram("B").get_computer();
///
/// assert_eq!(pc.cpu.as_deref(), Some("Y"));
/// assert_eq!(pc.ram, ["A", "B"]);
/// ```
///
/// There are no default method bodies: each variant states how it treats every field.
pub trait ComputerBuilder {
    fn kind(&self) -> BuilderKind;

    fn set_cpu(&mut self, cpu: &str) -> &mut Self;

    fn add_ram(&mut self, module: &str) -> &mut Self;

    fn set_storage(&mut self, storage: &str) -> &mut Self;

    fn set_gpu(&mut self, gpu: &str) -> &mut Self;

    fn set_cooler(&mut self, cooler: &str) -> &mut Self;

    /// Returns an independent snapshot of the current configuration.
    ///
    /// May be called any number of times; later mutations never leak into earlier snapshots.
    fn get_computer(&self) -> Computer;
}

/// Stores every value exactly as given.
#[derive(Debug, Default, Clone)]
pub struct CustomPcBuilder {
    computer: Computer,
}

/// Labels every part as gaming-grade.
#[derive(Debug, Default, Clone)]
pub struct GamingPcBuilder {
    computer: Computer,
}

/// Labels every part as office-grade and always fits integrated graphics.
#[derive(Debug, Default, Clone)]
pub struct OfficePcBuilder {
    computer: Computer,
}

impl CustomPcBuilder {
    #[must_use]
    pub fn new() -> Self {
        debug!("Initializing custom PC builder");
        Self::default()
    }
}

impl GamingPcBuilder {
    #[must_use]
    pub fn new() -> Self {
        debug!("Initializing gaming PC builder");
        Self::default()
    }
}

impl OfficePcBuilder {
    #[must_use]
    pub fn new() -> Self {
        debug!("Initializing office PC builder");
        Self::default()
    }
}

impl ComputerBuilder for CustomPcBuilder {
    fn kind(&self) -> BuilderKind {
        BuilderKind::Custom
    }

    fn set_cpu(&mut self, cpu: &str) -> &mut Self {
        self.computer.cpu = Some(cpu.to_owned());
        self
    }

    fn add_ram(&mut self, module: &str) -> &mut Self {
        self.computer.ram.push(module.to_owned());
        self
    }

    fn set_storage(&mut self, storage: &str) -> &mut Self {
        self.computer.storage = Some(storage.to_owned());
        self
    }

    fn set_gpu(&mut self, gpu: &str) -> &mut Self {
        self.computer.gpu = Some(gpu.to_owned());
        self
    }

    fn set_cooler(&mut self, cooler: &str) -> &mut Self {
        self.computer.cooler = Some(cooler.to_owned());
        self
    }

    fn get_computer(&self) -> Computer {
        trace!(stage = ?self.computer.stage(), "Custom PC snapshot");
        self.computer.clone()
    }
}

impl ComputerBuilder for GamingPcBuilder {
    fn kind(&self) -> BuilderKind {
        BuilderKind::Gaming
    }

    fn set_cpu(&mut self, cpu: &str) -> &mut Self {
        self.computer.cpu = Some(format!("High-end Gaming CPU: {cpu}"));
        self
    }

    fn add_ram(&mut self, module: &str) -> &mut Self {
        self.computer.ram.push(format!("Gaming RAM: {module}"));
        self
    }

    fn set_storage(&mut self, storage: &str) -> &mut Self {
        self.computer.storage = Some(format!("Fast NVMe SSD: {storage}"));
        self
    }

    fn set_gpu(&mut self, gpu: &str) -> &mut Self {
        self.computer.gpu = Some(format!("Powerful Gaming GPU: {gpu}"));
        self
    }

    fn set_cooler(&mut self, cooler: &str) -> &mut Self {
        self.computer.cooler = Some(format!("Liquid Cooler: {cooler}"));
        self
    }

    fn get_computer(&self) -> Computer {
        trace!(stage = ?self.computer.stage(), "Gaming PC snapshot");
        self.computer.clone()
    }
}

impl ComputerBuilder for OfficePcBuilder {
    fn kind(&self) -> BuilderKind {
        BuilderKind::Office
    }

    fn set_cpu(&mut self, cpu: &str) -> &mut Self {
        self.computer.cpu = Some(format!("Office CPU: {cpu}"));
        self
    }

    fn add_ram(&mut self, module: &str) -> &mut Self {
        self.computer.ram.push(format!("Office RAM: {module}"));
        self
    }

    fn set_storage(&mut self, storage: &str) -> &mut Self {
        self.computer.storage = Some(format!("SATA SSD: {storage}"));
        self
    }

    /// Ignores the requested model.
    fn set_gpu(&mut self, gpu: &str) -> &mut Self {
        debug!(requested = gpu, "Office builder fits integrated graphics");
        self.computer.gpu = Some(INTEGRATED_GRAPHICS.to_owned());
        self
    }

    fn set_cooler(&mut self, cooler: &str) -> &mut Self {
        self.computer.cooler = Some(format!("Air Cooler: {cooler}"));
        self
    }

    fn get_computer(&self) -> Computer {
        trace!(stage = ?self.computer.stage(), "Office PC snapshot");
        self.computer.clone()
    }
}

/// A builder chosen at runtime from a [`BuilderKind`].
#[derive(Debug, Clone)]
pub enum AnyBuilder {
    Custom(CustomPcBuilder),
    Gaming(GamingPcBuilder),
    Office(OfficePcBuilder),
}

impl AnyBuilder {
    #[must_use]
    pub fn new(kind: BuilderKind) -> Self {
        match kind {
            BuilderKind::Custom => Self::Custom(CustomPcBuilder::new()),
            BuilderKind::Gaming => Self::Gaming(GamingPcBuilder::new()),
            BuilderKind::Office => Self::Office(OfficePcBuilder::new()),
        }
    }
}

impl From<BuilderKind> for AnyBuilder {
    fn from(kind: BuilderKind) -> Self {
        Self::new(kind)
    }
}

macro_rules! delegate {
    ($self:ident . $method:ident ( $($arg:expr),* )) => {{
        match $self {
            Self::Custom(b) => { b.$method($($arg),*); }
            Self::Gaming(b) => { b.$method($($arg),*); }
            Self::Office(b) => { b.$method($($arg),*); }
        }
        $self
    }};
}

impl ComputerBuilder for AnyBuilder {
    fn kind(&self) -> BuilderKind {
        match self {
            Self::Custom(b) => b.kind(),
            Self::Gaming(b) => b.kind(),
            Self::Office(b) => b.kind(),
        }
    }

    fn set_cpu(&mut self, cpu: &str) -> &mut Self {
        delegate!(self.set_cpu(cpu))
    }

    fn add_ram(&mut self, module: &str) -> &mut Self {
        delegate!(self.add_ram(module))
    }

    fn set_storage(&mut self, storage: &str) -> &mut Self {
        delegate!(self.set_storage(storage))
    }

    fn set_gpu(&mut self, gpu: &str) -> &mut Self {
        delegate!(self.set_gpu(gpu))
    }

    fn set_cooler(&mut self, cooler: &str) -> &mut Self {
        delegate!(self.set_cooler(cooler))
    }

    fn get_computer(&self) -> Computer {
        match self {
            Self::Custom(b) => b.get_computer(),
            Self::Gaming(b) => b.get_computer(),
            Self::Office(b) => b.get_computer(),
        }
    }
}
