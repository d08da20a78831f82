use foundry::CreationRegistry;
use foundry::domain::config::{AssemblyConfig, WidgetsConfig};
use foundry::journal::{Journal, module_journal};
use foundry::patterns::assembly::{
    ComputerAssembler, ComputerBuilder, CustomPcBuilder, GamingPcBuilder,
};
use foundry::patterns::documents::{DocumentParser, PdfParser, WordParser, select};
use foundry::patterns::widgets::{
    Application, FamilyProbe, FixedProbe, HostProbe, WidgetError, factory_from_probe,
};
use tracing::{info, info_span, warn};

const GREETING: &str = "Hello Abstract Factory Pattern!";

pub(crate) fn factory_method() {
    let _span = info_span!("factory_method").entered();

    let parsers: [&dyn DocumentParser; 2] = [&PdfParser, &WordParser];
    for parser in parsers {
        let doc = parser.parse_and_read();
        Journal::global().log(&format!("{} produced a {} document", parser.name(), doc.kind()));
    }
}

pub(crate) fn simple_factory() {
    let _span = info_span!("simple_factory").entered();

    for tag in ["pdf", "Word", "odt"] {
        match select(tag) {
            Some(doc) => {
                info!(tag, kind = %doc.kind(), "Selected document");
                doc.open();
                doc.read();
            },
            None => warn!(tag, "No document for tag"),
        }
    }
}

pub(crate) fn abstract_factory(settings: &WidgetsConfig) {
    let _span = info_span!("abstract_factory").entered();

    let outcome = match &settings.family {
        Some(tag) => run_application(&FixedProbe::new(tag.as_str())),
        None => run_application(&HostProbe),
    };

    match outcome {
        Ok(lines) => {
            for line in lines {
                info!(%line, "Application output");
            }
        },
        Err(err) => warn!(error = %err, "Abstract factory demo skipped"),
    }

    let registry = CreationRegistry::default();
    for tag in registry.families() {
        match registry.bundle(tag) {
            Ok(bundle) => info!(tag, family = %bundle.family(), "Registry bundle created"),
            Err(err) => warn!(tag, error = %err, "Registry bundle failed"),
        }
    }
}

fn run_application(probe: &impl FamilyProbe) -> Result<Vec<String>, WidgetError> {
    let mut app = Application::new(factory_from_probe(probe)?);
    app.create_ui()?;
    let lines = app.run(GREETING)?;
    Journal::global().log(&format!("Application rendered {} widget lines", lines.len()));
    Ok(lines)
}

pub(crate) fn builder(settings: &AssemblyConfig) {
    let _span = info_span!("builder").entered();

    let mut gaming = GamingPcBuilder::new();
    ComputerAssembler::new(&mut gaming).build_high_end_gaming_pc();
    info!(spec = %gaming.get_computer(), "Gaming PC");

    let mut custom = CustomPcBuilder::new();
    ComputerAssembler::new(&mut custom).build_minimal_viable_pc();
    info!(spec = %custom.get_computer(), "Minimal PC");

    let pc = custom.set_gpu("RTX 4060").add_ram("8GB DDR4").get_computer();
    info!(stage = ?pc.stage(), spec = %pc, "Minimal PC upgraded");

    match CreationRegistry::default().computer(&settings.builder, &settings.preset) {
        Ok(pc) => {
            info!(builder = %settings.builder, preset = %settings.preset, spec = %pc, "Configured PC");
            Journal::global().log(&format!("Assembled {} {} PC", settings.builder, settings.preset));
        },
        Err(err) => warn!(error = %err, "Configured PC could not be assembled"),
    }
}

pub(crate) fn singleton() {
    let _span = info_span!("singleton").entered();

    let first = Journal::global();
    let second = Journal::global();
    first.log("Application started.");
    second.log("User logged in.");
    info!(same_instance = std::ptr::eq(first, second), "Global journal identity");

    let mut module = module_journal().lock();
    module.log("Module function called.");
    module.log("Another module log.");
    for entry in module.entries() {
        info!(file = module.file_name(), %entry, "Module journal");
    }
}
