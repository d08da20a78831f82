use foundry_domain::kinds::DocumentKind;
use std::fmt::Debug;
use tracing::info;

/// Capability set shared by every document variant.
///
/// Both capabilities are infallible and return the line they narrate.
pub trait Document: Debug + Send + Sync {
    fn kind(&self) -> DocumentKind;

    fn open(&self) -> String;

    fn read(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PdfDocument;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordDocument;

impl Document for PdfDocument {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Pdf
    }

    fn open(&self) -> String {
        narrate("Opening PDF document...")
    }

    fn read(&self) -> String {
        narrate("Reading content from PDF document...")
    }
}

impl Document for WordDocument {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Word
    }

    fn open(&self) -> String {
        narrate("Opening Word document...")
    }

    fn read(&self) -> String {
        narrate("Reading content from Word document...")
    }
}

fn narrate(line: &'static str) -> String {
    info!("{line}");
    line.to_owned()
}
