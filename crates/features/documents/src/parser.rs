use crate::document::{Document, PdfDocument, WordDocument};
use foundry_domain::kinds::DocumentKind;
use tracing::{debug, info};

/// A document creator.
///
/// Implementors decide *which* document to build; the parsing workflow in
/// [`DocumentParser::parse_and_read`] is shared and depends on [`Document`] only.
pub trait DocumentParser {
    /// Short creator name used in log output.
    fn name(&self) -> &'static str;

    /// The factory method.
    fn create_document(&self) -> Box<dyn Document>;

    /// Creates a document through [`DocumentParser::create_document`], opens and reads it.
    fn parse_and_read(&self) -> Box<dyn Document> {
        let parser = self.name();
        info!(parser, "Starting parsing process...");

        let doc = self.create_document();
        doc.open();
        doc.read();

        info!(parser, kind = %doc.kind(), "Parsing finished.");
        doc
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfParser;

#[derive(Debug, Clone, Copy, Default)]
pub struct WordParser;

impl DocumentParser for PdfParser {
    fn name(&self) -> &'static str {
        "PdfParser"
    }

    fn create_document(&self) -> Box<dyn Document> {
        debug!("PDF parser creating PDF document");
        Box::new(PdfDocument)
    }
}

impl DocumentParser for WordParser {
    fn name(&self) -> &'static str {
        "WordParser"
    }

    fn create_document(&self) -> Box<dyn Document> {
        debug!("Word parser creating Word document");
        Box::new(WordDocument)
    }
}

/// Returns the creator responsible for `kind`.
#[must_use]
pub fn parser_for(kind: DocumentKind) -> Box<dyn DocumentParser> {
    match kind {
        DocumentKind::Pdf => Box::new(PdfParser),
        DocumentKind::Word => Box::new(WordParser),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct CountingParser {
        created: std::cell::Cell<usize>,
    }

    impl DocumentParser for CountingParser {
        fn name(&self) -> &'static str {
            "CountingParser"
        }

        fn create_document(&self) -> Box<dyn Document> {
            self.created.set(self.created.get() + 1);
            Box::new(WordDocument)
        }
    }

    #[test]
    fn parse_and_read_delegates_creation() {
        let parser = CountingParser::default();

        let doc = parser.parse_and_read();

        assert_eq!(parser.created.get(), 1);
        assert_eq!(doc.kind(), DocumentKind::Word);
    }

    #[test]
    fn parser_for_returns_matching_creator() {
        assert_eq!(parser_for(DocumentKind::Pdf).create_document().kind(), DocumentKind::Pdf);
        assert_eq!(parser_for(DocumentKind::Word).name(), "WordParser");
    }
}
