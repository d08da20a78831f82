//! # Documents
//!
//! Two ways of creating a [`Document`] without the caller naming a concrete type:
//!
//! 1. **Factory method** ([`DocumentParser`]): each creator overrides
//!    [`DocumentParser::create_document`], while the shared
//!    [`DocumentParser::parse_and_read`] workflow only ever sees the trait.
//! 2. **Simple factory** ([`select`]): a free function mapping a tag (`"pdf"`, `"word"`,
//!    case-insensitive) to a boxed document, or `None` for unknown tags.
//!
//! ```rust
//! use foundry_documents::{DocumentParser, PdfParser, select};
//! use foundry_documents::domain::kinds::DocumentKind;
//!
//! let doc = PdfParser.parse_and_read();
//! assert_eq!(doc.kind(), DocumentKind::Pdf);
//!
//! let word = select("WORD").expect("word is a known tag");
//! assert_eq!(word.kind(), DocumentKind::Word);
//! assert!(select("odt").is_none());
//! ```

mod document;
mod parser;

pub use document::{Document, PdfDocument, WordDocument};
pub use foundry_domain as domain;
pub use parser::{DocumentParser, PdfParser, WordParser, parser_for};

use foundry_domain::kinds::DocumentKind;
use tracing::{debug, warn};

/// Creates a document for `tag`, or `None` when no variant matches.
///
/// Stateless: the same tag always yields the same variant.
#[must_use]
pub fn select(tag: &str) -> Option<Box<dyn Document>> {
    let Ok(kind) = tag.trim().parse::<DocumentKind>() else {
        warn!(tag, "Unsupported document type");
        return None;
    };

    debug!(%kind, "Simple factory creating document");
    Some(create(kind))
}

/// Creates the concrete document for a known kind.
#[must_use]
pub fn create(kind: DocumentKind) -> Box<dyn Document> {
    match kind {
        DocumentKind::Pdf => Box::new(PdfDocument),
        DocumentKind::Word => Box::new(WordDocument),
    }
}
