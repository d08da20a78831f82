use foundry_documents::domain::kinds::DocumentKind;
use foundry_documents::{DocumentParser, PdfParser, WordParser, create, select};
use strum::IntoEnumIterator;

#[test]
fn every_kind_is_selectable_and_capabilities_succeed() {
    for kind in DocumentKind::iter() {
        let doc = select(kind.as_ref()).expect("every kind tag must be selectable");
        assert_eq!(doc.kind(), kind);
        assert!(!doc.open().is_empty());
        assert!(!doc.read().is_empty());
    }
}

#[test]
fn unsupported_tags_yield_none() {
    for tag in ["txt", "markdown", "p d f", "wordx"] {
        assert!(select(tag).is_none(), "{tag} must not produce a document");
    }
}

#[test]
fn concrete_creators_produce_their_variant() {
    let creators: [&dyn DocumentParser; 2] = [&PdfParser, &WordParser];
    let kinds: Vec<_> = creators.iter().map(|c| c.parse_and_read().kind()).collect();

    assert_eq!(kinds, vec![DocumentKind::Pdf, DocumentKind::Word]);
}

#[test]
fn narration_names_the_variant() {
    assert!(create(DocumentKind::Pdf).open().contains("PDF"));
    assert!(create(DocumentKind::Word).read().contains("Word"));
}
