use foundry_journal::Journal;
use std::path::Path;

#[test]
fn global_defaults_to_app_log_when_never_initialized() {
    assert!(!Journal::is_global_initialized());

    let journal = Journal::global();

    assert!(Journal::is_global_initialized());
    assert_eq!(journal.path(), Path::new("app.log"));
    assert!(std::ptr::eq(journal, Journal::global()));
}
