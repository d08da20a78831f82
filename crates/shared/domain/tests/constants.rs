use foundry_domain::constants::{
    DEFAULT_JOURNAL_FILE, DEFAULT_MODULE_JOURNAL_FILE, INTEGRATED_GRAPHICS, LOG_PREFIX,
    MODULE_LOG_PREFIX, NOT_AVAILABLE,
};

#[test]
fn constants_match_journal_and_spec_sheet_strings() {
    assert_eq!(LOG_PREFIX, "[LOG]");
    assert_eq!(MODULE_LOG_PREFIX, "[MODULE LOG]");
    assert_eq!(DEFAULT_JOURNAL_FILE, "app.log");
    assert_eq!(DEFAULT_MODULE_JOURNAL_FILE, "module_app.log");
    assert_eq!(NOT_AVAILABLE, "N/A");
    assert_eq!(INTEGRATED_GRAPHICS, "Integrated Graphics");
}
