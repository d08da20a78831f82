#[test]
fn foundry_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/foundry_error_pass.rs");
    t.pass("tests/ui/foundry_error_context.rs");
}
