#[test]
fn nucard_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/nucard_error_pass.rs");
    t.pass("tests/ui/nucard_error_context.rs");
}
