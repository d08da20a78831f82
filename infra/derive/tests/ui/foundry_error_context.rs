use foundry_derive::foundry_error;
use std::borrow::Cow;

#[foundry_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn open_missing() -> Result<std::fs::File, DemoError> {
    std::fs::File::open("/definitely/not/here.log").context("opening journal")
}

fn main() {
    let err = open_missing().expect_err("path does not exist");
    assert!(matches!(err, DemoError::Io { context: Some(_), .. }));
    assert!(err.to_string().starts_with("IO error (opening journal): "));

    let internal: DemoError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");

    let with_ctx: Result<(), DemoError> = Err(DemoError::from(String::from("late")));
    let with_ctx = with_ctx.context("assembly").expect_err("still an error");
    assert_eq!(with_ctx.to_string(), "Internal error (assembly): late");
}
