use nucard_derive::nucard_error;
use std::borrow::Cow;

#[nucard_error]
pub enum FetchError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), FetchError> {
    Err::<(), _>(std::io::Error::other("disk"))?;
    Ok(())
}

fn main() {
    let err = read().unwrap_err();
    assert!(matches!(err, FetchError::Io { context: None, .. }));

    let from_str: FetchError = "boom".into();
    assert!(matches!(from_str, FetchError::Internal { .. }));

    let from_string: FetchError = String::from("boom").into();
    assert_eq!(from_string.to_string(), "Internal error: boom");
}
