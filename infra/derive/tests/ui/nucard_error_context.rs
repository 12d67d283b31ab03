use nucard_derive::nucard_error;
use std::borrow::Cow;

#[nucard_error]
pub enum LookupError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing record{}: {message}", format_context(.context))]
    Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn lookup() -> Result<(), LookupError> {
    let res: Result<(), std::io::Error> = Err(std::io::Error::other("offline"));
    res.context("loading cards")
}

fn main() {
    let err = lookup().unwrap_err();
    assert_eq!(err.to_string(), "IO error (loading cards): offline");

    let missing: Result<(), LookupError> =
        Err(LookupError::Missing { message: "card:abc".into(), context: None });
    let err = missing.context("resolving hit").unwrap_err();
    assert_eq!(err.to_string(), "Missing record (resolving hit): card:abc");
}
