use limebird_derive::site_error;
use std::borrow::Cow;

#[site_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse_port(raw: &str) -> Result<u16, DemoError> {
    let port = raw.parse::<u16>()?;
    if port == 0 {
        return Err(DemoError::Rejected { message: "port 0".into(), context: None });
    }
    Ok(port)
}

#[test]
fn question_mark_converts_source_errors() {
    let err = parse_port("abc").expect_err("not a number");
    assert!(matches!(err, DemoError::Parse { context: None, .. }));
    assert!(err.to_string().starts_with("Parse error: "));
}

#[test]
fn context_on_source_result() {
    let err = "x".parse::<u16>().context("Reading SMTP port").expect_err("not a number");
    assert!(err.to_string().starts_with("Parse error (Reading SMTP port): "));
}

#[test]
fn context_on_own_result_overrides_slot() {
    let err = parse_port("0").context("smtp.port").expect_err("zero is rejected");
    assert_eq!(err.to_string(), "Rejected (smtp.port): port 0");
}

#[test]
fn internal_from_strings() {
    let from_static: DemoError = "boom".into();
    assert_eq!(from_static.to_string(), "Internal error: boom");

    let from_owned: DemoError = format!("code {}", 7).into();
    assert_eq!(from_owned.to_string(), "Internal error: code 7");
}
