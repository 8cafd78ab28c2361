use super::*;

use anyhow::Context;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PixmapError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PixmapError::format("x")
            .to_string()
            .contains("format error:")
    );
    assert!(PixmapError::codec("x").to_string().contains("codec error:"));
    assert!(
        PixmapError::config("x")
            .to_string()
            .contains("config error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PixmapError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn failure_reason_includes_context_chain() {
    let res: Result<(), std::io::Error> = Err(std::io::Error::other("truncated stream"));
    let err: PixmapError = res.context("decode image from memory").unwrap_err().into();
    let reason = err.failure_reason();
    assert!(reason.contains("decode image from memory"));
    assert!(reason.contains("truncated stream"));
}
