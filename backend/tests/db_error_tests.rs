//! Tests for db::repository::error module.

use fontpeek_ucd::db::repository::{ErrorContext, RepositoryError};

#[test]
fn test_error_context_new() {
    let ctx = ErrorContext::new("fetch_glyphs");
    assert_eq!(ctx.operation, Some("fetch_glyphs".to_string()));
    assert!(ctx.entity.is_none());
    assert!(ctx.details.is_none());
    assert!(!ctx.retryable);
}

#[test]
fn test_error_context_chaining() {
    let ctx = ErrorContext::new("fetch_glyphs")
        .with_entity("glyphs")
        .with_details("shape=page")
        .retryable();

    assert_eq!(ctx.operation, Some("fetch_glyphs".to_string()));
    assert_eq!(ctx.entity, Some("glyphs".to_string()));
    assert_eq!(ctx.details, Some("shape=page".to_string()));
    assert!(ctx.retryable);
}

#[test]
fn test_error_context_display() {
    let ctx = ErrorContext::new("fetch_glyphs")
        .with_entity("glyphs")
        .with_details("shape=by_codepoints")
        .retryable();

    let display = format!("{}", ctx);
    assert_eq!(
        display,
        "[operation=fetch_glyphs, entity=glyphs, details=shape=by_codepoints, retryable=true]"
    );
}

#[test]
fn test_error_context_default_display() {
    assert_eq!(format!("{}", ErrorContext::default()), "[]");
}

#[test]
fn test_repository_error_connection_with_context_is_retryable() {
    let ctx = ErrorContext::new("get_connection").with_entity("glyphs");
    let err = RepositoryError::connection_with_context("pool exhausted", ctx);
    let err_str = err.to_string();
    assert!(err_str.contains("Connection error"));
    assert!(err_str.contains("pool exhausted"));
    assert!(err_str.contains("operation=get_connection"));
    assert!(err.is_retryable());
}

#[test]
fn test_repository_error_query() {
    let err = RepositoryError::query("relation \"glyphs\" does not exist");
    assert!(err.to_string().contains("Query error"));
    assert!(!err.is_retryable());
}

#[test]
fn test_repository_error_query_with_retryable_context() {
    let err = RepositoryError::query_with_context("serialization failure", ErrorContext::default().retryable());
    assert!(err.is_retryable());
}

#[test]
fn test_repository_error_configuration() {
    let err = RepositoryError::configuration("missing DATABASE_URL");
    assert!(err.to_string().contains("Configuration error"));
    assert!(!err.is_retryable());
}

#[test]
fn test_repository_error_internal() {
    let err = RepositoryError::internal_with_context(
        "Failed to decode glyph row",
        ErrorContext::new("scan_row"),
    );
    assert!(err.to_string().contains("Internal error"));
    assert_eq!(err.context().operation.as_deref(), Some("scan_row"));
}

#[test]
fn test_repository_error_timeout_is_retryable() {
    let err = RepositoryError::timeout("timed out waiting for connection");
    assert!(err.is_retryable());
}

#[test]
fn test_with_operation_replaces_operation() {
    let err = RepositoryError::connection_with_context("refused", ErrorContext::new("get_connection"))
        .with_operation("fetch_glyphs:page");
    assert_eq!(err.context().operation.as_deref(), Some("fetch_glyphs:page"));
    assert!(err.context().retryable);
}
