/*!
 * Tests for error types and conversions
 */

use langlist::errors::{AppError, ResponseError};

#[test]
fn test_responseError_malformed_shouldDisplayCorrectly() {
    let error = ResponseError::MalformedResponse("missing \"languages\" key".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Malformed supported-languages response"));
    assert!(display.contains("languages"));
}

#[test]
fn test_responseError_invalidJson_shouldDisplayCorrectly() {
    let error = ResponseError::InvalidJson("EOF while parsing".to_string());
    let display = format!("{}", error);
    assert!(display.contains("not valid JSON"));
    assert!(display.contains("EOF while parsing"));
}

#[test]
fn test_responseError_fromSerdeError_shouldBeInvalidJson() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: ResponseError = serde_error.into();
    assert!(matches!(error, ResponseError::InvalidJson(_)));
}

#[test]
fn test_appError_fromResponseError_shouldWrapCorrectly() {
    let app_error: AppError = ResponseError::InvalidJson("eof".to_string()).into();
    match app_error {
        AppError::Response(ResponseError::InvalidJson(message)) => assert_eq!(message, "eof"),
        other => panic!("Expected AppError::Response, got {:?}", other),
    }
}

#[test]
fn test_appError_fromIoError_shouldBeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "languages.json");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::File(ref message) if message.contains("languages.json")));
}

#[test]
fn test_appError_fromAnyhow_shouldBeUnknown() {
    let app_error: AppError = anyhow::anyhow!("something odd").into();
    assert_eq!(format!("{}", app_error), "Unknown error: something odd");
}

#[test]
fn test_appError_config_shouldDisplayCorrectly() {
    let error = AppError::Config("Invalid fallback_language".to_string());
    assert_eq!(format!("{}", error), "Configuration error: Invalid fallback_language");
}
