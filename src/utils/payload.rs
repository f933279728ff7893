use base64::{engine::general_purpose::STANDARD, Engine as _};

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("payload is not a data URI")]
    NotDataUri,
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),
    #[error("payload is not base64-encoded")]
    NotBase64,
    #[error("invalid base64 data")]
    InvalidBase64,
}

/// Checks that an upload payload is a well-formed `data:image/*;base64,...`
/// URI. Only called when strict payload checking is enabled.
pub fn validate_data_uri(payload: &str) -> Result<(), PayloadError> {
    let rest = payload.strip_prefix("data:").ok_or(PayloadError::NotDataUri)?;

    let (media_type, data) = rest.split_once(',').ok_or(PayloadError::NotDataUri)?;

    let media_type = match media_type.strip_suffix(";base64") {
        Some(m) => m,
        None => return Err(PayloadError::NotBase64),
    };

    if !media_type.starts_with("image/") {
        return Err(PayloadError::UnsupportedMediaType(media_type.to_string()));
    }

    STANDARD
        .decode(data)
        .map_err(|_| PayloadError::InvalidBase64)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_png_data_uri() {
        // "hello" as base64
        let result = validate_data_uri("data:image/png;base64,aGVsbG8=");
        assert!(result.is_ok());
    }

    #[test]
    fn test_not_a_data_uri() {
        let result = validate_data_uri("https://example.com/image.png");
        assert!(matches!(result, Err(PayloadError::NotDataUri)));
    }

    #[test]
    fn test_non_image_media_type() {
        let result = validate_data_uri("data:application/pdf;base64,aGVsbG8=");
        assert!(matches!(
            result,
            Err(PayloadError::UnsupportedMediaType(t)) if t == "application/pdf"
        ));
    }

    #[test]
    fn test_missing_base64_marker() {
        let result = validate_data_uri("data:image/png,plain");
        assert!(matches!(result, Err(PayloadError::NotBase64)));
    }

    #[test]
    fn test_invalid_base64_data() {
        let result = validate_data_uri("data:image/png;base64,@@@");
        assert!(matches!(result, Err(PayloadError::InvalidBase64)));
    }
}
