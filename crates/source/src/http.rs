use crate::error::SourceError;

/// Longest upstream body kept in a [`SourceError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Ensure the response has a success status code. Returns the response
/// unchanged on success, or a [`SourceError::Status`] with the status and
/// (truncated) body text on failure.
pub(crate) async fn ensure_success(
    source_name: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, SourceError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(SourceError::Status {
            source_name,
            status: status.as_u16(),
            body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        });
    }
    Ok(response)
}
