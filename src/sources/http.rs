use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Send a GET request and decode its JSON body.
///
/// Any non-2xx status is reported as [`AppError::Status`]; the body is only
/// decoded for successful responses.
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
    url: &str,
) -> Result<T, AppError> {
    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("GET {url} failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| AppError::Decode(format!("Unexpected response from {url}: {e}")))
}
