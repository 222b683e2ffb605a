//! JSON GET helper shared by all provider clients.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::FetchError;
use crate::host::http::{HttpRequest, HttpTransport};

/// Sends `request` and decodes the body as `T`.
///
/// The status code is not checked: a non-2xx response whose body happens to
/// match `T` is returned as a success, and one that doesn't surfaces as
/// [`FetchError::Decode`].
pub async fn get_json<T: DeserializeOwned>(
    transport: &dyn HttpTransport,
    request: HttpRequest,
) -> Result<T, FetchError> {
    let response = transport.send(request).await?;

    if !response.is_success() {
        debug!(
            status = response.status,
            "Non-success status, decoding body anyway"
        );
    }

    response.json()
}
