//! `fetch`-backed repository listing service.

use platform_host::{
    Repository, RepositoryError, RepositoryFuture, RepositoryQuery, RepositoryService,
    RepositorySource,
};

#[derive(Debug, Clone, Copy, Default)]
/// Browser repository service calling the public GitHub and GitLab REST APIs.
pub struct WebRepositoryService;

impl RepositoryService for WebRepositoryService {
    fn list_repositories<'a>(
        &'a self,
        source: RepositorySource,
        query: &'a RepositoryQuery,
    ) -> RepositoryFuture<'a, Result<Vec<Repository>, RepositoryError>> {
        Box::pin(async move {
            let body = fetch_text(source, &query.endpoint(source)).await?;
            platform_host::parse_repositories(source, &body)
        })
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(source: RepositorySource, url: &str) -> Result<String, RepositoryError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    use crate::interop::js_error_to_string;

    let network = |message: String| RepositoryError::Network {
        provider: source,
        message,
    };

    let window = web_sys::window().ok_or_else(|| network("window unavailable".to_string()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| network(js_error_to_string(e)))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| network("fetch resolved to a non-Response value".to_string()))?;

    if !response.ok() {
        return Err(RepositoryError::Status {
            provider: source,
            status: response.status(),
        });
    }

    let text_promise = response.text().map_err(|e| network(js_error_to_string(e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| network(js_error_to_string(e)))?;
    text.as_string()
        .ok_or_else(|| network("response body was not text".to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_text(source: RepositorySource, url: &str) -> Result<String, RepositoryError> {
    Err(RepositoryError::Network {
        provider: source,
        message: format!("fetch is unavailable off-browser ({url})"),
    })
}
