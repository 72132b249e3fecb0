// Responsible for all communication with the remote product service.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::domain::product::ProductGateway;

/// reqwest-backed [`ProductGateway`].
///
/// Built once with a configured base address and injected into the cart
/// service; the client keeps reqwest's default timeouts and does not retry.
pub struct HttpProductGateway {
    http: reqwest::Client,
    base_url: String,
}

impl HttpProductGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn product_url(&self, product_id: Option<i64>) -> String {
        let base = self.base_url.trim_end_matches('/');
        match product_id {
            Some(id) => format!("{}/products/{}", base, id),
            None => format!("{}/products", base),
        }
    }
}

#[async_trait]
impl ProductGateway for HttpProductGateway {
    async fn fetch_product(&self, product_id: Option<i64>) -> Option<JsonValue> {
        let url = self.product_url(product_id);

        let response = match self.http.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(error = %e, url = %url, "Error fetching product");
                return None;
            }
        };

        let status = response.status();
        let body: JsonValue = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, url = %url, "Error parsing product response");
                return None;
            }
        };

        // Success condition: HTTP 200 AND an object body carrying a `data` field.
        if status == reqwest::StatusCode::OK {
            if let Some(data) = body.get("data") {
                return Some(data.clone());
            }
        }

        tracing::error!(
            status = %status,
            url = %url,
            "Product service returned an unusable response"
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_single_and_collection_urls() {
        let gw = HttpProductGateway::new("http://localhost:3000/");
        assert_eq!(gw.product_url(Some(5)), "http://localhost:3000/products/5");
        assert_eq!(gw.product_url(None), "http://localhost:3000/products");
    }
}
