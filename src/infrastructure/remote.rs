//! REST binding of the product store.
//!
//! Talks JSON to a document-store HTTP API:
//! `GET {base}/products`, `POST {base}/products`,
//! `DELETE {base}/products/{id}`. Any non-success status is a store fault.

use reqwest::blocking::{Client, Response};
use tracing::debug;

use crate::domain::{Product, ProductDraft, ProductStore, StoreError, StoreResult};

pub struct RestStore {
    client: Client,
    base_url: String,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn product_url(&self, id: &str) -> String {
        format!("{}/products/{}", self.base_url, id)
    }
}

impl ProductStore for RestStore {
    fn fetch_all(&self) -> StoreResult<Vec<Product>> {
        debug!("GET {}", self.products_url());
        let response = check_status(self.client.get(self.products_url()).send()?)?;
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn create(&self, draft: &ProductDraft) -> StoreResult<Product> {
        debug!("POST {}", self.products_url());
        let response = check_status(
            self.client
                .post(self.products_url())
                .json(draft)
                .send()?,
        )?;
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        debug!("DELETE {}", self.product_url(id));
        check_status(self.client.delete(self.product_url(id)).send()?)?;
        Ok(())
    }
}

fn check_status(response: Response) -> StoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(StoreError::Status(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_url() {
        let store = RestStore::new("http://localhost:7878/api");
        assert_eq!(store.products_url(), "http://localhost:7878/api/products");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let store = RestStore::new("http://localhost:7878/api/");
        assert_eq!(store.products_url(), "http://localhost:7878/api/products");
        assert_eq!(
            store.product_url("42"),
            "http://localhost:7878/api/products/42"
        );
    }
}
