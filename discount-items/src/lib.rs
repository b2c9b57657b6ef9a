//! discount-items
//!
//! `CatalogGateway` implementation that talks to the Items service over HTTP.
#![warn(missing_docs)]

mod config;

pub use config::ItemsGatewayConfig;

use async_trait::async_trait;
use discount_core::{CatalogGateway, CategoryGroup, DiscountError, Item, Operation};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

const NAME: &str = "discount-items";

/// HTTP client for the Items service.
pub struct ItemsGateway {
    http: Client,
    items_url: Url,
    categories_url: Url,
}

impl ItemsGateway {
    /// Build a gateway with a fresh HTTP client.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the items URL does not parse or the HTTP client
    /// cannot be constructed.
    pub fn new(cfg: ItemsGatewayConfig) -> Result<Self, DiscountError> {
        let mut builder = Client::builder().connect_timeout(cfg.connect_timeout);
        if let Some(t) = cfg.request_timeout {
            builder = builder.timeout(t);
        }
        let http = builder
            .build()
            .map_err(|e| DiscountError::InvalidArg(format!("http client: {e}")))?;
        Self::with_client(http, &cfg.items_url)
    }

    /// Build from a provided `reqwest::Client`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `items_url` is not an absolute URL.
    pub fn with_client(http: Client, items_url: &str) -> Result<Self, DiscountError> {
        let items_url = Url::parse(items_url)
            .map_err(|e| DiscountError::InvalidArg(format!("items url {items_url:?}: {e}")))?;
        let categories_url = categories_url(&items_url);
        Ok(Self {
            http,
            items_url,
            categories_url,
        })
    }

    /// Endpoint used for `fetch_items_by_ids`.
    #[must_use]
    pub const fn items_url(&self) -> &Url {
        &self.items_url
    }

    /// Endpoint used for `group_by_root_category`.
    #[must_use]
    pub const fn categories_url(&self) -> &Url {
        &self.categories_url
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "discount::items",
            skip(self, base, ids),
            fields(operation = %op, id_count = ids.len()),
            err,
        )
    )]
    async fn get_by_ids<T>(
        &self,
        base: &Url,
        op: Operation,
        ids: &[String],
    ) -> Result<Vec<T>, DiscountError>
    where
        T: DeserializeOwned,
    {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut url = base.clone();
        url.query_pairs_mut().append_pair("ids", &ids.join(","));

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(&e, op))?;
        let status = resp.status();
        if status != StatusCode::OK {
            #[cfg(feature = "tracing")]
            tracing::warn!(target: "discount::items", status = status.as_u16(), "non-success response");
            return Err(DiscountError::gateway_status(NAME, status.as_u16()));
        }
        resp.json::<Vec<T>>()
            .await
            .map_err(|e| transport_error(&e, op))
    }
}

/// A trailing `/items` segment becomes `/categories`; any other path gets
/// `/categories` appended.
fn categories_url(items_url: &Url) -> Url {
    let mut url = items_url.clone();
    let path = items_url.path().trim_end_matches('/');
    let derived = path.strip_suffix("/items").map_or_else(
        || format!("{path}/categories"),
        |prefix| format!("{prefix}/categories"),
    );
    url.set_path(&derived);
    url
}

fn transport_error(e: &reqwest::Error, op: Operation) -> DiscountError {
    if e.is_timeout() {
        DiscountError::gateway_timeout(NAME, op.as_str())
    } else if e.is_decode() {
        DiscountError::gateway(NAME, format!("decoding {op} response: {e}"))
    } else {
        DiscountError::gateway(NAME, e.to_string())
    }
}

#[async_trait]
impl CatalogGateway for ItemsGateway {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn fetch_items_by_ids(&self, ids: &[String]) -> Result<Vec<Item>, DiscountError> {
        self.get_by_ids(&self.items_url, Operation::FetchItems, ids)
            .await
    }

    async fn group_by_root_category(
        &self,
        ids: &[String],
    ) -> Result<Vec<CategoryGroup>, DiscountError> {
        self.get_by_ids(&self.categories_url, Operation::GroupByRootCategory, ids)
            .await
    }
}
