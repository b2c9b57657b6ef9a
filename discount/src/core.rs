use std::sync::Arc;
use std::time::Duration;

use discount_cache::ResultCache;
use discount_core::{CatalogGateway, DiscountError, Operation};
use discount_types::{CacheConfig, DiscountConfig};

use crate::Interrupt;

/// Orchestrator that serves the two selection operations over a catalog gateway.
pub struct Discount {
    pub(crate) gateway: Arc<dyn CatalogGateway>,
    pub(crate) cfg: DiscountConfig,
    pub(crate) cache: Option<ResultCache>,
    pub(crate) interrupt: Option<Interrupt>,
}

/// Builder for constructing a `Discount` orchestrator with custom configuration.
pub struct DiscountBuilder {
    gateway: Option<Arc<dyn CatalogGateway>>,
    cfg: DiscountConfig,
    cache: Option<CacheConfig>,
    interrupt: Option<Interrupt>,
}

impl Default for DiscountBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscountBuilder {
    /// Create a new builder with defaults.
    ///
    /// - No gateway; one must be set via [`with_gateway`](Self::with_gateway).
    /// - 5s per gateway call, no overall request deadline.
    /// - Result cache enabled: 5000 entries and 15 minutes per operation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gateway: None,
            cfg: DiscountConfig::default(),
            cache: Some(CacheConfig::default()),
            interrupt: None,
        }
    }

    /// Set the catalog gateway. A later call replaces an earlier one.
    #[must_use]
    pub fn with_gateway(mut self, gateway: Arc<dyn CatalogGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Set the timeout applied to each individual gateway call.
    ///
    /// On expiry the call fails with `GatewayTimeout` and nothing is cached.
    #[must_use]
    pub const fn gateway_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.gateway_timeout = timeout;
        self
    }

    /// Set an overall deadline per selection request.
    ///
    /// Covers every gateway call of the request plus the selection itself;
    /// when exceeded the request fails with `RequestTimeout`.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Replace the whole orchestrator configuration.
    #[must_use]
    pub const fn config(mut self, cfg: DiscountConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the result cache policy.
    #[must_use]
    pub fn cache(mut self, cfg: CacheConfig) -> Self {
        self.cache = Some(cfg);
        self
    }

    /// Disable the result cache; every call reaches the gateway.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.cache = None;
        self
    }

    /// Attach a cooperative interruption signal.
    #[must_use]
    pub fn interrupt(mut self, interrupt: Interrupt) -> Self {
        self.interrupt = Some(interrupt);
        self
    }

    /// Build the `Discount` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no gateway was set via [`with_gateway`](Self::with_gateway),
    /// either timeout is zero, or a cache TTL exceeds [`CacheConfig::MAX_TTL`].
    pub fn build(self) -> Result<Discount, DiscountError> {
        let Some(gateway) = self.gateway else {
            return Err(DiscountError::InvalidArg(
                "no catalog gateway set; add one via with_gateway(...)".to_string(),
            ));
        };
        if self.cfg.gateway_timeout.is_zero() {
            return Err(DiscountError::InvalidArg(
                "gateway timeout must be greater than zero".to_string(),
            ));
        }
        if self.cfg.request_timeout.is_some_and(|d| d.is_zero()) {
            return Err(DiscountError::InvalidArg(
                "request timeout must be greater than zero".to_string(),
            ));
        }
        if let Some(cache) = &self.cache {
            cache.validate()?;
        }
        Ok(Discount {
            gateway,
            cfg: self.cfg,
            cache: self.cache.as_ref().map(ResultCache::new),
            interrupt: self.interrupt,
        })
    }
}

impl Discount {
    /// Start building a new `Discount` instance.
    ///
    /// ```rust,ignore
    /// let discount = discount::Discount::builder()
    ///     .with_gateway(Arc::new(InMemoryCatalog::fixtures()))
    ///     .without_cache()
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> DiscountBuilder {
        DiscountBuilder::new()
    }

    /// Effective orchestrator configuration.
    #[must_use]
    pub const fn config(&self) -> &DiscountConfig {
        &self.cfg
    }

    /// The result cache, unless disabled at build time.
    #[must_use]
    pub const fn cache(&self) -> Option<&ResultCache> {
        self.cache.as_ref()
    }

    /// Wrap a gateway future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "discount::core::gateway_call_with_timeout",
            skip(fut),
            fields(
                gateway = gateway_name,
                operation = %op,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn gateway_call_with_timeout<T, Fut>(
        gateway_name: &'static str,
        op: Operation,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, DiscountError>
    where
        Fut: core::future::Future<Output = Result<T, DiscountError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(DiscountError::gateway_timeout(gateway_name, op.as_str())))
    }

    /// Run one gateway call under the per-call timeout, abandoning it if the
    /// interrupt fires first.
    pub(crate) async fn call_gateway<T, Fut>(
        &self,
        op: Operation,
        fut: Fut,
    ) -> Result<T, DiscountError>
    where
        Fut: core::future::Future<Output = Result<T, DiscountError>>,
    {
        let timed =
            Self::gateway_call_with_timeout(self.gateway.name(), op, self.cfg.gateway_timeout, fut);
        let Some(interrupt) = &self.interrupt else {
            return timed.await;
        };
        if interrupt.is_triggered() {
            return Err(DiscountError::interrupted(op.as_str()));
        }
        tokio::select! {
            biased;
            () = interrupt.triggered() => {
                #[cfg(feature = "tracing")]
                tracing::warn!(gateway = self.gateway.name(), operation = %op, "gateway call interrupted");
                Err(DiscountError::interrupted(op.as_str()))
            }
            res = timed => res,
        }
    }
}

/// Bound a whole request by an optional deadline.
pub(crate) async fn with_request_deadline<T, Fut>(
    deadline: Option<Duration>,
    op: Operation,
    fut: Fut,
) -> Result<T, DiscountError>
where
    Fut: core::future::Future<Output = Result<T, DiscountError>>,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .unwrap_or_else(|_| Err(DiscountError::request_timeout(op.as_str()))),
        None => fut.await,
    }
}
