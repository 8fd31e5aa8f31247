use crate::auth::SessionTokens;
use crate::clients::{CatalogClient, OrderClient};
use crate::config::Config;
use crate::order_actor::{OrderContext, OrderNumberGenerator};
use tracing::{error, info};

/// The runtime orchestrator for the storefront checkout core.
///
/// `CheckoutSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: Connecting the order actor to its number generator
///   and the order client to the catalog
/// - **Configuration**: Consuming the one explicit [`Config`] object; no
///   ambient singletons
///
/// # Architecture
///
/// Two actors run here:
/// - **Catalog actor**: products with review/pricing invariants
/// - **Order actor**: order placement, serialized by its mailbox
///
/// # Example
///
/// ```ignore
/// let system = CheckoutSystem::new(Config::from_env());
///
/// let token = system.sessions.issue("user_1");
/// let identity = system.sessions.resolve(Some(&token));
/// let confirmation = system.order_client.place_order(request, identity).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CheckoutSystem {
    /// Client for placing and reading orders.
    pub order_client: OrderClient,

    /// Client for the product catalog.
    pub catalog_client: CatalogClient,

    /// Session token issuer/verifier, seeded from the configured secret.
    pub sessions: SessionTokens,

    /// Task handles for all running actors (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CheckoutSystem {
    /// Creates and initializes a new `CheckoutSystem` with all actors running.
    ///
    /// This method:
    /// 1. Spawns the catalog actor (no dependencies)
    /// 2. Spawns the order actor with its injected [`OrderContext`]
    /// 3. Wires the order client to the catalog for read-enrichment
    pub fn new(config: Config) -> Self {
        let (catalog_actor, catalog_client) = crate::catalog_actor::new(config.mailbox_size);
        let (order_actor, order_client) =
            crate::order_actor::new(config.mailbox_size, catalog_client.clone());

        // Catalog has no dependencies (Context = ())
        let catalog_handle = tokio::spawn(catalog_actor.run(()));

        // Order actor gets the number generator via late binding
        let order_handle = tokio::spawn(order_actor.run(OrderContext {
            numbers: OrderNumberGenerator::new(config.order_number_prefix),
        }));

        Self {
            order_client,
            catalog_client,
            sessions: SessionTokens::new(config.auth_secret),
            handles: vec![catalog_handle, order_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes their channels; each actor detects the
    /// closed channel and exits its event loop. Returns an error if any actor
    /// task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.catalog_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
