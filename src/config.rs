//! Process configuration.
//!
//! Built once at startup and passed into [`CheckoutSystem::new`]. There are
//! no ambient globals: everything the system needs is in this one object.
//!
//! [`CheckoutSystem::new`]: crate::lifecycle::CheckoutSystem::new

#[derive(Debug, Clone)]
pub struct Config {
    /// Secret backing session-token verification.
    pub auth_secret: String,
    /// Capacity of each actor's mailbox.
    pub mailbox_size: usize,
    /// Prefix for generated order numbers, e.g. `ORD`.
    pub order_number_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_secret: "dev-secret".into(),
            mailbox_size: 32,
            order_number_prefix: "ORD".into(),
        }
    }
}

impl Config {
    /// Reads configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables: `STOREFRONT_AUTH_SECRET`,
    /// `STOREFRONT_MAILBOX_SIZE`, `STOREFRONT_ORDER_PREFIX`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            auth_secret: std::env::var("STOREFRONT_AUTH_SECRET").unwrap_or(defaults.auth_secret),
            mailbox_size: std::env::var("STOREFRONT_MAILBOX_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.mailbox_size),
            order_number_prefix: std::env::var("STOREFRONT_ORDER_PREFIX")
                .unwrap_or(defaults.order_number_prefix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert!(!config.auth_secret.is_empty());
        assert!(config.mailbox_size > 0);
        assert_eq!(config.order_number_prefix, "ORD");
    }
}
