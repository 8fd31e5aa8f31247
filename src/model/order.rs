//! Order domain types: line items, totals, status, and the DTOs used by the
//! order actor.
//!
//! The total recomputation lives here as pure functions so it is unit-testable
//! without a running actor. The client-claimed total is only ever a consistency
//! check; the stored `total_amount` always comes from [`recompute_total`].

use crate::model::{now_millis, CustomerInfo};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Monetary rounding tolerance when comparing the client-claimed total against
/// the server-computed one.
pub const TOTAL_TOLERANCE: f64 = 0.01;

/// Lifecycle state of an order. Every order starts as `Pending`; later
/// transitions are administrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

/// One cart entry as submitted by the client. Prices are taken as given; the
/// server recomputes subtotals and the grand total from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemInput {
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub new_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<f64>,
    pub quantity: u32,
}

impl LineItemInput {
    /// Structural validation of a single cart entry.
    pub fn validate(&self) -> Result<(), String> {
        if self.product_id.trim().is_empty() {
            return Err("line item is missing a product reference".into());
        }
        if self.name.trim().is_empty() {
            return Err(format!("line item '{}' is missing a name", self.product_id));
        }
        if self.quantity < 1 {
            return Err(format!(
                "line item '{}' has quantity {}, expected at least 1",
                self.product_id, self.quantity
            ));
        }
        if !self.new_price.is_finite() || self.new_price < 0.0 {
            return Err(format!(
                "line item '{}' has an invalid unit price",
                self.product_id
            ));
        }
        Ok(())
    }

    /// Subtotal for this entry: unit price times quantity.
    pub fn subtotal(&self) -> f64 {
        self.new_price * f64::from(self.quantity)
    }

    /// Freezes this input into a stored line item with its computed subtotal.
    pub fn into_line_item(self) -> LineItem {
        let subtotal = self.subtotal();
        LineItem {
            product_id: self.product_id,
            name: self.name,
            images: self.images,
            new_price: self.new_price,
            old_price: self.old_price,
            quantity: self.quantity,
            subtotal,
        }
    }
}

/// Server-side sum of all line subtotals. This value is authoritative; the
/// client-supplied total is never stored.
pub fn recompute_total(items: &[LineItemInput]) -> f64 {
    items.iter().map(LineItemInput::subtotal).sum()
}

/// A persisted order line: the input snapshot plus its computed subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: String,
    pub name: String,
    pub images: Vec<String>,
    pub new_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_price: Option<f64>,
    pub quantity: u32,
    pub subtotal: f64,
}

/// A durable customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Human-facing unique number, assigned once at creation and never reused.
    pub order_number: String,
    /// Owning account, or `None` for guest checkout.
    pub customer_owner: Option<String>,
    pub customer_info: CustomerInfo,
    pub line_items: Vec<LineItem>,
    /// Always the server-recomputed sum of line subtotals.
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: u64,
    pub updated_at: u64,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_owner: Option<String>,
    pub customer_info: CustomerInfo,
    pub items: Vec<LineItemInput>,
    /// The client's own total, used only as a tamper check.
    pub claimed_total: f64,
}

/// Administrative update: status transitions happen outside the placement path.
#[derive(Debug, Clone)]
pub struct OrderUpdate {
    pub status: OrderStatus,
}

/// Query filter for owner-scoped listing.
#[derive(Debug, Clone)]
pub struct OrderFilter {
    pub owner: String,
}

impl OrderFilter {
    pub fn owned_by(owner: impl Into<String>) -> Self {
        Self { owner: owner.into() }
    }
}

impl Order {
    pub(crate) fn touch(&mut self) {
        self.updated_at = now_millis();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, qty: u32) -> LineItemInput {
        LineItemInput {
            product_id: "product_1".into(),
            name: "Leather belt".into(),
            images: vec![],
            new_price: price,
            old_price: None,
            quantity: qty,
        }
    }

    #[test]
    fn total_is_sum_of_unit_price_times_quantity() {
        let items = vec![item(500.0, 2), item(150.0, 1)];
        assert!((recompute_total(&items) - 1150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(recompute_total(&[]), 0.0);
    }

    #[test]
    fn zero_quantity_is_invalid() {
        assert!(item(100.0, 0).validate().is_err());
    }

    #[test]
    fn negative_or_nan_price_is_invalid() {
        assert!(item(-1.0, 1).validate().is_err());
        assert!(item(f64::NAN, 1).validate().is_err());
    }

    #[test]
    fn subtotal_is_frozen_into_line_item() {
        let line = item(19.99, 3).into_line_item();
        assert!((line.subtotal - 59.97).abs() < 1e-9);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"pending\""
        );
    }
}
