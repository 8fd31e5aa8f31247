//! Customer contact details captured at checkout.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Delivery carrier selected by the customer. The storefront ships through
/// exactly two postal services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Carrier {
    Ukrposhta,
    Novaposhta,
}

impl Display for Carrier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Carrier::Ukrposhta => write!(f, "ukrposhta"),
            Carrier::Novaposhta => write!(f, "novaposhta"),
        }
    }
}

/// Contact form submitted with an order. All string fields are required and
/// stored trimmed; the email is stored lowercased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub post_service: Carrier,
    pub post_office: String,
}

impl CustomerInfo {
    /// Trims every field and rejects the first one that is blank.
    /// Returns the normalized form on success.
    pub fn normalized(self) -> Result<Self, String> {
        let field = |value: String, name: &str| -> Result<String, String> {
            let trimmed = value.trim().to_string();
            if trimmed.is_empty() {
                Err(format!("customer field '{name}' is required"))
            } else {
                Ok(trimmed)
            }
        };

        Ok(Self {
            first_name: field(self.first_name, "firstName")?,
            last_name: field(self.last_name, "lastName")?,
            phone: field(self.phone, "phone")?,
            email: field(self.email, "email")?.to_lowercase(),
            city: field(self.city, "city")?,
            post_service: self.post_service,
            post_office: field(self.post_office, "postOffice")?,
        })
    }
}
