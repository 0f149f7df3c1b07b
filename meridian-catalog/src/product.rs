use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product lines in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    AutoLoan,
    Mortgage,
    Heloc,
    CreditCard,
    PersonalLoan,
    Checking,
    Savings,
    Certificate,
}

/// One label/value tile rendered on a product card.
///
/// Values are authored once per product ("Rates as low as 5.49% APR",
/// "Borrow up to $25,000") and may be overridden per member at offer
/// synthesis time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttribute {
    pub label: String,
    pub value: String,
}

/// Catalog product used to enrich generated offers for display.
///
/// Campaign products reference these by id only; a lookup that misses
/// degrades the offer's display content rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub product_type: ProductType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub attributes: Vec<ProductAttribute>,
}
