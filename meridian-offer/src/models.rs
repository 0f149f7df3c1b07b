use meridian_catalog::{ProductAttribute, ProductType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How an offer is presented to the member
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OfferVariant {
    Preapproved,
    /// Invite-to-apply: the member may apply but is not preapproved
    #[serde(rename = "ita")]
    InviteToApply,
}

impl OfferVariant {
    pub fn is_preapproved(&self) -> bool {
        matches!(self, Self::Preapproved)
    }

    pub fn cta_text(&self) -> &'static str {
        match self {
            Self::Preapproved => "Review Offer",
            Self::InviteToApply => "Learn More",
        }
    }
}

/// A display-ready offer synthesized for one member during one aggregation
/// pass. Ephemeral: identity for deduplication is the referenced catalog
/// `product_id`, and nothing here is persisted by the engine itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedOffer {
    pub id: Uuid,
    pub product_id: Uuid,
    pub title: String,
    pub product_type: ProductType,
    pub section: String,
    pub is_featured: bool,
    pub variant: OfferVariant,
    pub preapproval_limit: Option<i64>,
    /// Variant-conditional marketing copy from the campaign product.
    pub headline: Option<String>,
    pub description: Option<String>,
    /// Display enrichment from the catalog; absent when the catalog
    /// reference did not resolve.
    pub product_description: Option<String>,
    pub image_url: Option<String>,
    pub attributes: Vec<ProductAttribute>,
    pub cta_text: String,
}
