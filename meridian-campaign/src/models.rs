use crate::rules::Rule;
use chrono::{DateTime, Utc};
use meridian_catalog::ProductType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Campaign categories, in cross-campaign precedence order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignType {
    Perpetual,
    Targeted,
    Untargeted,
}

impl CampaignType {
    /// Aggregation precedence; lower values are visited first, so they win
    /// ties among non-preapproved duplicates.
    pub fn priority(&self) -> u8 {
        match self {
            Self::Perpetual => 0,
            Self::Targeted => 1,
            Self::Untargeted => 2,
        }
    }
}

/// Campaign lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    Draft,
    Pending,
    Live,
    Completed,
}

/// A product placed inside one campaign section, together with the rules
/// that gate its visibility and preapproval treatment.
///
/// `product_id` is a weak reference into the catalog used for display
/// enrichment and for cross-campaign deduplication; it is never ownership.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignProduct {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub product_type: ProductType,
    /// Default products are always visible, at minimum as invite-to-apply.
    #[serde(default)]
    pub is_default_campaign_product: bool,
    #[serde(default)]
    pub is_featured_offer: bool,
    /// Visibility gate: OR across rules, AND across clauses within a rule.
    /// Empty means everyone sees the product.
    #[serde(default)]
    pub product_rules: Vec<Rule>,
    /// Preapproval gate: OR across rules, best matching limit wins.
    #[serde(default)]
    pub preapproval_rules: Vec<Rule>,
    #[serde(default)]
    pub preapproved_headline: Option<String>,
    #[serde(default)]
    pub preapproved_description: Option<String>,
    #[serde(default)]
    pub apply_headline: Option<String>,
    #[serde(default)]
    pub apply_description: Option<String>,
}

/// Named grouping of campaign products, kept in authored order for
/// presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSection {
    pub name: String,
    #[serde(default)]
    pub products: Vec<CampaignProduct>,
}

/// A marketing campaign and the products it owns.
///
/// Collections default to empty so a half-configured campaign coming out
/// of storage contributes nothing instead of failing the whole pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    pub campaign_type: CampaignType,
    pub status: CampaignStatus,
    #[serde(default)]
    pub featured_offers_section: Option<CampaignSection>,
    #[serde(default)]
    pub sections: Vec<CampaignSection>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Campaign {
    pub fn is_live(&self) -> bool {
        self.status == CampaignStatus::Live
    }
}
