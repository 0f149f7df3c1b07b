use crate::models::GeneratedOffer;
use async_trait::async_trait;
use meridian_campaign::models::Campaign;
use meridian_catalog::Product;
use meridian_core::MemberProfile;
use uuid::Uuid;

/// Store failures are opaque at this layer.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Supplies campaign aggregates with their sections, products, and rules.
#[async_trait]
pub trait CampaignRepository: Send + Sync {
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, StoreError>;
}

/// Supplies member profiles by id.
#[async_trait]
pub trait MemberProfileRepository: Send + Sync {
    async fn get_profile(&self, member_id: Uuid) -> Result<Option<MemberProfile>, StoreError>;
}

/// Supplies catalog products for display enrichment.
#[async_trait]
pub trait ProductCatalogRepository: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;
}

/// Presentation-facing snapshot of a member's current offers, replaced
/// wholesale on each service pass.
#[async_trait]
pub trait DisplayOfferRepository: Send + Sync {
    async fn replace_for_member(
        &self,
        member_id: Uuid,
        offers: &[GeneratedOffer],
    ) -> Result<(), StoreError>;
}
