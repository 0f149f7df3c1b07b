use async_trait::async_trait;
use meridian_campaign::models::Campaign;
use meridian_catalog::Product;
use meridian_core::MemberProfile;
use meridian_offer::models::GeneratedOffer;
use meridian_offer::repository::{
    CampaignRepository, DisplayOfferRepository, MemberProfileRepository, ProductCatalogRepository,
    StoreError,
};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Campaign store held entirely in memory. Campaign persistence is an
/// external concern; this exists for the api shell and for tests.
#[derive(Default)]
pub struct InMemoryCampaignStore {
    campaigns: RwLock<Vec<Campaign>>,
}

impl InMemoryCampaignStore {
    pub fn new(campaigns: Vec<Campaign>) -> Self {
        Self {
            campaigns: RwLock::new(campaigns),
        }
    }

    pub async fn insert(&self, campaign: Campaign) {
        self.campaigns.write().await.push(campaign);
    }
}

#[async_trait]
impl CampaignRepository for InMemoryCampaignStore {
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, StoreError> {
        Ok(self.campaigns.read().await.clone())
    }
}

#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<Uuid, MemberProfile>>,
}

impl InMemoryProfileStore {
    pub fn new(profiles: Vec<MemberProfile>) -> Self {
        Self {
            profiles: RwLock::new(profiles.into_iter().map(|p| (p.id, p)).collect()),
        }
    }

    pub async fn insert(&self, profile: MemberProfile) {
        self.profiles.write().await.insert(profile.id, profile);
    }
}

#[async_trait]
impl MemberProfileRepository for InMemoryProfileStore {
    async fn get_profile(&self, member_id: Uuid) -> Result<Option<MemberProfile>, StoreError> {
        Ok(self.profiles.read().await.get(&member_id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryCatalogStore {
    products: RwLock<Vec<Product>>,
}

impl InMemoryCatalogStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl ProductCatalogRepository for InMemoryCatalogStore {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.read().await.clone())
    }
}

/// Per-member display-offer snapshots, replaced wholesale on each refresh.
#[derive(Default)]
pub struct InMemoryDisplayOfferStore {
    offers: RwLock<HashMap<Uuid, Vec<GeneratedOffer>>>,
}

impl InMemoryDisplayOfferStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn offers_for(&self, member_id: Uuid) -> Vec<GeneratedOffer> {
        self.offers
            .read()
            .await
            .get(&member_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DisplayOfferRepository for InMemoryDisplayOfferStore {
    async fn replace_for_member(
        &self,
        member_id: Uuid,
        offers: &[GeneratedOffer],
    ) -> Result<(), StoreError> {
        tracing::debug!(member_id = %member_id, offer_count = offers.len(), "replacing display offers");
        self.offers
            .write()
            .await
            .insert(member_id, offers.to_vec());
        Ok(())
    }
}
