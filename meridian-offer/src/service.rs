use crate::aggregator::aggregate_offers;
use crate::models::GeneratedOffer;
use crate::repository::{
    CampaignRepository, DisplayOfferRepository, MemberProfileRepository, ProductCatalogRepository,
    StoreError,
};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum OfferServiceError {
    #[error("Member profile not found: {0}")]
    ProfileNotFound(Uuid),

    #[error("Store access failed: {0}")]
    Store(#[source] StoreError),
}

/// Orchestrates one aggregation pass: fetch the collaborator data, run the
/// pure engine, and optionally refresh the member's display-offer snapshot.
pub struct OfferService {
    campaigns: Arc<dyn CampaignRepository>,
    profiles: Arc<dyn MemberProfileRepository>,
    catalog: Arc<dyn ProductCatalogRepository>,
    display_offers: Arc<dyn DisplayOfferRepository>,
}

impl OfferService {
    pub fn new(
        campaigns: Arc<dyn CampaignRepository>,
        profiles: Arc<dyn MemberProfileRepository>,
        catalog: Arc<dyn ProductCatalogRepository>,
        display_offers: Arc<dyn DisplayOfferRepository>,
    ) -> Self {
        Self {
            campaigns,
            profiles,
            catalog,
            display_offers,
        }
    }

    /// Compute the member's current ranked offer list without persisting it.
    pub async fn offers_for_member(
        &self,
        member_id: Uuid,
    ) -> Result<Vec<GeneratedOffer>, OfferServiceError> {
        let profile = self
            .profiles
            .get_profile(member_id)
            .await
            .map_err(OfferServiceError::Store)?
            .ok_or(OfferServiceError::ProfileNotFound(member_id))?;

        let campaigns = self
            .campaigns
            .list_campaigns()
            .await
            .map_err(OfferServiceError::Store)?;
        let products = self
            .catalog
            .list_products()
            .await
            .map_err(OfferServiceError::Store)?;

        let offers = aggregate_offers(&campaigns, &profile, &products);
        tracing::debug!(
            member_id = %member_id,
            campaign_count = campaigns.len(),
            offer_count = offers.len(),
            "aggregated offers"
        );
        Ok(offers)
    }

    /// Recompute the member's offers and replace their display snapshot.
    pub async fn refresh_display_offers(
        &self,
        member_id: Uuid,
    ) -> Result<Vec<GeneratedOffer>, OfferServiceError> {
        let offers = self.offers_for_member(member_id).await?;
        self.display_offers
            .replace_for_member(member_id, &offers)
            .await
            .map_err(OfferServiceError::Store)?;
        tracing::info!(member_id = %member_id, offer_count = offers.len(), "refreshed display offers");
        Ok(offers)
    }
}
