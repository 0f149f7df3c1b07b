use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use meridian_catalog::ProductAttribute;
use meridian_offer::{GeneratedOffer, OfferServiceError};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub title: String,
    pub section: String,
    pub is_featured: bool,
    pub variant: meridian_offer::OfferVariant,
    pub preapproval_limit: Option<i64>,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub product_description: Option<String>,
    pub image_url: Option<String>,
    pub attributes: Vec<ProductAttribute>,
    pub cta_text: String,
}

impl From<GeneratedOffer> for OfferResponse {
    fn from(offer: GeneratedOffer) -> Self {
        Self {
            id: offer.id,
            product_id: offer.product_id,
            title: offer.title,
            section: offer.section,
            is_featured: offer.is_featured,
            variant: offer.variant,
            preapproval_limit: offer.preapproval_limit,
            headline: offer.headline,
            description: offer.description,
            product_description: offer.product_description,
            image_url: offer.image_url,
            attributes: offer.attributes,
            cta_text: offer.cta_text,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/members/{member_id}/offers", get(get_member_offers))
}

/// GET /v1/members/{member_id}/offers
/// The member's current ranked offer list; refreshes their display
/// snapshot as a side effect.
pub async fn get_member_offers(
    State(state): State<AppState>,
    Path(member_id): Path<Uuid>,
) -> Result<Json<Vec<OfferResponse>>, StatusCode> {
    let offers = state
        .offer_service
        .refresh_display_offers(member_id)
        .await
        .map_err(|err| match err {
            OfferServiceError::ProfileNotFound(_) => StatusCode::NOT_FOUND,
            OfferServiceError::Store(err) => {
                tracing::error!(member_id = %member_id, error = %err, "offer generation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        })?;

    Ok(Json(offers.into_iter().map(OfferResponse::from).collect()))
}
