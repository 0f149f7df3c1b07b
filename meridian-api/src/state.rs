use meridian_offer::OfferService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub offer_service: Arc<OfferService>,
}
