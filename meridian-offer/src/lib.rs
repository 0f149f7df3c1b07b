pub mod aggregator;
pub mod evaluator;
pub mod models;
pub mod repository;
pub mod rules;
pub mod service;
pub mod synthesizer;

pub use aggregator::aggregate_offers;
pub use evaluator::{evaluate_campaign_product, ProductEvaluation};
pub use models::{GeneratedOffer, OfferVariant};
pub use service::{OfferService, OfferServiceError};
pub use synthesizer::synthesize_offer;
