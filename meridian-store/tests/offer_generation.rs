use meridian_offer::{OfferService, OfferServiceError, OfferVariant};
use meridian_store::{
    InMemoryCampaignStore, InMemoryCatalogStore, InMemoryDisplayOfferStore, InMemoryProfileStore,
    SeedData,
};
use std::sync::Arc;
use uuid::Uuid;

const MEMBER_ID: &str = "7f8f0f5e-3f7a-4d8e-9a3b-0d1c2e3f4a5b";

fn seed_json() -> &'static str {
    r#"{
        "profiles": [
            {
                "id": "7f8f0f5e-3f7a-4d8e-9a3b-0d1c2e3f4a5b",
                "name": "Jordan Avery",
                "attributes": { "creditScore": 720, "hasAutoLoan": false }
            }
        ],
        "products": [
            {
                "id": "0a50b330-9f4f-49fa-a68f-80bd48fc33e4",
                "name": "Auto Loan",
                "productType": "AUTO_LOAN",
                "description": "Competitive rates on new and used vehicles.",
                "imageUrl": "https://cdn.example.org/auto-loan.png",
                "attributes": [
                    { "label": "Borrow up to", "value": "$25,000" },
                    { "label": "Rates as low as", "value": "5.49% APR" }
                ]
            }
        ],
        "campaigns": [
            {
                "id": "2b7ac72e-55a1-4a86-8f3a-6f1f7de7a001",
                "name": "Everyday Offers",
                "campaignType": "PERPETUAL",
                "status": "LIVE",
                "sections": [
                    {
                        "name": "Loans",
                        "products": [
                            {
                                "id": "d4c1f6aa-0b3e-4f5d-bc93-8a4e5f6a7b8c",
                                "productId": "0a50b330-9f4f-49fa-a68f-80bd48fc33e4",
                                "productName": "New Auto Loan",
                                "productType": "AUTO_LOAN",
                                "isDefaultCampaignProduct": true,
                                "preapprovalRules": [
                                    {
                                        "clauses": [
                                            {
                                                "attribute": "Credit Score",
                                                "operator": "greater_than_or_equal",
                                                "value": "700"
                                            }
                                        ],
                                        "preapprovalLimit": 40000
                                    }
                                ],
                                "preapprovedHeadline": "You're preapproved!",
                                "applyHeadline": "Drive something new"
                            }
                        ]
                    }
                ]
            }
        ]
    }"#
}

fn service_from_seed(seed: SeedData) -> (OfferService, Arc<InMemoryDisplayOfferStore>) {
    let display = Arc::new(InMemoryDisplayOfferStore::new());
    let service = OfferService::new(
        Arc::new(InMemoryCampaignStore::new(seed.campaigns)),
        Arc::new(InMemoryProfileStore::new(seed.profiles)),
        Arc::new(InMemoryCatalogStore::new(seed.products)),
        display.clone(),
    );
    (service, display)
}

#[tokio::test]
async fn test_end_to_end_preapproved_auto_loan() {
    let seed = SeedData::from_json(seed_json()).unwrap();
    let (service, _) = service_from_seed(seed);
    let member_id = Uuid::parse_str(MEMBER_ID).unwrap();

    let offers = service.offers_for_member(member_id).await.unwrap();

    assert_eq!(offers.len(), 1);
    let offer = &offers[0];
    assert_eq!(offer.title, "New Auto Loan");
    assert_eq!(offer.variant, OfferVariant::Preapproved);
    assert_eq!(offer.preapproval_limit, Some(40_000));
    assert_eq!(offer.cta_text, "Review Offer");
    assert_eq!(offer.headline.as_deref(), Some("You're preapproved!"));
    // The member's own cap replaces the catalog's "up to" tile
    assert_eq!(offer.attributes[0].value, "$40,000");
    assert_eq!(offer.attributes[1].value, "5.49% APR");
    assert_eq!(
        offer.product_description.as_deref(),
        Some("Competitive rates on new and used vehicles.")
    );
}

#[tokio::test]
async fn test_refresh_replaces_display_snapshot() {
    let seed = SeedData::from_json(seed_json()).unwrap();
    let (service, display) = service_from_seed(seed);
    let member_id = Uuid::parse_str(MEMBER_ID).unwrap();

    assert!(display.offers_for(member_id).await.is_empty());

    let offers = service.refresh_display_offers(member_id).await.unwrap();
    let snapshot = display.offers_for(member_id).await;

    assert_eq!(snapshot.len(), offers.len());
    assert_eq!(snapshot[0].variant, OfferVariant::Preapproved);
}

#[tokio::test]
async fn test_unknown_member_is_an_error() {
    let seed = SeedData::from_json(seed_json()).unwrap();
    let (service, _) = service_from_seed(seed);

    let result = service.offers_for_member(Uuid::new_v4()).await;
    assert!(matches!(result, Err(OfferServiceError::ProfileNotFound(_))));
}

#[tokio::test]
async fn test_repeated_passes_are_identical() {
    let seed = SeedData::from_json(seed_json()).unwrap();
    let (service, _) = service_from_seed(seed);
    let member_id = Uuid::parse_str(MEMBER_ID).unwrap();

    let first = service.offers_for_member(member_id).await.unwrap();
    let second = service.offers_for_member(member_id).await.unwrap();

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}
