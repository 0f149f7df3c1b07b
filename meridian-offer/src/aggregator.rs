use crate::evaluator::evaluate_campaign_product;
use crate::models::{GeneratedOffer, OfferVariant};
use crate::synthesizer::synthesize_offer;
use meridian_campaign::models::Campaign;
use meridian_catalog::Product;
use meridian_core::MemberProfile;
use std::collections::HashMap;
use uuid::Uuid;

/// Walk every live campaign in priority order, evaluate every campaign
/// product for the member, deduplicate by the underlying catalog product,
/// and produce one ranked offer list.
///
/// Pure and deterministic: identical inputs always produce the identical
/// ordered output, and every piece of working state (dedup map, section
/// order) lives inside this one call.
pub fn aggregate_offers(
    campaigns: &[Campaign],
    profile: &MemberProfile,
    catalog: &[Product],
) -> Vec<GeneratedOffer> {
    let catalog_by_id: HashMap<Uuid, &Product> =
        catalog.iter().map(|product| (product.id, product)).collect();

    let mut live: Vec<&Campaign> = campaigns.iter().filter(|c| c.is_live()).collect();
    // Stable: campaigns of equal type keep their supplied order.
    live.sort_by_key(|campaign| campaign.campaign_type.priority());

    // Best offer per catalog product, in first-seen slot order.
    let mut slots: Vec<GeneratedOffer> = Vec::new();
    let mut slot_by_product: HashMap<Uuid, usize> = HashMap::new();
    // First-seen non-featured section names, for presentation grouping.
    let mut section_order: Vec<String> = Vec::new();

    for campaign in live {
        let featured = campaign
            .featured_offers_section
            .iter()
            .map(|section| (section, true));
        let regular = campaign.sections.iter().map(|section| (section, false));

        for (section, is_featured_section) in featured.chain(regular) {
            if !is_featured_section && !section_order.iter().any(|name| name == &section.name) {
                section_order.push(section.name.clone());
            }

            for campaign_product in &section.products {
                let evaluation = evaluate_campaign_product(campaign_product, profile);
                if !evaluation.show {
                    continue;
                }

                let catalog_product = catalog_by_id.get(&campaign_product.product_id).copied();
                let offer =
                    synthesize_offer(campaign_product, catalog_product, &evaluation, &section.name);

                match slot_by_product.get(&campaign_product.product_id) {
                    Some(&slot) => {
                        if replaces(&slots[slot], &offer) {
                            slots[slot] = offer;
                        }
                    }
                    None => {
                        slot_by_product.insert(campaign_product.product_id, slots.len());
                        slots.push(offer);
                    }
                }
            }
        }
    }

    rank(slots, &section_order)
}

/// Merge policy when the same catalog product surfaces from more than one
/// campaign: preapproved beats invite-to-apply, a strictly larger limit
/// beats a smaller one (missing counts as 0), and otherwise the first-seen
/// entry -- the earliest campaign in priority order -- stands.
fn replaces(existing: &GeneratedOffer, candidate: &GeneratedOffer) -> bool {
    match (existing.variant, candidate.variant) {
        (OfferVariant::Preapproved, OfferVariant::Preapproved) => {
            candidate.preapproval_limit.unwrap_or(0) > existing.preapproval_limit.unwrap_or(0)
        }
        (OfferVariant::Preapproved, OfferVariant::InviteToApply) => false,
        (OfferVariant::InviteToApply, OfferVariant::Preapproved) => true,
        (OfferVariant::InviteToApply, OfferVariant::InviteToApply) => false,
    }
}

/// Featured offers first in their relative order, then everything else
/// grouped by first-seen section, insertion order within a group.
fn rank(slots: Vec<GeneratedOffer>, section_order: &[String]) -> Vec<GeneratedOffer> {
    let section_rank = |offer: &GeneratedOffer| -> usize {
        section_order
            .iter()
            .position(|name| name == &offer.section)
            .unwrap_or(section_order.len())
    };

    let mut indexed: Vec<(usize, GeneratedOffer)> = slots.into_iter().enumerate().collect();
    indexed.sort_by_key(|(slot, offer)| {
        if offer.is_featured {
            (0u8, 0usize, *slot)
        } else {
            (1u8, section_rank(offer), *slot)
        }
    });
    indexed.into_iter().map(|(_, offer)| offer).collect()
}
