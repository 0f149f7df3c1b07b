use crate::evaluator::ProductEvaluation;
use crate::models::GeneratedOffer;
use meridian_campaign::models::CampaignProduct;
use meridian_catalog::Product;

/// Turn a shown campaign product plus catalog metadata into a
/// display-ready offer.
///
/// The catalog product is optional: the reference is by id and may miss,
/// in which case the offer simply carries no description, image, or
/// attribute tiles.
pub fn synthesize_offer(
    campaign_product: &CampaignProduct,
    catalog_product: Option<&Product>,
    evaluation: &ProductEvaluation,
    section: &str,
) -> GeneratedOffer {
    let preapproved = evaluation.variant.is_preapproved();

    let (headline, description) = if preapproved {
        (
            campaign_product.preapproved_headline.clone(),
            campaign_product.preapproved_description.clone(),
        )
    } else {
        (
            campaign_product.apply_headline.clone(),
            campaign_product.apply_description.clone(),
        )
    };

    let mut attributes = catalog_product
        .map(|product| product.attributes.clone())
        .unwrap_or_default();

    // One catalog tile template serves every member: any "up to" tile is
    // rewritten with this member's own cap, leaving catalog state alone.
    if preapproved {
        if let Some(limit) = evaluation.preapproval_limit {
            for attribute in &mut attributes {
                if attribute.label.to_lowercase().contains("up to") {
                    attribute.value = format_limit(limit);
                }
            }
        }
    }

    GeneratedOffer {
        id: campaign_product.id,
        product_id: campaign_product.product_id,
        title: campaign_product.product_name.clone(),
        product_type: campaign_product.product_type,
        section: section.to_string(),
        is_featured: campaign_product.is_featured_offer,
        variant: evaluation.variant,
        preapproval_limit: evaluation.preapproval_limit,
        headline,
        description,
        product_description: catalog_product.and_then(|product| product.description.clone()),
        image_url: catalog_product.and_then(|product| product.image_url.clone()),
        attributes,
        cta_text: evaluation.variant.cta_text().to_string(),
    }
}

/// Whole-dollar display form with thousands grouping: 40000 -> "$40,000".
pub fn format_limit(limit: i64) -> String {
    let digits = limit.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if limit < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
