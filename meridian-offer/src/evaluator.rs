use crate::models::OfferVariant;
use crate::rules::{any_rule_matches, rule_matches};
use meridian_campaign::models::CampaignProduct;
use meridian_campaign::rules::Rule;
use meridian_core::{MemberAttributes, MemberProfile};

/// Outcome of evaluating one campaign product for one member.
///
/// `variant` and `preapproval_limit` are only meaningful when `show` is
/// true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductEvaluation {
    pub show: bool,
    pub variant: OfferVariant,
    pub preapproval_limit: Option<i64>,
}

impl ProductEvaluation {
    fn hidden() -> Self {
        Self {
            show: false,
            variant: OfferVariant::InviteToApply,
            preapproval_limit: None,
        }
    }
}

/// Decide visibility, display variant, and preapproval cap for one product
/// inside one campaign.
///
/// Default products skip the visibility gate entirely: they are always
/// shown, at minimum as invite-to-apply. Everything else is shown iff its
/// `product_rules` are empty or at least one rule matches (OR across the
/// array, distinct from the AND across clauses inside a rule).
pub fn evaluate_campaign_product(
    product: &CampaignProduct,
    profile: &MemberProfile,
) -> ProductEvaluation {
    let attributes = &profile.attributes;

    if !product.is_default_campaign_product {
        let eligible =
            product.product_rules.is_empty() || any_rule_matches(&product.product_rules, attributes);
        if !eligible {
            return ProductEvaluation::hidden();
        }
    }

    let (preapproved, limit) = resolve_preapproval(&product.preapproval_rules, attributes);
    ProductEvaluation {
        show: true,
        variant: if preapproved {
            OfferVariant::Preapproved
        } else {
            OfferVariant::InviteToApply
        },
        preapproval_limit: limit,
    }
}

/// Scan every preapproval rule, keeping the largest limit among matches.
///
/// A matching rule without a limit still promotes the variant: the member
/// is preapproved, uncapped. Limits never sum.
fn resolve_preapproval(rules: &[Rule], attributes: &MemberAttributes) -> (bool, Option<i64>) {
    let mut matched = false;
    let mut best: Option<i64> = None;

    for rule in rules {
        if !rule_matches(rule, attributes) {
            continue;
        }
        matched = true;
        if let Some(limit) = rule.preapproval_limit {
            best = Some(best.map_or(limit, |current| current.max(limit)));
        }
    }

    (matched, best)
}
