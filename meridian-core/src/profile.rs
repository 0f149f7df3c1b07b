use crate::attributes::{AttributeValue, ProfileAttribute};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Snapshot of the scalar attributes eligibility rules evaluate against.
///
/// Every field is optional: member data arrives from upstream files and
/// core-banking extracts that routinely omit values. A missing value is a
/// non-match during evaluation, never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberAttributes {
    pub credit_score: Option<f64>,
    pub has_auto_loan: Option<bool>,
    pub has_mortgage: Option<bool>,
    pub has_credit_card: Option<bool>,
    pub member_tenure_years: Option<f64>,
    pub account_balance: Option<f64>,
    pub direct_deposit: Option<bool>,
    pub bankruptcy_indicator: Option<bool>,
    pub mla_indicator: Option<bool>,
    pub debt_to_income: Option<f64>,
}

impl MemberAttributes {
    /// Exhaustive accessor for the closed attribute set.
    pub fn get(&self, attribute: ProfileAttribute) -> Option<AttributeValue> {
        match attribute {
            ProfileAttribute::CreditScore => self.credit_score.map(AttributeValue::Number),
            ProfileAttribute::HasAutoLoan => self.has_auto_loan.map(AttributeValue::Bool),
            ProfileAttribute::HasMortgage => self.has_mortgage.map(AttributeValue::Bool),
            ProfileAttribute::HasCreditCard => self.has_credit_card.map(AttributeValue::Bool),
            ProfileAttribute::MemberTenureYears => {
                self.member_tenure_years.map(AttributeValue::Number)
            }
            ProfileAttribute::AccountBalance => self.account_balance.map(AttributeValue::Number),
            ProfileAttribute::DirectDeposit => self.direct_deposit.map(AttributeValue::Bool),
            ProfileAttribute::BankruptcyIndicator => {
                self.bankruptcy_indicator.map(AttributeValue::Bool)
            }
            ProfileAttribute::MlaIndicator => self.mla_indicator.map(AttributeValue::Bool),
            ProfileAttribute::DebtToIncome => self.debt_to_income.map(AttributeValue::Number),
        }
    }
}

/// A member identity plus one attribute snapshot. Owned by the caller;
/// the engine never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub attributes: MemberAttributes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_stay_absent() {
        let attributes = MemberAttributes {
            credit_score: Some(680.0),
            ..Default::default()
        };

        assert_eq!(
            attributes.get(ProfileAttribute::CreditScore),
            Some(AttributeValue::Number(680.0))
        );
        assert_eq!(attributes.get(ProfileAttribute::HasAutoLoan), None);
        assert_eq!(attributes.get(ProfileAttribute::DebtToIncome), None);
    }

    #[test]
    fn test_profile_deserializes_with_partial_attributes() {
        let profile: MemberProfile = serde_json::from_str(
            r#"{
                "id": "7f8f0f5e-3f7a-4d8e-9a3b-0d1c2e3f4a5b",
                "name": "Jordan Avery",
                "attributes": { "creditScore": 720, "hasAutoLoan": false }
            }"#,
        )
        .unwrap();

        assert_eq!(profile.attributes.credit_score, Some(720.0));
        assert_eq!(profile.attributes.has_auto_loan, Some(false));
        assert_eq!(profile.attributes.direct_deposit, None);
    }
}
