use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of member attributes the rule vocabulary can reference.
///
/// Rules authored in campaign tooling name attributes loosely ("Credit
/// Score", "FICO Score", camelCase keys from older exports); everything
/// funnels through [`ProfileAttribute::resolve`] so the rest of the engine
/// only ever sees this enum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ProfileAttribute {
    CreditScore,
    HasAutoLoan,
    HasMortgage,
    HasCreditCard,
    MemberTenureYears,
    AccountBalance,
    DirectDeposit,
    BankruptcyIndicator,
    MlaIndicator,
    DebtToIncome,
}

impl ProfileAttribute {
    /// Map an authoring-time attribute name onto the closed set.
    ///
    /// Returns `None` for names this engine does not know; callers treat
    /// that as a non-match, never an error.
    pub fn resolve(name: &str) -> Option<Self> {
        match name {
            "Credit Score" | "FICO Score" | "creditScore" => Some(Self::CreditScore),
            "Has Auto Loan" | "Auto Loan" | "hasAutoLoan" => Some(Self::HasAutoLoan),
            "Has Mortgage" | "Mortgage" | "hasMortgage" => Some(Self::HasMortgage),
            "Has Credit Card" | "Credit Card" | "hasCreditCard" => Some(Self::HasCreditCard),
            "Member Tenure" | "Member Tenure Years" | "memberTenureYears" => {
                Some(Self::MemberTenureYears)
            }
            "Account Balance" | "Deposit Balance" | "accountBalance" => Some(Self::AccountBalance),
            "Direct Deposit" | "directDeposit" => Some(Self::DirectDeposit),
            "Bankruptcy" | "Bankruptcy Indicator" | "bankruptcyIndicator" => {
                Some(Self::BankruptcyIndicator)
            }
            "MLA" | "MLA Indicator" | "mlaIndicator" => Some(Self::MlaIndicator),
            "Debt To Income" | "DTI" | "debtToIncome" => Some(Self::DebtToIncome),
            _ => None,
        }
    }
}

/// Scalar value of a single profile attribute.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Number(f64),
}

impl AttributeValue {
    /// Numeric coercion used by ordering operators: booleans coerce to
    /// 1/0, matching the loosely-typed runtime the rules were written for.
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Bool(true) => 1.0,
            Self::Bool(false) => 0.0,
        }
    }

    /// Strict boolean identity; numbers are never truthy here.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}
