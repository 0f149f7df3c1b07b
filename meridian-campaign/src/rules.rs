use serde::{Deserialize, Serialize};

/// Comparison operators the clause evaluator understands.
///
/// Clauses come out of untyped campaign storage, so the operator arrives
/// as a string and resolves here at evaluation time; anything this build
/// does not recognize becomes `Unknown`, which never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    IsTrue,
    IsFalse,
    Contains,
    NotContains,
    Unknown,
}

impl Operator {
    pub fn parse(name: &str) -> Self {
        match name {
            "equals" => Self::Equals,
            "not_equals" => Self::NotEquals,
            "greater_than" => Self::GreaterThan,
            "less_than" => Self::LessThan,
            "greater_than_or_equal" => Self::GreaterThanOrEqual,
            "less_than_or_equal" => Self::LessThanOrEqual,
            "is_true" => Self::IsTrue,
            "is_false" => Self::IsFalse,
            "contains" => Self::Contains,
            "not_contains" => Self::NotContains,
            _ => Self::Unknown,
        }
    }
}

/// One attribute/operator/value comparison against a member profile.
///
/// `attribute` and `operator` are the loosely-typed authoring names; both
/// resolve against closed sets at evaluation time and fail closed when
/// unrecognized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleClause {
    pub attribute: String,
    pub operator: String,
    #[serde(default)]
    pub value: String,
}

/// AND-combination of clauses. A rule with no clauses always applies,
/// which is how untargeted default offers are authored.
///
/// OR is expressed only by listing multiple rules in a rule array; the
/// array is evaluated one level up, rule by rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    #[serde(default)]
    pub clauses: Vec<RuleClause>,
    /// Dollar cap advertised when this rule matches as a preapproval rule.
    /// Ignored when the rule gates plain visibility.
    #[serde(default)]
    pub preapproval_limit: Option<i64>,
}
