use meridian_campaign::rules::{Operator, Rule, RuleClause};
use meridian_core::{AttributeValue, MemberAttributes, ProfileAttribute};

/// Evaluate one clause against a profile snapshot.
///
/// Fail-closed: an attribute name outside the known vocabulary, a value
/// missing from the profile, or an operator this build does not recognize
/// is a non-match. Nothing in here errors or panics on bad rule data.
pub fn clause_matches(clause: &RuleClause, attributes: &MemberAttributes) -> bool {
    let Some(attribute) = ProfileAttribute::resolve(&clause.attribute) else {
        return false;
    };
    let Some(value) = attributes.get(attribute) else {
        return false;
    };

    match Operator::parse(&clause.operator) {
        Operator::Equals => value.to_string() == clause.value,
        Operator::NotEquals => value.to_string() != clause.value,
        Operator::GreaterThan => compare_numeric(value, &clause.value, |a, b| a > b),
        Operator::LessThan => compare_numeric(value, &clause.value, |a, b| a < b),
        Operator::GreaterThanOrEqual => compare_numeric(value, &clause.value, |a, b| a >= b),
        Operator::LessThanOrEqual => compare_numeric(value, &clause.value, |a, b| a <= b),
        Operator::IsTrue => value.as_bool() == Some(true),
        Operator::IsFalse => value.as_bool() == Some(false),
        Operator::Contains => contains_ignore_case(&value, &clause.value),
        Operator::NotContains => !contains_ignore_case(&value, &clause.value),
        Operator::Unknown => false,
    }
}

/// A rule is an AND of its clauses; a rule with no clauses always applies.
pub fn rule_matches(rule: &Rule, attributes: &MemberAttributes) -> bool {
    rule.clauses
        .iter()
        .all(|clause| clause_matches(clause, attributes))
}

/// OR across a rule array: one matching rule is enough. An empty array
/// does not match here; the caller decides what an absent rule set means.
pub fn any_rule_matches(rules: &[Rule], attributes: &MemberAttributes) -> bool {
    rules.iter().any(|rule| rule_matches(rule, attributes))
}

fn compare_numeric(value: AttributeValue, raw: &str, cmp: impl Fn(f64, f64) -> bool) -> bool {
    let lhs = value.as_number();
    let rhs = raw.trim().parse::<f64>().unwrap_or(f64::NAN);
    if lhs.is_nan() || rhs.is_nan() {
        return false;
    }
    cmp(lhs, rhs)
}

fn contains_ignore_case(value: &AttributeValue, needle: &str) -> bool {
    value
        .to_string()
        .to_lowercase()
        .contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(attribute: &str, operator: &str, value: &str) -> RuleClause {
        RuleClause {
            attribute: attribute.to_string(),
            operator: operator.to_string(),
            value: value.to_string(),
        }
    }

    fn attributes() -> MemberAttributes {
        MemberAttributes {
            credit_score: Some(720.0),
            has_auto_loan: Some(false),
            direct_deposit: Some(true),
            debt_to_income: Some(0.43),
            ..Default::default()
        }
    }

    #[test]
    fn test_unmapped_attribute_never_matches() {
        let attrs = attributes();
        for operator in ["equals", "greater_than", "is_true"] {
            assert!(!clause_matches(
                &clause("Astrological Sign", operator, "720"),
                &attrs
            ));
        }
    }

    #[test]
    fn test_missing_profile_value_never_matches() {
        let attrs = attributes();
        assert!(!clause_matches(
            &clause("Account Balance", "greater_than", "0"),
            &attrs
        ));
    }

    #[test]
    fn test_equality_uses_string_forms() {
        let attrs = attributes();
        assert!(clause_matches(
            &clause("Credit Score", "equals", "720"),
            &attrs
        ));
        assert!(clause_matches(
            &clause("Credit Score", "not_equals", "700"),
            &attrs
        ));
        assert!(clause_matches(
            &clause("DTI", "equals", "0.43"),
            &attrs
        ));
    }

    #[test]
    fn test_numeric_comparisons() {
        let attrs = attributes();
        assert!(clause_matches(
            &clause("FICO Score", "greater_than_or_equal", "700"),
            &attrs
        ));
        assert!(clause_matches(
            &clause("Credit Score", "less_than_or_equal", "720"),
            &attrs
        ));
        assert!(!clause_matches(
            &clause("Credit Score", "greater_than", "720"),
            &attrs
        ));
        // Booleans coerce to 1/0 for ordering operators
        assert!(clause_matches(
            &clause("Direct Deposit", "greater_than", "0"),
            &attrs
        ));
    }

    #[test]
    fn test_non_numeric_comparison_is_false() {
        let attrs = attributes();
        assert!(!clause_matches(
            &clause("Credit Score", "greater_than", "abc"),
            &attrs
        ));
        assert!(!clause_matches(
            &clause("Credit Score", "less_than", ""),
            &attrs
        ));
    }

    #[test]
    fn test_boolean_identity() {
        let attrs = attributes();
        assert!(clause_matches(
            &clause("Direct Deposit", "is_true", ""),
            &attrs
        ));
        assert!(clause_matches(
            &clause("Has Auto Loan", "is_false", ""),
            &attrs
        ));
        // Numbers are never booleans, even 1/0
        assert!(!clause_matches(
            &clause("Credit Score", "is_true", ""),
            &attrs
        ));
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let attrs = attributes();
        assert!(clause_matches(
            &clause("Direct Deposit", "contains", "TRUE"),
            &attrs
        ));
        assert!(clause_matches(
            &clause("Credit Score", "not_contains", "9"),
            &attrs
        ));
    }

    #[test]
    fn test_unknown_operator_is_false() {
        let attrs = attributes();
        assert!(!clause_matches(
            &clause("Credit Score", "rhymes_with", "720"),
            &attrs
        ));
    }

    #[test]
    fn test_empty_rule_always_matches() {
        assert!(rule_matches(&Rule::default(), &MemberAttributes::default()));
    }

    #[test]
    fn test_rule_is_and_of_clauses() {
        let attrs = attributes();
        let rule = Rule {
            clauses: vec![
                clause("Credit Score", "greater_than_or_equal", "700"),
                clause("Has Auto Loan", "is_false", ""),
            ],
            preapproval_limit: None,
        };
        assert!(rule_matches(&rule, &attrs));

        let rule = Rule {
            clauses: vec![
                clause("Credit Score", "greater_than_or_equal", "700"),
                clause("Has Auto Loan", "is_true", ""),
            ],
            preapproval_limit: None,
        };
        assert!(!rule_matches(&rule, &attrs));
    }

    #[test]
    fn test_rule_array_is_or() {
        let attrs = attributes();
        let rules = vec![
            Rule {
                clauses: vec![clause("Credit Score", "greater_than", "800")],
                preapproval_limit: None,
            },
            Rule {
                clauses: vec![clause("Has Auto Loan", "is_false", "")],
                preapproval_limit: None,
            },
        ];
        assert!(any_rule_matches(&rules, &attrs));
        assert!(!any_rule_matches(&[], &attrs));
    }
}
