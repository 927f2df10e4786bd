use super::{Alternative, Rule, RuleTable};

// (id, label, alternatives); ids refer to the integration catalog.
const STANDARD_RULES: [(&str, &str, &[(&str, &str)]); 6] = [
    (
        "r1",
        "Test requirements derived from analysis",
        &[("s-analysis", "t-requirements")],
    ),
    (
        "r2",
        "Test cases designed from the system design",
        &[("s-design", "t-design"), ("s-design", "t-planning")],
    ),
    (
        "r3",
        "Test environment prepared for what was implemented",
        &[
            ("s-implementation", "t-environment"),
            ("s-implementation", "t-execution"),
        ],
    ),
    (
        "r4",
        "Test execution validates the testing phase",
        &[("s-testing", "t-execution")],
    ),
    (
        "r5",
        "Post-release validation",
        &[("s-deployment", "t-closure"), ("s-deployment", "t-execution")],
    ),
    (
        "r6",
        "Regression documented during maintenance",
        &[
            ("s-maintenance", "t-closure"),
            ("s-maintenance", "t-requirements"),
        ],
    ),
];

const MANDATORY_RULE: &str = "r1";

pub(super) fn standard_rules() -> RuleTable {
    let rules = STANDARD_RULES
        .iter()
        .map(|(id, label, alternatives)| Rule {
            id: id.to_string(),
            label: label.to_string(),
            alternatives: alternatives
                .iter()
                .map(|(source, target)| Alternative::new(*source, *target))
                .collect(),
        })
        .collect();
    RuleTable {
        mandatory: Some(MANDATORY_RULE.to_string()),
        rules,
    }
}
