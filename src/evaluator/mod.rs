use crate::connection::Connection;
use crate::rules::{Alternative, Rule, RuleTable};
use serde::Serialize;

/// The outcome of checking one rule against a connection set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleResult {
    pub id: String,
    pub label: String,
    pub alternatives: Vec<Alternative>,
    pub satisfied: bool,
    /// The first alternative, in table order, found among the connections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<Alternative>,
}

/// The result of evaluating a rule table against a connection set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub results: Vec<RuleResult>,
    /// Percentage of satisfied rules, rounded half up.
    pub score: u8,
    /// `true` when the table's mandatory rule is not satisfied.
    pub mandatory_missing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandatory_id: Option<String>,
}

impl Evaluation {
    pub fn satisfied_count(&self) -> usize {
        self.results.iter().filter(|r| r.satisfied).count()
    }

    pub fn is_complete(&self) -> bool {
        self.results.iter().all(|r| r.satisfied)
    }

    pub fn rule(&self, id: &str) -> Option<&RuleResult> {
        self.results.iter().find(|r| r.id == id)
    }

    pub fn satisfied(&self) -> impl Iterator<Item = &RuleResult> {
        self.results.iter().filter(|r| r.satisfied)
    }

    pub fn pending(&self) -> impl Iterator<Item = &RuleResult> {
        self.results.iter().filter(|r| !r.satisfied)
    }

    /// Rule ids split into `(satisfied, pending)`, each in table order.
    pub fn partition(&self) -> (Vec<String>, Vec<String>) {
        let (satisfied, pending): (Vec<_>, Vec<_>) =
            self.results.iter().partition(|r| r.satisfied);
        (
            satisfied.into_iter().map(|r| r.id.clone()).collect(),
            pending.into_iter().map(|r| r.id.clone()).collect(),
        )
    }
}

/// Integer percentage of satisfied rules, rounded half up.
///
/// An empty table is vacuously complete and scores 100.
pub fn integration_score(satisfied: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let satisfied = satisfied.min(total);
    // round(100 * s / t) without going through floats
    ((200 * satisfied + total) / (2 * total)) as u8
}

/// Returns the first alternative of `rule` that `connections` contain, in either direction.
pub fn find_match<'r>(rule: &'r Rule, connections: &[Connection]) -> Option<&'r Alternative> {
    rule.alternatives
        .iter()
        .find(|alt| connections.iter().any(|c| c.links(&alt.source, &alt.target)))
}

/// Evaluates every rule of `table` against `connections`.
///
/// This is a pure function; call it again whenever either input changes.
pub fn evaluate(connections: &[Connection], table: &RuleTable) -> Evaluation {
    let results: Vec<RuleResult> = table
        .rules()
        .iter()
        .map(|rule| {
            let matched = find_match(rule, connections).cloned();
            RuleResult {
                id: rule.id.clone(),
                label: rule.label.clone(),
                alternatives: rule.alternatives.clone(),
                satisfied: matched.is_some(),
                matched,
            }
        })
        .collect();

    let satisfied = results.iter().filter(|r| r.satisfied).count();
    let score = integration_score(satisfied, results.len());

    let mandatory_missing = table
        .mandatory_id()
        .and_then(|id| results.iter().find(|r| r.id == id))
        .is_some_and(|r| !r.satisfied);

    log::debug!(
        "Evaluated {} rules against {} connections: {}/{} satisfied, score {}%",
        results.len(),
        connections.len(),
        satisfied,
        results.len(),
        score
    );

    Evaluation {
        results,
        score,
        mandatory_missing,
        mandatory_id: table.mandatory_id().map(str::to_string),
    }
}
