//! Common test utilities for building rule tables, connections and completion records.
use lifelink::prelude::*;

/// Shorthand for a freshly drawn connection.
#[allow(dead_code)]
pub fn conn(source: &str, target: &str) -> Connection {
    Connection::new(source, target)
}

/// One mandatory rule: `s-analysis <-> t-requirements`.
#[allow(dead_code)]
pub fn single_rule_table() -> RuleTable {
    RuleTable::builder()
        .rule("r1", "Requirements from analysis")
        .alternative("s-analysis", "t-requirements")
        .mandatory("r1")
        .build()
        .unwrap()
}

/// Two single-alternative rules; `r1` is mandatory.
#[allow(dead_code)]
pub fn two_rule_table() -> RuleTable {
    RuleTable::builder()
        .rule("r1", "Requirements from analysis")
        .alternative("s-analysis", "t-requirements")
        .rule("r2", "Cases from design")
        .alternative("s-design", "t-design")
        .mandatory("r1")
        .build()
        .unwrap()
}

/// One rule with three acceptable pairs.
#[allow(dead_code)]
pub fn multi_alternative_table() -> RuleTable {
    RuleTable::builder()
        .rule("r1", "Environment for the implementation")
        .alternative("s-implementation", "t-environment")
        .alternative("s-implementation", "t-execution")
        .alternative("s-testing", "t-environment")
        .build()
        .unwrap()
}

/// Connections that satisfy every rule of `table` via its first alternative.
#[allow(dead_code)]
pub fn satisfying_connections(table: &RuleTable) -> Vec<Connection> {
    table
        .rules()
        .iter()
        .map(|rule| {
            let alt = &rule.alternatives[0];
            conn(&alt.source, &alt.target)
        })
        .collect()
}

/// A completion record with the given flow-local ids marked done.
#[allow(dead_code)]
pub fn completed(sdlc: &[&str], stlc: &[&str]) -> CompletionRecord {
    let mut record = CompletionRecord::default();
    record.mark(Flow::Sdlc, sdlc.iter().copied());
    record.mark(Flow::Stlc, stlc.iter().copied());
    record
}

/// A completion record with every stage of both flows done.
#[allow(dead_code)]
pub fn everything_completed() -> CompletionRecord {
    let mut record = CompletionRecord::default();
    for flow in Flow::ALL {
        record.mark(flow, flow.local_ids());
    }
    record
}

/// A renderer edge list as the diagram would persist it.
#[allow(dead_code)]
pub const RENDERER_EDGES_JSON: &str = r##"[
  {
    "id": "reactflow__edge-s-analysisout-t-requirementsin",
    "source": "s-analysis",
    "sourceHandle": "out",
    "target": "t-requirements",
    "targetHandle": "in",
    "animated": true,
    "selected": false
  },
  {
    "source": "t-design",
    "target": "s-design",
    "style": { "stroke": "#f43f5e", "strokeDasharray": "4" },
    "label": "mine"
  }
]"##;
