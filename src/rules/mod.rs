use crate::catalog::StageCatalog;
use crate::error::CatalogError;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

mod standard;

/// One acceptable stage pairing for a rule.
///
/// Direction is recorded for display only; matching ignores it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alternative {
    pub source: String,
    pub target: String,
}

impl Alternative {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.source, self.target)
    }
}

/// A traceability requirement satisfied by any one of its alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    pub label: String,
    pub alternatives: Vec<Alternative>,
}

/// The ordered list of integration rules, plus the designated mandatory rule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuleTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mandatory: Option<String>,
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::default()
    }

    /// The rule table shipped with the tool, keyed to `StageCatalog::integration()`.
    pub fn standard() -> Self {
        standard::standard_rules()
    }

    /// Parses a rule table from JSON and checks its internal consistency.
    ///
    /// Stage references are not checked here; call [`RuleTable::validate`]
    /// against the catalog the table will be used with.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let table: RuleTable =
            serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        table.check_structure()?;
        Ok(table)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn mandatory_id(&self) -> Option<&str> {
        self.mandatory.as_deref()
    }

    pub fn mandatory(&self) -> Option<&Rule> {
        self.mandatory.as_deref().and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Checks that every alternative references a stage present in `catalog`.
    pub fn validate(&self, catalog: &StageCatalog) -> Result<(), CatalogError> {
        self.check_structure()?;
        for rule in &self.rules {
            let unknown = rule
                .alternatives
                .iter()
                .flat_map(|alt| [&alt.source, &alt.target])
                .find(|id| !catalog.contains(id));
            if let Some(stage_id) = unknown {
                return Err(CatalogError::UnknownStage {
                    rule_id: rule.id.clone(),
                    stage_id: stage_id.clone(),
                });
            }
        }
        Ok(())
    }

    fn check_structure(&self) -> Result<(), CatalogError> {
        let mut seen = AHashSet::with_capacity(self.rules.len());
        for rule in &self.rules {
            if !seen.insert(rule.id.as_str()) {
                return Err(CatalogError::DuplicateRule(rule.id.clone()));
            }
            if rule.alternatives.is_empty() {
                return Err(CatalogError::EmptyRule(rule.id.clone()));
            }
        }
        match &self.mandatory {
            Some(id) if !seen.contains(id.as_str()) => {
                Err(CatalogError::UnknownMandatoryRule(id.clone()))
            }
            _ => Ok(()),
        }
    }
}

/// Incrementally assembles a `RuleTable`.
///
/// ```
/// use lifelink::rules::RuleTable;
///
/// let table = RuleTable::builder()
///     .rule("r1", "Requirements from analysis")
///     .alternative("s-analysis", "t-requirements")
///     .mandatory("r1")
///     .build()
///     .unwrap();
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RuleTableBuilder {
    rules: Vec<Rule>,
    mandatory: Option<String>,
}

impl RuleTableBuilder {
    /// Starts a new rule. Following `alternative` calls attach to it.
    pub fn rule(mut self, id: &str, label: &str) -> Self {
        self.rules.push(Rule {
            id: id.to_string(),
            label: label.to_string(),
            alternatives: Vec::new(),
        });
        self
    }

    /// Adds an acceptable pair to the most recently started rule.
    /// Ignored if no rule has been started yet.
    pub fn alternative(mut self, source: &str, target: &str) -> Self {
        if let Some(rule) = self.rules.last_mut() {
            rule.alternatives.push(Alternative::new(source, target));
        }
        self
    }

    pub fn mandatory(mut self, id: &str) -> Self {
        self.mandatory = Some(id.to_string());
        self
    }

    pub fn build(self) -> Result<RuleTable, CatalogError> {
        let table = RuleTable {
            mandatory: self.mandatory,
            rules: self.rules,
        };
        table.check_structure()?;
        Ok(table)
    }
}
