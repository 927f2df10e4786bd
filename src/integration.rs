use crate::catalog::StageCatalog;
use crate::completion::{self, AnnotatedStage, DoneMap};
use crate::decorator::{self, DecoratedConnection};
use crate::error::CatalogError;
use crate::evaluator::{self, Evaluation};
use crate::report::ReportGenerator;
use crate::rules::RuleTable;
use crate::store::AppState;
use serde::Serialize;

/// Everything the integration diagram needs for one render.
#[derive(Debug, Clone, Serialize)]
pub struct IntegrationView<'a> {
    pub stages: Vec<AnnotatedStage<'a>>,
    pub evaluation: Evaluation,
    pub edges: Vec<DecoratedConnection>,
    /// Banner text shown while the mandatory rule is unsatisfied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// The integration checker: a stage catalog paired with a rule table that
/// references it.
#[derive(Debug, Clone)]
pub struct Integration {
    catalog: StageCatalog,
    rules: RuleTable,
}

impl Integration {
    /// Fails if any rule references a stage that `catalog` lacks.
    pub fn new(catalog: StageCatalog, rules: RuleTable) -> Result<Self, CatalogError> {
        rules.validate(&catalog)?;
        Ok(Self { catalog, rules })
    }

    pub fn standard() -> Self {
        Self {
            catalog: StageCatalog::integration(),
            rules: RuleTable::standard(),
        }
    }

    pub fn catalog(&self) -> &StageCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn evaluate(&self, state: &AppState) -> Evaluation {
        evaluator::evaluate(state.connections(), &self.rules)
    }

    /// Recomputes the whole view from the current state.
    pub fn view(&self, state: &AppState) -> IntegrationView<'_> {
        let done = DoneMap::build(&self.catalog, state.completed());
        let evaluation = self.evaluate(state);
        let warning = self.warning(&evaluation);
        IntegrationView {
            stages: completion::annotate(&self.catalog, state.completed()),
            edges: decorator::decorate(state.connections(), &done),
            evaluation,
            warning,
        }
    }

    /// The mandatory-rule banner, or `None` when the rule is satisfied.
    pub fn warning(&self, evaluation: &Evaluation) -> Option<String> {
        if !evaluation.mandatory_missing {
            return None;
        }
        let rule = self.rules.mandatory()?;
        let pair = rule
            .alternatives
            .first()
            .map(|alt| {
                format!(
                    "{} <-> {}",
                    self.catalog.label_or_id(&alt.source),
                    self.catalog.label_or_id(&alt.target)
                )
            })
            .unwrap_or_else(|| rule.label.clone());
        Some(format!("Missing key connection: {}", pair))
    }

    /// A report generator over `evaluation` and the state's connections.
    pub fn report<'a>(
        &'a self,
        evaluation: &'a Evaluation,
        state: &'a AppState,
    ) -> ReportGenerator<'a> {
        ReportGenerator::new(evaluation, state.connections()).with_catalog(&self.catalog)
    }
}
