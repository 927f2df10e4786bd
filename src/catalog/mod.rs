use crate::error::CatalogError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

mod defaults;

/// One of the two modeled lifecycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    /// Software development lifecycle (the "build" flow).
    Sdlc,
    /// Software testing lifecycle (the "verification" flow).
    Stlc,
}

impl Flow {
    pub const ALL: [Flow; 2] = [Flow::Sdlc, Flow::Stlc];

    /// The prefix used to qualify stage ids on the combined integration diagram.
    pub fn prefix(self) -> &'static str {
        match self {
            Flow::Sdlc => "s",
            Flow::Stlc => "t",
        }
    }

    /// Builds the qualified id of a stage, e.g. `s-analysis`.
    pub fn qualify(self, local_id: &str) -> String {
        format!("{}-{}", self.prefix(), local_id)
    }

    /// Splits a qualified id into its flow and flow-local name.
    ///
    /// Returns `None` for ids that carry neither flow's prefix.
    pub fn split_qualified(id: &str) -> Option<(Flow, &str)> {
        Flow::ALL.into_iter().find_map(|flow| {
            id.strip_prefix(flow.prefix())
                .and_then(|rest| rest.strip_prefix('-'))
                .filter(|local| !local.is_empty())
                .map(|local| (flow, local))
        })
    }

    /// Local ids of every built-in stage of this flow, in catalog order.
    pub fn local_ids(self) -> impl Iterator<Item = &'static str> {
        defaults::local_ids(self)
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flow::Sdlc => write!(f, "SDLC"),
            Flow::Stlc => write!(f, "STLC"),
        }
    }
}

/// Fixed layout position of a stage on the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A named step in one of the two flows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    /// Catalog-unique id. Qualified (`s-analysis`) on the integration diagram.
    pub id: String,
    /// Flow-local name, the key used by the completion record.
    pub local_id: String,
    pub flow: Flow,
    pub label: String,
    pub description: String,
    pub position: Position,
}

/// Immutable lookup table of stages keyed by id.
#[derive(Debug, Clone)]
pub struct StageCatalog {
    stages: Vec<Stage>,
    index: AHashMap<String, usize>,
}

impl StageCatalog {
    /// Builds a catalog, rejecting duplicate stage ids.
    pub fn from_stages(stages: Vec<Stage>) -> Result<Self, CatalogError> {
        let mut index = AHashMap::with_capacity(stages.len());
        for (i, stage) in stages.iter().enumerate() {
            if index.insert(stage.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateStage(stage.id.clone()));
            }
        }
        Ok(Self { stages, index })
    }

    /// Both flows side by side, with flow-qualified ids.
    pub fn integration() -> Self {
        Self::from_builtin(defaults::integration_stages())
    }

    /// The standalone layout of a single flow. Stage ids equal their local ids.
    pub fn for_flow(flow: Flow) -> Self {
        Self::from_builtin(defaults::flow_stages(flow))
    }

    // The built-in tables are known to be duplicate-free.
    fn from_builtin(stages: Vec<Stage>) -> Self {
        let index = stages
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();
        Self { stages, index }
    }

    pub fn get(&self, id: &str) -> Option<&Stage> {
        self.index.get(id).map(|&i| &self.stages[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Display label for `id`, or the id itself when the stage is unknown.
    pub fn label_or_id<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map(|s| s.label.as_str()).unwrap_or(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter()
    }

    pub fn stages_in(&self, flow: Flow) -> impl Iterator<Item = &Stage> {
        self.stages.iter().filter(move |s| s.flow == flow)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
