//! Maps the external "completed stages" record onto catalog stages.
//!
//! The record is keyed by flow-local names (`analysis`, `requirements`),
//! while diagrams use catalog ids (`s-analysis`). Every stage carries its
//! flow explicitly, so resolution never has to parse ids, except for
//! [`resolve_qualified`] which exists for ids coming from foreign diagrams.

use crate::catalog::{Flow, Stage, StageCatalog};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// SDLC stages marked done when a user logs in.
pub const SDLC_SUGGESTED_ON_LOGIN: [&str; 4] = ["analysis", "design", "implementation", "testing"];

/// Which stages are done, per flow, by flow-local name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompletionRecord {
    #[serde(default)]
    pub sdlc: BTreeSet<String>,
    #[serde(default)]
    pub stlc: BTreeSet<String>,
}

impl CompletionRecord {
    pub fn set(&self, flow: Flow) -> &BTreeSet<String> {
        match flow {
            Flow::Sdlc => &self.sdlc,
            Flow::Stlc => &self.stlc,
        }
    }

    fn set_mut(&mut self, flow: Flow) -> &mut BTreeSet<String> {
        match flow {
            Flow::Sdlc => &mut self.sdlc,
            Flow::Stlc => &mut self.stlc,
        }
    }

    pub fn contains(&self, flow: Flow, local_id: &str) -> bool {
        self.set(flow).contains(local_id)
    }

    /// Merges `ids` into the flow's set. Existing entries are never removed.
    pub fn mark<I, S>(&mut self, flow: Flow, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_mut(flow).extend(ids.into_iter().map(Into::into));
    }

    pub fn reset(&mut self, flow: Flow) {
        self.set_mut(flow).clear();
    }
}

/// Marks every STLC stage and the suggested SDLC stages as done.
pub fn apply_login_preset(record: &mut CompletionRecord) {
    record.mark(Flow::Stlc, Flow::Stlc.local_ids());
    record.mark(Flow::Sdlc, SDLC_SUGGESTED_ON_LOGIN);
}

pub fn is_stage_done(stage: &Stage, record: &CompletionRecord) -> bool {
    record.contains(stage.flow, &stage.local_id)
}

/// Resolves a catalog id. Ids missing from the catalog are never done.
pub fn resolve_id(catalog: &StageCatalog, id: &str, record: &CompletionRecord) -> bool {
    catalog
        .get(id)
        .is_some_and(|stage| is_stage_done(stage, record))
}

/// Resolves a flow-qualified id (`s-analysis`) without a catalog.
/// Ids with no known flow prefix are never done.
pub fn resolve_qualified(id: &str, record: &CompletionRecord) -> bool {
    Flow::split_qualified(id).is_some_and(|(flow, local)| record.contains(flow, local))
}

/// Per-stage "done" flags for a whole catalog.
#[derive(Debug, Clone, Default)]
pub struct DoneMap {
    flags: AHashMap<String, bool>,
}

impl DoneMap {
    pub fn build(catalog: &StageCatalog, record: &CompletionRecord) -> Self {
        let flags = catalog
            .iter()
            .map(|stage| (stage.id.clone(), is_stage_done(stage, record)))
            .collect();
        Self { flags }
    }

    /// `false` for ids the map does not know.
    pub fn is_done(&self, id: &str) -> bool {
        self.flags.get(id).copied().unwrap_or(false)
    }

    pub fn done_count(&self) -> usize {
        self.flags.values().filter(|done| **done).count()
    }
}

/// A catalog stage together with its derived completion flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedStage<'a> {
    #[serde(flatten)]
    pub stage: &'a Stage,
    pub done: bool,
}

pub fn annotate<'a>(catalog: &'a StageCatalog, record: &CompletionRecord) -> Vec<AnnotatedStage<'a>> {
    catalog
        .iter()
        .map(|stage| AnnotatedStage {
            stage,
            done: is_stage_done(stage, record),
        })
        .collect()
}
