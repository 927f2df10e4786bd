use crate::catalog::StageCatalog;
use crate::connection::Connection;
use crate::evaluator::{Evaluation, RuleResult};
use chrono::{DateTime, Utc};
use itertools::Itertools;
use std::fmt;

const TITLE: &str = "Integration Traceability Report (SDLC x STLC)";

/// The plain-text audit report. Render it with `to_string()`.
pub struct NarrativeReport<'a> {
    pub(super) evaluation: &'a Evaluation,
    pub(super) connections: &'a [Connection],
    pub(super) catalog: Option<&'a StageCatalog>,
    pub(super) generated_at: DateTime<Utc>,
}

impl NarrativeReport<'_> {
    fn stage(&self, id: &str) -> String {
        match self.catalog.and_then(|c| c.get(id)) {
            Some(stage) => format!("{} ({})", stage.label, id),
            None => id.to_string(),
        }
    }

    fn pair(&self, source: &str, target: &str) -> String {
        format!("{} <-> {}", self.stage(source), self.stage(target))
    }

    /// Ids of the rules a connection counts toward.
    fn rules_served_by(&self, connection: &Connection) -> Vec<&str> {
        self.evaluation
            .results
            .iter()
            .filter(|r| {
                r.alternatives
                    .iter()
                    .any(|alt| connection.links(&alt.source, &alt.target))
            })
            .map(|r| r.id.as_str())
            .collect()
    }

    fn write_heading(f: &mut fmt::Formatter<'_>, heading: &str) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", heading)?;
        writeln!(f, "{}", "-".repeat(heading.chars().count()))
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.evaluation.results.len();
        let satisfied = self.evaluation.satisfied_count();

        if satisfied == 0 {
            write!(f, "There are no satisfied rules yet ({} rules in total). ", total)?;
        } else {
            write!(f, "{} of {} rules are satisfied. ", satisfied, total)?;
        }
        match self.connections.len() {
            0 => writeln!(f, "There are no connections drawn between the two flows.")?,
            1 => writeln!(f, "1 connection is drawn between the two flows.")?,
            n => writeln!(f, "{} connections are drawn between the two flows.", n)?,
        }

        if let Some(mandatory) = self
            .evaluation
            .mandatory_id
            .as_deref()
            .and_then(|id| self.evaluation.rule(id))
        {
            let state = if mandatory.satisfied { "is in place" } else { "is MISSING" };
            writeln!(
                f,
                "The key connection [{}] {} {}.",
                mandatory.id, mandatory.label, state
            )?;
        }
        if self.evaluation.is_complete() {
            writeln!(f, "Both lifecycles are fully integrated.")?;
        }
        Ok(())
    }

    fn write_satisfied(&self, f: &mut fmt::Formatter<'_>, rule: &RuleResult) -> fmt::Result {
        writeln!(f, "- [{}] {}", rule.id, rule.label)?;
        writeln!(f, "    accepted pairs:")?;
        for alt in &rule.alternatives {
            writeln!(f, "      * {}", self.pair(&alt.source, &alt.target))?;
        }
        if let Some(matched) = &rule.matched {
            writeln!(f, "    satisfied by: {}", self.pair(&matched.source, &matched.target))?;
        }
        Ok(())
    }

    fn write_pending(&self, f: &mut fmt::Formatter<'_>, rule: &RuleResult) -> fmt::Result {
        writeln!(f, "- [{}] {}", rule.id, rule.label)?;
        writeln!(f, "    draw any of:")?;
        for alt in &rule.alternatives {
            writeln!(f, "      * {}", self.pair(&alt.source, &alt.target))?;
        }
        Ok(())
    }
}

impl fmt::Display for NarrativeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TITLE)?;
        writeln!(f, "{}", "=".repeat(TITLE.chars().count()))?;
        writeln!(
            f,
            "Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(f, "Integration score: {}%", self.evaluation.score)?;

        Self::write_heading(f, "Summary")?;
        self.write_summary(f)?;

        Self::write_heading(f, "Satisfied rules")?;
        let mut any = false;
        for rule in self.evaluation.satisfied() {
            self.write_satisfied(f, rule)?;
            any = true;
        }
        if !any {
            writeln!(f, "(no rules satisfied)")?;
        }

        Self::write_heading(f, "Pending rules")?;
        any = false;
        for rule in self.evaluation.pending() {
            self.write_pending(f, rule)?;
            any = true;
        }
        if !any {
            writeln!(f, "(no pending rules)")?;
        }

        Self::write_heading(f, "Connections drawn")?;
        if self.connections.is_empty() {
            writeln!(f, "(no connections drawn)")?;
        }
        for (i, connection) in self.connections.iter().enumerate() {
            let rules = self.rules_served_by(connection);
            let relevance = if rules.is_empty() {
                "no rule".to_string()
            } else {
                format!("counts toward {}", rules.iter().join(", "))
            };
            writeln!(
                f,
                "{}. {} -> {} ({})",
                i + 1,
                self.stage(&connection.source),
                self.stage(&connection.target),
                relevance
            )?;
        }

        Self::write_heading(f, "Notes")?;
        writeln!(
            f,
            "- Each rule accepts several alternative stage pairs; drawing any one of them satisfies it."
        )?;
        writeln!(f, "- Connection direction does not matter when checking rules.")?;
        writeln!(
            f,
            "- The score counts satisfied rules, not individual connections."
        )?;
        writeln!(
            f,
            "- Connections that serve no rule are still listed above for completeness."
        )
    }
}
