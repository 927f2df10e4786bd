//! The shipped stage tables for both flows.

use super::{Flow, Position, Stage};

struct StageDef {
    local_id: &'static str,
    /// Label on the combined integration diagram (after the flow name).
    short_label: &'static str,
    /// Label on the flow's own page.
    page_label: &'static str,
    page_position: (f64, f64),
    description: &'static str,
}

const SDLC_STAGES: [StageDef; 6] = [
    StageDef {
        local_id: "analysis",
        short_label: "Analysis",
        page_label: "Analysis",
        page_position: (50.0, 80.0),
        description: "Detailed definition of the problem, identification of end users, gathering of functional and non-functional requirements, and setting of project goals. Business needs are documented and initial risks are analysed.",
    },
    StageDef {
        local_id: "design",
        short_label: "Design",
        page_label: "Design",
        page_position: (300.0, 40.0),
        description: "System architecture, user interface (UI/UX) design, data modelling, definition of components and modules, and technology selection. Diagrams and technical specifications are produced to guide implementation.",
    },
    StageDef {
        local_id: "implementation",
        short_label: "Implementation",
        page_label: "Implementation",
        page_position: (300.0, 150.0),
        description: "Coding of the defined modules and components, integration of systems and features, unit testing and code review. Development is checked against the agreed standards and requirements.",
    },
    StageDef {
        local_id: "testing",
        short_label: "Testing",
        page_label: "Testing",
        page_position: (550.0, 80.0),
        description: "Functional, integration and system testing to validate that the product meets its requirements. Defects are found and fixed, and test results are documented.",
    },
    StageDef {
        local_id: "deployment",
        short_label: "Deployment",
        page_label: "Deployment",
        page_position: (800.0, 40.0),
        description: "Release of the product to production, configuration of servers and services, initial monitoring and end-user training. The go-live is followed up closely.",
    },
    StageDef {
        local_id: "maintenance",
        short_label: "Maintenance",
        page_label: "Maintenance",
        page_position: (800.0, 150.0),
        description: "Post-release bug fixing, improvements and updates, incident management and ongoing support. Performance is reviewed and future optimisations are planned.",
    },
];

const STLC_STAGES: [StageDef; 6] = [
    StageDef {
        local_id: "requirements",
        short_label: "Requirements",
        page_label: "Requirements Analysis",
        page_position: (50.0, 60.0),
        description: "Identification and documentation of the test requirements derived from business and system analysis. Acceptance criteria and test objectives are defined.",
    },
    StageDef {
        local_id: "planning",
        short_label: "Planning",
        page_label: "Test Planning",
        page_position: (300.0, 20.0),
        description: "Test strategy, resource planning, effort estimation and role definition. The kinds of tests to run and the expected deliverables are agreed.",
    },
    StageDef {
        local_id: "design",
        short_label: "Case Design",
        page_label: "Test Case Design",
        page_position: (300.0, 120.0),
        description: "Writing and documenting test cases, defining test data and setting up execution procedures. Coverage of requirements and critical scenarios is ensured.",
    },
    StageDef {
        local_id: "environment",
        short_label: "Environment",
        page_label: "Environment Setup",
        page_position: (550.0, 60.0),
        description: "Preparation of the test environment, tool configuration, creation of accounts and required data. The environment is checked to be representative and usable.",
    },
    StageDef {
        local_id: "execution",
        short_label: "Execution",
        page_label: "Test Execution",
        page_position: (800.0, 20.0),
        description: "Running the test cases, recording results and defects, tracking incidents and working with the development team on their resolution.",
    },
    StageDef {
        local_id: "closure",
        short_label: "Closure",
        page_label: "Test Closure",
        page_position: (800.0, 120.0),
        description: "Final test report, analysis of metrics and exit criteria. Feedback is collected and lessons learned are documented for future projects.",
    },
];

const INTEGRATION_COLUMN_X: [f64; 2] = [50.0, 520.0];
const INTEGRATION_TOP_Y: f64 = 60.0;
const INTEGRATION_ROW_GAP: f64 = 90.0;

fn defs(flow: Flow) -> &'static [StageDef] {
    match flow {
        Flow::Sdlc => &SDLC_STAGES,
        Flow::Stlc => &STLC_STAGES,
    }
}

pub(super) fn integration_stages() -> Vec<Stage> {
    Flow::ALL
        .into_iter()
        .zip(INTEGRATION_COLUMN_X)
        .flat_map(|(flow, x)| {
            defs(flow).iter().enumerate().map(move |(row, def)| Stage {
                id: flow.qualify(def.local_id),
                local_id: def.local_id.to_string(),
                flow,
                label: format!("{}: {}", flow, def.short_label),
                description: def.description.to_string(),
                position: Position {
                    x,
                    y: INTEGRATION_TOP_Y + INTEGRATION_ROW_GAP * row as f64,
                },
            })
        })
        .collect()
}

pub(super) fn flow_stages(flow: Flow) -> Vec<Stage> {
    defs(flow)
        .iter()
        .map(|def| Stage {
            id: def.local_id.to_string(),
            local_id: def.local_id.to_string(),
            flow,
            label: def.page_label.to_string(),
            description: def.description.to_string(),
            position: Position {
                x: def.page_position.0,
                y: def.page_position.1,
            },
        })
        .collect()
}

/// Local ids of every stage in `flow`, in catalog order.
pub(crate) fn local_ids(flow: Flow) -> impl Iterator<Item = &'static str> {
    defs(flow).iter().map(|def| def.local_id)
}
