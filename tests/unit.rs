mod common;
use common::*;
use lifelink::adapter::{STAGE_NODE_TYPE, diagram_edges, diagram_nodes};
use lifelink::completion::{
    self, SDLC_SUGGESTED_ON_LOGIN, annotate, apply_login_preset, resolve_id, resolve_qualified,
};
use lifelink::decorator::{CONFIRMED_LABEL, CONFIRMED_STROKE};
use lifelink::prelude::*;

// --- Catalog ---

#[test]
fn test_integration_catalog_layout() {
    let catalog = StageCatalog::integration();

    assert_eq!(catalog.len(), 12);
    assert_eq!(catalog.stages_in(Flow::Sdlc).count(), 6);
    assert_eq!(catalog.stages_in(Flow::Stlc).count(), 6);

    let analysis = catalog.get("s-analysis").unwrap();
    assert_eq!(analysis.flow, Flow::Sdlc);
    assert_eq!(analysis.local_id, "analysis");
    assert_eq!(analysis.label, "SDLC: Analysis");

    let requirements = catalog.get("t-requirements").unwrap();
    assert_eq!(requirements.flow, Flow::Stlc);
    assert_eq!(requirements.local_id, "requirements");
    assert!(requirements.position.x > analysis.position.x);
}

#[test]
fn test_flow_catalog_uses_local_ids() {
    let catalog = StageCatalog::for_flow(Flow::Stlc);

    assert_eq!(catalog.len(), 6);
    assert!(catalog.iter().all(|s| s.flow == Flow::Stlc && s.id == s.local_id));
    assert!(catalog.contains("requirements"));
    assert!(!catalog.contains("t-requirements"));
}

#[test]
fn test_label_or_id_falls_back_to_id() {
    let catalog = StageCatalog::integration();
    assert_eq!(catalog.label_or_id("t-requirements"), "STLC: Requirements");
    assert_eq!(catalog.label_or_id("x-unknown"), "x-unknown");
}

#[test]
fn test_duplicate_stage_is_rejected() {
    let stage = StageCatalog::for_flow(Flow::Sdlc)
        .get("analysis")
        .unwrap()
        .clone();
    let result = StageCatalog::from_stages(vec![stage.clone(), stage]);

    assert_eq!(
        result.unwrap_err(),
        CatalogError::DuplicateStage("analysis".to_string())
    );
}

#[test]
fn test_flow_qualify_and_split() {
    assert_eq!(Flow::Sdlc.qualify("analysis"), "s-analysis");
    assert_eq!(Flow::Stlc.qualify("closure"), "t-closure");

    assert_eq!(
        Flow::split_qualified("s-analysis"),
        Some((Flow::Sdlc, "analysis"))
    );
    assert_eq!(
        Flow::split_qualified("t-requirements"),
        Some((Flow::Stlc, "requirements"))
    );
    assert_eq!(Flow::split_qualified("x-analysis"), None);
    assert_eq!(Flow::split_qualified("analysis"), None);
    assert_eq!(Flow::split_qualified("s-"), None);
}

// --- Completion ---

#[test]
fn test_resolver_uses_the_stage_flow() {
    let catalog = StageCatalog::integration();
    // `design` exists in both flows; only the SDLC one is done.
    let record = completed(&["design"], &[]);

    assert!(resolve_id(&catalog, "s-design", &record));
    assert!(!resolve_id(&catalog, "t-design", &record));
}

#[test]
fn test_resolver_is_false_for_unknown_ids_and_prefixes() {
    let catalog = StageCatalog::integration();
    let record = everything_completed();

    assert!(!resolve_id(&catalog, "s-unknown", &record));
    assert!(!resolve_id(&catalog, "analysis", &record));
    assert!(!resolve_qualified("x-analysis", &record));
    assert!(!resolve_qualified("analysis", &record));
    assert!(!resolve_qualified("s-unknown", &record));
    assert!(resolve_qualified("s-analysis", &record));
}

#[test]
fn test_login_preset_is_a_union() {
    let mut record = completed(&["maintenance"], &[]);
    apply_login_preset(&mut record);

    for id in SDLC_SUGGESTED_ON_LOGIN {
        assert!(record.contains(Flow::Sdlc, id));
    }
    assert!(record.contains(Flow::Sdlc, "maintenance"));
    assert!(!record.contains(Flow::Sdlc, "deployment"));
    assert_eq!(record.stlc.len(), 6);
}

#[test]
fn test_done_map_and_annotation() {
    let catalog = StageCatalog::integration();
    let record = completed(&["analysis", "testing"], &["requirements"]);
    let done = DoneMap::build(&catalog, &record);

    assert_eq!(done.done_count(), 3);
    assert!(done.is_done("s-analysis"));
    assert!(!done.is_done("s-design"));
    assert!(!done.is_done("not-a-stage"));

    let annotated = annotate(&catalog, &record);
    assert_eq!(annotated.len(), catalog.len());
    let flagged: Vec<&str> = annotated
        .iter()
        .filter(|a| a.done)
        .map(|a| a.stage.id.as_str())
        .collect();
    assert_eq!(flagged, vec!["s-analysis", "s-testing", "t-requirements"]);
    assert!(completion::is_stage_done(catalog.get("s-testing").unwrap(), &record));
}

// --- Decorator ---

#[test]
fn test_satisfied_rule_with_unconfirmed_edge() {
    let catalog = StageCatalog::integration();
    let connections = vec![conn("s-analysis", "t-requirements")];
    let record = completed(&["analysis"], &[]);

    let evaluation = evaluate(&connections, &single_rule_table());
    let edges = decorate(&connections, &DoneMap::build(&catalog, &record));

    assert!(evaluation.rule("r1").unwrap().satisfied);
    assert!(!edges[0].confirmed);
    assert_eq!(edges[0].connection, connections[0]);
}

#[test]
fn test_confirmed_edge_without_any_satisfied_rule() {
    let catalog = StageCatalog::integration();
    let connections = vec![conn("s-analysis", "t-closure")];
    let record = everything_completed();

    let evaluation = evaluate(&connections, &RuleTable::standard());
    let edges = decorate(&connections, &DoneMap::build(&catalog, &record));

    assert_eq!(evaluation.satisfied_count(), 0);
    assert!(edges[0].confirmed);
    let style = edges[0].connection.style.as_ref().unwrap();
    assert_eq!(style.stroke.as_deref(), Some(CONFIRMED_STROKE));
    assert_eq!(edges[0].connection.label.as_deref(), Some(CONFIRMED_LABEL));
}

#[test]
fn test_decorate_keeps_order_and_unknown_endpoints() {
    let catalog = StageCatalog::integration();
    let connections = vec![conn("s-analysis", "nowhere"), conn("t-closure", "s-maintenance")];
    let edges = decorate(&connections, &DoneMap::build(&catalog, &everything_completed()));

    assert_eq!(edges.len(), 2);
    assert!(!edges[0].confirmed);
    assert_eq!(edges[0].connection.source, "s-analysis");
    assert!(edges[1].confirmed);
}

// --- Rule table ---

#[test]
fn test_standard_rules_match_the_catalog() {
    let table = RuleTable::standard();

    assert_eq!(table.len(), 6);
    assert_eq!(table.mandatory_id(), Some("r1"));
    assert_eq!(
        table.mandatory().unwrap().alternatives,
        vec![Alternative::new("s-analysis", "t-requirements")]
    );
    assert!(table.validate(&StageCatalog::integration()).is_ok());
}

#[test]
fn test_rule_table_validation_errors() {
    let unknown_stage = RuleTable::builder()
        .rule("r1", "Bad")
        .alternative("s-analysis", "t-nowhere")
        .build()
        .unwrap();
    assert_eq!(
        unknown_stage.validate(&StageCatalog::integration()),
        Err(CatalogError::UnknownStage {
            rule_id: "r1".to_string(),
            stage_id: "t-nowhere".to_string(),
        })
    );

    let empty_rule = RuleTable::builder().rule("r1", "Empty").build();
    assert_eq!(empty_rule, Err(CatalogError::EmptyRule("r1".to_string())));

    let duplicate = RuleTable::builder()
        .rule("r1", "One")
        .alternative("a", "b")
        .rule("r1", "Again")
        .alternative("c", "d")
        .build();
    assert_eq!(duplicate, Err(CatalogError::DuplicateRule("r1".to_string())));

    let bad_mandatory = RuleTable::builder()
        .rule("r1", "One")
        .alternative("a", "b")
        .mandatory("r9")
        .build();
    assert_eq!(
        bad_mandatory,
        Err(CatalogError::UnknownMandatoryRule("r9".to_string()))
    );
}

#[test]
fn test_rule_table_from_json() {
    let json = r#"{
        "mandatory": "key",
        "rules": [
            {
                "id": "key",
                "label": "Requirements from analysis",
                "alternatives": [{ "source": "s-analysis", "target": "t-requirements" }]
            }
        ]
    }"#;
    let table = RuleTable::from_json(json).unwrap();
    assert_eq!(table.mandatory_id(), Some("key"));
    assert_eq!(table.get("key").unwrap().alternatives.len(), 1);

    assert!(matches!(
        RuleTable::from_json("{ not json"),
        Err(CatalogError::JsonParseError(_))
    ));
    assert_eq!(
        RuleTable::from_json(r#"{ "rules": [{ "id": "r1", "label": "x", "alternatives": [] }] }"#),
        Err(CatalogError::EmptyRule("r1".to_string()))
    );
}

// --- Connections & adapter ---

#[test]
fn test_new_connection_shape() {
    let connection = conn("s-analysis", "t-requirements");

    assert_eq!(
        connection.id.as_deref(),
        Some("reactflow__edge-s-analysis-t-requirements")
    );
    assert!(connection.animated);
    assert!(connection.links("t-requirements", "s-analysis"));
    assert!(!connection.links("s-analysis", "t-closure"));
    assert_eq!(connection.to_string(), "s-analysis -> t-requirements");
}

#[test]
fn test_renderer_edges_are_imported_verbatim() {
    let connections = RENDERER_EDGES_JSON.into_connections().unwrap();

    assert_eq!(connections.len(), 2);
    assert_eq!(connections[0].source_handle.as_deref(), Some("out"));
    assert_eq!(connections[0].extra.get("selected"), Some(&serde_json::json!(false)));
    assert_eq!(connections[1].id, None);
    assert!(!connections[1].animated);
    let style = connections[1].style.as_ref().unwrap();
    assert_eq!(style.stroke.as_deref(), Some("#f43f5e"));
    assert_eq!(style.extra.get("strokeDasharray"), Some(&serde_json::json!("4")));

    // Unknown keys survive a write back to JSON.
    let json = serde_json::to_value(&connections[0]).unwrap();
    assert_eq!(json["sourceHandle"], "out");
    assert_eq!(json["selected"], false);
}

#[test]
fn test_conversion_rejects_empty_endpoints() {
    let edges = vec![conn("s-analysis", "t-requirements"), conn("  ", "t-closure")];
    assert_eq!(
        edges.into_connections(),
        Err(ConversionError::EmptyEndpoint {
            index: 1,
            field: "source"
        })
    );

    let json = r#"[{ "source": "s-analysis", "target": "" }]"#;
    assert_eq!(
        json.into_connections(),
        Err(ConversionError::EmptyEndpoint {
            index: 0,
            field: "target"
        })
    );
    assert!(matches!(
        "[{".into_connections(),
        Err(ConversionError::JsonParseError(_))
    ));
}

#[test]
fn test_diagram_nodes_and_edges() {
    let catalog = StageCatalog::integration();
    let done = DoneMap::build(&catalog, &completed(&["analysis"], &[]));
    let nodes = diagram_nodes(&catalog, &done);

    assert_eq!(nodes.len(), catalog.len());
    assert_eq!(nodes[0].id, "s-analysis");
    assert_eq!(nodes[0].node_type, STAGE_NODE_TYPE);
    assert!(nodes[0].data.done);
    assert!(!nodes[1].data.done);

    let json = serde_json::to_value(&nodes[0]).unwrap();
    assert_eq!(json["type"], STAGE_NODE_TYPE);
    assert_eq!(json["data"]["label"], "SDLC: Analysis");

    let decorated = decorate(&[conn("s-analysis", "t-requirements")], &done);
    let edges = diagram_edges(&decorated);
    assert_eq!(edges, vec![decorated[0].connection.clone()]);
}

// --- Errors ---

#[test]
fn test_error_messages() {
    assert_eq!(
        AccountError::UserNotFound("u1".to_string()).to_string(),
        "User not found"
    );
    assert_eq!(AccountError::InvalidSecret.to_string(), "Invalid password");
    assert_eq!(
        CatalogError::UnknownStage {
            rule_id: "r2".to_string(),
            stage_id: "s-x".to_string()
        }
        .to_string(),
        "Rule 'r2' references stage 's-x', which is not in the catalog"
    );
    assert_eq!(
        ConversionError::EmptyEndpoint {
            index: 3,
            field: "target"
        }
        .to_string(),
        "Edge #3 has an empty 'target' endpoint"
    );
}
