//! Tests for the rule evaluator and the integration score.
mod common;
use common::*;
use lifelink::prelude::*;

#[test]
fn test_mandatory_missing_without_connections() {
    let table = single_rule_table();
    let evaluation = evaluate(&[], &table);

    assert!(evaluation.mandatory_missing);
    assert_eq!(evaluation.score, 0);
    assert!(!evaluation.rule("r1").unwrap().satisfied);
}

#[test]
fn test_reversed_connection_satisfies_rule() {
    let table = single_rule_table();
    let evaluation = evaluate(&[conn("t-requirements", "s-analysis")], &table);

    assert!(evaluation.rule("r1").unwrap().satisfied);
    assert!(!evaluation.mandatory_missing);
    assert_eq!(evaluation.score, 100);
}

#[test]
fn test_direction_is_symmetric() {
    let table = two_rule_table();
    let forward = evaluate(&[conn("s-design", "t-design")], &table);
    let backward = evaluate(&[conn("t-design", "s-design")], &table);

    assert_eq!(forward.partition(), backward.partition());
    assert_eq!(forward.score, backward.score);
}

#[test]
fn test_half_of_the_rules_scores_fifty() {
    let table = two_rule_table();
    let evaluation = evaluate(&[conn("s-analysis", "t-requirements")], &table);

    assert_eq!(evaluation.score, 50);
    assert_eq!(evaluation.satisfied_count(), 1);
    assert_eq!(
        evaluation.partition(),
        (vec!["r1".to_string()], vec!["r2".to_string()])
    );
}

#[test]
fn test_any_alternative_satisfies_the_rule() {
    let table = multi_alternative_table();
    for (a, b) in [
        ("s-implementation", "t-environment"),
        ("t-execution", "s-implementation"),
        ("s-testing", "t-environment"),
    ] {
        let evaluation = evaluate(&[conn(a, b)], &table);
        assert!(evaluation.is_complete(), "{} <-> {} should satisfy r1", a, b);
    }
}

#[test]
fn test_matched_reports_first_alternative_in_table_order() {
    let table = multi_alternative_table();
    // Both the third and the first alternative are drawn; table order wins.
    let connections = [
        conn("s-testing", "t-environment"),
        conn("s-implementation", "t-environment"),
    ];
    let evaluation = evaluate(&connections, &table);
    let matched = evaluation.rule("r1").unwrap().matched.clone().unwrap();

    assert_eq!(matched, Alternative::new("s-implementation", "t-environment"));
}

#[test]
fn test_unrelated_connection_does_not_satisfy() {
    let table = single_rule_table();
    let evaluation = evaluate(
        &[conn("s-analysis", "t-closure"), conn("s-analysis", "s-analysis")],
        &table,
    );

    assert!(evaluation.mandatory_missing);
    assert_eq!(evaluation.score, 0);
}

#[test]
fn test_empty_rule_table_scores_one_hundred() {
    let table = RuleTable::builder().build().unwrap();
    let evaluation = evaluate(&[conn("s-analysis", "t-requirements")], &table);

    assert!(evaluation.results.is_empty());
    assert_eq!(evaluation.score, 100);
    assert!(!evaluation.mandatory_missing);
}

#[test]
fn test_no_mandatory_rule_never_flags() {
    let table = multi_alternative_table();
    let evaluation = evaluate(&[], &table);

    assert!(!evaluation.mandatory_missing);
    assert_eq!(evaluation.mandatory_id, None);
}

#[test]
fn test_integration_score_rounding() {
    assert_eq!(integration_score(0, 6), 0);
    assert_eq!(integration_score(1, 6), 17);
    assert_eq!(integration_score(1, 3), 33);
    assert_eq!(integration_score(2, 3), 67);
    assert_eq!(integration_score(1, 8), 13); // 12.5 rounds up
    assert_eq!(integration_score(6, 6), 100);
    assert_eq!(integration_score(0, 0), 100);
}

#[test]
fn test_score_stays_in_range_and_hits_one_hundred_only_when_complete() {
    let table = RuleTable::standard();
    let all = satisfying_connections(&table);

    for n in 0..=all.len() {
        let evaluation = evaluate(&all[..n], &table);
        assert!(evaluation.score <= 100);
        assert_eq!(evaluation.score == 100, evaluation.is_complete());
        assert_eq!(evaluation.is_complete(), n == all.len());
    }
}

#[test]
fn test_adding_a_connection_never_lowers_the_score() {
    let table = RuleTable::standard();
    let catalog = StageCatalog::integration();
    let ids: Vec<&str> = catalog.iter().map(|s| s.id.as_str()).collect();

    let mut connections = Vec::new();
    let mut previous = evaluate(&connections, &table).score;
    // Walk a deterministic sequence covering every ordered pair of stages.
    for a in &ids {
        for b in &ids {
            connections.push(conn(a, b));
            let score = evaluate(&connections, &table).score;
            assert!(score >= previous, "score dropped after adding {} -> {}", a, b);
            previous = score;
        }
    }
    assert_eq!(previous, 100);
}

#[test]
fn test_duplicate_connections_are_counted_once_per_rule() {
    let table = two_rule_table();
    let connections = vec![
        conn("s-analysis", "t-requirements"),
        conn("s-analysis", "t-requirements"),
        conn("t-requirements", "s-analysis"),
    ];
    let evaluation = evaluate(&connections, &table);

    assert_eq!(evaluation.satisfied_count(), 1);
    assert_eq!(evaluation.score, 50);
}
