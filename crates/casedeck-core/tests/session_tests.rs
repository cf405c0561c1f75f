use casedeck_core::{Filter, Session, Stats, TestCase};

fn case(id: i64, test_type: &str, priority: &str) -> TestCase {
    TestCase {
        id,
        test_case_name: format!("case-{id}"),
        description: None,
        preconditions: None,
        test_steps: "steps".to_string(),
        expected_result: "result".to_string(),
        priority: priority.to_string(),
        test_type: test_type.to_string(),
        requirement_file: None,
        created_at: None,
    }
}

fn sample() -> Vec<TestCase> {
    vec![
        case(1, "Functional", "High"),
        case(2, "Functional", "Medium"),
        case(3, "Security", "High"),
        case(4, "Performance", "Low"),
        case(5, "Usability", "Medium"),
    ]
}

#[test]
fn test_fetch_is_idempotent() {
    let mut session = Session::new();

    session.replace(sample());
    let first: Vec<i64> = session.visible().iter().map(|c| c.id).collect();
    let first_stats = session.stats();

    // A second fetch with the same payload changes nothing observable
    session.replace(sample());
    let second: Vec<i64> = session.visible().iter().map(|c| c.id).collect();

    assert_eq!(first, second);
    assert_eq!(first_stats, session.stats());
}

#[test]
fn test_stats_invariant_holds_for_every_filter() {
    let mut session = Session::new();
    session.replace(sample());

    for label in ["all", "Functional", "Security", "Performance", "Nonexistent"] {
        session.filter = Filter::from_label(label);
        let stats = session.stats();
        assert_eq!(stats.functional + stats.non_functional, stats.total);
        assert_eq!(stats.total, session.cases().len());
    }
}

#[test]
fn test_visible_set_equals_exact_type_matches() {
    let mut session = Session::new();
    session.replace(sample());

    session.filter = Filter::Type("Functional".to_string());
    let visible: Vec<i64> = session.visible().iter().map(|c| c.id).collect();
    assert_eq!(visible, vec![1, 2]);

    session.filter = Filter::Type("Security".to_string());
    let visible: Vec<i64> = session.visible().iter().map(|c| c.id).collect();
    assert_eq!(visible, vec![3]);

    session.filter = Filter::All;
    assert_eq!(session.visible().len(), 5);
}

#[test]
fn test_clear_all_success_path() {
    let mut session = Session::new();
    session.replace(sample());
    session.filter = Filter::Type("Security".to_string());

    // Clear-all substitutes the empty list directly, no re-fetch
    session.clear();

    assert!(session.is_empty());
    assert!(session.visible().is_empty());
    assert_eq!(session.stats(), Stats::default());
}

#[test]
fn test_upload_then_scoped_state() {
    let mut session = Session::new();

    session.set_filename("reqs.pdf");
    session.replace(sample());

    assert_eq!(session.filename.as_deref(), Some("reqs.pdf"));
    assert_eq!(session.stats().total, 5);
    assert_eq!(session.stats().high_priority, 2);
}
