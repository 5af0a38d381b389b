//! Public API tests

use dotpath::{ConfigurationError, DataValue, DotPath, ErrorKind, TranslatorBuilder};
use serde_json::json;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn free_function_resolves_with_defaults() {
    let value = json!({ "google.com": { "a": "x" }, "gmail.com": {} });
    let resolved = dotpath::resolve("instance.google.com.a", &value).expect("path resolves");
    assert_eq!(resolved.keys(), vec!["google.com", "a"]);
    assert!(DotPath::resolve("instance.google.net.a", &value).is_none());
}

#[test]
fn resolves_from_json_text() {
    let json = r#"{ "definitions": { "One.Two": { "a": "x" } } }"#;
    assert_eq!(
        dotpath::resolve_json_str("instance.definitions[\"One.Two\"]", json)
            .map(|resolved| resolved.into_keys()),
        Some(vec!["definitions".to_string(), "One.Two".to_string()])
    );
    assert!(dotpath::resolve_json_str("instance.a", "{ not json").is_none());
}

#[test]
fn builder_applies_root_marker() {
    init_logging();
    let translator = DotPath::builder()
        .root_marker("instance")
        .debug()
        .build()
        .expect("valid configuration");
    let value = json!({ "a": { "b.c": 1 } });

    assert_eq!(
        translator
            .resolve("instance.a.b.c", &value)
            .map(|resolved| resolved.into_keys()),
        Some(vec!["a".to_string(), "b.c".to_string()])
    );
    assert_eq!(
        translator
            .try_resolve("data.a.b.c", &value)
            .expect_err("wrong root marker")
            .kind(),
        ErrorKind::RootMarker
    );
    assert_eq!(translator.config().root_marker.as_deref(), Some("instance"));
}

#[test]
fn any_root_marker_resets_requirement() {
    let translator = TranslatorBuilder::new()
        .root_marker("instance")
        .any_root_marker()
        .build()
        .expect("valid configuration");
    assert!(translator.resolve("data.a", &json!({ "a": 1 })).is_some());
}

#[test]
fn builder_rejects_invalid_settings() {
    assert!(matches!(
        DotPath::builder().root_marker("").build(),
        Err(ConfigurationError::InvalidRootMarker(_))
    ));
    assert!(matches!(
        DotPath::builder().root_marker("instance.x").build(),
        Err(ConfigurationError::InvalidRootMarker(_))
    ));
    assert!(matches!(
        DotPath::builder().max_steps(0).build(),
        Err(ConfigurationError::InvalidBudget(_))
    ));
}

#[test]
fn step_budget_bounds_pathological_values() {
    init_logging();
    // Every prefix of the dotted run exists but none leads to "target"
    let mut members = Vec::new();
    let mut key = String::new();
    for i in 0..12 {
        if i > 0 {
            key.push('.');
        }
        key.push('k');
        members.push((key.clone(), DataValue::object(Vec::<(String, DataValue)>::new())));
    }
    let value = DataValue::object(members);
    let path = format!("instance{}.target", ".k".repeat(12));

    let unbounded = DotPath::builder().build().expect("valid configuration");
    let (outcome, stats) = unbounded.resolve_with_stats(&path, &value);
    assert_eq!(outcome.expect_err("no target").kind(), ErrorKind::Unresolvable);
    assert!(stats.lookups > 12);

    let bounded = DotPath::builder()
        .max_steps(5)
        .debug()
        .build()
        .expect("valid configuration");
    let (outcome, stats) = bounded.resolve_with_stats(&path, &value);
    assert_eq!(
        outcome.expect_err("budget runs out").kind(),
        ErrorKind::BudgetExhausted
    );
    assert_eq!(stats.lookups, 5);
    assert!(bounded.resolve(&path, &value).is_none());
}

#[test]
fn tokenize_exposes_tokens() {
    let translator = DotPath::builder().build().expect("valid configuration");
    let tokens = translator
        .tokenize("instance.a['b.c'][2]")
        .expect("well-formed path");
    assert_eq!(
        tokens,
        vec![
            dotpath::Token::Bare("a".into()),
            dotpath::Token::Quoted("b.c".into()),
            dotpath::Token::Index(2),
        ]
    );
}

#[test]
fn resolved_path_serializes_as_keys() {
    let value = json!({ "google.com": { "a": ["x", "y"] } });
    let resolved = dotpath::resolve("instance.google.com.a[1]", &value).expect("path resolves");
    assert_eq!(
        serde_json::to_string(&resolved).expect("serializable"),
        r#"["google.com","a","1"]"#
    );
}
