//! Property tests for path resolution

use dotpath_resolver::{DataValue, Resolver};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Key(String),
    Index(usize),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        "[a-z][a-z0-9_]{0,5}".prop_map(Step::Key),
        (0usize..4).prop_map(Step::Index),
    ]
}

/// Value holding `steps` as a reachable location, with a sibling at every level
fn value_for(steps: &[Step]) -> DataValue {
    steps.iter().rev().fold(DataValue::from("leaf"), |inner, step| match step {
        Step::Key(key) => DataValue::object([
            ("sibling".to_string(), DataValue::from(1_i64)),
            (key.clone(), inner),
        ]),
        Step::Index(index) => {
            let mut elements = vec![DataValue::null(); index + 2];
            elements[*index] = inner;
            DataValue::array(elements)
        }
    })
}

fn path_for(steps: &[Step]) -> String {
    let mut path = String::from("instance");
    for step in steps {
        match step {
            Step::Key(key) => {
                path.push('.');
                path.push_str(key);
            }
            Step::Index(index) => path.push_str(&format!("[{index}]")),
        }
    }
    path
}

fn keys_of(steps: &[Step]) -> Vec<String> {
    steps
        .iter()
        .map(|step| match step {
            Step::Key(key) => key.clone(),
            Step::Index(index) => index.to_string(),
        })
        .collect()
}

proptest! {
    #[test]
    fn dot_free_paths_round_trip(steps in proptest::collection::vec(step(), 0..8)) {
        let value = value_for(&steps);
        let resolved = Resolver::default().resolve(&path_for(&steps), &value);
        prop_assert_eq!(resolved.map(|p| p.into_keys()), Some(keys_of(&steps)));
    }

    #[test]
    fn resolved_length_never_exceeds_token_count(steps in proptest::collection::vec(step(), 0..8)) {
        let value = value_for(&steps);
        let resolver = Resolver::default();
        let path = path_for(&steps);
        let tokens = resolver.tokenize(&path).expect("generated paths are well formed");
        if let Some(resolved) = resolver.resolve(&path, &value) {
            prop_assert!(resolved.len() <= tokens.len());
        }
    }

    #[test]
    fn dotted_key_is_recovered(
        parts in proptest::collection::vec("[a-z]{1,4}", 2..5),
        leaf in "[a-z]{1,4}",
    ) {
        let dotted = parts.join(".");
        let value = DataValue::object([(
            dotted.clone(),
            DataValue::object([(leaf.clone(), DataValue::from(true))]),
        )]);
        let path = format!("instance.{dotted}.{leaf}");
        let resolved = Resolver::default().resolve(&path, &value);
        prop_assert_eq!(resolved.map(|p| p.into_keys()), Some(vec![dotted, leaf]));
    }

    #[test]
    fn missing_tail_is_total_failure(steps in proptest::collection::vec(step(), 0..6)) {
        let value = value_for(&steps);
        let path = format!("{}.missing-key", path_for(&steps));
        prop_assert!(Resolver::default().resolve(&path, &value).is_none());
    }
}
