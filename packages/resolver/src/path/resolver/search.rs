//! Depth-first backtracking search
//!
//! Runs on an explicit stack of frames instead of recursion. Each frame
//! remembers which node it stands on, which token comes next and how many
//! readings of that token it has already tried. A `Bare` run is read as the
//! shortest merged key first; a longer merge is tried only once every
//! continuation after the shorter one has failed.

use crate::path::{
    error::{PathResult, budget_error},
    resolved::{PathSegment, ResolvedPath},
    stats::SearchStats,
    tokens::{Token, bare_run, merge_bare},
    value::{PathTarget, Shape},
};

/// Choice point in the search
struct Frame<'v, V> {
    node: &'v V,
    position: usize,
    /// Readings of `tokens[position]` tried so far; for a `Bare` run this is
    /// the merge length last tried
    tried: usize,
}

impl<'v, V> Frame<'v, V> {
    #[inline]
    fn new(node: &'v V, position: usize) -> Self {
        Self {
            node,
            position,
            tried: 0,
        }
    }
}

/// Child reached by one step, with the segment emitted and tokens consumed
type Step<'v, V> = (&'v V, PathSegment, usize);

/// Lookup counter with an optional ceiling
struct Budget<'s> {
    stats: &'s mut SearchStats,
    limit: Option<u64>,
}

impl Budget<'_> {
    #[inline]
    fn spend(&mut self) -> PathResult<()> {
        if let Some(limit) = self.limit {
            if self.stats.lookups >= limit {
                return Err(budget_error(limit));
            }
        }
        self.stats.record_lookup();
        Ok(())
    }
}

/// Search for a key sequence under `root` matching `tokens`
///
/// Returns `Ok(None)` when every reading has been exhausted.
///
/// # Errors
///
/// Returns a `BudgetExhausted` error when `max_steps` lookups were spent
/// without reaching a verdict.
pub(crate) fn search<V: PathTarget>(
    tokens: &[Token],
    root: &V,
    max_steps: Option<u64>,
    stats: &mut SearchStats,
) -> PathResult<Option<ResolvedPath>> {
    let mut budget = Budget {
        stats,
        limit: max_steps,
    };
    let mut stack = vec![Frame::new(root, 0)];
    let mut segments: Vec<PathSegment> = Vec::with_capacity(tokens.len());

    while let Some(frame) = stack.last_mut() {
        if frame.position == tokens.len() {
            return Ok(Some(ResolvedPath::new(segments)));
        }

        let position = frame.position;
        match next_step(frame, tokens, &mut budget)? {
            Some((child, segment, consumed)) => {
                log::trace!("step {:?} consumed {} token(s) at {}", segment, consumed, position);
                segments.push(segment);
                stack.push(Frame::new(child, position + consumed));
                budget.stats.record_depth(segments.len());
            }
            None => {
                log::trace!(
                    "{} token at {} has no reading left",
                    tokens[position].as_debug_str(),
                    position
                );
                stack.pop();
                if let Some(undone) = segments.pop() {
                    log::trace!("backtracking over {:?}", undone);
                    budget.stats.record_backtrack();
                }
            }
        }
    }

    Ok(None)
}

/// Next untried step out of `frame`, or `None` once its readings are exhausted
fn next_step<'v, V: PathTarget>(
    frame: &mut Frame<'v, V>,
    tokens: &[Token],
    budget: &mut Budget<'_>,
) -> PathResult<Option<Step<'v, V>>> {
    let node = frame.node;
    let token = &tokens[frame.position];

    // Definite tokens have exactly one reading
    if token.is_definite() {
        if frame.tried > 0 {
            return Ok(None);
        }
        frame.tried = 1;
    }

    match token {
        Token::Quoted(literal) => match node.shape() {
            Shape::Object => {
                budget.spend()?;
                Ok(node
                    .member(literal)
                    .map(|child| (child, PathSegment::Member(literal.clone()), 1)))
            }
            Shape::Array | Shape::Scalar => Ok(None),
        },
        Token::Index(index) => match node.shape() {
            Shape::Array => {
                budget.spend()?;
                Ok(node
                    .element(*index)
                    .map(|child| (child, PathSegment::Index(*index), 1)))
            }
            Shape::Object | Shape::Scalar => Ok(None),
        },
        Token::Bare(_) => match node.shape() {
            Shape::Object => {
                let run = &tokens[frame.position..];
                let longest = bare_run(run);
                while frame.tried < longest {
                    frame.tried += 1;
                    let key = merge_bare(&run[..frame.tried]);
                    budget.spend()?;
                    if let Some(child) = node.member(&key) {
                        return Ok(Some((child, PathSegment::Member(key), frame.tried)));
                    }
                }
                Ok(None)
            }
            // Arrays are only entered through index tokens
            Shape::Array | Shape::Scalar => Ok(None),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::tokenizer::tokenize;
    use crate::path::value::DataValue;
    use serde_json::json;

    fn run(path: &str, value: &serde_json::Value) -> (Option<Vec<String>>, SearchStats) {
        let tokens = tokenize(path).expect("well-formed path");
        let mut stats = SearchStats::default();
        let found = search(&tokens, value, None, &mut stats).expect("unbounded search");
        (found.map(ResolvedPath::into_keys), stats)
    }

    #[test]
    fn empty_token_sequence_resolves_to_root() {
        let (found, stats) = run("instance", &json!({ "a": 1 }));
        assert_eq!(found, Some(vec![]));
        assert_eq!(stats.lookups, 0);
    }

    #[test]
    fn unambiguous_path_costs_one_lookup_per_token() {
        let (found, stats) = run("instance.one.a", &json!({ "one": { "a": "x" } }));
        assert_eq!(found, Some(vec!["one".to_string(), "a".to_string()]));
        assert_eq!(stats.lookups, 2);
        assert_eq!(stats.backtracks, 0);
        assert_eq!(stats.max_depth, 2);
    }

    #[test]
    fn dead_end_short_merge_is_undone() {
        // "a" matches first but leads nowhere; "a.b" is the real key
        let value = json!({
            "a": { "c": 1 },
            "a.b": { "c": 2 }
        });
        let (found, stats) = run("instance.a.b.c", &value);
        assert_eq!(found, Some(vec!["a.b".to_string(), "c".to_string()]));
        assert_eq!(stats.backtracks, 1);
    }

    #[test]
    fn shortest_reading_wins_when_several_resolve() {
        let value = json!({
            "a": { "b": { "c": 1 } },
            "a.b": { "c": 2 }
        });
        let (found, _) = run("instance.a.b.c", &value);
        assert_eq!(
            found,
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn bare_token_never_enters_array() {
        let (found, _) = run("instance.list.0", &json!({ "list": ["x"] }));
        assert_eq!(found, None);
    }

    #[test]
    fn index_token_never_enters_object() {
        let (found, _) = run("instance.map[0]", &json!({ "map": { "0": "x" } }));
        assert_eq!(found, None);
    }

    #[test]
    fn quoted_token_never_enters_array() {
        let (found, _) = run("instance.list[\"0\"]", &json!({ "list": ["x"] }));
        assert_eq!(found, None);
    }

    #[test]
    fn budget_stops_runaway_search() {
        let tokens = tokenize("instance.a.b.c").expect("well-formed path");
        let value = DataValue::from(json!({ "a": { "x": 1 }, "a.b": { "x": 2 } }));
        let mut stats = SearchStats::default();
        let error = search(&tokens, &value, Some(2), &mut stats)
            .expect_err("two lookups cannot settle this path");
        assert_eq!(error.kind(), crate::path::error::ErrorKind::BudgetExhausted);
        assert_eq!(stats.lookups, 2);
    }
}
