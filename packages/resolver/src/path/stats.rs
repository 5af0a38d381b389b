//! Search statistics

/// Cost of a single resolution
///
/// Ordinary paths cost about one lookup per token. Many overlapping dotted
/// keys at one level make the search backtrack, and these counters show how
/// much.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of candidate keys or indices looked up in the value
    pub lookups: u64,
    /// Number of times a matched step had to be undone
    pub backtracks: u64,
    /// Deepest point the search reached, in steps below the root
    pub max_depth: usize,
}

impl SearchStats {
    /// Record a candidate lookup
    #[inline]
    pub fn record_lookup(&mut self) {
        self.lookups += 1;
    }

    /// Record an undone step
    #[inline]
    pub fn record_backtrack(&mut self) {
        self.backtracks += 1;
    }

    /// Record the current search depth
    #[inline]
    pub fn record_depth(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }
}
