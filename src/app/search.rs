//! Debounced Search Input
//!
//! UI-state bookkeeping for a search box: the query takes effect only after
//! a quiet period, so filtering does not re-run on every keystroke.

use std::time::{Duration, Instant};

/// Default quiet period before a query takes effect
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// A search query that settles after a quiet period
#[derive(Debug)]
pub struct DebouncedSearch {
    /// The text currently in the input box
    pub input: String,
    settled: String,
    quiet_period: Duration,
    last_edit: Option<Instant>,
}

impl Default for DebouncedSearch {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl DebouncedSearch {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            input: String::new(),
            settled: String::new(),
            quiet_period,
            last_edit: None,
        }
    }

    /// Record that the input changed this frame
    pub fn mark_edited(&mut self, now: Instant) {
        self.last_edit = Some(now);
    }

    /// Settle the query if the quiet period elapsed; call once per frame.
    /// Returns true when the effective query changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(last_edit) = self.last_edit else {
            return false;
        };
        if now.duration_since(last_edit) < self.quiet_period {
            return false;
        }
        self.last_edit = None;
        if self.settled != self.input {
            self.settled = self.input.clone();
            return true;
        }
        false
    }

    /// The query filtering should use
    pub fn query(&self) -> &str {
        &self.settled
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.settled.clear();
        self.last_edit = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_settles_after_quiet_period() {
        let mut search = DebouncedSearch::new(Duration::from_millis(300));
        let t0 = Instant::now();

        search.input.push_str("che");
        search.mark_edited(t0);
        assert!(!search.tick(t0 + Duration::from_millis(100)));
        assert_eq!(search.query(), "");

        assert!(search.tick(t0 + Duration::from_millis(300)));
        assert_eq!(search.query(), "che");
    }

    #[test]
    fn test_further_edits_restart_the_clock() {
        let mut search = DebouncedSearch::new(Duration::from_millis(300));
        let t0 = Instant::now();

        search.input.push_str("c");
        search.mark_edited(t0);
        search.input.push_str("h");
        search.mark_edited(t0 + Duration::from_millis(200));

        assert!(!search.tick(t0 + Duration::from_millis(400)));
        assert!(search.tick(t0 + Duration::from_millis(500)));
        assert_eq!(search.query(), "ch");
    }

    #[test]
    fn test_unchanged_query_does_not_report_change() {
        let mut search = DebouncedSearch::new(Duration::from_millis(300));
        let t0 = Instant::now();

        search.mark_edited(t0);
        assert!(!search.tick(t0 + Duration::from_millis(300)));
    }
}
