// SettingsPanel - core/search.rs
//
// Page search: case-insensitive substring matching against page names,
// plus the debounce timer that turns keystrokes into search-changed events.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::stack::Page;

/// A normalised search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Normalise raw entry text: surrounding whitespace is dropped and the
    /// rest lower-cased.
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    /// True when the query selects nothing in particular.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Case-insensitive substring test. An empty query matches everything.
    pub fn matches(&self, name: &str) -> bool {
        self.is_empty() || name.to_lowercase().contains(&self.needle)
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }
}

/// First page, in stack order, whose name matches the query.
///
/// An empty query returns `None` so that clearing the entry never moves
/// the visible page.
pub fn first_match<'a>(pages: &'a [Page], query: &SearchQuery) -> Option<&'a Page> {
    if query.is_empty() {
        return None;
    }
    pages.iter().find(|p| query.matches(&p.name))
}

/// Delays a search until the entry text has been stable for `delay_secs`.
///
/// Times are in seconds on the caller's clock (egui's `input.time`).
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_secs: f64,
    pending_since: Option<f64>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_secs: delay_ms as f64 / 1000.0,
            pending_since: None,
        }
    }

    /// Record an edit at `now`, restarting the delay.
    pub fn touch(&mut self, now: f64) {
        self.pending_since = Some(now);
    }

    /// Returns true exactly once when the delay has elapsed since the last edit.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.pending_since {
            Some(since) if now - since >= self.delay_secs => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }

    /// Fire immediately if anything is pending (e.g. Enter pressed).
    pub fn flush(&mut self) -> bool {
        self.pending_since.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Seconds left until the pending edit fires, if any.
    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.pending_since
            .map(|since| (self.delay_secs - (now - since)).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(names: &[&str]) -> Vec<Page> {
        names
            .iter()
            .map(|n| Page {
                name: n.to_string(),
                title: n.to_string(),
                icon: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_query_is_trimmed_and_lowercased() {
        let q = SearchQuery::new("  NiGhT ");
        assert_eq!(q.as_str(), "night");
        assert!(q.matches("Night Light"));
        assert!(!q.matches("Display"));
    }

    #[test]
    fn test_first_match_wins() {
        let pages = pages(&["Desklets", "Desktop", "Display"]);
        let hit = first_match(&pages, &SearchQuery::new("desk")).unwrap();
        assert_eq!(hit.name, "Desklets");
    }

    #[test]
    fn test_matches_against_page_name_not_container() {
        let pages = pages(&["Backgrounds", "Mouse and Touchpad"]);
        let hit = first_match(&pages, &SearchQuery::new("touch")).unwrap();
        assert_eq!(hit.name, "Mouse and Touchpad");
    }

    #[test]
    fn test_empty_and_blank_queries_match_nothing() {
        let pages = pages(&["Sound"]);
        assert!(first_match(&pages, &SearchQuery::new("")).is_none());
        assert!(first_match(&pages, &SearchQuery::new("   ")).is_none());
    }

    #[test]
    fn test_no_match() {
        let pages = pages(&["Sound", "Printers"]);
        assert!(first_match(&pages, &SearchQuery::new("zzz")).is_none());
    }

    #[test]
    fn test_debounce_fires_once_after_delay() {
        let mut d = Debouncer::new(150);
        assert!(!d.poll(0.0));
        d.touch(1.0);
        assert!(!d.poll(1.1));
        assert!(d.poll(1.16));
        assert!(!d.poll(2.0));
    }

    #[test]
    fn test_debounce_restarts_on_edit() {
        let mut d = Debouncer::new(150);
        d.touch(1.0);
        d.touch(1.1);
        assert!(!d.poll(1.2));
        assert!(d.poll(1.3));
    }

    #[test]
    fn test_debounce_flush_and_remaining() {
        let mut d = Debouncer::new(200);
        assert!(!d.flush());
        d.touch(5.0);
        let left = d.remaining(5.05).unwrap();
        assert!((left - 0.15).abs() < 1e-9);
        assert!(d.flush());
        assert!(!d.is_pending());
        assert!(d.remaining(5.1).is_none());
    }
}
