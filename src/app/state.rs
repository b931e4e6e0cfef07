// SettingsPanel - app/state.rs
//
// Application state management. Holds the sidebar, the page stack, the
// selected button, the search entry and the in-flight page transition.
// Owned by the eframe::App implementation; every handler runs on the UI
// thread and takes the current frame time explicitly.

use crate::app::populate::{self, Sidebar};
use crate::core::catalog;
use crate::core::search::{self, Debouncer, SearchQuery};
use crate::core::stack::PageStack;
use crate::core::transition::Transition;
use crate::util::constants::SEARCH_DEBOUNCE_MS;
use crate::util::error::{Result, StackError};

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Section titles and category buttons.
    pub sidebar: Sidebar,

    /// Content pages; exactly one is visible.
    pub stack: PageStack,

    /// Page name of the button carrying the `selected` mark, if any.
    pub selected: Option<String>,

    /// Text currently in the search entry.
    pub search_text: String,

    /// Query last applied by the search handler. Drives sidebar filtering.
    pub active_query: SearchQuery,

    /// Turns keystrokes into search-changed events.
    pub search_debounce: Debouncer,

    /// Slide between the previous and the current page.
    pub transition: Option<Transition>,

    /// Slide duration in ms (0 disables animation).
    pub transition_ms: u64,

    /// Set when the search entry should grab keyboard focus next frame.
    pub request_search_focus: bool,
}

impl AppState {
    /// Create state from an already populated sidebar and stack.
    pub fn new(sidebar: Sidebar, stack: PageStack, transition_ms: u64) -> Self {
        Self {
            sidebar,
            stack,
            selected: None,
            search_text: String::new(),
            active_query: SearchQuery::default(),
            search_debounce: Debouncer::new(SEARCH_DEBOUNCE_MS),
            transition: None,
            transition_ms,
            request_search_focus: false,
        }
    }

    /// Create state for the built-in settings catalogue.
    pub fn from_catalog(transition_ms: u64) -> Result<Self> {
        let (sidebar, stack) = populate::populate(catalog::sections())?;
        Ok(Self::new(sidebar, stack, transition_ms))
    }

    /// Show `name` at startup: no animation, its button marked selected.
    pub fn set_initial_page(&mut self, name: &str) -> std::result::Result<(), StackError> {
        self.stack.set_visible_child_name(name)?;
        self.selected = Some(name.to_string());
        self.transition = None;
        Ok(())
    }

    /// Sidebar button click: switch the visible page and move the
    /// `selected` mark to the clicked button.
    pub fn select_category(&mut self, name: &str, now: f64) -> std::result::Result<(), StackError> {
        self.show_page(name, now)?;
        tracing::debug!(page = name, "Category selected");
        Ok(())
    }

    /// Whether the button for `page_name` carries the `selected` mark.
    pub fn is_selected(&self, page_name: &str) -> bool {
        self.selected.as_deref() == Some(page_name)
    }

    /// Record an edit of the search entry. The search handler runs once
    /// the text has been stable for the debounce delay.
    pub fn edit_search(&mut self, now: f64) {
        self.search_debounce.touch(now);
    }

    /// Empty the search entry and apply immediately.
    pub fn clear_search(&mut self, now: f64) {
        self.search_text.clear();
        self.search_debounce.flush();
        self.search_changed(now);
    }

    /// Apply a pending edit right away (Enter in the search entry).
    pub fn commit_search(&mut self, now: f64) {
        if self.search_debounce.flush() {
            self.search_changed(now);
        }
    }

    /// Run the search handler if the debounce delay has elapsed.
    /// Returns true when the handler ran.
    pub fn poll_search(&mut self, now: f64) -> bool {
        if self.search_debounce.poll(now) {
            self.search_changed(now);
            true
        } else {
            false
        }
    }

    /// Search handler: switch to the first page whose name contains the
    /// query, ignoring case. Empty queries and misses keep the current page.
    pub fn search_changed(&mut self, now: f64) {
        self.active_query = SearchQuery::new(&self.search_text);
        let hit = search::first_match(self.stack.pages(), &self.active_query)
            .map(|p| p.name.clone());
        match hit {
            Some(name) => {
                tracing::debug!(query = self.active_query.as_str(), page = %name, "Search matched");
                // The name comes from the stack itself, so this cannot miss.
                if let Err(e) = self.show_page(&name, now) {
                    tracing::warn!(error = %e, "Search result vanished from stack");
                }
            }
            None if self.active_query.is_empty() => {}
            None => {
                tracing::debug!(query = self.active_query.as_str(), "Search matched nothing");
            }
        }
    }

    /// Drop the transition once it has run its course.
    pub fn tick(&mut self, now: f64) {
        if self.transition.as_ref().is_some_and(|t| t.is_finished(now)) {
            self.transition = None;
        }
    }

    /// True while something time-driven is still pending.
    pub fn is_animating(&self) -> bool {
        self.transition.is_some() || self.search_debounce.is_pending()
    }

    /// Seconds until the next frame is needed: 0 while a slide runs, the
    /// debounce remainder while a search edit is pending, `None` when idle.
    pub fn next_wakeup(&self, now: f64) -> Option<f64> {
        if !self.is_animating() {
            return None;
        }
        match self.search_debounce.remaining(now) {
            Some(left) if self.transition.is_none() => Some(left),
            _ => Some(0.0),
        }
    }

    fn show_page(&mut self, name: &str, now: f64) -> std::result::Result<(), StackError> {
        let from = self.stack.visible_index();
        let to = self.stack.set_visible_child_name(name)?;
        self.selected = Some(name.to_string());
        // Re-selecting the visible page leaves any in-flight slide alone.
        if let Some(from) = from.filter(|&f| f != to) {
            self.transition = Transition::start(from, to, now, self.transition_ms);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transition::SlideDirection;

    fn state() -> AppState {
        AppState::from_catalog(300).unwrap()
    }

    fn type_and_settle(state: &mut AppState, text: &str, now: f64) {
        state.search_text = text.to_string();
        state.edit_search(now);
        assert!(state.poll_search(now + 1.0));
    }

    #[test]
    fn test_initial_state() {
        let s = state();
        assert_eq!(s.stack.visible_child_name(), Some("Backgrounds"));
        assert!(s.selected.is_none());
        assert!(!s.is_animating());
    }

    #[test]
    fn test_select_category_switches_page_and_selection() {
        let mut s = state();
        s.select_category("Sound", 0.0).unwrap();
        assert_eq!(s.stack.visible_child_name(), Some("Sound"));
        assert!(s.is_selected("Sound"));

        s.select_category("Effects", 1.0).unwrap();
        assert!(s.is_selected("Effects"));
        assert!(!s.is_selected("Sound"));
    }

    #[test]
    fn test_select_unknown_category_changes_nothing() {
        let mut s = state();
        s.select_category("Sound", 0.0).unwrap();
        assert!(s.select_category("Teleporter", 1.0).is_err());
        assert_eq!(s.stack.visible_child_name(), Some("Sound"));
        assert!(s.is_selected("Sound"));
    }

    #[test]
    fn test_select_starts_slide_transition() {
        let mut s = state();
        s.select_category("Users and Groups", 0.0).unwrap();
        let t = s.transition.clone().unwrap();
        assert_eq!(t.direction, SlideDirection::Left);
        assert!(s.is_animating());

        s.tick(0.1);
        assert!(s.transition.is_some());
        s.tick(0.5);
        assert!(s.transition.is_none());

        s.select_category("Backgrounds", 1.0).unwrap();
        assert_eq!(s.transition.unwrap().direction, SlideDirection::Right);
    }

    #[test]
    fn test_zero_duration_disables_transition() {
        let mut s = AppState::from_catalog(0).unwrap();
        s.select_category("Sound", 0.0).unwrap();
        assert!(s.transition.is_none());
    }

    #[test]
    fn test_search_switches_to_first_match() {
        let mut s = state();
        type_and_settle(&mut s, "DESK", 0.0);
        assert_eq!(s.stack.visible_child_name(), Some("Desklets"));
        assert!(s.is_selected("Desklets"));
        assert_eq!(s.active_query.as_str(), "desk");
    }

    #[test]
    fn test_search_is_debounced() {
        let mut s = state();
        s.search_text = "printers".to_string();
        s.edit_search(0.0);
        assert!(!s.poll_search(0.05));
        assert_eq!(s.stack.visible_child_name(), Some("Backgrounds"));
        assert!(s.poll_search(0.2));
        assert_eq!(s.stack.visible_child_name(), Some("Printers"));
    }

    #[test]
    fn test_search_without_match_keeps_page() {
        let mut s = state();
        s.select_category("Sound", 0.0).unwrap();
        type_and_settle(&mut s, "qwerty", 1.0);
        assert_eq!(s.stack.visible_child_name(), Some("Sound"));
    }

    #[test]
    fn test_clearing_search_keeps_page_and_restores_sidebar() {
        let mut s = state();
        type_and_settle(&mut s, "firewall", 0.0);
        assert_eq!(s.sidebar.filtered(&s.active_query).len(), 1);

        s.clear_search(2.0);
        assert_eq!(s.stack.visible_child_name(), Some("Firewall"));
        assert!(s.active_query.is_empty());
        assert_eq!(s.sidebar.filtered(&s.active_query).len(), 4);
    }

    #[test]
    fn test_commit_search_applies_pending_edit() {
        let mut s = state();
        s.search_text = "night".to_string();
        s.edit_search(0.0);
        s.commit_search(0.01);
        assert_eq!(s.stack.visible_child_name(), Some("Night Light"));
        assert!(!s.search_debounce.is_pending());
    }

    #[test]
    fn test_next_wakeup_follows_pending_work() {
        let mut s = state();
        assert_eq!(s.next_wakeup(0.0), None);

        s.search_text = "sound".to_string();
        s.edit_search(0.0);
        let left = s.next_wakeup(0.05).unwrap();
        assert!(left > 0.09 && left < 0.11, "{left}");

        assert!(s.poll_search(0.2));
        // The search switched pages, so a slide is now running.
        assert_eq!(s.next_wakeup(0.2), Some(0.0));

        s.tick(1.0);
        assert_eq!(s.next_wakeup(1.0), None);
    }

    #[test]
    fn test_initial_page() {
        let mut s = state();
        s.set_initial_page("Display").unwrap();
        assert_eq!(s.stack.visible_child_name(), Some("Display"));
        assert!(s.is_selected("Display"));
        assert!(s.transition.is_none());
        assert!(s.set_initial_page("Nope").is_err());
    }
}
