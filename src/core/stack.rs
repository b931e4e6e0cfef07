// SettingsPanel - core/stack.rs
//
// Page stack: an ordered set of named pages of which exactly one is
// visible once the stack is non-empty.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::util::constants::PAGE_HEADING_SUFFIX;
use crate::util::error::StackError;

/// A single page in the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Unique name used to select the page.
    pub name: String,
    /// Human-readable title.
    pub title: String,
    /// Icon identifier of the sidebar entry that opens this page.
    pub icon: String,
}

impl Page {
    /// Text of the placeholder label shown on the page.
    pub fn heading(&self) -> String {
        format!("{} {PAGE_HEADING_SUFFIX}", self.title)
    }
}

/// Ordered collection of pages with one visible child.
#[derive(Debug, Clone, Default)]
pub struct PageStack {
    pages: Vec<Page>,
    visible: Option<usize>,
}

impl PageStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page. The first page added becomes the visible one.
    pub fn add_titled(
        &mut self,
        name: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
    ) -> Result<(), StackError> {
        let name = name.into();
        if self.index_of(&name).is_some() {
            return Err(StackError::DuplicateName { name });
        }
        self.pages.push(Page {
            name,
            title: title.into(),
            icon: icon.into(),
        });
        if self.visible.is_none() {
            self.visible = Some(0);
        }
        Ok(())
    }

    /// Make the named page visible and return its index.
    ///
    /// An unknown name leaves the visible page unchanged.
    pub fn set_visible_child_name(&mut self, name: &str) -> Result<usize, StackError> {
        let idx = self.index_of(name).ok_or_else(|| StackError::UnknownPage {
            name: name.to_string(),
        })?;
        self.visible = Some(idx);
        Ok(idx)
    }

    pub fn visible_child(&self) -> Option<&Page> {
        self.visible.and_then(|idx| self.pages.get(idx))
    }

    pub fn visible_child_name(&self) -> Option<&str> {
        self.visible_child().map(|p| p.name.as_str())
    }

    pub fn visible_index(&self) -> Option<usize> {
        self.visible
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.name == name)
    }

    pub fn get(&self, idx: usize) -> Option<&Page> {
        self.pages.get(idx)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(names: &[&str]) -> PageStack {
        let mut stack = PageStack::new();
        for name in names {
            stack.add_titled(*name, *name, "icon").unwrap();
        }
        stack
    }

    #[test]
    fn test_empty_stack_has_no_visible_child() {
        let stack = PageStack::new();
        assert!(stack.is_empty());
        assert!(stack.visible_child().is_none());
        assert!(stack.visible_index().is_none());
    }

    #[test]
    fn test_first_added_page_is_visible() {
        let stack = stack_of(&["Backgrounds", "Effects"]);
        assert_eq!(stack.visible_child_name(), Some("Backgrounds"));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut stack = stack_of(&["Sound"]);
        let err = stack.add_titled("Sound", "Sound", "x").unwrap_err();
        assert_eq!(
            err,
            StackError::DuplicateName {
                name: "Sound".to_string()
            }
        );
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_set_visible_child_name() {
        let mut stack = stack_of(&["A", "B", "C"]);
        assert_eq!(stack.set_visible_child_name("C"), Ok(2));
        assert_eq!(stack.visible_child_name(), Some("C"));
    }

    #[test]
    fn test_unknown_name_keeps_visible_page() {
        let mut stack = stack_of(&["A", "B"]);
        stack.set_visible_child_name("B").unwrap();
        assert!(stack.set_visible_child_name("Z").is_err());
        assert_eq!(stack.visible_child_name(), Some("B"));
    }

    #[test]
    fn test_page_heading() {
        let stack = stack_of(&["Date & Time"]);
        assert_eq!(stack.pages()[0].heading(), "Date & Time Settings");
    }
}
