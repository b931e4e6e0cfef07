// SettingsPanel - app/populate.rs
//
// Builds the sidebar model and the page stack from the catalogue:
// one sidebar entry and one stack page per option, in catalogue order.

use crate::core::catalog::Section;
use crate::core::search::SearchQuery;
use crate::core::stack::PageStack;
use crate::util::error::StackError;

/// One clickable category button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    /// Stack page opened by this entry.
    pub page_name: String,
    pub label: String,
    pub icon: String,
}

/// A section title followed by its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarSection {
    pub title: String,
    pub entries: Vec<SidebarEntry>,
}

/// The full sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sidebar {
    pub sections: Vec<SidebarSection>,
}

impl Sidebar {
    /// Sections and entries matching `query`. Sections with no matching
    /// entry are dropped; an empty query keeps everything.
    pub fn filtered(&self, query: &SearchQuery) -> Vec<(&SidebarSection, Vec<&SidebarEntry>)> {
        self.sections
            .iter()
            .filter_map(|section| {
                let entries: Vec<_> = section
                    .entries
                    .iter()
                    .filter(|e| query.matches(&e.page_name))
                    .collect();
                if entries.is_empty() {
                    None
                } else {
                    Some((section, entries))
                }
            })
            .collect()
    }

    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }
}

/// Create the sidebar and page stack for `sections`.
///
/// Fails if two options share a label, since labels are page names.
pub fn populate(sections: &[Section]) -> Result<(Sidebar, PageStack), StackError> {
    let mut sidebar = Sidebar::default();
    let mut stack = PageStack::new();

    for section in sections {
        let mut entries = Vec::with_capacity(section.options.len());
        for option in section.options {
            stack.add_titled(option.label, option.label, option.icon)?;
            entries.push(SidebarEntry {
                page_name: option.label.to_string(),
                label: option.label.to_string(),
                icon: option.icon.to_string(),
            });
        }
        sidebar.sections.push(SidebarSection {
            title: section.title.to_string(),
            entries,
        });
    }

    tracing::debug!(
        sections = sidebar.sections.len(),
        buttons = sidebar.entry_count(),
        pages = stack.len(),
        "Sidebar and page stack populated"
    );

    Ok((sidebar, stack))
}
