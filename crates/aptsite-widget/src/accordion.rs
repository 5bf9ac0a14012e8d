use std::collections::BTreeMap;

/// Per-panel open state for the FAQ accordion.
///
/// Panels are independent: opening one never closes another. Unknown ids are
/// closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: BTreeMap<String, bool>,
}

impl AccordionState {
    #[must_use]
    pub fn is_open(&self, panel_id: &str) -> bool {
        self.open.get(panel_id).copied().unwrap_or(false)
    }

    /// Flips one panel and returns its new state.
    pub fn toggle(&mut self, panel_id: &str) -> bool {
        let entry = self.open.entry(panel_id.to_string()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    pub fn open_panels(&self) -> impl Iterator<Item = &str> {
        self.open
            .iter()
            .filter(|(_, open)| **open)
            .map(|(id, _)| id.as_str())
    }
}

/// Panel id for the FAQ entry at `index`.
#[must_use]
pub fn panel_id(index: usize) -> String {
    format!("faq-{index}")
}

/// Inverse of [`panel_id`]. Only the canonical form matches, so `faq-01`
/// is not panel 1.
#[must_use]
pub fn panel_index(panel_id: &str) -> Option<usize> {
    let index = panel_id.strip_prefix("faq-")?.parse::<usize>().ok()?;
    (self::panel_id(index) == panel_id).then_some(index)
}
