use ns_core::Note;

/// Last-fetched canonical note sequence plus the live search filter.
///
/// The canonical sequence is replaced wholesale after every successful
/// remote operation; the active view is derived from it on demand and never
/// mutates it.
#[derive(Debug, Clone, Default)]
pub struct NoteCache {
    canonical: Vec<Note>,
    filter: String,
}

impl NoteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the canonical sequence with a freshly fetched list.
    pub fn replace(&mut self, notes: Vec<Note>) {
        self.canonical = notes;
    }

    pub fn clear(&mut self) {
        self.canonical.clear();
    }

    pub fn set_filter(&mut self, query: &str) {
        self.filter = query.to_string();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// The full canonical sequence, newest first.
    pub fn canonical(&self) -> &[Note] {
        &self.canonical
    }

    /// The canonical sequence, or its case-insensitive title/content match
    /// subsequence when the filter is non-blank. Canonical order is
    /// preserved either way.
    pub fn active_view(&self) -> Vec<Note> {
        let query = self.filter.trim();
        if query.is_empty() {
            return self.canonical.clone();
        }

        let query = query.to_lowercase();
        self.canonical
            .iter()
            .filter(|note| {
                note.title.to_lowercase().contains(&query)
                    || note.content.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }
}
