//! Application state - single source of truth

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;
use tui_dispatch_debug::debug::{DebugSection, DebugState, ron_string};

/// Entries fetched per listing request.
pub const PAGE_SIZE: u32 = 20;

/// Header text, revealed one character per tick.
pub const TITLE_TEXT: &str = "Pokémon Kingdom";
pub const TITLE_TICK_MS: u64 = 120;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    pub active: bool,
    pub query: String,
}

/// One base stat from the detail endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    pub name: String,
    pub base: u16,
}

/// A fully resolved catalog entry. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Official artwork URL; absent from the payload for some entries.
    pub artwork: Option<String>,
    pub types: Vec<String>,
    pub height: u16,
    pub weight: u16,
    pub stats: Vec<StatValue>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppState {
    /// Accumulated catalog keyed by name. Inserting an existing name keeps
    /// its position and overwrites the stored entry.
    pub catalog: IndexMap<String, CatalogEntry>,
    /// Listing offset of the most recent page request.
    pub offset: u32,
    pub page_loading: bool,

    /// Type labels, loaded once: Empty -> Loading -> Loaded/Failed.
    pub types: DataResource<Vec<String>>,
    pub type_filter: Option<String>,

    pub search: SearchState,
    pub selected_index: usize,
    /// Entry currently open in the detail overlay.
    pub detail_name: Option<String>,

    /// Characters of TITLE_TEXT revealed so far.
    pub title_reveal: usize,
    pub message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            catalog: IndexMap::new(),
            offset: 0,
            page_loading: false,
            types: DataResource::Empty,
            type_filter: None,
            search: SearchState::default(),
            selected_index: 0,
            detail_name: None,
            title_reveal: 0,
            message: None,
        }
    }
}

impl AppState {
    /// Derive the displayed subset of the catalog from the current search
    /// text and type filter. Recomputed on every call; catalog order is
    /// preserved, nothing is cached.
    pub fn visible_entries(&self) -> Vec<&CatalogEntry> {
        let query = self.search.query.to_lowercase();
        self.catalog
            .values()
            .filter(|entry| {
                let matches_name = entry.name.to_lowercase().contains(&query);
                let matches_type = match &self.type_filter {
                    Some(filter) => entry.types.iter().any(|t| t == filter),
                    None => true,
                };
                matches_name && matches_type
            })
            .collect()
    }

    /// Merge a resolved batch into the catalog. A name seen before keeps its
    /// original position but takes the new value; new names append in batch
    /// order.
    pub fn merge_batch(&mut self, batch: Vec<CatalogEntry>) {
        for entry in batch {
            self.catalog.insert(entry.name.clone(), entry);
        }
    }

    pub fn selected_name(&self) -> Option<String> {
        self.visible_entries()
            .get(self.selected_index)
            .map(|entry| entry.name.clone())
    }

    pub fn detail_entry(&self) -> Option<&CatalogEntry> {
        let name = self.detail_name.as_ref()?;
        self.catalog.get(name)
    }

    pub fn set_selected_index(&mut self, index: usize) -> bool {
        let len = self.visible_entries().len();
        if len == 0 {
            self.selected_index = 0;
            return false;
        }
        let bounded = index.min(len - 1);
        if bounded != self.selected_index {
            self.selected_index = bounded;
            return true;
        }
        false
    }

    pub fn clamp_selection(&mut self) {
        let len = self.visible_entries().len();
        if self.selected_index >= len {
            self.selected_index = 0;
        }
    }

    /// The load-more control disappears entirely while a type filter is set.
    pub fn load_more_visible(&self) -> bool {
        self.type_filter.is_none()
    }

    pub fn can_load_more(&self) -> bool {
        self.load_more_visible() && !self.page_loading
    }

    pub fn type_list(&self) -> &[String] {
        self.types.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn title_text(&self) -> String {
        TITLE_TEXT.chars().take(self.title_reveal).collect()
    }

    pub fn title_complete(&self) -> bool {
        self.title_reveal >= TITLE_TEXT.chars().count()
    }
}

impl DebugState for AppState {
    fn debug_sections(&self) -> Vec<DebugSection> {
        vec![
            DebugSection::new("Catalog")
                .entry("total", ron_string(&self.catalog.len()))
                .entry("visible", ron_string(&self.visible_entries().len()))
                .entry("offset", ron_string(&self.offset))
                .entry("loading", ron_string(&self.page_loading)),
            DebugSection::new("Filters")
                .entry("search", ron_string(&self.search.query))
                .entry("search_active", ron_string(&self.search.active))
                .entry("type", ron_string(&self.type_filter))
                .entry("selected", ron_string(&self.selected_index))
                .entry("detail", ron_string(&self.detail_name)),
            DebugSection::new("Status")
                .entry("message", ron_string(&self.message)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, types: &[&str], height: u16) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            artwork: None,
            types: types.iter().map(|t| t.to_string()).collect(),
            height,
            weight: 10,
            stats: Vec::new(),
        }
    }

    #[test]
    fn test_merge_dedup_keeps_position_takes_latest_value() {
        let mut state = AppState::default();
        state.merge_batch(vec![entry("a", &["grass"], 1), entry("b", &["fire"], 1)]);
        state.merge_batch(vec![entry("a", &["grass"], 2)]);

        let names: Vec<&str> = state.catalog.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(state.catalog["a"].height, 2);
    }

    #[test]
    fn test_merge_identical_batch_is_idempotent() {
        let batch = vec![entry("a", &["grass"], 1), entry("b", &["fire"], 1)];

        let mut once = AppState::default();
        once.merge_batch(batch.clone());
        let mut twice = AppState::default();
        twice.merge_batch(batch.clone());
        twice.merge_batch(batch);

        assert_eq!(once.catalog.len(), twice.catalog.len());
        assert_eq!(once.catalog, twice.catalog);
    }

    #[test]
    fn test_filter_is_conjunctive() {
        let mut state = AppState::default();
        state.merge_batch(vec![
            entry("bulbasaur", &["grass"], 7),
            entry("charmander", &["fire"], 6),
        ]);

        state.type_filter = Some("fire".to_string());
        let visible = state.visible_entries();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "charmander");

        // Search matching neither name yields nothing regardless of filter.
        state.search.query = "zzz".to_string();
        assert!(state.visible_entries().is_empty());
    }

    #[test]
    fn test_name_search_is_case_insensitive() {
        let mut state = AppState::default();
        state.merge_batch(vec![entry("Bulbasaur", &["grass"], 7)]);

        state.search.query = "BULBA".to_string();
        assert_eq!(state.visible_entries().len(), 1);
    }

    #[test]
    fn test_type_match_is_exact() {
        let mut state = AppState::default();
        state.merge_batch(vec![entry("vaporeon", &["water"], 10)]);

        state.type_filter = Some("Water".to_string());
        assert!(state.visible_entries().is_empty());

        state.type_filter = Some("water".to_string());
        assert_eq!(state.visible_entries().len(), 1);
    }

    #[test]
    fn test_load_more_hidden_under_type_filter() {
        let mut state = AppState::default();
        assert!(state.load_more_visible());
        assert!(state.can_load_more());

        state.page_loading = true;
        assert!(state.load_more_visible());
        assert!(!state.can_load_more());

        state.page_loading = false;
        state.type_filter = Some("water".to_string());
        assert!(!state.load_more_visible());
        assert!(!state.can_load_more());
    }

    #[test]
    fn test_title_reveal() {
        let mut state = AppState::default();
        assert_eq!(state.title_text(), "");
        assert!(!state.title_complete());

        state.title_reveal = 3;
        assert_eq!(state.title_text(), "Pok");

        state.title_reveal = TITLE_TEXT.chars().count();
        assert_eq!(state.title_text(), TITLE_TEXT);
        assert!(state.title_complete());
    }
}
