//! Render snapshot tests using RenderHarness

use pokedex::{
    components::{Component, DexDisplay, DexDisplayProps},
    state::{AppState, CatalogEntry, SearchState, TITLE_TEXT},
};
use tui_dispatch::testing::*;

fn entry(name: &str, types: &[&str]) -> CatalogEntry {
    CatalogEntry {
        name: name.to_string(),
        artwork: None,
        types: types.iter().map(|t| t.to_string()).collect(),
        height: 7,
        weight: 69,
        stats: Vec::new(),
    }
}

fn state_with_entries() -> AppState {
    let mut state = AppState::default();
    state.merge_batch(vec![
        entry("bulbasaur", &["grass", "poison"]),
        entry("charmander", &["fire"]),
    ]);
    state.title_reveal = TITLE_TEXT.chars().count();
    state
}

fn render_display(state: &AppState) -> String {
    let mut render = RenderHarness::new(60, 24);
    let mut component = DexDisplay;
    render.render_to_string_plain(|frame| {
        let props = DexDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

#[test]
fn test_render_catalog_entries() {
    let output = render_display(&state_with_entries());

    assert!(output.contains("bulbasaur"), "Should list entries:\n{}", output);
    assert!(output.contains("grass, poison"), "Should show types:\n{}", output);
    assert!(output.contains(TITLE_TEXT), "Should show full title:\n{}", output);
}

#[test]
fn test_render_empty_search_result() {
    let mut state = state_with_entries();
    state.search = SearchState {
        active: false,
        query: "zzz".to_string(),
    };

    let output = render_display(&state);
    assert!(
        output.contains("No Pokémon found"),
        "Should show the empty message:\n{}",
        output
    );
}

#[test]
fn test_render_loading_footer() {
    let mut state = state_with_entries();
    state.page_loading = true;

    let output = render_display(&state);
    assert!(output.contains("Loading..."), "Should show loading:\n{}", output);
    assert!(!output.contains("load more"));
}

#[test]
fn test_render_load_more_footer() {
    let output = render_display(&state_with_entries());
    assert!(
        output.contains("load more"),
        "Idle with no filter shows the control:\n{}",
        output
    );
}

#[test]
fn test_render_type_filter_hides_load_more() {
    let mut state = state_with_entries();
    state.type_filter = Some("fire".to_string());

    let output = render_display(&state);
    assert!(!output.contains("load more"));
    assert!(output.contains("fire"), "Filter label is shown:\n{}", output);
    assert!(!output.contains("bulbasaur"), "Grass entry filtered out:\n{}", output);
}

#[test]
fn test_render_error_message() {
    let mut state = state_with_entries();
    state.message = Some("Page load error: poke-3: timeout".to_string());

    let output = render_display(&state);
    assert!(output.contains("Page load error"));
}

#[test]
fn test_render_title_typewriter_progress() {
    let mut state = state_with_entries();
    state.title_reveal = 3;

    let output = render_display(&state);
    assert!(output.contains("Pok"));
    assert!(!output.contains(TITLE_TEXT));
}
