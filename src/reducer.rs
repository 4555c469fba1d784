//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, PAGE_SIZE};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init => {
            state.page_loading = true;
            state.types = DataResource::Loading;
            state.message = None;
            DispatchResult::changed_with_many(vec![
                Effect::LoadPage {
                    offset: state.offset,
                },
                Effect::LoadTypes,
            ])
        }

        // ===== Page actions =====
        Action::PageDidLoad(batch) => {
            state.page_loading = false;
            state.message = None;
            state.merge_batch(batch);
            state.clamp_selection();
            DispatchResult::changed()
        }

        Action::PageDidError(error) => {
            state.page_loading = false;
            state.message = Some(format!("Page load error: {error}"));
            DispatchResult::changed()
        }

        Action::LoadMore => {
            if !state.can_load_more() {
                return DispatchResult::unchanged();
            }
            state.offset += PAGE_SIZE;
            state.page_loading = true;
            state.message = None;
            DispatchResult::changed_with(Effect::LoadPage {
                offset: state.offset,
            })
        }

        // ===== Type filter actions =====
        Action::TypesDidLoad(types) => {
            state.types = DataResource::Loaded(types);
            DispatchResult::changed()
        }

        Action::TypesDidError(error) => {
            state.types = DataResource::Failed(error.clone());
            state.message = Some(format!("Type list error: {error}"));
            DispatchResult::changed()
        }

        Action::TypeFilterNext => cycle_filter(state, 1),
        Action::TypeFilterPrev => cycle_filter(state, -1),

        Action::TypeFilterClear => {
            if state.type_filter.is_none() {
                return DispatchResult::unchanged();
            }
            state.type_filter = None;
            state.clamp_selection();
            DispatchResult::changed()
        }

        // ===== Search actions =====
        Action::SearchStart => {
            state.search.active = true;
            state.search.query.clear();
            state.clamp_selection();
            DispatchResult::changed()
        }

        Action::SearchCancel => {
            if !state.search.active && state.search.query.is_empty() {
                return DispatchResult::unchanged();
            }
            state.search.active = false;
            state.search.query.clear();
            state.clamp_selection();
            DispatchResult::changed()
        }

        Action::SearchSubmit => {
            state.search.active = false;
            DispatchResult::changed()
        }

        Action::SearchInput(ch) => {
            state.search.query.push(ch);
            state.clamp_selection();
            DispatchResult::changed()
        }

        Action::SearchBackspace => {
            state.search.query.pop();
            state.clamp_selection();
            DispatchResult::changed()
        }

        // ===== Selection actions =====
        Action::SelectionMove(delta) => {
            let mut index = state.selected_index as i16 + delta;
            if index < 0 {
                index = 0;
            }
            if !state.set_selected_index(index as usize) {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed()
        }

        Action::SelectionJumpTop => {
            if !state.set_selected_index(0) {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed()
        }

        Action::SelectionJumpBottom => {
            let last = state.visible_entries().len().saturating_sub(1);
            if !state.set_selected_index(last) {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed()
        }

        // ===== Detail overlay actions =====
        Action::DetailOpen => {
            let Some(name) = state.selected_name() else {
                return DispatchResult::unchanged();
            };
            state.detail_name = Some(name);
            DispatchResult::changed()
        }

        Action::DetailClose => {
            if state.detail_name.is_none() {
                return DispatchResult::unchanged();
            }
            state.detail_name = None;
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Tick => {
            if state.title_complete() {
                return DispatchResult::unchanged();
            }
            state.title_reveal += 1;
            DispatchResult::changed()
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn cycle_filter(state: &mut AppState, step: i16) -> DispatchResult<Effect> {
    // Index 0 means "no filter"; 1..=len map to the type list.
    let list_len = state.type_list().len() as i16;
    if list_len == 0 {
        return DispatchResult::unchanged();
    }
    let current_index = state
        .type_filter
        .as_ref()
        .and_then(|name| state.type_list().iter().position(|t| t == name))
        .map(|idx| idx as i16 + 1)
        .unwrap_or(0);
    let mut next = current_index + step;
    if next < 0 {
        next = list_len;
    } else if next > list_len {
        next = 0;
    }

    let next_filter = if next == 0 {
        None
    } else {
        Some(state.type_list()[(next - 1) as usize].clone())
    };
    if next_filter == state.type_filter {
        return DispatchResult::unchanged();
    }
    state.type_filter = next_filter;
    state.clamp_selection();
    DispatchResult::changed()
}
