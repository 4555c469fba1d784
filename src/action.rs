use serde::{Deserialize, Serialize};

use crate::state::CatalogEntry;

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[action(infer_categories)]
pub enum Action {
    Init,

    PageDidLoad(Vec<CatalogEntry>),
    PageDidError(String),
    LoadMore,

    TypesDidLoad(Vec<String>),
    TypesDidError(String),
    TypeFilterNext,
    TypeFilterPrev,
    TypeFilterClear,

    SearchStart,
    SearchCancel,
    SearchSubmit,
    SearchInput(char),
    SearchBackspace,

    SelectionMove(i16),
    SelectionJumpTop,
    SelectionJumpBottom,

    DetailOpen,
    DetailClose,

    Tick,
    Quit,
}
