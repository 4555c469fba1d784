use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::Frame;
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{CatalogList, CatalogListProps, Component, FilterBar, FilterBarProps};
use crate::action::Action;
use crate::state::AppState;

/// Props for DexDisplay - read-only view of state
pub struct DexDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The main catalog display component
#[derive(Default)]
pub struct DexDisplay;

fn split_main(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Length(1), // Filter bar
        Constraint::Min(1),    // Catalog list
        Constraint::Length(1), // Help bar
    ])
    .split(area)
}

/// The filter bar row, exposed so the event bus can route mouse events.
pub fn filter_bar_area(area: Rect) -> Rect {
    split_main(area)[1]
}

impl Component<Action> for DexDisplay {
    type Props<'a> = DexDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('/') => Some(Action::SearchStart),
                KeyCode::Char(']') => Some(Action::TypeFilterNext),
                KeyCode::Char('[') => Some(Action::TypeFilterPrev),
                KeyCode::Char('c') => Some(Action::TypeFilterClear),
                KeyCode::Char('m') if props.state.load_more_visible() => Some(Action::LoadMore),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectionMove(1)),
                KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectionMove(-1)),
                KeyCode::Char('g') | KeyCode::Home => Some(Action::SelectionJumpTop),
                KeyCode::Char('G') | KeyCode::End => Some(Action::SelectionJumpBottom),
                KeyCode::Enter => Some(Action::DetailOpen),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: DexDisplayProps<'_>) {
        let chunks = split_main(area);

        let title = Line::from(vec![
            Span::styled(
                props.state.title_text(),
                Style::default().fg(Color::Cyan).bold(),
            ),
            Span::styled("|", Style::default().fg(Color::DarkGray)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(title), chunks[0]);

        let mut filter = FilterBar;
        filter.render(frame, chunks[1], FilterBarProps { state: props.state });

        let mut list = CatalogList;
        list.render(frame, chunks[2], CatalogListProps { state: props.state });

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[3],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("/", "search"),
                    StatusBarHint::new("[ ]", "type"),
                    StatusBarHint::new("m", "more"),
                    StatusBarHint::new("enter", "details"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    #[test]
    fn test_load_more_key_when_no_filter() {
        let mut component = DexDisplay;
        let state = AppState::default();
        let props = DexDisplayProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("m")), props)
            .into_iter()
            .collect();
        actions.assert_count(1);
        actions.assert_first(Action::LoadMore);
    }

    #[test]
    fn test_load_more_key_suppressed_under_type_filter() {
        let mut component = DexDisplay;
        let state = AppState {
            type_filter: Some("water".to_string()),
            ..Default::default()
        };
        let props = DexDisplayProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("m")), props)
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_search_key_starts_search() {
        let mut component = DexDisplay;
        let state = AppState::default();
        let props = DexDisplayProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("/")), props)
            .into_iter()
            .collect();
        actions.assert_first(Action::SearchStart);
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut component = DexDisplay;
        let state = AppState::default();
        let props = DexDisplayProps {
            state: &state,
            is_focused: false,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("m")), props)
            .into_iter()
            .collect();
        actions.assert_empty();
    }
}
