use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::Frame;
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;

use super::Component;
use crate::action::Action;
use crate::state::AppState;

pub struct FilterBarProps<'a> {
    pub state: &'a AppState,
}

/// Search input and type filter line. Receives key events while search
/// mode is active.
#[derive(Default)]
pub struct FilterBar;

impl Component<Action> for FilterBar {
    type Props<'a> = FilterBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.state.search.active {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::SearchCancel),
                KeyCode::Enter => Some(Action::SearchSubmit),
                KeyCode::Backspace => Some(Action::SearchBackspace),
                KeyCode::Char(ch) => Some(Action::SearchInput(ch)),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(28)]).split(area);

        let search = &props.state.search;
        let search_line = if search.active {
            Line::from(vec![
                Span::styled("search: ", Style::default().fg(Color::DarkGray)),
                Span::styled(search.query.clone(), Style::default().fg(Color::Yellow)),
                Span::styled("\u{258c}", Style::default().fg(Color::Yellow)),
            ])
        } else if search.query.is_empty() {
            Line::from(Span::styled(
                "/ to search",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(vec![
                Span::styled("search: ", Style::default().fg(Color::DarkGray)),
                Span::styled(search.query.clone(), Style::default().fg(Color::Gray)),
            ])
        };
        frame.render_widget(Paragraph::new(search_line), chunks[0]);

        let type_line = match &props.state.type_filter {
            Some(filter) => Line::from(vec![
                Span::styled("type: ", Style::default().fg(Color::DarkGray)),
                Span::styled(filter.clone(), Style::default().fg(Color::Cyan).bold()),
            ]),
            None if props.state.types.is_failed() => Line::from(Span::styled(
                "types unavailable",
                Style::default().fg(Color::Red),
            )),
            None => Line::from(Span::styled(
                "type: all",
                Style::default().fg(Color::DarkGray),
            )),
        };
        frame.render_widget(Paragraph::new(type_line.right_aligned()), chunks[1]);
    }
}
