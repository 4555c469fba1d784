use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::Frame;
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::Component;
use crate::action::Action;
use crate::state::AppState;

pub struct CatalogListProps<'a> {
    pub state: &'a AppState,
}

/// Windowed list of the visible catalog entries, plus the footer line that
/// doubles as the load-more control.
#[derive(Default)]
pub struct CatalogList;

impl Component<Action> for CatalogList {
    type Props<'a> = CatalogListProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

        render_entries(frame, chunks[0], props.state);
        render_footer(frame, chunks[1], props.state);
    }
}

fn render_entries(frame: &mut Frame, area: Rect, state: &AppState) {
    let entries = state.visible_entries();

    if entries.is_empty() {
        if !state.page_loading {
            let empty = Line::from(Span::styled(
                "No Pokémon found",
                Style::default().fg(Color::DarkGray),
            ))
            .centered();
            frame.render_widget(Paragraph::new(empty), area);
        }
        return;
    }

    let rows = area.height as usize;
    let selected = state.selected_index.min(entries.len() - 1);
    let start = if selected >= rows { selected + 1 - rows } else { 0 };

    let lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .skip(start)
        .take(rows)
        .map(|(idx, entry)| {
            let is_selected = idx == selected;
            let marker = if is_selected { "\u{25b8} " } else { "  " };
            let name_style = if is_selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(entry.name.clone(), name_style),
                Span::styled(
                    format!("  {}", entry.types.join(", ")),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer = if let Some(message) = &state.message {
        Line::from(Span::styled(
            format!("\u{26a0} {message}"),
            Style::default().fg(Color::Red),
        ))
    } else if state.page_loading {
        Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        ))
    } else if state.load_more_visible() {
        Line::from(vec![
            Span::styled("m", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" load more", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        return;
    };
    frame.render_widget(Paragraph::new(footer.centered()), area);
}
