use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::Frame;
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    centered_rect, BaseStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding,
};

use super::Component;
use crate::action::Action;
use crate::state::CatalogEntry;

pub struct DetailOverlayProps<'a> {
    pub entry: Option<&'a CatalogEntry>,
    pub is_focused: bool,
}

/// Modal overlay showing the full record of one catalog entry.
pub struct DetailOverlay {
    modal: Modal,
}

impl Default for DetailOverlay {
    fn default() -> Self {
        Self {
            modal: Modal::new(),
        }
    }
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn detail_lines(entry: &CatalogEntry) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            capitalize(&entry.name),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            entry.types.join(", "),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Height: {}   Weight: {}", entry.height, entry.weight),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    for stat in &entry.stats {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", stat.name.to_uppercase()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(stat.base.to_string(), Style::default().fg(Color::Gray)),
        ]));
    }

    if let Some(artwork) = &entry.artwork {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            artwork.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("esc", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" close", Style::default().fg(Color::DarkGray)),
    ]));
    lines
}

impl Component<Action> for DetailOverlay {
    type Props<'a> = DetailOverlayProps<'a>;

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
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::DetailClose),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let Some(entry) = props.entry else {
            return;
        };
        if area.width < 24 || area.height < 10 {
            return;
        }

        let lines = detail_lines(entry);
        let modal_area = centered_rect(48, 18, area);
        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            frame.render_widget(
                Paragraph::new(lines.clone()).alignment(Alignment::Center),
                content_area,
            );
        };

        self.modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: modal_area,
                style: ModalStyle {
                    base: BaseStyle {
                        bg: Some(Color::Rgb(35, 35, 45)),
                        padding: Padding::all(1),
                        border: None,
                        fg: None,
                    },
                    ..Default::default()
                },
                behavior: ModalBehavior::default(),
                on_close: || Action::DetailClose,
                render_content: &mut render_content,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatValue;
    use tui_dispatch::testing::*;

    fn bulbasaur() -> CatalogEntry {
        CatalogEntry {
            name: "bulbasaur".to_string(),
            artwork: Some("https://example.test/bulbasaur.png".to_string()),
            types: vec!["grass".to_string(), "poison".to_string()],
            height: 7,
            weight: 69,
            stats: vec![
                StatValue {
                    name: "hp".to_string(),
                    base: 45,
                },
                StatValue {
                    name: "attack".to_string(),
                    base: 49,
                },
            ],
        }
    }

    #[test]
    fn test_escape_closes_detail() {
        let mut component = DetailOverlay::new();
        let entry = bulbasaur();
        let esc = EventKind::Key(crossterm::event::KeyEvent::from(KeyCode::Esc));

        let actions: Vec<_> = component
            .handle_event(
                &esc,
                DetailOverlayProps {
                    entry: Some(&entry),
                    is_focused: true,
                },
            )
            .into_iter()
            .collect();
        actions.assert_first(Action::DetailClose);
    }

    #[test]
    fn test_render_shows_record_fields() {
        let mut render = RenderHarness::new(60, 24);
        let mut component = DetailOverlay::new();
        let entry = bulbasaur();

        let output = render.render_to_string_plain(|frame| {
            component.render(
                frame,
                frame.area(),
                DetailOverlayProps {
                    entry: Some(&entry),
                    is_focused: true,
                },
            );
        });

        assert!(output.contains("Bulbasaur"));
        assert!(output.contains("grass, poison"));
        assert!(output.contains("HP: 45"));
        assert!(output.contains("Height: 7"));
    }
}
