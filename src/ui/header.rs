use crate::ui::theme::{AMBER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    server: &'a str,
    logged_in: bool,
}

impl<'a> Header<'a> {
    pub fn new(server: &'a str, logged_in: bool) -> Self {
        Self { server, logged_in }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_color) = if self.logged_in {
            ("logged in", STATUS_OK)
        } else {
            ("guest", STATUS_ERROR)
        };
        let line = Line::from(vec![
            Span::styled("  brewlog", Style::default().fg(AMBER)),
            Span::styled("  │  ", separator_style),
            Span::styled(self.server.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, Style::default().fg(status_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
