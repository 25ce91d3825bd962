use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::input::{focusable, Focus, InputState};
use crate::ui::layout::{body_columns, layout_regions, stack};
use crate::ui::markup::block_lines;
use crate::ui::theme::{AMBER, DIM_TEXT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use crate::ui::view::Region;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App, input: &InputState, server: &str) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let logged_in = app.state().user_logged_in();
    frame.render_widget(Header::new(server, logged_in).widget(), header);
    frame.render_widget(Clear, body);

    let (forms_area, page_area) = body_columns(body);
    draw_forms(frame, app, input, forms_area);
    draw_page(frame, app, page_area);

    frame.render_widget(Footer::widget(footer, logged_in), footer);
}

fn draw_forms(frame: &mut Frame<'_>, app: &App, input: &InputState, area: Rect) {
    let forms: Vec<Focus> = focusable(app)
        .into_iter()
        .filter(|form| *form != Focus::Landing)
        .collect();
    let heights: Vec<u16> = forms
        .iter()
        .map(|form| input.fields(*form).len() as u16 + 2)
        .collect();

    for (form, rect) in forms.iter().zip(stack(area, &heights)) {
        if rect.height < 3 {
            continue;
        }
        let focused = input.focus() == *form;
        let lines: Vec<Line> = input
            .fields(*form)
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let active = focused && index == input.field();
                let marker = if active { "> " } else { "  " };
                let value_style = if active {
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(HEADER_TEXT)
                };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(AMBER)),
                    Span::styled(format!("{}: ", field.label), Style::default().fg(DIM_TEXT)),
                    Span::styled(field.display(), value_style),
                ])
            })
            .collect();

        let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
        let widget = Paragraph::new(lines).block(
            Block::default()
                .title(form_title(*form))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(widget, rect);

        if focused {
            if let Some(field) = input.fields(*form).get(input.field()) {
                let offset = 2 + field.label.chars().count() + 2 + field.display().chars().count();
                let x = rect.x + 1 + (offset as u16).min(rect.width.saturating_sub(3));
                let y = rect.y + 1 + input.field() as u16;
                frame.set_cursor_position((x, y));
            }
        }
    }
}

fn form_title(form: Focus) -> &'static str {
    match form {
        Focus::Landing => "",
        Focus::Search => " Search beers ",
        Focus::Login => " Log in ",
        Focus::Signup => " Sign up ",
        Focus::Review => " Leave a review ",
    }
}

fn draw_page(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let document = app.document();
    let mut lines: Vec<Line> = Vec::new();

    let styled_region = |region: Region, style: Style, lines: &mut Vec<Line>| {
        if !document.is_visible(region) {
            return;
        }
        for block in document.blocks(region) {
            for text in block_lines(block) {
                lines.push(Line::from(Span::styled(text, style)));
            }
        }
    };

    styled_region(Region::LoginError, Style::default().fg(STATUS_ERROR), &mut lines);
    styled_region(Region::LoggedIn, Style::default().fg(STATUS_OK), &mut lines);

    if document.is_visible(Region::StarterPage) {
        lines.push(Line::from(Span::styled(
            "Find a beer, read what people think, leave your own review.",
            Style::default().fg(HEADER_TEXT),
        )));
        lines.push(Line::from(Span::styled(
            "Press Enter or Ctrl+F to search.",
            Style::default().fg(DIM_TEXT),
        )));
    }

    if !lines.is_empty() {
        lines.push(Line::from(""));
    }
    styled_region(Region::Results, Style::default().fg(HEADER_TEXT), &mut lines);

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(widget, area);
}
