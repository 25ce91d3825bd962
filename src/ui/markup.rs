//! Serializers for the [`Document`]: well-formed HTML for snapshots and
//! plain text for one-shot CLI output.

use std::fmt::Write;

use crate::ui::view::{Block, Document, Region};

/// Render every region as a `<section>`; hidden ones carry the `hidden` class.
pub fn to_html(document: &Document) -> String {
    let mut out = String::new();
    for (region, state) in document.iter() {
        let hidden = if state.visible { "" } else { " hidden" };
        let _ = writeln!(out, r#"<section class="{}{}">"#, region.class_name(), hidden);
        for block in &state.blocks {
            block_html(&mut out, block);
        }
        out.push_str("</section>\n");
    }
    out
}

/// Text of the visible content regions, one block per line.
pub fn to_plain_text(document: &Document) -> String {
    let mut out = String::new();
    for region in [Region::LoginError, Region::LoggedIn, Region::Results] {
        if !document.is_visible(region) {
            continue;
        }
        for block in document.blocks(region) {
            block_text(&mut out, block);
        }
    }
    out
}

pub fn block_lines(block: &Block) -> Vec<String> {
    match block {
        Block::Heading { text, .. } => vec![text.clone()],
        Block::Field { label, value } => vec![format!("{label}: {value}")],
        Block::ReviewList(items) if items.is_empty() => vec!["  (no reviews yet)".to_string()],
        Block::ReviewList(items) => items
            .iter()
            .map(|item| format!("  - {}: {}", item.author, item.comment))
            .collect(),
        Block::Button { label, .. } => vec![format!("[{label}]")],
        Block::ReviewForm => vec!["Write your review below and press Enter.".to_string()],
        Block::Text(text) => vec![text.clone()],
    }
}

fn block_text(out: &mut String, block: &Block) {
    for line in block_lines(block) {
        out.push_str(&line);
        out.push('\n');
    }
}

fn block_html(out: &mut String, block: &Block) {
    match block {
        Block::Heading { level, text } => {
            let level = (*level).clamp(1, 6);
            let _ = writeln!(out, "<h{level}>{}</h{level}>", escape(text));
        }
        Block::Field { label, value } => {
            let _ = writeln!(out, "<p>{}: {}</p>", escape(label), escape(value));
        }
        Block::ReviewList(items) => {
            out.push_str("<ul>");
            for item in items {
                let _ = write!(
                    out,
                    "<li><p>{}: {}</p></li>",
                    escape(&item.author),
                    escape(&item.comment)
                );
            }
            out.push_str("</ul>\n");
        }
        Block::Button { class, label } => {
            let _ = writeln!(
                out,
                r#"<button class="{}" type="button">{}</button>"#,
                escape(class),
                escape(label)
            );
        }
        Block::ReviewForm => {
            out.push_str(concat!(
                r#"<form class="js-review-form">"#,
                r#"<textarea name="review" required></textarea>"#,
                r#"<button type="submit">Submit review</button>"#,
                "</form>\n"
            ));
        }
        Block::Text(text) => {
            let _ = writeln!(out, "<p>{}</p>", escape(text));
        }
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
