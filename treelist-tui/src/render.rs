//! Row rendering and drawing.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use treelist::tree::{ItemContext, PointerEvent};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use treelist::{NodeKind, TreeNode};

use crate::actions::{COMPLETED_STATUS, actions_for};

const TITLE: &str = "Inspections  (arrows move, enter select, n/e/c/d actions, q quit)";

/// Rows above the tree body.
pub const HEADER_ROWS: u16 = 1;
/// Rows below the tree body.
pub const FOOTER_ROWS: u16 = 1;

/// A piece of a row, optionally clickable.
#[derive(Debug, Clone)]
pub struct Span {
    pub text: String,
    pub color: Color,
    pub bold: bool,
    pub on_click: Option<PointerEvent>,
}

impl Span {
    fn plain(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
            on_click: None,
        }
    }

    fn clickable(text: impl Into<String>, color: Color, event: PointerEvent) -> Self {
        Self {
            on_click: Some(event),
            ..Self::plain(text, color)
        }
    }
}

/// One rendered tree row.
#[derive(Debug, Clone)]
pub struct Row {
    pub focused: bool,
    pub on_click: PointerEvent,
    pub spans: Vec<Span>,
}

impl Row {
    /// Event for a click at `column`. Falls back to a plain row click.
    pub fn hit(&self, column: u16) -> PointerEvent {
        let mut start = 0usize;
        for span in &self.spans {
            let end = start + span.text.width();
            if (start..end).contains(&(column as usize)) {
                if let Some(event) = &span.on_click {
                    return event.clone();
                }
                break;
            }
            start = end;
        }
        self.on_click.clone()
    }
}

/// Longest prefix of `text` that fits in `max_width` terminal columns.
fn clip(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (index, ch) in text.char_indices() {
        width += ch.width().unwrap_or(0);
        if width > max_width {
            return &text[..index];
        }
    }
    text
}

fn badge(kind: NodeKind) -> (&'static str, Color) {
    match kind {
        NodeKind::MaintenanceEvent => ("EV", Color::Magenta),
        NodeKind::SubEvent => ("SE", Color::Blue),
        NodeKind::InspectionGroup => ("IG", Color::Cyan),
        NodeKind::Inspection => ("IN", Color::Green),
    }
}

fn status_color(status: &str) -> Color {
    match status {
        COMPLETED_STATUS => Color::Green,
        "in-progress" => Color::Yellow,
        _ => Color::DarkGrey,
    }
}

/// Render contract for [`TreeNode`] rows.
pub fn render_row(node: &TreeNode, cx: &ItemContext<'_>) -> Row {
    let mut spans = vec![Span::plain("  ".repeat(cx.level as usize), Color::Reset)];

    if cx.has_children {
        let marker = if cx.is_expanded { "[-] " } else { "[+] " };
        spans.push(Span::clickable(marker, Color::Yellow, cx.on_toggle_expand()));
    } else {
        spans.push(Span::plain("    ", Color::Reset));
    }

    if cx.multi_select {
        let marker = if cx.is_selected { "[x] " } else { "[ ] " };
        spans.push(Span::clickable(marker, Color::White, cx.on_toggle_select()));
    }

    let (tag, color) = badge(node.kind);
    spans.push(Span::plain(format!("{tag} "), color));
    spans.push(Span {
        bold: cx.is_focused,
        ..Span::plain(node.title.clone(), Color::Reset)
    });
    if !node.status.is_empty() {
        spans.push(Span::plain(
            format!(" ({})", node.status),
            status_color(&node.status),
        ));
    }
    for (action, label) in actions_for(node) {
        spans.push(Span::plain(" ", Color::Reset));
        spans.push(Span::clickable(
            format!("[{label}]"),
            Color::DarkGrey,
            cx.on_action(action),
        ));
    }

    Row {
        focused: cx.is_focused,
        on_click: cx.on_click(),
        spans,
    }
}

/// Draw the header, the visible window of rows and the status line.
pub fn draw(
    out: &mut impl Write,
    rows: &[Row],
    first: usize,
    width: u16,
    height: u16,
    status: &str,
) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print(clip(TITLE, width as usize)),
        SetAttribute(Attribute::Reset)
    )?;

    let body = height.saturating_sub(HEADER_ROWS + FOOTER_ROWS) as usize;
    for (offset, row) in rows.iter().skip(first).take(body).enumerate() {
        queue!(out, MoveTo(0, HEADER_ROWS + offset as u16))?;
        let mut remaining = width as usize;
        for span in &row.spans {
            if remaining == 0 {
                break;
            }
            let text = clip(&span.text, remaining);
            remaining -= text.width();
            if text.len() < span.text.len() {
                remaining = 0;
            }
            queue!(out, SetForegroundColor(span.color))?;
            if row.focused {
                queue!(out, SetAttribute(Attribute::Reverse))?;
            }
            if span.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            queue!(out, Print(text), SetAttribute(Attribute::Reset), ResetColor)?;
        }
    }

    queue!(
        out,
        MoveTo(0, height.saturating_sub(FOOTER_ROWS)),
        SetForegroundColor(Color::DarkGrey),
        Print(clip(status, width as usize)),
        ResetColor
    )?;
    out.flush()
}
