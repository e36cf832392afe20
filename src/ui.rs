//! Terminal UI rendering for the hashtag demo.
//!
//! Renders from `RenderState` (immutable snapshot) and never mutates
//! application state.
//!
//! Layout, top to bottom:
//! - title
//! - editor box: tag chips `#tag ×`, then the entry surface (absent while the
//!   limit is reached)
//! - advisory on the left, `n / max tags used` on the right
//! - tip line, JSON output line, keymap line

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::editor::Focus;
use crate::render::RenderState;

// Color tokens (focus uses REVERSED modifier to adapt to terminal theme)
const COLOR_TEXT_DIMMED: Color = Color::Gray;
const COLOR_TEXT_MUTED: Color = Color::DarkGray;
const COLOR_CHIP_BG: Color = Color::DarkGray;
const COLOR_ERROR: Color = Color::Red;

pub const PLACEHOLDER: &str = "Type and press enter...";
const TITLE: &str = "Hashtag Input";
const REMOVE_MARK: &str = "×";

/// Context for determining which keybindings to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapContext {
    /// Typing into the entry surface
    Entry,
    /// Entry surface withdrawn because the limit is reached
    LimitReached,
    /// A tag chip has focus
    Chip,
}

impl KeymapContext {
    pub fn from_render_state(state: &RenderState) -> Self {
        match state.focus {
            Focus::Chip(_) => KeymapContext::Chip,
            Focus::Entry if state.limit_reached => KeymapContext::LimitReached,
            Focus::Entry => KeymapContext::Entry,
        }
    }
}

/// A single keybinding entry for display.
struct Keybinding(&'static str, &'static str);

/// A group of related keybindings (separated by │).
struct KeybindingGroup(Vec<Keybinding>);

fn keybindings_for_context(ctx: KeymapContext) -> Vec<KeybindingGroup> {
    let quit = KeybindingGroup(vec![Keybinding("Esc", "quit")]);
    match ctx {
        KeymapContext::Entry => vec![
            KeybindingGroup(vec![Keybinding("a-z", "type")]),
            KeybindingGroup(vec![
                Keybinding("←", "tags"),
                Keybinding("Backspace", "remove last"),
            ]),
            quit,
        ],
        KeymapContext::LimitReached => vec![
            KeybindingGroup(vec![
                Keybinding("←", "tags"),
                Keybinding("Backspace", "remove last"),
            ]),
            quit,
        ],
        KeymapContext::Chip => vec![
            KeybindingGroup(vec![Keybinding("←/→", "move"), Keybinding("Del", "remove")]),
            KeybindingGroup(vec![Keybinding("Esc", "back")]),
        ],
    }
}

/// Main render function - entry point for all UI drawing.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(1),
        Constraint::Min(3), // editor box
        Constraint::Length(1), // advisory + usage
        Constraint::Length(1),
        Constraint::Length(1), // tip
        Constraint::Length(1), // output
        Constraint::Length(1), // keymap
    ])
    .split(area);

    let title = Line::from(Span::styled(
        TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(title), chunks[0]);

    render_editor(frame, state, chunks[2]);
    frame.render_widget(Paragraph::new(status_line(state, chunks[3].width)), chunks[3]);

    let tip = Line::from(Span::styled(
        state.tip(),
        Style::default().fg(COLOR_TEXT_DIMMED),
    ));
    frame.render_widget(Paragraph::new(tip), chunks[5]);

    let output = Line::from(vec![
        Span::styled("Output: ", Style::default().fg(COLOR_TEXT_DIMMED)),
        Span::raw(state.output.clone()),
    ]);
    frame.render_widget(Paragraph::new(output), chunks[6]);

    frame.render_widget(Paragraph::new(keymap_line(state)), chunks[7]);
}

/// Render the bordered editor box.
fn render_editor(frame: &mut Frame, state: &RenderState, area: Rect) {
    // Muted border mirrors the withdrawn entry surface.
    let border_color = if state.limit_reached {
        COLOR_TEXT_MUTED
    } else {
        COLOR_TEXT_DIMMED
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(editor_lines(state, inner.width)), inner);
}

/// Chips followed by the entry surface, packed into lines of `width`.
fn editor_lines(state: &RenderState, width: u16) -> Vec<Line<'static>> {
    let mut units: Vec<Vec<Span<'static>>> = state
        .tags
        .iter()
        .enumerate()
        .map(|(idx, tag)| chip_spans(tag, state.focus == Focus::Chip(idx)))
        .collect();

    if !state.limit_reached {
        units.push(entry_spans(state));
    }

    pack(units, width as usize)
}

fn chip_spans(tag: &str, focused: bool) -> Vec<Span<'static>> {
    let style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().bg(COLOR_CHIP_BG)
    };
    vec![
        Span::styled(format!(" #{tag} "), style),
        Span::styled(format!("{REMOVE_MARK} "), style.fg(COLOR_TEXT_DIMMED)),
    ]
}

fn entry_spans(state: &RenderState) -> Vec<Span<'static>> {
    let cursor_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::SLOW_BLINK);
    let has_cursor = state.focus == Focus::Entry;

    let mut spans = Vec::with_capacity(2);
    if !state.pending.is_empty() {
        spans.push(Span::styled(
            state.pending.clone(),
            Style::default().fg(Color::White),
        ));
    }
    if has_cursor {
        spans.push(Span::styled("_", cursor_style));
    }
    if state.pending.is_empty() {
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default().fg(COLOR_TEXT_MUTED),
        ));
    }
    spans
}

/// Greedy line packing. Units are never split; a unit wider than `width`
/// gets a line of its own and is clipped by the paragraph.
fn pack(units: Vec<Vec<Span<'static>>>, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for unit in units {
        let unit_width: usize = unit.iter().map(Span::width).sum();
        if used > 0 && used + 1 + unit_width > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        if used > 0 {
            current.push(Span::raw(" "));
            used += 1;
        }
        current.extend(unit);
        used += unit_width;
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

pub fn usage_style(state: &RenderState) -> Style {
    if state.limit_reached {
        Style::default().fg(COLOR_ERROR)
    } else {
        Style::default().fg(COLOR_TEXT_MUTED)
    }
}

/// Advisory on the left, usage counter right-aligned.
fn status_line(state: &RenderState, width: u16) -> Line<'static> {
    let mut spans: Vec<Span> = Vec::new();

    if let Some(ref advisory) = state.advisory {
        spans.push(Span::styled(
            advisory.clone(),
            Style::default().fg(COLOR_ERROR),
        ));
    }

    if let Some(usage) = state.usage_label() {
        let content_width: usize = spans.iter().map(Span::width).sum();
        let spacer_width = (width as usize)
            .saturating_sub(content_width)
            .saturating_sub(usage.chars().count());
        // Keep at least one space between advisory and counter.
        let spacer_width = if content_width > 0 {
            spacer_width.max(1)
        } else {
            spacer_width
        };
        if spacer_width > 0 {
            spans.push(Span::raw(" ".repeat(spacer_width)));
        }
        spans.push(Span::styled(usage, usage_style(state)));
    }

    Line::from(spans)
}

fn keymap_line(state: &RenderState) -> Line<'static> {
    let ctx = KeymapContext::from_render_state(state);
    let key_style = Style::default().fg(COLOR_TEXT_DIMMED);
    let desc_style = Style::default().fg(COLOR_TEXT_MUTED);
    let sep_style = Style::default().fg(COLOR_TEXT_MUTED);

    let mut spans: Vec<Span> = Vec::new();
    for group in keybindings_for_context(ctx) {
        if !spans.is_empty() {
            spans.push(Span::styled(" │ ", sep_style));
        }
        for (key_idx, keybinding) in group.0.iter().enumerate() {
            if key_idx > 0 {
                spans.push(Span::styled(" • ", sep_style));
            }
            spans.push(Span::styled(keybinding.0, key_style));
            spans.push(Span::styled(format!(" {}", keybinding.1), desc_style));
        }
    }
    Line::from(spans)
}
