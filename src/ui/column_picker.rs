//! Column visibility popup.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::grid::{Column, GridViewState, PickerState};
use crate::ui::layout::centered_rect;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};

pub fn render_column_picker<R>(frame: &mut Frame, columns: &[Column<R>], state: &GridViewState) {
    let PickerState::Open { cursor } = state.picker else {
        return;
    };

    let mut lines = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let mark = if state.visibility.is_visible(column.key()) {
                "[x]"
            } else {
                "[ ]"
            };
            let line = Line::from(vec![
                Span::styled(format!(" {mark} "), Style::default().fg(ACCENT)),
                Span::styled(column.title().to_string(), Style::default().fg(HEADER_TEXT)),
            ]);
            if i == cursor {
                line.style(
                    Style::default()
                        .bg(ACTIVE_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                line
            }
        })
        .collect::<Vec<_>>();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Space: toggle  a: show all  Esc: close",
        Style::default().fg(MUTED_TEXT),
    )));

    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 4;
    let height = lines.len() as u16 + 2;
    let area = centered_rect(width, height, frame.area());

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(" Columns ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
