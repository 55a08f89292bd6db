//! Dialog rendering for the mutation flow.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::flow::{ActiveModal, ConfirmationKind};
use crate::ui::layout::centered_rect;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK,
};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const DIALOG_WIDTH: u16 = 54;

fn dialog_height(modal: &ActiveModal) -> u16 {
    match modal {
        ActiveModal::Confirmation(_) => 8,
        ActiveModal::Processing { .. } => 5,
        ActiveModal::Success { .. } => 6,
    }
}

fn dialog_title(modal: &ActiveModal) -> &'static str {
    match modal {
        ActiveModal::Confirmation(_) => " Confirm ",
        ActiveModal::Processing { .. } => " Working ",
        ActiveModal::Success { .. } => " Done ",
    }
}

/// Render the one dialog the flow resolved to.
pub fn render_flow_dialog(frame: &mut Frame, modal: &ActiveModal, animation_tick: u8) {
    let area = centered_rect(DIALOG_WIDTH, dialog_height(modal), frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(dialog_title(modal))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match modal {
        ActiveModal::Confirmation(confirmation) => {
            let accent = match confirmation.kind {
                ConfirmationKind::Inactivate => STATUS_ERROR,
                ConfirmationKind::Reactivate => STATUS_OK,
            };
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {}", confirmation.title),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {}", confirmation.description),
                    Style::default().fg(HEADER_TEXT),
                )),
                Line::from(""),
                render_buttons(),
            ];
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
        }
        ActiveModal::Processing { message } => {
            render_progress(frame, inner, message, animation_tick);
        }
        ActiveModal::Success { message } => {
            let lines = vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("  ✓ ", Style::default().fg(STATUS_OK)),
                    Span::styled(message.as_str(), Style::default().fg(HEADER_TEXT)),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    "  Enter: OK",
                    Style::default().fg(MUTED_TEXT),
                )),
            ];
            frame.render_widget(Paragraph::new(lines), inner);
        }
    }
}

fn render_progress(frame: &mut Frame, area: Rect, message: &str, animation_tick: u8) {
    let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled(message, Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(Span::styled("  Esc: dismiss", Style::default().fg(MUTED_TEXT))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// The Yes/No row, "No" highlighted.
fn render_buttons() -> Line<'static> {
    let highlighted = Style::default()
        .fg(HEADER_TEXT)
        .bg(ACTIVE_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::raw("          "),
        Span::styled(" [Y]es ", Style::default().fg(HEADER_TEXT)),
        Span::raw("    "),
        Span::styled(" [N]o ", highlighted),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_height_varies_by_modal() {
        assert_eq!(
            dialog_height(&ActiveModal::Processing {
                message: "Saving".into()
            }),
            5
        );
        assert_eq!(
            dialog_height(&ActiveModal::Success {
                message: "Saved".into()
            }),
            6
        );
    }
}
