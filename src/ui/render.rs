use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use unicode_width::UnicodeWidthStr;

use crate::console::{FormMode, FormState, Notice};
use crate::ui::app::{App, InputMode};
use crate::ui::column_picker::render_column_picker;
use crate::ui::flow_dialog::render_flow_dialog;
use crate::ui::grid_view::{
    render_pagination, render_table, render_toolbar, truncate, GridViewContext,
};
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK,
};

const FORM_WIDTH: u16 = 50;

const HELP: &str =
    " /: search  ←/→: page  [/]: size  </>: scroll  1-9: sort  c: columns  r: refresh  e: export  n: new  Enter: edit  d: (de)activate  q: quit";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let page = app.page();
    let grid = page.frame(Instant::now());
    let regions = layout_regions(frame.area(), grid.mode);
    let ctx = GridViewContext {
        selected: page.selected(),
        search_focused: app.mode() == InputMode::Search,
        animation_tick: app.animation_tick(),
        column_offset: page.column_offset(),
    };

    render_toolbar(frame, regions.toolbar, &grid, ctx);
    render_table(frame, regions.table, &grid, ctx);
    if let Some(footer) = &grid.footer {
        render_pagination(frame, regions.pagination, footer);
    }
    render_status_line(frame, regions.status, page.notice());

    render_column_picker(frame, page.grid().columns(), page.grid_state());
    if let Some(form) = page.form() {
        render_form(frame, form, page.entity());
    }
    // Flow dialogs sit on top of the form they were started from.
    if let Some(modal) = page.active_modal() {
        render_flow_dialog(frame, &modal, app.animation_tick());
    }
}

fn render_status_line(frame: &mut Frame<'_>, area: Rect, notice: Option<&Notice>) {
    let width = area.width;
    let line = match notice {
        Some(notice) => {
            let color = if notice.is_error { STATUS_ERROR } else { STATUS_OK };
            Line::from(Span::styled(
                format!(" {}", truncate(&notice.text, width as usize)),
                Style::default().fg(color),
            ))
        }
        None => Line::from(Span::styled(
            truncate(HELP, width as usize),
            Style::default().fg(MUTED_TEXT),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_form(frame: &mut Frame<'_>, form: &FormState, entity: &str) {
    let title = match &form.mode {
        FormMode::Create => format!(" New {entity} "),
        FormMode::Edit { id } => format!(" Edit {entity} #{id} "),
    };
    let field_width = FORM_WIDTH.saturating_sub(6) as usize;
    let value = truncate(&form.value, field_width.saturating_sub(1));
    let padding = field_width.saturating_sub(value.width());

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Name", Style::default().fg(HEADER_TEXT))),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{value}▏{}", " ".repeat(padding.saturating_sub(1))),
                Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT),
            ),
        ]),
    ];
    match &form.error {
        Some(error) => lines.push(Line::from(Span::styled(
            format!("  {error}"),
            Style::default().fg(STATUS_ERROR),
        ))),
        None => lines.push(Line::from("")),
    }
    lines.push(Line::from(Span::styled(
        "  Enter: save  Esc: cancel",
        Style::default().fg(MUTED_TEXT),
    )));

    let area = centered_rect(FORM_WIDTH, lines.len() as u16 + 2, frame.area());
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
