//! Draws a [`GridFrame`] with ratatui.
//!
//! The frame is already resolved (visible columns, indicators, row actions,
//! footer variant); this module only lays it out.

use std::ops::Range;

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::grid::{
    GridBody, GridFrame, HeaderCell, LayoutMode, PaginationFooter, RowAction, Toolbar,
};
use crate::ui::theme::{
    action_color, status_color, ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
};

const STATUS_RAIL_WIDTH: u16 = 1;
/// Room assumed for a column without a width hint when fitting the window.
const MIN_FLEX_WIDTH: u16 = 10;
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Per-draw inputs that are not part of the frame itself.
#[derive(Debug, Clone, Copy)]
pub struct GridViewContext {
    pub selected: usize,
    pub search_focused: bool,
    pub animation_tick: u8,
    /// First data column drawn between the rails.
    pub column_offset: usize,
}

pub fn render_toolbar(frame: &mut Frame, area: Rect, grid: &GridFrame, ctx: GridViewContext) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let toolbar = &grid.toolbar;
    let title = Span::styled(
        format!(" {} ", toolbar.title),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    );
    let right = right_controls(toolbar, ctx.animation_tick);

    // Both modes draw one row: title, search, right group. Mobile drops the
    // wide separator so the search box gets the flex space.
    let separator = match grid.mode {
        LayoutMode::Desktop => "  ",
        LayoutMode::Mobile => " ",
    };
    let right_width = Line::from(right.clone()).width() as u16;
    let mut spans = vec![title];
    if let Some(search) = &toolbar.search {
        let used = Line::from(spans.clone()).width() as u16 + separator.len() as u16;
        let room = inner.width.saturating_sub(used + right_width + 1);
        spans.push(Span::raw(separator));
        spans.push(search_span(
            &search.query,
            search.width.min(room),
            ctx.search_focused,
        ));
    }
    let used = Line::from(spans.clone()).width() as u16;
    let gap = inner.width.saturating_sub(used + right_width);
    spans.push(Span::raw(" ".repeat(gap as usize)));
    spans.extend(right);
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn right_controls(toolbar: &Toolbar, tick: u8) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    if let Some(refresh) = toolbar.refresh {
        let icon = if refresh.busy {
            SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
        } else {
            "↻"
        };
        spans.push(Span::styled(
            format!("{icon} Refresh "),
            Style::default().fg(HEADER_TEXT),
        ));
    }
    if toolbar.export {
        spans.push(Span::styled("⇩ Export ", Style::default().fg(HEADER_TEXT)));
    }
    if toolbar.column_selector {
        spans.push(Span::styled("☰ Columns ", Style::default().fg(HEADER_TEXT)));
    }
    spans
}

fn search_span(query: &str, width: u16, focused: bool) -> Span<'static> {
    let inner = (width as usize).saturating_sub(3);
    let text = if query.is_empty() && !focused {
        truncate("Search…", inner)
    } else {
        truncate(query, inner)
    };
    let padding = inner.saturating_sub(text.width());
    let style = if focused {
        Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    Span::styled(format!("⌕ {text}{} ", " ".repeat(padding)), style)
}

pub fn render_table(frame: &mut Frame, area: Rect, grid: &GridFrame, ctx: GridViewContext) {
    let window = column_window(grid, area.width, ctx.column_offset);
    let widths = column_widths(grid, window.clone());
    let header = header_row(grid, window.clone());

    match &grid.body {
        GridBody::Rows(rows) => {
            let rows = rows.iter().map(|row| {
                let mut cells = Vec::with_capacity(grid.column_span());
                if grid.has_status_rail {
                    let color = row.status.map(status_color).unwrap_or(MUTED_TEXT);
                    cells.push(Cell::from(Span::styled("▌", Style::default().fg(color))));
                }
                cells.extend(
                    row.cells[window.clone()]
                        .iter()
                        .zip(&grid.header[window.clone()])
                        .map(|(text, head)| {
                            let text = match head.width {
                                Some(w) => truncate(text, w as usize),
                                None => text.clone(),
                            };
                            Cell::from(text)
                        }),
                );
                if grid.has_action_rail {
                    cells.push(Cell::from(action_line(&row.actions)));
                }
                Row::new(cells).style(Style::default().fg(HEADER_TEXT))
            });

            let table = Table::new(rows, widths)
                .header(header)
                .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
                .column_spacing(1);
            let mut state = TableState::default().with_selected(Some(ctx.selected));
            frame.render_stateful_widget(table, area, &mut state);
        }
        GridBody::Empty { message, .. } => {
            let table = Table::new(Vec::<Row>::new(), widths)
                .header(header)
                .column_spacing(1);
            frame.render_widget(table, area);
            // One row spanning every column, rails included.
            if area.height > 2 {
                let message_area = Rect {
                    y: area.y + 2,
                    height: 1,
                    ..area
                };
                frame.render_widget(
                    Paragraph::new(Span::styled(message.as_str(), Style::default().fg(MUTED_TEXT)))
                        .alignment(Alignment::Center),
                    message_area,
                );
            }
        }
    }
}

/// Data columns drawn between the pinned rails. The window starts at
/// `offset` (clamped to the last column) and takes columns while their width
/// hints fit; the first one is always drawn.
pub fn column_window(grid: &GridFrame, width: u16, offset: usize) -> Range<usize> {
    let start = offset.min(grid.header.len().saturating_sub(1));
    let mut budget = width.saturating_sub(rails_width(grid));
    let mut end = start;
    for head in &grid.header[start..] {
        let cost = head.width.unwrap_or(MIN_FLEX_WIDTH).saturating_add(1);
        if end > start && cost > budget {
            break;
        }
        budget = budget.saturating_sub(cost);
        end += 1;
    }
    start..end
}

/// Both rails plus their column spacing.
fn rails_width(grid: &GridFrame) -> u16 {
    let status = if grid.has_status_rail {
        STATUS_RAIL_WIDTH + 1
    } else {
        0
    };
    let actions = if grid.has_action_rail {
        action_rail_width(grid) + 1
    } else {
        0
    };
    status + actions
}

fn action_rail_width(grid: &GridFrame) -> u16 {
    let widest = match &grid.body {
        GridBody::Rows(rows) => rows
            .iter()
            .map(|row| action_line(&row.actions).width())
            .max()
            .unwrap_or(0),
        GridBody::Empty { .. } => 0,
    };
    widest.max("Actions".len()) as u16
}

fn column_widths(grid: &GridFrame, window: Range<usize>) -> Vec<Constraint> {
    let mut widths = Vec::with_capacity(grid.column_span());
    if grid.has_status_rail {
        widths.push(Constraint::Length(STATUS_RAIL_WIDTH));
    }
    widths.extend(grid.header[window].iter().map(|head| match head.width {
        Some(width) => Constraint::Length(width),
        None => Constraint::Fill(1),
    }));
    if grid.has_action_rail {
        widths.push(Constraint::Length(action_rail_width(grid)));
    }
    widths
}

fn header_row(grid: &GridFrame, window: Range<usize>) -> Row<'static> {
    let mut cells = Vec::with_capacity(grid.column_span());
    if grid.has_status_rail {
        cells.push(Cell::from(""));
    }
    // Shortcut numbers follow the full column list, not the window.
    cells.extend(
        grid.header
            .iter()
            .enumerate()
            .skip(window.start)
            .take(window.len())
            .map(|(i, head)| header_cell(i, head)),
    );
    if grid.has_action_rail {
        cells.push(Cell::from("Actions"));
    }
    Row::new(cells)
        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD))
        .bottom_margin(1)
}

/// Header label with its shortcut number and sort glyph.
fn header_cell(index: usize, head: &HeaderCell) -> Cell<'static> {
    let mut spans = Vec::new();
    if index < 9 && head.sortable {
        spans.push(Span::styled(
            format!("{} ", index + 1),
            Style::default().fg(MUTED_TEXT),
        ));
    }
    spans.push(Span::raw(head.title.clone()));
    if let Some(indicator) = head.indicator {
        spans.push(Span::styled(
            format!(" {}", indicator.glyph()),
            Style::default().fg(ACCENT),
        ));
    }
    Cell::from(Line::from(spans))
}

fn action_line(actions: &[RowAction]) -> Line<'static> {
    let spans = actions
        .iter()
        .flat_map(|action| {
            [
                Span::styled(
                    format!("{} {}", action.icon, action.label),
                    Style::default().fg(action_color(action.variant)),
                ),
                Span::raw(" "),
            ]
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

pub fn render_pagination(frame: &mut Frame, area: Rect, footer: &PaginationFooter) {
    let enabled = Style::default().fg(HEADER_TEXT);
    let disabled = Style::default().fg(MUTED_TEXT);
    let pick = |on: bool| if on { enabled } else { disabled };

    let lines = match footer {
        PaginationFooter::Desktop {
            controls,
            range_label,
            page_size,
        } => {
            let mut spans = vec![
                Span::styled(" « ", pick(controls.first_enabled)),
                Span::styled("‹ ", pick(controls.prev_enabled)),
            ];
            for page in &controls.pages {
                let style = if *page == controls.current_page {
                    Style::default()
                        .fg(HEADER_TEXT)
                        .bg(ACCENT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    enabled
                };
                spans.push(Span::styled(format!(" {page} "), style));
            }
            spans.push(Span::styled(" ›", pick(controls.next_enabled)));
            spans.push(Span::styled(" » ", pick(controls.last_enabled)));
            spans.push(Span::styled(
                format!("   {range_label}   Rows per page: {page_size}"),
                disabled,
            ));
            vec![Line::from(spans)]
        }
        PaginationFooter::Mobile {
            range_label,
            prev_enabled,
            next_enabled,
            current_page,
            total_pages,
        } => vec![
            Line::from(Span::styled(format!(" {range_label}"), disabled)),
            Line::from(vec![
                Span::styled(" ‹ Prev ", pick(*prev_enabled)),
                Span::styled(format!(" {current_page} / {total_pages} "), enabled),
                Span::styled(" Next › ", pick(*next_enabled)),
            ]),
        ],
    };
    frame.render_widget(Paragraph::new(lines), area);
}

/// Cut `text` to at most `max` display cells, marking the cut with "…".
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{
        CellValue, Column, DataGrid, GridInput, GridIntent, GridLayoutNegotiator, GridReducer,
        GridViewState, LayoutMetrics, PageRequest, SortState, StatusTone,
    };
    use crate::ui::mvi::Reducer;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn wide_grid() -> DataGrid<u32> {
        let columns = (0..8)
            .map(|i| {
                Column::new(format!("c{i}"), format!("Col {i}"), move |r: &u32| {
                    CellValue::Integer(i64::from(*r) * 10 + i)
                })
                .sortable()
                .width(20)
            })
            .collect();
        DataGrid::new("Units", columns).status_color(|_| StatusTone::Active)
    }

    fn frame_for(grid: &DataGrid<u32>, state: &GridViewState) -> GridFrame {
        let data = [1u32, 2];
        let rows = data.iter().collect::<Vec<_>>();
        let sort = SortState::default();
        grid.frame(
            GridInput {
                records: &rows,
                sort: &sort,
                page: PageRequest::new(1, 10, rows.len()),
                search: "",
            },
            state,
            Instant::now(),
        )
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    fn ctx(column_offset: usize) -> GridViewContext {
        GridViewContext {
            selected: 0,
            search_focused: false,
            animation_tick: 0,
            column_offset,
        }
    }

    #[test]
    fn mobile_toolbar_is_one_row() {
        let grid = wide_grid();
        let state = GridReducer::reduce(
            grid.initial_state(32),
            GridIntent::HeaderResized {
                width: 60,
                negotiator: GridLayoutNegotiator::new(LayoutMetrics::default()),
            },
        );
        assert_eq!(state.layout_mode, LayoutMode::Mobile);
        let grid_frame = frame_for(&grid, &state);

        let mut terminal = Terminal::new(TestBackend::new(62, 3)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_toolbar(f, area, &grid_frame, ctx(0));
            })
            .unwrap();

        let row = row_text(&terminal, 1);
        let title = row.find("Units").unwrap();
        let search = row.find("Search").unwrap();
        let refresh = row.find("Refresh").unwrap();
        assert!(title < search && search < refresh, "{row}");
        assert!(row.contains("Columns"), "{row}");
    }

    #[test]
    fn column_window_fits_width_hints() {
        let grid = wide_grid();
        let grid_frame = frame_for(&grid, &grid.initial_state(32));
        // 80 cells minus the status rail (2) and the action-less grid.
        assert!(!grid_frame.has_action_rail);
        assert_eq!(column_window(&grid_frame, 80, 0), 0..3);
        assert_eq!(column_window(&grid_frame, 80, 2), 2..5);
        assert_eq!(column_window(&grid_frame, 80, 6), 6..8);
        // Past the end the last column stays on screen.
        assert_eq!(column_window(&grid_frame, 80, 40), 7..8);
        // A too-narrow area still draws one column.
        assert_eq!(column_window(&grid_frame, 10, 1), 1..2);
    }

    #[test]
    fn scrolled_table_keeps_rails_and_shortcuts() {
        let grid = wide_grid();
        let grid_frame = frame_for(&grid, &grid.initial_state(32));
        let mut terminal = Terminal::new(TestBackend::new(80, 6)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_table(f, area, &grid_frame, ctx(2));
            })
            .unwrap();

        let header = row_text(&terminal, 0);
        assert!(header.contains("3 Col 2"), "{header}");
        assert!(header.contains("5 Col 4"), "{header}");
        assert!(!header.contains("Col 1"), "{header}");
        assert!(!header.contains("Col 5"), "{header}");
        assert!(row_text(&terminal, 2).starts_with('▌'));
    }

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Secretaria", 6), "Secre…");
        // Wide glyphs count double.
        assert_eq!(truncate("日本語テキスト", 5), "日本…");
        assert_eq!(truncate("abc", 0), "");
    }
}
