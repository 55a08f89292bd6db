//! View-model for one entity screen.
//!
//! Owns everything the grid does not: the records, search text, sort, current
//! page and the mutation flow. Grid gestures arrive as [`GridEvent`]s; work
//! that leaves the page (mutations, reloads, exports) is returned as a
//! [`PageCommand`] for the runtime to execute.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::Config;
use crate::flow::{ActiveModal, FlowKind, FlowTicket, MutationFlow, MutationFlowState};
use crate::grid::{
    column_keys, ColumnVisibility, DataGrid, GridEvent, GridFrame, GridInput, GridIntent, GridLayoutNegotiator, GridReducer,
    GridViewState, PageNav, PageRequest, SearchPredicate, SortComparator, SortDirection,
    SortState,
};
use crate::ui::mvi::Reducer;

use super::record::DynamicRecord;
use super::schema::{build_grid, ACTION_EDIT, ACTION_INACTIVATE, ACTION_REACTIVATE};
use super::store::{Mutation, MutationError};

/// Work the page hands to the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum PageCommand {
    RunMutation {
        ticket: FlowTicket,
        mutation: Mutation,
    },
    Reload,
    Export {
        records: Vec<DynamicRecord>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// The single-field create/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub mode: FormMode,
    pub value: String,
    pub error: Option<String>,
}

/// Transient status line, the console's toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

/// Record awaiting a yes/no on (de)activation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingToggle {
    id: String,
    activate: bool,
}

pub struct EntityPage {
    /// Kept to infer columns once records show up.
    config: Config,
    entity: String,
    id_field: String,
    status_field: String,
    name_field: String,
    page_size_options: Vec<usize>,
    grid: DataGrid<DynamicRecord>,
    grid_state: GridViewState,
    negotiator: GridLayoutNegotiator,
    refresh_hold: Duration,
    records: Vec<DynamicRecord>,
    search: String,
    sort: SortState,
    page: usize,
    page_size: usize,
    selected: usize,
    column_offset: usize,
    flow: MutationFlow,
    pending_toggle: Option<PendingToggle>,
    form: Option<FormState>,
    notice: Option<Notice>,
}

impl EntityPage {
    pub fn new(config: &Config, records: Vec<DynamicRecord>) -> Self {
        let grid = build_grid(config, records.first());
        let grid_state = grid.initial_state(config.layout.default_search_width);
        Self {
            config: config.clone(),
            entity: config.screen.entity.clone(),
            id_field: config.screen.id_field.clone(),
            status_field: config.screen.status_field.clone(),
            name_field: config.screen.name_field.clone(),
            page_size_options: config.grid.page_size_options.clone(),
            grid,
            grid_state,
            negotiator: GridLayoutNegotiator::new(config.layout),
            refresh_hold: Duration::from_millis(config.refresh.spinner_ms),
            records,
            search: String::new(),
            sort: SortState::default(),
            page: 1,
            page_size: config.grid.page_size,
            selected: 0,
            column_offset: 0,
            flow: MutationFlow::new(config.screen.entity.clone(), config.flow.clone()),
            pending_toggle: None,
            form: None,
            notice: None,
        }
    }

    // ========================================================================
    // Derived view
    // ========================================================================

    /// Records after search and sort, before paging.
    pub fn filtered(&self) -> Vec<&DynamicRecord> {
        let columns = self.grid.columns();
        let mut rows = SearchPredicate::new(&self.search).filter(&self.records, columns);
        if let Some(comparator) = SortComparator::from_state(columns, &self.sort) {
            let comparator = match columns.iter().find(|c| c.key() == self.id_field) {
                Some(id) if self.sort.key.as_deref() != Some(id.key()) => {
                    comparator.then_by(id, SortDirection::Asc)
                }
                _ => comparator,
            };
            comparator.sort(&mut rows);
        }
        rows
    }

    /// Pagination for the current view, clamped into range.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size, self.filtered().len()).clamped()
    }

    /// The rows on screen.
    pub fn visible(&self) -> Vec<&DynamicRecord> {
        let rows = self.filtered();
        let range = self.page_request().range();
        rows[range].to_vec()
    }

    pub fn frame(&self, now: Instant) -> GridFrame {
        let rows = self.visible();
        self.grid.frame(
            GridInput {
                records: &rows,
                sort: &self.sort,
                page: self.page_request(),
                search: &self.search,
            },
            &self.grid_state,
            now,
        )
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn records(&self) -> &[DynamicRecord] {
        &self.records
    }

    pub fn grid(&self) -> &DataGrid<DynamicRecord> {
        &self.grid
    }

    pub fn grid_state(&self) -> &GridViewState {
        &self.grid_state
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn current_page(&self) -> usize {
        self.page_request().current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// First data column on screen, clamped to the visible columns.
    pub fn column_offset(&self) -> usize {
        self.column_offset
            .min(self.grid_state.visibility.visible_count().saturating_sub(1))
    }

    pub fn flow_state(&self) -> &MutationFlowState {
        self.flow.state()
    }

    pub fn active_modal(&self) -> Option<ActiveModal> {
        self.flow.active_modal()
    }

    pub fn form(&self) -> Option<&FormState> {
        self.form.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Row buttons and edits are blocked while a dialog is up.
    pub fn is_busy(&self) -> bool {
        !self.flow.state().is_idle()
    }

    // ========================================================================
    // Grid intents
    // ========================================================================

    /// Apply a grid request. Returns work for the runtime, if any.
    pub fn handle(&mut self, event: GridEvent) -> Option<PageCommand> {
        debug!(?event, "grid event");
        match event {
            GridEvent::Sort { key, direction } => {
                self.sort = SortState::new(key, direction);
                None
            }
            GridEvent::SearchChange(query) => {
                self.search = query;
                self.page = 1;
                self.selected = 0;
                None
            }
            GridEvent::PageChange(page) => {
                self.page = page;
                self.selected = 0;
                None
            }
            GridEvent::PageSizeChange(size) => {
                self.page_size = size;
                self.page = 1;
                self.selected = 0;
                None
            }
            GridEvent::Export => Some(PageCommand::Export {
                records: self.filtered().into_iter().cloned().collect(),
            }),
            GridEvent::Refresh => Some(PageCommand::Reload),
            GridEvent::VisibleColumnsChange(keys) => {
                debug!(?keys, "visible columns changed");
                None
            }
            GridEvent::RowAction { action, row } => self.run_row_action(action, row),
        }
    }

    pub fn click_header(&mut self, visible_index: usize) -> Option<PageCommand> {
        let key = self
            .grid_state
            .visibility
            .visible_keys()
            .into_iter()
            .nth(visible_index)?;
        let event = self.grid.click_header(&key, &self.sort)?;
        self.handle(event)
    }

    pub fn navigate(&mut self, nav: PageNav) -> Option<PageCommand> {
        let event = self.grid.navigate(self.page_request(), nav)?;
        self.handle(event)
    }

    /// Step through the configured page sizes.
    pub fn cycle_page_size(&mut self, forward: bool) -> Option<PageCommand> {
        let options = &self.page_size_options;
        let position = options.iter().position(|s| *s == self.page_size).unwrap_or(0);
        let next = if forward {
            options.get(position + 1)
        } else {
            position.checked_sub(1).and_then(|p| options.get(p))
        };
        let event = self.grid.change_page_size(*next?)?;
        self.handle(event)
    }

    pub fn set_search(&mut self, query: impl Into<String>) -> Option<PageCommand> {
        let event = self.grid.change_search(query)?;
        self.handle(event)
    }

    pub fn refresh(&mut self, now: Instant) -> Option<PageCommand> {
        let state = std::mem::take(&mut self.grid_state);
        let (state, event) = self.grid.click_refresh(state, now, self.refresh_hold);
        self.grid_state = state;
        self.handle(event?)
    }

    pub fn export(&mut self) -> Option<PageCommand> {
        let event = self.grid.click_export()?;
        self.handle(event)
    }

    pub fn toggle_column(&mut self, key: &str) -> Option<PageCommand> {
        let state = std::mem::take(&mut self.grid_state);
        let (state, event) = self.grid.toggle_column(state, key);
        self.grid_state = state;
        self.handle(event)
    }

    pub fn dispatch_grid(&mut self, intent: GridIntent) {
        self.grid_state = GridReducer::reduce(std::mem::take(&mut self.grid_state), intent);
    }

    pub fn picker_toggle(&mut self) -> Option<PageCommand> {
        let state = std::mem::take(&mut self.grid_state);
        let (state, event) = self.grid.picker_toggle(state);
        self.grid_state = state;
        self.handle(event?)
    }

    /// The toolbar was laid out at `width` cells.
    pub fn resize(&mut self, width: u16) {
        self.dispatch_grid(GridIntent::HeaderResized {
            width,
            negotiator: self.negotiator,
        });
    }

    pub fn tick(&mut self, now: Instant) {
        self.dispatch_grid(GridIntent::Tick { now });
    }

    /// Scroll the data columns one step sideways. The rails stay put.
    pub fn scroll_columns(&mut self, forward: bool) {
        let offset = self.column_offset();
        self.column_offset = if forward {
            offset + 1
        } else {
            offset.saturating_sub(1)
        };
        self.column_offset = self.column_offset();
    }

    pub fn move_selection(&mut self, down: bool) {
        let len = self.visible().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = if down {
            (self.selected + 1).min(len - 1)
        } else {
            self.selected.saturating_sub(1)
        };
    }

    /// Press a row button on the selected row.
    pub fn activate_selected(&mut self, action: &str) -> Option<PageCommand> {
        if self.is_busy() {
            return None;
        }
        let rows = self.visible();
        let event = self.grid.activate_action(&rows, self.selected, action)?;
        self.handle(event)
    }

    /// Deactivate or reactivate the selected row, whichever it offers.
    pub fn toggle_selected_status(&mut self) -> Option<PageCommand> {
        let active = self.visible().get(self.selected)?.flag(&self.status_field);
        let action = if active {
            ACTION_INACTIVATE
        } else {
            ACTION_REACTIVATE
        };
        self.activate_selected(action)
    }

    fn run_row_action(&mut self, action: &str, row: usize) -> Option<PageCommand> {
        let record = self.visible().get(row).copied()?.clone();
        let id = record.id(&self.id_field)?;
        match action {
            ACTION_EDIT => {
                let name = record.get(&self.name_field).to_string();
                self.form = Some(FormState {
                    mode: FormMode::Edit { id },
                    value: name,
                    error: None,
                });
                None
            }
            ACTION_INACTIVATE => {
                let title = format!("Deactivate {}?", record.get(&self.name_field));
                if self.flow.show_inactivate_confirmation(Some(title), None).is_applied() {
                    self.pending_toggle = Some(PendingToggle {
                        id,
                        activate: false,
                    });
                }
                None
            }
            ACTION_REACTIVATE => {
                let title = format!("Reactivate {}?", record.get(&self.name_field));
                if self.flow.show_reactivate_confirmation(Some(title), None).is_applied() {
                    self.pending_toggle = Some(PendingToggle { id, activate: true });
                }
                None
            }
            _ => None,
        }
    }

    // ========================================================================
    // Create / edit form
    // ========================================================================

    pub fn open_create_form(&mut self) {
        if self.is_busy() {
            return;
        }
        self.form = Some(FormState {
            mode: FormMode::Create,
            value: String::new(),
            error: None,
        });
    }

    pub fn form_input(&mut self, c: char) {
        if self.is_busy() {
            return;
        }
        if let Some(form) = &mut self.form {
            form.value.push(c);
            form.error = None;
        }
    }

    pub fn form_backspace(&mut self) {
        if self.is_busy() {
            return;
        }
        if let Some(form) = &mut self.form {
            form.value.pop();
        }
    }

    pub fn cancel_form(&mut self) {
        if !self.is_busy() {
            self.form = None;
        }
    }

    /// Validate and start the create/edit flow. Validation failures stay on
    /// the form and never reach the flow.
    pub fn submit_form(&mut self) -> Option<PageCommand> {
        if self.is_busy() {
            return None;
        }
        let form = self.form.as_mut()?;
        let name = form.value.trim().to_string();
        if name.is_empty() {
            form.error = Some(format!("The {} name is required", self.entity));
            return None;
        }
        let (mutation, transition) = match &form.mode {
            FormMode::Create => (Mutation::Create { name }, self.flow.start_create_flow()),
            FormMode::Edit { id } => (
                Mutation::Edit {
                    id: id.clone(),
                    name,
                },
                self.flow.start_edit_flow(),
            ),
        };
        transition.is_applied().then(|| PageCommand::RunMutation {
            ticket: self.flow.ticket(),
            mutation,
        })
    }

    // ========================================================================
    // Dialogs
    // ========================================================================

    /// "Yes" on a confirmation, "OK" on a success dialog.
    pub fn confirm_dialog(&mut self) -> Option<PageCommand> {
        if self.flow.state().is_confirming() {
            let pending = self.pending_toggle.take()?;
            let transition = if pending.activate {
                self.flow.start_reactivate_flow()
            } else {
                self.flow.start_inactivate_flow()
            };
            return transition.is_applied().then(|| PageCommand::RunMutation {
                ticket: self.flow.ticket(),
                mutation: Mutation::SetActive {
                    id: pending.id,
                    active: pending.activate,
                },
            });
        }
        if self.flow.state().is_success() && self.flow.on_success_confirm().is_applied() {
            self.form = None;
            self.selected = 0;
        }
        None
    }

    /// "No"/Escape on whatever dialog is showing. Success is acknowledged
    /// rather than cancelled.
    pub fn cancel_dialog(&mut self) -> Option<PageCommand> {
        if self.flow.state().is_success() {
            return self.confirm_dialog();
        }
        if !self.flow.state().is_idle() {
            self.pending_toggle = None;
            self.flow.hide_all_modals();
        }
        None
    }

    // ========================================================================
    // Runtime callbacks
    // ========================================================================

    /// A mutation started under `ticket` finished.
    ///
    /// Stale results (cancelled, or superseded by a newer flow) never touch
    /// the dialogs, but a successful one still changed the data, so the page
    /// reloads either way.
    pub fn on_mutation_finished(
        &mut self,
        ticket: FlowTicket,
        kind: FlowKind,
        result: Result<(), MutationError>,
    ) -> Option<PageCommand> {
        let current = self.flow.is_current(ticket);
        match result {
            Ok(()) => {
                if current {
                    self.flow.complete_if_current(ticket, kind);
                } else {
                    info!(%kind, "mutation finished after its flow was dismissed");
                }
                Some(PageCommand::Reload)
            }
            Err(err) => {
                if current {
                    self.flow.hide_all_modals();
                    self.notice = Some(Notice {
                        text: err.to_string(),
                        is_error: true,
                    });
                }
                None
            }
        }
    }

    /// Fresh data from the store. The current page is re-clamped on every
    /// read, so a shrinking list never leaves the view past its end.
    ///
    /// A page that started without records, and without configured columns,
    /// infers its columns from the first record that arrives.
    pub fn replace_records(&mut self, records: Vec<DynamicRecord>) {
        if self.grid.columns().is_empty() && !records.is_empty() {
            self.grid = build_grid(&self.config, records.first());
            let keys = column_keys(self.grid.columns());
            info!(columns = keys.len(), "inferred columns from fresh records");
            self.grid_state.visibility = ColumnVisibility::all(keys);
        }
        self.records = records;
        self.page = self.page_request().current_page;
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn set_notice(&mut self, text: impl Into<String>, is_error: bool) {
        self.notice = Some(Notice {
            text: text.into(),
            is_error,
        });
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

impl std::fmt::Debug for EntityPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityPage")
            .field("entity", &self.entity)
            .field("records", &self.records.len())
            .field("search", &self.search)
            .field("sort", &self.sort)
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .field("flow", self.flow.state())
            .finish()
    }
}
