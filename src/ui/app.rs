use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use crate::console::{
    export_records, run_mutation, EntityPage, MutationError, PageCommand, SharedStore,
};
use crate::flow::{FlowKind, FlowTicket};
use crate::ui::events::AppEvent;
use crate::ui::layout::toolbar_width;

/// Where keystrokes go when no dialog or form has them.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Console application state: the entity page plus the resources that run
/// its commands.
pub struct App {
    should_quit: bool,
    mode: InputMode,
    size: Option<(u16, u16)>,
    animation_tick: u8,
    page: EntityPage,
    store: SharedStore,
    runtime: Handle,
    events: Sender<AppEvent>,
    latency: Duration,
}

impl App {
    pub fn new(
        page: EntityPage,
        store: SharedStore,
        runtime: Handle,
        events: Sender<AppEvent>,
        latency: Duration,
    ) -> Self {
        Self {
            should_quit: false,
            mode: InputMode::Normal,
            size: None,
            animation_tick: 0,
            page,
            store,
            runtime,
            events,
            latency,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn page(&self) -> &EntityPage {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut EntityPage {
        &mut self.page
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        self.page.tick(Instant::now());
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.page.resize(toolbar_width(cols));
    }

    // ========================================================================
    // Search box
    // ========================================================================

    pub fn begin_search(&mut self) {
        if self.page.grid().feature_flags().show_search {
            self.mode = InputMode::Search;
        }
    }

    pub fn end_search(&mut self) {
        self.mode = InputMode::Normal;
    }

    pub fn search_input(&mut self, c: char) {
        let mut query = self.page.search().to_string();
        query.push(c);
        let command = self.page.set_search(query);
        self.execute(command);
    }

    pub fn search_backspace(&mut self) {
        let mut query = self.page.search().to_string();
        if query.pop().is_some() {
            let command = self.page.set_search(query);
            self.execute(command);
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Run whatever the page asked for.
    pub fn execute(&mut self, command: Option<PageCommand>) {
        let Some(command) = command else {
            return;
        };
        match command {
            PageCommand::RunMutation { ticket, mutation } => {
                let kind = mutation.kind();
                debug!(?ticket, %kind, "spawning mutation");
                let store = SharedStore::clone(&self.store);
                let events = self.events.clone();
                let latency = self.latency;
                self.runtime.spawn(async move {
                    let result = run_mutation(store, mutation, latency).await;
                    let _ = events.send(AppEvent::MutationFinished {
                        ticket,
                        kind,
                        result,
                    });
                });
            }
            PageCommand::Reload => self.reload(),
            PageCommand::Export { records } => {
                let path = PathBuf::from(format!("{}-export.json", self.page.entity()));
                let refs = records.iter().collect::<Vec<_>>();
                match export_records(&path, &refs) {
                    Ok(()) => {
                        info!(path = %path.display(), count = refs.len(), "exported records");
                        self.page.set_notice(
                            format!("Exported {} records to {}", refs.len(), path.display()),
                            false,
                        );
                    }
                    Err(err) => {
                        warn!(%err, "export failed");
                        self.page.set_notice(err.to_string(), true);
                    }
                }
            }
        }
    }

    pub fn reload(&mut self) {
        let records = self.store.lock().snapshot();
        self.page.replace_records(records);
    }

    pub fn on_mutation_finished(
        &mut self,
        ticket: FlowTicket,
        kind: FlowKind,
        result: Result<(), MutationError>,
    ) {
        let command = self.page.on_mutation_finished(ticket, kind, result);
        self.execute(command);
    }
}
