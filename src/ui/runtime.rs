use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use tokio::runtime::Handle;
use tracing::info;

use crate::config::Config;
use crate::console::{DynamicRecord, EntityPage, RecordStore};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Run the console until the user quits. Mutations are spawned on `runtime`.
pub fn run(config: &Config, records: Vec<DynamicRecord>, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;

    let store = RecordStore::new(records.clone(), &config.screen, &config.store).shared();
    let page = EntityPage::new(config, records);
    let events = EventHandler::new(TICK_RATE);
    let mut app = App::new(
        page,
        store,
        runtime,
        events.sender(),
        Duration::from_millis(config.store.latency_ms),
    );
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    info!(entity = %config.screen.entity, "console started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::MutationFinished {
                ticket,
                kind,
                result,
            }) => app.on_mutation_finished(ticket, kind, result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(events);
    drop(guard);
    info!("console stopped");
    Ok(())
}
