use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::console::ACTION_EDIT;
use crate::flow::ActiveModal;
use crate::grid::{GridIntent, PageNav};
use crate::ui::app::{App, InputMode};

/// Route one key press. Dialogs take precedence, then the form, the column
/// picker, the search box, and finally the grid shortcuts.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    if let Some(modal) = app.page().active_modal() {
        handle_dialog_key(app, &modal, key);
        return;
    }

    if app.page().form().is_some() {
        handle_form_key(app, key);
        return;
    }

    if app.page().grid_state().picker_open() {
        handle_picker_key(app, key);
        return;
    }

    if app.mode() == InputMode::Search {
        handle_search_key(app, key);
        return;
    }

    handle_grid_key(app, key);
}

fn handle_dialog_key(app: &mut App, modal: &ActiveModal, key: KeyEvent) {
    let page = app.page_mut();
    let command = match (modal, key.code) {
        (ActiveModal::Confirmation(_), KeyCode::Char('y')) => page.confirm_dialog(),
        // Enter presses the highlighted "No".
        (ActiveModal::Confirmation(_), KeyCode::Char('n') | KeyCode::Esc | KeyCode::Enter) => {
            page.cancel_dialog()
        }
        // Dismissing the spinner abandons the mutation's result.
        (ActiveModal::Processing { .. }, KeyCode::Esc) => page.cancel_dialog(),
        (ActiveModal::Success { .. }, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('y')) => {
            page.confirm_dialog()
        }
        _ => None,
    };
    app.execute(command);
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    let page = app.page_mut();
    match key.code {
        KeyCode::Enter => {
            let command = page.submit_form();
            app.execute(command);
        }
        KeyCode::Esc => page.cancel_form(),
        KeyCode::Backspace => page.form_backspace(),
        KeyCode::Char(c) => page.form_input(c),
        _ => {}
    }
}

fn handle_picker_key(app: &mut App, key: KeyEvent) {
    let page = app.page_mut();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => page.dispatch_grid(GridIntent::PickerUp),
        KeyCode::Down | KeyCode::Char('j') => page.dispatch_grid(GridIntent::PickerDown),
        KeyCode::Char(' ') | KeyCode::Enter => {
            let command = page.picker_toggle();
            app.execute(command);
        }
        KeyCode::Char('a') => page.dispatch_grid(GridIntent::ShowAllColumns),
        KeyCode::Esc | KeyCode::Char('c') => page.dispatch_grid(GridIntent::CloseColumnPicker),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.end_search(),
        KeyCode::Backspace => app.search_backspace(),
        KeyCode::Char(c) => app.search_input(c),
        _ => {}
    }
}

fn handle_grid_key(app: &mut App, key: KeyEvent) {
    app.page_mut().clear_notice();
    let page = app.page_mut();
    let command = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.request_quit();
            return;
        }
        KeyCode::Char('/') => {
            app.begin_search();
            return;
        }
        KeyCode::Up => {
            page.move_selection(false);
            None
        }
        KeyCode::Down => {
            page.move_selection(true);
            None
        }
        KeyCode::Left => page.navigate(PageNav::Prev),
        KeyCode::Right => page.navigate(PageNav::Next),
        KeyCode::Home => page.navigate(PageNav::First),
        KeyCode::End => page.navigate(PageNav::Last),
        KeyCode::Char('<') => {
            page.scroll_columns(false);
            None
        }
        KeyCode::Char('>') => {
            page.scroll_columns(true);
            None
        }
        KeyCode::Char('[') => page.cycle_page_size(false),
        KeyCode::Char(']') => page.cycle_page_size(true),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            page.click_header(index)
        }
        KeyCode::Char('c') => {
            if page.grid().feature_flags().show_column_selector {
                page.dispatch_grid(GridIntent::OpenColumnPicker);
            }
            None
        }
        KeyCode::Char('r') => page.refresh(Instant::now()),
        KeyCode::Char('e') => page.export(),
        KeyCode::Char('n') => {
            page.open_create_form();
            None
        }
        KeyCode::Enter => page.activate_selected(ACTION_EDIT),
        KeyCode::Char('d') => page.toggle_selected_status(),
        _ => None,
    };
    app.execute(command);
}
