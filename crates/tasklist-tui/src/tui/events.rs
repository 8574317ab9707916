/*
[INPUT]:  Crossterm events forwarded by the input thread
[OUTPUT]: Store actions and focus changes on AppState
[POS]:    TUI event routing
[UPDATE]: When changing keybindings
*/

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tasklist_store::Action;
use tui_input::backend::crossterm::EventHandler;

use super::app::{AppState, Focus};

/// Handles one terminal event.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_event(app: &mut AppState, event: &CrosstermEvent) -> bool {
    let CrosstermEvent::Key(key) = event else {
        return false;
    };
    if key.kind != KeyEventKind::Press {
        return false;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            false
        }
        KeyCode::BackTab => {
            app.focus = app.focus.previous();
            false
        }
        KeyCode::Esc => {
            if app.store.state().is_editing() {
                app.dispatch(Action::CancelEdit);
            }
            app.focus = Focus::List;
            false
        }
        _ => match app.focus {
            Focus::Title | Focus::Content => {
                handle_form_key(app, *key, event);
                false
            }
            Focus::List => handle_list_key(app, key.code),
        },
    }
}

fn handle_form_key(app: &mut AppState, key: KeyEvent, event: &CrosstermEvent) {
    if key.code == KeyCode::Enter {
        app.submit_form();
        return;
    }

    let focus = app.focus;
    let input = match focus {
        Focus::Title => &mut app.title_input,
        _ => &mut app.content_input,
    };
    let Some(changed) = input.handle_event(event) else {
        return;
    };
    if !changed.value {
        return;
    }

    let text = input.value().to_string();
    let action = match focus {
        Focus::Title => Action::SetDraftTitle(text),
        _ => Action::SetDraftContent(text),
    };
    app.dispatch(action);
}

fn handle_list_key(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Home | KeyCode::Char('g') => app.move_selection(isize::MIN / 2),
        KeyCode::End | KeyCode::Char('G') => app.move_selection(isize::MAX / 2),
        KeyCode::Char(' ') | KeyCode::Char('t') => app.toggle_selected(),
        KeyCode::Char('e') | KeyCode::Enter => app.begin_edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('n') | KeyCode::Char('a') => app.focus = Focus::Title,
        _ => {}
    }
    false
}
