//! Key event handlers for different UI modes

use cibon_core::NavRel;

use crate::form::RecordForm;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::PageSizeInput => handle_key_page_size(state, key),
        UiMode::CreateDialog => handle_key_form(&state.create_form, key),
        UiMode::UpdateDialog => handle_key_form(&state.update_form, key),
        UiMode::Notice => handle_key_notice(key),
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        // Row selection
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),

        // ─────────────────────────────────────────────────────────
        // Pagination: only relations present on the page do anything
        // ─────────────────────────────────────────────────────────
        InputKey::Home => navigate(state, NavRel::First),
        InputKey::Left | InputKey::PageUp => navigate(state, NavRel::Prev),
        InputKey::Right | InputKey::PageDown => navigate(state, NavRel::Next),
        InputKey::End => navigate(state, NavRel::Last),

        // Record actions
        InputKey::Char('c') => Some(Message::OpenCreateDialog),
        InputKey::Char('e') | InputKey::Enter => state
            .selected_record()
            .map(|_| Message::OpenUpdateDialog),
        InputKey::Char('d') | InputKey::Delete => {
            state.selected_record().map(|record| Message::DeleteRecord {
                href: record.self_href.clone(),
            })
        }

        InputKey::Char('s') => Some(Message::OpenPageSizeInput),
        InputKey::Char('r') => Some(Message::Reload),

        _ => None,
    }
}

fn navigate(state: &AppState, rel: NavRel) -> Option<Message> {
    state.links.nav(rel).map(|_| Message::Navigate(rel))
}

/// Handle key events while the page-size input has focus
fn handle_key_page_size(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc => Some(Message::ClosePageSizeInput),

        InputKey::Backspace => {
            let mut text = state.page_size_input.buffer().to_string();
            text.pop();
            Some(Message::PageSizeInput { text })
        }

        InputKey::CharCtrl('u') => Some(Message::PageSizeInput {
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut text = state.page_size_input.buffer().to_string();
            text.push(c);
            Some(Message::PageSizeInput { text })
        }

        _ => None,
    }
}

/// Handle key events in the create and update dialogs
fn handle_key_form(form: &RecordForm, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelForm),
        InputKey::Enter => Some(Message::SubmitForm),

        InputKey::Tab | InputKey::Down => Some(Message::FormNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::FormPrevField),

        InputKey::Backspace => {
            let mut text = form.focused_value();
            text.pop();
            Some(Message::FormInput { text })
        }

        InputKey::CharCtrl('u') => Some(Message::FormInput {
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut text = form.focused_value();
            text.push(c);
            Some(Message::FormInput { text })
        }

        _ => None,
    }
}

/// Handle key events while a notice is shown
fn handle_key_notice(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc => Some(Message::DismissNotice),
        _ => None,
    }
}
