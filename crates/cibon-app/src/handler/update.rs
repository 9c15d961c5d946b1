//! Main update function - handles state transitions (TEA pattern)

use cibon_core::prelude::*;
use cibon_core::NavRel;

use crate::form::RecordForm;
use crate::message::Message;
use crate::notice::Notice;
use crate::page_size::PageSizeEdit;
use crate::state::{AppState, UiMode};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Loading
        // ─────────────────────────────────────────────────────────
        Message::Reload => reload(state),

        Message::Navigate(rel) => navigate(state, rel),

        Message::LoadCompleted {
            generation,
            collection,
        } => {
            if !state.is_current(generation) {
                debug!(
                    "Dropping stale load (generation {} < {})",
                    generation, state.generation
                );
                return UpdateResult::none();
            }
            state.apply_load(*collection);
            UpdateResult::none()
        }

        Message::PageLoaded { generation, page } => {
            if !state.is_current(generation) {
                debug!(
                    "Dropping stale page (generation {} < {})",
                    generation, state.generation
                );
                return UpdateResult::none();
            }
            state.apply_page(*page);
            UpdateResult::none()
        }

        Message::LoadFailed { generation, error } => {
            if !state.is_current(generation) {
                return UpdateResult::none();
            }
            state.loading = false;
            state.show_notice(Notice::error("Load", error));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Selection
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            state.select_next();
            UpdateResult::none()
        }

        Message::SelectPrevious => {
            state.select_previous();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Page Size
        // ─────────────────────────────────────────────────────────
        Message::OpenPageSizeInput => {
            state.page_size_input.reset(state.page_size);
            state.ui_mode = UiMode::PageSizeInput;
            UpdateResult::none()
        }

        Message::PageSizeInput { text } => match state.page_size_input.edit(&text) {
            PageSizeEdit::Accepted(size) if size != state.page_size => {
                let generation = state.begin_load();
                UpdateResult::action(UpdateAction::Load {
                    generation,
                    page_size: size,
                })
            }
            PageSizeEdit::Accepted(_) | PageSizeEdit::Reverted | PageSizeEdit::Empty => {
                UpdateResult::none()
            }
        },

        Message::ClosePageSizeInput => {
            state.ui_mode = UiMode::Normal;
            state.page_size_input.reset(state.page_size);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dialogs
        // ─────────────────────────────────────────────────────────
        Message::OpenCreateDialog => {
            state.create_form = RecordForm::empty(state.attribute_defs());
            state.ui_mode = UiMode::CreateDialog;
            UpdateResult::none()
        }

        Message::OpenUpdateDialog => {
            let Some(record) = state.selected_record() else {
                return UpdateResult::none();
            };
            state.update_form = RecordForm::for_record(state.attribute_defs(), record);
            state.ui_mode = UiMode::UpdateDialog;
            UpdateResult::none()
        }

        Message::FormInput { text } => {
            if let Some(form) = active_form(state) {
                form.set_focused_value(text);
            }
            UpdateResult::none()
        }

        Message::FormNextField => {
            if let Some(form) = active_form(state) {
                form.focus_next();
            }
            UpdateResult::none()
        }

        Message::FormPrevField => {
            if let Some(form) = active_form(state) {
                form.focus_prev();
            }
            UpdateResult::none()
        }

        Message::SubmitForm => submit_form(state),

        Message::CancelForm => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Mutations
        // ─────────────────────────────────────────────────────────
        Message::CreateRecord { fields } => {
            state.saving = true;
            UpdateResult::action(UpdateAction::Create {
                fields,
                page_size: state.page_size,
            })
        }

        Message::RecordCreated { links } => {
            state.saving = false;
            match links.nav(NavRel::Last) {
                Some(last) => {
                    let href = last.plain_href();
                    let generation = state.begin_load();
                    UpdateResult::action(UpdateAction::Navigate { generation, href })
                }
                None => {
                    debug!("No 'last' link after create, reloading");
                    reload(state)
                }
            }
        }

        Message::UpdateRecord { record, fields } => {
            state.saving = true;
            UpdateResult::action(UpdateAction::Update { record, fields })
        }

        Message::RecordUpdated | Message::RecordDeleted => {
            state.saving = false;
            reload(state)
        }

        Message::UpdateConflict { href } => {
            state.saving = false;
            warn!("Update of {} rejected: stale copy", href);
            state.show_notice(Notice::conflict(&href));
            UpdateResult::none()
        }

        Message::DeleteRecord { href } => {
            state.saving = true;
            UpdateResult::action(UpdateAction::Delete { href })
        }

        Message::MutationFailed { operation, error } => {
            state.saving = false;
            state.show_notice(Notice::error(operation, error));
            UpdateResult::none()
        }

        Message::DismissNotice => {
            state.dismiss_notice();
            UpdateResult::none()
        }
    }
}

/// Full reload at the current page size
fn reload(state: &mut AppState) -> UpdateResult {
    let generation = state.begin_load();
    UpdateResult::action(UpdateAction::Load {
        generation,
        page_size: state.page_size,
    })
}

fn navigate(state: &mut AppState, rel: NavRel) -> UpdateResult {
    let Some(href) = state.nav_href(rel) else {
        return UpdateResult::none();
    };
    let generation = state.begin_load();
    UpdateResult::action(UpdateAction::Navigate { generation, href })
}

fn active_form(state: &mut AppState) -> Option<&mut RecordForm> {
    match state.ui_mode {
        UiMode::CreateDialog => Some(&mut state.create_form),
        UiMode::UpdateDialog => Some(&mut state.update_form),
        _ => None,
    }
}

fn submit_form(state: &mut AppState) -> UpdateResult {
    match state.ui_mode {
        UiMode::CreateDialog => {
            let fields = state.create_form.values();
            state.create_form.clear();
            state.ui_mode = UiMode::Normal;
            UpdateResult::message(Message::CreateRecord { fields })
        }
        UiMode::UpdateDialog => {
            let form = std::mem::take(&mut state.update_form);
            state.ui_mode = UiMode::Normal;
            match form.target {
                Some(ref record) => UpdateResult::message(Message::UpdateRecord {
                    fields: form.values(),
                    record: Box::new(record.clone()),
                }),
                None => UpdateResult::none(),
            }
        }
        _ => UpdateResult::none(),
    }
}
