//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::notice::NoticeKind;
use crate::state::{AppState, UiMode};
use cibon_client::LoadedCollection;
use cibon_core::{Attribute, Links, NavRel, Page, Record, Schema};
use serde_json::json;

/// Helper to build a record with a self link and an ETag
fn test_record(id: u32, first: &str, last: &str) -> Record {
    Record::from_entity(
        "test",
        &json!({
            "firstName": first,
            "lastName": last,
            "description": "",
            "_links": { "self": { "href": format!("http://h/api/farmers/{}", id) } }
        }),
        Some("\"0\"".to_string()),
    )
    .unwrap()
}

fn test_schema() -> Schema {
    Schema::new(vec![
        Attribute::new("firstName"),
        Attribute::new("lastName"),
        Attribute::new("description"),
    ])
}

fn page_links() -> Links {
    Links::new()
        .with("first", "http://h/api/farmers?page=0&size=2")
        .with("next", "http://h/api/farmers?page=1&size=2")
        .with("last", "http://h/api/farmers?page=2&size=2")
}

/// State with a loaded first page of two records
fn loaded_state() -> AppState {
    let mut state = AppState::new();
    let generation = state.begin_load();
    let page = Page::new(
        vec![test_record(1, "Anna", "Bauer"), test_record(2, "Ben", "Koch")],
        page_links(),
    );
    update(
        &mut state,
        Message::LoadCompleted {
            generation,
            collection: Box::new(LoadedCollection {
                page,
                schema: test_schema(),
                page_size: 2,
            }),
        },
    );
    state
}

/// Feed a key through update() and any follow-up messages, returning the
/// last action produced
fn press(state: &mut AppState, key: InputKey) -> Option<UpdateAction> {
    let mut msg = Some(Message::Key(key));
    let mut action = None;
    while let Some(m) = msg {
        let result = update(state, m);
        if result.action.is_some() {
            action = result.action;
        }
        msg = result.message;
    }
    action
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, InputKey::Char(c));
    }
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_should_quit() {
    let mut state = AppState::new();
    assert!(!state.should_quit());

    update(&mut state, Message::Quit);

    assert!(state.should_quit());
}

#[test]
fn test_q_and_esc_quit_in_normal_mode() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
    assert!(matches!(handle_key(&state, InputKey::Esc), Some(Message::Quit)));
}

#[test]
fn test_ctrl_c_quits_from_dialogs() {
    let mut state = loaded_state();
    update(&mut state, Message::OpenCreateDialog);
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

// ─────────────────────────────────────────────────────────
// Loading
// ─────────────────────────────────────────────────────────

#[test]
fn test_reload_emits_load_at_current_page_size() {
    let mut state = loaded_state();
    let action = press(&mut state, InputKey::Char('r'));
    assert_eq!(
        action,
        Some(UpdateAction::Load {
            generation: state.generation,
            page_size: 2
        })
    );
    assert!(state.loading);
}

#[test]
fn test_load_completed_replaces_collection() {
    let state = loaded_state();
    assert_eq!(state.records.len(), 2);
    assert_eq!(state.attributes(), vec!["firstName", "lastName", "description"]);
    assert_eq!(state.page_size, 2);
    assert!(!state.loading);
    assert!(state.last_loaded.is_some());
}

#[test]
fn test_stale_load_result_is_dropped() {
    let mut state = loaded_state();
    let stale = state.begin_load();
    let current = state.begin_load();

    update(
        &mut state,
        Message::PageLoaded {
            generation: stale,
            page: Box::new(Page::new(vec![test_record(9, "Old", "Page")], Links::new())),
        },
    );
    assert_eq!(state.records.len(), 2);
    assert!(state.loading);

    update(
        &mut state,
        Message::PageLoaded {
            generation: current,
            page: Box::new(Page::new(vec![test_record(5, "Cora", "Lang")], Links::new())),
        },
    );
    assert_eq!(state.records.len(), 1);
    assert_eq!(state.records[0].first_name(), "Cora");
    assert!(!state.loading);
}

#[test]
fn test_page_loaded_keeps_schema_and_page_size() {
    let mut state = loaded_state();
    let generation = state.begin_load();
    update(
        &mut state,
        Message::PageLoaded {
            generation,
            page: Box::new(Page::new(vec![test_record(3, "Cora", "Lang")], Links::new())),
        },
    );
    assert_eq!(state.attributes().len(), 3);
    assert_eq!(state.page_size, 2);
    assert!(state.nav_rels().is_empty());
}

#[test]
fn test_load_failure_shows_error_and_keeps_records() {
    let mut state = loaded_state();
    let generation = state.begin_load();

    update(
        &mut state,
        Message::LoadFailed {
            generation,
            error: "Unexpected status 500 from http://h/api".into(),
        },
    );

    assert_eq!(state.records.len(), 2);
    assert!(!state.loading);
    assert_eq!(state.ui_mode, UiMode::Notice);
    let notice = state.notice.as_ref().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.message.contains("500"));
    assert!(state.last_error.is_some());
}

#[test]
fn test_stale_load_failure_is_ignored() {
    let mut state = loaded_state();
    let stale = state.begin_load();
    state.begin_load();

    update(
        &mut state,
        Message::LoadFailed {
            generation: stale,
            error: "boom".into(),
        },
    );

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(state.notice.is_none());
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_nav_keys_follow_present_links() {
    let mut state = loaded_state();
    let action = press(&mut state, InputKey::Right);
    assert_eq!(
        action,
        Some(UpdateAction::Navigate {
            generation: state.generation,
            href: "http://h/api/farmers?page=1&size=2".into()
        })
    );

    let action = press(&mut state, InputKey::End);
    assert!(matches!(
        action,
        Some(UpdateAction::Navigate { ref href, .. }) if href.ends_with("page=2&size=2")
    ));
}

#[test]
fn test_nav_key_without_link_is_noop() {
    let mut state = loaded_state();
    let generation = state.generation;

    // first page has no prev link
    assert!(handle_key(&state, InputKey::Left).is_none());
    assert!(press(&mut state, InputKey::Left).is_none());
    assert_eq!(state.generation, generation);
}

#[test]
fn test_page_keys_step_through_pages() {
    let state = loaded_state();
    assert!(matches!(
        handle_key(&state, InputKey::PageDown),
        Some(Message::Navigate(NavRel::Next))
    ));
    // first page has no prev link
    assert!(handle_key(&state, InputKey::PageUp).is_none());
}

#[test]
fn test_navigate_message_without_link_is_noop() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Navigate(NavRel::Next));
    assert!(result.action.is_none());
    assert!(!state.loading);
}

// ─────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────

#[test]
fn test_arrow_keys_move_selection() {
    let mut state = loaded_state();
    press(&mut state, InputKey::Down);
    assert_eq!(state.selected, 1);
    press(&mut state, InputKey::Down);
    assert_eq!(state.selected, 1);
    press(&mut state, InputKey::Up);
    assert_eq!(state.selected, 0);
}

// ─────────────────────────────────────────────────────────
// Page Size
// ─────────────────────────────────────────────────────────

#[test]
fn test_page_size_letter_is_truncated() {
    let mut state = loaded_state();
    press(&mut state, InputKey::Char('s'));
    assert_eq!(state.ui_mode, UiMode::PageSizeInput);

    // "2" -> "" -> "1" -> "12" -> "12a" reverted to "12"
    press(&mut state, InputKey::Backspace);
    press(&mut state, InputKey::Char('1'));
    press(&mut state, InputKey::Char('2'));
    let action = press(&mut state, InputKey::Char('a'));

    assert!(action.is_none());
    assert_eq!(state.page_size_input.buffer(), "12");
}

#[test]
fn test_page_size_change_triggers_reload() {
    let mut state = loaded_state();
    press(&mut state, InputKey::Char('s'));
    press(&mut state, InputKey::Backspace);
    press(&mut state, InputKey::Char('2'));
    let action = press(&mut state, InputKey::Char('5'));

    assert_eq!(
        action,
        Some(UpdateAction::Load {
            generation: state.generation,
            page_size: 25
        })
    );
}

#[test]
fn test_page_size_unchanged_does_not_reload() {
    let mut state = loaded_state();
    press(&mut state, InputKey::Char('s'));
    press(&mut state, InputKey::Backspace);
    let action = press(&mut state, InputKey::Char('2'));
    assert!(action.is_none());
}

#[test]
fn test_empty_page_size_does_not_reload() {
    let mut state = loaded_state();
    press(&mut state, InputKey::Char('s'));
    let action = press(&mut state, InputKey::Backspace);
    assert!(action.is_none());
    assert_eq!(state.page_size_input.buffer(), "");
}

#[test]
fn test_leaving_page_size_input_restores_buffer() {
    let mut state = loaded_state();
    press(&mut state, InputKey::Char('s'));
    press(&mut state, InputKey::Backspace);
    press(&mut state, InputKey::Enter);
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.page_size_input.buffer(), "2");
}

// ─────────────────────────────────────────────────────────
// Create Dialog
// ─────────────────────────────────────────────────────────

#[test]
fn test_create_dialog_has_input_per_attribute() {
    let mut state = loaded_state();
    press(&mut state, InputKey::Char('c'));
    assert_eq!(state.ui_mode, UiMode::CreateDialog);
    assert_eq!(state.create_form.fields.len(), 3);
}

#[test]
fn test_create_submit_emits_trimmed_values_and_clears() {
    let mut state = loaded_state();
    press(&mut state, InputKey::Char('c'));
    type_text(&mut state, " Anna ");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "Bauer");

    let action = press(&mut state, InputKey::Enter);

    let Some(UpdateAction::Create { fields, page_size }) = action else {
        panic!("expected create action");
    };
    assert_eq!(fields["firstName"], "Anna");
    assert_eq!(fields["lastName"], "Bauer");
    assert_eq!(fields["description"], "");
    assert_eq!(page_size, 2);
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(state.create_form.fields.iter().all(|f| f.value.is_empty()));
    assert!(state.saving);
}

#[test]
fn test_create_cancel_emits_nothing() {
    let mut state = loaded_state();
    press(&mut state, InputKey::Char('c'));
    type_text(&mut state, "Anna");
    let action = press(&mut state, InputKey::Esc);
    assert!(action.is_none());
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_created_navigates_to_last_page() {
    let mut state = loaded_state();
    let links = Links::new().with("last", "http://h/api/farmers?page=3&size=2");

    let result = update(&mut state, Message::RecordCreated { links });

    assert_eq!(
        result.action,
        Some(UpdateAction::Navigate {
            generation: state.generation,
            href: "http://h/api/farmers?page=3&size=2".into()
        })
    );
    assert!(!state.saving);
}

#[test]
fn test_created_without_last_link_reloads() {
    let mut state = loaded_state();
    let result = update(
        &mut state,
        Message::RecordCreated {
            links: Links::new(),
        },
    );
    assert!(matches!(
        result.action,
        Some(UpdateAction::Load { page_size: 2, .. })
    ));
}

// ─────────────────────────────────────────────────────────
// Update Dialog
// ─────────────────────────────────────────────────────────

#[test]
fn test_update_dialog_prefilled_from_selected_row() {
    let mut state = loaded_state();
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Char('e'));

    assert_eq!(state.ui_mode, UiMode::UpdateDialog);
    assert_eq!(state.update_form.fields[0].value, "Ben");
    assert_eq!(state.update_form.fields[1].value, "Koch");
}

#[test]
fn test_update_submit_carries_record_and_values() {
    let mut state = loaded_state();
    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::Backspace);
    type_text(&mut state, "e");

    let action = press(&mut state, InputKey::Enter);

    let Some(UpdateAction::Update { record, fields }) = action else {
        panic!("expected update action");
    };
    assert_eq!(record.self_href, "http://h/api/farmers/1");
    assert_eq!(record.etag.as_deref(), Some("\"0\""));
    assert_eq!(fields["firstName"], "Anne");
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_update_dialog_needs_a_row() {
    let mut state = AppState::new();
    assert!(handle_key(&state, InputKey::Char('e')).is_none());
    update(&mut state, Message::OpenUpdateDialog);
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_update_success_reloads() {
    let mut state = loaded_state();
    let result = update(&mut state, Message::RecordUpdated);
    assert!(matches!(
        result.action,
        Some(UpdateAction::Load { page_size: 2, .. })
    ));
}

#[test]
fn test_update_conflict_shows_notice_and_keeps_records() {
    let mut state = loaded_state();
    let before = state.records.clone();

    let result = update(
        &mut state,
        Message::UpdateConflict {
            href: "http://h/api/farmers/1".into(),
        },
    );

    assert!(result.action.is_none());
    assert_eq!(state.records, before);
    assert_eq!(state.ui_mode, UiMode::Notice);
    let notice = state.notice.as_ref().unwrap();
    assert_eq!(notice.kind, NoticeKind::Conflict);
    assert_eq!(
        notice.message,
        "DENIED: Unable to update http://h/api/farmers/1. Your copy is stale."
    );
}

#[test]
fn test_notice_dismissed_with_enter() {
    let mut state = loaded_state();
    update(
        &mut state,
        Message::UpdateConflict {
            href: "http://h/api/farmers/1".into(),
        },
    );
    press(&mut state, InputKey::Enter);
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(state.notice.is_none());
}

// ─────────────────────────────────────────────────────────
// Delete
// ─────────────────────────────────────────────────────────

#[test]
fn test_delete_key_emits_delete_of_selected_row() {
    let mut state = loaded_state();
    press(&mut state, InputKey::Down);
    let action = press(&mut state, InputKey::Char('d'));
    assert_eq!(
        action,
        Some(UpdateAction::Delete {
            href: "http://h/api/farmers/2".into()
        })
    );
}

#[test]
fn test_delete_on_empty_page_is_noop() {
    let state = AppState::new();
    assert!(handle_key(&state, InputKey::Delete).is_none());
}

#[test]
fn test_delete_success_reloads() {
    let mut state = loaded_state();
    let result = update(&mut state, Message::RecordDeleted);
    assert!(matches!(result.action, Some(UpdateAction::Load { .. })));
}

#[test]
fn test_mutation_failure_shows_error() {
    let mut state = loaded_state();
    state.saving = true;
    update(
        &mut state,
        Message::MutationFailed {
            operation: "Delete",
            error: "Unexpected status 404 from http://h/api/farmers/9".into(),
        },
    );
    assert!(!state.saving);
    assert_eq!(state.ui_mode, UiMode::Notice);
    assert!(state
        .notice
        .as_ref()
        .unwrap()
        .message
        .starts_with("Delete failed"));
}
