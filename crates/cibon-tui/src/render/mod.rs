//! Main render/view function (View in TEA pattern)


use super::{layout, widgets};
use cibon_app::state::{AppState, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: every visible element is derived from it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let attributes = state.attributes();
    let nav_rels = state.nav_rels();
    let dialog_open = !matches!(state.ui_mode, UiMode::Normal | UiMode::PageSizeInput);

    let header = widgets::MainHeader::new(&state.collection_rel, &state.api_root)
        .busy(state.loading || state.saving);
    frame.render_widget(header, areas.header);

    let table = widgets::FarmerTable::new(&state.records, &attributes, &state.collection_rel)
        .selected(state.selected)
        .focused(!dialog_open);
    frame.render_widget(table, areas.table);

    let pagination = widgets::Pagination::new(&nav_rels).metadata(state.page_metadata);
    frame.render_widget(pagination, areas.pagination);

    let page_size = widgets::PageSizeField::new(state.page_size_input.buffer())
        .editing(state.ui_mode == UiMode::PageSizeInput);
    frame.render_widget(page_size, areas.page_size);

    let status = widgets::StatusBar {
        loading: state.loading,
        saving: state.saving,
        spinner_frame: state.spinner_frame,
        record_count: state.records.len(),
        page_size: state.page_size,
        total_elements: state.page_metadata.map(|meta| meta.total_elements),
        last_loaded: state.last_loaded,
        show_timestamps: state.show_timestamps,
        last_error: state.last_error.as_deref(),
    };
    frame.render_widget(status, areas.status);

    // Overlays last so they sit on top of the collection view
    match state.ui_mode {
        UiMode::CreateDialog => {
            frame.render_widget(widgets::RecordDialog::create(&state.create_form), area);
        }
        UiMode::UpdateDialog => {
            frame.render_widget(widgets::RecordDialog::update(&state.update_form), area);
        }
        UiMode::Notice => {
            if let Some(notice) = &state.notice {
                frame.render_widget(widgets::NoticeDialog::new(notice), area);
            }
        }
        UiMode::Normal | UiMode::PageSizeInput => {}
    }
}
