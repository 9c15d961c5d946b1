//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};

use cibon_client::LoadedCollection;
use cibon_core::{Attribute, Links, NavRel, Page, PageMetadata, Record, Schema};

use crate::config::Settings;
use crate::form::RecordForm;
use crate::notice::Notice;
use crate::page_size::PageSizeInput;

const SPINNER_FRAMES: usize = 10;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Collection table with keyboard navigation
    #[default]
    Normal,

    /// Page-size input has focus
    PageSizeInput,

    /// Creation dialog open
    CreateDialog,

    /// Update dialog open for one record
    UpdateDialog,

    /// Conflict or error notice shown
    Notice,
}

/// Complete application state.
///
/// Only [`crate::handler::update`] mutates it; the view reads it.
#[derive(Debug)]
pub struct AppState {
    pub ui_mode: UiMode,

    // Collection
    pub records: Vec<Record>,
    pub schema: Schema,
    pub page_size: u32,
    pub links: Links,
    pub page_metadata: Option<PageMetadata>,
    pub selected: usize,

    // Dialogs and controls
    pub create_form: RecordForm,
    pub update_form: RecordForm,
    pub page_size_input: PageSizeInput,
    pub notice: Option<Notice>,

    // Status
    pub loading: bool,
    pub saving: bool,
    pub last_error: Option<String>,
    pub last_loaded: Option<DateTime<Local>>,
    pub spinner_frame: usize,

    /// Stamp of the most recent load or navigation; results carrying an
    /// older stamp are dropped
    pub generation: u64,

    // Display context
    pub api_root: String,
    pub collection_rel: String,
    pub show_timestamps: bool,

    should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(&Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            ui_mode: UiMode::Normal,
            records: Vec::new(),
            schema: Schema::default(),
            page_size: settings.ui.page_size,
            links: Links::new(),
            page_metadata: None,
            selected: 0,
            create_form: RecordForm::default(),
            update_form: RecordForm::default(),
            page_size_input: PageSizeInput::new(settings.ui.page_size),
            notice: None,
            loading: false,
            saving: false,
            last_error: None,
            last_loaded: None,
            spinner_frame: 0,
            generation: 0,
            api_root: settings.api.root.clone(),
            collection_rel: settings.api.collection_rel.clone(),
            show_timestamps: settings.ui.show_timestamps,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Attribute names, in schema order
    pub fn attributes(&self) -> Vec<String> {
        self.schema.names()
    }

    pub fn attribute_defs(&self) -> &[Attribute] {
        self.schema.attributes()
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.records.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.records.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Href behind a navigation relation of the current page
    pub fn nav_href(&self, rel: NavRel) -> Option<String> {
        self.links.nav(rel).map(|link| link.plain_href())
    }

    pub fn nav_rels(&self) -> Vec<NavRel> {
        self.links.nav_rels()
    }

    /// Start a new load, returning its generation stamp
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Replace records, schema, page size and links from a full load
    pub fn apply_load(&mut self, collection: LoadedCollection) {
        self.schema = collection.schema;
        self.page_size = collection.page_size;
        if self.ui_mode != UiMode::PageSizeInput {
            self.page_size_input.reset(collection.page_size);
        }
        self.apply_page(collection.page);
    }

    /// Replace records and links, keeping schema and page size
    pub fn apply_page(&mut self, page: Page) {
        self.records = page.records;
        self.links = page.links;
        self.page_metadata = page.metadata;
        self.selected = self.selected.min(self.records.len().saturating_sub(1));
        self.loading = false;
        self.last_error = None;
        self.last_loaded = Some(Local::now());
    }

    /// Record a failed request and show it as a notice
    pub fn show_notice(&mut self, notice: Notice) {
        self.last_error = Some(notice.message.clone());
        self.notice = Some(notice);
        self.ui_mode = UiMode::Notice;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn tick(&mut self) {
        if self.loading || self.saving {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: u32) -> Record {
        Record::from_entity(
            "u",
            &json!({
                "firstName": format!("F{}", id),
                "_links": { "self": { "href": format!("http://h/api/farmers/{}", id) } }
            }),
            Some("\"0\"".into()),
        )
        .unwrap()
    }

    #[test]
    fn test_with_settings_takes_page_size() {
        let mut settings = Settings::default();
        settings.ui.page_size = 7;
        let state = AppState::with_settings(&settings);
        assert_eq!(state.page_size, 7);
        assert_eq!(state.page_size_input.buffer(), "7");
        assert_eq!(state.collection_rel, "farmers");
    }

    #[test]
    fn test_begin_load_bumps_generation() {
        let mut state = AppState::new();
        let first = state.begin_load();
        let second = state.begin_load();
        assert!(second > first);
        assert!(state.is_current(second));
        assert!(!state.is_current(first));
        assert!(state.loading);
    }

    #[test]
    fn test_apply_page_clamps_selection() {
        let mut state = AppState::new();
        state.records = vec![record(1), record(2), record(3)];
        state.selected = 2;

        state.apply_page(Page::new(vec![record(4)], Links::new()));

        assert_eq!(state.selected, 0);
        assert!(!state.loading);
        assert!(state.last_loaded.is_some());
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = AppState::new();
        state.records = vec![record(1), record(2)];
        state.select_previous();
        assert_eq!(state.selected, 0);
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
        assert_eq!(
            state.selected_record().map(|r| r.self_href.as_str()),
            Some("http://h/api/farmers/2")
        );
    }

    #[test]
    fn test_nav_href_strips_template() {
        let mut state = AppState::new();
        state.links = Links::new().with("next", "http://h/api/farmers?page=1&size=2");
        assert_eq!(
            state.nav_href(NavRel::Next).as_deref(),
            Some("http://h/api/farmers?page=1&size=2")
        );
        assert!(state.nav_href(NavRel::Prev).is_none());
    }
}
