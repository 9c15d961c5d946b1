//! Record form state shared by the create and update dialogs

use serde_json::Value;

use cibon_core::{Attribute, FieldValues, Record};

/// One text input of a record form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Attribute name, used as the JSON key on submit
    pub name: String,
    /// Label shown next to the input
    pub label: String,
    pub value: String,
}

impl FormField {
    fn from_attribute(attribute: &Attribute, value: String) -> Self {
        Self {
            name: attribute.name.clone(),
            label: attribute
                .title
                .clone()
                .unwrap_or_else(|| attribute.name.clone()),
            value,
        }
    }
}

fn editable(attributes: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attributes.iter().filter(|a| !a.read_only)
}

/// Inputs of a create or update dialog, one per editable schema attribute
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordForm {
    pub fields: Vec<FormField>,
    pub focus: usize,
    /// Record being edited; `None` for a create form
    pub target: Option<Record>,
}

impl RecordForm {
    /// Empty form for a new record
    pub fn empty(attributes: &[Attribute]) -> Self {
        Self {
            fields: editable(attributes)
                .map(|a| FormField::from_attribute(a, String::new()))
                .collect(),
            focus: 0,
            target: None,
        }
    }

    /// Form pre-filled with the current values of `record`
    pub fn for_record(attributes: &[Attribute], record: &Record) -> Self {
        Self {
            fields: editable(attributes)
                .map(|a| FormField::from_attribute(a, record.display_value(&a.name)))
                .collect(),
            focus: 0,
            target: Some(record.clone()),
        }
    }

    pub fn focused(&self) -> Option<&FormField> {
        self.fields.get(self.focus)
    }

    pub fn focused_value(&self) -> String {
        self.focused().map(|f| f.value.clone()).unwrap_or_default()
    }

    pub fn set_focused_value(&mut self, text: String) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value = text;
        }
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Trimmed values keyed by attribute name, in form order
    pub fn values(&self) -> FieldValues {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), Value::String(f.value.trim().to_string())))
            .collect()
    }

    /// Blank every input and move focus back to the first one
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focus = 0;
    }
}
