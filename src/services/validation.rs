use std::collections::BTreeMap;

use garde::Validate;
use serde::Serialize;

use crate::models::quote::{Field, PropertyType, QuoteInput, QuoteRequest, ServiceKind};

/// Per-field validation messages. Only failing fields are present, one
/// message each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    /// Records the field's fixed message, keeping the first one recorded.
    fn flag(&mut self, field: Field) {
        if let Some(message) = field.error_message() {
            self.0.entry(field).or_insert_with(|| message.to_string());
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.0.keys().map(|field| field.form_name()).collect();
        write!(f, "invalid fields: {}", names.join(", "))
    }
}

/// Validate raw form input and build a `QuoteRequest` from it.
///
/// Runs every field rule before deciding, so the caller gets a message for
/// each violating field in one pass.
pub fn validate_quote(input: &QuoteInput) -> Result<QuoteRequest, FieldErrors> {
    let mut errors = FieldErrors::default();

    if let Err(report) = input.validate() {
        for (path, _) in report.iter() {
            let path = path.to_string();
            match Field::from_path(&path) {
                Some(field) => errors.flag(field),
                None => tracing::warn!(path = %path, "Validation error on unknown field"),
            }
        }
    }

    let property_type = input.property_type.parse::<PropertyType>().ok();
    let service_needed = input.service_needed.parse::<ServiceKind>().ok();

    match (property_type, service_needed) {
        (Some(property_type), Some(service_needed)) if errors.is_empty() => {
            Ok(QuoteRequest::new(input, property_type, service_needed))
        }
        _ => {
            if property_type.is_none() {
                errors.flag(Field::PropertyType);
            }
            if service_needed.is_none() {
                errors.flag(Field::ServiceNeeded);
            }
            Err(errors)
        }
    }
}
