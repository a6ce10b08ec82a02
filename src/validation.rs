//! Single text field validated against a fixed allow-list.

use crate::constants::{DEFAULT_ALLOW_LIST, ERROR_POKEMON_NOT_ALLOWED, SUCCESS_CAN_SUBMIT_PREFIX};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Nothing to submit")]
    Empty,
    #[error("{}", ERROR_POKEMON_NOT_ALLOWED)]
    NotAllowed,
}

/// Set of accepted names, matched exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    names: Vec<String>,
}

impl AllowList {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.names.iter().any(|name| name == candidate)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOW_LIST.iter().map(|s| s.to_string()).collect())
    }
}

/// Form state: the typed value, its validation errors and the last confirmed submission.
#[derive(Debug, Clone, Default)]
pub struct ValidatedField {
    allow_list: AllowList,
    value: String,
    errors: Vec<String>,
    submitted: Option<String>,
}

impl ValidatedField {
    pub fn new(allow_list: AllowList) -> Self {
        Self {
            allow_list,
            value: String::new(),
            errors: Vec::new(),
            submitted: None,
        }
    }

    /// Replace the value and re-validate it
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.errors = if self.allow_list.contains(&self.value) {
            Vec::new()
        } else {
            vec![ERROR_POKEMON_NOT_ALLOWED.to_string()]
        };
    }

    pub fn push_char(&mut self, c: char) {
        let mut value = self.value.clone();
        value.push(c);
        self.set_value(value);
    }

    pub fn pop_char(&mut self) {
        let mut value = self.value.clone();
        value.pop();
        self.set_value(value);
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Submit is enabled for a non-empty value without errors
    pub fn can_submit(&self) -> bool {
        !self.has_error() && !self.value.is_empty()
    }

    pub fn success_message(&self) -> Option<String> {
        self.can_submit()
            .then(|| format!("{}{}", SUCCESS_CAN_SUBMIT_PREFIX, self.value))
    }

    /// Confirm the current value, revealing the image bound to it
    pub fn submit(&mut self) -> Result<&str, FormError> {
        if self.value.is_empty() {
            return Err(FormError::Empty);
        }
        if self.has_error() {
            return Err(FormError::NotAllowed);
        }
        self.submitted = Some(self.value.clone());
        Ok(&self.value)
    }

    /// Image revealed by the last successful submission, labelled with the current value
    pub fn revealed_image(&self) -> Option<&str> {
        self.submitted.as_ref().map(|_| self.value.as_str())
    }

    pub fn submitted(&self) -> Option<&str> {
        self.submitted.as_deref()
    }
}
