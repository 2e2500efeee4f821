//! Locally owned form state.
//!
//! A [`FormState`] holds the current values of a [`FormModel`] together with
//! per-field [`FieldMeta`]. Transitions are explicit:
//!
//! - initial: every field `{ touched: false, error: <validator result> }`
//! - `change`: store the value, re-run the validator, refresh every error
//! - `blur`: mark the field touched (never reverts)
//! - `handle_submit`: mark every field touched and hand back the values
//!   only when the validator reports no errors

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// A named field of a form.
pub trait FormField: Copy + Ord + Debug + 'static {
    /// Every field, in display order.
    const ALL: &'static [Self];

    /// Stable machine name, used as the key in serialized error maps.
    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}

/// The values record a form edits.
pub trait FormModel: Clone + Debug + PartialEq {
    type Field: FormField;

    fn value(&self, field: Self::Field) -> &str;

    fn set_value(&mut self, field: Self::Field, value: String);

    /// Pure validation pass. An empty result means the values may be submitted.
    fn validate(&self) -> FieldErrors<Self::Field>;
}

/// Per-field interaction state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldMeta {
    pub touched: bool,
    pub error: Option<String>,
}

impl FieldMeta {
    /// The error to display, which is only shown once the field was touched.
    pub fn visible_error(&self) -> Option<&str> {
        if self.touched {
            self.error.as_deref()
        } else {
            None
        }
    }

    pub fn has_danger(&self) -> bool {
        self.touched && self.error.is_some()
    }
}

/// Field error set: zero or more fields mapped to a human readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: FormField>(BTreeMap<F, String>);

impl<F: FormField> Default for FieldErrors<F> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<F: FormField> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: F) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.0.keys().copied()
    }

}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<M: FormModel> {
    initial: M,
    values: M,
    meta: BTreeMap<M::Field, FieldMeta>,
    active: Option<M::Field>,
    submit_count: u32,
}

impl<M: FormModel> FormState<M> {
    pub fn new(initial: M) -> Self {
        let mut state = Self {
            values: initial.clone(),
            initial,
            meta: BTreeMap::new(),
            active: None,
            submit_count: 0,
        };
        state.revalidate();
        state
    }

    pub fn values(&self) -> &M {
        &self.values
    }

    pub fn value(&self, field: M::Field) -> &str {
        self.values.value(field)
    }

    pub fn meta(&self, field: M::Field) -> FieldMeta {
        self.meta.get(&field).cloned().unwrap_or_default()
    }

    /// The field that currently has focus, if any.
    pub fn active(&self) -> Option<M::Field> {
        self.active
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn errors(&self) -> FieldErrors<M::Field> {
        self.values.validate()
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn change(&mut self, field: M::Field, value: impl Into<String>) {
        self.values.set_value(field, value.into());
        self.revalidate();
    }

    pub fn focus(&mut self, field: M::Field) {
        self.active = Some(field);
    }

    pub fn blur(&mut self, field: M::Field) {
        self.meta.entry(field).or_default().touched = true;
        if self.active == Some(field) {
            self.active = None;
        }
    }

    /// Touch every field and run the validator. Returns the values to submit,
    /// or the error set that blocked submission.
    pub fn handle_submit(&mut self) -> Result<M, FieldErrors<M::Field>> {
        self.submit_count += 1;
        for field in M::Field::ALL {
            self.meta.entry(*field).or_default().touched = true;
        }
        let errors = self.revalidate();
        if errors.is_empty() {
            Ok(self.values.clone())
        } else {
            Err(errors)
        }
    }

    /// Attach errors reported by the server, keyed by field name. Unknown
    /// names are skipped. Returns whether any field was annotated.
    pub fn apply_server_errors(&mut self, errors: &HashMap<String, String>) -> bool {
        let mut applied = false;
        for (name, message) in errors {
            if let Some(field) = M::Field::from_name(name) {
                let meta = self.meta.entry(field).or_default();
                meta.touched = true;
                meta.error = Some(message.clone());
                applied = true;
            }
        }
        applied
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.initial.clone());
    }

    fn revalidate(&mut self) -> FieldErrors<M::Field> {
        let errors = self.values.validate();
        for field in M::Field::ALL {
            self.meta.entry(*field).or_default().error = errors.get(*field).map(str::to_owned);
        }
        errors
    }
}
