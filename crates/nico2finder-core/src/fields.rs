//! Response field toggles
//!
//! Tracks which of the API's known fields are requested in the `fields`
//! parameter.

use crate::types::ResponseField;

/// Include/exclude flag for every known [`ResponseField`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFields {
    enabled: [bool; ResponseField::ALL.len()],
}

impl Default for ResponseFields {
    fn default() -> Self {
        Self {
            enabled: ResponseField::ALL.map(|field| field.enabled_by_default()),
        }
    }
}

impl ResponseFields {
    /// Overwrite flags for the named fields
    ///
    /// Names outside the known field set are ignored without error.
    pub fn configure<I, K>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        for (name, include) in overrides {
            let name = name.as_ref();
            match ResponseField::from_name(name) {
                Some(field) => self.set(field, include),
                None => tracing::debug!(field = name, "ignoring unknown response field"),
            }
        }
    }

    pub fn set(&mut self, field: ResponseField, include: bool) {
        self.enabled[Self::index(field)] = include;
    }

    pub fn is_enabled(&self, field: ResponseField) -> bool {
        self.enabled[Self::index(field)]
    }

    /// Every known field with its current flag, in declaration order
    pub fn current(&self) -> Vec<(&'static str, bool)> {
        ResponseField::ALL
            .iter()
            .zip(self.enabled)
            .map(|(field, include)| (field.name(), include))
            .collect()
    }

    /// Enabled field names joined by commas, as sent in `fields`
    pub fn joined(&self) -> String {
        ResponseField::ALL
            .iter()
            .zip(self.enabled)
            .filter(|(_, include)| *include)
            .map(|(field, _)| field.name())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn index(field: ResponseField) -> usize {
        // ALL lists variants in declaration order
        field as usize
    }
}
