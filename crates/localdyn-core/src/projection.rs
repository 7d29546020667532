//! Projection expressions.
//!
//! Only the flat form is understood: a comma-separated list of top-level
//! attribute names, each optionally a `#placeholder` resolved through
//! `ExpressionAttributeNames`. Nested paths are treated as literal names.

use std::collections::HashMap;

use crate::storage::StorageError;

/// The attribute names a read should return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    names: Vec<String>,
}

impl Projection {
    /// Parses `expression`, substituting `#name` tokens from `names`.
    pub fn parse(expression: &str, names: &HashMap<String, String>) -> Result<Self, StorageError> {
        if expression.trim().is_empty() {
            return Err(StorageError::InvalidProjection(
                "The expression can not be empty".to_owned(),
            ));
        }

        let mut resolved = Vec::new();
        for token in expression.split(',').map(str::trim) {
            if token.is_empty() {
                return Err(StorageError::InvalidProjection(
                    "Syntax error; token: \",\"".to_owned(),
                ));
            }
            let name = if token.starts_with('#') {
                names
                    .get(token)
                    .ok_or_else(|| StorageError::UndefinedAttributeName {
                        placeholder: token.to_owned(),
                    })?
                    .clone()
            } else {
                token.to_owned()
            };
            if !resolved.contains(&name) {
                resolved.push(name);
            }
        }
        Ok(Self { names: resolved })
    }

    /// Builds a projection from already-resolved names.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Turns a legacy `AttributesToGet` list into a projection expression.
///
/// Names are joined verbatim; reserved words are not escaped.
#[must_use]
pub fn attributes_to_get_expression(attributes: &[String]) -> String {
    attributes.join(", ")
}
