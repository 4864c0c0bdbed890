// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::PreconditionError;
use crate::shape::Shape;
use crate::user::{NewUser, UserInput};
use crate::validator::{StructuralValidator, Validator};

use super::structural::{supports_indexed_access, IterationRule, OptionalIndexedAccessRule};

/// Keys a record-shaped save result must carry.
pub const DEFAULT_RESULT_KEYS: [&str; 3] = ["name", "categories", "attributes"];

/// The boundary check run before a user record is handed to persistence.
///
/// Checks run in a fixed order and stop at the first failure:
/// presence of name and categories, name is text, categories iterate, attributes are
/// absent or a mapping.
#[derive(Clone, Copy, Debug)]
pub struct Preconditions {
    categories: IterationRule,
    attributes: OptionalIndexedAccessRule,
}

impl Default for Preconditions {
    fn default() -> Self {
        Self {
            categories: IterationRule::new("categories"),
            attributes: OptionalIndexedAccessRule::new("attributes"),
        }
    }
}

impl<'a> Validator<UserInput<'a>> for Preconditions {
    type Output = NewUser<'a>;
    type Error = PreconditionError;

    fn validate(&self, input: &UserInput<'a>) -> Result<NewUser<'a>, PreconditionError> {
        let UserInput {
            name,
            categories,
            attributes,
        } = *input;

        if name.is_falsy() {
            return Err(PreconditionError::MissingName);
        }
        if categories.is_falsy() {
            return Err(PreconditionError::MissingCategories);
        }
        let name = name.as_text().ok_or(PreconditionError::NameNotText)?;
        self.categories.validate_structure(categories)?;
        self.attributes.validate_structure(&attributes)?;

        Ok(NewUser {
            name,
            categories,
            attributes,
        })
    }
}

/// Checks a save result: absent/empty, or a mapping carrying every key in `required`.
pub fn check_result<R, K>(result: &R, required: &[K]) -> Result<(), PreconditionError>
where
    R: Shape + ?Sized,
    K: AsRef<str>,
{
    if result.is_falsy() {
        return Ok(());
    }
    if !supports_indexed_access(result) {
        return Err(PreconditionError::ResultNotMapping);
    }
    let missing: Vec<String> = required
        .iter()
        .map(AsRef::as_ref)
        .filter(|key| !result.contains_key(key))
        .map(str::to_owned)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(PreconditionError::ResultMissingKeys { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_name_is_missing_before_anything_else() {
        let input = UserInput::new(&"", &42_i32);
        let err = Preconditions::default().validate(&input).unwrap_err();
        assert_eq!(err, PreconditionError::MissingName);
    }

    #[test]
    fn non_text_name_is_rejected() {
        let categories = vec!["admin"];
        let input = UserInput::new(&7_i32, &categories);
        let err = Preconditions::default().validate(&input).unwrap_err();
        assert_eq!(err, PreconditionError::NameNotText);
    }

    #[test]
    fn attributes_list_is_rejected() {
        let categories = vec!["admin"];
        let attrs = json!([1, 2]);
        let input = UserInput::new(&"alice", &categories).with_attributes(&attrs);
        let err = Preconditions::default().validate(&input).unwrap_err();
        assert_eq!(
            err,
            PreconditionError::NotOptionalMapping { field: "attributes" }
        );
    }

    #[test]
    fn falsy_result_passes() {
        assert!(check_result(&json!(null), &DEFAULT_RESULT_KEYS).is_ok());
        assert!(check_result(&false, &DEFAULT_RESULT_KEYS).is_ok());
    }

    #[test]
    fn result_must_be_a_mapping() {
        let err = check_result(&json!(["name"]), &DEFAULT_RESULT_KEYS).unwrap_err();
        assert_eq!(err, PreconditionError::ResultNotMapping);
    }

    #[test]
    fn result_keys_are_reported_in_order() {
        let err = check_result(&json!({"name": "alice"}), &DEFAULT_RESULT_KEYS).unwrap_err();
        assert_eq!(
            err,
            PreconditionError::ResultMissingKeys {
                missing: vec!["categories".into(), "attributes".into()]
            }
        );
    }
}
