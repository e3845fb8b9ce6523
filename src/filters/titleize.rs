use std::collections::HashMap;
use tera::{Error as TeraError, Value};

use crate::constants::filters::TITLEIZE;
use crate::constants::titleize::CASE_ARG;
use crate::error::{value_type_name, Error};
use crate::string_utils::{titleize_with, CasePolicy};

/// Create a titleize filter closure for Tera
///
/// # Returns
/// A filter that splits the input text on underscores, hyphens and spaces,
/// capitalizes every word and joins them back with single spaces.
/// The optional "case" named argument selects what happens to the rest of each word:
/// `"lower"` (default) lowercases it, `"preserve"` leaves it untouched.
/// Non-string values are rejected with a type mismatch error, failing the render.
///
/// # Examples
/// ```tera
/// {{ "getting_started" | titleize }} # Getting Started
/// {{ "rust-API_docs" | titleize(case="preserve") }} # Rust API Docs
/// ```
pub fn create_titleize_filter(
) -> impl Fn(&Value, &HashMap<String, Value>) -> Result<Value, TeraError> {
    move |value: &Value, args: &HashMap<String, Value>| {
        let text = value.as_str().ok_or_else(|| Error::TypeMismatch {
            filter: TITLEIZE.to_string(),
            expected: "string".to_string(),
            found: value_type_name(value).to_string(),
        })?;
        let policy = case_policy(args)?;

        Ok(Value::String(titleize_with(text, policy)))
    }
}

/// Reads the case policy from the filter arguments, defaulting to lowercase
fn case_policy(args: &HashMap<String, Value>) -> Result<CasePolicy, Error> {
    match args.get(CASE_ARG) {
        None => Ok(CasePolicy::default()),
        Some(raw) => {
            serde_json::from_value::<CasePolicy>(raw.clone()).map_err(|_| Error::InvalidArgument {
                filter: TITLEIZE.to_string(),
                arg: CASE_ARG.to_string(),
                cause: format!(
                    "expected \"{}\" or \"{}\" but got {}",
                    CasePolicy::Lower,
                    CasePolicy::Preserve,
                    raw
                ),
            })
        }
    }
}
