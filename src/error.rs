use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("filter `{filter}` expected a {expected} but got {found}")]
    TypeMismatch {
        filter: String,
        expected: String,
        found: String,
    },
    #[error("invalid argument `{arg}` for filter `{filter}`. Cause : {cause}")]
    InvalidArgument {
        filter: String,
        arg: String,
        cause: String,
    },
    #[error("filter with the same name already registered : \"{0}\"")]
    DuplicateFilter(String),
    #[error("unable to open template directory {path:?}. Cause : {cause}")]
    TemplateNotFound { path: String, cause: String },
    #[error("error rendering template. Cause : {0}")]
    TemplateRenderError(String),
    #[error(transparent)]
    Tera(#[from] ::tera::Error),
}

impl From<Error> for ::tera::Error {
    fn from(error: Error) -> Self {
        match error {
            Error::Tera(inner) => inner,
            other => ::tera::Error::msg(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Returns the JSON type name of a template value, as shown in error messages
pub fn value_type_name(value: &::tera::Value) -> &'static str {
    use ::tera::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn default_error_handler(error: &Error, output: &mut dyn Write) {
    use nu_ansi_term::Color::Red;

    match error {
        Error::TypeMismatch { .. } | Error::InvalidArgument { .. } => {
            writeln!(output, "{}: {}", Red.paint("[filter error]"), error).ok();
        }
        Error::TemplateNotFound { .. } | Error::TemplateRenderError(_) | Error::Tera(_) => {
            writeln!(output, "{}: {}", Red.paint("[template error]"), error).ok();
        }
        Error::DuplicateFilter(_) => {
            writeln!(output, "{}: {}", Red.paint("[registry error]"), error).ok();
        }
    };
}
