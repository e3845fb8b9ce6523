//! Filters for the Tera template engine
//! Currently supports the following filters:
//! - `titleize` : Split the text on `_`, `-` and spaces and capitalize every word

pub mod titleize;
