//! `titleize` is a library providing a title-casing filter for the Tera template engine.
//!
//! The filter splits its input on underscores, hyphens and spaces, capitalizes
//! every word and joins them back with single spaces, turning slugs such as
//! `release_notes-2024` into `Release Notes 2024`.
//!
//! Filters are never registered globally: build a `registry::FilterRegistry`
//! and hand it to the engine, either directly with `FilterRegistry::apply` or
//! through `renderer::TemplateRenderer`.
//!
//! "Hello world" example:
//! ```
//! use tera::Context;
//! use titleize::registry::FilterRegistry;
//! use titleize::renderer::TemplateRenderer;
//!
//! let mut renderer = TemplateRenderer::new(&FilterRegistry::default());
//! let mut context = Context::new();
//! context.insert("slug", "hello_world");
//!
//! let rendered = renderer
//!     .render_str("{{ slug | titleize }}", &context)
//!     .unwrap();
//! assert_eq!(rendered, "Hello World");
//! ```

pub mod constants;
pub mod error;
pub mod filters;
pub mod log;
pub mod registry;
pub mod renderer;
pub mod string_utils;

/// The titleize prelude
///
/// This module re-exports the most commonly used items from titleize.
/// You can use it with `use titleize::prelude::*;` to bring all common items into scope.
pub mod prelude {
    // Re-export commonly used types
    pub use crate::error::{Error, Result};
    pub use crate::registry::FilterRegistry;
    pub use crate::renderer::TemplateRenderer;
    pub use crate::string_utils::CasePolicy;

    // Re-export commonly used functions
    pub use crate::filters::titleize::create_titleize_filter;
    pub use crate::string_utils::{titleize, titleize_with};
}
