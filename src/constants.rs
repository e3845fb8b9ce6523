//! Module for shared constants used across the codebase

/// Names under which the filters are registered in the template engine
pub mod filters {
    /// The title-casing filter
    pub const TITLEIZE: &str = "titleize";
}

pub mod titleize {
    /// Characters splitting the input into words
    pub const DELIMITERS: [char; 3] = ['_', '-', ' '];

    /// Pattern matching a run of one or more delimiters
    pub const DELIMITER_PATTERN: &str = r"[_\- ]+";

    /// Separator used to join the capitalized words
    pub const WORD_SEPARATOR: &str = " ";

    /// Name of the optional filter argument selecting the case policy
    pub const CASE_ARG: &str = "case";
}

pub mod template {
    /// Glob used to load templates from a theme directory
    pub const TEMPLATE_GLOB: &str = "**/*.html";

    /// Name given to one-off templates rendered from a string
    pub const ONE_OFF_TEMPLATE: &str = "__titleize_one_off__";
}

/// Environment variable enabling debug output
pub const DEBUG_ENV_VAR: &str = "TITLEIZE_DEBUG";
