use std::error::Error as StdError;
use std::path::Path;
use tera::{Context, Tera};

use crate::constants::template::{ONE_OFF_TEMPLATE, TEMPLATE_GLOB};
use crate::debug;
use crate::error::*;
use crate::log::debug_message;
use crate::registry::FilterRegistry;

/// TemplateRenderer wraps a Tera engine built with an explicit set of filters.
///
/// The filters are injected at construction time through a [`FilterRegistry`],
/// so every renderer decides which filters its templates can call.
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Creates a renderer without templates, installing the given filters
    pub fn new(registry: &FilterRegistry) -> Self {
        let mut tera = Tera::default();
        registry.apply(&mut tera);
        Self { tera }
    }

    /// Creates a renderer loading every `.html` template found under the given directory
    ///
    /// # Arguments
    /// * `templates_dir` - The directory holding the templates
    /// * `registry` - The filters made available to the templates
    ///
    /// # Returns
    /// The renderer, or an error if the directory does not exist or a template fails to parse
    pub fn from_dir(templates_dir: &Path, registry: &FilterRegistry) -> Result<Self> {
        if !templates_dir.is_dir() {
            return Err(Error::TemplateNotFound {
                path: templates_dir.display().to_string(),
                cause: "directory does not exist".to_string(),
            });
        }

        let glob = templates_dir.join(TEMPLATE_GLOB);
        let mut tera = Tera::new(&glob.to_string_lossy())?;
        registry.apply(&mut tera);
        debug!(
            "Loaded {} templates from {}",
            tera.get_template_names().count(),
            templates_dir.display()
        );

        Ok(Self { tera })
    }

    /// Adds a template from its raw content
    pub fn add_template(&mut self, name: &str, content: &str) -> Result<()> {
        self.tera.add_raw_template(name, content)?;
        Ok(())
    }

    /// Renders a registered template with the given context
    ///
    /// # Arguments
    /// * `name` - The name of the template
    /// * `context` - The variables available to the template
    ///
    /// # Returns
    /// The rendered text, or a render error carrying every cause reported by the engine
    pub fn render(&self, name: &str, context: &Context) -> Result<String> {
        self.tera
            .render(name, context)
            .map_err(Self::flatten_render_error)
    }

    /// Renders a one-off template given as a string with the given context
    pub fn render_str(&mut self, content: &str, context: &Context) -> Result<String> {
        self.tera.add_raw_template(ONE_OFF_TEMPLATE, content)?;
        let result = self.render(ONE_OFF_TEMPLATE, context);
        self.tera.templates.remove(ONE_OFF_TEMPLATE);
        result
    }

    /// Joins the engine error and its chain of sources into a single message
    fn flatten_render_error(e: tera::Error) -> Error {
        let mut error_msg = e.to_string();
        let mut current = e.source();
        while let Some(source) = current {
            error_msg.push_str("\nCaused by: ");
            error_msg.push_str(&source.to_string());
            current = source.source();
        }
        debug!(debug_message("Template render failed", format!(" : {:?}", e)));
        Error::TemplateRenderError(error_msg)
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new(&FilterRegistry::default())
    }
}
