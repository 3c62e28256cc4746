//! Registry property templates, rendered with Handlebars.

use crate::error::Result;
use forge_core::VALUE_PLACEHOLDER;
use handlebars::Handlebars;
use serde::Serialize;
use tracing::warn;

#[derive(Serialize)]
struct PropertyData<'v> {
    value: &'v str,
}

/// Template engine for `{{value}}` property templates.
///
/// Generated Dart is never HTML-escaped, so `'` and `&` pass through.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new template engine.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        Self { handlebars }
    }

    /// Render a template string directly.
    pub fn render_string<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        Ok(self.handlebars.render_template(template, data)?)
    }

    /// Substitute an already formatted value into a property template.
    ///
    /// A template Handlebars cannot parse (stray braces in the Dart fragment)
    /// falls back to plain placeholder replacement.
    pub fn render_property(&self, template: &str, formatted_value: &str) -> String {
        match self.render_string(template, &PropertyData { value: formatted_value }) {
            Ok(rendered) => rendered,
            Err(error) => {
                warn!(template, %error, "template render failed, substituting placeholder");
                template.replace(VALUE_PLACEHOLDER, formatted_value)
            }
        }
    }
}

impl Default for TemplateEngine<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_property() {
        let engine = TemplateEngine::new();
        assert_eq!(engine.render_property("Icons.{{value}}", "home"), "Icons.home");
        assert_eq!(
            engine.render_property("title: Text({{value}})", "'Tom & Jerry'"),
            "title: Text('Tom & Jerry')"
        );
    }

    #[test]
    fn test_unparseable_template_falls_back() {
        let engine = TemplateEngine::new();
        assert_eq!(
            engine.render_property("builder: (c) {{#if}} {{value}}", "x"),
            "builder: (c) {{#if}} x"
        );
    }

    #[test]
    fn test_render_string() {
        let engine = TemplateEngine::new();
        let rendered = engine
            .render_string("{{name}}State", &serde_json::json!({"name": "Login"}))
            .unwrap();
        assert_eq!(rendered, "LoginState");
    }
}
