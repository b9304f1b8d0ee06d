//! Template engine abstraction.
//!
//! [`TemplateEngine`] keeps the renderer independent of the backend. The
//! implementation is [`MiniJinjaEngine`], configured for source code output:
//! no auto-escaping, block tags on their own line leave no trace, and the
//! trailing newline of a template is kept.

use std::path::Path;

use minijinja::{AutoEscape, Environment, Value};

use crate::error::RenderError;

/// A template engine that can render templates with data.
pub trait TemplateEngine: Send + Sync {
    /// Renders a template string with the given data.
    fn render_template(&self, template: &str, data: &serde_json::Value) -> Result<String, RenderError>;

    /// Adds a named template to the engine.
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError>;

    /// Renders a previously registered (or loadable) template.
    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError>;

    /// Checks if a template with the given name exists.
    fn has_template(&self, name: &str) -> bool;
}

/// MiniJinja-based template engine.
///
/// ```rust
/// use twconst_render::{MiniJinjaEngine, TemplateEngine};
/// use serde_json::json;
///
/// let engine = MiniJinjaEngine::new();
/// let output = engine
///     .render_template("String X = {{ v | java_string }};", &json!({ "v": "w-1/2" }))
///     .unwrap();
/// assert_eq!(output, r#"String X = "w-1/2";"#);
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates an engine with the Java filters registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        register_filters(&mut env);
        Self { env }
    }

    /// Creates an engine that loads templates from `dir` on demand.
    pub fn with_template_dir(dir: impl AsRef<Path>) -> Self {
        let mut engine = Self::new();
        engine.env.set_loader(minijinja::path_loader(dir));
        engine
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render_template(&self, template: &str, data: &serde_json::Value) -> Result<String, RenderError> {
        let value = Value::from_serialize(data);
        Ok(self.env.render_str(template, value)?)
    }

    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        let value = Value::from_serialize(data);
        Ok(tmpl.render(value)?)
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }
}

/// Registers the Java source filters on a MiniJinja environment.
///
/// - `java_string`: a double-quoted Java string literal.
/// - `javadoc`: text safe to place inside a `/** ... */` comment.
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("java_string", java_string);
    env.add_filter("javadoc", javadoc);
}

/// Quotes `value` as a Java string literal.
pub fn java_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Neutralizes comment terminators so `value` cannot close a doc comment.
pub fn javadoc(value: &str) -> String {
    value.replace("*/", "*&#47;")
}
