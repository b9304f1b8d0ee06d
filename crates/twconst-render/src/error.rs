//! Error types for Java rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The class template is neither built in nor present in the template
    /// directory.
    #[error("template not found: {0}")]
    MissingTemplate(String),

    /// The class template failed to compile or to render.
    #[error("template error: {0}")]
    Template(String),

    /// The view handed to the template could not be serialized.
    #[error("could not serialize the class view: {0}")]
    ViewModel(#[from] serde_json::Error),

    /// A package, class or method name that Java would reject.
    #[error("invalid Java {kind} `{name}`")]
    InvalidIdentifier { kind: &'static str, name: String },
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::TemplateNotFound => RenderError::MissingTemplate(err.to_string()),
            _ => RenderError::Template(err.to_string()),
        }
    }
}
