use crate::application::read_models::TreeReadModel;
use crate::shared::Result;

/// TreeFormatter port for rendering a dependency tree
///
/// Implementations turn the read model into text (plain tree, JSON,
/// Markdown, ...).
pub trait TreeFormatter {
    /// Formats the read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &TreeReadModel) -> Result<String>;
}
