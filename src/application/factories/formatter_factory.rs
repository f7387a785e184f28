use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TextTreeFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::TreeFormatter;

/// Rendering options that only some formatters honour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI colours (text format only)
    pub color: bool,
    /// Number of tree levels to print (text and Markdown formats)
    pub max_depth: Option<usize>,
}

/// Factory for creating tree formatters
///
/// Belongs in the application layer as it picks the infrastructure adapter
/// matching the requested output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use gradle_deptree::application::dto::OutputFormat;
    /// use gradle_deptree::application::factories::{FormatterFactory, RenderOptions};
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, RenderOptions::default());
    /// ```
    pub fn create(format: OutputFormat, options: RenderOptions) -> Box<dyn TreeFormatter> {
        match format {
            OutputFormat::Text => Box::new(
                TextTreeFormatter::new()
                    .with_color(options.color)
                    .with_max_depth(options.max_depth),
            ),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => {
                Box::new(MarkdownFormatter::new().with_max_depth(options.max_depth))
            }
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use gradle_deptree::application::dto::OutputFormat;
    /// use gradle_deptree::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Rendering dependency tree...",
            OutputFormat::Json => "📝 Generating JSON output...",
            OutputFormat::Markdown => "📝 Generating Markdown output...",
        }
    }
}
