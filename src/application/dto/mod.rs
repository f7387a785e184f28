/// Data Transfer Objects for the application layer
///
/// DTOs carry data between the application layer and adapters, keeping the
/// domain layer isolated.
mod output_format;
mod tree_request;
mod tree_response;

pub use output_format::OutputFormat;
pub use tree_request::{TreeRequest, TreeRequestBuilder};
pub use tree_response::TreeResponse;
