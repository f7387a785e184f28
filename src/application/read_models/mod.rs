//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that formatters consume instead of domain objects.

pub mod tree_read_model;
pub mod tree_read_model_builder;

pub use tree_read_model::{NodeView, ReportMetadataView, StatisticsView, TreeReadModel};
pub use tree_read_model_builder::TreeReadModelBuilder;
