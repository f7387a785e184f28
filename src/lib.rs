//! gradle-deptree - browse and search Gradle dependency reports
//!
//! This library parses the text printed by `gradle dependencies` into a
//! forest of dependency nodes and filters it by a search query while
//! keeping the path from each root to every match.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_tree`): Parser, search filter and value objects
//! - **Application Layer** (`application`): Use cases, DTOs, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use gradle_deptree::prelude::*;
//!
//! let report = "\
//! +--- com.squareup.retrofit2:retrofit:2.9.0
//! |    \\--- com.squareup.okhttp3:okhttp:3.14.9 -> 4.12.0
//! \\--- junit:junit:4.13.2
//! ";
//!
//! let forest = TreeParser::parse(report);
//! assert_eq!(count_total_nodes(&forest), 3);
//!
//! let filtered = SearchFilter::filter_forest(&forest, "OKHTTP");
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].children()[0].version(), "3.14.9 -> 4.12.0");
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_tree;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextTreeFormatter,
    };
    pub use crate::application::dto::{OutputFormat, TreeRequest, TreeResponse};
    pub use crate::application::read_models::{TreeReadModel, TreeReadModelBuilder};
    pub use crate::application::use_cases::ViewDependencyTreeUseCase;
    pub use crate::dependency_tree::domain::{
        count_total_nodes, DependencyNode, ReportMetadata, SearchQuery, TreeStatistics,
    };
    pub use crate::dependency_tree::policies::OrphanPolicy;
    pub use crate::dependency_tree::services::{MatchHighlighter, SearchFilter, TreeParser};
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ReportReader, ReportSource, TreeFormatter,
    };
    pub use crate::shared::Result;
}
