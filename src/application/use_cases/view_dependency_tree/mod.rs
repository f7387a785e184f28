use crate::application::dto::{TreeRequest, TreeResponse};
use crate::dependency_tree::domain::{count_total_nodes, DependencyNode, TreeStatistics};
use crate::dependency_tree::services::{
    MetadataGenerator, SearchFilter, TreeParser, MAX_NESTING_DEPTH,
};
use crate::ports::outbound::{ProgressReporter, ReportReader};
use crate::shared::Result;

/// ViewDependencyTreeUseCase - Core use case for loading and searching a report
///
/// Orchestrates the workflow (read, parse, filter, summarise) with generic
/// dependency injection for the infrastructure pieces.
///
/// # Type Parameters
/// * `RR` - ReportReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ViewDependencyTreeUseCase<RR, PR> {
    report_reader: RR,
    progress_reporter: PR,
}

impl<RR, PR> ViewDependencyTreeUseCase<RR, PR>
where
    RR: ReportReader,
    PR: ProgressReporter,
{
    /// Creates a new ViewDependencyTreeUseCase with injected dependencies
    pub fn new(report_reader: RR, progress_reporter: PR) -> Self {
        Self {
            report_reader,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// An empty report, or a search with no result, is not an error; the
    /// response reports it and the caller decides what to do.
    pub fn execute(&self, request: TreeRequest) -> Result<TreeResponse> {
        // Step 1: Read and parse the report
        let forest = self.read_and_parse(&request)?;

        // Step 2: Apply the search filter if a query was given
        let filtered = self.apply_search(&forest, &request);

        // Step 3: Summarise
        let statistics = TreeStatistics::collect(&forest, &filtered);
        let metadata = MetadataGenerator::generate_default_metadata(&request.source.to_string());

        Ok(TreeResponse::new(
            forest,
            filtered,
            request.active_query().map(str::to_string),
            statistics,
            metadata,
        ))
    }

    /// Reads the report and parses it, reporting what was found
    fn read_and_parse(&self, request: &TreeRequest) -> Result<Vec<DependencyNode>> {
        self.progress_reporter.report(&format!(
            "📖 Loading dependency report from: {}",
            request.source
        ));

        let text = self.report_reader.read_report(&request.source)?;
        let forest = TreeParser::parse_with_policy(&text, request.orphan_policy);

        if forest.is_empty() {
            self.progress_reporter.report_error(
                "⚠️  Warning: No dependency lines were recognized in the report. \
                 Expected lines such as '+--- group:artifact:version'.",
            );
        } else {
            self.progress_reporter.report(&format!(
                "✅ Parsed {} root dependenc{} ({} in total)",
                forest.len(),
                if forest.len() == 1 { "y" } else { "ies" },
                count_total_nodes(&forest)
            ));
        }

        if TreeStatistics::collect(&forest, &[]).max_depth() >= MAX_NESTING_DEPTH {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Lines nested deeper than {} levels were attached at level {}.",
                MAX_NESTING_DEPTH, MAX_NESTING_DEPTH
            ));
        }

        Ok(forest)
    }

    /// Filters the forest by the request's query, or returns it unchanged
    fn apply_search(&self, forest: &[DependencyNode], request: &TreeRequest) -> Vec<DependencyNode> {
        let Some(query) = request.active_query() else {
            return forest.to_vec();
        };

        self.progress_reporter
            .report(&format!("🔍 Searching for \"{}\"...", query));

        let filtered = SearchFilter::filter_forest(forest, query);

        if filtered.is_empty() {
            self.progress_reporter
                .report_error(&format!("⚠️  No dependencies match \"{}\".", query));
        } else {
            self.progress_reporter.report_completion(&format!(
                "✅ {} of {} dependencies shown for \"{}\"",
                count_total_nodes(&filtered),
                count_total_nodes(forest),
                query
            ));
        }

        filtered
    }
}
