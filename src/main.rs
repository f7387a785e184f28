mod cli;

use cli::Args;
use gradle_deptree::adapters::outbound::console::StderrProgressReporter;
use gradle_deptree::adapters::outbound::filesystem::FileSystemReader;
use gradle_deptree::application::dto::{OutputFormat, TreeRequest};
use gradle_deptree::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType, RenderOptions,
};
use gradle_deptree::application::read_models::TreeReadModelBuilder;
use gradle_deptree::application::use_cases::ViewDependencyTreeUseCase;
use gradle_deptree::config::{self, ConfigFile};
use gradle_deptree::dependency_tree::policies::OrphanPolicy;
use gradle_deptree::ports::outbound::ReportSource;
use gradle_deptree::shared::error::{ExitCode, TreeError};
use gradle_deptree::shared::Result;
use std::io::{self, IsTerminal};
use std::process;

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here, on stdout
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;

    // Command-line flags win over the config file
    let format = args
        .format
        .or_else(|| config.output_format())
        .unwrap_or_default();
    let query = args.search.clone().or_else(|| config.search.clone());
    let max_depth = args.max_depth.or(config.max_depth);
    let promote_orphans = args.promote_orphans || config.promote_orphans.unwrap_or(false);
    let color = use_color(&args, &config, format);

    let source = ReportSource::from_arg(args.input.as_deref().unwrap_or("-"));
    if source == ReportSource::Stdin && io::stdin().is_terminal() {
        return Err(TreeError::Validation {
            message: "No dependency report given.\n\n💡 Hint: Pass a file, e.g. `gradle-deptree deps.txt`, or pipe one in: `./gradlew dependencies | gradle-deptree`".to_string(),
        }
        .into());
    }

    // Create adapters (Dependency Injection)
    let report_reader = FileSystemReader::new();
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = ViewDependencyTreeUseCase::new(report_reader, progress_reporter);

    let request = TreeRequest::builder()
        .source(source)
        .query(query)
        .orphan_policy(OrphanPolicy::from_promote_flag(promote_orphans))
        .build()?;

    let response = use_case.execute(request)?;

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(format));
    }

    let read_model = TreeReadModelBuilder::build(&response);
    let formatter = FormatterFactory::create(format, RenderOptions { color, max_depth });
    let formatted_output = formatter.format(&read_model)?;

    let presenter_type = match args.output {
        Some(path) => PresenterType::File(path),
        None => PresenterType::Stdout,
    };
    PresenterFactory::create(presenter_type).present(&formatted_output)?;

    if response.has_matches() {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::NoMatches)
    }
}

/// Loads the explicit `--config` file, or one discovered in the working directory
fn load_config(args: &Args) -> Result<ConfigFile> {
    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&std::env::current_dir()?)?,
    };
    Ok(config.unwrap_or_default())
}

/// Colour only for text written to a terminal, unless turned off by flag, config or NO_COLOR
fn use_color(args: &Args, config: &ConfigFile, format: OutputFormat) -> bool {
    format == OutputFormat::Text
        && !args.no_color
        && config.color.unwrap_or(true)
        && args.output.is_none()
        && std::env::var_os("NO_COLOR").is_none()
        && io::stdout().is_terminal()
}
