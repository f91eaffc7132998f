//! CLI entry point for scopetable

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use scopetable::{
    CheckRunner, FilterCriteria, LineFormatter, OutputConfig, ScopeError, ScopeTable, SymbolMode,
    load_cases, load_computed, load_selections, print_json, print_report,
};
use tracing::debug;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    Always,
    Never,
}

fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "scopetable")]
#[command(about = "Render a computed access scope as tree-table rows")]
#[command(version)]
struct Args {
    /// Computed access scope JSON file (array of parents with children)
    #[arg(required_unless_present = "check", conflicts_with = "check")]
    computed: Option<PathBuf>,

    /// Selections JSON file ({"selectedParents": [...], "selectedChildren": [[child, parent], ...]})
    #[arg(short = 's', long = "selections", value_name = "FILE")]
    selections: Option<PathBuf>,

    /// Only show the parent named "parent<NAME>"
    #[arg(short = 'p', long = "parent-filter", value_name = "NAME")]
    parent_filter: Option<String>,

    /// Only show children named "child<NAME>"
    #[arg(short = 'c', long = "child-filter", value_name = "NAME")]
    child_filter: Option<String>,

    /// How inclusion state is shown
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = SymbolMode::TwoState)]
    mode: SymbolMode,

    /// Shorthand for --mode three-state
    #[arg(short = '3', long = "three-state", conflicts_with = "mode")]
    three_state: bool,

    /// Output rows as JSON
    #[arg(long = "json")]
    json: bool,

    /// Warn on stderr about selections that match nothing in the computed scope
    #[arg(long = "report-stale")]
    report_stale: bool,

    /// Run a JSON file of check cases and report differences
    #[arg(long = "check", value_name = "CASES")]
    check: Option<PathBuf>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn symbol_mode(&self) -> SymbolMode {
        if self.three_state {
            SymbolMode::ThreeState
        } else {
            self.mode
        }
    }

    fn filter_criteria(&self) -> Option<FilterCriteria> {
        if self.parent_filter.is_none() && self.child_filter.is_none() {
            return None;
        }
        Some(FilterCriteria {
            parent_name_filter: self.parent_filter.clone(),
            child_name_filter: self.child_filter.clone(),
        })
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();
    let use_color = should_use_color(args.color);

    let result = match (&args.check, &args.computed) {
        (Some(cases_path), _) => run_checks(cases_path, use_color),
        (None, Some(computed_path)) => {
            render_table(computed_path, &args, use_color).map(|()| true)
        }
        (None, None) => unreachable!("clap requires COMPUTED unless --check is given"),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("scopetable: {}", e);
            process::exit(1);
        }
    }
}

fn render_table(computed_path: &Path, args: &Args, use_color: bool) -> Result<(), ScopeError> {
    let computed = load_computed(computed_path)?;
    let selections = load_selections(args.selections.as_deref())?;
    let filter = args.filter_criteria();

    if args.report_stale {
        for stale in selections.stale_references(&computed) {
            eprintln!("scopetable: warning: selection '{}' matches nothing", stale);
        }
    }

    let rows = ScopeTable::new(&computed, &selections)
        .with_filter(filter.as_ref())
        .with_mode(args.symbol_mode())
        .rows()?;
    debug!(rows = rows.len(), "rendering");

    let written = if args.json {
        print_json(&rows)
    } else {
        LineFormatter::new(OutputConfig { use_color }).print(&rows)
    };
    written.map_err(ScopeError::Output)
}

/// Returns whether every case passed.
fn run_checks(cases_path: &Path, use_color: bool) -> Result<bool, ScopeError> {
    let cases = load_cases(cases_path)?;
    let mut runner = CheckRunner::new();
    runner.run_all(&cases);

    print_report(runner.outcomes(), use_color).map_err(ScopeError::Output)?;
    Ok(runner.all_passed())
}
