//! generate-readme — render the `README.md` of an OpenStudioLandscapes Feature.
//!
//! # Usage
//!
//! ```text
//! generate-readme [-v | -vv] --versions 3.11 [3.12 ...]
//! generate-readme --versions 3.11 --output docs/README.md
//! generate-readme --versions 3.11 --project-dir ../OpenStudioLandscapes-Ayon --diff
//! ```
//!
//! Regenerating every Feature checked out under `.features`:
//!
//! ```text
//! for d in ./.features/* ; do generate-readme -v --project-dir "$d" --versions 3.11 ; done
//! ```

mod logging;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use readme_core::{Configuration, OutputMode, Verbosity, VersionToken, DEFAULT_OUTPUT};
use readme_writer::pipeline;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "generate-readme",
    version,
    about = "A tool to generate a README.md",
    long_about = None,
)]
struct Cli {
    /// Set log level to INFO (repeat as -vv for DEBUG).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Set log level to DEBUG.
    #[arg(long = "very-verbose")]
    very_verbose: bool,

    /// Python version(s) to use for testing, e.g. 3.11. Supply multiple
    /// versions separated by spaces. Repeating the flag adds more.
    #[arg(
        long,
        required = true,
        num_args = 1..,
        action = ArgAction::Append,
        value_name = "VERSIONS"
    )]
    versions: Vec<VersionToken>,

    /// Where to write the README. Relative paths start at --project-dir.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Feature repository root used to discover the project name.
    #[arg(long, value_name = "DIR", default_value = ".")]
    project_dir: PathBuf,

    /// Render and report the target without writing anything.
    #[arg(long, conflicts_with = "diff")]
    dry_run: bool,

    /// Show a unified diff against the current README without writing.
    #[arg(long)]
    diff: bool,
}

impl Cli {
    fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.very_verbose)
    }

    fn mode(&self) -> OutputMode {
        if self.diff {
            OutputMode::Diff
        } else if self.dry_run {
            OutputMode::DryRun
        } else {
            OutputMode::Write
        }
    }

    fn into_configuration(self) -> Result<(Configuration, PathBuf)> {
        let verbosity = self.verbosity();
        let mode = self.mode();
        let config = Configuration::new(self.versions, verbosity)
            .context("invalid --versions")?
            .with_output(self.output)
            .with_mode(mode);
        Ok((config, self.project_dir))
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbosity());

    let (config, project_dir) = cli.into_configuration()?;
    tracing::info!(
        versions = config.versions().len(),
        verbosity = %config.verbosity(),
        "generating README in {}",
        project_dir.display()
    );

    let outcome = pipeline::run(&config, &project_dir).with_context(|| {
        format!(
            "failed to generate README for '{}'",
            project_dir.display()
        )
    })?;
    report::print_outcome(&outcome);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("generate-readme").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn versions_are_collected_in_order() {
        let cli = parse(&["--versions", "3.10", "3.11"]).unwrap();
        let got: Vec<&str> = cli.versions.iter().map(VersionToken::as_str).collect();
        assert_eq!(got, vec!["3.10", "3.11"]);
    }

    #[test]
    fn repeated_versions_flag_appends() {
        let cli = parse(&["--versions", "3.11", "--versions", "3.12", "3.10"]).unwrap();
        let got: Vec<&str> = cli.versions.iter().map(VersionToken::as_str).collect();
        assert_eq!(got, vec!["3.11", "3.12", "3.10"]);
    }

    #[test]
    fn versions_are_required() {
        let err = parse(&["-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn versions_need_a_value() {
        assert!(parse(&["--versions"]).is_err());
    }

    #[test]
    fn blank_version_is_a_usage_error() {
        let err = parse(&["--versions", " "]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn double_v_means_debug() {
        let cli = parse(&["-vv", "--versions", "3.11"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Debug);
    }

    #[test]
    fn verbose_and_very_verbose_pick_debug() {
        let cli = parse(&["-v", "--very-verbose", "--versions", "3.11"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Debug);
    }

    #[test]
    fn dry_run_conflicts_with_diff() {
        let err = parse(&["--dry-run", "--diff", "--versions", "3.11"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn defaults_target_readme_in_current_dir() {
        let (config, project_dir) = parse(&["--versions", "3.11"])
            .unwrap()
            .into_configuration()
            .unwrap();
        assert_eq!(config.output(), std::path::Path::new("README.md"));
        assert_eq!(config.mode(), OutputMode::Write);
        assert_eq!(project_dir, PathBuf::from("."));
    }
}
