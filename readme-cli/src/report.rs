//! Human-readable summary of a pipeline run.

use colored::Colorize;

use readme_writer::{Action, PipelineOutcome, WriteResult};

pub fn print_outcome(outcome: &PipelineOutcome) {
    let repo = &outcome.identity.repo_name;
    match &outcome.action {
        Action::Wrote(result) => print_write(repo, result),
        Action::Diff { path, unified: None } => {
            println!("No differences for '{}'.", path.display());
        }
        Action::Diff {
            unified: Some(diff),
            ..
        } => {
            print!("{diff}");
            if !diff.ends_with('\n') {
                println!();
            }
        }
    }
}

fn print_write(repo: &str, result: &WriteResult) {
    let tick = "✓".green().bold();
    let (prefix, verb, marker) = match result {
        WriteResult::Created { .. } => ("", "created", "✎"),
        WriteResult::Replaced { .. } => ("", "replaced", "✎"),
        WriteResult::WouldWrite { .. } => ("[dry-run] ", "would be written", "~"),
    };
    println!("{prefix}{tick} README for '{repo}' {verb}");
    println!("  {marker}  {}", result.path().display());
}
