//! Shared runner for `check`, `ui` and `boundary`.

use anyhow::{Context, Result};
use archcheck::rules::RuleSet;
use archcheck::utils::paths::has_extension;
use archcheck::{CheckError, Checker, Scope};
use std::path::{Component, Path, PathBuf};

use crate::config_resolver;
use crate::OutputFormat;

/// Options shared by the checking subcommands.
pub struct CheckArgs {
    /// Files or directories as given on the command line.
    pub paths: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated rule ids or codes.
    pub rules: Option<String>,
    /// Composition worker threads.
    pub jobs: Option<usize>,
    /// Disable boundary fail-fast.
    pub exhaustive: bool,
    /// Subsystems to run.
    pub scope: Scope,
    /// Forced boundary zone.
    pub zone: Option<String>,
}

/// Runs a checking subcommand and exits non-zero on findings.
pub fn run(args: &CheckArgs, config_path: Option<&Path>) -> Result<()> {
    if args.paths.is_empty() {
        tracing::debug!("No paths given");
        return Ok(());
    }

    let config = config_resolver::resolve(Path::new("."), config_path).load()?;
    let files = expand_paths(&args.paths, &config.composition.extensions)?;

    let mut builder = Checker::builder().config(config).scope(args.scope);
    if let Some(filter) = &args.rules {
        let names: Vec<&str> = filter
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        builder = builder.rules(RuleSet::only(&names));
    }
    if let Some(zone) = &args.zone {
        builder = builder.zone(zone.clone());
    }
    if let Some(jobs) = args.jobs {
        builder = builder.jobs(jobs);
    }
    if args.exhaustive {
        builder = builder.fail_fast(false);
    }
    let checker = builder.build().context("Invalid configuration")?;

    tracing::info!(
        "Checking {} files with {} composition rules",
        files.len(),
        checker.rule_count()
    );

    let report = match checker.check_files(&files) {
        Ok(report) => report,
        Err(err @ CheckError::Parse(_)) => {
            eprintln!("{:?}", miette::Report::new(err));
            std::process::exit(2);
        }
        Err(err) => return Err(err).context("Check failed"),
    };

    super::output::print(&report, args.format)?;

    if report.has_violations() {
        std::process::exit(report.exit_code());
    }

    Ok(())
}

/// Replaces directory arguments with the source files beneath them.
///
/// Files keep their command-line position; each directory contributes its
/// matches in sorted order. File arguments are passed through unfiltered so
/// that a missing file still fails loudly.
fn expand_paths(paths: &[PathBuf], extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(discover_files(path, extensions)?);
        } else {
            files.push(strip_cur_dir(path));
        }
    }
    Ok(files)
}

fn discover_files(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false).git_ignore(true);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_extension(path, extensions) {
            files.push(strip_cur_dir(path));
        }
    }

    files.sort();
    tracing::debug!("Found {} files under {}", files.len(), root.display());
    Ok(files)
}

/// Drops leading `./` components so configured path prefixes match.
fn strip_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .skip_while(|c| matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn exts() -> Vec<String> {
        vec!["ts".to_string(), "tsx".to_string()]
    }

    #[test]
    fn strips_leading_cur_dir() {
        assert_eq!(
            strip_cur_dir(Path::new("./apps/frontend/src/App.tsx")),
            PathBuf::from("apps/frontend/src/App.tsx")
        );
        assert_eq!(strip_cur_dir(Path::new("a/./b.ts")), PathBuf::from("a/b.ts"));
    }

    #[test]
    fn directories_expand_sorted_and_filtered() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src/b")).unwrap();
        fs::write(tmp.path().join("src/b/Z.tsx"), "").unwrap();
        fs::write(tmp.path().join("src/A.ts"), "").unwrap();
        fs::write(tmp.path().join("src/readme.md"), "").unwrap();

        let files = discover_files(&tmp.path().join("src"), &exts()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(tmp.path()).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(names, vec!["src/A.ts", "src/b/Z.tsx"]);
    }

    #[test]
    fn file_arguments_pass_through() {
        let files = expand_paths(&[PathBuf::from("./missing.css")], &exts()).unwrap();
        assert_eq!(files, vec![PathBuf::from("missing.css")]);
    }
}
