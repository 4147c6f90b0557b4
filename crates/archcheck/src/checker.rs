//! Orchestrates one checking run over a list of files.

use std::path::Path;

use archcheck_core::{
    load_sources, BoundaryScanner, Config, ConfigError, LoadError, Report, SourceFile, Violation,
    ZoneSelection,
};
use archcheck_rules::RuleSet;
use archcheck_tsx::{CompositionEngine, ParseError};
use miette::Diagnostic;
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

/// Fatal errors that abort a run.
#[derive(Debug, Error, Diagnostic)]
pub enum CheckError {
    /// A listed file could not be read.
    #[error(transparent)]
    #[diagnostic(code(archcheck::load))]
    Load(#[from] LoadError),

    /// An in-scope file did not parse.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    /// Configuration is invalid.
    #[error(transparent)]
    #[diagnostic(code(archcheck::config))]
    Config(#[from] ConfigError),

    /// The worker pool could not be started.
    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Which subsystems a run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Composition rules and boundary scan.
    #[default]
    All,
    /// Composition rules only.
    Composition,
    /// Boundary scan only.
    Boundary,
}

impl Scope {
    fn composition(self) -> bool {
        matches!(self, Self::All | Self::Composition)
    }

    fn boundary(self) -> bool {
        matches!(self, Self::All | Self::Boundary)
    }
}

/// Builder for configuring a [`Checker`].
#[derive(Default)]
pub struct CheckerBuilder {
    config: Option<Config>,
    rules: Option<RuleSet>,
    scope: Scope,
    zone: Option<String>,
    fail_fast: Option<bool>,
    jobs: Option<usize>,
}

impl CheckerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Replaces the rule catalog (default: every built-in rule).
    #[must_use]
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Restricts the run to some subsystems.
    #[must_use]
    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Forces one zone for every file instead of resolving by path.
    #[must_use]
    pub fn zone(mut self, name: impl Into<String>) -> Self {
        self.zone = Some(name.into());
        self
    }

    /// Overrides `boundary.fail_fast`.
    #[must_use]
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = Some(fail_fast);
        self
    }

    /// Runs the composition engine on `jobs` worker threads, overriding
    /// `analyzer.parallelism`. Zero lets the pool pick.
    #[must_use]
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs);
        self
    }

    /// Builds the checker.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Config`] if the configuration is invalid or a
    /// forced zone does not exist.
    pub fn build(self) -> Result<Checker, CheckError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let selection = self
            .zone
            .map_or(ZoneSelection::ByPath, ZoneSelection::Forced);
        let mut scanner = BoundaryScanner::new(&config, &selection)?;
        if let Some(fail_fast) = self.fail_fast {
            scanner = scanner.fail_fast(fail_fast);
        }

        let rules = self.rules.unwrap_or_default();
        let jobs = self.jobs.or(config.analyzer.parallelism);
        let engine = CompositionEngine::builder()
            .element_rules(rules.element)
            .file_rules(rules.file)
            .config(config)
            .build();

        Ok(Checker {
            engine,
            scanner,
            scope: self.scope,
            jobs,
        })
    }
}

/// Runs the composition rules and the boundary scan over a file list.
pub struct Checker {
    engine: CompositionEngine,
    scanner: BoundaryScanner,
    scope: Scope,
    jobs: Option<usize>,
}

impl Checker {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> CheckerBuilder {
        CheckerBuilder::new()
    }

    /// Number of composition rules in use.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.engine.rule_count()
    }

    /// Loads and checks `paths`, in order.
    ///
    /// # Errors
    ///
    /// Returns the first load or parse error; no partial report is produced.
    pub fn check_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Report, CheckError> {
        let sources = load_sources(paths)?;
        self.check_sources(&sources)
    }

    /// Checks already-loaded sources.
    ///
    /// Findings are ordered by input file; within a file, composition
    /// findings precede boundary findings.
    ///
    /// # Errors
    ///
    /// Returns the parse error of the earliest failing file.
    pub fn check_sources(&self, sources: &[SourceFile]) -> Result<Report, CheckError> {
        info!("Checking {} files", sources.len());

        let composition = if self.scope.composition() {
            self.run_composition(sources)?
        } else {
            vec![Vec::new(); sources.len()]
        };

        let mut report = Report::new();
        let mut boundary_open = self.scope.boundary();
        for (source, findings) in sources.iter().zip(composition) {
            report.violations.extend(findings);
            if boundary_open {
                let hits = self.scanner.scan_file(source);
                if self.scanner.is_fail_fast() && !hits.is_empty() {
                    debug!("Boundary scan stopped at {}", source.path.display());
                    boundary_open = false;
                }
                report.violations.extend(hits);
            }
        }
        report.files_checked = sources.len();

        let (composition, boundary) = report.count_by_subsystem();
        info!(
            "Check complete: {composition} composition and {boundary} boundary violations in {} files",
            report.files_checked
        );
        Ok(report)
    }

    /// Per-file composition findings, in input order.
    fn run_composition(&self, sources: &[SourceFile]) -> Result<Vec<Vec<Violation>>, CheckError> {
        let results: Vec<Result<Vec<Violation>, ParseError>> = match self.jobs {
            Some(jobs) => {
                debug!("Running composition on {jobs} worker threads");
                let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
                pool.install(|| sources.par_iter().map(|s| self.engine.check(s)).collect())
            }
            None => sources.iter().map(|s| self.engine.check(s)).collect(),
        };

        results
            .into_iter()
            .map(|result| result.map_err(CheckError::from))
            .collect()
    }
}
