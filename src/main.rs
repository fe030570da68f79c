//! hookguard: one subcommand per git hook.
//!
//! Reports go to stdout. Exit code 0 means the check passed, 1 that it
//! failed, 2 that a collaborator (git, the filesystem, the config) failed.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use hookguard::config::Config;
use hookguard::error::HookError;
use hookguard::eval::{Outcome, Params, Status};
use hookguard::hooks;
use hookguard::logging::{self, LogConfig};
use hookguard::report::{self, Format, Report};
use hookguard::vcs::Git;

#[derive(Parser, Debug)]
#[command(name = "hookguard", version, about = "Client-side git hooks for repository policy")]
struct Cli {
    /// User config TOML merged over the built-in defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Report format on stdout.
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Skip the check entirely and exit 0.
    #[arg(long, global = true)]
    nonexequi: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a branch name (default: the checked-out branch) against naming rules.
    ValidateBranchname {
        branch: Option<String>,
        /// Reject main and master.
        #[arg(long, overrides_with = "no_protected_main")]
        protected_main: bool,
        /// Allow main and master.
        #[arg(long, overrides_with = "protected_main")]
        no_protected_main: bool,
        /// Reject dev and development.
        #[arg(long)]
        protected_dev: bool,
        /// Reject tags.
        #[arg(long)]
        protected_tags: bool,
    },

    /// Check the commit message format.
    CheckCommitMsg { file: PathBuf },

    /// Check that the commit message starts with a type.
    CheckCommitType { file: PathBuf },

    /// Check the subject line length.
    CheckSubjectLength {
        file: PathBuf,
        #[arg(long)]
        min_first_line: Option<usize>,
        #[arg(long)]
        max_first_line: Option<usize>,
    },

    /// Lint file names.
    CheckFilenames {
        files: Vec<PathBuf>,
        #[arg(long)]
        min_len: Option<usize>,
        #[arg(long)]
        max_len: Option<usize>,
    },

    /// Look for private key material in the given files.
    DetectPrivateKey { files: Vec<PathBuf> },

    /// Insert the staged diff into the commit message file.
    InsertDiff {
        file: PathBuf,
        #[arg(default_value = "")]
        source: String,
        #[arg(default_value = "")]
        sha: String,
    },

    /// Remove the editor help block and add a Signed-off-by trailer.
    FooterSignoff {
        file: PathBuf,
        #[arg(default_value = "")]
        source: String,
        #[arg(default_value = "")]
        sha: String,
    },

    /// Fail when the repository has no pre-commit configuration.
    CheckPreCommitInstalled {
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Print an encouragement line after a commit.
    EffortMessage {
        #[arg(default_value = "")]
        message: String,
    },
}

impl Commands {
    fn hook_name(&self) -> &'static str {
        match self {
            Commands::ValidateBranchname { .. } => "validate-branchname",
            Commands::CheckCommitMsg { .. } => "check-commit-msg",
            Commands::CheckCommitType { .. } => "check-commit-type",
            Commands::CheckSubjectLength { .. } => "check-subject-length",
            Commands::CheckFilenames { .. } => "check-filenames",
            Commands::DetectPrivateKey { .. } => "detect-private-key",
            Commands::InsertDiff { .. } => "insert-diff",
            Commands::FooterSignoff { .. } => "footer-signoff",
            Commands::CheckPreCommitInstalled { .. } => "check-pre-commit-installed",
            Commands::EffortMessage { .. } => "effort-message",
        }
    }

    /// What the hook looked at, for the outcome record.
    fn subject(&self) -> String {
        fn join(paths: &[PathBuf]) -> String {
            paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        }
        match self {
            Commands::ValidateBranchname { branch, .. } => branch.clone().unwrap_or_default(),
            Commands::CheckCommitMsg { file }
            | Commands::CheckCommitType { file }
            | Commands::CheckSubjectLength { file, .. }
            | Commands::InsertDiff { file, .. }
            | Commands::FooterSignoff { file, .. } => file.display().to_string(),
            Commands::CheckFilenames { files, .. } | Commands::DetectPrivateKey { files } => {
                join(files)
            }
            Commands::CheckPreCommitInstalled { dir } => dir.display().to_string(),
            Commands::EffortMessage { message } => message.clone(),
        }
    }
}

/// Run the hook; returns what it looked at and its outcome.
fn run(cmd: &Commands, config: &Config, format: Format) -> Result<(String, Outcome), HookError> {
    let outcome = match cmd {
        Commands::ValidateBranchname {
            branch,
            protected_main,
            no_protected_main,
            protected_dev,
            protected_tags,
        } => {
            let mut params = config.branch_params();
            if *protected_main {
                params.protected_main = true;
            }
            if *no_protected_main {
                params.protected_main = false;
            }
            params.protected_dev |= *protected_dev;
            params.protected_tags |= *protected_tags;
            // The checked-out branch is only known once git has been asked.
            return hooks::branch::run(&Git::new(), branch.as_deref(), &params);
        }
        Commands::CheckCommitMsg { file } => hooks::commit::run_format(file),
        Commands::CheckCommitType { file } => hooks::commit::run_type(file),
        Commands::CheckSubjectLength {
            file,
            min_first_line,
            max_first_line,
        } => {
            let defaults = config.subject_params();
            let params = Params::lengths(
                min_first_line.unwrap_or(defaults.min_len),
                max_first_line.unwrap_or(defaults.max_len),
            );
            hooks::commit::run_subject_length(file, &params)
        }
        Commands::CheckFilenames {
            files,
            min_len,
            max_len,
        } => {
            let defaults = config.filename_params();
            let params = Params::lengths(
                min_len.unwrap_or(defaults.min_len),
                max_len.unwrap_or(defaults.max_len),
            );
            let names: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
            Ok(hooks::filename::check_filenames(&names, &params))
        }
        Commands::DetectPrivateKey { files } => {
            hooks::private_key::run(files, &config.private_key.markers)
        }
        Commands::InsertDiff { file, source, sha } => {
            hooks::prepare::insert_diff(&Git::new(), file, source, sha)
        }
        Commands::FooterSignoff { file, source, sha } => {
            log::debug!("footer-signoff source={source:?} sha={sha:?}");
            hooks::signoff::footer_signoff(&Git::new(), file, source)
        }
        Commands::CheckPreCommitInstalled { dir } => Ok(hooks::pre_commit::check_installed(dir)),
        Commands::EffortMessage { message } => Ok(hooks::effort::effort_message(
            message,
            format == Format::Text,
        )),
    }?;
    Ok((cmd.subject(), outcome))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.nonexequi {
        return ExitCode::SUCCESS;
    }

    let config = match Config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("hookguard: {e}");
            return ExitCode::from(2);
        }
    };

    let debug_env = logging::debug_requested(|name| std::env::var(name).ok());
    let log_config = LogConfig::resolve(cli.verbose, debug_env, &config.settings);
    logging::init(&log_config);

    let hook = cli.cmd.hook_name();
    let (subject, outcome) = match run(&cli.cmd, &config, cli.format) {
        Ok(done) => done,
        Err(e) => {
            log::debug!("{hook} aborted: {e:?}");
            eprintln!("hookguard: {e}");
            return ExitCode::from(2);
        }
    };

    logging::record_outcome(&log_config, hook, &subject, &outcome);
    if let Some(text) = report::render(&Report::new(hook, &outcome), cli.format) {
        println!("{text}");
    }
    match outcome.status {
        Status::Success => ExitCode::SUCCESS,
        Status::Failure => ExitCode::FAILURE,
    }
}
