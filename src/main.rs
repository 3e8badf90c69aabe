use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use profcheck::application::{collect_profiles, AnalysisOptions, AnalyzeProfilesUseCase, Config, ContentFilter, FormatSpec};
use profcheck::domain::ProfError;
use profcheck::infrastructure::{AutoConfirmer, FsProfileSource, MemoryIdentityStore, PemIdentityStore, PromptConfirmer, StderrDiagnostics, SystemClock};
use profcheck::ports::{Clock, DeletionConfirmer, DiagnosticSink, IdentityStore};

/// Lists provisioning profiles and checks them for expiry and usable signing certificates.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Profile files or directories [default: ~/Library/MobileDevice/Provisioning Profiles]
    inputs: Vec<PathBuf>,

    /// Output format: %u uuid, %n name, %a app id, %t team, %c created, %e expires, %% percent.
    /// A number after % sets a minimum width, e.g. %40u
    #[arg(short, long)]
    format: Option<String>,

    /// Warn about profiles and certificates expiring within this many days (0 disables)
    #[arg(short, long)]
    warn_days: Option<u32>,

    /// Do not list profiles; only print diagnostics
    #[arg(short, long)]
    quiet: bool,

    /// Color the expiration date field instead of the whole line
    #[arg(short = 'e', long)]
    mark_expired: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Only check profiles whose uuid, name, app id, team or certificates match this regex
    #[arg(short, long, value_name = "REGEX")]
    grep: Option<String>,

    /// Directory of installed certificates (.pem, .crt, .cer, .der)
    #[arg(short = 'k', long, value_name = "DIR")]
    identities: Option<PathBuf>,

    /// Offer to remove expired profiles after the check
    #[arg(short, long)]
    delete_expired: bool,

    /// Remove expired profiles without asking (with --delete-expired)
    #[arg(short, long)]
    yes: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let usage = e.render().to_string();
            return fail(&ProfError::input(usage.trim().trim_start_matches("error: ")));
        }
        Err(e) => e.exit(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("PROFCHECK_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()
        .with_format(cli.format.clone())
        .with_warn_days(cli.warn_days)
        .with_identity_dir(cli.identities.clone())
        .with_quiet(cli.quiet)
        .with_mark_expired(cli.mark_expired)
        .with_color(!cli.no_color && std::io::stdout().is_terminal());

    let filter = match cli.grep.as_deref().map(ContentFilter::new).transpose() {
        Ok(f) => f,
        Err(e) => return fail(&e),
    };

    match config.identity_dir.clone() {
        Some(dir) => match PemIdentityStore::load(&dir) {
            Ok(store) => run(&cli, &config, filter.as_ref(), store, SystemClock::new()),
            Err(e) => fail(&e),
        },
        None => run(&cli, &config, filter.as_ref(), MemoryIdentityStore::default(), SystemClock::new()),
    }
}

fn run<S: IdentityStore, C: Clock>(cli: &Cli, config: &Config, filter: Option<&ContentFilter>, store: S, clock: C) -> ExitCode {
    let mut diagnostics = StderrDiagnostics::new(config.color);
    if store.is_empty() {
        diagnostics.emit(profcheck::domain::Diagnostic::warning(
            "identity store is empty; every certificate will be reported missing",
        ));
    }

    let source = FsProfileSource::new();
    let inputs: Vec<PathBuf> = if cli.inputs.is_empty() {
        config.profile_dir.iter().cloned().collect()
    } else {
        cli.inputs.clone()
    };
    let paths = source.enumerate(&inputs);
    let profiles = collect_profiles(&source, &paths, filter, &mut diagnostics);

    let options = AnalysisOptions {
        warn_days: config.warn_days,
        quiet: config.quiet,
        mark_expired: config.mark_expired,
        color: config.color,
    };
    let use_case = AnalyzeProfilesUseCase::new(store, clock, FormatSpec::parse(&config.format), options);

    let outcome = match use_case.execute(&profiles, &mut std::io::stdout().lock(), &mut diagnostics) {
        Ok(o) => o,
        Err(e) => return fail(&e),
    };

    if cli.delete_expired {
        let mut prompt = PromptConfirmer::new(std::io::stdin().lock(), std::io::stderr());
        let mut auto = AutoConfirmer;
        let confirmer: &mut dyn DeletionConfirmer = if cli.yes { &mut auto } else { &mut prompt };
        use_case.purge_expired(&outcome, Some(confirmer), &source, &mut diagnostics);
    }

    if outcome.status.is_pass() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn fail(e: &ProfError) -> ExitCode {
    eprintln!("{}", e);
    ExitCode::from(e.class.exit_code() as u8)
}
