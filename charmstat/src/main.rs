use charmstat_core::cli::report::{ReportArgs, run_report};
use charmstat_core::logging::{LogFormat, init_logging};
use clap::Parser;
use std::io;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "charmstat",
    version,
    about = "Charmstat: severity and duplicate statistics for juju debug logs"
)]
struct Cli {
    #[command(flatten)]
    report: ReportArgs,

    /// Log diagnostics at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Format of diagnostics written to stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.log_format, cli.verbose);

    let stdout = io::stdout();
    match run_report(&cli.report, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("charmstat: {e:#}");
            ExitCode::FAILURE
        }
    }
}
