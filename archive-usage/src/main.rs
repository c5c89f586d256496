use archive_usage_core::cli::{check, report, vocab};
use archive_usage_core::logging::{LogFormat, default_log_format, init_logging};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "archive-usage",
    version,
    about = "Archive usage: fiscal-quarter download reports from access logs"
)]
struct Cli {
    /// Log output format (defaults to pretty on a terminal, JSON otherwise)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate quarterly usage reports
    Report(report::ReportArgs),

    /// Validate configuration and count log files without parsing them
    Check(report::ReportArgs),

    /// List facet vocabularies
    Vocab {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    let result = match &cli.command {
        Command::Report(args) => report::run(args),
        Command::Check(args) => check::check(args),
        Command::Vocab { json } => vocab::vocab(*json),
    };

    if let Err(err) = result {
        report::print_error(&err);
        std::process::exit(1);
    }
}
