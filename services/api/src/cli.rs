use crate::console::{
    run_attendance_check, run_marks_check, run_rules, AttendanceArgs, MarksArgs, RulesArgs,
};
use crate::server;
use campus_eligibility::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Campus Eligibility",
    about = "Check exam attendance eligibility and pass/fail status for PG, UG and Diploma programs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Check exam eligibility from attended and total class counts
    Attendance(AttendanceArgs),
    /// Check pass/fail status from CE, faculty and ESE marks
    Marks(MarksArgs),
    /// Print the published rule tables and worked samples
    Rules(RulesArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Attendance(args) => run_attendance_check(args),
        Command::Marks(args) => run_marks_check(args),
        Command::Rules(args) => run_rules(args),
    }
}
