use crate::demo::{
    run_demo, run_options, run_sheet_check, run_validate, DemoArgs, SheetCheckArgs, ValidateArgs,
};
use crate::server;
use circle_intake::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Circle Intake",
    about = "Serve and exercise the recruitment application and event registration forms",
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
    /// Validate a single application submission stored as JSON
    Validate(ValidateArgs),
    /// Print every option list the application form offers
    Options,
    /// Work with CSV exports of the submissions spreadsheet
    Sheet {
        #[command(subcommand)]
        command: SheetCommand,
    },
    /// Walk through validation, submission, and event registration end to end
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum SheetCommand {
    /// Re-validate every row of a spreadsheet export
    Check(SheetCheckArgs),
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
        Command::Validate(args) => run_validate(args),
        Command::Options => run_options(),
        Command::Sheet {
            command: SheetCommand::Check(args),
        } => run_sheet_check(args),
        Command::Demo(args) => run_demo(args),
    }
}
