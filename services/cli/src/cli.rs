use crate::commands::{
    run_compare, run_demo, run_gaps, run_rank, run_score, CompareArgs, DemoArgs, GapsArgs,
    RankArgs, ScoreArgs,
};
use clap::{Parser, Subcommand};
use recruit_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Recruitment Intelligence Engine",
    about = "Score, rank, and inspect resume-to-JD matches from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one resume against one job description
    Score(ScoreArgs),
    /// Score many resumes against one job description and rank them
    Rank(RankArgs),
    /// Compare two flat skill lists without full fact records
    Compare(CompareArgs),
    /// Scan a resume's work history for employment gaps
    Gaps(GapsArgs),
    /// Run an end-to-end demo over synthetic fact records (default command)
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Score(args) => run_score(args),
        Command::Rank(args) => run_rank(args),
        Command::Compare(args) => run_compare(args),
        Command::Gaps(args) => run_gaps(args),
        Command::Demo(args) => run_demo(args),
    }
}
