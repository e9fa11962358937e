mod cli;
mod commands;
mod infra;

use recruit_ai::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
