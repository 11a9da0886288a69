mod cli;
mod demo;
mod infra;
mod interactive;
mod render;

use skillfit::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
