pub mod describe;
pub mod generate;
pub mod library;
pub mod scales;

use crate::utils::progress::CliProgressHandler;

fn progress_handler(quiet: bool) -> CliProgressHandler {
    if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    }
}
