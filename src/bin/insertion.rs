use std::io;
use std::process::ExitCode;

use elementary_sort::demo;

fn main() -> ExitCode {
    demo::init_logging();

    match demo::run_insertion(&mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("insertion demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}
