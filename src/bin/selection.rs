use std::io;
use std::process::ExitCode;

use elementary_sort::demo;

fn main() -> ExitCode {
    demo::init_logging();

    match demo::run_selection(&mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("selection demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}
