use std::io;
use std::process::ExitCode;

use elementary_sort::demo;

fn main() -> ExitCode {
    demo::init_logging();

    match demo::run_bubble(&mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("bubble demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}
