use std::process::ExitCode;

fn main() -> ExitCode {
    match lcg_cauchy::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
