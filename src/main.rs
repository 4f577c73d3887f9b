use std::process::ExitCode;

fn main() -> ExitCode {
    match barchar::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("barchar: {e}");
            ExitCode::FAILURE
        }
    }
}
