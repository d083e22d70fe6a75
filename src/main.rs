use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = delay_taps::app::run() {
        eprintln!("{err}");
        return ExitCode::from(err.exit_code());
    }
    ExitCode::SUCCESS
}
