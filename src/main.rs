use std::process::ExitCode;

fn main() -> ExitCode {
    match epc_facts::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.kind().reports_to_stdout() {
                println!("{err}");
            } else {
                eprintln!("{err}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}
