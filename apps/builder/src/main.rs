use std::process::ExitCode;

fn main() -> ExitCode {
    match fsi_grammar_builder::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            fsi_grammar_builder::fatal_exit_code()
        }
    }
}
