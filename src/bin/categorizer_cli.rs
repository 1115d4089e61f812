use categorizer_core::{
    cli::{output, run_cli, Outcome},
    init,
};

fn main() {
    init();

    match run_cli() {
        Ok(Outcome::Success) => {}
        Ok(Outcome::DriftDetected) => std::process::exit(1),
        Err(err) => {
            output::error(err);
            std::process::exit(2);
        }
    }
}
