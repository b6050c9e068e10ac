use std::{io, process};

use solver::{config, run};

fn main() {
    config::init_logging();
    let mode = config::parse_args();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run::run(&mode, &mut out) {
        eprintln!("{}", e);
        if let run::RunError::Load(load) = &e {
            log::debug!("details for {}: {:?}", load.path().display(), load);
        }
        process::exit(1);
    }
}
