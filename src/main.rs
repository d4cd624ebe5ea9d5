use std::process::ExitCode;

use clap::Parser;

mod cli;
mod exits;
mod pass;
mod rng;

use cli::CliFlags;

fn main() -> ExitCode {
    env_logger::init();
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    let flags = CliFlags::parse();

    match cli::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::prompts::failure(&e);
            exits::code(&e)
        }
    }
}
