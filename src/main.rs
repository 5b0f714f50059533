use std::env;
use std::process;

use env_logger::Env;

mod cli;
mod entropy;
mod error;
mod pass;
mod settings;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    let args: Vec<String> = env::args().collect();

    let result = cli::Context::new(&args).and_then(|mut ctx| ctx.run());
    if let Err(e) = result {
        cli::prompts::error(&e.to_string());
        process::exit(1);
    }
}
