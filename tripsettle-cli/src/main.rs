#![warn(clippy::uninlined_format_args)]

mod bootstrap;
mod config;

use std::{env, process};

fn main() {
    bootstrap::init_logging();

    match bootstrap::run(env::args().skip(1)) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}
