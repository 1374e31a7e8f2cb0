use clap::Parser;
use log::{debug, error};
use qr_card::Args;
use std::process;

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    debug!(args:?; "Parsed arguments");

    match qr_card::run(&args) {
        Ok(path) => println!("Saved: {}", path.display()),
        Err(err) => {
            error!(err:err; "Card generation failed");
            process::exit(1);
        }
    }
}
