use std::env;

use synergy_select::cli;

fn main() {
    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run_with_args(&args));
}
