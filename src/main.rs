//! dienstplan-import main entrypoint.

use dienstplan_import::run;

fn main() {
    println!();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
