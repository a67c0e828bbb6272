mod grid;
mod models;
mod run;
mod store;
mod summary;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None => run::as_tui(),
        Some("--help" | "-h" | "help") => {
            print_usage();
            Ok(())
        }
        Some("--version" | "-V" | "version") => {
            println!("budgetsheet {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(other) => {
            print_usage();
            anyhow::bail!("Unknown argument: {other}");
        }
    }
}

fn print_usage() {
    println!("BudgetSheet — a monthly budget spreadsheet for the terminal");
    println!();
    println!("Usage: budgetsheet");
    println!();
    println!("Launches the interactive sheet. All data lives in memory for the");
    println!("lifetime of the session.");
    println!();
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}
