mod config;
mod dates;
mod db;
mod error;
mod export;
mod logging;
mod models;
mod outcome;
mod run;


use anyhow::{Context, Result};

fn main() -> Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let paths = config::AppPaths::resolve()?;
    let db_path = paths.database_file();
    let mut db = db::Database::open(&db_path)
        .with_context(|| format!("Failed to open database: {}", db_path.display()))?;

    if !run::as_cli(&args, &mut db, &paths)? {
        std::process::exit(1);
    }
    Ok(())
}
