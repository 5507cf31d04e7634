use anyhow::{Context, Result};
use std::io::{self, Write};

use super::render;
use crate::config::AppPaths;
use crate::dates;
use crate::db::Database;
use crate::error;
use crate::export;
use crate::models::{parse_amount, ExpenseDraft};
use crate::outcome::{Confirmation, Outcome};

/// Run one command. `Ok(false)` means the command ran but the operation
/// was refused; the message has already been printed.
pub(crate) fn as_cli(args: &[String], db: &mut Database, paths: &AppPaths) -> Result<bool> {
    let rest = args.get(2..).unwrap_or_default();
    match args.get(1).map(String::as_str) {
        None | Some("--help" | "-h" | "help") => {
            print_usage();
            Ok(true)
        }
        Some("--version" | "-V" | "version") => {
            println!("spese {}", env!("CARGO_PKG_VERSION"));
            Ok(true)
        }
        Some("category" | "c") => cli_category(rest, db),
        Some("expense" | "e") => cli_expense(rest, db),
        Some("budget" | "b") => cli_budget(rest, db),
        Some("report" | "r") => cli_report(rest, db),
        Some("export") => cli_export(rest, db, paths),
        Some(other) => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Spese - personal expenses and monthly budgets");
    println!();
    println!("Usage: spese <command>");
    println!();
    println!("Commands:");
    println!("  category add <name>                                 Create a category");
    println!("  category list                                       List categories");
    println!("  category delete <name>                              Delete an unused category");
    println!("  expense add <DD-MM-YYYY> <amount> <category> [description]");
    println!("  expense edit <id> <DD-MM-YYYY> <amount> <category> [description]");
    println!("  expense delete <id>");
    println!("  expense list                                        List expenses with IDs");
    println!("  budget set <YYYY-MM> <category> <amount>            Set a monthly budget");
    println!("  budget list                                         List budgets");
    println!("  report totals | budget | list                       Show a report");
    println!("  export [file]                                       Export expenses to CSV");
    println!("  --help, -h                                          Show this help");
    println!("  --version, -V                                       Show version");
    println!();
    println!("Environment:");
    println!("  SPESE_HOME   application directory (default: current directory)");
    println!("  SPESE_LOG    log filter, e.g. spese=debug");
}

// ── Categories ────────────────────────────────────────────────

fn cli_category(args: &[String], db: &mut Database) -> Result<bool> {
    const USAGE: &str = "Usage: spese category add|list|delete [name]";
    match args.first().map(String::as_str) {
        Some("add") => {
            let name = joined_name(&args[1..]).context(USAGE)?;
            Ok(finish(db.create_category(&name)))
        }
        Some("delete" | "rm") => {
            let name = joined_name(&args[1..]).context(USAGE)?;
            Ok(finish(db.delete_category(&name)))
        }
        Some("list" | "ls") | None => {
            let categories = db
                .categories()?
                .into_iter()
                .map(|cat| {
                    let in_use = db.category_has_expenses(cat.id)?;
                    Ok((cat, in_use))
                })
                .collect::<error::Result<Vec<_>>>()?;
            render::categories(&mut io::stdout().lock(), &categories)?;
            Ok(true)
        }
        Some(other) => anyhow::bail!("Unknown category action: {other}\n{USAGE}"),
    }
}

/// Category names may contain spaces when passed unquoted.
fn joined_name(args: &[String]) -> Option<String> {
    let name = args.join(" ").trim().to_string();
    (!name.is_empty()).then_some(name)
}

// ── Expenses ──────────────────────────────────────────────────

fn cli_expense(args: &[String], db: &mut Database) -> Result<bool> {
    const ADD_USAGE: &str = "Usage: spese expense add <DD-MM-YYYY> <amount> <category> [description]";
    const EDIT_USAGE: &str =
        "Usage: spese expense edit <id> <DD-MM-YYYY> <amount> <category> [description]";
    match args.first().map(String::as_str) {
        Some("add") => {
            if args.len() < 4 {
                anyhow::bail!(ADD_USAGE);
            }
            Ok(finish(add_expense(&args[1..], db)))
        }
        Some("edit") => {
            if args.len() < 5 {
                anyhow::bail!(EDIT_USAGE);
            }
            Ok(finish(edit_expense(&args[1..], db)))
        }
        Some("delete" | "rm") => {
            let id = args.get(1).context("Usage: spese expense delete <id>")?;
            Ok(finish(parse_id(id).and_then(|id| db.delete_expense(id))))
        }
        Some("list" | "ls") | None => {
            let rows = db.list_expenses()?;
            let mut out = io::stdout().lock();
            render::expenses(&mut out, &rows)?;
            if !rows.is_empty() {
                writeln!(out, "{} expenses in total", db.expense_count()?)?;
            }
            Ok(true)
        }
        Some(other) => anyhow::bail!("Unknown expense action: {other}"),
    }
}

fn add_expense(args: &[String], db: &mut Database) -> error::Result<Confirmation> {
    let draft = parse_draft(args)?;
    db.create_expense(&draft)
}

/// A missing id is reported before any of the new values are checked.
fn edit_expense(args: &[String], db: &mut Database) -> error::Result<Confirmation> {
    let id = parse_id(&args[0])?;
    if !db.expense_exists(id)? {
        return Err(error::Error::NotFound(format!("expense #{id} not found")));
    }
    let draft = parse_draft(&args[1..])?;
    db.update_expense(id, &draft)
}

/// `<DD-MM-YYYY> <amount> <category> [description...]`
fn parse_draft(args: &[String]) -> error::Result<ExpenseDraft> {
    let date = dates::from_display(&args[0])?;
    let amount = parse_amount(&args[1])?;
    let category = args[2].trim();
    if category.is_empty() {
        return Err(error::Error::Validation("category name cannot be empty".into()));
    }
    let description = args[3..].join(" ");
    Ok(ExpenseDraft::new(&date, amount, category, &description))
}

fn parse_id(text: &str) -> error::Result<i64> {
    match text.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(error::Error::Validation(
            "expense ID must be a positive integer".into(),
        )),
    }
}

// ── Budgets ───────────────────────────────────────────────────

fn cli_budget(args: &[String], db: &mut Database) -> Result<bool> {
    const USAGE: &str = "Usage: spese budget set <YYYY-MM> <category> <amount>";
    match args.first().map(String::as_str) {
        Some("set") if args.len() == 4 => {
            let month = args[1].trim();
            let category = args[2].trim();
            let result = parse_amount(&args[3])
                .and_then(|amount| db.upsert_budget(month, category, amount));
            Ok(finish(result))
        }
        Some("list" | "ls") => {
            render::budgets(&mut io::stdout().lock(), &db.budgets()?)?;
            Ok(true)
        }
        _ => anyhow::bail!(USAGE),
    }
}

// ── Reports ───────────────────────────────────────────────────

fn cli_report(args: &[String], db: &mut Database) -> Result<bool> {
    let mut out = io::stdout().lock();
    match args.first().map(String::as_str) {
        Some("totals" | "t") => render::totals(&mut out, &db.totals_by_category()?)?,
        Some("budget" | "b") => render::budget_report(&mut out, &db.budget_vs_actual()?)?,
        Some("list" | "l") => render::listing(&mut out, &db.full_listing()?)?,
        _ => anyhow::bail!("Usage: spese report totals|budget|list"),
    }
    Ok(true)
}

// ── Export ────────────────────────────────────────────────────

fn cli_export(args: &[String], db: &mut Database, paths: &AppPaths) -> Result<bool> {
    let today = chrono::Local::now().date_naive();
    let path = paths.export_file(args.first().map(String::as_str), today);
    Ok(finish(export::export_expenses(db, &path)))
}

fn finish(result: error::Result<Confirmation>) -> bool {
    render::print_outcome(&Outcome::from(result))
}
