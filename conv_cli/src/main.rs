//! # Unitwise CLI Application
//!
//! Terminal front end for the unit converter.
//!
//! ```text
//! conv_cli convert length inch 1        # 39.37 inch
//! conv_cli convert weight pound 10 --json
//! conv_cli units temperature
//! conv_cli interactive
//! ```

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use conv_core::converter::parse_input;
use conv_core::{convert, Action, Category, ConvError, ConvResult, ConversionTable, ConverterState, Unit};

#[derive(Parser)]
#[command(name = "conv_cli")]
#[command(about = "Unitwise CLI - length, weight, and temperature converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value to a unit of the given category
    Convert {
        /// Category: length, weight, or temperature
        category: String,
        /// Target unit (e.g., inch, pound, fahrenheit)
        unit: String,
        /// Value to convert (temperature values are taken as Celsius)
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List categories and their units
    Units {
        /// Only list this category
        category: Option<String>,
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Prompt for category, unit, and value until input ends
    Interactive,
}

#[derive(Serialize)]
struct UnitListing {
    label: String,
    value: Unit,
    /// Multiplier from the base unit; `None` for temperature formulas
    factor: Option<f64>,
}

#[derive(Serialize)]
struct CategoryListing {
    category: Category,
    units: Vec<UnitListing>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Convert {
            category,
            unit,
            value,
            json,
        } => cmd_convert(&category, &unit, &value, json),
        Commands::Units { category, json } => cmd_units(category.as_deref(), json),
        Commands::Interactive => cmd_interactive(),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn report_error(e: &ConvError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn cmd_convert(category: &str, unit: &str, value: &str, json: bool) -> ConvResult<()> {
    let category = Category::from_str_flexible(category)?;
    let unit = Unit::from_str_flexible(unit)?;

    // A non-numeric value is "nothing to compute", not a failure
    let Some(result) = convert(category, Some(unit), value)? else {
        tracing::info!(value, "value is not numeric, nothing to convert");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result);
    }
    Ok(())
}

fn listings(category: Option<&str>) -> ConvResult<Vec<CategoryListing>> {
    let categories = match category {
        Some(name) => vec![Category::from_str_flexible(name)?],
        None => Category::ALL.to_vec(),
    };

    let table = ConversionTable::global();
    Ok(categories
        .into_iter()
        .map(|category| CategoryListing {
            category,
            units: table
                .units(category)
                .iter()
                .map(|entry| UnitListing {
                    label: entry.unit.label(),
                    value: entry.unit,
                    factor: entry.definition.factor(),
                })
                .collect(),
        })
        .collect())
}

fn cmd_units(category: Option<&str>, json: bool) -> ConvResult<()> {
    let listings = listings(category)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    for listing in listings {
        println!("{}:", listing.category);
        for unit in listing.units {
            let definition = match unit.factor {
                Some(factor) => format!("x {}", factor),
                None => "formula (input in celsius)".to_string(),
            };
            println!("  {:<12} {:<12} {}", unit.value.key(), unit.label, definition);
        }
    }
    Ok(())
}

/// Print a prompt and read one trimmed line. `None` at end of input.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

/// Interpret one round of prompt answers as screen actions.
///
/// Blank answers keep the current selection. A unit outside the (possibly new)
/// category is reported instead of being silently dropped by the state.
fn round_actions(current: Category, category: &str, unit: &str, value: &str) -> ConvResult<Vec<Action>> {
    let mut actions = Vec::new();
    let mut active = current;
    if !category.is_empty() {
        active = Category::from_str_flexible(category)?;
        actions.push(Action::SelectCategory(active));
    }
    if !unit.is_empty() {
        let unit = Unit::from_str_flexible(unit)?;
        if !unit.belongs_to(active) {
            return Err(ConvError::unit_not_in_category(active.key(), unit.key()));
        }
        actions.push(Action::SelectUnit(Some(unit)));
    }
    actions.push(Action::EditInput(value.to_string()));
    actions.push(Action::Convert);
    Ok(actions)
}

fn apply_all(state: ConverterState, actions: Vec<Action>) -> ConverterState {
    actions.into_iter().fold(state, |s, action| s.apply(action))
}

fn cmd_interactive() -> ConvResult<()> {
    println!("Unit Converter");
    println!("==============");
    println!("Leave a field empty to keep the current selection. Ctrl+D to quit.");
    println!();

    let mut state = ConverterState::default();

    loop {
        let Some(category) = prompt_line(&format!("Category [{}]: ", state.category.key())) else {
            break;
        };
        let active = Category::from_str_flexible(&category).unwrap_or(state.category);
        let units: Vec<&str> = conv_core::unit_options(active)
            .iter()
            .map(|option| option.value.key())
            .collect();
        let current_unit = state
            .unit
            .filter(|u| u.belongs_to(active))
            .map(|u| u.key())
            .unwrap_or("none");
        let Some(unit) = prompt_line(&format!("Unit ({}) [{}]: ", units.join(", "), current_unit)) else {
            break;
        };
        let Some(value) = prompt_line("Enter value: ") else {
            break;
        };

        let actions = match round_actions(state.category, &category, &unit, &value) {
            Ok(actions) => actions,
            Err(e) => {
                eprintln!("Error: {}", e);
                println!();
                continue;
            }
        };

        state = apply_all(state, actions);

        match (state.unit, parse_input(&value), state.result_text()) {
            (None, _, _) => println!("Select a unit to convert."),
            (Some(_), Some(_), Some(result)) => println!("Result: {}", result),
            _ => println!("Nothing to convert."),
        }
        println!();
    }

    println!();
    Ok(())
}
