//! Taskpad CLI - a local todo manager.

use clap::Parser;
use std::process;
use taskpad::cli::{Cli, Commands};
use taskpad::commands::{self, AddArgs, CommandResult};
use taskpad::config::{OutputFormat, TaskpadConfig};
use taskpad::models::TodoFilters;
use taskpad::storage::{TodoStore, resolve_data_dir};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = TaskpadConfig::load();

    // Output format precedence: -H flag > config file > JSON default
    let human = cli.human_readable || config.output_format == Some(OutputFormat::Human);

    if let Err(e) = run_command(cli, &config, human) {
        if human {
            eprintln!("Error: {}", e);
        } else {
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
        }
        process::exit(1);
    }
}

fn run_command(cli: Cli, config: &TaskpadConfig, human: bool) -> Result<(), taskpad::Error> {
    let data_dir = resolve_data_dir(cli.data_dir)?;
    let mut store = TodoStore::open(&data_dir)?;

    match cli.command {
        Commands::Init => output(&commands::init(&mut store), human),

        Commands::Add {
            title,
            description,
            priority,
            tag,
            deadline,
            reminder,
        } => {
            let result = commands::add(
                &mut store,
                config,
                AddArgs {
                    title,
                    description,
                    priority,
                    tag,
                    deadline,
                    reminder,
                },
            )?;
            output(&result, human);
        }

        Commands::List {
            tag,
            priority,
            completed,
            pending,
        } => {
            let filters = TodoFilters {
                tag,
                priority,
                completed: if completed {
                    Some(true)
                } else if pending {
                    Some(false)
                } else {
                    None
                },
            };
            output(&commands::list(&store, filters), human);
        }

        Commands::Show { id } => output(&commands::show(&store, &id)?, human),

        Commands::Toggle { id } => output(&commands::toggle(&mut store, &id), human),

        Commands::Delete { id } => output(&commands::delete(&mut store, &id), human),

        Commands::Clear => output(&commands::clear(&mut store), human),
    }

    Ok(())
}

/// Print a command result in the selected format.
fn output<R: CommandResult>(result: &R, human: bool) {
    if human {
        println!("{}", result.to_human());
    } else {
        println!("{}", result.to_json());
    }
}
