use clap::Parser;
use jotter::application::{
    init::init, list_entries::list_entries, remove_entry::remove_entry, AddEntryService,
    ConfigService,
};
use jotter::cli::{format_entry_list, prompt, Cli, Commands};
use jotter::error::JotterError;
use jotter::infrastructure::FileStorage;

fn initialize_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();
}

fn main() {
    initialize_logger();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), JotterError> {
    match cli.command {
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::Add { text }) => {
            let storage = FileStorage::discover()?;
            let mut service = AddEntryService::new(storage);
            let entry_count = service.load()?;

            let outcome = if text.is_empty() {
                service.compose_and_append(prompt::placeholder_for(entry_count))?
            } else {
                Some(service.append(&text.join(" "))?)
            };

            match outcome {
                Some(id) => println!("Added entry {}", id),
                None => println!("Aborted: empty entry"),
            }
            Ok(())
        }
        Some(Commands::List { limit, reverse }) => {
            let storage = FileStorage::discover()?;
            let entries = list_entries(storage, limit, reverse)?;
            print!("{}", format_entry_list(&entries));
            Ok(())
        }
        Some(Commands::Remove { id }) => {
            let storage = FileStorage::discover()?;
            if remove_entry(storage, &id)? {
                println!("Removed entry {}", id);
            } else {
                println!("No entry with id {}", id);
            }
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let storage = FileStorage::discover()?;
            let service = ConfigService::new(storage);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: jotter config [--list | <key> [<value>]]");
                println!("Valid keys: editor, created");
                Ok(())
            }
        }
        None => {
            println!("jotter - Personal journal in your terminal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
