use bin_rota::core::calendar::start_of_day;
use bin_rota::core::export::export_forecast;
use bin_rota::utils::{logger, validation::validate_iso_date};
use bin_rota::{
    AppConfig, CliConfig, Command, ConfigProvider, KeyValueStore, LocalStore, MirroredStore,
    RotaDefaults, RotaEngine, RotaReport, SettingsRepository, Weekday,
};
use chrono::{Local, NaiveDate};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting bin-rota");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match AppConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let today = match &cli.today {
        Some(value) => validate_iso_date(value)?,
        None => start_of_day(Local::now()),
    };
    let command = cli.command.unwrap_or(Command::Show { json: false });
    let defaults = RotaDefaults::from_config(&config);

    let local = LocalStore::new(config.store_path().to_string());
    match config.remote_endpoint() {
        Some(endpoint) => {
            tracing::debug!("Mirroring writes to {}", endpoint);
            let store = MirroredStore::new(local, endpoint.to_string());
            run_command(store, defaults, today, command).await
        }
        None => run_command(local, defaults, today, command).await,
    }
}

async fn run_command<S: KeyValueStore>(
    store: S,
    defaults: RotaDefaults,
    today: NaiveDate,
    command: Command,
) -> anyhow::Result<()> {
    let repository = SettingsRepository::new(store, defaults);

    match command {
        Command::Show { json } => {
            let engine = RotaEngine::new(repository);
            let report = engine.run(today).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Command::Add { name } => {
            let names = repository.append_name(&name).await?;
            println!("✅ Added '{}' to the roster", name.trim());
            print_roster(&names);
        }
        Command::Remove { index } => {
            let names = repository.remove_name(index).await?;
            println!("✅ Removed seat {}", index);
            print_roster(&names);
        }
        Command::Move { index, direction } => {
            let names = repository.move_name(index, direction).await?;
            print_roster(&names);
        }
        Command::SetWeekday { weekday } => {
            let weekday = Weekday::new(weekday)?;
            repository.set_weekday(weekday).await?;
            println!("✅ Collection day set to {}", weekday.name());
        }
        Command::SetPivot { date } => {
            let pivot = validate_iso_date(&date)?;
            repository.set_pivot(pivot).await?;
            println!("✅ Pivot date set to {}", pivot);
        }
        Command::Export { output } => {
            let engine = RotaEngine::new(repository);
            let report = engine.run(today).await?;
            export_forecast(&output, &report.state.forecast)?;
            println!("📁 Forecast exported to {}", output.display());
        }
    }

    Ok(())
}

fn print_report(report: &RotaReport) {
    match report.state.current_index {
        Some(index) => {
            println!(
                "🗑️  Current assignee: {} (next {} {})",
                report.settings.names[index],
                report.settings.weekday.name(),
                report.state.next_occurrence
            );
        }
        None => {
            println!("🗑️  Add names to begin.");
            return;
        }
    }

    println!("\n📅 Upcoming rotation:");
    for assignment in &report.state.forecast {
        println!(
            "   {}  {}",
            assignment.date.format("%a %Y-%m-%d"),
            assignment.name
        );
    }

    println!("\n👥 People by next turn:");
    for member in &report.members {
        let marker = if member.highlighted { "→" } else { " " };
        let next = member
            .next_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "none".to_string());
        println!("   {} {}  next {}", marker, member.name, next);
    }
}

fn print_roster(names: &[String]) {
    println!("👥 Roster:");
    for (index, name) in names.iter().enumerate() {
        println!("   {}. {}", index, name);
    }
}
