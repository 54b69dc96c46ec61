use cinema_booking::config::toml_config::CinemaConfig;
use cinema_booking::utils::{logger, validation::Validate};
use cinema_booking::{
    CinemaError, CliConfig, Command, JsonScreenStore, ScreenStore, TicketLog, TicketOffice,
    TicketSink,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting cinema-booking CLI");

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("\u{274c} {}", e);
        std::process::exit(1);
    }

    let file_config = match &config.config {
        Some(path) => match CinemaConfig::from_file(path) {
            Ok(file_config) => Some(file_config),
            Err(e) => {
                tracing::error!("Failed to load settings file: {}", e);
                eprintln!("\u{274c} {}", e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    let data_dir = config.resolved_data_dir(file_config.as_ref());
    tracing::debug!("Using data directory: {}", data_dir);

    let store = JsonScreenStore::new(&data_dir);
    let office = match TicketOffice::open(store).await {
        Ok(office) => office,
        Err(e) => {
            tracing::error!("Failed to open ticket office: {}", e);
            eprintln!("\u{274c} {}", e);
            std::process::exit(2);
        }
    };
    let ticket_log = TicketLog::new(&data_dir);

    if let Err(e) = run_command(&office, &ticket_log, &config.command).await {
        tracing::error!("Command failed: {}", e);
        eprintln!("\u{274c} {}", e);
        let exit_code = match e {
            CinemaError::PersistenceFailure { .. } => 2,
            _ => 1,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run_command<S: ScreenStore>(
    office: &TicketOffice<S>,
    ticket_log: &TicketLog,
    command: &Command,
) -> cinema_booking::Result<()> {
    match command {
        Command::AddScreen { id, columns, rows } => {
            office.add_screen(*id, *columns, *rows).await?;
            println!("Added screen {} ({} columns by {} rows).", id, columns, rows);
        }
        Command::RemoveScreen { id } => {
            office.remove_screen(*id).await?;
            println!("Removed screen {}.", id);
        }
        Command::AddMovie {
            id,
            title,
            cost_cents,
        } => {
            office.assign_movie(*id, title, *cost_cents).await?;
            println!("Screen {} is now showing '{}'.", id, title);
        }
        Command::RemoveMovie { id } => {
            office.remove_screening(*id).await?;
            println!("Removed the screening from screen {}.", id);
        }
        Command::Book { title, seat, row } => {
            let ticket = office.book_ticket(title, *seat, *row).await?;
            ticket_log.record(&ticket).await?;
            println!("{}", ticket.format_receipt());
        }
        Command::BookRandom { title } => {
            let ticket = office.book_random_ticket(title).await?;
            ticket_log.record(&ticket).await?;
            println!("{}", ticket.format_receipt());
        }
        Command::List => {
            let listings = office.list_screenings().await;
            if listings.is_empty() {
                println!("No movies are currently showing.");
            }
            for details in listings {
                println!("{}\n", details);
            }
        }
        Command::Details { id } => {
            let screen = office.find_screen(*id).await?;
            println!("{}", screen.details());
        }
    }

    Ok(())
}
