use clap::{Parser, Subcommand};
use gempa::app_config::AppConfig;
use gempa::domain::filter::at_least_magnitude;
use gempa::{BmkgClient, EarthquakeFeed, EarthquakeRecord, LatestEarthquake};
use std::error::Error;
use tracing::{Level, error, info};

#[derive(Debug, Parser)]
#[command(name = "gempa", version, about = "Earthquakes from the BMKG public feed")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// The most recent earthquake
    Latest,
    /// Recent magnitude 5+ earthquakes
    Recent {
        /// Only show earthquakes of at least this magnitude
        #[arg(long)]
        min_magnitude: Option<f64>,
    },
    /// Recent earthquakes that were felt
    Felt,
    /// Fetch all feeds at once
    All,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    let level = config.core().log_level().parse::<Level>()?;
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let client = BmkgClient::from_config(&config)?;
    let result = run(&client, cli.command.unwrap_or(Commands::Latest)).await;
    if let Err(e) = &result {
        error!("❌ {}", e);
    }

    result
}

async fn run(client: &BmkgClient, command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Latest => print_latest(&client.fetch_latest().await?, client.base_url()),
        Commands::Recent { min_magnitude } => {
            let records = client.fetch_recent().await?;
            let records = match min_magnitude {
                Some(threshold) => at_least_magnitude(records, threshold),
                None => records,
            };
            print_records("Recent earthquakes", &records);
        }
        Commands::Felt => print_records("Felt earthquakes", &client.fetch_felt_reports().await?),
        Commands::All => {
            let (latest, recent, felt) = tokio::join!(client.fetch_latest(), client.fetch_recent(), client.fetch_felt_reports());
            print_latest(&latest?, client.base_url());
            print_records("Recent earthquakes", &recent?);
            print_records("Felt earthquakes", &felt?);
        }
    }

    Ok(())
}

fn print_latest(latest: &LatestEarthquake, base_url: &str) {
    let record = &latest.record;
    println!("Latest earthquake");
    println!("  {}", record);
    println!("  Coordinate: {}", latest.coordinate);
    if let Some(felt_report) = record.felt_report() {
        println!("  Felt: {}", felt_report);
    }
    if let Some(shakemap_url) = record.shakemap_url(base_url) {
        println!("  Shakemap: {}", shakemap_url);
    }
}

fn print_records(title: &str, records: &[EarthquakeRecord]) {
    println!("{} ({})", title, records.len());
    for record in records {
        println!("  {}", record);
    }
}
