//! Foodlink CLI - browse listings, run reports, enter records
//!
//! Usage:
//!   foodlink init
//!   foodlink listings [--location X]... [--provider Y]... [--food-type Z]...
//!   foodlink report <name> [--chart]
//!   foodlink add claim --food-id 3 --receiver-id 9 --status pending
//!
//! Examples:
//!   foodlink --database food_wastage.db facets location
//!   foodlink report "Top 5 Receivers By Claims" --chart
//!   foodlink --format json records claims

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use foodlink::config::Settings;
use foodlink::model::{
    ClaimStatus, Entity, FoodType, MealType, NewClaim, NewFoodListing, NewProvider, NewReceiver,
    ProviderType, ReceiverType,
};
use foodlink::{BarChart, Facet, ListingFilter, ReportCatalog, Store, Table};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "foodlink")]
#[command(about = "Foodlink - food donation listings, claims and reports")]
#[command(version)]
struct Cli {
    /// Path to a foodlink.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// SQLite database file (overrides the config file); `:memory:` for a scratch store
    #[arg(long, global = true)]
    database: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create any missing tables
    Init,

    /// List the distinct values of a listing facet
    Facets {
        facet: FacetArg,
    },

    /// Show food listings, optionally filtered
    Listings {
        /// Keep listings in this location (repeatable)
        #[arg(long = "location")]
        locations: Vec<String>,

        /// Keep listings from this provider (repeatable)
        #[arg(long = "provider")]
        providers: Vec<String>,

        /// Keep listings of this food type (repeatable)
        #[arg(long = "food-type")]
        food_types: Vec<String>,
    },

    /// List the available reports
    Reports,

    /// Run one report by key or title
    Report {
        name: String,

        /// Also draw a bar chart when the result has numeric columns
        #[arg(long)]
        chart: bool,
    },

    /// Add a record
    #[command(subcommand)]
    Add(AddCommand),

    /// Show every row of one table
    Records {
        entity: EntityArg,
    },

    /// Show the provider and receiver contact directory
    Contacts,
}

#[derive(Subcommand)]
enum AddCommand {
    Provider(ProviderArgs),
    Receiver(ReceiverArgs),
    Listing(ListingArgs),
    Claim(ClaimArgs),
}

#[derive(Args)]
struct ProviderArgs {
    #[arg(long)]
    name: String,
    /// Restaurant, Individual, Supermarket, NGO or Other
    #[arg(long = "type")]
    provider_type: ProviderType,
    #[arg(long, default_value = "")]
    address: String,
    #[arg(long, default_value = "")]
    city: String,
    #[arg(long, default_value = "")]
    contact: String,
}

#[derive(Args)]
struct ReceiverArgs {
    #[arg(long)]
    name: String,
    /// NGO, Shelter, Individual, "Community Fridge" or Other
    #[arg(long = "type")]
    receiver_type: ReceiverType,
    #[arg(long, default_value = "")]
    city: String,
    #[arg(long, default_value = "")]
    contact: String,
}

#[derive(Args)]
struct ListingArgs {
    #[arg(long)]
    food_name: String,
    #[arg(long, default_value_t = 1)]
    quantity: i64,
    /// Expiry date as YYYY-MM-DD
    #[arg(long)]
    expiry: NaiveDate,
    #[arg(long)]
    provider_id: i64,
    #[arg(long, default_value = "")]
    location: String,
    #[arg(long, default_value = "Unknown")]
    food_type: FoodType,
    #[arg(long, default_value = "Unknown")]
    meal_type: MealType,
}

#[derive(Args)]
struct ClaimArgs {
    #[arg(long)]
    food_id: i64,
    #[arg(long)]
    receiver_id: i64,
    #[arg(long, default_value = "Pending")]
    status: ClaimStatus,
}

#[derive(Clone, Copy, ValueEnum)]
enum FacetArg {
    Location,
    Provider,
    FoodType,
}

impl From<FacetArg> for Facet {
    fn from(arg: FacetArg) -> Self {
        match arg {
            FacetArg::Location => Facet::Location,
            FacetArg::Provider => Facet::ProviderName,
            FacetArg::FoodType => Facet::FoodType,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum EntityArg {
    Providers,
    Receivers,
    Listings,
    Claims,
}

impl From<EntityArg> for Entity {
    fn from(arg: EntityArg) -> Self {
        match arg {
            EntityArg::Providers => Entity::Providers,
            EntityArg::Receivers => Entity::Receivers,
            EntityArg::Listings => Entity::FoodListings,
            EntityArg::Claims => Entity::Claims,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Aligned plain text
    Table,
    /// JSON array of row objects
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let store = match open_store(cli.config.as_ref(), cli.database.as_deref()) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error opening database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Init => {
            println!("Schema ready.");
            Ok(())
        }
        Commands::Facets { facet } => cmd_facets(&store, facet.into()),
        Commands::Listings {
            locations,
            providers,
            food_types,
        } => {
            let filter = ListingFilter {
                locations,
                providers,
                food_types,
            };
            cmd_listings(&store, &filter, cli.format)
        }
        Commands::Reports => cmd_reports(),
        Commands::Report { name, chart } => cmd_report(&store, &name, chart, cli.format),
        Commands::Add(add) => cmd_add(&store, add),
        Commands::Records { entity } => store
            .list_records(entity.into())
            .map(|table| print_table(&table, cli.format)),
        Commands::Contacts => cmd_contacts(&store, cli.format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn open_store(config: Option<&PathBuf>, database: Option<&str>) -> foodlink::Result<Store> {
    let mut settings = match config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::load()?,
    };
    if let Some(path) = database {
        settings.database.path = path.to_string();
    }
    settings.validate()?;
    Store::from_settings(&settings.database)
}

fn cmd_facets(store: &Store, facet: Facet) -> foodlink::Result<()> {
    for value in store.list_facet_values(facet)? {
        println!("{}", value);
    }
    Ok(())
}

const NO_LISTINGS: &str = "No listings found for the selected filters.";
const NO_RESULTS: &str = "No results found for this analysis.";

fn cmd_listings(store: &Store, filter: &ListingFilter, format: OutputFormat) -> foodlink::Result<()> {
    let table = store.query_listings(filter)?;
    match empty_notice(&table, format, NO_LISTINGS) {
        Some(notice) => println!("{}", notice),
        None => print_table(&table, format),
    }
    Ok(())
}

/// Text output says so when a result has no rows; JSON prints `[]`.
fn empty_notice(table: &Table, format: OutputFormat, notice: &'static str) -> Option<&'static str> {
    (table.is_empty() && format == OutputFormat::Table).then_some(notice)
}

fn cmd_reports() -> foodlink::Result<()> {
    let catalog = ReportCatalog::builtin()?;
    for def in catalog.iter() {
        println!("{:<46} {:<24} {}", def.key, def.kind.to_string(), def.title());
    }
    Ok(())
}

fn cmd_report(store: &Store, name: &str, chart: bool, format: OutputFormat) -> foodlink::Result<()> {
    let def = ReportCatalog::builtin()?.get(name)?;
    let table = store.run_report(def.key)?;

    if format == OutputFormat::Json {
        print_table(&table, format);
        return Ok(());
    }

    println!("{}", def.title());
    println!();
    if let Some(notice) = empty_notice(&table, format, NO_RESULTS) {
        println!("{}", notice);
        return Ok(());
    }
    print_table(&table, format);

    if chart {
        println!();
        match BarChart::from_table(&table) {
            Some(chart) => print!("{}", chart),
            None => println!("This data might not be suitable for a bar chart."),
        }
    }
    Ok(())
}

fn cmd_add(store: &Store, add: AddCommand) -> foodlink::Result<()> {
    let (kind, id) = match add {
        AddCommand::Provider(args) => {
            let input = NewProvider::new(args.name, args.provider_type)
                .address(args.address)
                .city(args.city)
                .contact(args.contact);
            ("Provider", store.create_provider(&input)?)
        }
        AddCommand::Receiver(args) => {
            let input = NewReceiver::new(args.name, args.receiver_type)
                .city(args.city)
                .contact(args.contact);
            ("Receiver", store.create_receiver(&input)?)
        }
        AddCommand::Listing(args) => {
            let input = NewFoodListing {
                food_name: args.food_name,
                quantity: args.quantity,
                expiry_date: args.expiry,
                provider_id: args.provider_id,
                location: args.location,
                food_type: args.food_type,
                meal_type: args.meal_type,
            };
            ("Food listing", store.create_food_listing(&input)?)
        }
        AddCommand::Claim(args) => {
            let input = NewClaim::new(args.food_id, args.receiver_id, args.status);
            ("Claim", store.create_claim(&input)?)
        }
    };
    println!("{} added successfully (ID: {}).", kind, id);
    Ok(())
}

fn cmd_contacts(store: &Store, format: OutputFormat) -> foodlink::Result<()> {
    let directory = store.contact_directory()?;
    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "providers": directory.providers.to_records(),
                "receivers": directory.receivers.to_records(),
            });
            println!("{:#}", json);
        }
        OutputFormat::Table => {
            println!("Providers");
            print!("{}", directory.providers);
            println!();
            println!("Receivers");
            print!("{}", directory.receivers);
        }
    }
    Ok(())
}

fn print_table(table: &Table, format: OutputFormat) {
    match format {
        OutputFormat::Table => print!("{}", table),
        OutputFormat::Json => println!("{:#}", table.to_records()),
    }
}
