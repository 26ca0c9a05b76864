use bank_queue::application::counter::ServiceCounter;
use bank_queue::domain::ports::QueueStoreBox;
use bank_queue::domain::queue::SnapshotOrder;
use bank_queue::infrastructure::in_memory::InMemoryQueueStore;
use bank_queue::interfaces::console::render::DisplayFormat;
use bank_queue::interfaces::console::session::Session;
use bank_queue::interfaces::console::{DEFAULT_BANK_NAME, SessionConfig};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File of answers to replay instead of reading stdin
    input: Option<PathBuf>,

    /// Order used when staff display the queue
    #[arg(long, value_enum, default_value_t = DisplayOrder::Heap)]
    display_order: DisplayOrder,

    /// Output format for the queue display
    #[arg(long, value_enum, default_value_t = DisplayFormat::Text)]
    format: DisplayFormat,

    /// Name shown in the welcome banner
    #[arg(long, default_value = DEFAULT_BANK_NAME)]
    bank_name: String,

    /// Enable verbose logging (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DisplayOrder {
    /// Heap layout, next to be served first
    Heap,
    /// Fully ordered by priority, then arrival
    Sorted,
}

impl From<DisplayOrder> for SnapshotOrder {
    fn from(order: DisplayOrder) -> Self {
        match order {
            DisplayOrder::Heap => SnapshotOrder::Heap,
            DisplayOrder::Sorted => SnapshotOrder::Sorted,
        }
    }
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            bank_name: self.bank_name.clone(),
            display_order: self.display_order.into(),
            format: self.format,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("bank-queue v{}", env!("CARGO_PKG_VERSION"));
    debug!("Display order: {:?}, format: {:?}", cli.display_order, cli.format);

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            debug!("Replaying answers from {:?}", path);
            Box::new(BufReader::new(File::open(path).into_diagnostic()?))
        }
        None => Box::new(io::stdin().lock()),
    };

    let store: QueueStoreBox = Box::new(InMemoryQueueStore::new());
    let mut counter = ServiceCounter::new(store);

    let config = cli.session_config();

    {
        let stdout = io::stdout();
        let mut session = Session::new(&mut counter, reader, stdout.lock(), config);
        session.run().await.into_diagnostic()?;
    }

    info!(
        "session ended with {} customer(s) still waiting",
        counter.waiting().await.into_diagnostic()?
    );
    Ok(())
}
