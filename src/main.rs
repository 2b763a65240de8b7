use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use payflow::application::registry::ProcessorRegistry;
use payflow::domain::amount::Amount;
use payflow::domain::ports::InvoiceStoreBox;
use payflow::error::PaymentError;
use payflow::infrastructure::in_memory::InMemoryInvoiceStore;
use payflow::interfaces::csv::payment_reader::PaymentReader;
use payflow::interfaces::demo;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one of the scripted demos
    Demo {
        #[arg(value_enum)]
        name: DemoName,
    },
    /// List the built-in payment methods
    Methods,
    /// Process a single payment
    Pay {
        /// Amount to pay
        #[arg(allow_negative_numbers = true)]
        amount: Amount,

        /// Payment method to use (case-insensitive). Defaults to the first registered one.
        #[arg(long)]
        method: Option<String>,
    },
    /// Process every payment in a CSV file with a `method, amount` header
    Batch {
        /// Input payments CSV file
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DemoName {
    OpenClosed,
    Polymorphism,
    Invoice,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Demo { name } => match name {
            DemoName::OpenClosed => demo::run_open_closed(&mut out).into_diagnostic()?,
            DemoName::Polymorphism => demo::run_polymorphism(&mut out).into_diagnostic()?,
            DemoName::Invoice => {
                let store: InvoiceStoreBox = Box::new(InMemoryInvoiceStore::new());
                demo::run_invoice(&mut out, store).await.into_diagnostic()?
            }
        },
        Command::Methods => {
            let registry = ProcessorRegistry::with_default_processors();
            demo::write_methods(&mut out, &registry).into_diagnostic()?;
        }
        Command::Pay { amount, method } => {
            let registry = ProcessorRegistry::with_default_processors();
            match method {
                Some(method) => demo::write_payment_with(&mut out, &registry, &method, amount),
                None => demo::write_payment(&mut out, &registry, amount),
            }
            .into_diagnostic()?;
        }
        Command::Batch { input } => {
            let registry = ProcessorRegistry::with_default_processors();
            let file = File::open(input).into_diagnostic()?;
            let reader = PaymentReader::new(file);
            for request in reader.requests() {
                match request.and_then(|r| r.dispatch(&registry)) {
                    Ok(line) => writeln!(out, "{line}").into_diagnostic()?,
                    Err(e @ PaymentError::CsvError(_)) => {
                        eprintln!("Error reading payment: {}", e);
                    }
                    Err(e) => writeln!(out, "{e}").into_diagnostic()?,
                }
            }
        }
    }

    out.flush().into_diagnostic()?;
    Ok(())
}
