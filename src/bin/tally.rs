use clap::{Parser, Subcommand};
use tally::*;
use tracing::Level;

/// SQL script that provisions the numbers table.
const SETUP_SQL: &str = include_str!("../../sql/setup.sql");

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// configuration file path, by default $HOME/.tally/tally.toml is used
    #[clap(short, long)]
    config: Option<String>,

    /// database file path, overrides the configured location
    #[clap(short, long)]
    db: Option<String>,

    /// Print debug information
    #[clap(long)]
    debug: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database file and the numbers table.
    Setup,

    /// Append a value to the numbers table.
    Insert {
        /// Value to append; fractional input is rounded when stored
        #[clap(name = "N")]
        n: f64,
    },

    /// Add a delta to every value in the numbers table.
    Increment {
        /// Amount to add to every stored value
        #[clap(name = "DELTA")]
        delta: f64,
    },

    /// Print the stored values in ascending order.
    List {
        /// Output as a JSON array
        #[clap(long)]
        json: bool,
    },
}

fn resolve_db_config(cli: &Cli) -> anyhow::Result<DbConfig> {
    match &cli.db {
        Some(path) => Ok(DbConfig::new(path.as_str())),
        None => {
            let config = TallyConfig::new(&cli.config)?;
            Ok(config.db_config())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            // filter spans/events with level INFO or higher.
            .with_max_level(Level::INFO)
            .init();
    }

    let db_config = match resolve_db_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Setup => {
            let db = match DatabaseConn::open_path(&db_config.path) {
                Ok(db) => db,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };
            match db.table_exists("numbers") {
                Ok(true) => {
                    println!("numbers table already present in {}", db_config.path);
                }
                Ok(false) => {
                    if let Err(e) = db.conn.execute_batch(SETUP_SQL) {
                        eprintln!("failed to set up database: {e}");
                        std::process::exit(1);
                    }
                    println!("numbers table created in {}", db_config.path);
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Insert { n } => {
            if let Err(e) = insert(&db_config, n) {
                eprintln!("{e}");
                std::process::exit(1);
            }
            println!("inserted {} into {}", n, db_config.path);
        }
        Commands::Increment { delta } => {
            if let Err(e) = increment(&db_config, delta) {
                eprintln!("{e}");
                std::process::exit(1);
            }
            println!("incremented all values in {} by {}", db_config.path, delta);
        }
        Commands::List { json } => {
            let values = match fetch_all_sorted(&db_config) {
                Ok(values) => values,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };
            if json {
                match serde_json::to_string(&values) {
                    Ok(out) => println!("{out}"),
                    Err(e) => {
                        eprintln!("{e}");
                        std::process::exit(1);
                    }
                }
            } else {
                for value in values {
                    println!("{value}");
                }
            }
        }
    }
}
