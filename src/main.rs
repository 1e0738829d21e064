//! Purchase predictor entrypoint: loads the artifacts once, then answers one
//! prediction request from flags, a JSON document, or the built-in examples.

use clap::{Parser, Subcommand};
use purchase_predictor::{
    artifacts::ArtifactBundle, config::AppConfig, features::CustomerInput,
    inference::PurchasePredictor, logging::StructuredLogger, presets::EXAMPLES,
};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "purchase-predictor")]
#[command(about = "Predict whether a customer will make a purchase", long_about = None)]
struct Cli {
    /// Config file (JSON); defaults to $PURCHASE_CONFIG_PATH or config.json
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Classifier artifact, overrides config
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    /// Scaler artifact, overrides config
    #[arg(long, global = true)]
    scaler: Option<PathBuf>,

    /// Feature-column list, overrides config
    #[arg(long, global = true)]
    features: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict for one customer given on the command line
    Predict {
        /// Age in years (1-120)
        #[arg(long, allow_negative_numbers = true)]
        age: i64,

        /// 0 = Male, 1 = Female
        #[arg(long, allow_negative_numbers = true)]
        gender: i64,

        /// Annual income ($)
        #[arg(long, allow_negative_numbers = true)]
        annual_income: f64,

        /// Number of purchases made
        #[arg(long, allow_negative_numbers = true)]
        purchases: i64,

        /// 0=Electronics, 1=Clothing, 2=Home, 3=Beauty, 4=Sports
        #[arg(long, allow_negative_numbers = true)]
        category: i64,

        /// Time spent on website (minutes)
        #[arg(long, allow_negative_numbers = true)]
        time_spent: f64,

        /// 0 = No, 1 = Yes
        #[arg(long, allow_negative_numbers = true)]
        loyalty: i64,

        /// Discounts availed (0-5)
        #[arg(long, allow_negative_numbers = true)]
        discounts: i64,
    },

    /// Run the built-in example customers
    Examples,

    /// Predict for one customer read as JSON (stdin when no file is given)
    Json {
        file: Option<PathBuf>,
    },
}

fn read_input(
    file: Option<&PathBuf>,
) -> Result<CustomerInput, Box<dyn std::error::Error + Send + Sync>> {
    let data = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&data)?)
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var("PURCHASE_CONFIG_PATH").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("config.json"));
    let mut config = AppConfig::load(&config_path);
    if let Some(p) = cli.model {
        config.artifacts.model_path = p;
    }
    if let Some(p) = cli.scaler {
        config.artifacts.scaler_path = p;
    }
    if let Some(p) = cli.features {
        config.artifacts.features_path = p;
    }

    StructuredLogger::init(config.log.json, &config.log.level);
    info!(config = %config_path.display(), "purchase predictor starting");

    let predictor = PurchasePredictor::new(ArtifactBundle::load(&config.artifacts)?);

    match cli.command {
        Commands::Predict {
            age,
            gender,
            annual_income,
            purchases,
            category,
            time_spent,
            loyalty,
            discounts,
        } => {
            let input = CustomerInput {
                age,
                gender,
                annual_income,
                number_of_purchases: purchases,
                product_category: category,
                time_spent,
                loyalty_program: loyalty,
                discounts_availed: discounts,
            };
            println!("{}", predictor.predict_display(&input));
        }
        Commands::Examples => {
            for (i, input) in EXAMPLES.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!(
                    "[{}, {}, {}, {}, {}, {}, {}, {}]",
                    input.age,
                    input.gender,
                    input.annual_income,
                    input.number_of_purchases,
                    input.product_category,
                    input.time_spent,
                    input.loyalty_program,
                    input.discounts_availed
                );
                println!("{}", predictor.predict_display(input));
            }
        }
        Commands::Json { file } => {
            let input = read_input(file.as_ref())?;
            println!("{}", predictor.predict_display(&input));
        }
    }

    Ok(())
}
