use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use venture_odds::api::{HttpSource, NewVenture};
use venture_odds::config::Config;

const EXIT_SUCCESS: i32 = 0;
const EXIT_NETWORK: i32 = 2;
const EXIT_UNAVAILABLE: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate the success rate of a new venture with the given skills
    Score {
        /// Skill ids, comma separated (e.g. 1,2,3)
        #[arg(value_delimiter = ',', required = true)]
        skill_ids: Vec<i64>,
    },
    /// Rank ventures by mean evaluation rating
    Rank {
        /// How many ventures to consider
        #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..=500))]
        limit: u16,
    },
    /// List every skill in the catalogue
    Skills {
        /// Page size used when paging through the catalogue
        #[arg(long, default_value_t = 10)]
        page_size: usize,
    },
    /// Show evaluation counts and mean rating per venture
    Evaluations {
        /// How many ventures to consider
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
    /// Register a new venture
    Register(RegisterArgs),
    /// Write a starter config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
struct RegisterArgs {
    /// Company tax id (CNPJ)
    #[arg(long)]
    tax_id: String,
    /// Pitch video URL
    #[arg(long, default_value = "")]
    video: String,
    /// Venture name
    #[arg(long)]
    name: String,
    /// Website
    #[arg(long, default_value = "")]
    site: String,
    /// Short description
    #[arg(long, default_value = "")]
    description: String,
    /// Name of the person responsible
    #[arg(long)]
    owner_name: String,
    /// Contact email
    #[arg(long)]
    owner_email: String,
    /// Owner's personal id (CPF) as registered with the service
    #[arg(long)]
    owner_id: String,
}

impl From<RegisterArgs> for NewVenture {
    fn from(args: RegisterArgs) -> Self {
        NewVenture {
            tax_id: args.tax_id,
            video_url: args.video,
            name: args.name,
            site: args.site,
            description: args.description,
            owner_name: args.owner_name,
            owner_email: args.owner_email,
            owner_id: args.owner_id,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "venture-odds")]
#[command(about = "Estimate a new venture's odds of success from its skills", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/venture-odds/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,venture_odds=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn build_source(config: &Config) -> HttpSource {
    let built = config.api_base().and_then(|base| {
        let request_timeout = config.request_timeout()?;
        let create_timeout = config.create_timeout()?;
        Ok(HttpSource::new(base, request_timeout, create_timeout)?)
    });
    match built {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env if present; real environment variables win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);
    let start_time = Instant::now();
    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init { force } = cli.command {
        match venture_odds::config::write_default_config(config_path.clone(), force) {
            Ok(path) => {
                println!("Wrote starter config to {}", path.display());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    // Load config
    let config = match venture_odds::config::load_config(config_path) {
        Ok(c) => c.with_env_overrides(|key| std::env::var(key).ok()),
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config (including scoring weights) at startup
    if let Err(errors) = venture_odds::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let source = build_source(&config);
    tracing::debug!(base = source.base_url(), "using venture service");
    let use_colors = venture_odds::output::should_use_colors();

    match cli.command {
        Commands::Score { skill_ids } => {
            let api_key = venture_odds::credentials::get_gemini_key_from_env();
            let gemini = match config.gemini_config(api_key) {
                Ok(g) => g,
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };
            let generator = venture_odds::explain::build_generator(gemini);
            tracing::debug!(generator = generator.name(), "explanation generator selected");

            let assessment = venture_odds::fetch::assess(
                &source,
                &config,
                generator.as_ref(),
                &skill_ids,
            )
            .await;

            let Some(assessment) = assessment else {
                eprintln!(
                    "Could not compute a score: the venture service is unreachable or has no ventures."
                );
                std::process::exit(EXIT_UNAVAILABLE);
            };

            println!(
                "{}",
                venture_odds::output::format_score_report(
                    &assessment.result,
                    &config.scoring().weights(),
                    use_colors
                )
            );
            println!();
            println!("{}", assessment.explanation);
        }
        Commands::Rank { limit } => {
            let ventures = venture_odds::api::list_ventures(
                &source,
                config.ventures_path(),
                limit as usize,
            )
            .await;
            let ranked = venture_odds::aggregate::rank_ventures(&ventures);
            println!("{}", venture_odds::output::format_ranking(&ranked, use_colors));
        }
        Commands::Skills { page_size } => {
            let skills =
                venture_odds::api::list_all_skills(&source, config.skills_path(), page_size).await;
            println!("{}", venture_odds::output::format_skills(&skills, use_colors));
        }
        Commands::Evaluations { limit } => {
            let ventures =
                venture_odds::api::list_ventures(&source, config.ventures_path(), limit).await;
            let groups = venture_odds::aggregate::group_evaluations(&ventures);
            println!("{}", venture_odds::output::format_evaluation_groups(&groups));
        }
        Commands::Register(args) => {
            let venture = NewVenture::from(args);
            match venture_odds::api::register_venture(&source, config.ventures_path(), &venture)
                .await
            {
                Ok(response) => {
                    println!("Venture registered.");
                    println!("Response: {}", response);
                }
                Err(e) => {
                    eprintln!("Failed to register venture: {}", e);
                    std::process::exit(EXIT_NETWORK);
                }
            }
        }
        // Handled before the config is loaded
        Commands::Init { .. } => {}
    }

    tracing::debug!(elapsed = ?start_time.elapsed(), "done");
    std::process::exit(EXIT_SUCCESS);
}
