use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fingenius_api::{AppState, InMemoryRepository, run_server};
use fingenius_core::{BudgetLine, BudgetPlan, FinancialGoal, Funds, InvestmentGoal, RiskLevel};
use fingenius_finance::{advisor, scams};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod config;
mod report;
mod state;

use report::OutputFormat;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("FINGENIUS_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(name = "fingenius", version = VERSION, about = "FinGenius personal finance assistant")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract expenses from pasted bank notifications (one per line)
    Analyze {
        /// Read notifications from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Compare monthly income with expense lines
    Budget {
        #[arg(long)]
        income: f64,

        /// Expense line as LABEL=AMOUNT (repeatable)
        #[arg(long = "expense", value_parser = parse_budget_line)]
        expenses: Vec<BudgetLine>,
    },

    /// Plan a savings goal against current savings and investments
    Goal {
        #[arg(long)]
        name: String,

        #[arg(long)]
        target: f64,

        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// Defaults to [profile].savings from the config
        #[arg(long)]
        savings: Option<f64>,

        /// Defaults to [profile].investments from the config
        #[arg(long)]
        investments: Option<f64>,
    },

    /// Suggest where to put a small daily amount and project its growth
    Invest {
        /// Rupees per day (minimum 10)
        #[arg(long)]
        daily: f64,

        /// low | medium | high
        #[arg(long)]
        risk: RiskLevel,

        /// emergency | retirement | education | home
        #[arg(long)]
        goal: InvestmentGoal,
    },

    /// Ask the advisor a question
    Chat {
        #[arg(required = true)]
        message: Vec<String>,
    },

    /// List common scam patterns and how to avoid them
    Scams {
        /// Only show alerts mentioning this term
        #[arg(long)]
        search: Option<String>,
    },

    /// Run the HTTP API
    Serve {
        #[arg(long, env = "FINGENIUS_HOST")]
        host: Option<String>,

        #[arg(long, env = "FINGENIUS_PORT")]
        port: Option<u16>,
    },

    /// Manage ~/.fingenius/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { file, format } => {
            let text = read_input(file.as_deref())?;
            let summary = fingenius_ingest::extract(&text);
            tracing::info!(
                records = summary.len(),
                total = %summary.total,
                "analyzed notifications"
            );
            report::print(&summary, format)?;
        }

        Command::Budget { income, expenses } => {
            if expenses.is_empty() {
                eprintln!(
                    "No --expense lines given. Common lines: {}",
                    fingenius_core::budget::DEFAULT_LINES.join(", ")
                );
            }
            let plan = BudgetPlan { income, expenses };
            let r = plan.analyze()?;

            println!("Income:         ₹{:.2}", r.income);
            println!("Total expenses: ₹{:.2}", r.total_expenses);
            println!("Savings:        ₹{:.2}", r.savings);
            for line in &r.breakdown {
                println!("  - {:<20} ₹{:.2}", line.label, line.amount);
            }
            println!("\n[{:?}] {}", r.health, r.advice);
        }

        Command::Goal {
            name,
            target,
            date,
            savings,
            investments,
        } => {
            let cfg = config::load_config()?;
            let funds = Funds {
                savings: savings.unwrap_or(cfg.profile.savings),
                investments: investments.unwrap_or(cfg.profile.investments),
            };
            let today = fingenius_core::today_in(&cfg.profile.timezone)?;
            tracing::debug!(
                %today,
                savings = funds.savings,
                investments = funds.investments,
                "planning goal"
            );
            let p = FinancialGoal::new(name, target, date).plan(funds, today)?;

            println!(
                "Goal: {} (₹{:.2} by {})",
                p.goal.name, p.goal.target_amount, p.goal.target_date
            );
            println!("Saved so far:   ₹{:.2} ({:.1}%)", p.current_saved, p.progress_pct);
            println!(
                "Time left:      {} days (~{} months)",
                p.days_remaining, p.months_remaining
            );
            println!("Needed monthly: ₹{:.2}", p.monthly_needed);
            println!("\n{}", p.outlook.tip());
        }

        Command::Invest { daily, risk, goal } => {
            let p = fingenius_core::project(daily, risk, goal)?;

            println!(
                "₹{:.2}/day → ₹{:.2}/month at an assumed {}% a year",
                p.daily_amount, p.monthly_amount, p.annual_return_pct
            );
            println!("{}\n", p.suggestion);
            for point in &p.growth {
                println!("  Year {}: ₹{:.2}", point.year, point.value);
            }
        }

        Command::Chat { message } => {
            let message = message.join(" ");
            println!("{}", advisor::reply(&message, advisor::seed_for(&message)));
        }

        Command::Scams { search } => {
            let alerts = scams::search(search.as_deref().unwrap_or_default());
            if alerts.is_empty() {
                println!("No scams found matching your search.");
            }
            for s in alerts {
                let marker = if s.critical { " (critical)" } else { "" };
                println!("## {}{}", s.title, marker);
                println!("{}", s.warning);
                println!("Red flags: {}", s.red_flags);
                println!("Stay safe: {}\n", s.safety_tip);
            }
        }

        Command::Serve { host, port } => {
            let cfg = config::load_config()?;
            let host = host.unwrap_or_else(|| cfg.server.host.clone());
            let port = port.unwrap_or(cfg.server.port);
            tracing::info!(
                host = %host,
                port,
                timezone = %cfg.profile.timezone,
                delay_ms = cfg.server.analysis_delay_ms,
                "starting FinGenius API"
            );

            let state = AppState {
                repo: Arc::new(InMemoryRepository::new(cfg.funds())),
                settings: cfg.api_settings(),
            };
            run_server(state, &host, port).await?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config()?,
        },
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise info for the fingenius crates and request traces.
fn init_logger() {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(
            "fingenius=info,fingenius_api=info,fingenius_ingest=info,tower_http=info",
        ),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read notifications from stdin")?;
            Ok(text)
        }
    }
}

fn parse_budget_line(s: &str) -> Result<BudgetLine> {
    let Some((label, amount)) = s.split_once('=') else {
        bail!("expected LABEL=AMOUNT, got {s:?}");
    };
    let label = label.trim();
    if label.is_empty() {
        bail!("expense label is empty in {s:?}");
    }
    let amount = amount
        .trim()
        .parse::<f64>()
        .with_context(|| format!("invalid amount in {s:?}"))?;
    Ok(BudgetLine {
        label: label.to_string(),
        amount,
    })
}
