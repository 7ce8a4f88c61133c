//! Purple Suite — estimate what a member gets back from the programme.
//!
//! Loads a member profile, runs the rewards engine, and prints either a
//! breakdown table or the raw breakdown as JSON.

use clap::{Parser, Subcommand};
use purple_core::config::{AppConfig, OutputConfig, RewardsConfig};
use purple_core::profile::{load_profile, profile_to_json};
use purple_core::{MemberProfile, RewardBreakdown};
use purple_rewards::{
    assess_money_behaviours, format_rand, MoneyBehaviourAssessment, RewardsEngine,
};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "purple-suite")]
#[command(about = "Estimate the monthly and annual value of the Purple Suite")]
#[command(version)]
struct Cli {
    /// TOML config file (environment variables still apply on top)
    #[arg(long, global = true, env = "PURPLE_SUITE_CONFIG")]
    config: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Value every benefit for a member profile
    Evaluate {
        /// JSON profile file (default: the estimator preset)
        #[arg(short, long)]
        profile: Option<String>,

        /// Print the breakdown as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Show categories worth nothing as well
        #[arg(long, default_value_t = false)]
        show_zero: bool,
    },

    /// Score the Vitality Money savings and debt behaviours
    Behaviours {
        /// JSON profile file (default: the estimator preset)
        #[arg(short, long)]
        profile: Option<String>,

        /// Print the assessment as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the estimator preset profile as JSON, as a starting point
    Preset,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut config = AppConfig::load(cli.config.as_deref()).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    match cli.command {
        Commands::Evaluate {
            profile,
            json,
            show_zero,
        } => {
            if show_zero {
                config.output.hide_zero_categories = false;
            }
            let profile = read_profile(profile.as_deref())?;
            let engine = RewardsEngine::new(&config.rewards);
            let breakdown = engine.evaluate(&profile);

            if json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                print_breakdown(&breakdown, &config.rewards, &config.output);
            }
        }
        Commands::Behaviours { profile, json } => {
            let profile = read_profile(profile.as_deref())?;
            let assessment = assess_money_behaviours(&profile);

            if json {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                print_behaviours(&assessment);
            }
        }
        Commands::Preset => {
            println!("{}", profile_to_json(&MemberProfile::estimator_preset())?);
        }
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "purple_suite=info,purple_rewards=info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_profile(path: Option<&str>) -> anyhow::Result<MemberProfile> {
    match path {
        Some(path) => {
            let profile = load_profile(path)?;
            info!(path = %path, "Using profile file");
            Ok(profile)
        }
        None => {
            info!("No profile given, using the estimator preset");
            Ok(MemberProfile::estimator_preset())
        }
    }
}

fn print_row(label: &str, value: impl std::fmt::Display) {
    println!("{:<32} {:>12}", label, value);
}

fn print_breakdown(breakdown: &RewardBreakdown, rewards: &RewardsConfig, output: &OutputConfig) {
    let items = if output.hide_zero_categories {
        breakdown.visible_line_items()
    } else {
        breakdown.line_items()
    };

    println!("=== Purple Suite: Monthly Value ===");
    for (category, value) in items {
        print_row(category.label(), format_rand(value));
    }
    println!("{:-<45}", "");
    print_row("Total monthly value", format_rand(breakdown.total_monthly_value));
    print_row("Monthly account fee", format_rand(-breakdown.monthly_fees));
    print_row("Net monthly profit", format_rand(breakdown.net_monthly_profit));
    println!();
    print_row("Total annual value", format_rand(breakdown.total_annual_value));
    print_row("Annual fees", format_rand(-rewards.total_annual_fees()));
    print_row("Net annual profit", format_rand(breakdown.net_annual_profit));
}

fn print_behaviours(assessment: &MoneyBehaviourAssessment) {
    println!("=== Vitality Money Behaviours ===");
    print_row("Savings target (3x income)", format_rand(assessment.savings_target));
    println!("{:<32} {:>11.0}%", "Progress", assessment.savings_progress_pct);
    print_row("Savings points", assessment.savings_points);
    match assessment.debt_ratio_pct {
        Some(ratio) => println!("{:<32} {:>11.1}%", "Debt repayment / income", ratio),
        None => print_row("Debt repayment / income", "n/a"),
    }
    print_row("Debt points", assessment.debt_points);
    print_row("Total points", assessment.total_points());
}
