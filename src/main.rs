use anyhow::Context;
use clap::Parser;
use indicatif::ProgressBar;
use rpsls_arena::config::Config;
use rpsls_arena::display::output::{display_error, display_info, display_report, display_success};
use rpsls_arena::error::AppError;
use rpsls_arena::simulation::{self, SimulationSettings, DEFAULT_MAX_ROUNDS};
use rpsls_arena::{logging, Personality, WeightTable};

#[derive(Parser, Debug)]
#[command(name = "rpsls-arena")]
#[command(about = "Pit a scripted human against adaptive and stubborn RPSLS opponents", long_about = None)]
struct Args {
    /// Opponent to face (default: a random one per match)
    #[arg(short, long, value_enum)]
    opponent: Option<Personality>,

    /// Number of matches to play
    #[arg(short, long, default_value = "10")]
    matches: usize,

    /// Winning rounds needed to take a match (default: RPSLS_FINAL_SCORE or 5)
    #[arg(short, long)]
    final_score: Option<u32>,

    /// Human frequency (%) above which adaptive opponents react
    #[arg(short, long)]
    threshold: Option<u32>,

    /// Random seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Scripted human weights: rock,paper,scissors,lizard,spock
    #[arg(long, default_value = "10,10,10,10,10", value_parser = parse_weights)]
    human_weights: WeightTable,

    /// Give up on a match after this many rounds
    #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
    max_rounds: usize,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn parse_weights(raw: &str) -> Result<WeightTable, String> {
    let parsed: Vec<u32> = raw
        .split(',')
        .map(|w| w.trim().parse::<u32>().map_err(|e| format!("{:?}: {}", w, e)))
        .collect::<Result<_, _>>()?;
    let weights: [u32; 5] = parsed
        .try_into()
        .map_err(|v: Vec<u32>| format!("expected 5 weights, got {}", v.len()))?;
    WeightTable::new(weights).map_err(|e| e.to_string())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_env().context("loading configuration")?;
    logging::init(&config.log_level);

    let settings = SimulationSettings {
        opponent: args.opponent,
        matches: args.matches,
        final_score: args.final_score.unwrap_or(config.final_score).max(1),
        threshold: args.threshold.unwrap_or(config.threshold),
        seed: args.seed.or(config.seed).unwrap_or_else(rand::random),
        human_weights: args.human_weights,
        max_rounds: args.max_rounds,
    };

    if !args.json {
        display_info(&format!(
            "Playing {} matches to {} (seed {})",
            settings.matches, settings.final_score, settings.seed
        ));
    }

    let pb = if args.json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(settings.matches as u64)
    };
    pb.set_message("Playing matches");

    let report = simulation::run(&settings, |_| pb.inc(1)).context("simulation failed")?;
    pb.finish_and_clear();

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::JsonError(format!("Failed to serialize report: {}", e)))?;
        println!("{}", json);
    } else {
        display_success(&format!("{} matches played", report.matches.len()));
        display_report(&report);
    }

    Ok(())
}
