use crate::analysis::frequency::Frequencies;
use crate::game::history::Actor;
use crate::simulation::{MatchReport, SimulationReport};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    opponent: String,
    score: String,
    rounds: String,
    result: String,
}

#[derive(Tabled)]
struct FrequencyRow {
    #[tabled(rename = "move")]
    hand: String,
    human: String,
    computer: String,
}

fn result_cell(report: &MatchReport) -> String {
    match (report.winner, &report.aborted) {
        (_, Some(reason)) => format!("ABORTED ({})", reason).yellow().to_string(),
        (Some(Actor::Human), None) => "HUMAN".green().to_string(),
        (Some(Actor::Computer), None) => "COMPUTER".red().to_string(),
        (None, None) => "UNDECIDED".yellow().to_string(),
    }
}

pub fn display_matches(matches: &[MatchReport]) {
    println!("\n{}", format!("🎮 MATCHES ({})", matches.len()).bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if matches.is_empty() {
        println!("{}", "No matches were played".yellow());
        return;
    }

    let rows: Vec<MatchRow> = matches
        .iter()
        .map(|m| MatchRow {
            number: m.number.to_string(),
            opponent: m.opponent.to_string(),
            score: format!("{}:{}", m.human_score, m.computer_score),
            rounds: m.rounds.to_string(),
            result: result_cell(m),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn display_frequencies(human: &Frequencies, computer: &Frequencies) {
    println!("\n{}", "📊 MOVE FREQUENCIES".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let rows: Vec<FrequencyRow> = human
        .iter()
        .zip(computer.iter())
        .map(|((m, h), (_, c))| FrequencyRow {
            hand: m.to_string(),
            human: format!("{:.1}%", h),
            computer: format!("{:.1}%", c),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    println!(
        "Rounds observed: {} human / {} computer",
        human.rounds, computer.rounds
    );
}

pub fn display_summary(report: &SimulationReport) {
    let human = report.wins(Actor::Human);
    let computer = report.wins(Actor::Computer);
    let total = report.matches.len();
    let computer_rate = if total == 0 {
        0.0
    } else {
        computer as f64 / total as f64 * 100.0
    };

    println!("\n{}", "Summary".bold().yellow());
    println!(
        "{} {} human / {} computer / {} undecided ({:.1}% computer WR)",
        "📈 Overall:".bold(),
        human.to_string().green(),
        computer.to_string().red(),
        report.undecided(),
        computer_rate
    );
    if let Some(dominant) = report.human_frequencies.dominant() {
        println!(
            "  Human favourite: {} ({:.1}%)",
            dominant,
            report.human_frequencies.get(dominant)
        );
    }
    println!();
}

pub fn display_report(report: &SimulationReport) {
    display_matches(&report.matches);
    display_frequencies(&report.human_frequencies, &report.computer_frequencies);
    display_summary(report);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
