use roshambo_autoplay::{run_simulation, write_report, AutoplayConfig, RoundTrace, SessionReport};
use roshambo_core::{
    EventBus, GameConfig, Move, Outcome, RoundRecord, Session, SessionError,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_SEED: u64 = 0xC0FFEE;

#[derive(Debug, Clone)]
struct CliOptions {
    cui: bool,
    auto: Option<u32>,
    report: Option<PathBuf>,
    seed: Option<u64>,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut cui = false;
    let mut auto = None;
    let mut report = None;
    let mut seed = None;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--cui" => cui = true,
            "--auto" => {
                if let Some(value) = args.get(idx + 1) {
                    auto = value.parse::<u32>().ok();
                    idx += 1;
                }
            }
            "--report" => {
                if let Some(value) = args.get(idx + 1) {
                    report = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    CliOptions {
        cui,
        auto,
        report,
        seed,
    }
}

/// REPL form: `auto [N] [--json PATH]`. Rounds default to 10.
fn parse_auto_command<'a>(parts: impl Iterator<Item = &'a str>) -> (u32, Option<PathBuf>) {
    let mut rounds = 10u32;
    let mut json = None;
    let mut tokens = parts.peekable();
    if let Some(first) = tokens.peek() {
        if let Ok(value) = first.parse::<u32>() {
            rounds = value;
            tokens.next();
        }
    }
    while let Some(token) = tokens.next() {
        if token == "--json" {
            if let Some(path) = tokens.next() {
                json = Some(PathBuf::from(path));
            }
        }
    }
    (rounds, json)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    if options.cui {
        let launch = roshambo_cui::LaunchOptions {
            seed: options.seed,
            script: None,
        };
        if let Err(err) = roshambo_cui::run(launch) {
            eprintln!("cui launch error: {err}");
            std::process::exit(1);
        }
        return;
    }
    if let Some(rounds) = options.auto {
        run_auto(rounds, options.seed.unwrap_or(DEFAULT_SEED), options.report);
        return;
    }
    if let Err(err) = run_repl(options.seed.unwrap_or(DEFAULT_SEED)) {
        eprintln!("io error: {err}");
        std::process::exit(1);
    }
}

fn run_auto(rounds: u32, seed: u64, report_path: Option<PathBuf>) {
    let config = AutoplayConfig {
        seed,
        rounds,
        period_ms: 0,
    };
    let report = run_simulation(&config);
    println!("seed {} {}", report.seed, report.summary_line());
    for row in &report.trace {
        println!(
            "round {:>3}: {} vs {} -> {}",
            row.round,
            row.player.label(),
            row.computer.label(),
            row.outcome.label()
        );
    }
    if let Some(path) = report_path {
        match write_report(&report, &path) {
            Ok(()) => println!("report written to {}", path.display()),
            Err(err) => {
                eprintln!("report error: {err}");
                std::process::exit(1);
            }
        }
    }
}

fn run_repl(seed: u64) -> io::Result<()> {
    let mut session = Session::new(GameConfig::default(), seed);
    let mut events = EventBus::default();
    println!("roshambo (seed {seed}) - type 'help' for commands");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        match command {
            "exit" | "quit" => break,
            "help" | "?" => print_help(),
            "rock" | "paper" | "scissors" | "r" | "p" | "s" => {
                match Move::from_str(command) {
                    Ok(mv) => {
                        session.select_move(mv, &mut events);
                        println!("selected {}", mv.label());
                    }
                    Err(err) => println!("{err}"),
                }
            }
            "play" => match session.play_round(&mut events) {
                Ok(record) => print_round(&record, &session),
                Err(SessionError::NoMoveSelected) => {
                    println!("please select a move first (rock/paper/scissors)");
                }
            },
            "auto" => {
                let (rounds, json_path) = parse_auto_command(parts);
                let mut trace = Vec::with_capacity(rounds as usize);
                for _ in 0..rounds {
                    let player = session.rng.draw_move();
                    let record = session.play_move(player, &mut events);
                    print_round(&record, &session);
                    trace.push(RoundTrace::from_record(
                        &record,
                        session.ledger.player_score,
                        session.ledger.computer_score,
                    ));
                }
                if let Some(path) = json_path {
                    let ledger = &session.ledger;
                    let report = SessionReport {
                        seed,
                        rounds: ledger.round,
                        wins: ledger.wins,
                        losses: ledger.losses,
                        draws: ledger.draws,
                        player_score: ledger.player_score,
                        computer_score: ledger.computer_score,
                        trace,
                    };
                    match write_report(&report, &path) {
                        Ok(()) => println!("report written to {}", path.display()),
                        Err(err) => println!("report error: {err}"),
                    }
                }
            }
            "score" => print_score(&session),
            "history" => {
                if parts.next() == Some("--json") {
                    let rows: Vec<&RoundRecord> = session.ledger.history().collect();
                    match serde_json::to_string_pretty(&rows) {
                        Ok(body) => println!("{body}"),
                        Err(err) => println!("serialize error: {err}"),
                    }
                } else {
                    print_history(&session);
                }
            }
            "reset" => {
                session.reset(&mut events);
                println!("session reset");
            }
            other => println!("unknown command: {other} (try 'help')"),
        }
        // The REPL prints directly; drop the queued events.
        let _ = events.drain().count();
    }
    Ok(())
}

fn print_round(record: &RoundRecord, session: &Session) {
    let verdict = match record.outcome {
        Outcome::Win => "you win!",
        Outcome::Lose => "computer wins!",
        Outcome::Draw => "it's a draw!",
    };
    println!(
        "round {}: {} vs {} -> {} ({}-{})",
        record.round,
        record.player.label(),
        record.computer.label(),
        verdict,
        session.ledger.player_score,
        session.ledger.computer_score
    );
}

fn print_score(session: &Session) {
    let ledger = &session.ledger;
    println!(
        "score {}-{} | round {} | wins {} losses {} draws {}",
        ledger.player_score, ledger.computer_score, ledger.round, ledger.wins, ledger.losses,
        ledger.draws
    );
}

fn print_history(session: &Session) {
    if session.ledger.history_len() == 0 {
        println!("no rounds yet");
        return;
    }
    for record in session.ledger.history() {
        println!(
            "round {:>3}: {} vs {} -> {}",
            record.round,
            record.player.label(),
            record.computer.label(),
            record.outcome.label()
        );
    }
}

fn print_help() {
    println!("rock|paper|scissors (r|p|s)  select your move");
    println!("play                         resolve a round with the selected move");
    println!("auto [N] [--json PATH]       play N random rounds (default 10), optional report");
    println!("score                        show scores and tallies");
    println!("history [--json]             show the last 10 rounds");
    println!("reset                        clear scores and history");
    println!("exit                         quit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_command_defaults_to_ten_rounds() {
        let (rounds, json) = parse_auto_command("".split_whitespace());
        assert_eq!(rounds, 10);
        assert_eq!(json, None);
    }

    #[test]
    fn auto_command_parses_rounds_and_json_path() {
        let (rounds, json) = parse_auto_command("25 --json out.json".split_whitespace());
        assert_eq!(rounds, 25);
        assert_eq!(json, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn auto_command_accepts_json_without_rounds() {
        let (rounds, json) = parse_auto_command("--json report.json".split_whitespace());
        assert_eq!(rounds, 10);
        assert_eq!(json, Some(PathBuf::from("report.json")));
    }

    #[test]
    fn cli_options_parse_auto_report_seed() {
        let args: Vec<String> = ["--auto", "30", "--report", "r.json", "--seed", "9"]
            .iter()
            .map(|value| value.to_string())
            .collect();
        let options = parse_cli_options(&args);
        assert!(!options.cui);
        assert_eq!(options.auto, Some(30));
        assert_eq!(options.report, Some(PathBuf::from("r.json")));
        assert_eq!(options.seed, Some(9));
    }
}
