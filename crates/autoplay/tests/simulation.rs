use roshambo_autoplay::{run_simulation, AutoplayConfig};
use roshambo_core::{resolve, Outcome};

macro_rules! tally_case {
    ($name:ident, $seed:expr, $rounds:expr) => {
        #[test]
        fn $name() {
            let config = AutoplayConfig {
                seed: $seed,
                rounds: $rounds,
                period_ms: 0,
            };
            let report = run_simulation(&config);
            assert_eq!(report.rounds, $rounds);
            assert_eq!(report.wins + report.losses + report.draws, $rounds);
            assert_eq!(report.player_score, report.wins);
            assert_eq!(report.computer_score, report.losses);
            assert_eq!(report.trace.len(), $rounds as usize);
        }
    };
}

tally_case!(tally_seed_1_short, 1, 5);
tally_case!(tally_seed_7_medium, 7, 50);
tally_case!(tally_seed_coffee_long, 0xC0FFEE, 200);
tally_case!(tally_seed_max, u64::MAX, 25);

#[test]
fn trace_rounds_are_sequential_and_consistent() {
    let config = AutoplayConfig {
        seed: 99,
        rounds: 30,
        period_ms: 0,
    };
    let report = run_simulation(&config);
    let mut player_score = 0u32;
    let mut computer_score = 0u32;
    for (index, row) in report.trace.iter().enumerate() {
        assert_eq!(row.round, index as u32 + 1);
        assert_eq!(row.outcome, resolve(row.player, row.computer));
        match row.outcome {
            Outcome::Win => player_score += 1,
            Outcome::Lose => computer_score += 1,
            Outcome::Draw => {}
        }
        assert_eq!(row.player_score_after, player_score);
        assert_eq!(row.computer_score_after, computer_score);
    }
}

#[test]
fn same_seed_produces_identical_reports() {
    let config = AutoplayConfig {
        seed: 0xDEAD,
        rounds: 40,
        period_ms: 0,
    };
    let first = run_simulation(&config);
    let second = run_simulation(&config);
    assert_eq!(first.trace, second.trace);
    assert_eq!(first.summary_line(), second.summary_line());
}

#[test]
fn history_stays_within_cap() {
    let config = AutoplayConfig {
        seed: 3,
        rounds: 64,
        period_ms: 0,
    };
    let mut simulator = roshambo_autoplay::Simulator::from_config(&config);
    let report = simulator.run(&config);
    assert_eq!(report.rounds, 64);
    assert_eq!(simulator.session.ledger.history_len(), 10);
}
