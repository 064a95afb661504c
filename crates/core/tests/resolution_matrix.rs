use roshambo_core::{resolve, EventBus, GameConfig, Move, Outcome, Session, SessionError};

macro_rules! resolve_case {
    ($name:ident, $player:expr, $computer:expr, $expected:expr) => {
        #[test]
        fn $name() {
            assert_eq!(resolve($player, $computer), $expected);
        }
    };
}

resolve_case!(rock_vs_rock, Move::Rock, Move::Rock, Outcome::Draw);
resolve_case!(paper_vs_paper, Move::Paper, Move::Paper, Outcome::Draw);
resolve_case!(
    scissors_vs_scissors,
    Move::Scissors,
    Move::Scissors,
    Outcome::Draw
);
resolve_case!(rock_vs_scissors, Move::Rock, Move::Scissors, Outcome::Win);
resolve_case!(paper_vs_rock, Move::Paper, Move::Rock, Outcome::Win);
resolve_case!(scissors_vs_paper, Move::Scissors, Move::Paper, Outcome::Win);
resolve_case!(rock_vs_paper, Move::Rock, Move::Paper, Outcome::Lose);
resolve_case!(paper_vs_scissors, Move::Paper, Move::Scissors, Outcome::Lose);
resolve_case!(scissors_vs_rock, Move::Scissors, Move::Rock, Outcome::Lose);

#[test]
fn unequal_pairs_have_exactly_one_winner() {
    for player in Move::ALL {
        for computer in Move::ALL {
            if player == computer {
                continue;
            }
            let forward = resolve(player, computer);
            let reverse = resolve(computer, player);
            match forward {
                Outcome::Win => assert_eq!(reverse, Outcome::Lose),
                Outcome::Lose => assert_eq!(reverse, Outcome::Win),
                Outcome::Draw => panic!("unequal pair {player:?}/{computer:?} drew"),
            }
        }
    }
}

fn fixed_session() -> (Session, EventBus) {
    (Session::new(GameConfig::default(), 42), EventBus::default())
}

#[test]
fn counts_sum_to_round_counter() {
    let (mut session, mut events) = fixed_session();
    for step in 0..25u32 {
        let mv = Move::ALL[step as usize % 3];
        session.play_move(mv, &mut events);
        let ledger = &session.ledger;
        assert_eq!(ledger.wins + ledger.losses + ledger.draws, ledger.round);
        assert_eq!(ledger.round, step + 1);
        assert_eq!(ledger.player_score, ledger.wins);
        assert_eq!(ledger.computer_score, ledger.losses);
    }
}

#[test]
fn history_is_capped_and_evicts_oldest() {
    let (mut session, mut events) = fixed_session();
    for n in 1..=11u32 {
        session.play_move(Move::Rock, &mut events);
        let expected = (n as usize).min(10);
        assert_eq!(session.ledger.history_len(), expected);
    }
    let rounds: Vec<u32> = session.ledger.history().map(|rec| rec.round).collect();
    assert_eq!(rounds, (2..=11).rev().collect::<Vec<u32>>());
    assert!(!rounds.contains(&1));
}

#[test]
fn history_is_newest_first() {
    let (mut session, mut events) = fixed_session();
    for _ in 0..4 {
        session.play_move(Move::Paper, &mut events);
    }
    assert_eq!(session.ledger.latest().map(|rec| rec.round), Some(4));
    let rounds: Vec<u32> = session.ledger.history().map(|rec| rec.round).collect();
    assert_eq!(rounds, vec![4, 3, 2, 1]);
}

#[test]
fn reset_clears_everything() {
    let (mut session, mut events) = fixed_session();
    for _ in 0..7 {
        session.play_move(Move::Scissors, &mut events);
    }
    session.reset(&mut events);
    let ledger = &session.ledger;
    assert_eq!(ledger.round, 0);
    assert_eq!(ledger.wins, 0);
    assert_eq!(ledger.losses, 0);
    assert_eq!(ledger.draws, 0);
    assert_eq!(ledger.player_score, 0);
    assert_eq!(ledger.computer_score, 0);
    assert_eq!(ledger.history_len(), 0);
    assert_eq!(session.selected(), None);
}

#[test]
fn play_without_selection_leaves_ledger_unchanged() {
    let (mut session, mut events) = fixed_session();
    let result = session.play_round(&mut events);
    assert_eq!(result, Err(SessionError::NoMoveSelected));
    assert_eq!(session.ledger.round, 0);
    assert_eq!(session.ledger.history_len(), 0);
}

#[test]
fn selection_persists_across_rounds() {
    let (mut session, mut events) = fixed_session();
    session.select_move(Move::Rock, &mut events);
    session.play_round(&mut events).unwrap();
    session.play_round(&mut events).unwrap();
    assert_eq!(session.selected(), Some(Move::Rock));
    assert_eq!(session.ledger.round, 2);
}

#[test]
fn scripted_scenario_matches_expected_tallies() {
    // (rock, scissors) -> win, (paper, paper) -> draw, (scissors, rock) -> lose
    let mut ledger = roshambo_core::SessionLedger::new();
    let pairs = [
        (Move::Rock, Move::Scissors),
        (Move::Paper, Move::Paper),
        (Move::Scissors, Move::Rock),
    ];
    let outcomes: Vec<Outcome> = pairs
        .iter()
        .map(|(player, computer)| {
            let outcome = resolve(*player, *computer);
            ledger.record(*player, *computer, outcome, 10);
            outcome
        })
        .collect();
    assert_eq!(outcomes, vec![Outcome::Win, Outcome::Draw, Outcome::Lose]);
    assert_eq!(ledger.player_score, 1);
    assert_eq!(ledger.computer_score, 1);
    assert_eq!(ledger.wins, 1);
    assert_eq!(ledger.losses, 1);
    assert_eq!(ledger.draws, 1);
    assert_eq!(ledger.round, 3);
}

#[test]
fn same_seed_replays_identically() {
    let (mut first, mut events_a) = fixed_session();
    let (mut second, mut events_b) = fixed_session();
    for step in 0..12u32 {
        let mv = Move::ALL[step as usize % 3];
        let a = first.play_move(mv, &mut events_a);
        let b = second.play_move(mv, &mut events_b);
        assert_eq!(a, b);
    }
}
