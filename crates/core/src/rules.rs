use crate::{Move, Outcome};

/// Resolves one round. Equal moves draw; otherwise exactly one of the pair
/// beats the other, so the table is closed with no tie-break ambiguity.
pub fn resolve(player: Move, computer: Move) -> Outcome {
    if player == computer {
        Outcome::Draw
    } else if player.beats() == computer {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
