use roshambo_core::Move;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Scripted opening: replay these moves before interactive control starts.
#[derive(Debug, Clone)]
pub struct MoveScript {
    pub seed: Option<u64>,
    pub moves: Vec<Move>,
}

#[derive(Debug, Clone, Deserialize)]
struct MoveScriptFile {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    moves: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum MoveScriptPayload {
    Script(MoveScriptFile),
    Moves(Vec<String>),
}

pub fn load_move_script(path: &Path) -> Result<MoveScript, String> {
    let body = fs::read_to_string(path).map_err(|err| err.to_string())?;
    let payload: MoveScriptPayload =
        serde_json::from_str(&body).map_err(|err| err.to_string())?;
    let (seed, raw_moves) = match payload {
        MoveScriptPayload::Script(file) => (file.seed, file.moves),
        MoveScriptPayload::Moves(moves) => (None, moves),
    };
    let mut moves = Vec::with_capacity(raw_moves.len());
    for raw in raw_moves {
        moves.push(Move::from_str(&raw).map_err(|err| err.to_string())?);
    }
    Ok(MoveScript { seed, moves })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> MoveScript {
        let payload: MoveScriptPayload = serde_json::from_str(body).unwrap();
        let (seed, raw_moves) = match payload {
            MoveScriptPayload::Script(file) => (file.seed, file.moves),
            MoveScriptPayload::Moves(moves) => (None, moves),
        };
        MoveScript {
            seed,
            moves: raw_moves
                .iter()
                .map(|raw| Move::from_str(raw).unwrap())
                .collect(),
        }
    }

    #[test]
    fn parses_object_payload() {
        let script = parse(r#"{"seed": 7, "moves": ["rock", "p", "scissors"]}"#);
        assert_eq!(script.seed, Some(7));
        assert_eq!(script.moves, vec![Move::Rock, Move::Paper, Move::Scissors]);
    }

    #[test]
    fn parses_bare_move_list() {
        let script = parse(r#"["r", "s"]"#);
        assert_eq!(script.seed, None);
        assert_eq!(script.moves, vec![Move::Rock, Move::Scissors]);
    }
}
