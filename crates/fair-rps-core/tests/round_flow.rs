//! Integration tests for the full round flow.
//!
//! These tests drive complete rounds through the public API with scripted
//! players and selectors.

use fair_rps_core::{
    crypto,
    games::{determine, MoveIndex, MoveSelector, MoveSet, OsRngSelector, ThreadRngSelector},
    protocol::{Outcome, Player, PlayerInput, Round, RoundError, Transcript},
    HelpTable,
};
use std::collections::VecDeque;
use std::io;

/// Selector that always picks the same position
struct Fixed(usize);

impl MoveSelector for Fixed {
    fn pick(&mut self, moves: &MoveSet) -> MoveIndex {
        moves.index(self.0).unwrap()
    }
}

/// Player that replays a fixed list of inputs and records help requests
struct Scripted {
    inputs: VecDeque<PlayerInput>,
    tables_shown: Vec<String>,
}

impl Scripted {
    fn new(inputs: impl IntoIterator<Item = PlayerInput>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            tables_shown: Vec::new(),
        }
    }
}

impl Player for Scripted {
    fn choose(&mut self, _moves: &MoveSet) -> io::Result<PlayerInput> {
        self.inputs
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn show_help(&mut self, table: &HelpTable<'_>) -> io::Result<()> {
        self.tables_shown.push(table.to_string());
        Ok(())
    }
}

fn classic() -> MoveSet {
    MoveSet::validate(["rock", "paper", "scissors"]).unwrap()
}

fn extended() -> MoveSet {
    MoveSet::validate(["rock", "paper", "scissors", "lizard", "spock"]).unwrap()
}

#[test]
fn test_rock_against_paper_loses() {
    let moves = classic();
    let round = Round::start(&moves, &mut Fixed(1));
    let published = *round.digest();

    let mut player = Scripted::new([PlayerInput::Move("rock".into())]);
    let result = round.play(&mut player).unwrap().unwrap();

    assert_eq!(result.outcome, Outcome::Lose);
    assert_eq!(result.opponent_move(), "paper");
    // An observer with only the published digest and the revealed key
    assert!(crypto::verify(&result.reveal.key, "paper", &published));
    assert!(!crypto::verify(&result.reveal.key, "rock", &published));
}

#[test]
fn test_paper_against_rock_wins() {
    let moves = classic();
    let mut player = Scripted::new([PlayerInput::Move("paper".into())]);
    let result = Round::start(&moves, &mut Fixed(0))
        .play(&mut player)
        .unwrap()
        .unwrap();
    assert_eq!(result.outcome, Outcome::Win);
}

#[test]
fn test_scissors_against_rock_loses_across_wrap() {
    let moves = classic();
    let mut player = Scripted::new([PlayerInput::Move("scissors".into())]);
    let result = Round::start(&moves, &mut Fixed(0))
        .play(&mut player)
        .unwrap()
        .unwrap();
    assert_eq!(result.outcome, Outcome::Lose);
}

#[test]
fn test_help_then_move() {
    let moves = extended();
    let mut player = Scripted::new([
        PlayerInput::Help,
        PlayerInput::Help,
        PlayerInput::Move("spock".into()),
    ]);
    let result = Round::start(&moves, &mut Fixed(4))
        .play(&mut player)
        .unwrap()
        .unwrap();

    assert_eq!(result.outcome, Outcome::Draw);
    assert_eq!(player.tables_shown.len(), 2);
    assert!(player.tables_shown[0].contains("| Moves "));
    assert!(player.inputs.is_empty());
}

#[test]
fn test_exit_resolves_nothing() {
    let moves = classic();
    let mut player = Scripted::new([PlayerInput::Exit, PlayerInput::Move("rock".into())]);
    let ended = Round::start(&moves, &mut Fixed(0)).play(&mut player).unwrap();

    assert!(ended.is_none());
    // Nothing after the exit is consumed.
    assert_eq!(player.inputs.len(), 1);
}

#[test]
fn test_unknown_move_forfeits_with_verifiable_reveal() {
    let moves = classic();
    let round = Round::start(&moves, &mut Fixed(2));
    let published = *round.digest();

    let mut player = Scripted::new([PlayerInput::Move("4".into())]);
    match round.play(&mut player) {
        Err(RoundError::UnknownMove { input, reveal }) => {
            assert_eq!(input, "4");
            assert_eq!(reveal.digest, published);
            assert!(crypto::verify(&reveal.key, "scissors", &published));
        }
        other => panic!("expected UnknownMove, got {:?}", other),
    }
}

#[test]
fn test_input_failure_surfaces_as_io_error() {
    let moves = classic();
    let mut player = Scripted::new([]);
    let err = Round::start(&moves, &mut Fixed(0))
        .play(&mut player)
        .unwrap_err();
    assert!(matches!(err, RoundError::Io(ref e) if e.kind() == io::ErrorKind::UnexpectedEof));
}

#[test]
fn test_extended_set_is_antisymmetric_for_every_pair() {
    let moves = extended();
    let mut pairs = 0;

    for (human, human_name) in moves.iter() {
        for (opponent, _) in moves.iter().filter(|(j, _)| *j != human) {
            let forward = Round::start(&moves, &mut Fixed(opponent.get()))
                .resolve(human_name)
                .unwrap();
            let backward = Round::start(&moves, &mut Fixed(human.get()))
                .resolve(moves.name_at(opponent))
                .unwrap();

            assert_ne!(forward.outcome, Outcome::Draw);
            assert_eq!(backward.outcome, forward.outcome.opposite());
            pairs += 1;
        }
    }

    assert_eq!(pairs, 20);
}

#[test]
fn test_round_agrees_with_help_table() {
    let moves = MoveSet::validate(["a", "b", "c", "d", "e", "f", "g", "h", "i"]).unwrap();
    let table = HelpTable::new(&moves);

    for (human, name) in moves.iter() {
        for (opponent, _) in moves.iter() {
            let result = Round::start(&moves, &mut Fixed(opponent.get()))
                .resolve(name)
                .unwrap();
            assert_eq!(result.outcome, table.cell(human.get(), opponent.get()));
            assert_eq!(
                result.outcome,
                determine(moves.len(), human.get(), opponent.get())
            );
        }
    }
}

#[test]
fn test_random_selectors_produce_verifiable_transcripts() {
    let moves = extended();
    let selectors: Vec<Box<dyn MoveSelector>> =
        vec![Box::new(ThreadRngSelector), Box::new(OsRngSelector)];

    for mut selector in selectors {
        for _ in 0..20 {
            let result = Round::start(&moves, &mut selector).resolve("lizard").unwrap();
            let transcript = Transcript::new(&moves, &result);
            let parsed = Transcript::from_json(&transcript.to_json().unwrap()).unwrap();
            assert!(parsed.verify());
        }
    }
}
