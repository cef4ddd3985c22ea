//! Tests for the session turn machine through the public API.

use noughts::{
    Board, Difficulty, GameConfig, Mark, Move, Outcome, Phase, Session, SessionError, SessionRng,
};

/// Plays a full game, with the human taking the lowest empty cell.
fn play_to_end(session: &mut Session, rng: &mut SessionRng) -> Outcome {
    loop {
        match session.phase() {
            Phase::HumanToMove => {
                let index = noughts::available_moves(session.board())[0];
                session.play_human(index).expect("legal human move");
            }
            Phase::ComputerToMove => {
                session.play_computer(rng).expect("computer's turn");
            }
            Phase::Terminal(outcome) => return outcome,
        }
    }
}

#[test]
fn test_session_lifecycle() {
    let config = GameConfig::new(Mark::X, Difficulty::Hard).with_seed(41);
    let mut rng = config.rng();
    let mut session = Session::new(config);
    assert_eq!(session.phase(), Phase::HumanToMove);

    let outcome = play_to_end(&mut session, &mut rng);
    assert_ne!(outcome, Outcome::Won(Mark::X), "hard must not lose");
    assert_eq!(session.tally().games(), 1);
    assert_eq!(session.tally().human_wins, 0);

    // Terminal is absorbing.
    assert_eq!(session.play_computer(&mut rng), Err(SessionError::GameOver));
    let empty = noughts::available_moves(session.board()).first().copied();
    if let Some(index) = empty {
        assert_eq!(session.play_human(index), Err(SessionError::GameOver));
    }
}

#[test]
fn test_computer_opens_when_human_plays_o() {
    let config = GameConfig::new(Mark::O, Difficulty::Medium).with_seed(42);
    let mut rng = config.rng();
    let mut session = Session::new(config);

    assert_eq!(session.phase(), Phase::ComputerToMove);
    assert_eq!(
        session.play_human(0),
        Err(SessionError::NotYourTurn(Phase::ComputerToMove))
    );

    let index = session.play_computer(&mut rng).unwrap();
    assert_eq!(session.history(), &[Move::new(Mark::X, index)]);
    assert_eq!(session.phase(), Phase::HumanToMove);
}

#[test]
fn test_reset_restores_starting_side_from_any_state() {
    for human in [Mark::X, Mark::O] {
        let config = GameConfig::new(human, Difficulty::Easy).with_seed(43);
        let mut rng = config.rng();
        let mut session = Session::new(config);
        play_to_end(&mut session, &mut rng);

        let phase = session.reset();
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.to_move(), Mark::X);
        let expected = if human == Mark::X {
            Phase::HumanToMove
        } else {
            Phase::ComputerToMove
        };
        assert_eq!(phase, expected);
        assert_eq!(session.tally().games(), 1);
    }
}

#[test]
fn test_tally_accumulates_across_games() {
    let config = GameConfig::new(Mark::O, Difficulty::Hard).with_seed(44);
    let mut rng = config.rng();
    let mut session = Session::new(config);

    for _ in 0..3 {
        play_to_end(&mut session, &mut rng);
        session.reset();
    }
    let tally = session.tally();
    assert_eq!(tally.games(), 3);
    assert_eq!(tally.human_wins, 0);
}

#[test]
fn test_rejected_moves() {
    let mut session = Session::default();
    assert_eq!(session.play_human(9), Err(SessionError::OutOfRange(9)));

    session.play_human(4).unwrap();
    let mut rng = SessionRng::new(45);
    session.play_computer(&mut rng).unwrap();
    assert_eq!(session.play_human(4), Err(SessionError::SquareOccupied(4)));
}

#[test]
fn test_snapshot_json_shape() {
    let mut session = Session::new(GameConfig::new(Mark::X, Difficulty::Medium));
    session.play_human(0).unwrap();

    let json = serde_json::to_value(&session).unwrap();
    assert_eq!(json["config"]["difficulty"], "medium");
    assert_eq!(json["config"]["human_mark"], "X");
    assert_eq!(json["to_move"], "O");
    assert_eq!(json["history"][0]["index"], 0);

    let phase = serde_json::to_value(session.phase()).unwrap();
    assert_eq!(phase, "ComputerToMove");

    let restored: Session = serde_json::from_value(json).unwrap();
    assert_eq!(restored, session);
}

#[test]
fn test_snapshot_violating_invariants_is_rejected() {
    // Empty board but O to move: the computer would open as O.
    let mut json = serde_json::to_value(Session::default()).unwrap();
    json["to_move"] = serde_json::json!("O");
    let err = serde_json::from_value::<Session>(json).unwrap_err();
    assert!(err.to_string().contains("Marks alternate turns"), "{}", err);

    // Two X marks with a single history entry.
    let mut session = Session::default();
    session.play_human(0).unwrap();
    let mut json = serde_json::to_value(&session).unwrap();
    json["board"]["squares"][1] = serde_json::json!({ "Occupied": "X" });
    assert!(serde_json::from_value::<Session>(json).is_err());
}
