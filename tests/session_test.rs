use pretty_assertions::assert_eq;

use parlor_chess::*;


fn confirmed_e4() -> LastMove {
    LastMove::new(
        Coord::from_algebraic("e2").unwrap(),
        Coord::from_algebraic("e4").unwrap(),
        Piece::from_wire("wp").unwrap(),
    )
}

#[test]
fn lock_admits_one_submission() {
    let mut session = GameSessionState::new();
    assert!(session.lock_mut().try_acquire());
    assert!(!session.lock_mut().try_acquire());
    session.lock_mut().release();
    assert!(session.lock_mut().try_acquire());
}

#[test]
fn drop_while_locked_leaves_session_unchanged() {
    let mut session = GameSessionState::new();
    session.record_confirmed_move(confirmed_e4());
    assert!(session.lock_mut().try_acquire());

    // A drop gesture arriving now is ignored before classification: the controller
    // bails out on `try_acquire` and must not touch the session.
    let acquired = session.lock_mut().try_acquire();
    assert!(!acquired);
    assert_eq!(session.last_move(), Some(&confirmed_e4()));
    assert!(session.lock().is_held());
}

#[test]
fn release_is_unconditional() {
    let mut session = GameSessionState::new();
    session.lock_mut().release(); // releasing an unheld lock is a no-op
    assert!(!session.lock().is_held());
}

#[test]
fn confirmed_move_overwrites_memory() {
    let mut session = GameSessionState::new();
    assert_eq!(session.last_move(), None);
    session.record_confirmed_move(confirmed_e4());
    let reply = LastMove::new(
        Coord::from_algebraic("e7").unwrap(),
        Coord::from_algebraic("e5").unwrap(),
        Piece::from_wire("bp").unwrap(),
    );
    session.record_confirmed_move(reply);
    assert_eq!(session.last_move(), Some(&reply));
}

#[test]
fn reset_clears_memory_and_lock() {
    let mut session = GameSessionState::new();
    session.record_confirmed_move(confirmed_e4());
    assert!(session.lock_mut().try_acquire());
    session.reset();
    assert_eq!(session.last_move(), None);
    assert!(!session.lock().is_held());
    // A captured-piece tally rebuilt from the server's post-reset lists is empty too.
    let taken = TakenPieces::default();
    assert_eq!(captured_tally(&taken.white), CapturedTally::default());
    assert_eq!(captured_tally(&taken.black), CapturedTally::default());
}
