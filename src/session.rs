use crate::intent::LastMove;


// At most one move submission may be outstanding. A drop gesture arriving while the lock
// is held is dropped outright; there is no queue.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct UpdateLock {
    held: bool,
}

impl UpdateLock {
    pub fn is_held(&self) -> bool { self.held }

    #[must_use]
    pub fn try_acquire(&mut self) -> bool {
        if self.held {
            return false;
        }
        self.held = true;
        true
    }

    // Unconditional. Called on every settlement path: acceptance, rejection or transport
    // failure.
    pub fn release(&mut self) { self.held = false; }
}


// Process-wide session state. Constructed at page load, mutated only on move completion,
// cleared by `reset`. The UI crate shares it behind `Rc<RefCell<_>>`; the browser client
// is single-threaded, so that is enough.
#[derive(Clone, Debug, Default)]
pub struct GameSessionState {
    last_move: Option<LastMove>,
    lock: UpdateLock,
}

impl GameSessionState {
    pub fn new() -> Self { Self::default() }

    pub fn last_move(&self) -> Option<&LastMove> { self.last_move.as_ref() }

    // Overwrites the memory atomically on each confirmed standard move. Castling
    // confirmations must not come through here.
    pub fn record_confirmed_move(&mut self, last_move: LastMove) {
        log::debug!("Confirmed move: {:?}", last_move);
        self.last_move = Some(last_move);
    }

    pub fn lock(&self) -> &UpdateLock { &self.lock }
    pub fn lock_mut(&mut self) -> &mut UpdateLock { &mut self.lock }

    pub fn reset(&mut self) {
        log::debug!("Session reset");
        self.last_move = None;
        self.lock.release();
    }
}
