use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{console, AbortController, AbortSignal, DragEvent, HtmlElement};

use parlor_chess::{
    classify, is_castling_attempt, CastleRequest, Coord, GameSessionState, LastMove, MoveIntent,
    MoveRequest, Piece, ProposedMove,
};

use crate::board_ui;
use crate::captured_ui;
use crate::moves_ui;
use crate::net;
use crate::web_error_handling::JsResult;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DragPhase {
    Idle,
    Dragging,
    AwaitingServer,
}

struct ControllerState {
    session: GameSessionState,
    phase: DragPhase,
    dragged: Option<web_sys::Element>,
    in_flight: Option<AbortController>,
}

struct PreparedDrop {
    intent: MoveIntent,
    dragged: web_sys::Element,
    origin_square: web_sys::Element,
}

// Orchestrates drag gestures: classifies the gesture into a move intent, submits it and
// reconciles the board with the server's verdict. Cheap to clone; clones share one state.
#[derive(Clone)]
pub struct DragDropController {
    state: Rc<RefCell<ControllerState>>,
}

impl DragDropController {
    pub fn new() -> Self {
        DragDropController {
            state: Rc::new(RefCell::new(ControllerState {
                session: GameSessionState::new(),
                phase: DragPhase::Idle,
                dragged: None,
                in_flight: None,
            })),
        }
    }

    pub fn on_drag_start(&self, event: DragEvent) -> JsResult<()> {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return Ok(());
        };
        if let Some(html) = target.dyn_ref::<HtmlElement>() {
            html.style().set_property("opacity", "0.5")?;
        }
        if let Some(data_transfer) = event.data_transfer() {
            data_transfer.set_data("text/plain", &target.id())?;
        }
        let mut state = self.state.borrow_mut();
        state.dragged = Some(target);
        if state.phase == DragPhase::Idle {
            state.phase = DragPhase::Dragging;
        }
        Ok(())
    }

    // Restores the dragged piece's look. No session mutation: a submission may still be
    // in flight.
    pub fn on_drag_end(&self, event: DragEvent) -> JsResult<()> {
        if let Some(target) = event.target().and_then(|t| t.dyn_into::<HtmlElement>().ok()) {
            target.style().remove_property("opacity")?;
        }
        let mut state = self.state.borrow_mut();
        if state.phase == DragPhase::Dragging {
            state.phase = DragPhase::Idle;
        }
        Ok(())
    }

    pub fn on_drop(&self, event: DragEvent) -> JsResult<()> {
        event.prevent_default();
        let prepared = {
            let mut state = self.state.borrow_mut();
            if !state.session.lock_mut().try_acquire() {
                console::log_1(&"Update in progress, move ignored".into());
                return Ok(());
            }
            // The lock is held now; every exit below must go through a release.
            match prepare_drop(&mut state, &event) {
                Ok(Some(prepared)) => prepared,
                Ok(None) => {
                    state.session.lock_mut().release();
                    return Ok(());
                }
                Err(err) => {
                    state.session.lock_mut().release();
                    return Err(err);
                }
            }
        };

        if is_castling_attempt(&prepared.intent.proposed) {
            // Dedicated endpoint, fired alongside the standard submission. This path never
            // touches the last-move memory.
            self.submit_castle(&prepared.intent.proposed);
        }

        let abort = AbortController::new()?;
        {
            let mut state = self.state.borrow_mut();
            state.phase = DragPhase::AwaitingServer;
            state.in_flight = Some(abort.clone());
        }
        let ctrl = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            ctrl.submit_move(prepared, abort.signal()).await;
        });
        Ok(())
    }

    async fn submit_move(self, prepared: PreparedDrop, signal: AbortSignal) {
        // Scoped release: acceptance, rejection and transport failure all unlock.
        let guard = scopeguard::guard(self.clone(), |ctrl| {
            let mut state = ctrl.state.borrow_mut();
            state.session.lock_mut().release();
            state.phase = DragPhase::Idle;
            state.in_flight = None;
        });
        let request = MoveRequest::from_intent(&prepared.intent);
        match net::post_record_move(&request, &signal).await {
            Ok(response) if response.success => {
                if let Err(err) = guard.apply_confirmed_move(&prepared.intent, response) {
                    console::error_1(&err);
                }
            }
            Ok(response) => {
                console::log_1(
                    &format!("Invalid move: {}", response.message.unwrap_or_default()).into(),
                );
                // Put the piece back where it came from. A plain re-parent; the board
                // itself was not touched.
                if let Err(err) = prepared.origin_square.append_child(&prepared.dragged) {
                    console::error_1(&err);
                }
            }
            Err(err) => {
                console::error_1(&err);
            }
        }
    }

    fn apply_confirmed_move(
        &self, intent: &MoveIntent, response: parlor_chess::MoveResponse,
    ) -> JsResult<()> {
        if let Some(board) = &response.new_board_state {
            board_ui::render_board(board, self)?;
        }
        if let Some(moves) = &response.game_moves {
            moves_ui::update_game_moves(moves)?;
        }
        captured_ui::render_captured(&response.taken_pieces.unwrap_or_default())?;
        self.state.borrow_mut().session.record_confirmed_move(LastMove::new(
            intent.proposed.from,
            intent.proposed.to,
            intent.proposed.piece,
        ));
        Ok(())
    }

    fn submit_castle(&self, proposed: &ProposedMove) {
        let request = CastleRequest {
            from: proposed.from.to_algebraic(),
            to: proposed.to.to_algebraic(),
            piece: proposed.piece,
        };
        let ctrl = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match net::post_castle(&request).await {
                Ok(response) if response.success => {
                    if let Err(err) = ctrl.render_board_and_moves(&response) {
                        console::error_1(&err);
                    }
                }
                Ok(response) => {
                    console::log_1(
                        &format!(
                            "Castling attempt failed: {}",
                            response.message.unwrap_or_default()
                        )
                        .into(),
                    );
                }
                Err(err) => console::error_1(&err),
            }
        });
    }

    // Page-load sequence: reset the server-side game, then paint the confirmed board.
    // The fetch waits for the reset to settle, so it cannot clobber the reset render with
    // a pre-reset board.
    pub fn bootstrap(&self) {
        let ctrl = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            ctrl.run_reset().await;
            ctrl.run_fetch_board().await;
        });
    }

    pub fn reset_game(&self) {
        // Abort any in-flight submission so a hung request cannot wedge the lock.
        let in_flight = self.state.borrow_mut().in_flight.take();
        if let Some(abort) = in_flight {
            abort.abort();
        }
        let ctrl = self.clone();
        wasm_bindgen_futures::spawn_local(async move { ctrl.run_reset().await });
    }

    async fn run_reset(&self) {
        match net::post_reset().await {
            Ok(response) if response.success => {
                {
                    let mut state = self.state.borrow_mut();
                    state.session.reset();
                    state.phase = DragPhase::Idle;
                }
                if let Err(err) = self
                    .render_board_and_moves(&response)
                    .and_then(|_| captured_ui::clear_captured())
                {
                    console::error_1(&err);
                }
            }
            Ok(_) => console::log_1(&"Game reset rejected by server".into()),
            Err(err) => console::error_1(&err),
        }
    }

    async fn run_fetch_board(&self) {
        match net::get_current_board().await {
            Ok(board) => {
                if let Err(err) = board_ui::render_board(&board, self) {
                    console::error_1(&err);
                }
            }
            Err(err) => console::error_1(&err),
        }
    }

    fn render_board_and_moves(&self, response: &parlor_chess::MoveResponse) -> JsResult<()> {
        if let Some(board) = &response.new_board_state {
            board_ui::render_board(board, self)?;
        }
        if let Some(moves) = &response.game_moves {
            moves_ui::update_game_moves(moves)?;
        }
        Ok(())
    }
}

// Reads the gesture off the DOM and classifies it. `None` means the drop is a no-op, e.g.
// a same-square drop or malformed square data; the caller releases the lock.
fn prepare_drop(state: &mut ControllerState, event: &DragEvent) -> JsResult<Option<PreparedDrop>> {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return Ok(None);
    };
    let Some(square) = target.closest(".square")? else {
        return Ok(None);
    };
    let Some(dragged) = state.dragged.clone() else {
        return Ok(None);
    };
    let Some(origin_square) = dragged.parent_element() else {
        return Ok(None);
    };

    let Some(from) = square_pos(&origin_square) else {
        return Ok(None);
    };
    let Some(to) = square_pos(&square) else {
        return Ok(None);
    };
    if from == to {
        console::log_1(&"Move to the same square, move ignored".into());
        return Ok(None);
    }
    let Some(piece) = Piece::from_wire(&dragged.id()) else {
        console::warn_1(&format!("Unknown piece code: {:?}", dragged.id()).into());
        return Ok(None);
    };

    let destination_occupied = square.query_selector(".chess-piece")?.is_some();
    let proposed = ProposedMove::new(from, to, piece);
    let intent = classify(proposed, state.session.last_move(), destination_occupied);
    Ok(Some(PreparedDrop { intent, dragged, origin_square }))
}

fn square_pos(square: &web_sys::Element) -> Option<Coord> {
    square.get_attribute("data-pos").as_deref().and_then(Coord::from_algebraic)
}
