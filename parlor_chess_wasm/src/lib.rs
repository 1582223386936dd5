#![cfg_attr(feature = "strict", deny(warnings))]

pub mod board_ui;
pub mod captured_ui;
pub mod drag;
pub mod moves_ui;
pub mod net;
pub mod web_document;
pub mod web_element_ext;
pub mod web_error_handling;
pub mod web_iterators;

use wasm_bindgen::prelude::*;

use crate::drag::DragDropController;
use crate::web_document::web_document;
use crate::web_element_ext::WebElementExt;
use crate::web_error_handling::{set_panic_hook, JsResult};


// Page bootstrap. Resets the server-side game, paints the initial board and wires up the
// two buttons. Drag listeners are (re)bound by every board render.
#[wasm_bindgen(start)]
pub fn start() -> JsResult<()> {
    set_panic_hook();
    console_log::init_with_level(log::Level::Debug)
        .map_err(|err| rust_error!("Cannot install logger: {}", err))?;
    let ctrl = DragDropController::new();
    let document = web_document();

    let reset_ctrl = ctrl.clone();
    document.get_existing_element_by_id("resetGame")?.add_event_listener_and_forget(
        "click",
        move |_: web_sys::Event| {
            reset_ctrl.reset_game();
            Ok(())
        },
    )?;
    document.get_existing_element_by_id("copyPgn")?.add_event_listener_and_forget(
        "click",
        |_: web_sys::Event| moves_ui::copy_pgn_to_clipboard(),
    )?;

    ctrl.bootstrap();
    Ok(())
}
