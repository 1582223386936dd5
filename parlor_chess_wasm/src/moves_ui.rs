use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::console;

use crate::web_document::web_document;
use crate::web_error_handling::JsResult;


const PGN_MOVES_ID: &str = "pgnMoves";

pub fn update_game_moves(pgn: &str) -> JsResult<()> {
    web_document().get_existing_element_by_id(PGN_MOVES_ID)?.set_text_content(Some(pgn));
    Ok(())
}

// Copies the move list to the clipboard and flashes "Copied!" on the button for a moment.
pub fn copy_pgn_to_clipboard() -> JsResult<()> {
    let document = web_document();
    let pgn = document
        .get_existing_element_by_id(PGN_MOVES_ID)?
        .text_content()
        .unwrap_or_default();
    let button = document.get_existing_element_by_id("copyPgn")?;
    let original_text = button.text_content();
    wasm_bindgen_futures::spawn_local(async move {
        let window = web_sys::window().unwrap();
        let clipboard = window.navigator().clipboard();
        if let Err(err) = JsFuture::from(clipboard.write_text(&pgn)).await {
            console::error_1(&err);
            return;
        }
        button.set_text_content(Some("Copied!"));
        let restore = Closure::once_into_js(move || {
            button.set_text_content(original_text.as_deref());
        });
        if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            restore.unchecked_ref(),
            2000,
        ) {
            console::error_1(&err);
        }
    });
    Ok(())
}
