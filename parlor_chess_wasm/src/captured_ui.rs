use parlor_chess::{captured_tally, piece_to_pictogram, tally_entries, Force, TakenPieces};

use crate::web_document::web_document;
use crate::web_element_ext::WebElementExt;
use crate::web_error_handling::JsResult;


fn panel_id(side: Force) -> &'static str {
    match side {
        Force::White => "white-captured-pieces",
        Force::Black => "black-captured-pieces",
    }
}

// Repaints both captured-piece panels from the server's lists. Pure function of its input:
// the panels are fully cleared first and nothing is carried over between calls.
pub fn render_captured(taken: &TakenPieces) -> JsResult<()> {
    render_panel(Force::White, &taken.white)?;
    render_panel(Force::Black, &taken.black)
}

pub fn clear_captured() -> JsResult<()> { render_captured(&TakenPieces::default()) }

fn render_panel(side: Force, captured: &[parlor_chess::Piece]) -> JsResult<()> {
    let panel = web_document().get_existing_element_by_id(panel_id(side))?;
    panel.remove_all_children();
    for (piece, count) in tally_entries(&captured_tally(captured)) {
        panel
            .append_new_element("div")?
            .with_classes([format!("captured-{}", piece.to_wire()).as_str()])?
            .set_text_content(Some(&format!("{} x{}", piece_to_pictogram(piece), count)));
    }
    Ok(())
}
