use wasm_bindgen::JsCast;
use web_sys::console;

use parlor_chess::Grid;

use crate::drag::DragDropController;
use crate::web_document::web_document;
use crate::web_element_ext::WebElementExt;
use crate::web_error_handling::JsResult;


// Paints a server-confirmed board into the square grid. Every square is cleared first, so
// rendering the same board twice produces the same layout. A square that cannot be found
// is logged and skipped; the rest of the render proceeds.
pub fn render_board(grid: &Grid, ctrl: &DragDropController) -> JsResult<()> {
    let document = web_document();
    for node in document.query_selector_all(".square")? {
        if let Some(square) = node.dyn_ref::<web_sys::Element>() {
            square.remove_all_children();
        }
    }
    for (pos, piece) in grid.iter() {
        let selector = format!(".square[data-pos=\"{}\"]", pos.to_algebraic());
        let Some(square) = document.query_selector(&selector)? else {
            console::warn_1(&format!("Cannot find square {}", pos).into());
            continue;
        };
        let img = document
            .create_element("img")?
            .with_id(&piece.to_wire())
            .with_classes(["chess-piece"])?
            .with_attribute("src", &piece.svg_path())?
            .with_attribute("draggable", "true")?;
        square.append_element(img)?;
    }
    // Replacing square content invalidated all previous listener bindings.
    bind_drag_handlers(ctrl)
}

pub fn bind_drag_handlers(ctrl: &DragDropController) -> JsResult<()> {
    let document = web_document();
    for node in document.query_selector_all(".chess-piece")? {
        let Ok(element) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        let ctrl_copy = ctrl.clone();
        element.add_event_listener_and_forget("dragstart", move |event: web_sys::DragEvent| {
            ctrl_copy.on_drag_start(event)
        })?;
        let ctrl_copy = ctrl.clone();
        element.add_event_listener_and_forget("dragend", move |event: web_sys::DragEvent| {
            ctrl_copy.on_drag_end(event)
        })?;
    }
    for node in document.query_selector_all(".square")? {
        let Ok(element) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        element.add_event_listener_and_forget("dragover", |event: web_sys::DragEvent| {
            event.prevent_default();
            Ok(())
        })?;
        let ctrl_copy = ctrl.clone();
        element.add_event_listener_and_forget("drop", move |event: web_sys::DragEvent| {
            ctrl_copy.on_drop(event)
        })?;
    }
    Ok(())
}
