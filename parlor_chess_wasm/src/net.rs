use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Headers, Request, RequestInit, Response};

use parlor_chess::{CastleRequest, Grid, MoveRequest, MoveResponse};

use crate::rust_error;
use crate::web_error_handling::JsResult;


// Thin fetch wrapper around the four server endpoints. All requests are JSON over POST
// except the bare board fetch. Callers decide what to render from each response.

pub async fn post_record_move(
    request: &MoveRequest, signal: &AbortSignal,
) -> JsResult<MoveResponse> {
    let body = serde_json::to_string(request)
        .map_err(|err| rust_error!("Cannot serialize move request: {}", err))?;
    let text = fetch("POST", "/record_move", Some(&body), Some(signal)).await?;
    parse_response(&text)
}

pub async fn post_castle(request: &CastleRequest) -> JsResult<MoveResponse> {
    let body = serde_json::to_string(request)
        .map_err(|err| rust_error!("Cannot serialize castle request: {}", err))?;
    let text = fetch("POST", "/attempt_castle", Some(&body), None).await?;
    parse_response(&text)
}

pub async fn post_reset() -> JsResult<MoveResponse> {
    let text = fetch("POST", "/reset_game", Some("{}"), None).await?;
    parse_response(&text)
}

// The server returns the bare board matrix here, not the usual response envelope.
pub async fn get_current_board() -> JsResult<Grid> {
    let text = fetch("GET", "/get_current_board", None, None).await?;
    serde_json::from_str(&text).map_err(|err| rust_error!("Bad board state: {}", err))
}

fn parse_response(text: &str) -> JsResult<MoveResponse> {
    serde_json::from_str(text).map_err(|err| rust_error!("Bad server response: {}", err))
}

async fn fetch(
    method: &str, url: &str, body: Option<&str>, signal: Option<&AbortSignal>,
) -> JsResult<String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        let headers = Headers::new()?;
        headers.set("Content-Type", "application/json")?;
        opts.set_headers(headers.as_ref());
        opts.set_body(&body.into());
    }
    opts.set_signal(signal);

    let request = Request::new_with_str_and_init(url, &opts)?;
    let window = web_sys::window().ok_or_else(|| rust_error!("Cannot find window"))?;
    let response = JsFuture::from(window.fetch_with_request(&request)).await?;
    let response: Response = response.dyn_into()?;
    if !response.ok() {
        return Err(rust_error!("{} {} failed: HTTP {}", method, url, response.status()));
    }
    let text = JsFuture::from(response.text()?).await?;
    text.as_string().ok_or_else(|| rust_error!("Response body is not a string"))
}
