use wasm_bindgen::prelude::*;


pub type JsResult<T> = Result<T, JsValue>;

#[wasm_bindgen]
pub fn set_panic_hook() {
    // Log panics to the browser developer console. For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    console_error_panic_hook::set_once();
}

#[wasm_bindgen(getter_with_clone)]
pub struct RustError {
    pub message: String,
}

#[macro_export]
macro_rules! rust_error {
    ($($arg:tt)*) => {
        wasm_bindgen::JsValue::from(
            $crate::web_error_handling::RustError{ message: format!($($arg)*) }
        )
    };
}
