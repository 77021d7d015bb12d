use ai_rag_web::App;
use ai_rag_web::utils::logging;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    tracing::debug!("mounting application");
    mount_to(root, App).forget();
}
