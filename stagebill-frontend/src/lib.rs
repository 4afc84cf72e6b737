pub mod app;
pub mod logger;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    use app::App;

    console_error_panic_hook::set_once();
    logger::simple_web_logger_init();
    log::trace!("mounting");
    leptos::mount::mount_to_body(App);
}
