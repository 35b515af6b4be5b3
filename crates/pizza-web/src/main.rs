//! Pizza admin web entry point

use leptos::prelude::*;
use pizza_web::App;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
