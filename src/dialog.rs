use js_sys::Promise;
use shared::{Notice, Notifier};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::console;

#[wasm_bindgen]
extern "C" {
    /// SweetAlert2, loaded by the page.
    #[wasm_bindgen(catch, js_namespace = Swal, js_name = fire)]
    fn swal_fire(options: &JsValue) -> Result<Promise, JsValue>;
}

/// Shows notices as modal dialogs.
pub struct Dialog;

impl Notifier for Dialog {
    fn notify(&mut self, notice: &Notice) {
        let options = match serde_wasm_bindgen::to_value(notice) {
            Ok(options) => options,
            Err(err) => {
                console::warn_1(&format!("could not encode notice: {err}").into());
                return;
            }
        };

        match swal_fire(&options) {
            Ok(promise) => spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => console::log_1(&"notice dismissed".into()),
                    Err(err) => console::warn_1(&err),
                }
            }),
            Err(err) => console::warn_1(&format!("dialog unavailable: {err:?}").into()),
        }
    }
}
