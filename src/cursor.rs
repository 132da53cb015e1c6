use wasm_bindgen::{prelude::*, JsCast};
use web_sys::MouseEvent;

use crate::{document, error::SiteError, find_html_element, px};

/// Moves the custom pointer element to wherever the mouse is. Unrelated to the
/// typewriter's text cursor.
pub fn start(selector: &str) -> Result<(), SiteError> {
    let follower = find_html_element(selector)?;

    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let style = follower.style();

        style.set_property("left", &px(event.client_x() as f64)).ok();
        style.set_property("top", &px(event.client_y() as f64)).ok();
    });
    document().add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}
