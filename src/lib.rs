mod bouncer;
mod config;
mod cursor;
mod dialog;
mod error;
mod footer;
mod frame;
mod typing;

use error::SiteError;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{console, Element, HtmlElement, ScrollRestoration};

fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

fn document() -> web_sys::Document {
    window()
        .document()
        .expect("should have a document on window")
}

fn find_element(selector: &str) -> Result<Element, SiteError> {
    document()
        .query_selector(selector)?
        .ok_or_else(|| SiteError::missing_element(selector))
}

fn find_html_element(selector: &str) -> Result<HtmlElement, SiteError> {
    find_element(selector)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SiteError(format!("`{selector}` is not an HTML element")))
}

fn px(value: f64) -> String {
    format!("{value}px")
}

/// Starts at the top of the page on every load, so the sprite enters from
/// below the fold.
fn reset_scroll() -> Result<(), SiteError> {
    let history = window().history()?;

    if js_sys::Reflect::has(&history, &"scrollRestoration".into())? {
        history.set_scroll_restoration(ScrollRestoration::Manual)?;
    }

    window().scroll_to_with_x_and_y(0.0, 0.0);

    Ok(())
}

fn launch(component: &str, result: Result<(), SiteError>) {
    if let Err(err) = result {
        console::log_1(&format!("{component} skipped: {err}").into());
    }
}

#[wasm_bindgen(start)]
fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = config::load();

    launch("scroll reset", reset_scroll());

    launch("typewriter", typing::start(&config.typewriter, &config.selectors));
    launch("footer year", footer::start(&config.selectors.year));
    launch("cursor follower", cursor::start(&config.selectors.cursor_follower));
    launch("bouncer", bouncer::start(&config));

    Ok(())
}
