use std::{cell::RefCell, rc::Rc};

use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use shared::{Bouncer, Bounds, CatchEvent, SiteConfig, Surface, Viewport};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{console, AddEventListenerOptions, Event, HtmlElement};

use crate::{
    dialog::Dialog, document, error::SiteError, find_html_element, frame::AnimationFrames, px,
    window,
};

/// The sprite's element, absolutely positioned in document coordinates.
struct SpriteElement(HtmlElement);

/// Client width and full scroll height of the document.
fn document_size() -> (f64, f64) {
    document()
        .document_element()
        .map(|root| (root.client_width() as f64, root.scroll_height() as f64))
        .unwrap_or_default()
}

impl Surface for SpriteElement {
    fn viewport(&self) -> Viewport {
        let (width, document_height) = document_size();
        let height = window()
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or_default();

        Viewport {
            width,
            height,
            document_height,
        }
    }

    fn bounds(&self) -> Bounds {
        let (width, height) = document_size();

        Bounds { width, height }
    }

    fn place(&mut self, position: (f64, f64)) {
        let style = self.0.style();

        style.set_property("left", &px(position.0)).ok();
        style.set_property("top", &px(position.1)).ok();
    }

    fn remove(&mut self) {
        self.0.remove();
    }
}

struct PageEvent<'a>(&'a Event);

impl CatchEvent for PageEvent<'_> {
    fn cancelable(&self) -> bool {
        self.0.cancelable()
    }

    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

fn seed() -> u64 {
    let now = window()
        .performance()
        .map(|performance| performance.now())
        .unwrap_or_default();

    now.to_bits() ^ (js_sys::Math::random() * (1u64 << 53) as f64) as u64
}

pub fn start(config: &SiteConfig) -> Result<(), SiteError> {
    let element = find_html_element(&config.selectors.sprite)?;
    let frames = AnimationFrames::default();

    let bouncer = Rc::new(RefCell::new(Bouncer::spawn(
        SpriteElement(element.clone()),
        frames.clone(),
        Dialog,
        &config.sprite,
        config.notice.clone(),
        &mut ChaCha8Rng::seed_from_u64(seed()),
    )));

    {
        let bouncer = bouncer.clone();
        frames.set_callback(Closure::new(move || bouncer.borrow_mut().tick()));
    }

    {
        let bouncer = bouncer.clone();
        let frames = frames.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
            let mut bouncer = bouncer.borrow_mut();

            if bouncer.is_alive() {
                bouncer.catch(&PageEvent(&event));
                console::log_1(&format!("sprite caught by {}", event.type_()).into());
            }

            frames.release();
        });

        element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;

        // Passive listeners cannot suppress the scroll a touch would start.
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        element.add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            closure.as_ref().unchecked_ref(),
            &options,
        )?;

        closure.forget();
    }

    bouncer.borrow_mut().tick();

    Ok(())
}
