use shared::{starts_after_load, Selectors, Step, Typewriter, TypewriterSettings};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{console, Element};

use crate::{document, error::SiteError, find_element, window};

/// The span being typed into and the blinking text cursor next to it.
struct TypedText {
    text: Element,
    text_cursor: Element,
}

impl TypedText {
    fn push(&self, ch: char) {
        let mut content = self.text.text_content().unwrap_or_default();
        content.push(ch);

        self.text.set_text_content(Some(&content));
    }

    fn clear_cursor(&self) {
        self.text_cursor.set_text_content(Some(""));
    }
}

pub fn start(settings: &TypewriterSettings, selectors: &Selectors) -> Result<(), SiteError> {
    let typed_text = TypedText {
        text: find_element(&selectors.typed_text)?,
        text_cursor: find_element(&selectors.text_cursor)?,
    };
    let typewriter = Typewriter::new(settings.clone());

    let begin = move || schedule(typed_text, typewriter);

    if starts_after_load(&document().ready_state()) {
        let closure = Closure::once_into_js(begin);
        document()
            .add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref())?;
    } else {
        begin();
    }

    Ok(())
}

/// Waits for the next step's delay, performs it and schedules the one after.
fn schedule(typed_text: TypedText, mut typewriter: Typewriter) {
    let Some(step) = typewriter.next() else {
        return;
    };

    let closure = Closure::once_into_js(move || match step {
        Step::Type { ch, .. } => {
            typed_text.push(ch);
            schedule(typed_text, typewriter);
        }
        Step::ClearCursor { .. } => typed_text.clear_cursor(),
    });

    let delay = i32::try_from(step.delay()).unwrap_or(i32::MAX);

    if let Err(err) = window()
        .set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), delay)
    {
        console::warn_1(&err);
    }
}
