use shared::SiteConfig;
use web_sys::console;

use crate::window;

/// Global a page may define before loading the module to override defaults.
const CONFIG_GLOBAL: &str = "homepageConfig";

pub fn load() -> SiteConfig {
    let value = match js_sys::Reflect::get(&window(), &CONFIG_GLOBAL.into()) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return SiteConfig::default(),
    };

    match serde_wasm_bindgen::from_value::<SiteConfig>(value) {
        Ok(mut config) => {
            if let Some(reason) = config.repair() {
                console::warn_1(&format!("ignoring sprite settings: {reason}").into());
            }

            config
        }
        Err(err) => {
            console::warn_1(&format!("ignoring malformed `{CONFIG_GLOBAL}`: {err}").into());
            SiteConfig::default()
        }
    }
}
