use crate::{error::SiteError, find_element};

pub fn start(selector: &str) -> Result<(), SiteError> {
    let year = js_sys::Date::new_0().get_full_year();

    find_element(selector)?.set_text_content(Some(&year.to_string()));

    Ok(())
}
