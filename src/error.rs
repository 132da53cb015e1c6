use wasm_bindgen::JsValue;

/// Errors concerning wiring a component to the page.
#[derive(Debug)]
pub struct SiteError(pub String);

impl SiteError {
    pub fn missing_element(selector: &str) -> SiteError {
        SiteError(format!("no element matches `{selector}`"))
    }
}

impl std::fmt::Display for SiteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError(format!("JsError: {value:?}"))
    }
}

impl From<SiteError> for JsValue {
    fn from(site_error: SiteError) -> Self {
        JsValue::from_str(&site_error.0)
    }
}
