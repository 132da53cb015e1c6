use serde::{Deserialize, Serialize};

/// Contents of the modal shown once the sprite is caught. Serializes to the
/// dialog library's options object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Notice {
    pub width: u32,
    pub title: String,
    /// May contain markup.
    pub html: String,
    pub confirm_button_text: String,
    pub confirm_button_color: String,
    pub theme: String,
}

impl Default for Notice {
    fn default() -> Self {
        Notice {
            width: 400,
            title: "Congratulations!".to_string(),
            html: "You caught the little alien!<br/>(Please let him go. He's scared.)".to_string(),
            confirm_button_text: "Alright...".to_string(),
            confirm_button_color: "#10b981".to_string(),
            theme: "dark".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_dialog_option_names() {
        let value = serde_json::to_value(Notice::default()).unwrap();

        assert_eq!(value["width"], 400);
        assert_eq!(value["title"], "Congratulations!");
        assert_eq!(value["confirmButtonText"], "Alright...");
        assert_eq!(value["confirmButtonColor"], "#10b981");
        assert_eq!(value["theme"], "dark");
        assert!(value.get("confirm_button_text").is_none());
    }

    #[test]
    fn partial_notice_keeps_defaults() {
        let notice: Notice = serde_json::from_str(r#"{"title": "Nice!"}"#).unwrap();

        assert_eq!(notice.title, "Nice!");
        assert_eq!(notice.confirm_button_text, "Alright...");
    }
}
