use serde::{Deserialize, Serialize};

use crate::{Notice, SpriteSettings, TypewriterSettings};

/// Where each component finds its element on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub typed_text: String,
    pub text_cursor: String,
    pub year: String,
    pub cursor_follower: String,
    pub sprite: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Selectors {
            typed_text: ".typed-text".to_string(),
            text_cursor: ".cursor".to_string(),
            year: "#currentYear".to_string(),
            cursor_follower: ".custom-cursor".to_string(),
            sprite: "#bouncer".to_string(),
        }
    }
}

/// Site-wide settings. Every field falls back to its default when missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub typewriter: TypewriterSettings,
    pub sprite: SpriteSettings,
    pub notice: Notice,
    pub selectors: Selectors,
}

impl SiteConfig {
    /// Falls back to the default sprite settings when the given ones are
    /// invalid, returning why they were rejected.
    pub fn repair(&mut self) -> Option<String> {
        let reason = self.sprite.validate().err()?;
        self.sprite = SpriteSettings::default();

        Some(reason)
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    use super::*;
    use crate::{SpriteState, Viewport};

    #[test]
    fn empty_object_is_default() {
        let config: SiteConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn overrides_only_given_fields() {
        let config: SiteConfig = serde_json::from_str(
            r##"{
                "typewriter": { "text": "Hello", "typingDelay": 50 },
                "sprite": { "maxSpeed": 1.5 },
                "selectors": { "sprite": "#alien" }
            }"##,
        )
        .unwrap();

        assert_eq!(config.typewriter.text, "Hello");
        assert_eq!(config.typewriter.typing_delay, 50);
        assert_eq!(config.typewriter.start_delay, 1000);
        assert_eq!(config.sprite.max_speed, 1.5);
        assert_eq!(config.sprite.size, (30.0, 30.0));
        assert_eq!(config.selectors.sprite, "#alien");
        assert_eq!(config.selectors.typed_text, ".typed-text");
        assert_eq!(config.notice, Notice::default());
    }

    #[test]
    fn rejects_wrong_types() {
        let result = serde_json::from_str::<SiteConfig>(r#"{ "sprite": { "maxSpeed": "fast" } }"#);

        assert!(result.is_err());
    }

    #[test]
    fn negative_speed_falls_back_to_default_sprite() {
        let mut config: SiteConfig =
            serde_json::from_str(r#"{ "sprite": { "maxSpeed": -5.0 } }"#).unwrap();

        let reason = config.repair();

        assert!(reason.unwrap().contains("maxSpeed"));
        assert_eq!(config.sprite, SpriteSettings::default());

        let viewport = Viewport {
            width: 1000.0,
            height: 800.0,
            document_height: 2000.0,
        };

        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let sprite = SpriteState::spawn(&viewport, &config.sprite, &mut rng);

            assert!(sprite.velocity.0.abs() <= 2.0);
            assert!(sprite.velocity.1.abs() <= 2.0);
            assert!(sprite.position.0 >= 0.0);
            assert!(sprite.position.0 <= 0.8 * viewport.width);
        }
    }

    #[test]
    fn negative_spawn_ratio_falls_back_to_default_sprite() {
        let mut config: SiteConfig =
            serde_json::from_str(r#"{ "sprite": { "spawnWidthRatio": -1.0, "maxSpeed": 1.0 } }"#)
                .unwrap();

        assert!(config.repair().is_some());
        assert_eq!(config.sprite, SpriteSettings::default());
    }

    #[test]
    fn valid_settings_are_kept() {
        let mut config: SiteConfig =
            serde_json::from_str(r#"{ "sprite": { "maxSpeed": 1.0 } }"#).unwrap();

        assert_eq!(config.repair(), None);
        assert_eq!(config.sprite.max_speed, 1.0);
    }
}
