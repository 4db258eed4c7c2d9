// Configuration definitions and tests
//

use crate::components::theme::themes::Themes;
use yew::AttrValue;

pub static DEFAULT_STORAGE_KEY: &str = "vite-ui-theme";

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppConf {
    pub theme: ThemeConf,
    pub toasts: ToastConf,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeConf {
    // applied until a preference is found under `storage_key`
    pub default_theme: Themes,
    pub storage_key: AttrValue,
}

impl Default for ThemeConf {
    fn default() -> Self {
        Self {
            default_theme: Themes::Dark,
            storage_key: AttrValue::Static(DEFAULT_STORAGE_KEY),
        }
    }
}

impl ThemeConf {
    pub fn new(default_theme: Themes, storage_key: impl Into<AttrValue>) -> Self {
        Self {
            default_theme,
            storage_key: storage_key.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastConf {
    pub limit: usize,
    pub duration_ms: u32,
    pub remove_delay_ms: u32,
}

impl Default for ToastConf {
    fn default() -> Self {
        Self {
            limit: 3,
            duration_ms: 5_000,
            remove_delay_ms: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_conf() {
        let conf = AppConf::default().theme;

        assert_eq!(conf.default_theme, Themes::Dark);
        assert_eq!(conf.storage_key.as_str(), "vite-ui-theme");
    }

    #[test]
    fn test_theme_conf_keeps_values_verbatim() {
        let conf = ThemeConf::new(Themes::Light, "my-key");

        assert_eq!(conf.default_theme, Themes::Light);
        assert_eq!(conf.storage_key.as_str(), "my-key");
        assert_ne!(conf, ThemeConf::default());
    }

    #[test]
    fn test_default_toast_conf() {
        let conf = ToastConf::default();

        assert_eq!(conf.limit, 3);
        assert!(conf.remove_delay_ms < conf.duration_ms);
    }
}
