#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum Themes {
    Dark,
    Light,
    // follows `prefers-color-scheme`
    System,
}

impl Default for Themes {
    fn default() -> Self {
        Self::Dark
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown theme {0:?}")]
pub struct ThemeParseError(pub String);

impl Themes {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::System => "system",
        }
    }

    // never returns System
    pub fn resolve(self, prefers_dark: bool) -> Self {
        match self {
            Self::System if prefers_dark => Self::Dark,
            Self::System => Self::Light,
            concrete => concrete,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::System,
            Self::System => Self::Dark,
        }
    }
}

impl TryFrom<&str> for Themes {
    type Error = ThemeParseError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let theme = match value {
            "dark" => Self::Dark,
            "light" => Self::Light,
            "system" => Self::System,
            _ => return Err(ThemeParseError(value.to_owned())),
        };
        debug_assert_eq!(
            theme.as_str(),
            value,
            "resulting theme's name must match with the provided value"
        );
        Ok(theme)
    }
}

pub fn prefers_dark() -> bool {
    gloo_utils::window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(true)
}

impl<'a> RawTheme<'a> {
    pub fn dark() -> Self {
        let light = "#f8fafc";

        Self {
            name: "Dark",
            id: Themes::Dark,
            bg_color: "#020817",
            contrast_bg_color: "#1e293b",
            text_color: light,
            muted_text_color: "#94a3b8",
            link_color: light,
            box_border_color: "#1e293b",
        }
    }

    pub fn light() -> Self {
        let dark = "#020817";
        Self {
            name: "Light",
            id: Themes::Light,
            bg_color: "#ffffff",
            contrast_bg_color: "#f1f5f9",
            text_color: dark,
            muted_text_color: "#64748b",
            link_color: dark,
            box_border_color: "#e2e8f0",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: AttrValue,
    pub id: Themes,
    pub bg_color: AttrValue,
    pub contrast_bg_color: AttrValue,
    pub text_color: AttrValue,
    pub muted_text_color: AttrValue,
    pub link_color: AttrValue,
    pub box_border_color: AttrValue,
}

impl Theme {
    pub fn color_scheme(&self) -> &'static str {
        self.id.as_str()
    }
}

struct RawTheme<'a> {
    pub name: &'a str,
    pub id: Themes,
    pub bg_color: &'a str,
    pub contrast_bg_color: &'a str,
    pub text_color: &'a str,
    pub muted_text_color: &'a str,
    pub link_color: &'a str,
    pub box_border_color: &'a str,
}

impl<'a> From<RawTheme<'a>> for Theme {
    fn from(theme: RawTheme) -> Self {
        Theme {
            name: theme.name.to_owned().into(),
            id: theme.id,
            bg_color: theme.bg_color.to_owned().into(),
            contrast_bg_color: theme.contrast_bg_color.to_owned().into(),
            text_color: theme.text_color.to_owned().into(),
            muted_text_color: theme.muted_text_color.to_owned().into(),
            link_color: theme.link_color.to_owned().into(),
            box_border_color: theme.box_border_color.to_owned().into(),
        }
    }
}

impl Theme {
    // `theme` must already be resolved
    pub fn palette(theme: Themes) -> Self {
        match theme {
            Themes::Dark | Themes::System => RawTheme::dark(),
            Themes::Light => RawTheme::light(),
        }
        .into()
    }
}

use yew::AttrValue;
