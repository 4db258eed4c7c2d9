pub mod storage;
pub mod theme_ctx;
pub mod themes;
pub mod toggle;

pub mod prelude {
    pub use super::storage::{MemoryThemeStorage, Persistence, ThemeStorage};
    pub use super::theme_ctx::{use_theme, ThemeCtx, ThemeCtxSub, ThemeState, WithTheme};
    pub use super::themes::{Theme, Themes};
}
