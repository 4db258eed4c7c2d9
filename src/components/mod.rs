pub mod imports;

mod brand_presentation;
mod colored;
mod default_styling;
mod layout;
mod markdown;

pub use brand_presentation::{BrandPresentation, BRAND_PRESENTATION_CLASS};
pub use colored::Colored;
pub use default_styling::DefaultStyling;
pub use layout::{Layout, LAYOUT_CLASS};
pub use markdown::Markdown;
pub use theme::toggle::ThemeToggle;
pub use toast::toaster::TOASTER_CLASS;

pub mod theme;
pub mod toast;
