pub use gloo_console as console;
pub use std::rc::Rc;
pub use stylist::yew::{styled_component, Global};
pub use stylist::{css, StyleSource};
pub use yew::prelude::*;
pub use yew_router::prelude::*;

pub use crate::components::theme::prelude::*;
pub use crate::components::toast::prelude::*;
