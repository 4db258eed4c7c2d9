pub mod queue;
pub mod toast_ctx;
pub mod toaster;

pub mod prelude {
    pub use super::queue::{Toast, ToastId, ToastKind, ToastQueue, ToastRequest};
    pub use super::toast_ctx::{use_toast, ToastCtx, ToastState, WithToasts};
    pub use super::toaster::Toaster;
}
