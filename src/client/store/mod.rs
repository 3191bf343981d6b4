pub mod session;
pub mod toast;

pub use session::{use_api, AuthState};
pub use toast::{Toast, ToastKind, Toaster};
