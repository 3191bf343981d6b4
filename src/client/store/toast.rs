//! One transient notification at a time, replaced by the next and dismissed after a delay.

use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

pub const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn alert_class(self) -> &'static str {
        match self {
            Self::Success => "alert alert-success",
            Self::Error => "alert alert-error",
            Self::Info => "alert alert-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct Toaster {
    pub current: Signal<Option<Toast>>,
    next_id: Signal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
            next_id: Signal::new(0),
        }
    }

    pub fn success(self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    pub fn info(self, message: impl Into<String>) {
        self.show(ToastKind::Info, message.into());
    }

    /// Hides the toast with `id`; a newer toast is left alone.
    pub fn dismiss(mut self, id: u64) {
        if self.current.peek().as_ref().is_some_and(|t| t.id == id) {
            self.current.set(None);
        }
    }

    fn show(mut self, kind: ToastKind, message: String) {
        let id = *self.next_id.peek() + 1;
        self.next_id.set(id);
        self.current.set(Some(Toast { id, kind, message }));

        // Owned by the root scope so the caller unmounting does not cancel the dismissal.
        spawn_forever(async move {
            sleep(TOAST_DURATION).await;
            self.dismiss(id);
        });
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    /// Whether a toast was on screen at each render of the host
    #[derive(Clone, Default)]
    struct Seen(Rc<RefCell<Vec<bool>>>);

    #[component]
    fn Host() -> Element {
        let toaster = use_context_provider(Toaster::new);
        let seen = use_context::<Seen>();
        let mut mounted = use_signal(|| true);
        seen.0.borrow_mut().push(toaster.current.read().is_some());

        rsx!(
            if mounted() {
                SignIn { ondone: move |_| mounted.set(false) }
            }
        )
    }

    /// Shows a toast and immediately navigates away, like the login screen
    #[component]
    fn SignIn(ondone: EventHandler<()>) -> Element {
        let toaster = use_context::<Toaster>();
        use_effect(move || {
            toaster.success("Login successful!");
            ondone.call(());
        });
        rsx!("signing in")
    }

    #[tokio::test(start_paused = true)]
    async fn dismisses_after_the_caller_unmounts() {
        let seen = Seen::default();
        let mut dom = VirtualDom::new(Host).with_root_context(seen.clone());
        dom.rebuild_in_place();

        let deadline = tokio::time::Instant::now() + TOAST_DURATION * 5;
        loop {
            tokio::select! {
                _ = dom.wait_for_work() => {
                    dom.render_immediate_to_vec();
                }
                _ = tokio::time::sleep_until(deadline) => break,
            }
        }

        let seen = seen.0.borrow();
        assert!(seen.contains(&true), "toast was never shown");
        assert_eq!(seen.last(), Some(&false));
    }
}
