//! 顶部提示框
//!
//! 同一时刻只保留一个自动消失定时器：新提示会清除旧提示的定时器，
//! 因此旧定时器不会提前关闭新提示。

use leptos::prelude::*;
use parkcharge_shared::TOAST_MS;

use crate::web::timer::{BrowserTimers, Timeout, TimerHost};

/// 提示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub text: String,
    pub is_error: bool,
}

struct ToastTimer<H: TimerHost> {
    host: H,
    pending: Option<Timeout<H>>,
}

/// 提示框状态
pub struct Toast<H: TimerHost + 'static = BrowserTimers> {
    message: RwSignal<Option<ToastMessage>>,
    timer: StoredValue<ToastTimer<H>, LocalStorage>,
}

impl<H: TimerHost + 'static> Clone for Toast<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: TimerHost + 'static> Copy for Toast<H> {}

impl<H> Toast<H>
where
    H: TimerHost + Clone + 'static,
    H::Handle: 'static,
{
    pub fn with_host(host: H) -> Self {
        Self {
            message: RwSignal::new(None),
            timer: StoredValue::new_local(ToastTimer {
                host,
                pending: None,
            }),
        }
    }

    pub fn message(&self) -> Option<ToastMessage> {
        self.message.get()
    }

    /// 显示提示，`TOAST_MS` 后自动消失
    pub fn show(&self, text: impl Into<String>, is_error: bool) {
        let message = self.message;
        message.set(Some(ToastMessage {
            text: text.into(),
            is_error,
        }));

        self.timer.update_value(|timer| {
            // 旧定时器随 drop 清除
            timer.pending.take();
            match Timeout::with_host(timer.host.clone(), TOAST_MS, move || message.set(None)) {
                Ok(timeout) => timer.pending = Some(timeout),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Toast] {}", e).into());
                }
            }
        });
    }
}

impl Toast {
    pub fn new() -> Self {
        Self::with_host(BrowserTimers)
    }
}

impl Default for Toast {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastView(toast: Toast) -> impl IntoView {
    view! {
        <Show when=move || toast.message().is_some()>
            <div class="toast toast-top toast-center z-50">
                <div class=move || match toast.message() {
                    Some(ToastMessage { is_error: true, .. }) => "alert alert-error shadow-lg",
                    _ => "alert alert-success shadow-lg",
                }>
                    <span>{move || toast.message().map(|m| m.text).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::timer::tests::ManualTimers;

    fn text(toast: &Toast<ManualTimers>) -> Option<String> {
        toast.message.get_untracked().map(|m| m.text)
    }

    #[test]
    fn test_toast_clears_after_delay() {
        let owner = Owner::new();
        owner.with(|| {
            let timers = ManualTimers::new();
            let toast = Toast::with_host(timers.clone());

            toast.show("Redeemed Free Coffee", false);
            assert_eq!(timers.delays(), vec![3000]);
            assert_eq!(text(&toast).as_deref(), Some("Redeemed Free Coffee"));

            timers.fire_all();
            assert_eq!(text(&toast), None);
        });
    }

    #[test]
    fn test_new_toast_is_not_cleared_by_previous_timer() {
        let owner = Owner::new();
        owner.with(|| {
            let timers = ManualTimers::new();
            let toast = Toast::with_host(timers.clone());

            toast.show("first", false);
            toast.show("second", true);
            assert_eq!(timers.cleared(), 1);

            // 第一个定时器已被清除，触发无效
            timers.fire(0);
            assert_eq!(text(&toast).as_deref(), Some("second"));
            assert!(toast.message.get_untracked().is_some_and(|m| m.is_error));

            timers.fire(1);
            assert_eq!(text(&toast), None);
        });
    }

    #[test]
    fn test_unmount_cancels_pending_toast_timer() {
        let owner = Owner::new();
        let timers = ManualTimers::new();
        owner.with(|| {
            Toast::with_host(timers.clone()).show("bye", false);
        });

        owner.cleanup();
        assert_eq!(timers.cleared(), 1);
    }
}
