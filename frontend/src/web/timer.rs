//! 定时器封装模块
//!
//! 使用 `web_sys` 的原生定时器 API。宿主通过 `TimerHost` 抽象，
//! 以便在非浏览器环境下验证取消逻辑。

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

/// 定时器错误类型
#[derive(Debug)]
pub enum TimerError {
    /// 无法获取 window 对象
    WindowUnavailable,
    /// 调用 setTimeout 失败
    ScheduleFailed(String),
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::WindowUnavailable => write!(f, "window is unavailable"),
            TimerError::ScheduleFailed(msg) => write!(f, "setTimeout failed: {}", msg),
        }
    }
}

impl std::error::Error for TimerError {}

/// 定时器宿主
pub trait TimerHost {
    type Handle;

    /// 安排一次性回调
    fn set_timeout(
        &self,
        millis: u32,
        callback: Box<dyn FnOnce()>,
    ) -> Result<Self::Handle, TimerError>;

    /// 清除尚未触发的回调
    fn clear_timeout(&self, handle: &Self::Handle);
}

/// 浏览器定时器宿主
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

/// 浏览器定时器句柄，持有闭包直到定时器被清除
pub struct BrowserHandle {
    id: i32,
    #[allow(dead_code)]
    closure: Closure<dyn FnMut()>,
}

impl TimerHost for BrowserTimers {
    type Handle = BrowserHandle;

    fn set_timeout(
        &self,
        millis: u32,
        callback: Box<dyn FnOnce()>,
    ) -> Result<BrowserHandle, TimerError> {
        let window = web_sys::window().ok_or(TimerError::WindowUnavailable)?;
        let closure: Closure<dyn FnMut()> = Closure::once(callback);

        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis as i32,
            )
            .map_err(|e| TimerError::ScheduleFailed(format!("{:?}", e)))?;

        Ok(BrowserHandle { id, closure })
    }

    fn clear_timeout(&self, handle: &BrowserHandle) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(handle.id);
        }
    }
}

/// 一次性定时器
///
/// 当 `Timeout` 被 drop 时自动清除定时器。回调另有一个 armed 标记，
/// 即使宿主未能清除定时器，drop 之后的触发也不会执行回调。
pub struct Timeout<H: TimerHost = BrowserTimers> {
    host: H,
    handle: H::Handle,
    armed: Rc<Cell<bool>>,
}

impl<H: TimerHost> Timeout<H> {
    pub fn with_host<F>(host: H, millis: u32, callback: F) -> Result<Self, TimerError>
    where
        F: FnOnce() + 'static,
    {
        let armed = Rc::new(Cell::new(true));
        let guard = Rc::clone(&armed);
        let handle = host.set_timeout(
            millis,
            Box::new(move || {
                if guard.replace(false) {
                    callback();
                }
            }),
        )?;

        Ok(Self {
            host,
            handle,
            armed,
        })
    }

    /// 取消定时器
    ///
    /// 通常不需要手动调用，因为 drop 时会自动清除。
    pub fn cancel(&self) {
        if self.armed.replace(false) {
            self.host.clear_timeout(&self.handle);
        }
    }
}

impl<H: TimerHost> Drop for Timeout<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}
