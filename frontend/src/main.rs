use leptos::prelude::*;
use parkcharge_frontend::App;
use parkcharge_shared::APP_NAME;

// lol_alloc 作为全局分配器，减小 WASM 体积
#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };

pub fn main() {
    // panic 信息输出到 console.error
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&format!("[{}] mounting app", APP_NAME).into());
    mount_to_body(App);
}
