use leptos::prelude::*;

use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl">"Page not found"</p>
                <button class="btn btn-primary" on:click=move |_| router.redirect_to(AppRoute::Home)>
                    "Back to Home"
                </button>
            </div>
        </div>
    }
}
