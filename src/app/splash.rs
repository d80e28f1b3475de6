use leptos::prelude::*;

use crate::compose::SPLASH_MESSAGE;

#[component]
pub fn Splash() -> impl IntoView {
    view! {
        <div class="loading-screen fixed inset-0 flex items-center justify-center bg-background">
            <div class="loading-animation flex flex-col items-center gap-6">
                <div class="orb"></div>
                <div class="pulse"></div>
                <p class="text-cyan tracking-widest">{SPLASH_MESSAGE}</p>
            </div>
        </div>
    }
}
