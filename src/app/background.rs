use leptos::prelude::*;

use crate::compose::{cursor_style, Particle};
use crate::view_state::PointerPosition;

#[component]
pub fn Background(particles: Vec<Particle>) -> impl IntoView {
    view! {
        <div class="background fixed inset-0 -z-10 pointer-events-none" aria-hidden="true">
            <div class="grid-lines"></div>
            <div class="floating-particles">
                {particles
                    .into_iter()
                    .map(|p| view! { <div class="particle" style=p.style()></div> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Decorative element that follows the pointer.
#[component]
pub fn Cursor(pointer: Memo<PointerPosition>) -> impl IntoView {
    view! {
        <div
            class="cursor fixed pointer-events-none"
            aria-hidden="true"
            style=move || cursor_style(pointer.get())
        ></div>
    }
}
