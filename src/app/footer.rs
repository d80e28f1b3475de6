use leptos::prelude::*;

use crate::compose::FOOTER_TAGLINE;

#[component]
pub fn Footer(copyright: String) -> impl IntoView {
    view! {
        <footer class="footer mt-16 py-8 text-center text-sm text-muted border-t border-muted/30">
            <p>{copyright}</p>
            <p>{FOOTER_TAGLINE}</p>
        </footer>
    }
}
