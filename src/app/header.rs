use leptos::prelude::*;

use crate::compose::{nav_entries, NavEntry};
use crate::view_state::Section;

use super::browser::scroll_to;

#[component]
pub fn NavBar(active: Memo<Section>) -> impl IntoView {
    view! {
        <nav class="navbar sticky top-0 z-20 shadow-lg bg-background/80 backdrop-blur">
            <div class="mx-auto px-4 sm:px-6 lg:px-8 py-4 flex flex-wrap items-center justify-between">
                <Brand />
                <ul class="nav-links flex flex-wrap gap-4">
                    {move || {
                        nav_entries(active.get())
                            .into_iter()
                            .map(|entry| view! { <NavLink entry /> })
                            .collect_view()
                    }}
                </ul>
            </div>
        </nav>
    }
}

#[component]
fn Brand() -> impl IntoView {
    view! {
        <div class="nav-brand text-2xl font-bold mr-4">
            <span class="code-symbol text-green">"</>"</span>
            " "
            <span class="name text-cyan">"DEV_PORTFOLIO"</span>
        </div>
    }
}

#[component]
fn NavLink(entry: NavEntry) -> impl IntoView {
    let NavEntry {
        section,
        label,
        href,
        active,
    } = entry;
    view! {
        <li>
            <a
                href=href
                class=if active {
                    "active text-cyan border-b-2 border-cyan"
                } else {
                    "text-foreground hover:text-cyan"
                }
                on:click=move |ev| {
                    ev.prevent_default();
                    scroll_to(section);
                }
            >
                {label}
            </a>
        </li>
    }
}
