use leptos::{ev::SubmitEvent, prelude::*};

use crate::content::Profile;
use crate::view_state::Section;

use super::browser::scroll_to;

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    let faces = ["front", "back", "top"];
    view! {
        <section
            id=Section::Home.id()
            class="hero flex flex-col lg:flex-row justify-center items-center gap-8 min-h-screen section-content"
        >
            <div class="hero-content max-w-2xl">
                <h1 class="flex flex-col gap-2 font-bold">
                    <span class="greeting text-xl text-muted">{profile.greeting.as_str()}</span>
                    <span
                        class="name-glitch text-4xl lg:text-5xl text-cyan"
                        data-text=profile.name.as_str()
                    >
                        {profile.name.as_str()}
                    </span>
                    <span class="title text-2xl text-purple">{profile.title.as_str()}</span>
                </h1>
                <p class="hero-description text-base my-6 leading-relaxed">
                    {profile.description.as_str()}
                </p>
                <div class="hero-buttons flex gap-4">
                    <button
                        class="btn-primary bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium border border-cyan/30"
                        on:click=move |_| scroll_to(Section::Projects)
                    >
                        "View Projects"
                    </button>
                    <button
                        class="btn-outline px-6 py-3 rounded-md font-medium border border-muted/50 hover:border-cyan"
                        on:click=move |_| scroll_to(Section::Contact)
                    >
                        "Contact Me"
                    </button>
                </div>
            </div>
            <div class="hero-visual" aria-hidden="true">
                <div class="code-cube">
                    {profile
                        .cube_faces
                        .iter()
                        .zip(faces)
                        .map(|(text, face)| {
                            view! { <div class=format!("face {face}")>{text.as_str()}</div> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn About(profile: &'static Profile) -> impl IntoView {
    view! {
        <section id=Section::About.id() class="about py-16 section-content">
            <h2 class="text-xl font-bold my-8">"About Me"</h2>
            <div class="about-content flex flex-col lg:flex-row gap-8 lg:gap-12">
                <div class="about-text w-full lg:max-w-2xl">
                    {profile
                        .about
                        .iter()
                        .map(|p| view! { <p class="text-base mb-4 leading-relaxed">{p.as_str()}</p> })
                        .collect_view()}
                    <div class="stats flex flex-wrap gap-6 mt-6">
                        {profile
                            .stats
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat bg-brightBlack/30 p-4 rounded-md flex flex-col">
                                        <span class="number text-2xl font-bold text-cyan">
                                            {stat.value.as_str()}
                                        </span>
                                        <span class="label text-sm text-muted">
                                            {stat.label.as_str()}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="about-image flex-shrink-0">
                    <div class="image-placeholder relative w-64 h-64 rounded-lg border border-muted/30 flex items-center justify-center">
                        <div class="scan-effect"></div>
                        <span class="text-muted">"Profile Image"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Contact(profile: &'static Profile) -> impl IntoView {
    // No backend: the form only swallows the submit.
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::info!("contact form submitted; nothing is sent");
    };

    view! {
        <section id=Section::Contact.id() class="contact py-16 section-content">
            <h2 class="text-xl font-bold my-8">"Get In Touch"</h2>
            <div class="contact-content flex flex-col lg:flex-row gap-8 lg:gap-12">
                <div class="contact-info w-full lg:max-w-xl">
                    <p class="mb-4 leading-relaxed">{profile.contact_blurb.as_str()}</p>
                    <div class="contact-details space-y-2 mb-4">
                        <div class="contact-item">
                            <span class="label text-muted mr-2">"Email:"</span>
                            <span>{profile.email.as_str()}</span>
                        </div>
                        <div class="contact-item">
                            <span class="label text-muted mr-2">"Location:"</span>
                            <span>{profile.location.as_str()}</span>
                        </div>
                    </div>
                    <div class="social-links flex gap-3">
                        {profile
                            .socials
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href.as_str()
                                        class="text-blue hover:text-brightBlue"
                                        rel="noopener noreferrer"
                                    >
                                        {link.label.as_str()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <form class="contact-form flex flex-col gap-4 w-full lg:max-w-xl" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Your Name"
                        class="px-4 py-2 rounded-md border bg-background text-foreground"
                    />
                    <input
                        type="email"
                        placeholder="Your Email"
                        class="px-4 py-2 rounded-md border bg-background text-foreground"
                    />
                    <textarea
                        placeholder="Your Message"
                        rows=5
                        class="px-4 py-2 rounded-md border bg-background text-foreground"
                    ></textarea>
                    <button
                        type="submit"
                        class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium border border-cyan/30"
                    >
                        "Send Message"
                    </button>
                </form>
            </div>
        </section>
    }
}
