//! # Navbar Component
//!
//! Top navigation: brand logo, desktop links, the quote call-to-action
//! and a collapsible mobile menu.

use dmr_content::CONTACT_URL;
use leptos::prelude::*;

const NAV_LINKS: [&str; 4] = ["Home", "Products", "Career", "Contact"];

/// Navigation bar. Slides down into place on first load; the hamburger
/// button swaps the mobile menu open and closed.
#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (loaded, set_loaded) = signal(false);

    // Flips after mount so the entrance transition has a frame to
    // start from the hidden state.
    Effect::new(move |_| set_loaded.set(true));

    view! {
        <nav class="navbar" class:loaded=move || loaded.get()>
            <div class="nav-inner">
                <button
                    class="nav-toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="sr-only">"Open main menu"</span>
                    <Show when=move || menu_open.get() fallback=|| view! { <MenuIcon /> }>
                        <CloseIcon />
                    </Show>
                </button>

                <div class="nav-brand">
                    <img
                        src="assets/logo.png"
                        alt="Dunia Mega Raya"
                        class="nav-logo"
                        on:error=move |_| log::warn!("logo image failed to load")
                    />
                </div>

                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|label| view! { <a href="#" class="nav-link">{*label}</a> })
                        .collect::<Vec<_>>()}
                </div>

                <div class="nav-cta">
                    <a
                        href=CONTACT_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-solid"
                    >
                        "Get a Quote"
                    </a>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="mobile-menu">
                    {NAV_LINKS
                        .iter()
                        .map(|label| view! { <a href="#" class="mobile-link">{*label}</a> })
                        .collect::<Vec<_>>()}
                    <a
                        href=CONTACT_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-solid mobile-cta"
                    >
                        "Get a Quote"
                    </a>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn MenuIcon() -> impl IntoView {
    view! {
        <svg class="nav-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
        </svg>
    }
}

#[component]
fn CloseIcon() -> impl IntoView {
    view! {
        <svg class="nav-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
        </svg>
    }
}
