//! # Dunia Mega Raya Frontend
//!
//! Leptos (Rust/WASM) frontend for the Dunia Mega Raya marketing site.
//! A single scrolling page: navigation bar, landing hero, animated
//! export-market map and the product showcase grid.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod components;
pub mod services;

use components::*;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};

/// Root component wiring the page sections together.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Dunia Mega Raya | Manufacturing Products, Preserving Quality" />
        <Meta
            name="description"
            content="Dunia Mega Raya manufactures plastic bags, straps and cups in Indonesia and exports to markets across four continents."
        />

        <div class="page">
            <Navbar />
            <main>
                <LandingSection />
                <ExportSection />
                <ProductsSection />
            </main>
        </div>
    }
}

/// Entry point invoked by the wasm loader.
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Dunia Mega Raya site v{}", env!("CARGO_PKG_VERSION"));

    leptos::mount::mount_to_body(App);
}
