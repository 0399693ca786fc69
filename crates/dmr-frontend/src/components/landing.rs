//! # Landing Section
//!
//! Hero headline, subheading, quote call-to-action and product image.

use dmr_content::CONTACT_URL;
use leptos::html::Section;
use leptos::prelude::*;

use crate::services::use_reveal;

const REVEAL_THRESHOLD: f64 = 0.1;

/// Landing hero. Starts faded out and slides up once a tenth of it is
/// inside the viewport.
#[component]
pub fn LandingSection() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(section_ref, REVEAL_THRESHOLD);

    view! {
        <section node_ref=section_ref class="landing" class:revealed=move || revealed.get()>
            <div class="landing-inner">
                <div class="landing-copy">
                    <h1 class="landing-title">
                        "Manufacturing Products,"
                        <br />
                        "Preserving "
                        <span class="accent">"Quality."</span>
                    </h1>
                    <p class="landing-subtitle">
                        "From Bags, straps, to cups, Dunia Mega Raya fulfills your \
                         Business needs through reliable quality and satisfaction."
                    </p>
                    <div class="landing-cta">
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

                <div class="landing-figure">
                    <img
                        src="assets/handbag.png"
                        alt="Dunia Mega Raya Products"
                        class="landing-image"
                        on:error=move |_| log::warn!("hero image failed to load")
                    />
                </div>
            </div>
        </section>
    }
}
