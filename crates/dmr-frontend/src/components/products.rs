//! # Products Section
//!
//! Showcase grid with one card per catalog product.

use dmr_content::{product_catalog, Product, CONTACT_URL};
use leptos::html::Section;
use leptos::prelude::*;

use crate::services::use_reveal;

const REVEAL_THRESHOLD: f64 = 0.1;
const CARD_STAGGER_MS: usize = 100;

/// Product showcase. Cards rise in left to right once a tenth of the
/// grid is inside the viewport.
#[component]
pub fn ProductsSection() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(section_ref, REVEAL_THRESHOLD);

    let products = move || {
        product_catalog()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <section node_ref=section_ref class="products" class:revealed=move || revealed.get()>
            <div class="products-inner">
                <h2 class="section-title products-title">"Our Products"</h2>

                <div class="product-grid">
                    <For
                        each=products
                        key=|(_, product)| product.id
                        children=move |(index, product)| {
                            view! { <ProductCard product=product stagger_ms={index * CARD_STAGGER_MS} /> }
                        }
                    />
                </div>
            </div>
        </section>
    }
}

/// Single product card: image, title and the shared quote link.
#[component]
fn ProductCard(product: Product, stagger_ms: usize) -> impl IntoView {
    let title = product.title;

    view! {
        <div class="product-card" style=format!("transition-delay: {stagger_ms}ms")>
            <div class="product-figure">
                <img
                    src=product.image
                    alt=product.alt
                    class="product-image"
                    on:error=move |_| log::warn!("product image failed to load: {title}")
                />
            </div>
            <h3 class="product-title">{product.title}</h3>
            <a
                href=CONTACT_URL
                target="_blank"
                rel="noopener noreferrer"
                class="btn btn-outline card-cta"
            >
                "Get a Quote"
            </a>
        </div>
    }
}
