//! # Export Section
//!
//! World map with count-up statistics and one pulsing marker per
//! export market.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dmr_content::{export_markets, pulse_order, CountUp, CountryMarker};
use leptos::html::Section;
use leptos::prelude::*;

use crate::services::{run_count_up, use_reveal};

const REVEAL_THRESHOLD: f64 = 0.3;

const COUNTRIES_SERVED: CountUp = CountUp::new(0, 8, 2000.0);
const CLIENTS_SERVED: CountUp = CountUp::new(0, 1000, 2500.0);

/// Export statistics over the world map. The counters start the first
/// time a third of the section scrolls into view and cannot restart;
/// leaving the page mid-count stops the loops at the next frame.
#[component]
pub fn ExportSection() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(section_ref, REVEAL_THRESHOLD);

    let (countries, set_countries) = signal(0u32);
    let (clients, set_clients) = signal(0u32);
    let (hovered, set_hovered) = signal(None::<&'static str>);

    let cancelled = Arc::new(AtomicBool::new(false));
    on_cleanup({
        let cancelled = Arc::clone(&cancelled);
        move || cancelled.store(true, Ordering::Relaxed)
    });

    // Start the counters on first reveal.
    Effect::new(move |_| {
        if revealed.get() {
            run_count_up(COUNTRIES_SERVED, set_countries, Arc::clone(&cancelled));
            run_count_up(CLIENTS_SERVED, set_clients, Arc::clone(&cancelled));
        }
    });

    let markers = move || {
        pulse_order(export_markets())
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <section node_ref=section_ref class="export" class:revealed=move || revealed.get()>
            <div class="export-inner">
                <h2 class="section-title export-title">"We export to"</h2>

                <div class="map-box">
                    // Gradient layer under the image; carries the section
                    // when the map asset never arrives.
                    <div class="map-fallback"></div>
                    <img
                        src="assets/map.png"
                        alt="World map of export markets"
                        class="map-image"
                        on:error=move |_| {
                            log::warn!("map image failed to load, gradient fallback showing");
                        }
                    />

                    <div class="map-overlay">
                        <div class="stat stat-countries">
                            <span class="stat-number">{move || countries.get()}</span>
                            <span class="stat-label">"Countries"</span>
                        </div>
                        <div class="stat stat-clients">
                            <span class="stat-number">{move || clients.get()}"+"</span>
                            <span class="stat-label">"Clients"</span>
                        </div>

                        <For
                            each=markers
                            key=|(_, marker)| marker.name
                            children=move |(index, marker)| {
                                view! {
                                    <MapMarker
                                        marker=marker
                                        pulse_delay_s=index
                                        hovered=hovered
                                        set_hovered=set_hovered
                                    />
                                }
                            }
                        />
                    </div>
                </div>

                <div class="export-cta">
                    <button class="btn btn-solid">"See our exports"</button>
                </div>
            </div>
        </section>
    }
}

/// One market on the map: solid dot, pulse ring with a staggered delay
/// and a tooltip that opens on hover, exclusively across markers.
#[component]
fn MapMarker(
    marker: CountryMarker,
    pulse_delay_s: usize,
    hovered: ReadSignal<Option<&'static str>>,
    set_hovered: WriteSignal<Option<&'static str>>,
) -> impl IntoView {
    let name = marker.name;

    view! {
        <div
            class="map-marker"
            style=format!("left: {}%; top: {}%;", marker.left_pct, marker.top_pct)
            on:mouseenter=move |_| set_hovered.set(Some(name))
            on:mouseleave=move |_| set_hovered.set(None)
        >
            <div class="marker-ring" style=format!("animation-delay: {pulse_delay_s}s")></div>
            <div class="marker-dot"></div>
            <div class="marker-tooltip" class:visible=move || hovered.get() == Some(name)>
                {name}
            </div>
        </div>
    }
}
