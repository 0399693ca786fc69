//! Browser tests for the scroll-reveal counters. The export section
//! mounts inside the viewport and both counters land exactly on their
//! targets; tearing the section down mid-count stops the frame loops.
#![cfg(target_arch = "wasm32")]

use dmr_frontend::components::ExportSection;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn test_root() -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let root: web_sys::HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn text_of(root: &web_sys::HtmlElement, selector: &str) -> String {
    root.query_selector(selector)
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap()
}

#[wasm_bindgen_test]
async fn counters_reach_their_targets_once_revealed() {
    let root = test_root();
    let handle = leptos::mount::mount_to(root.clone(), ExportSection);

    // The section mounts inside the viewport, so the observer reports
    // the initial intersection and the reveal flag flips.
    TimeoutFuture::new(500).await;
    let section = root.query_selector("section.export").unwrap().unwrap();
    assert!(section.class_list().contains("revealed"));

    // Past both animation windows (2000ms countries, 2500ms clients).
    TimeoutFuture::new(3000).await;
    assert_eq!(text_of(&root, ".stat-countries .stat-number"), "8");
    assert_eq!(text_of(&root, ".stat-clients .stat-number"), "1000+");

    // The reveal flag never reverts.
    TimeoutFuture::new(100).await;
    assert!(section.class_list().contains("revealed"));

    drop(handle);
    root.remove();
}

#[wasm_bindgen_test]
async fn unmounting_mid_count_stops_the_frame_loops() {
    let root = test_root();
    let handle = leptos::mount::mount_to(root.clone(), ExportSection);

    TimeoutFuture::new(500).await;
    let section = root.query_selector("section.export").unwrap().unwrap();
    assert!(section.class_list().contains("revealed"));

    // Catch the clients counter partway through its 2500ms run.
    TimeoutFuture::new(200).await;
    let clients: u32 = text_of(&root, ".stat-clients .stat-number")
        .trim_end_matches('+')
        .parse()
        .unwrap();
    assert!(clients > 0);
    assert!(clients < 1000);

    // Unmounting flips the cancel flag; the next scheduled frame of
    // each loop sees it and stops rescheduling.
    drop(handle);
    assert_eq!(root.child_element_count(), 0);
    root.remove();

    // Wait out both animation windows. A frame loop that survived
    // teardown would fire against disposed signals during this stretch.
    TimeoutFuture::new(3000).await;
}
