#![cfg(target_arch = "wasm32")]
use leptos::*;
use storefront::components::reviews_list::ProductReviews;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

mod common;
use common::sample_page;

wasm_bindgen_test_configure!(run_in_browser);

// Mounts the review page into a fresh container attached to the body
fn mount_reviews() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document
        .create_element("div")
        .unwrap()
        .unchecked_into::<HtmlElement>();
    document.body().unwrap().append_child(&container).unwrap();

    let data = sample_page();
    mount_to(container.clone(), move || view! { <ProductReviews data=data /> });
    container
}

fn elements(root: &Element, selector: &str) -> Vec<Element> {
    let nodes = root.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn active_filter_indices(container: &Element) -> Vec<usize> {
    elements(container, ".filter-btn")
        .iter()
        .enumerate()
        .filter(|(_, button)| {
            button
                .class_name()
                .split_whitespace()
                .any(|class| class == "active")
        })
        .map(|(index, _)| index)
        .collect()
}

#[wasm_bindgen_test]
fn test_clicking_each_filter_highlights_only_it() {
    let container = mount_reviews();
    let buttons = elements(&container, ".filter-btn");
    assert_eq!(buttons.len(), 8);
    assert!(active_filter_indices(&container).is_empty());
    assert!(buttons
        .iter()
        .all(|button| button.get_attribute("aria-pressed").as_deref() == Some("false")));

    for (index, button) in buttons.iter().enumerate() {
        button.unchecked_ref::<HtmlElement>().click();
        assert_eq!(active_filter_indices(&container), vec![index]);
        assert_eq!(button.get_attribute("aria-pressed").as_deref(), Some("true"));
    }

    container.remove();
}

#[wasm_bindgen_test]
fn test_selecting_a_filter_keeps_all_reviews() {
    let container = mount_reviews();
    assert_eq!(elements(&container, ".review-card").len(), 2);

    // "5 Sao (643)"
    elements(&container, ".filter-btn")[1]
        .unchecked_ref::<HtmlElement>()
        .click();
    assert_eq!(elements(&container, ".review-card").len(), 2);

    container.remove();
}

#[wasm_bindgen_test]
fn test_sample_reviews_show_images_and_reply_only_on_first() {
    let container = mount_reviews();
    let cards = elements(&container, ".review-card");
    assert_eq!(cards.len(), 2);

    let first = &cards[0];
    assert_eq!(elements(first, ".review-thumb img").len(), 2);
    assert!(first.query_selector(".seller-response").unwrap().is_some());

    let second = &cards[1];
    assert!(second.query_selector(".review-images").unwrap().is_none());
    assert!(second.query_selector(".seller-response").unwrap().is_none());

    container.remove();
}
