use cursorfocus_landing::content::{FEATURES, LINK_GROUPS, PlatformId, USAGE_GUIDES};
use cursorfocus_landing::sections::InstallSteps;
use cursorfocus_landing::{App, LazyLandingPage, SectionSlot, render_page, render_skeleton};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use pretty_assertions::assert_eq;

fn attribute_values<'a>(html: &'a str, attribute: &str) -> Vec<&'a str> {
    let needle = format!("{attribute}=\"");
    html.split(needle.as_str())
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}

fn slot_keys() -> Vec<&'static str> {
    SectionSlot::ORDER.iter().map(|slot| slot.key()).collect()
}

#[test]
fn page_renders_sections_in_order() {
    let html = render_page();
    assert_eq!(attribute_values(&html, "data-section"), slot_keys());
}

#[test]
fn skeleton_mirrors_page_order() {
    let skeleton = render_skeleton();
    let page = render_page();
    assert_eq!(
        attribute_values(&skeleton, "data-slot"),
        attribute_values(&page, "data-section")
    );
    assert!(!skeleton.contains("data-section"));
}

#[test]
fn lazy_page_paints_placeholders_first() {
    let html = Owner::new().with(|| view! { <LazyLandingPage /> }.to_html());
    assert_eq!(attribute_values(&html, "data-slot"), slot_keys());
    assert!(!html.contains("data-section"));
    let main_end = html.find("</main>").expect("main rendered");
    let footer = html.find("data-slot=\"footer\"").expect("footer placeholder");
    assert!(main_end < footer);
}

#[test]
fn app_boots_behind_skeletons_with_head_tags_out_of_body() {
    let html = Owner::new().with(|| view! { <App /> }.to_html());
    assert_eq!(attribute_values(&html, "data-slot"), slot_keys());
    assert!(!html.contains("application/ld+json"));
    assert!(!html.contains("<meta"));
}

#[test]
fn entry_page_leaves_head_tags_to_the_app() {
    let index = include_str!("../index.html");
    assert!(!index.contains("name=\"viewport\""));
    assert!(!index.contains("<title>"));
    assert!(!index.contains("rel=\"icon\""));
    assert!(index.contains("data-cargo-features=\"csr\""));
}

#[test]
fn default_page_selects_windows() {
    let html = render_page();
    assert_eq!(attribute_values(&html, "data-platform"), vec!["windows", "mac", "windows"]);
    assert!(html.contains("python setup.py --scan"));
    assert!(!html.contains("python3 setup.py --scan"));
}

#[test]
fn macos_steps_replace_windows_commands() {
    let html = view! { <InstallSteps platform=PlatformId::MacOs revealed=true /> }.to_html();

    for step in PlatformId::MacOs.platform().steps {
        assert!(html.contains(&step.command.replace('&', "&amp;")), "{}", step.command);
    }
    assert!(html.contains("pip3 install -r requirements.txt"));
    assert!(html.contains("python3 setup.py --scan"));
    assert!(!html.contains("&amp;&amp; pip install"));
    assert!(!html.contains("python setup.py --scan"));
}

#[test]
fn page_carries_all_authored_content() {
    let html = render_page();
    for feature in FEATURES {
        assert!(html.contains(feature.name), "{}", feature.name);
    }
    for guide in USAGE_GUIDES {
        assert!(html.contains(guide.title), "{}", guide.title);
    }
    for link in LINK_GROUPS.iter().flat_map(|group| group.links) {
        assert!(html.contains(&format!("href=\"{}\"", link.href)), "{}", link.href);
    }
}

#[test]
fn nothing_is_revealed_before_scrolling() {
    let html = render_page();
    assert!(html.contains("reveal reveal-up"));
    assert!(!html.contains("is-visible"));
}
