//! Document head: title, meta tags, favicon, stylesheet and JSON-LD.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Script, Style, Title};
use serde::Serialize;
use serde_json::{Value, json};

use crate::content::{FEATURES, PRODUCT_NAME, REPOSITORY_URL, TAGLINE};
use crate::styles::LANDING_CSS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub viewport: &'static str,
    pub favicon: &'static str,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "CursorFocus - Smart Project Structure Tracker",
            description: TAGLINE,
            viewport: "width=device-width, initial-scale=1",
            favicon: "/favicon.ico",
        }
    }
}

impl SiteMeta {
    /// schema.org `SoftwareApplication` record for search engines.
    pub fn structured_data(&self) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "SoftwareApplication",
            "name": PRODUCT_NAME,
            "description": self.description,
            "applicationCategory": "DeveloperApplication",
            "operatingSystem": "Windows, macOS",
            "url": REPOSITORY_URL,
            "offers": { "@type": "Offer", "price": "0", "priceCurrency": "USD" },
            "featureList": FEATURES.iter().map(|feature| feature.name).collect::<Vec<_>>(),
        })
    }
}

#[component]
pub fn DocumentHead(#[prop(optional)] meta: Option<SiteMeta>) -> impl IntoView {
    let meta = meta.unwrap_or_default();
    let ld_json = meta.structured_data().to_string();

    view! {
        <Title text=meta.title />
        <Meta name="description" content=meta.description />
        <Meta name="viewport" content=meta.viewport />
        <Meta property="og:title" content=meta.title />
        <Meta property="og:description" content=meta.description />
        <Link rel="icon" href=meta.favicon />
        <Style>{LANDING_CSS}</Style>
        <Script type_="application/ld+json">{ld_json}</Script>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_the_product() {
        let meta = SiteMeta::default();
        assert_eq!(meta.title, "CursorFocus - Smart Project Structure Tracker");
        assert_eq!(meta.viewport, "width=device-width, initial-scale=1");
        assert_eq!(meta.favicon, "/favicon.ico");
        assert!(meta.description.starts_with("A lightweight tool"));
    }

    #[test]
    fn structured_data_is_valid_json() {
        let encoded = SiteMeta::default().structured_data().to_string();
        let decoded: Value = serde_json::from_str(&encoded).expect("valid JSON-LD");

        assert_eq!(decoded["@type"], "SoftwareApplication");
        assert_eq!(decoded["name"], "CursorFocus");
        assert_eq!(decoded["featureList"].as_array().map(Vec::len), Some(FEATURES.len()));
    }

    #[test]
    fn meta_serializes_for_tooling() {
        let encoded = serde_json::to_value(SiteMeta::default()).expect("serializable");
        assert_eq!(encoded["favicon"], "/favicon.ico");
    }
}
