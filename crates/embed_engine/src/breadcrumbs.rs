use scraper::{Html, Selector};

use crate::protocol::BreadcrumbEntry;

/// Accessible marker identifying the breadcrumb trail in rendered markup.
pub const BREADCRUMB_NAV_SELECTOR: &str = r#"nav[aria-label="breadcrumb"]"#;

/// Collects the breadcrumb trail from rendered markup.
///
/// A document without a breadcrumb navigation element yields an empty
/// sequence, never an error.
pub fn extract_breadcrumbs(html: &str) -> Vec<BreadcrumbEntry> {
    let doc = Html::parse_document(html);
    collect(&doc)
}

pub(crate) fn collect(doc: &Html) -> Vec<BreadcrumbEntry> {
    let selectors = Selector::parse(BREADCRUMB_NAV_SELECTOR)
        .ok()
        .zip(Selector::parse("li a").ok());
    let Some((nav_sel, link_sel)) = selectors else {
        return Vec::new();
    };

    let Some(nav) = doc.select(&nav_sel).next() else {
        return Vec::new();
    };

    nav.select(&link_sel)
        .map(|link| BreadcrumbEntry {
            label: link.text().collect::<String>().trim().to_string(),
            href: link.value().attr("href").unwrap_or("#").to_string(),
        })
        .collect()
}
