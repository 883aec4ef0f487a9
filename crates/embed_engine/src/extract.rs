use scraper::Html;

use crate::breadcrumbs;
use crate::protocol::UiMetadataPayload;
use crate::query::SelectorChain;

/// Title search order: a heading inside the main content region, then an
/// explicitly marked element, then any heading.
const TITLE_STRATEGIES: &[&str] = &["main h1", "[data-page-title]", "h1"];

/// Extracts the page title from rendered markup.
///
/// The first strategy with a matching element decides the outcome; an empty
/// text under that element yields `None` rather than falling through.
pub fn extract_page_title(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    page_title(&doc)
}

/// Extracts title and breadcrumbs in one pass over the document.
pub fn extract_metadata(html: &str) -> UiMetadataPayload {
    let doc = Html::parse_document(html);
    UiMetadataPayload {
        page_title: page_title(&doc),
        breadcrumbs: breadcrumbs::collect(&doc),
    }
}

pub(crate) fn page_title(doc: &Html) -> Option<String> {
    SelectorChain::parse(TITLE_STRATEGIES)
        .first_match(doc)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}
