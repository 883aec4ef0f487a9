use scraper::{Html, Selector};

use crate::breadcrumbs::BREADCRUMB_NAV_SELECTOR;
use crate::query::SelectorChain;

const HEADER_SELECTOR: &str = "#sqlpage_header";
const LAYOUT_SELECTOR: &str = ".layout-fluid";
const MAIN_WRAPPER_SELECTOR: &str = "#sqlpage_main_wrapper";

/// Spacing added below the fixed header; meaningless once the header is gone.
const HEADER_SPACING_CLASSES: &[&str] = &["mt-5", "pt-5"];

/// Hide search order: any heading first, then the explicitly marked element.
/// Note this differs from the title extraction order.
const HIDE_TITLE_STRATEGIES: &[&str] = &["h1", "[data-page-title]"];

/// One mutation of the rendered document. Every edit applies to the first
/// matching element only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEdit {
    Remove {
        selector: String,
    },
    SetInlineStyle {
        selector: String,
        property: String,
        value: String,
    },
    RemoveClasses {
        selector: String,
        classes: Vec<String>,
    },
}

impl DomEdit {
    pub fn selector(&self) -> &str {
        match self {
            DomEdit::Remove { selector }
            | DomEdit::SetInlineStyle { selector, .. }
            | DomEdit::RemoveClasses { selector, .. } => selector,
        }
    }
}

/// Plans the removal of child chrome the parent already renders: the page
/// header, the breadcrumb trail, the tinted layout background, and the
/// spacing that made room for the fixed header.
///
/// Each target is independently optional; an absent target never suppresses
/// the remaining steps.
pub fn cleanup_plan(html: &str) -> Vec<DomEdit> {
    let doc = Html::parse_document(html);
    let mut edits = Vec::new();

    if has_match(&doc, HEADER_SELECTOR) {
        edits.push(DomEdit::Remove {
            selector: HEADER_SELECTOR.to_string(),
        });
    }
    if has_match(&doc, BREADCRUMB_NAV_SELECTOR) {
        edits.push(DomEdit::Remove {
            selector: BREADCRUMB_NAV_SELECTOR.to_string(),
        });
    }
    if has_match(&doc, LAYOUT_SELECTOR) {
        edits.push(DomEdit::SetInlineStyle {
            selector: LAYOUT_SELECTOR.to_string(),
            property: "background-color".to_string(),
            value: "#FFFFFF".to_string(),
        });
    }
    if has_match(&doc, MAIN_WRAPPER_SELECTOR) {
        edits.push(DomEdit::RemoveClasses {
            selector: MAIN_WRAPPER_SELECTOR.to_string(),
            classes: HEADER_SPACING_CLASSES
                .iter()
                .map(|class| class.to_string())
                .collect(),
        });
    }

    edits
}

/// Plans hiding of the page's own title element. Empty when no candidate
/// exists.
pub fn hide_title_plan(html: &str) -> Vec<DomEdit> {
    let doc = Html::parse_document(html);
    match SelectorChain::parse(HIDE_TITLE_STRATEGIES).first_hit(&doc) {
        Some(selector) => vec![DomEdit::SetInlineStyle {
            selector: selector.to_string(),
            property: "display".to_string(),
            value: "none".to_string(),
        }],
        None => Vec::new(),
    }
}

fn has_match(doc: &Html, selector: &str) -> bool {
    Selector::parse(selector)
        .ok()
        .is_some_and(|sel| doc.select(&sel).next().is_some())
}
