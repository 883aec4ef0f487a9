/// One link of the breadcrumb trail, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbEntry {
    pub label: String,
    pub href: String,
}

/// Metadata handed off to the embedding parent. Built fresh on every page
/// load; never cached or re-queried.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageMetadata {
    pub page_title: Option<String>,
    pub breadcrumbs: Vec<BreadcrumbEntry>,
}
