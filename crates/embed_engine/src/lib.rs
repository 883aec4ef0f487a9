//! Embed shim engine: document reads, cleanup planning, and the wire protocol.
mod apply;
mod breadcrumbs;
mod context;
mod dom;
mod extract;
mod normalize;
mod protocol;
mod query;
mod window;

pub use apply::{apply_edits, RewriteError};
pub use breadcrumbs::{extract_breadcrumbs, BREADCRUMB_NAV_SELECTOR};
pub use context::is_embedded;
pub use dom::{DocumentPort, StringDocument};
pub use extract::{extract_metadata, extract_page_title};
pub use normalize::{cleanup_plan, hide_title_plan, DomEdit};
pub use protocol::{
    decode_parent_command, BreadcrumbEntry, MetadataEnvelope, ParentCommand, UiMetadataPayload,
    MESSAGE_SOURCE, METADATA_TYPE,
};
pub use query::SelectorChain;
pub use window::{ChannelWindowPort, CrossOriginDenied, WindowEvent, WindowPort};
