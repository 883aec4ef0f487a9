/// A command issued by the embedding parent window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentCommand {
    /// Navigate this window to the given destination (full navigation).
    NavigateHome { href: String },
    /// Hide the page's own title element; the parent renders its own.
    HideInternalTitle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The document finished loading and is ready for extraction.
    DocumentReady,
    /// Metadata extraction finished for the current document.
    MetadataExtracted(crate::PageMetadata),
    /// A recognized command arrived from the embedding parent.
    CommandReceived(ParentCommand),
    /// Fallback for inbound traffic the shim does not recognize.
    NoOp,
}
