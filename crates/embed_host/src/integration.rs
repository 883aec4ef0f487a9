use embed_core::{update, Effect, FrameContext, Msg, PageMetadata, ShimState};
use embed_engine::{
    cleanup_plan, decode_parent_command, extract_metadata, hide_title_plan, is_embedded,
    DocumentPort, MetadataEnvelope, UiMetadataPayload, WindowPort,
};
use embed_logging::{shim_debug, shim_info, shim_warn};
use serde_json::Value;

use crate::MessagingPolicy;

/// Owning host of the shim.
///
/// Detects the frame context once at construction, then drives the pure core
/// from the two page lifecycle events and executes the effects it returns
/// against the window and document ports.
pub struct Integration<W, D> {
    state: ShimState,
    policy: MessagingPolicy,
    window: W,
    document: D,
}

impl<W: WindowPort, D: DocumentPort> Integration<W, D> {
    pub fn new(window: W, document: D, policy: MessagingPolicy) -> Self {
        let context = if is_embedded(&window) {
            FrameContext::Embedded
        } else {
            FrameContext::Standalone
        };
        shim_info!("frame context: {context:?}");
        Self {
            state: ShimState::new(context),
            policy,
            window,
            document,
        }
    }

    pub fn context(&self) -> FrameContext {
        self.state.context()
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// The document finished loading: run the one-time handoff sequence.
    pub fn on_ready(&mut self) {
        self.dispatch(Msg::DocumentReady);
    }

    /// Inbound cross-window traffic.
    pub fn on_message(&mut self, origin: Option<&str>, data: &Value) {
        if !self.policy.accepts_origin(origin) {
            shim_warn!("rejected message from origin {origin:?}");
            return;
        }
        let msg = match decode_parent_command(data) {
            Some(command) => Msg::CommandReceived(to_core_command(command)),
            None => {
                shim_debug!("ignoring unrecognized message");
                Msg::NoOp
            }
        };
        self.dispatch(msg);
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ExtractMetadata => {
                let payload = extract_metadata(&self.document.snapshot());
                self.dispatch(Msg::MetadataExtracted(to_core_metadata(payload)));
            }
            Effect::NotifyParent { metadata } => {
                if !self.window.has_parent() {
                    shim_debug!("no parent window; notification skipped");
                    return;
                }
                let envelope = MetadataEnvelope::new(to_wire_payload(metadata));
                match serde_json::to_value(&envelope) {
                    Ok(message) => {
                        shim_info!("posting metadata envelope to parent");
                        self.window
                            .post_to_parent(message, self.policy.target_origin.as_str());
                    }
                    Err(err) => shim_warn!("failed to encode metadata envelope: {err}"),
                }
            }
            Effect::CleanupChildUi => {
                let edits = cleanup_plan(&self.document.snapshot());
                shim_debug!("applying {} cleanup edits", edits.len());
                self.document.apply(&edits);
            }
            Effect::HideInternalTitle => {
                let edits = hide_title_plan(&self.document.snapshot());
                self.document.apply(&edits);
            }
            Effect::Navigate { href } => {
                shim_info!("navigating to {href}");
                self.window.navigate(&href);
            }
        }
    }
}

fn to_core_command(command: embed_engine::ParentCommand) -> embed_core::ParentCommand {
    match command {
        embed_engine::ParentCommand::NavigateHome { href } => {
            embed_core::ParentCommand::NavigateHome { href }
        }
        embed_engine::ParentCommand::HideInternalTitle => {
            embed_core::ParentCommand::HideInternalTitle
        }
    }
}

fn to_core_metadata(payload: UiMetadataPayload) -> PageMetadata {
    PageMetadata {
        page_title: payload.page_title,
        breadcrumbs: payload
            .breadcrumbs
            .into_iter()
            .map(|entry| embed_core::BreadcrumbEntry {
                label: entry.label,
                href: entry.href,
            })
            .collect(),
    }
}

fn to_wire_payload(metadata: PageMetadata) -> UiMetadataPayload {
    UiMetadataPayload {
        page_title: metadata.page_title,
        breadcrumbs: metadata
            .breadcrumbs
            .into_iter()
            .map(|entry| embed_engine::BreadcrumbEntry {
                label: entry.label,
                href: entry.href,
            })
            .collect(),
    }
}
