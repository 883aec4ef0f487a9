use crate::{Effect, FrameContext, HandshakePhase, Msg, ParentCommand, ShimState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ShimState, msg: Msg) -> (ShimState, Vec<Effect>) {
    // Standalone pages never run any part of the shim.
    if state.context() == FrameContext::Standalone {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::DocumentReady => {
            if state.phase() == HandshakePhase::AwaitingDocument {
                state.begin_extraction();
                vec![Effect::ExtractMetadata]
            } else {
                Vec::new()
            }
        }
        Msg::MetadataExtracted(metadata) => {
            if state.phase() == HandshakePhase::Extracting {
                state.mark_notified();
                // The parent must receive the metadata before any chrome
                // is removed from the document.
                vec![Effect::NotifyParent { metadata }, Effect::CleanupChildUi]
            } else {
                Vec::new()
            }
        }
        Msg::CommandReceived(ParentCommand::NavigateHome { href }) => {
            vec![Effect::Navigate { href }]
        }
        Msg::CommandReceived(ParentCommand::HideInternalTitle) => {
            vec![Effect::HideInternalTitle]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
