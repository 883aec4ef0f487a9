use std::sync::Once;

use embed_core::{
    update, BreadcrumbEntry, Effect, FrameContext, HandshakePhase, Msg, PageMetadata,
    ParentCommand, ShimState,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(embed_logging::initialize_for_tests);
}

fn sample_metadata() -> PageMetadata {
    PageMetadata {
        page_title: Some("Quarterly Report".to_string()),
        breadcrumbs: vec![BreadcrumbEntry {
            label: "Home".to_string(),
            href: "/".to_string(),
        }],
    }
}

#[test]
fn standalone_ignores_everything() {
    init_logging();
    let state = ShimState::new(FrameContext::Standalone);

    for msg in [
        Msg::DocumentReady,
        Msg::MetadataExtracted(sample_metadata()),
        Msg::CommandReceived(ParentCommand::NavigateHome {
            href: "/home".to_string(),
        }),
        Msg::CommandReceived(ParentCommand::HideInternalTitle),
        Msg::NoOp,
    ] {
        let (next, effects) = update(state.clone(), msg);
        assert_eq!(next, state);
        assert!(effects.is_empty());
    }
}

#[test]
fn document_ready_requests_extraction() {
    init_logging();
    let state = ShimState::new(FrameContext::Embedded);

    let (next, effects) = update(state, Msg::DocumentReady);

    assert_eq!(next.phase(), HandshakePhase::Extracting);
    assert_eq!(effects, vec![Effect::ExtractMetadata]);
}

#[test]
fn extraction_result_notifies_before_cleanup() {
    init_logging();
    let state = ShimState::new(FrameContext::Embedded);
    let (state, _effects) = update(state, Msg::DocumentReady);

    let metadata = sample_metadata();
    let (next, effects) = update(state, Msg::MetadataExtracted(metadata.clone()));

    assert_eq!(next.phase(), HandshakePhase::Notified);
    assert_eq!(
        effects,
        vec![Effect::NotifyParent { metadata }, Effect::CleanupChildUi]
    );
}

#[test]
fn document_ready_runs_only_once() {
    init_logging();
    let state = ShimState::new(FrameContext::Embedded);
    let (state, _effects) = update(state, Msg::DocumentReady);

    let (state, effects) = update(state, Msg::DocumentReady);
    assert!(effects.is_empty());

    let (state, _effects) = update(state, Msg::MetadataExtracted(sample_metadata()));
    let (state, effects) = update(state, Msg::DocumentReady);
    assert_eq!(state.phase(), HandshakePhase::Notified);
    assert!(effects.is_empty());
}

#[test]
fn unexpected_extraction_result_is_dropped() {
    init_logging();
    let state = ShimState::new(FrameContext::Embedded);

    // No extraction was requested yet.
    let (state, effects) = update(state, Msg::MetadataExtracted(sample_metadata()));
    assert_eq!(state.phase(), HandshakePhase::AwaitingDocument);
    assert!(effects.is_empty());

    // A second result after the handoff completed is dropped as well.
    let (state, _effects) = update(state, Msg::DocumentReady);
    let (state, _effects) = update(state, Msg::MetadataExtracted(sample_metadata()));
    let (_state, effects) = update(state, Msg::MetadataExtracted(sample_metadata()));
    assert!(effects.is_empty());
}
