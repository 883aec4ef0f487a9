use embed_core::{update, FrameContext, Msg, ShimState};

#[test]
fn update_is_noop() {
    let state = ShimState::new(FrameContext::Embedded);
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
