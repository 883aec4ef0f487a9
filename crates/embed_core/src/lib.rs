//! Embed shim core: pure state machine for the child-page handoff.
mod effect;
mod metadata;
mod msg;
mod state;
mod update;

pub use effect::Effect;
pub use metadata::{BreadcrumbEntry, PageMetadata};
pub use msg::{Msg, ParentCommand};
pub use state::{FrameContext, HandshakePhase, ShimState};
pub use update::update;
