/// Where this page runs relative to the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameContext {
    /// Top-level window; the shim never does anything.
    Standalone,
    /// Child iframe of a different window.
    Embedded,
}

/// Progress of the one-time handoff sequence. There is no transition back
/// and no retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakePhase {
    AwaitingDocument,
    Extracting,
    Notified,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimState {
    context: FrameContext,
    phase: HandshakePhase,
}

impl ShimState {
    pub fn new(context: FrameContext) -> Self {
        Self {
            context,
            phase: HandshakePhase::AwaitingDocument,
        }
    }

    pub fn context(&self) -> FrameContext {
        self.context
    }

    pub fn phase(&self) -> HandshakePhase {
        self.phase
    }

    pub(crate) fn begin_extraction(&mut self) {
        self.phase = HandshakePhase::Extracting;
    }

    pub(crate) fn mark_notified(&mut self) {
        self.phase = HandshakePhase::Notified;
    }
}

impl Default for ShimState {
    fn default() -> Self {
        Self::new(FrameContext::Standalone)
    }
}
