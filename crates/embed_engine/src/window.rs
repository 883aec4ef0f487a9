use std::sync::mpsc;

use serde_json::Value;

/// Reading the top-level window identity failed under a cross-origin
/// security restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cross-origin window access denied")]
pub struct CrossOriginDenied;

/// Window-side services of the embedding environment.
pub trait WindowPort {
    /// Whether this window is its own top-level window.
    fn is_top_level(&self) -> Result<bool, CrossOriginDenied>;

    /// Whether a parent window reference exists at all.
    fn has_parent(&self) -> bool;

    /// Posts a message to the parent window. Fire-and-forget: no
    /// acknowledgement, no retry, no delivery guarantee.
    fn post_to_parent(&mut self, message: Value, target_origin: &str);

    /// Full navigation of this window to the given destination.
    fn navigate(&mut self, href: &str);
}

/// Window activity forwarded by a [`ChannelWindowPort`].
#[derive(Debug, Clone, PartialEq)]
pub enum WindowEvent {
    Posted {
        message: Value,
        target_origin: String,
    },
    Navigated {
        href: String,
    },
}

/// Channel-backed window port for native hosts.
pub struct ChannelWindowPort {
    tx: mpsc::Sender<WindowEvent>,
    top_level: Result<bool, CrossOriginDenied>,
    parent: bool,
}

impl ChannelWindowPort {
    /// A window embedded under a reachable parent.
    pub fn embedded(tx: mpsc::Sender<WindowEvent>) -> Self {
        Self {
            tx,
            top_level: Ok(false),
            parent: true,
        }
    }

    /// A window that is its own top-level window.
    pub fn top_level(tx: mpsc::Sender<WindowEvent>) -> Self {
        Self {
            tx,
            top_level: Ok(true),
            parent: false,
        }
    }

    /// A window whose top-level identity cannot be read across origins.
    pub fn cross_origin(tx: mpsc::Sender<WindowEvent>) -> Self {
        Self {
            tx,
            top_level: Err(CrossOriginDenied),
            parent: true,
        }
    }

    /// An embedded window whose parent reference is unavailable.
    pub fn embedded_without_parent(tx: mpsc::Sender<WindowEvent>) -> Self {
        Self {
            tx,
            top_level: Ok(false),
            parent: false,
        }
    }
}

impl WindowPort for ChannelWindowPort {
    fn is_top_level(&self) -> Result<bool, CrossOriginDenied> {
        self.top_level
    }

    fn has_parent(&self) -> bool {
        self.parent
    }

    fn post_to_parent(&mut self, message: Value, target_origin: &str) {
        let _ = self.tx.send(WindowEvent::Posted {
            message,
            target_origin: target_origin.to_string(),
        });
    }

    fn navigate(&mut self, href: &str) {
        let _ = self.tx.send(WindowEvent::Navigated {
            href: href.to_string(),
        });
    }
}
