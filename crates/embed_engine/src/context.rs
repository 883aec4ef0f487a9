use crate::window::WindowPort;

/// Detects whether this window runs embedded inside a different top-level
/// window.
///
/// A security restriction while reading the top-level identity is itself a
/// positive embedding signal and is consumed here rather than propagated.
pub fn is_embedded(window: &dyn WindowPort) -> bool {
    match window.is_top_level() {
        Ok(top_level) => !top_level,
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::is_embedded;
    use crate::window::ChannelWindowPort;

    #[test]
    fn differing_top_identity_means_embedded() {
        let (tx, _rx) = mpsc::channel();
        assert!(is_embedded(&ChannelWindowPort::embedded(tx)));
    }

    #[test]
    fn matching_top_identity_means_standalone() {
        let (tx, _rx) = mpsc::channel();
        assert!(!is_embedded(&ChannelWindowPort::top_level(tx)));
    }

    #[test]
    fn denied_access_counts_as_embedded() {
        let (tx, _rx) = mpsc::channel();
        assert!(is_embedded(&ChannelWindowPort::cross_origin(tx)));
    }
}
