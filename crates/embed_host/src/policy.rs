use serde::{Deserialize, Serialize};

/// Target origin for the outbound metadata envelope.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TargetOrigin {
    /// Deliver to whatever origin the parent document currently has.
    #[default]
    Any,
    /// Restrict delivery to a single origin.
    Origin(String),
}

impl TargetOrigin {
    /// Wire form as understood by the messaging layer.
    pub fn as_str(&self) -> &str {
        match self {
            TargetOrigin::Any => "*",
            TargetOrigin::Origin(origin) => origin,
        }
    }
}

/// Which senders may command this window.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InboundPolicy {
    /// Accept traffic from any window holding a reference to this one.
    #[default]
    AcceptAny,
    /// Accept only the listed origins. Traffic that reports no origin is
    /// rejected.
    AllowList(Vec<String>),
}

/// Origin contract between this window and the embedding application.
///
/// The defaults keep the permissive behavior of a deployment where the
/// parent application owns the embedding: broadcast out, accept any sender
/// in. Embedders that know their parent's origin tighten both ends.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessagingPolicy {
    pub target_origin: TargetOrigin,
    pub inbound: InboundPolicy,
}

impl MessagingPolicy {
    pub fn accepts_origin(&self, origin: Option<&str>) -> bool {
        match &self.inbound {
            InboundPolicy::AcceptAny => true,
            InboundPolicy::AllowList(allowed) => {
                origin.is_some_and(|origin| allowed.iter().any(|entry| entry == origin))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{InboundPolicy, MessagingPolicy, TargetOrigin};

    #[test]
    fn default_policy_is_permissive() {
        let policy = MessagingPolicy::default();
        assert_eq!(policy.target_origin.as_str(), "*");
        assert!(policy.accepts_origin(Some("https://anything.example")));
        assert!(policy.accepts_origin(None));
    }

    #[test]
    fn allow_list_filters_origins() {
        let policy = MessagingPolicy {
            target_origin: TargetOrigin::Origin("https://parent.example".to_string()),
            inbound: InboundPolicy::AllowList(vec!["https://parent.example".to_string()]),
        };

        assert_eq!(policy.target_origin.as_str(), "https://parent.example");
        assert!(policy.accepts_origin(Some("https://parent.example")));
        assert!(!policy.accepts_origin(Some("https://other.example")));
        assert!(!policy.accepts_origin(None));
    }
}
