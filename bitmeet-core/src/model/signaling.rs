use serde_json::Value;

/// WebRTC handshake artifact relayed between the members of a room.
///
/// Payloads are kept as raw JSON: the relay never looks inside an SDP blob or
/// an ICE candidate descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    Offer(Value),
    Answer(Value),
    IceCandidate(Value),
}

impl Signal {
    pub fn kind(&self) -> &'static str {
        match self {
            Signal::Offer(_) => "offer",
            Signal::Answer(_) => "answer",
            Signal::IceCandidate(_) => "ice-candidate",
        }
    }
}
