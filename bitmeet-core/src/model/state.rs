use crate::model::stroke::Stroke;

/// Ephemeral collaborative state pushed by one member to the rest of its room.
/// There is no authoritative copy: the last writer wins at each receiver.
#[derive(Debug, Clone, PartialEq)]
pub enum StateUpdate {
    Code(String),
    Input(String),
    Output(String),
    Stroke(Stroke),
}

impl StateUpdate {
    pub fn kind(&self) -> &'static str {
        match self {
            StateUpdate::Code(_) => "code",
            StateUpdate::Input(_) => "input",
            StateUpdate::Output(_) => "output",
            StateUpdate::Stroke(_) => "stroke",
        }
    }
}
