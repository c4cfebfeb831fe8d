use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("room id must not be empty")]
    EmptyRoomId,

    #[error("user id must not be empty")]
    EmptyUserId,

    #[error("stroke must carry a `points` array")]
    StrokeWithoutPoints,
}
