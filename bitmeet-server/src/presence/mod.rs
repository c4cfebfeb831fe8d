mod presence_coordinator;

pub use presence_coordinator::*;
