pub mod helpers;

pub use helpers::*;
pub use recording_sink::*;
pub use test_client::*;
