mod connection_table;
mod event_sink;
mod ws_handler;

pub use connection_table::*;
pub use event_sink::*;
pub use ws_handler::*;
