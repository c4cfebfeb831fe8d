mod fan_out;
mod signaling_relay;
mod state_broadcaster;

pub(crate) use fan_out::fan_out;
pub use fan_out::FanOutReport;
pub use signaling_relay::*;
pub use state_broadcaster::*;
