pub const SERVER_ADDRESS: &str = "0.0.0.0";
pub const SERVER_PORT: u16 = 8080;

/// Pending requests the deck manager will buffer before senders wait.
pub const COMMAND_CHANNEL_CAPACITY: usize = 256;

pub const FULL_DECK_SIZE: usize = 52;
