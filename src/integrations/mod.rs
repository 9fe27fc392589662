pub mod tickets;

pub use tickets::{ApiError, TicketApi, TicketClient};
