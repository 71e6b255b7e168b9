//! Quote domain: customer modes, line items and the service client.

mod client;
mod item;
mod mode;

pub use client::QuoteClient;
pub use item::{QuoteItem, checked_subtotal, format_rand, subtotal};
pub use mode::{MODES, Mode, print_modes};
