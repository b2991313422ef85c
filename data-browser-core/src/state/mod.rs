//! Per-dataset state: view parameters, fetch lifecycle and the session that owns both.

mod fetch_state;
mod session;
mod view_state;

pub use fetch_state::{FetchState, FetchTicket, Resolution};
pub use session::{Applied, BrowserSession};
pub use view_state::{FetchIntent, Transition, ViewState};
