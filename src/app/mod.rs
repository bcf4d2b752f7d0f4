//! Application layer: session state machine and the workflow around it

mod session;
mod workflow;

pub use session::{Phase, Session, CANCELLED_MESSAGE};
pub use workflow::QuoteApp;
