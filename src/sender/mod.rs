//! Delivery backend module

mod simulated;
mod traits;

pub use simulated::SimulatedSender;
pub use traits::{ContactSender, SendError};

#[cfg(test)]
pub use traits::MockContactSender;
