//! Form submission backend

mod client;
mod traits;

pub use client::HttpFormBackend;
pub use traits::{FormBackend, SubmitError, SubmitReceipt, SubmitRequest};

#[cfg(test)]
pub use traits::MockFormBackend;
