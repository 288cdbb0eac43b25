//! Submission of the finished record to the backend

mod client;
mod coordinator;
mod traits;

pub use client::{HttpTransport, DEFAULT_ENDPOINT};
pub use coordinator::{
    Outcome, SubmissionCoordinator, FAILURE_MESSAGE, NETWORK_ERROR_MESSAGE, SUCCESS_MESSAGE,
};
pub use traits::{SubmitResponse, SubmitTransport};

#[cfg(test)]
pub use traits::MockSubmitTransport;
