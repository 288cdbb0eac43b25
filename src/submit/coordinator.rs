//! Turns a record into exactly one submission attempt and a user-facing outcome

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use super::traits::SubmitTransport;
use crate::error::SubmitError;
use crate::state::{FormRecord, Severity};

pub const SUCCESS_MESSAGE: &str = "Demo request submitted successfully!";
pub const FAILURE_MESSAGE: &str = "Submission failed. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again later.";

/// Result of a submission attempt, phrased for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Failure(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Success(message) | Outcome::Failure(message) => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn severity(&self) -> Severity {
        match self {
            Outcome::Success(_) => Severity::Success,
            Outcome::Failure(_) => Severity::Error,
        }
    }
}

/// Sends snapshots through a transport and maps every result to an [`Outcome`]
#[derive(Clone)]
pub struct SubmissionCoordinator {
    transport: Arc<dyn SubmitTransport>,
    attempts: Arc<AtomicU32>,
}

impl SubmissionCoordinator {
    pub fn new(transport: Arc<dyn SubmitTransport>) -> Self {
        Self {
            transport,
            attempts: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Submissions started so far
    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::Relaxed)
    }

    /// Submit `record` once. Transport and decoding failures come back as
    /// [`Outcome::Failure`], never as an error.
    pub async fn submit(&self, record: &FormRecord) -> Outcome {
        // Field values stay out of the logs
        let attempt = self.attempts.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(attempt, "submitting demo request");

        match self.transport.send(record).await {
            Ok(response) if response.success => {
                tracing::info!("demo request accepted");
                let message = non_empty(response.message).unwrap_or_else(|| SUCCESS_MESSAGE.into());
                Outcome::Success(message)
            }
            Ok(response) => {
                tracing::warn!(message = ?response.message, "demo request rejected by endpoint");
                let message = non_empty(response.message).unwrap_or_else(|| FAILURE_MESSAGE.into());
                Outcome::Failure(message)
            }
            Err(err @ (SubmitError::Network(_) | SubmitError::Client(_))) => {
                tracing::warn!(error = %err, "demo request could not be delivered");
                Outcome::Failure(NETWORK_ERROR_MESSAGE.into())
            }
            Err(err) => {
                tracing::warn!(error = %err, "demo request failed");
                Outcome::Failure(FAILURE_MESSAGE.into())
            }
        }
    }
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::YesNo;
    use crate::submit::{MockSubmitTransport, SubmitResponse};

    fn coordinator(mock: MockSubmitTransport) -> SubmissionCoordinator {
        SubmissionCoordinator::new(Arc::new(mock))
    }

    fn business_record() -> FormRecord {
        FormRecord {
            rent_equipment: Some(YesNo::Yes),
            bill_facilities: Some(YesNo::No),
            bill_insurance: Some(YesNo::Yes),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_success_uses_server_message() {
        let mut mock = MockSubmitTransport::new();
        mock.expect_send().times(1).returning(|_| {
            Ok(SubmitResponse {
                success: true,
                message: Some("See you soon".into()),
            })
        });

        let outcome = coordinator(mock).submit(&business_record()).await;
        assert_eq!(outcome, Outcome::Success("See you soon".into()));
        assert_eq!(outcome.severity(), Severity::Success);
    }

    #[tokio::test]
    async fn test_success_without_message_uses_default() {
        let mut mock = MockSubmitTransport::new();
        mock.expect_send().times(1).returning(|_| {
            Ok(SubmitResponse {
                success: true,
                message: None,
            })
        });

        let outcome = coordinator(mock).submit(&business_record()).await;
        assert_eq!(outcome, Outcome::Success(SUCCESS_MESSAGE.into()));
    }

    #[tokio::test]
    async fn test_sends_the_full_record() {
        let mut mock = MockSubmitTransport::new();
        mock.expect_send()
            .withf(|record| {
                record.rent_equipment == Some(YesNo::Yes)
                    && record.bill_facilities == Some(YesNo::No)
                    && record.bill_insurance == Some(YesNo::Yes)
            })
            .times(1)
            .returning(|_| {
                Ok(SubmitResponse {
                    success: true,
                    message: None,
                })
            });

        let outcome = coordinator(mock).submit(&business_record()).await;
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_rejection_uses_server_message_or_default() {
        let mut mock = MockSubmitTransport::new();
        mock.expect_send().times(1).returning(|_| {
            Ok(SubmitResponse {
                success: false,
                message: Some("Duplicate request".into()),
            })
        });
        let outcome = coordinator(mock).submit(&business_record()).await;
        assert_eq!(outcome, Outcome::Failure("Duplicate request".into()));

        let mut mock = MockSubmitTransport::new();
        mock.expect_send().times(1).returning(|_| {
            Ok(SubmitResponse {
                success: false,
                message: Some("  ".into()),
            })
        });
        let outcome = coordinator(mock).submit(&business_record()).await;
        assert_eq!(outcome, Outcome::Failure(FAILURE_MESSAGE.into()));
    }

    #[tokio::test]
    async fn test_status_and_malformed_map_to_generic_failure() {
        let errors: [fn() -> SubmitError; 2] = [
            || SubmitError::Status(503),
            || SubmitError::Malformed("expected value".into()),
        ];
        for error in errors {
            let mut mock = MockSubmitTransport::new();
            mock.expect_send().times(1).returning(move |_| Err(error()));
            let outcome = coordinator(mock).submit(&business_record()).await;
            assert_eq!(outcome, Outcome::Failure(FAILURE_MESSAGE.into()));
            assert_eq!(outcome.severity(), Severity::Error);
        }
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_logs_attempt_number_without_field_values() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut mock = MockSubmitTransport::new();
        mock.expect_send().times(2).returning(|_| {
            Ok(SubmitResponse {
                success: false,
                message: Some("Rejected".into()),
            })
        });
        let coordinator = coordinator(mock);
        let record = FormRecord {
            company_name: "Acme Medical".into(),
            work_email: "ada@acme.test".into(),
            ..business_record()
        };
        coordinator.submit(&record).await;
        coordinator.submit(&record).await;

        assert_eq!(coordinator.attempts(), 2);
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("attempt=1"));
        assert!(output.contains("attempt=2"));
        assert!(!output.contains("Acme Medical"));
        assert!(!output.contains("ada@acme.test"));
    }

    #[tokio::test]
    async fn test_network_failure_maps_to_network_message() {
        // An unroutable scheme produces a real reqwest::Error without touching the network
        let error = reqwest::Client::new()
            .get("notascheme://nowhere")
            .send()
            .await
            .unwrap_err();

        let mut mock = MockSubmitTransport::new();
        let mut error = Some(error);
        mock.expect_send()
            .times(1)
            .returning(move |_| Err(SubmitError::Network(error.take().unwrap())));

        let outcome = coordinator(mock).submit(&business_record()).await;
        assert_eq!(outcome, Outcome::Failure(NETWORK_ERROR_MESSAGE.into()));
        assert!(!outcome.message().is_empty());
    }
}
