use futures::future::{BoxFuture, FutureExt};
use mockall::mock;
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};

use crate::client::ComplaintTransport;
use crate::error::SubmitError;
use crate::models::complaint::ComplaintInput;
use crate::models::status::SubmitReceipt;

// Define a mock transport for the complaint service
mock! {
    pub Transport {}

    impl ComplaintTransport for Transport {
        fn send_complaint(
            &self,
            complaint: &ComplaintInput,
        ) -> BoxFuture<'static, Result<SubmitReceipt, SubmitError>>;
    }
}

/// Complaints the mock has been asked to deliver, in order.
#[derive(Default)]
pub struct SentComplaints {
    sent: Mutex<Vec<ComplaintInput>>,
}

impl SentComplaints {
    pub fn record(&self, complaint: &ComplaintInput) {
        self.sent.lock().unwrap().push(complaint.clone());
    }

    pub fn all(&self) -> Vec<ComplaintInput> {
        self.sent.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

/// Mock transport whose service accepts every complaint with `message`.
pub fn accepting_transport(message: &str) -> (MockTransport, Arc<SentComplaints>) {
    let store = Arc::new(SentComplaints::default());
    let store_ref = Arc::clone(&store);
    let message = message.to_string();

    let mut transport = MockTransport::new();
    transport.expect_send_complaint().returning(move |complaint| {
        store_ref.record(complaint);
        let receipt = SubmitReceipt {
            message: message.clone(),
        };
        async move { Ok(receipt) }.boxed()
    });

    (transport, store)
}

/// Mock transport whose service answers every complaint with `status` and
/// an optional `{"error": ...}` body.
pub fn rejecting_transport(
    status: StatusCode,
    error: Option<&str>,
) -> (MockTransport, Arc<SentComplaints>) {
    let store = Arc::new(SentComplaints::default());
    let store_ref = Arc::clone(&store);
    let error = error.map(str::to_string);

    let mut transport = MockTransport::new();
    transport.expect_send_complaint().returning(move |complaint| {
        store_ref.record(complaint);
        let error = error.clone();
        async move { Err(SubmitError::Rejected { status, error }) }.boxed()
    });

    (transport, store)
}
