//! Submission controller for the complaint form.
//!
//! State lives in [`FormModel`] and only changes through [`update`], which
//! turns a [`Msg`] into a new state plus an optional [`Command`]. The
//! [`ComplaintForm`] driver executes the command against a
//! [`ComplaintTransport`] and feeds the outcome back in as another message,
//! so the whole validate → send → report → reset cycle can be exercised
//! without a network or a terminal.

use tracing::{debug, info, warn};

use crate::client::ComplaintTransport;
use crate::error::SubmitError;
use crate::models::complaint::{ComplaintInput, Field};
use crate::models::status::{StatusMessage, SubmitReceipt};
use crate::services::validation::{validate, ValidationErrors};

pub const FORM_TITLE: &str = "Submit Your Complaint";
pub const SUBMIT_LABEL: &str = "Submit Complaint";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const FALLBACK_ERROR: &str = "An unexpected error occurred. Please try again.";

/// Everything the form shows: field values, per-field errors, the status line
/// and whether a request is outstanding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormModel {
    pub input: ComplaintInput,
    pub errors: ValidationErrors,
    pub status: Option<StatusMessage>,
    pub in_flight: bool,
}

impl FormModel {
    pub fn can_submit(&self) -> bool {
        !self.in_flight
    }

    pub fn submit_label(&self) -> &'static str {
        if self.in_flight {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }
}

#[derive(Debug)]
pub enum Msg {
    FieldChanged(Field, String),
    Submit,
    SubmitCompleted(Result<SubmitReceipt, SubmitError>),
}

/// Side effects requested by [`update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(ComplaintInput),
}

/// Apply one message to the model.
pub fn update(model: &mut FormModel, msg: Msg) -> Option<Command> {
    match msg {
        Msg::FieldChanged(field, value) => {
            model.input.set(field, value);
            None
        }
        Msg::Submit => {
            if model.in_flight {
                debug!("Ignoring submit while a complaint is already in flight");
                return None;
            }

            model.status = None;
            model.errors = validate(&model.input);
            if !model.errors.is_empty() {
                debug!(
                    "Complaint blocked by validation: {:?}",
                    model.errors.fields().collect::<Vec<_>>()
                );
                return None;
            }

            model.in_flight = true;
            Some(Command::Send(model.input.clone()))
        }
        Msg::SubmitCompleted(result) => {
            match result {
                Ok(receipt) => {
                    model.status = (!receipt.message.is_empty())
                        .then(|| StatusMessage::success(receipt.message));
                    model.input.reset();
                }
                Err(err) => {
                    let text = err.server_message().unwrap_or(FALLBACK_ERROR).to_string();
                    model.status = Some(StatusMessage::error(text));
                }
            }
            model.in_flight = false;
            None
        }
    }
}

/// A complaint form bound to the transport that delivers it.
pub struct ComplaintForm<T> {
    model: FormModel,
    transport: T,
}

impl<T: ComplaintTransport> ComplaintForm<T> {
    pub fn new(transport: T) -> Self {
        Self {
            model: FormModel::default(),
            transport,
        }
    }

    pub fn model(&self) -> &FormModel {
        &self.model
    }

    /// Record a keystroke-level change to one field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        update(&mut self.model, Msg::FieldChanged(field, value.into()));
    }

    /// Validate and, if the input passes, send it and wait for the outcome.
    ///
    /// Returns the resulting status. `None` means validation blocked the
    /// submission (the per-field errors are then on the model), or the
    /// service accepted it without a message.
    pub async fn submit(&mut self) -> Option<&StatusMessage> {
        let Some(command) = update(&mut self.model, Msg::Submit) else {
            return self.model.status.as_ref();
        };

        let result = self.run_command(command).await;
        update(&mut self.model, Msg::SubmitCompleted(result));
        self.model.status.as_ref()
    }

    async fn run_command(&self, command: Command) -> Result<SubmitReceipt, SubmitError> {
        match command {
            Command::Send(complaint) => {
                info!("Submitting complaint");
                let result = self.transport.send_complaint(&complaint).await;
                match &result {
                    Ok(receipt) => info!("Complaint accepted: {}", receipt.message),
                    Err(err) => warn!("Complaint submission failed: {}", err),
                }
                result
            }
        }
    }
}

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;
