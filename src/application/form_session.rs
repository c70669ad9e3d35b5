//! FormSession - Drives one rendered form.
//!
//! Renders the model from a `multi_select` trace, forwards user
//! interactions to it, and reports choices and submissions back to the
//! chat engine through the `ChatTransport` port.

use std::sync::Arc;

use serde_json::Value as JsonValue;

use super::Trace;
use crate::domain::form::{
    FormError, FormRendered, FormSubmitted, LayoutDefaults, OptionChosen, SelectionModel,
    SingleChoice, Submission, ToggleOutcome,
};
use crate::domain::foundation::{
    EventEnvelope, EventId, OptionId, SerializableDomainEvent, Timestamp,
};
use crate::ports::{ChatTransport, EventPublisher, InteractRequest};

/// Command to render a form from a trace payload.
#[derive(Debug, Clone)]
pub struct RenderFormCommand {
    pub payload: JsonValue,
    pub correlation_id: Option<String>,
}

impl RenderFormCommand {
    /// Accepts only `multi_select` traces that carry a payload.
    pub fn from_trace(trace: Trace) -> Option<Self> {
        if !trace.is_multi_select() {
            return None;
        }
        trace.payload.map(|payload| Self {
            payload,
            correlation_id: None,
        })
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }
}

/// One form, bound to the ports it reports through.
pub struct FormSession {
    model: SelectionModel,
    correlation_id: Option<String>,
    transport: Arc<dyn ChatTransport>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl FormSession {
    /// Builds the model and publishes `form.rendered.v1`.
    ///
    /// # Errors
    ///
    /// - `MalformedPayload` if the payload cannot be read as a form
    pub async fn render(
        cmd: RenderFormCommand,
        defaults: &LayoutDefaults,
        transport: Arc<dyn ChatTransport>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Result<Self, FormError> {
        let model = SelectionModel::from_payload(cmd.payload, defaults)?;
        let session = Self {
            model,
            correlation_id: cmd.correlation_id,
            transport,
            event_publisher,
        };

        let layout = session.model.layout();
        let event = FormRendered {
            event_id: EventId::new(),
            form_id: session.model.form_id(),
            section_count: layout.sections().len(),
            multiselect: layout.is_multiselect(),
            total_max_select: layout.total_max_select().limit(),
            rendered_at: Timestamp::now(),
        };
        tracing::info!(
            form_id = %event.form_id,
            sections = event.section_count,
            multiselect = event.multiselect,
            "Form rendered"
        );
        session.publish(event.to_envelope()?).await?;

        Ok(session)
    }

    pub fn model(&self) -> &SelectionModel {
        &self.model
    }

    /// Forwards a checkbox click to the model.
    ///
    /// A single-select choice is sent to the chat engine immediately.
    pub async fn toggle(&mut self, option: OptionId) -> Result<ToggleOutcome, FormError> {
        let outcome = self.model.toggle(option);
        match &outcome {
            ToggleOutcome::Applied { checked } => {
                tracing::debug!(
                    form_id = %self.model.form_id(),
                    option = %option,
                    checked = *checked,
                    total_count = self.model.total_count(),
                    disabled = self.model.disabled().len(),
                    "Constraints re-evaluated"
                );
            }
            ToggleOutcome::Chosen(choice) => self.report_choice(choice).await?,
            ToggleOutcome::Ignored(reason) => {
                tracing::debug!(
                    form_id = %self.model.form_id(),
                    option = %option,
                    reason = ?reason,
                    "Toggle ignored"
                );
            }
        }
        Ok(outcome)
    }

    /// Stores free text; returns whether it was accepted.
    pub fn set_free_text(&mut self, option: OptionId, value: impl Into<String>) -> bool {
        self.model.set_free_text(option, value)
    }

    /// Submits through the button at `button_index` and sends the payload.
    ///
    /// The form stays finalized when delivery fails.
    pub async fn submit(&mut self, button_index: usize) -> Result<Submission, FormError> {
        let submission = self.model.submit(button_index)?;
        tracing::info!(
            form_id = %self.model.form_id(),
            button = %submission.button_text,
            sections = submission.snapshot.sections().len(),
            "Form submitted"
        );

        self.send(InteractRequest::from(submission.payload.clone()))
            .await?;

        let event = FormSubmitted {
            event_id: EventId::new(),
            form_id: self.model.form_id(),
            button_text: submission.button_text.clone(),
            selections: submission.snapshot.sections().to_vec(),
            payload: submission.payload.as_str().to_string(),
            submitted_at: Timestamp::now(),
        };
        self.publish(event.to_envelope()?).await?;

        Ok(submission)
    }

    async fn report_choice(&self, choice: &SingleChoice) -> Result<(), FormError> {
        tracing::info!(
            form_id = %self.model.form_id(),
            section = %choice.section,
            option = %choice.name(),
            "Option chosen"
        );
        self.send(InteractRequest::from(choice.payload())).await?;

        let event = OptionChosen {
            event_id: EventId::new(),
            form_id: self.model.form_id(),
            section: choice.section.clone(),
            option: choice.name().to_string(),
            chosen_at: Timestamp::now(),
        };
        self.publish(event.to_envelope()?).await
    }

    async fn send(&self, request: InteractRequest) -> Result<(), FormError> {
        self.transport.interact(request).await.map_err(|e| {
            tracing::warn!(
                form_id = %self.model.form_id(),
                code = %e.code,
                error = %e.message,
                "Interaction not delivered"
            );
            FormError::Transport(e)
        })
    }

    async fn publish(&self, envelope: EventEnvelope) -> Result<(), FormError> {
        let envelope = match &self.correlation_id {
            Some(id) => envelope.with_correlation_id(id.clone()),
            None => envelope,
        };
        self.event_publisher.publish(envelope).await?;
        Ok(())
    }
}
