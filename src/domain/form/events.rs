//! Form domain events.

use serde::{Deserialize, Serialize};

use super::SectionSelection;
use crate::domain::foundation::{EventId, FormId, Timestamp};
use crate::domain_event;

/// Published when a form has been built from a trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormRendered {
    pub event_id: EventId,
    pub form_id: FormId,
    pub section_count: usize,
    pub multiselect: bool,
    pub total_max_select: Option<u32>,
    pub rendered_at: Timestamp,
}

domain_event!(
    FormRendered,
    event_type = "form.rendered.v1",
    schema_version = 1,
    aggregate_id = form_id,
    aggregate_type = "Form",
    occurred_at = rendered_at,
    event_id = event_id
);

/// Published when a single-select form reports its choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionChosen {
    pub event_id: EventId,
    pub form_id: FormId,
    pub section: String,
    pub option: String,
    pub chosen_at: Timestamp,
}

domain_event!(
    OptionChosen,
    event_type = "form.option_chosen.v1",
    schema_version = 1,
    aggregate_id = form_id,
    aggregate_type = "Form",
    occurred_at = chosen_at,
    event_id = event_id
);

/// Published when a submit button sent the selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSubmitted {
    pub event_id: EventId,
    pub form_id: FormId,
    pub button_text: String,
    pub selections: Vec<SectionSelection>,
    pub payload: String,
    pub submitted_at: Timestamp,
}

domain_event!(
    FormSubmitted,
    event_type = "form.submitted.v1",
    schema_version = 1,
    aggregate_id = form_id,
    aggregate_type = "Form",
    occurred_at = submitted_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SerializableDomainEvent;

    #[test]
    fn submitted_event_envelope_carries_payload() {
        let form_id = FormId::new();
        let event = FormSubmitted {
            event_id: EventId::new(),
            form_id,
            button_text: "Valider".to_string(),
            selections: vec![],
            payload: "Valider - Sélections: []".to_string(),
            submitted_at: Timestamp::now(),
        };

        let envelope = event.to_envelope().unwrap();

        assert_eq!(envelope.event_type, "form.submitted.v1");
        assert_eq!(envelope.aggregate_type, "Form");
        assert_eq!(envelope.aggregate_id, form_id.to_string());
        assert_eq!(envelope.payload["button_text"], "Valider");
    }

    #[test]
    fn option_chosen_round_trips_through_envelope() {
        let event = OptionChosen {
            event_id: EventId::new(),
            form_id: FormId::new(),
            section: "Budget".to_string(),
            option: "10k".to_string(),
            chosen_at: Timestamp::now(),
        };

        let decoded: OptionChosen = event.to_envelope().unwrap().payload_as().unwrap();
        assert_eq!(decoded, event);
    }
}
