//! Inbound form configuration as supplied by the chat host.
//!
//! These DTOs mirror the trace payload field-for-field (camelCase keys).
//! They are deliberately lenient: a field that is missing, `null` or of
//! the wrong JSON type takes its default, and unknown keys are ignored.
//! Only a non-object payload or a non-array `sections` is refused. The
//! validated structure is built from them by `FormLayout::from_descriptor`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use super::SelectionCap;

/// Top-level payload of a `multi_select` trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDescriptor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: Vec<SectionDescriptor>,

    #[serde(default, deserialize_with = "lenient")]
    pub buttons: Vec<ButtonDescriptor>,

    #[serde(default = "default_button_color", deserialize_with = "lenient_button_color")]
    pub button_color: String,

    #[serde(default = "default_text_color", deserialize_with = "lenient_text_color")]
    pub text_color: String,

    #[serde(
        default = "default_background_opacity",
        deserialize_with = "lenient_background_opacity"
    )]
    pub background_opacity: f64,

    /// Radio group discriminator, presentation only.
    #[serde(default = "default_index", deserialize_with = "lenient_index")]
    pub index: i64,

    /// Global cap; `None` means "use the configured default".
    #[serde(default, deserialize_with = "lenient")]
    pub total_max_select: Option<f64>,

    #[serde(default = "default_multiselect", deserialize_with = "lenient_multiselect")]
    pub multiselect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDescriptor {
    /// Host-side identifier, carried through untouched.
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub label: String,

    #[serde(default, deserialize_with = "lenient")]
    pub color: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub max_select: Option<f64>,

    #[serde(default, deserialize_with = "lenient")]
    pub options: Vec<OptionDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDescriptor {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient")]
    pub action: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub label: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonDescriptor {
    #[serde(default, deserialize_with = "lenient")]
    pub text: String,
}

impl FormDescriptor {
    /// Parses a trace payload; anything but a JSON object is refused.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        if !value.is_object() {
            return Err(serde::de::Error::custom("form payload must be a JSON object"));
        }
        serde_json::from_value(value)
    }

    /// Resolves the global cap against the configured default.
    pub fn total_cap(&self, default_total: u32) -> SelectionCap {
        match self.total_max_select {
            Some(raw) => SelectionCap::from_raw(whole(raw)),
            None => SelectionCap::from_raw(Some(i64::from(default_total))),
        }
    }
}

impl SectionDescriptor {
    pub fn cap(&self) -> SelectionCap {
        SelectionCap::from_raw(self.max_select.and_then(whole))
    }
}

fn whole(raw: f64) -> Option<i64> {
    raw.is_finite().then(|| raw.floor() as i64)
}

/// `null` becomes the default; any other shape must still match `T`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts any JSON value, keeping it only if it has the expected shape.
fn lenient_or<'de, D, T>(deserializer: D, fallback: fn() -> T) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_else(|_| fallback()))
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    lenient_or(deserializer, T::default)
}

fn lenient_button_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    lenient_or(deserializer, default_button_color)
}

fn lenient_text_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    lenient_or(deserializer, default_text_color)
}

fn lenient_background_opacity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    lenient_or(deserializer, default_background_opacity)
}

fn lenient_index<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    lenient_or(deserializer, default_index)
}

fn lenient_multiselect<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    lenient_or(deserializer, default_multiselect)
}

fn default_button_color() -> String {
    "#4CAF50".to_string()
}

fn default_text_color() -> String {
    "#0000FF".to_string()
}

fn default_background_opacity() -> f64 {
    0.3
}

fn default_index() -> i64 {
    1
}

fn default_multiselect() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_takes_every_default() {
        let descriptor = FormDescriptor::from_value(json!({})).unwrap();

        assert!(descriptor.sections.is_empty());
        assert!(descriptor.buttons.is_empty());
        assert_eq!(descriptor.button_color, "#4CAF50");
        assert_eq!(descriptor.text_color, "#0000FF");
        assert_eq!(descriptor.background_opacity, 0.3);
        assert_eq!(descriptor.index, 1);
        assert!(descriptor.multiselect);
        assert_eq!(descriptor.total_cap(6), SelectionCap::Bounded(6));
    }

    #[test]
    fn parses_camel_case_payload() {
        let descriptor = FormDescriptor::from_value(json!({
            "sections": [{
                "label": "Marchés",
                "color": "#eee",
                "maxSelect": 2,
                "options": [
                    {"name": "Tous", "action": "all"},
                    {"name": "Retail"},
                    {"name": "Autre", "action": "user_input", "label": "Précisez", "placeholder": "..."}
                ]
            }],
            "buttons": [{"text": "Valider"}],
            "totalMaxSelect": 4,
            "multiselect": false
        }))
        .unwrap();

        assert_eq!(descriptor.sections.len(), 1);
        let section = &descriptor.sections[0];
        assert_eq!(section.cap(), SelectionCap::Bounded(2));
        assert_eq!(section.options[0].action.as_deref(), Some("all"));
        assert_eq!(section.options[1].action, None);
        assert_eq!(section.options[2].label.as_deref(), Some("Précisez"));
        assert_eq!(descriptor.buttons[0].text, "Valider");
        assert_eq!(descriptor.total_cap(6), SelectionCap::Bounded(4));
        assert!(!descriptor.multiselect);
    }

    #[test]
    fn arrays_are_not_forms() {
        assert!(FormDescriptor::from_value(json!([])).is_err());
        assert!(FormDescriptor::from_value(json!(null)).is_err());
    }

    #[test]
    fn null_lists_degrade_to_empty() {
        let descriptor = FormDescriptor::from_value(json!({
            "sections": [{"label": "A", "options": null}],
            "buttons": null
        }))
        .unwrap();

        assert!(descriptor.sections[0].options.is_empty());
        assert!(descriptor.buttons.is_empty());
    }

    #[test]
    fn non_positive_caps_are_unbounded() {
        let descriptor = FormDescriptor::from_value(json!({
            "sections": [{"label": "A", "maxSelect": 0}, {"label": "B"}],
            "totalMaxSelect": 0
        }))
        .unwrap();

        assert_eq!(descriptor.sections[0].cap(), SelectionCap::Unbounded);
        assert_eq!(descriptor.sections[1].cap(), SelectionCap::Unbounded);
        assert_eq!(descriptor.total_cap(6), SelectionCap::Unbounded);
    }

    #[test]
    fn fractional_caps_round_down() {
        let descriptor = FormDescriptor::from_value(json!({
            "sections": [{"label": "A", "maxSelect": 2.7}]
        }))
        .unwrap();

        assert_eq!(descriptor.sections[0].cap(), SelectionCap::Bounded(2));
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(FormDescriptor::from_value(json!("multi")).is_err());
        assert!(FormDescriptor::from_value(json!({"sections": "nope"})).is_err());
    }

    #[test]
    fn malformed_scalars_fall_back_to_defaults() {
        let descriptor = FormDescriptor::from_value(json!({
            "sections": [{
                "id": 7,
                "label": null,
                "color": 12,
                "maxSelect": "two",
                "options": [{"name": null, "action": ["all"]}, {"name": "X"}]
            }],
            "buttons": [{"text": false}],
            "buttonColor": null,
            "textColor": {"r": 0},
            "backgroundOpacity": "half",
            "index": "2",
            "totalMaxSelect": "four",
            "multiselect": "yes"
        }))
        .unwrap();

        let section = &descriptor.sections[0];
        assert_eq!(section.id, None);
        assert_eq!(section.label, "");
        assert_eq!(section.color, None);
        assert_eq!(section.cap(), SelectionCap::Unbounded);
        assert_eq!(section.options[0].name, "");
        assert_eq!(section.options[0].action, None);
        assert_eq!(section.options[1].name, "X");
        assert_eq!(descriptor.buttons[0].text, "");
        assert_eq!(descriptor.button_color, "#4CAF50");
        assert_eq!(descriptor.text_color, "#0000FF");
        assert_eq!(descriptor.background_opacity, 0.3);
        assert_eq!(descriptor.index, 1);
        assert_eq!(descriptor.total_cap(6), SelectionCap::Bounded(6));
        assert!(descriptor.multiselect);
    }

    #[test]
    fn section_id_is_kept() {
        let descriptor = FormDescriptor::from_value(json!({
            "sections": [{"id": "markets", "label": "A"}, {"label": "B"}]
        }))
        .unwrap();

        assert_eq!(descriptor.sections[0].id.as_deref(), Some("markets"));
        assert_eq!(descriptor.sections[1].id, None);
    }
}
