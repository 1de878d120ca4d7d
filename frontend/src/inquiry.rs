use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Contact form payload. Serialized verbatim as the relay request body.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub institution: String,
    pub contact_email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InquiryField {
    Name,
    Institution,
    ContactEmail,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown inquiry field `{0}`")]
pub struct UnknownField(pub String);

impl InquiryField {
    pub const ALL: [InquiryField; 4] = [
        InquiryField::Name,
        InquiryField::Institution,
        InquiryField::ContactEmail,
        InquiryField::Message,
    ];

    /// Matches the `name` attribute of the form input and the JSON key.
    pub fn as_str(self) -> &'static str {
        match self {
            InquiryField::Name => "name",
            InquiryField::Institution => "institution",
            InquiryField::ContactEmail => "contact_email",
            InquiryField::Message => "message",
        }
    }
}

impl fmt::Display for InquiryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InquiryField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl Inquiry {
    pub fn get(&self, field: InquiryField) -> &str {
        match field {
            InquiryField::Name => &self.name,
            InquiryField::Institution => &self.institution,
            InquiryField::ContactEmail => &self.contact_email,
            InquiryField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: InquiryField, value: String) {
        let slot = match field {
            InquiryField::Name => &mut self.name,
            InquiryField::Institution => &mut self.institution,
            InquiryField::ContactEmail => &mut self.contact_email,
            InquiryField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn clear(&mut self) {
        *self = Inquiry::default();
    }

    pub fn is_empty(&self) -> bool {
        InquiryField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn field_names_round_trip_through_input_names() {
        for field in InquiryField::ALL {
            assert_eq!(field.as_str().parse::<InquiryField>(), Ok(field));
        }
    }

    #[test]
    fn unknown_input_name_is_rejected() {
        let err = "email".parse::<InquiryField>().unwrap_err();
        assert_eq!(err, UnknownField("email".to_string()));
        assert_eq!(err.to_string(), "unknown inquiry field `email`");
    }

    #[test]
    fn json_body_uses_the_four_form_keys() {
        let inquiry = Inquiry {
            name: "Jane Doe".into(),
            institution: "Acme U".into(),
            contact_email: "jane@acme.edu".into(),
            message: "Interested in LMS rollout".into(),
        };
        let value = serde_json::to_value(&inquiry).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["contact_email", "institution", "message", "name"]);
        assert_eq!(object["contact_email"], "jane@acme.edu");
    }

    #[test]
    fn clear_empties_every_field() {
        let mut inquiry = Inquiry::default();
        for field in InquiryField::ALL {
            inquiry.set(field, "x".into());
        }
        assert!(!inquiry.is_empty());
        inquiry.clear();
        assert!(inquiry.is_empty());
        assert_eq!(inquiry, Inquiry::default());
    }

    fn field_strategy() -> impl Strategy<Value = InquiryField> {
        prop::sample::select(InquiryField::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn last_write_wins_per_field(
            edits in prop::collection::vec((field_strategy(), ".{0,12}"), 0..40)
        ) {
            let mut inquiry = Inquiry::default();
            for (field, value) in &edits {
                inquiry.set(*field, value.clone());
            }
            for field in InquiryField::ALL {
                let expected = edits
                    .iter()
                    .rev()
                    .find(|(edited, _)| *edited == field)
                    .map(|(_, value)| value.as_str())
                    .unwrap_or("");
                prop_assert_eq!(inquiry.get(field), expected);
            }
        }
    }
}
