use serde::{Deserialize, Serialize};

/// The body returned by the backend when a request fails
///
/// Depending on the route the backend reports the failure under `message` or `error`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    #[serde(default)]
    pub message: Option<String>,
    /// Alternative field used by some routes for the error message
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorDto {
    /// Returns whichever error message the backend provided, preferring `message`
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error).filter(|m| !m.trim().is_empty())
    }
}

/// Envelope wrapping every collection response as `{ "data": [...] }`
///
/// A missing `data` field decodes as an empty list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Envelope for the contracts-by-project route, `{ "contracts": [...] }`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContractsEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub contracts: Vec<T>,
}

/// A foreign key that the backend either leaves as an id or populates with the referenced record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference<T> {
    Populated(T),
    Id(String),
}

impl<T> Reference<T> {
    /// Returns the populated record, if the backend expanded the reference
    pub fn populated(&self) -> Option<&T> {
        match self {
            Self::Populated(record) => Some(record),
            Self::Id(_) => None,
        }
    }
}

/// A reference to a user embedded in another record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRefDto {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "userName", default)]
    pub user_name: String,
    #[serde(default)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_data_decodes_as_empty() {
        let envelope: DataEnvelope<UserRefDto> = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn reference_accepts_id_or_record() {
        let id: Reference<UserRefDto> = serde_json::from_str(r#""64f0c2""#).unwrap();
        assert_eq!(id, Reference::Id("64f0c2".to_string()));
        assert!(id.populated().is_none());

        let populated: Reference<UserRefDto> =
            serde_json::from_str(r#"{"_id":"u1","userName":"amir","email":"a@b.pk"}"#).unwrap();
        assert_eq!(populated.populated().map(|u| u.user_name.as_str()), Some("amir"));
    }

    #[test]
    fn error_prefers_message_over_error() {
        let dto: ErrorDto =
            serde_json::from_str(r#"{"message":"Invalid credentials","error":"x"}"#).unwrap();
        assert_eq!(dto.into_message().as_deref(), Some("Invalid credentials"));

        let dto: ErrorDto = serde_json::from_str(r#"{"error":"Not found"}"#).unwrap();
        assert_eq!(dto.into_message().as_deref(), Some("Not found"));

        let dto: ErrorDto = serde_json::from_str(r#"{"message":"  "}"#).unwrap();
        assert_eq!(dto.into_message(), None);
    }
}
