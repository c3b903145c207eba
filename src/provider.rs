// src/provider.rs
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::labour::Labour;

/// Opaque provider id. Freshly generated ids are random v4 UUIDs; ids read
/// back from the store are kept verbatim whatever their shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProviderId {
    fn from(s: &str) -> Self {
        Self(s!(s))
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered provider. Immutable once written to the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: ProviderId,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub labour: Labour,
    pub state: String,
    pub lga: String,
    #[serde(default)]
    pub desc: String,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Provider {
    /// "Plumber • Lagos, Ikeja"
    pub fn meta_line(&self) -> String {
        let mut line = join!(self.labour.label(), " • ", &self.state);
        if !self.lga.is_empty() {
            line.push_str(", ");
            line.push_str(&self.lga);
        }
        line
    }

    pub fn location(&self) -> String {
        if self.lga.is_empty() {
            self.state.clone()
        } else {
            join!(&self.state, ", ", &self.lga)
        }
    }

    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }

    pub fn tel_uri(&self) -> String {
        join!("tel:", &self.phone)
    }

    pub fn mailto_uri(&self) -> Option<String> {
        self.has_email().then(|| join!("mailto:", &self.email))
    }
}

/// `createdAt` as `2024-05-01T09:30:00.123Z`, the browser `toISOString` shape.
/// Any RFC 3339 timestamp is accepted on read.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(de)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Provider {
        Provider {
            id: ProviderId::from("lq2x9a"),
            name: s!("Ade"),
            phone: s!("08012345678"),
            email: s!(),
            labour: Labour::Plumber,
            state: s!("Lagos"),
            lga: s!("Ikeja"),
            desc: s!(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn wire_format_matches_browser_records() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "lq2x9a");
        assert_eq!(json["labour"], "Plumber");
        assert_eq!(json["createdAt"], "2024-05-01T09:30:00.000Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn reads_records_without_optional_fields() {
        let raw = r#"{"id":"a1","name":"Bola","phone":"0803 000 0000","labour":"Tiler",
                      "state":"Oyo","lga":"Ibadan North","createdAt":"2023-11-02T10:00:00.5Z"}"#;
        let p: Provider = serde_json::from_str(raw).unwrap();
        assert_eq!(p.email, "");
        assert_eq!(p.desc, "");
        assert_eq!(p.labour, Labour::Tiler);
    }

    #[test]
    fn display_lines() {
        let mut p = sample();
        assert_eq!(p.meta_line(), "Plumber • Lagos, Ikeja");
        assert_eq!(p.location(), "Lagos, Ikeja");
        assert_eq!(p.tel_uri(), "tel:08012345678");
        assert_eq!(p.mailto_uri(), None);
        p.email = s!("ade@example.com");
        assert_eq!(p.mailto_uri().as_deref(), Some("mailto:ade@example.com"));
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(ProviderId::generate(), ProviderId::generate());
    }
}
