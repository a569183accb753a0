//! The game record as exchanged with the backend.

use serde::{Deserialize, Deserializer, Serialize};

/// Editable fields of a game record.
///
/// This is also the request body for create and update: the identifier
/// travels in the resource path, never in the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFields {
    #[serde(default, deserialize_with = "lenient_string")]
    pub nome: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub descricao: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub foto: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cover: String,
    #[serde(rename = "generoId", default, deserialize_with = "lenient_string")]
    pub genero_id: String,
}

/// A record as returned by `GET jogos/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: GameFields,
}

// ---------------------------------------------------------------------------
// Lenient decoding
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    // Beyond `i64::MAX`; must precede `Float` to keep every digit.
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Int(n) => n.to_string(),
            Scalar::UInt(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// Accept a string, a number, or `null` (which becomes `""`).
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(Scalar::into_string).unwrap_or_default())
}

/// Like [`lenient_string`], but `null` and `""` mean "no identifier".
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(Scalar::into_string).filter(|id| !id.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_empty() {
        let fields = GameFields::default();
        assert_eq!(fields.nome, "");
        assert_eq!(fields.descricao, "");
        assert_eq!(fields.foto, "");
        assert_eq!(fields.cover, "");
        assert_eq!(fields.genero_id, "");
    }

    #[test]
    fn decodes_backend_record() {
        let json = r#"{"id":"42","nome":"Chess","descricao":"d","foto":"f.png","cover":"c.png","generoId":"3"}"#;
        let record: GameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_deref(), Some("42"));
        assert_eq!(record.fields.nome, "Chess");
        assert_eq!(record.fields.descricao, "d");
        assert_eq!(record.fields.foto, "f.png");
        assert_eq!(record.fields.cover, "c.png");
        assert_eq!(record.fields.genero_id, "3");
    }

    #[test]
    fn numeric_ids_become_strings() {
        let json = r#"{"id":7,"nome":"Go","generoId":12}"#;
        let record: GameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_deref(), Some("7"));
        assert_eq!(record.fields.genero_id, "12");
    }

    #[test]
    fn ids_past_i64_keep_every_digit() {
        let json = r#"{"id":18446744073709551615,"generoId":9223372036854775808}"#;
        let record: GameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_deref(), Some("18446744073709551615"));
        assert_eq!(record.fields.genero_id, "9223372036854775808");
    }

    #[test]
    fn missing_and_null_fields_are_empty_strings() {
        let json = r#"{"id":"1","nome":null}"#;
        let record: GameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.fields, GameFields::default());
    }

    #[test]
    fn payload_has_exactly_the_five_fields() {
        let fields = GameFields {
            nome: "X".into(),
            descricao: "Y".into(),
            foto: String::new(),
            cover: String::new(),
            genero_id: "1".into(),
        };
        let value = serde_json::to_value(&fields).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "nome": "X",
                "descricao": "Y",
                "foto": "",
                "cover": "",
                "generoId": "1",
            })
        );
    }

    #[test]
    fn record_without_id_omits_it() {
        let value = serde_json::to_value(GameRecord::default()).unwrap();
        assert!(value.get("id").is_none());
    }
}
