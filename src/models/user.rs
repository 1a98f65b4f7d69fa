use mongodb::bson::{oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Collection holding user documents.
pub const USERS_COLLECTION: &str = "users";

/// Request body of `POST /users`.
///
/// Any JSON object is accepted as-is, except that `_id` is reserved for the
/// identifier assigned by the store. The body is converted to BSON here so a
/// value the database cannot represent is rejected at the entry point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct NewUser {
    document: Document,
}

impl NewUser {
    /// Document to insert, with `id` set as its `_id`.
    pub fn into_document(self, id: ObjectId) -> Document {
        let mut document = Document::new();
        document.insert("_id", id);
        for (key, value) in self.document {
            document.insert(key, value);
        }
        document
    }
}

impl TryFrom<Value> for NewUser {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(format!(
                    "user must be a JSON object, got {}",
                    json_type_name(&other)
                ))
            }
        };

        if fields.contains_key("_id") {
            return Err("_id is assigned by the server and must not be sent".to_string());
        }

        let document = json_object_to_document(fields)?;

        Ok(Self { document })
    }
}

/// Field-by-field conversion. Objects shaped like Extended JSON (`$date`,
/// `$numberLong`, ...) stay plain sub-documents so the body is kept verbatim.
fn json_object_to_document(fields: Map<String, Value>) -> Result<Document, String> {
    let mut document = Document::new();
    for (key, value) in fields {
        let value = json_to_bson(value).map_err(|e| format!("field '{}': {}", key, e))?;
        document.insert(key, value);
    }
    Ok(document)
}

fn json_to_bson(value: Value) -> Result<Bson, String> {
    Ok(match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(b),
        Value::String(s) => Bson::String(s),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Bson::Int64(i)
            } else if n.is_u64() {
                return Err(format!("integer {} is too large to be stored", n));
            } else {
                match n.as_f64() {
                    Some(f) => Bson::Double(f),
                    None => return Err(format!("number {} cannot be stored", n)),
                }
            }
        }
        Value::Array(items) => Bson::Array(
            items
                .into_iter()
                .map(json_to_bson)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Object(fields) => Bson::Document(json_object_to_document(fields)?),
    })
}

/// A stored user: the assigned identifier plus every field that was sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl UserDocument {
    /// Converts a raw document read from the store. `ObjectId` identifiers
    /// are rendered as hex; everything else as relaxed Extended JSON.
    pub fn from_document(mut document: Document) -> Result<Self, String> {
        let id = match document.remove("_id") {
            Some(Bson::ObjectId(oid)) => oid.to_hex(),
            Some(Bson::String(s)) => s,
            Some(other) => other.into_relaxed_extjson().to_string(),
            None => return Err("document has no _id".to_string()),
        };

        let fields = match Bson::Document(document).into_relaxed_extjson() {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };

        Ok(Self { id, fields })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
