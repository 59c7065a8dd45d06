use bson::Bson;
use tastegap_core::{Document, Value};

pub fn to_bson(value: &Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(v) => Bson::Boolean(*v),
        Value::I64(v) => Bson::Int64(*v),
        Value::F64(v) => Bson::Double(*v),
        Value::String(v) => Bson::String(v.clone()),
        Value::Document(doc) => Bson::Document(to_document(doc)),
        Value::List(items) => Bson::Array(items.iter().map(to_bson).collect()),
    }
}

pub fn to_document(doc: &Document) -> bson::Document {
    doc.iter()
        .map(|(field, value)| (field.clone(), to_bson(value)))
        .collect()
}

pub fn from_bson(bson: Bson) -> Value {
    match bson {
        Bson::Null | Bson::Undefined => Value::Null,
        Bson::Boolean(v) => Value::Bool(v),
        Bson::Int32(v) => Value::I64(v as i64),
        Bson::Int64(v) => Value::I64(v),
        Bson::Double(v) => Value::F64(v),
        Bson::String(v) => Value::String(v),
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => Value::I64(dt.timestamp_millis()),
        Bson::Array(items) => Value::List(items.into_iter().map(from_bson).collect()),
        Bson::Document(doc) => Value::Document(from_document(doc)),
        other => Value::String(other.to_string()),
    }
}

pub fn from_document(doc: bson::Document) -> Document {
    doc.into_iter()
        .map(|(field, value)| (field, from_bson(value)))
        .collect()
}
