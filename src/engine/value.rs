//! Runtime values handed to fixtures and produced for test parameters.
//!
//! A fixture argument is either a homogeneous sequence (`Array`,
//! `Collection`) or a structured `Record` whose members lead to one.

use std::collections::BTreeMap;

use crate::types::TypeRef;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array {
        element: TypeRef,
        items: Vec<Value>,
    },
    /// Instance of a collection type such as `List<bool>` or a registered
    /// non-generic collection.
    Collection {
        ty: TypeRef,
        items: Vec<Value>,
    },
    Record(Record),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub ty: TypeRef,
    pub fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new(ty: TypeRef) -> Self {
        Self {
            ty,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl Value {
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    pub fn array(element: TypeRef, items: Vec<Value>) -> Self {
        Self::Array { element, items }
    }

    pub fn ints(items: impl IntoIterator<Item = i64>) -> Self {
        Self::array(TypeRef::int(), items.into_iter().map(Self::Int).collect())
    }

    pub fn floats(items: impl IntoIterator<Item = f64>) -> Self {
        Self::array(TypeRef::float(), items.into_iter().map(Self::Float).collect())
    }

    pub fn bools(items: impl IntoIterator<Item = bool>) -> Self {
        Self::array(TypeRef::bool(), items.into_iter().map(Self::Bool).collect())
    }

    pub fn strs<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::array(
            TypeRef::string(),
            items.into_iter().map(|s| Self::Str(s.into())).collect(),
        )
    }

    pub fn collection(ty: TypeRef, items: Vec<Value>) -> Self {
        Self::Collection { ty, items }
    }

    /// `List<element>` holding `items`.
    pub fn list(element: TypeRef, items: Vec<Value>) -> Self {
        Self::collection(TypeRef::generic("List", vec![element]), items)
    }

    /// Runtime type; `None` for `Null`, which has none.
    pub fn type_of(&self) -> Option<TypeRef> {
        match self {
            Self::Null => None,
            Self::Bool(_) => Some(TypeRef::bool()),
            Self::Int(_) => Some(TypeRef::int()),
            Self::Float(_) => Some(TypeRef::float()),
            Self::Str(_) => Some(TypeRef::string()),
            Self::Array { element, .. } => Some(TypeRef::array(element.clone())),
            Self::Collection { ty, .. } => Some(ty.clone()),
            Self::Record(record) => Some(record.ty.clone()),
        }
    }

    /// Items of an array or collection. Strings are not treated as sequences.
    pub fn as_items(&self) -> Option<&[Value]> {
        match self {
            Self::Array { items, .. } | Self::Collection { items, .. } => Some(items),
            _ => None,
        }
    }

    pub fn into_items(self) -> Option<Vec<Value>> {
        match self {
            Self::Array { items, .. } | Self::Collection { items, .. } => Some(items),
            _ => None,
        }
    }

    pub fn is_enumerable(&self) -> bool {
        self.as_items().is_some()
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short human-readable rendering used in generated test names.
    pub fn display(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => format_float(*f),
            Self::Str(s) => format!("{s:?}"),
            Self::Array { items, .. } | Self::Collection { items, .. } => {
                let inner: Vec<String> = items.iter().map(Value::display).collect();
                format!("[{}]", inner.join(", "))
            }
            Self::Record(record) => record.ty.to_string(),
        }
    }

    /// JSON rendering; non-finite floats become strings.
    pub fn format_for_output(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::json!(b),
            Self::Int(i) => serde_json::json!(i),
            Self::Float(f) if f.is_finite() => serde_json::json!(f),
            Self::Float(f) => serde_json::json!(format_float(*f)),
            Self::Str(s) => serde_json::json!(s),
            Self::Array { items, .. } | Self::Collection { items, .. } => {
                serde_json::Value::Array(items.iter().map(Value::format_for_output).collect())
            }
            Self::Record(record) => {
                let fields: serde_json::Map<String, serde_json::Value> = record
                    .fields
                    .iter()
                    .map(|(name, value)| (name.clone(), value.format_for_output()))
                    .collect();
                serde_json::json!({
                    "type": record.ty.to_string(),
                    "fields": fields,
                })
            }
        }
    }
}

fn format_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        format!("{value:?}")
    }
}
