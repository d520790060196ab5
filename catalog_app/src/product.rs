use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::format::parse_float;

/// Product as returned by `GET /products`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub created_at: String,
}

/// Decimal prices arrive as JSON strings from some backends and numbers from others.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl Product {
    /// Numeric price, NaN when absent or not numeric.
    pub fn price_value(&self) -> f64 {
        match &self.price {
            Some(Price::Number(n)) => *n,
            Some(Price::Text(s)) => parse_float(s),
            None => f64::NAN,
        }
    }
}

/// Body of `POST /products`.
#[derive(Clone, Debug, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Raw values of the three form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
}

impl ProductForm {
    pub fn to_new_product(&self) -> NewProduct {
        NewProduct {
            name: self.name.clone(),
            description: self.description.clone(),
            price: parse_float(&self.price),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HealthReport {
    pub status: Option<String>,
    pub database: Option<String>,
}

impl HealthReport {
    pub const HEALTHY: &'static str = "healthy";

    /// Reads the report leniently: any JSON value is accepted, missing fields stay `None`.
    pub fn from_json(body: &Value) -> Self {
        let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_string);
        Self {
            status: field("status"),
            database: field("database"),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status.as_deref() == Some(Self::HEALTHY)
    }
}

/// Error body of a rejected mutation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorBody {
    pub detail: Option<Value>,
}

impl ErrorBody {
    pub fn from_json(body: &Value) -> Self {
        Self {
            detail: body.get("detail").cloned(),
        }
    }

    /// The `detail` as display text, `None` when it is absent or falsy.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }
}
