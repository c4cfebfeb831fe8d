use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::ModelError;

/// A completed whiteboard stroke, sent whole rather than per point.
///
/// The relay only checks that `points` is an array. Everything else the
/// client attached (color, width, tool, per-point pressure) is passed on
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Stroke(Map<String, Value>);

impl Stroke {
    pub fn points(&self) -> &[Value] {
        match self.0.get("points") {
            Some(Value::Array(points)) => points,
            _ => &[],
        }
    }
}

impl TryFrom<Map<String, Value>> for Stroke {
    type Error = ModelError;

    fn try_from(value: Map<String, Value>) -> Result<Self, Self::Error> {
        match value.get("points") {
            Some(Value::Array(_)) => Ok(Self(value)),
            _ => Err(ModelError::StrokeWithoutPoints),
        }
    }
}

impl From<Stroke> for Map<String, Value> {
    fn from(value: Stroke) -> Self {
        value.0
    }
}
