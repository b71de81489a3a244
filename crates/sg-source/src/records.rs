//! Point records as delivered by the upstream data API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{SourceError, SourceResult};

/// One upstream row: a point name and its string-encoded coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRecord {
    pub points: String,
    pub coordinates: String,
}

impl PointRecord {
    pub fn new(points: impl Into<String>, coordinates: impl Into<String>) -> Self {
        Self {
            points: points.into(),
            coordinates: coordinates.into(),
        }
    }
}

/// Parse an upstream payload.
///
/// Accepts the API envelope `{"data": [...]}` (optionally with a `status`
/// given as a number or numeric string) or a bare array of records. An
/// envelope whose `status` is outside 200..300 is reported as an upstream
/// failure; a `status` that is not numeric is a data-format error.
pub fn parse_records(text: &str, source_name: &str) -> SourceResult<Vec<PointRecord>> {
    let payload: Value = serde_json::from_str(text)
        .map_err(|e| SourceError::data_format(source_name, format!("invalid JSON: {e}")))?;

    let rows = match payload {
        Value::Array(rows) => rows,
        Value::Object(mut envelope) => {
            if let Some(raw) = envelope.get("status").filter(|v| !v.is_null()) {
                let status = status_code(raw).ok_or_else(|| {
                    SourceError::data_format(source_name, format!("`status` is not numeric: {raw}"))
                })?;
                if !(200.0..300.0).contains(&status) {
                    let detail = envelope
                        .get("detail")
                        .and_then(Value::as_str)
                        .unwrap_or("no detail");
                    return Err(SourceError::upstream(
                        source_name,
                        format!("status {status}: {detail}"),
                    ));
                }
            }
            match envelope.remove("data") {
                Some(Value::Array(rows)) => rows,
                Some(_) => {
                    return Err(SourceError::data_format(source_name, "`data` is not an array"));
                }
                None => return Err(SourceError::data_format(source_name, "missing field `data`")),
            }
        }
        _ => {
            return Err(SourceError::data_format(
                source_name,
                "expected an object with `data` or an array of records",
            ));
        }
    };

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            serde_json::from_value::<PointRecord>(row)
                .map_err(|e| SourceError::data_format(format!("{source_name} record {i}"), e.to_string()))
        })
        .collect()
}

fn status_code(raw: &Value) -> Option<f64> {
    let code = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    code.filter(|c| c.is_finite())
}
