use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::maths::{AXIS_X_GRID_LINES, AXIS_X_GRID_LINES_MAX, AXIS_X_GRID_LINES_MIN};
use crate::core::types::MinMaxValues;
use crate::error::{ChartError, ChartResult};

/// User overrides for the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_range: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_range: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_x_grid_lines: Option<i64>,
}

/// Why a raw options value was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsRejection {
    #[error("options must be a keyed object, got {kind}")]
    NotAnObject { kind: &'static str },

    #[error("option `{field}` must be a number")]
    NonNumericField { field: &'static str },

    #[error("option `axisXGridLines` must be a whole number")]
    FractionalGridLines,
}

/// Outcome of validating untyped options.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsValidation {
    Accepted(AxisOptions),
    Rejected(OptionsRejection),
}

impl OptionsValidation {
    pub fn into_result(self) -> ChartResult<AxisOptions> {
        match self {
            Self::Accepted(options) => Ok(options),
            Self::Rejected(reason) => Err(ChartError::InvalidOptions(reason.to_string())),
        }
    }
}

impl AxisOptions {
    #[must_use]
    pub fn with_range(mut self, min_range: f64, max_range: f64) -> Self {
        self.min_range = Some(min_range);
        self.max_range = Some(max_range);
        self
    }

    #[must_use]
    pub fn with_axis_x_grid_lines(mut self, grid_lines: i64) -> Self {
        self.axis_x_grid_lines = Some(grid_lines);
        self
    }

    /// Validates options coming from an untyped host payload.
    ///
    /// Only a JSON object is accepted. Known fields must be numbers or
    /// `null`; unknown fields are ignored. Out-of-range grid-line counts are
    /// accepted here and fall back to the default in
    /// [`AxisOptions::resolved_grid_lines`].
    #[must_use]
    pub fn validate_json(value: &Value) -> OptionsValidation {
        let fields = match value {
            Value::Object(fields) => fields,
            other => {
                return OptionsValidation::Rejected(OptionsRejection::NotAnObject {
                    kind: json_kind(other),
                });
            }
        };

        match Self::from_fields(fields) {
            Ok(options) => OptionsValidation::Accepted(options),
            Err(reason) => OptionsValidation::Rejected(reason),
        }
    }

    fn from_fields(fields: &Map<String, Value>) -> Result<Self, OptionsRejection> {
        let min_range = numeric_field(fields, "minRange")?;
        let max_range = numeric_field(fields, "maxRange")?;
        let axis_x_grid_lines = match numeric_field(fields, "axisXGridLines")? {
            Some(lines) if lines.fract() != 0.0 => {
                return Err(OptionsRejection::FractionalGridLines);
            }
            Some(lines) => Some(lines as i64),
            None => None,
        };

        Ok(Self {
            min_range,
            max_range,
            axis_x_grid_lines,
        })
    }

    /// Widens `domain` with the range overrides. Never narrows it.
    #[must_use]
    pub fn widen(&self, domain: MinMaxValues) -> MinMaxValues {
        let min_value = match self.min_range {
            Some(min_range) if min_range < domain.min_value => min_range,
            _ => domain.min_value,
        };
        let max_value = match self.max_range {
            Some(max_range) if max_range > domain.max_value => max_range,
            _ => domain.max_value,
        };

        MinMaxValues::new(min_value, max_value)
    }

    #[must_use]
    pub fn has_valid_grid_lines(&self) -> bool {
        self.axis_x_grid_lines
            .is_some_and(|lines| (AXIS_X_GRID_LINES_MIN..=AXIS_X_GRID_LINES_MAX).contains(&lines))
    }

    /// Grid-line count to draw: the override when within `2..=10`, else 5.
    #[must_use]
    pub fn resolved_grid_lines(&self) -> usize {
        match self.axis_x_grid_lines {
            Some(lines) if self.has_valid_grid_lines() => lines as usize,
            _ => AXIS_X_GRID_LINES,
        }
    }
}

fn numeric_field(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<f64>, OptionsRejection> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or(OptionsRejection::NonNumericField { field }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn widen_never_narrows_domain() {
        let options = AxisOptions::default().with_range(-5.0, 5.0);
        let widened = options.widen(MinMaxValues::new(0.0, 10.0));
        assert_eq!(widened, MinMaxValues::new(-5.0, 10.0));
    }

    #[test]
    fn widen_without_overrides_is_identity() {
        let domain = MinMaxValues::new(-3.0, 8.0);
        assert_eq!(AxisOptions::default().widen(domain), domain);
    }

    #[test]
    fn out_of_range_grid_lines_fall_back_to_default() {
        let options = AxisOptions::default().with_axis_x_grid_lines(15);
        assert_eq!(options.resolved_grid_lines(), AXIS_X_GRID_LINES);
        let options = AxisOptions::default().with_axis_x_grid_lines(1);
        assert_eq!(options.resolved_grid_lines(), AXIS_X_GRID_LINES);
    }

    #[test]
    fn grid_lines_within_bounds_are_kept() {
        for lines in 2..=10 {
            let options = AxisOptions::default().with_axis_x_grid_lines(lines);
            assert_eq!(options.resolved_grid_lines(), lines as usize);
        }
    }

    #[test]
    fn json_object_is_accepted() {
        let validation =
            AxisOptions::validate_json(&json!({ "minRange": -5, "maxRange": 50, "axisXGridLines": 7 }));
        assert_eq!(
            validation,
            OptionsValidation::Accepted(AxisOptions {
                min_range: Some(-5.0),
                max_range: Some(50.0),
                axis_x_grid_lines: Some(7),
            })
        );
    }

    #[test]
    fn json_arrays_and_primitives_are_rejected() {
        for value in [json!([1, 2]), json!(3), json!("options"), json!(null), json!(true)] {
            assert!(matches!(
                AxisOptions::validate_json(&value),
                OptionsValidation::Rejected(OptionsRejection::NotAnObject { .. })
            ));
        }
    }

    #[test]
    fn json_non_numeric_field_is_rejected() {
        let validation = AxisOptions::validate_json(&json!({ "maxRange": "100" }));
        assert_eq!(
            validation,
            OptionsValidation::Rejected(OptionsRejection::NonNumericField { field: "maxRange" })
        );
        assert!(validation.into_result().is_err());
    }

    #[test]
    fn json_fractional_grid_lines_are_rejected() {
        let validation = AxisOptions::validate_json(&json!({ "axisXGridLines": 3.5 }));
        assert_eq!(
            validation,
            OptionsValidation::Rejected(OptionsRejection::FractionalGridLines)
        );
    }

    #[test]
    fn json_null_fields_and_unknown_keys_are_ignored() {
        let validation =
            AxisOptions::validate_json(&json!({ "minRange": null, "legend": { "show": true } }));
        assert_eq!(validation, OptionsValidation::Accepted(AxisOptions::default()));
    }
}
