//! Parameter schemas and the values that fill them.

use std::{collections::BTreeMap, fmt};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How far a number may sit from its step grid and still count as on it.
const STEP_TOLERANCE: f64 = 1e-9;

/// A single tunable input of a product.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct Parameter {
    /// The canonical id, in snake case.
    pub id: String,
    /// A human readable label.
    pub label: String,
    /// Longer help text, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A short alias accepted wherever the id is.
    pub short_id: String,
    /// The type and bounds of the parameter.
    pub kind: ParameterKind,
}

/// The type and bounds of a parameter.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParameterKind {
    /// A number on the grid `min, min + step, .., max`.
    Number {
        /// Lowest allowed value.
        min: f64,
        /// Highest allowed value.
        max: f64,
        /// Distance between allowed values.
        step: f64,
    },
    /// A switch.
    Boolean,
    /// One of a fixed list of options.
    Choice {
        /// The options, in display order.
        options: Vec<ChoiceOption>,
    },
}

/// One option of a choice parameter.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct ChoiceOption {
    /// The value to pass.
    pub id: String,
    /// A human readable label.
    pub label: String,
}

impl Parameter {
    fn new(id: &str, label: &str, short_id: &str, kind: ParameterKind) -> Self {
        Parameter {
            id: id.to_string(),
            label: label.to_string(),
            description: None,
            short_id: short_id.to_string(),
            kind,
        }
    }

    /// A number between `min` and `max` in whole steps.
    pub fn number(id: &str, label: &str, short_id: &str, min: impl Into<f64>, max: impl Into<f64>) -> Self {
        Parameter::new(
            id,
            label,
            short_id,
            ParameterKind::Number {
                min: min.into(),
                max: max.into(),
                step: 1.0,
            },
        )
    }

    /// A switch.
    pub fn boolean(id: &str, label: &str, short_id: &str) -> Self {
        Parameter::new(id, label, short_id, ParameterKind::Boolean)
    }

    /// One of `options`, given as `(id, label)` pairs.
    pub fn choice(id: &str, label: &str, short_id: &str, options: &[(&str, &str)]) -> Self {
        let options = options
            .iter()
            .map(|(id, label)| ChoiceOption {
                id: id.to_string(),
                label: label.to_string(),
            })
            .collect();
        Parameter::new(id, label, short_id, ParameterKind::Choice { options })
    }

    /// Change the step of a number parameter.
    pub fn step(mut self, step: impl Into<f64>) -> Self {
        if let ParameterKind::Number { step: s, .. } = &mut self.kind {
            *s = step.into();
        }
        self
    }

    /// Attach help text.
    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// The value used when nothing else is known.
    pub fn default_value(&self) -> ParamValue {
        match &self.kind {
            ParameterKind::Number { min, .. } => ParamValue::Number(*min),
            ParameterKind::Boolean => ParamValue::Flag(false),
            ParameterKind::Choice { options } => {
                ParamValue::Choice(options.first().map(|o| o.id.clone()).unwrap_or_default())
            }
        }
    }

    /// Check a single value against this parameter.
    pub fn check(&self, value: &ParamValue) -> Result<()> {
        match (&self.kind, value) {
            (ParameterKind::Number { min, max, step }, ParamValue::Number(v)) => {
                if !v.is_finite() || v < min || v > max {
                    return Err(Error::OutOfRange {
                        id: self.id.clone(),
                        min: *min,
                        max: *max,
                        value: *v,
                    });
                }
                let steps = (v - min) / step;
                if (steps - steps.round()).abs() > STEP_TOLERANCE {
                    return Err(Error::OffStep {
                        id: self.id.clone(),
                        min: *min,
                        step: *step,
                        value: *v,
                    });
                }
                Ok(())
            }
            (ParameterKind::Boolean, ParamValue::Flag(_)) => Ok(()),
            (ParameterKind::Choice { options }, ParamValue::Choice(v)) => {
                if options.iter().any(|o| &o.id == v) {
                    Ok(())
                } else {
                    Err(Error::UnknownChoice {
                        id: self.id.clone(),
                        value: v.clone(),
                    })
                }
            }
            (kind, value) => Err(Error::WrongType {
                id: self.id.clone(),
                expected: kind.type_name(),
                found: value.to_string(),
            }),
        }
    }

    /// Parse a raw string into a value of this parameter's type.
    ///
    /// The result is not range checked; see [`Parameter::check`].
    pub fn parse_value(&self, raw: &str) -> Result<ParamValue> {
        let raw = raw.trim();
        let wrong_type = || Error::WrongType {
            id: self.id.clone(),
            expected: self.kind.type_name(),
            found: raw.to_string(),
        };
        match &self.kind {
            ParameterKind::Number { .. } => raw.parse::<f64>().map(ParamValue::Number).map_err(|_| wrong_type()),
            ParameterKind::Boolean => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(ParamValue::Flag(true)),
                "false" | "0" | "no" => Ok(ParamValue::Flag(false)),
                _ => Err(wrong_type()),
            },
            ParameterKind::Choice { .. } => Ok(ParamValue::Choice(raw.to_string())),
        }
    }
}

impl ParameterKind {
    fn type_name(&self) -> &'static str {
        match self {
            ParameterKind::Number { .. } => "number",
            ParameterKind::Boolean => "boolean",
            ParameterKind::Choice { .. } => "choice",
        }
    }
}

/// The ordered parameter list of a product.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Schema(Vec<Parameter>);

impl Schema {
    /// Create a schema from its parameters.
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Schema(parameters)
    }

    /// The parameters, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.0.iter()
    }

    /// The number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the product takes no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Find a parameter by id or short id.
    pub fn lookup(&self, key: &str) -> Option<&Parameter> {
        self.0
            .iter()
            .find(|p| p.id == key)
            .or_else(|| self.0.iter().find(|p| p.short_id == key))
    }

    /// A full set of values built from each parameter's default.
    pub fn defaults(&self) -> ParamValues {
        self.0.iter().map(|p| (p.id.clone(), p.default_value())).collect()
    }

    /// Check that `values` is complete, has no strangers and is in bounds.
    pub fn validate(&self, values: &ParamValues) -> Result<()> {
        if let Some(unknown) = values.keys().find(|key| !self.0.iter().any(|p| &p.id == *key)) {
            return Err(Error::UnknownParameter(unknown.to_string()));
        }
        for parameter in &self.0 {
            let value = values
                .get(&parameter.id)
                .ok_or_else(|| Error::MissingParameter(parameter.id.clone()))?;
            parameter.check(value)?;
        }
        Ok(())
    }

    /// Resolve a key to its canonical id and coerce the value to the
    /// parameter's type where that is unambiguous.
    pub fn normalize(&self, key: &str, value: ParamValue) -> Result<(String, ParamValue)> {
        let parameter = self
            .lookup(key)
            .ok_or_else(|| Error::UnknownParameter(key.to_string()))?;
        let value = match (&parameter.kind, value) {
            (ParameterKind::Number { .. }, ParamValue::Choice(raw))
            | (ParameterKind::Boolean, ParamValue::Choice(raw)) => parameter.parse_value(&raw)?,
            (_, value) => value,
        };
        Ok((parameter.id.clone(), value))
    }

    /// Parse a `key=value` override, as given on the command line.
    pub fn parse_assignment(&self, assignment: &str) -> Result<(String, ParamValue)> {
        let (key, raw) = assignment
            .split_once('=')
            .ok_or_else(|| Error::MalformedAssignment(assignment.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::MalformedAssignment(assignment.to_string()));
        }
        let parameter = self
            .lookup(key)
            .ok_or_else(|| Error::UnknownParameter(key.to_string()))?;
        Ok((parameter.id.clone(), parameter.parse_value(raw)?))
    }
}

/// A single parameter value.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ParamValue {
    /// A switch.
    Flag(bool),
    /// A number.
    Number(f64),
    /// A choice option id.
    Choice(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Flag(v) => write!(f, "{}", v),
            ParamValue::Number(v) => write!(f, "{}", v),
            ParamValue::Choice(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Flag(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Number(v.into())
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Number(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Choice(v.to_string())
    }
}

/// A set of parameter values keyed by parameter id.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct ParamValues(BTreeMap<String, ParamValue>);

impl ParamValues {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any previous one.
    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(id.into(), value.into());
    }

    /// Get a raw value.
    pub fn get(&self, id: &str) -> Option<&ParamValue> {
        self.0.get(id)
    }

    /// The ids that have a value.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Every id and value, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }

    /// The number of values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn require(&self, id: &str) -> Result<&ParamValue> {
        self.get(id).ok_or_else(|| Error::MissingParameter(id.to_string()))
    }

    /// A number value.
    pub fn number(&self, id: &str) -> Result<f64> {
        match self.require(id)? {
            ParamValue::Number(v) => Ok(*v),
            other => Err(Error::WrongType {
                id: id.to_string(),
                expected: "number",
                found: other.to_string(),
            }),
        }
    }

    /// A boolean value.
    pub fn flag(&self, id: &str) -> Result<bool> {
        match self.require(id)? {
            ParamValue::Flag(v) => Ok(*v),
            other => Err(Error::WrongType {
                id: id.to_string(),
                expected: "boolean",
                found: other.to_string(),
            }),
        }
    }

    /// A choice value.
    pub fn choice(&self, id: &str) -> Result<&str> {
        match self.require(id)? {
            ParamValue::Choice(v) => Ok(v),
            other => Err(Error::WrongType {
                id: id.to_string(),
                expected: "choice",
                found: other.to_string(),
            }),
        }
    }
}

impl FromIterator<(String, ParamValue)> for ParamValues {
    fn from_iter<I: IntoIterator<Item = (String, ParamValue)>>(iter: I) -> Self {
        ParamValues(iter.into_iter().collect())
    }
}

impl Extend<(String, ParamValue)> for ParamValues {
    fn extend<I: IntoIterator<Item = (String, ParamValue)>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl IntoIterator for ParamValues {
    type Item = (String, ParamValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn schema() -> Schema {
        Schema::new(vec![
            Parameter::number("seat_width", "Seat width", "sw", 20, 60).step(5),
            Parameter::boolean("include_back", "Include back", "b"),
            Parameter::choice("mount_type", "Mount Type", "mt", &[("bottom", "Bottom"), ("top", "Top")]),
        ])
    }

    #[test]
    fn test_defaults_are_valid() {
        let schema = schema();
        let defaults = schema.defaults();
        assert_eq!(defaults.number("seat_width").unwrap(), 20.0);
        assert!(!defaults.flag("include_back").unwrap());
        assert_eq!(defaults.choice("mount_type").unwrap(), "bottom");
        schema.validate(&defaults).unwrap();
    }

    #[test]
    fn test_validate_reports_each_problem() {
        let schema = schema();
        let mut values = schema.defaults();

        values.insert("seat_width", 65);
        assert!(matches!(schema.validate(&values), Err(Error::OutOfRange { .. })));

        values.insert("seat_width", 42);
        assert!(matches!(schema.validate(&values), Err(Error::OffStep { step, .. }) if step == 5.0));

        values.insert("seat_width", 45);
        values.insert("mount_type", "side");
        assert!(matches!(schema.validate(&values), Err(Error::UnknownChoice { .. })));

        values.insert("mount_type", "top");
        values.insert("include_back", 1);
        assert!(matches!(schema.validate(&values), Err(Error::WrongType { .. })));

        values.insert("include_back", true);
        schema.validate(&values).unwrap();

        values.insert("colour", "red");
        assert!(matches!(schema.validate(&values), Err(Error::UnknownParameter(key)) if key == "colour"));

        let partial: ParamValues = [("seat_width".to_string(), ParamValue::from(30))].into_iter().collect();
        assert!(matches!(schema.validate(&partial), Err(Error::MissingParameter(_))));
    }

    #[test]
    fn test_parse_assignment() {
        let schema = schema();
        assert_eq!(
            schema.parse_assignment("sw=35").unwrap(),
            ("seat_width".to_string(), ParamValue::Number(35.0))
        );
        assert_eq!(
            schema.parse_assignment("include_back=yes").unwrap(),
            ("include_back".to_string(), ParamValue::Flag(true))
        );
        assert_eq!(
            schema.parse_assignment("mt=top").unwrap(),
            ("mount_type".to_string(), ParamValue::Choice("top".to_string()))
        );
        assert!(matches!(
            schema.parse_assignment("sw"),
            Err(Error::MalformedAssignment(_))
        ));
        assert!(matches!(
            schema.parse_assignment("b=maybe"),
            Err(Error::WrongType { .. })
        ));
        assert!(matches!(
            schema.parse_assignment("depth=4"),
            Err(Error::UnknownParameter(_))
        ));
    }

    #[test]
    fn test_values_deserialize_untagged() {
        let values: ParamValues = serde_json::from_str(r#"{"a": true, "b": 12.5, "c": "top"}"#).unwrap();
        assert!(values.flag("a").unwrap());
        assert_eq!(values.number("b").unwrap(), 12.5);
        assert_eq!(values.choice("c").unwrap(), "top");

        let (id, value) = schema().normalize("sw", ParamValue::Choice("25".to_string())).unwrap();
        assert_eq!(id, "seat_width");
        assert_eq!(value, ParamValue::Number(25.0));
    }
}
