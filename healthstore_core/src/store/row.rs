use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// One cell of a store row
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnValue {
    #[default]
    Null,
    Integer(i64),
    #[serde(with = "real_cell")]
    Real(f64),
    Text(String),
}

/// JSON has no NaN or infinities, so non-finite reals are written as
/// `{"real": "NaN" | "inf" | "-inf"}` and finite ones as plain numbers.
mod real_cell {
    use super::*;
    use serde::de::Error as _;

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        NonFinite { real: String },
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            return serializer.serialize_f64(*value);
        }
        let real = if value.is_nan() {
            "NaN"
        } else if value.is_sign_positive() {
            "inf"
        } else {
            "-inf"
        };
        Repr::NonFinite { real: real.to_string() }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::NonFinite { real } => match real.as_str() {
                "NaN" => Ok(f64::NAN),
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(D::Error::custom(format!("unknown real value: {}", other))),
            },
        }
    }
}

impl ColumnValue {
    /// Total order used for sorting rows: nulls first, then numbers, then text
    pub fn compare(&self, other: &ColumnValue) -> Ordering {
        use ColumnValue::*;
        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Null, _) => Ordering::Less,
            (_, Null) => Ordering::Greater,
            (Integer(a), Integer(b)) => a.cmp(b),
            (Integer(a), Real(b)) => (*a as f64).total_cmp(b),
            (Real(a), Integer(b)) => a.total_cmp(&(*b as f64)),
            (Real(a), Real(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            (Text(_), _) => Ordering::Greater,
            (_, Text(_)) => Ordering::Less,
        }
    }
}

impl From<i64> for ColumnValue {
    fn from(value: i64) -> Self {
        ColumnValue::Integer(value)
    }
}

impl From<i32> for ColumnValue {
    fn from(value: i32) -> Self {
        ColumnValue::Integer(i64::from(value))
    }
}

impl From<f64> for ColumnValue {
    fn from(value: f64) -> Self {
        ColumnValue::Real(value)
    }
}

impl From<String> for ColumnValue {
    fn from(value: String) -> Self {
        ColumnValue::Text(value)
    }
}

impl From<&str> for ColumnValue {
    fn from(value: &str) -> Self {
        ColumnValue::Text(value.to_string())
    }
}

/// A flat set of named columns
///
/// Typed getters never fail: a missing or unconvertible cell reads as the
/// column type's default (`0`, `0.0`, or the empty string).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(BTreeMap<String, ColumnValue>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, column: &str, value: impl Into<ColumnValue>) {
        self.0.insert(column.to_string(), value.into());
    }

    /// Builder form of [`Row::set`]
    pub fn with(mut self, column: &str, value: impl Into<ColumnValue>) -> Self {
        self.set(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&ColumnValue> {
        self.0.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }

    pub fn remove(&mut self, column: &str) -> Option<ColumnValue> {
        self.0.remove(column)
    }

    pub fn get_i64(&self, column: &str) -> i64 {
        match self.0.get(column) {
            Some(ColumnValue::Integer(v)) => *v,
            Some(ColumnValue::Real(v)) => *v as i64,
            Some(ColumnValue::Text(v)) => v.trim().parse().unwrap_or(0),
            Some(ColumnValue::Null) | None => 0,
        }
    }

    pub fn get_i32(&self, column: &str) -> i32 {
        i32::try_from(self.get_i64(column)).unwrap_or(0)
    }

    pub fn get_f64(&self, column: &str) -> f64 {
        match self.0.get(column) {
            Some(ColumnValue::Real(v)) => *v,
            Some(ColumnValue::Integer(v)) => *v as f64,
            Some(ColumnValue::Text(v)) => v.trim().parse().unwrap_or(0.0),
            Some(ColumnValue::Null) | None => 0.0,
        }
    }

    pub fn get_string(&self, column: &str) -> String {
        match self.0.get(column) {
            Some(ColumnValue::Text(v)) => v.clone(),
            Some(ColumnValue::Integer(v)) => v.to_string(),
            Some(ColumnValue::Real(v)) => v.to_string(),
            Some(ColumnValue::Null) | None => String::new(),
        }
    }

    /// Copy of the row restricted to `columns`
    pub fn project(&self, columns: &[&str]) -> Row {
        Row(self
            .0
            .iter()
            .filter(|(name, _)| columns.contains(&name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect())
    }

    /// Overwrite this row's cells with every cell of `other`
    pub fn merge(&mut self, other: Row) {
        self.0.extend(other.0);
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters_default_on_absence() {
        let row = Row::new();
        assert_eq!(row.get_i64("missing"), 0);
        assert_eq!(row.get_f64("missing"), 0.0);
        assert_eq!(row.get_string("missing"), "");
    }

    #[test]
    fn test_typed_getters_convert() {
        let row = Row::new()
            .with("a", 3)
            .with("b", 2.75)
            .with("c", "12")
            .with("d", ColumnValue::Null);

        assert_eq!(row.get_f64("a"), 3.0);
        assert_eq!(row.get_i64("b"), 2);
        assert_eq!(row.get_i64("c"), 12);
        assert_eq!(row.get_string("a"), "3");
        assert_eq!(row.get_i64("d"), 0);
    }

    #[test]
    fn test_get_i32_out_of_range() {
        let row = Row::new().with("big", i64::MAX);
        assert_eq!(row.get_i32("big"), 0);
    }

    #[test]
    fn test_project_and_merge() {
        let mut row = Row::new().with("a", 1).with("b", 2).with("c", 3);
        let projected = row.project(&["a", "c", "z"]);
        assert_eq!(projected.columns().collect::<Vec<_>>(), vec!["a", "c"]);

        row.merge(Row::new().with("b", 20).with("d", 4));
        assert_eq!(row.get_i64("b"), 20);
        assert_eq!(row.len(), 4);
    }

    #[test]
    fn test_compare() {
        assert_eq!(ColumnValue::Null.compare(&ColumnValue::Integer(0)), Ordering::Less);
        assert_eq!(
            ColumnValue::Integer(2).compare(&ColumnValue::Real(1.5)),
            Ordering::Greater
        );
        assert_eq!(
            ColumnValue::Text("a".into()).compare(&ColumnValue::Integer(9)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_json_shape() {
        let row = Row::new().with("_id", 7).with("value", 1.5).with("notes", "x");
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"_id":7,"notes":"x","value":1.5}"#);

        let back: Row = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn test_json_keeps_non_finite_reals() {
        let row = Row::new()
            .with("nan", f64::NAN)
            .with("up", f64::INFINITY)
            .with("down", f64::NEG_INFINITY)
            .with("text", "NaN");
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"down":{"real":"-inf"},"nan":{"real":"NaN"},"text":"NaN","up":{"real":"inf"}}"#
        );

        let back: Row = serde_json::from_str(&json).unwrap();
        assert!(back.get_f64("nan").is_nan());
        assert_eq!(back.get_f64("up"), f64::INFINITY);
        assert_eq!(back.get_f64("down"), f64::NEG_INFINITY);
        assert_eq!(back.get("text"), Some(&ColumnValue::Text("NaN".into())));
    }

    #[test]
    fn test_json_rejects_unknown_real_marker() {
        assert!(serde_json::from_str::<Row>(r#"{"a":{"real":"huge"}}"#).is_err());
    }
}
