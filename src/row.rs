//! A single result row as returned by Dune, keyed by column name.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(pub Map<String, Value>);

impl Row {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    /// Renders a column the way it is written to CSV. Missing and null columns are empty.
    pub fn cell(&self, column: &str) -> String {
        match self.get(column) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(str)) => str.clone(),
            Some(Value::Number(num)) => num.to_string(),
            Some(Value::Bool(flag)) => flag.to_string(),
            Some(value) => value.to_string(),
        }
    }

    pub fn has_value(&self, column: &str) -> bool {
        !self.cell(column).is_empty()
    }
}

impl From<Value> for Row {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Row(map),
            _ => Row::default(),
        }
    }
}

/// Dune returns the unique user total either as a number, or as a string which is already
/// formatted or a placeholder like "N/A".
#[derive(Debug, Clone, PartialEq)]
pub enum UserCount {
    Count(Number),
    Text(String),
}

impl UserCount {
    pub fn from_row(row: &Row, column: &str) -> Self {
        match row.get(column) {
            Some(Value::Number(num)) => UserCount::Count(num.clone()),
            _ => UserCount::Text(row.cell(column)),
        }
    }

    pub fn format(&self) -> String {
        match self {
            UserCount::Count(num) => group_thousands(&num.to_string()),
            UserCount::Text(text) => text.clone(),
        }
    }
}

/// Inserts a comma between every three digits of the integer part, e.g. 12345.5 -> 12,345.5.
fn group_thousands(num: &str) -> String {
    let (sign, unsigned) = match num.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", num),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(index) => unsigned.split_at(index),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i != 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped}{fraction}")
}
