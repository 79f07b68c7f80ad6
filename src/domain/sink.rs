//! Destinations for action results.

use std::collections::{BTreeMap, HashMap};

/// Named variable storage, such as a call channel's variables.
pub trait VariableStore {
    fn set_variable(&mut self, name: &str, value: &str);
}

impl VariableStore for BTreeMap<String, String> {
    fn set_variable(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

impl VariableStore for HashMap<String, String> {
    fn set_variable(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

/// Line oriented textual response.
pub trait ResponseStream {
    fn write_line(&mut self, line: &str);
}

impl ResponseStream for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl ResponseStream for String {
    fn write_line(&mut self, line: &str) {
        self.push_str(line);
        self.push('\n');
    }
}

/// Where a pipeline run reports its results.
pub enum ResultSink<'a> {
    /// Store each result as a tagged variable
    Variables(&'a mut dyn VariableStore),
    /// Append each result as a line
    Stream(&'a mut dyn ResponseStream),
    /// Discard results
    Discard,
}
