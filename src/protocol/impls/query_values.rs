use std::collections::btree_map;
use crate::client::enums::client_error::ClientError;
use crate::protocol::protocol::{encode_query, parse_query};
use crate::protocol::structs::query_values::QueryValues;

impl QueryValues {
    pub fn new() -> QueryValues {
        QueryValues::default()
    }

    /// Appends `value` to the values already stored under `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// Replaces every value stored under `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), vec![value.into()]);
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.values.remove(key)
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|values| values.first()).map(String::as_str)
    }

    pub fn get_all(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.values.iter()
    }

    pub fn encode(&self) -> String {
        encode_query(self)
    }

    pub fn parse(query: &str) -> Result<QueryValues, ClientError> {
        parse_query(query)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query_values = QueryValues::new();
        for (key, value) in iter {
            query_values.add(key, value);
        }
        query_values
    }
}

impl<'a> IntoIterator for &'a QueryValues {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
