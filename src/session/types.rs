//! Session data types

use super::error::{DecodeError, DecodeResult};
use crate::record::Record;
use crate::types::Representation;

/// The ordered, non-empty sequence of records decoded from one source
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    records: Vec<Record>,
    representation: Representation,
}

impl Session {
    /// Create a session from records in source order.
    ///
    /// An empty vector is rejected, so every `Session` has a first and last
    /// record.
    pub fn new(records: Vec<Record>, representation: Representation) -> DecodeResult<Self> {
        if records.is_empty() {
            return Err(DecodeError::EmptySession);
        }
        Ok(Self {
            records,
            representation,
        })
    }

    /// All records in source order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Representation the session was decoded from
    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record (the one that crossed the stabilization threshold)
    pub fn first(&self) -> &Record {
        &self.records[0]
    }

    /// Last record
    pub fn last(&self) -> &Record {
        &self.records[self.records.len() - 1]
    }

    /// Index of the last record
    pub fn last_index(&self) -> usize {
        self.records.len() - 1
    }

    /// Record at `index`
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Iterate over records in order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Session {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(count: u16) -> Record {
        Record {
            count,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_session_rejected() {
        let result = Session::new(Vec::new(), Representation::Binary);
        assert!(matches!(result, Err(DecodeError::EmptySession)));
    }

    #[test]
    fn test_session_accessors() {
        let session =
            Session::new(vec![record(60), record(61), record(62)], Representation::Text).unwrap();
        assert_eq!(session.len(), 3);
        assert!(!session.is_empty());
        assert_eq!(session.first().count, 60);
        assert_eq!(session.last().count, 62);
        assert_eq!(session.last_index(), 2);
        assert_eq!(session.get(1).map(|r| r.count), Some(61));
        assert_eq!(session.get(3), None);
        assert_eq!(session.representation(), Representation::Text);
        assert_eq!(session.iter().map(|r| r.count).sum::<u16>(), 183);
    }
}
