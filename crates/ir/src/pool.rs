//! Field candidate pool
//!
//! The pool holds the columns that have not been turned into fields yet,
//! keyed by column name. Popping a column removes it, so no column is
//! processed twice.

use indexmap::IndexMap;
use novagen_core::ColumnDescriptor;

/// Columns still available for field generation
#[derive(Debug, Clone, Default)]
pub struct FieldCandidatePool {
    columns: IndexMap<String, ColumnDescriptor>,
}

impl FieldCandidatePool {
    /// Tag a column list: build the pool keyed by column name
    ///
    /// Iteration follows input order. A repeated name replaces the earlier
    /// descriptor but keeps its position.
    pub fn tag(columns: impl IntoIterator<Item = ColumnDescriptor>) -> Self {
        let mut pool = IndexMap::new();
        for column in columns {
            pool.insert(column.name.clone(), column);
        }
        Self { columns: pool }
    }

    /// The same pool in reverse iteration order
    ///
    /// Field generation walks the columns last-declared first.
    pub fn reversed(mut self) -> Self {
        self.columns.reverse();
        self
    }

    /// Remaining column names, in iteration order
    pub fn names(&self) -> Vec<String> {
        self.columns.keys().cloned().collect()
    }

    /// Remove a column from the pool, returning its descriptor
    pub fn pop(&mut self, name: &str) -> Option<ColumnDescriptor> {
        self.columns.shift_remove(name)
    }

    /// Look at a column without removing it
    pub fn get(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::required("id", "bigint"),
            ColumnDescriptor::required("title", "varchar(191)"),
            ColumnDescriptor::optional("created_at", "timestamp"),
        ]
    }

    #[test]
    fn test_tag_keeps_input_order() {
        let pool = FieldCandidatePool::tag(columns());
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.names(), vec!["id", "title", "created_at"]);
    }

    #[test]
    fn test_reversed_pop_order() {
        let mut pool = FieldCandidatePool::tag(columns()).reversed();
        let mut popped = Vec::new();
        for name in pool.names() {
            let column = pool.pop(&name).unwrap();
            popped.push(column.name);
        }
        assert_eq!(popped, vec!["created_at", "title", "id"]);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_pop_removes_once() {
        let mut pool = FieldCandidatePool::tag(columns());
        assert!(pool.pop("title").is_some());
        assert!(pool.pop("title").is_none());
        assert!(!pool.contains("title"));
        assert_eq!(pool.names(), vec!["id", "created_at"]);
    }

    #[test]
    fn test_duplicate_name_last_write_wins() {
        let pool = FieldCandidatePool::tag(vec![
            ColumnDescriptor::required("slug", "varchar(50)"),
            ColumnDescriptor::required("id", "bigint"),
            ColumnDescriptor::optional("slug", "varchar(100)"),
        ]);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.names(), vec!["slug", "id"]);
        assert_eq!(pool.get("slug").unwrap().raw_type, "varchar(100)");
    }

    #[test]
    fn test_empty_pool() {
        let pool = FieldCandidatePool::tag(Vec::new()).reversed();
        assert!(pool.is_empty());
        assert!(pool.names().is_empty());
    }
}
