/// Summary of one detected text-like column, in table column order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColumnProfile {
    /// Column name as it appears in the table header.
    pub name: String,
    /// Mean character count over non-missing text entries.
    pub avg_entry_len: f64,
    /// Count of distinct non-missing values (case-sensitive, exact match).
    pub unique_entries: usize,
}
