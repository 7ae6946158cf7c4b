//! Multi-key sort engine for the stats table
//!
//! A [`SortSpec`] is an ordered priority list of `(column, direction)`
//! keys, highest priority first. Rows are ordered by a single stable
//! sort with a composite comparator, so ties on the top key are broken
//! by the next key, and so on. Byte-size and percentage columns compare
//! by canonical decoded magnitude, never by display text.

use std::cmp::Ordering;

use crate::stats::{ColumnId, MetricRow};

/// Sort direction for one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Smallest first
    Ascending,
    /// Largest first
    Descending,
}

impl Direction {
    /// The opposite direction
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One `(column, direction)` sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    /// Column to compare
    pub column: ColumnId,
    /// Direction to apply
    pub direction: Direction,
}

/// An ordered priority list of sort keys.
///
/// Owned by the presentation layer and mutated only by explicit toggles;
/// it persists across refreshes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    /// An empty spec (rows keep the order the remote command produced)
    #[must_use]
    pub const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// A spec with a single key
    #[must_use]
    pub fn single(column: ColumnId, direction: Direction) -> Self {
        Self {
            keys: vec![SortKey { column, direction }],
        }
    }

    /// A spec from an explicit key list, highest priority first.
    ///
    /// Later duplicates of a column are dropped; they could never be
    /// reached, since the first occurrence always decides.
    #[must_use]
    pub fn from_keys(keys: impl IntoIterator<Item = SortKey>) -> Self {
        let mut spec = Self::new();
        for key in keys {
            if !spec.keys.iter().any(|k| k.column == key.column) {
                spec.keys.push(key);
            }
        }
        spec
    }

    /// The keys, highest priority first
    #[must_use]
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Whether no key is active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Applies a user toggle on `column`.
    ///
    /// If `column` is already the top-priority key its direction flips;
    /// otherwise it becomes the top-priority key with default direction
    /// descending, and all other keys keep their relative order beneath
    /// it.
    pub fn toggle(&mut self, column: ColumnId) {
        if let Some(first) = self.keys.first_mut()
            && first.column == column
        {
            first.direction = first.direction.flipped();
            return;
        }
        self.keys.retain(|key| key.column != column);
        self.keys.insert(
            0,
            SortKey {
                column,
                direction: Direction::Descending,
            },
        );
    }

    /// Pure form of [`toggle`](Self::toggle): returns the new spec
    #[must_use]
    pub fn toggled(&self, column: ColumnId) -> Self {
        let mut next = self.clone();
        next.toggle(column);
        next
    }

    /// Composite comparison of two rows, highest-priority key first
    #[must_use]
    pub fn compare(&self, a: &MetricRow, b: &MetricRow) -> Ordering {
        for key in &self.keys {
            let ord = a.cell(key.column).compare(&b.cell(key.column));
            let ord = match key.direction {
                Direction::Ascending => ord,
                Direction::Descending => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    /// Orders rows in place with a single stable sort
    pub fn apply(&self, rows: &mut [MetricRow]) {
        if self.keys.is_empty() {
            return;
        }
        rows.sort_by(|a, b| self.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatsParser;

    fn row(id: &str, name: &str, cpu: &str, pids: u64) -> MetricRow {
        let line =
            format!("{id}  {name}  {cpu}  1MiB / 4MiB  25.00%  0B / 0B  0B / 0B  {pids}");
        StatsParser::parse_record(&line).unwrap().unwrap()
    }

    #[test]
    fn test_multi_key_tiebreak() {
        let mut rows = vec![
            row("C", "c", "5.00%", 1),
            row("B", "b", "10.00%", 1),
            row("A", "a", "10.00%", 1),
        ];
        let mut spec = SortSpec::single(ColumnId::ContainerId, Direction::Ascending);
        spec.toggle(ColumnId::CpuPercent); // cpu desc on top, id asc beneath
        spec.apply(&mut rows);
        let ids: Vec<_> = rows.iter().map(|r| r.container_id.as_str()).collect();
        assert_eq!(ids, ["A", "B", "C"]);
    }

    #[test]
    fn test_resort_is_idempotent() {
        let mut rows = vec![
            row("A", "a", "10.00%", 1),
            row("B", "b", "10.00%", 1),
            row("C", "c", "5.00%", 1),
        ];
        let spec = SortSpec::single(ColumnId::CpuPercent, Direction::Descending);
        spec.apply(&mut rows);
        let once: Vec<_> = rows.iter().map(|r| r.container_id.clone()).collect();
        spec.apply(&mut rows);
        let twice: Vec<_> = rows.iter().map(|r| r.container_id.clone()).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_stable_sort_preserves_tied_order() {
        let mut rows = vec![
            row("B", "b", "10.00%", 1),
            row("A", "a", "10.00%", 1),
        ];
        let spec = SortSpec::single(ColumnId::CpuPercent, Direction::Descending);
        spec.apply(&mut rows);
        // Tied on the only key: input order survives
        assert_eq!(rows[0].container_id, "B");
        assert_eq!(rows[1].container_id, "A");
    }

    #[test]
    fn test_toggle_promotes_with_descending_default() {
        let mut spec = SortSpec::new();
        spec.toggle(ColumnId::CpuPercent);
        assert_eq!(spec.keys().len(), 1);
        assert_eq!(spec.keys()[0].column, ColumnId::CpuPercent);
        assert_eq!(spec.keys()[0].direction, Direction::Descending);
    }

    #[test]
    fn test_toggle_flips_top_key() {
        let mut spec = SortSpec::new();
        spec.toggle(ColumnId::CpuPercent);
        spec.toggle(ColumnId::CpuPercent);
        assert_eq!(spec.keys()[0].direction, Direction::Ascending);
        spec.toggle(ColumnId::CpuPercent);
        assert_eq!(spec.keys()[0].direction, Direction::Descending);
    }

    #[test]
    fn test_toggle_keeps_lower_keys_in_relative_order() {
        let mut spec = SortSpec::new();
        spec.toggle(ColumnId::Name); // [name]
        spec.toggle(ColumnId::CpuPercent); // [cpu, name]
        spec.toggle(ColumnId::Pids); // [pids, cpu, name]
        spec.toggle(ColumnId::Name); // [name, pids, cpu]
        let columns: Vec<_> = spec.keys().iter().map(|k| k.column).collect();
        assert_eq!(
            columns,
            [ColumnId::Name, ColumnId::Pids, ColumnId::CpuPercent]
        );
    }

    #[test]
    fn test_toggled_is_pure() {
        let spec = SortSpec::new();
        let next = spec.toggled(ColumnId::CpuPercent);
        assert!(spec.is_empty());
        assert_eq!(next.keys().len(), 1);
    }

    #[test]
    fn test_byte_column_sorts_by_magnitude_not_display() {
        let mut rows = vec![
            StatsParser::parse_record("A  a  0.00%  900kB / 4MiB  1.00%  0B / 0B  0B / 0B  1")
                .unwrap()
                .unwrap(),
            StatsParser::parse_record("B  b  0.00%  2MB / 4MiB  1.00%  0B / 0B  0B / 0B  1")
                .unwrap()
                .unwrap(),
        ];
        let spec = SortSpec::single(ColumnId::MemUsage, Direction::Ascending);
        spec.apply(&mut rows);
        // "900kB" < "2MB" numerically even though "9" > "2" lexically
        assert_eq!(rows[0].container_id, "A");
    }

    #[test]
    fn test_from_keys_drops_unreachable_duplicates() {
        let spec = SortSpec::from_keys([
            SortKey {
                column: ColumnId::CpuPercent,
                direction: Direction::Descending,
            },
            SortKey {
                column: ColumnId::Name,
                direction: Direction::Ascending,
            },
            SortKey {
                column: ColumnId::CpuPercent,
                direction: Direction::Ascending,
            },
        ]);
        let columns: Vec<_> = spec.keys().iter().map(|k| k.column).collect();
        assert_eq!(columns, [ColumnId::CpuPercent, ColumnId::Name]);
        assert_eq!(spec.keys()[0].direction, Direction::Descending);
    }

    #[test]
    fn test_empty_spec_keeps_order() {
        let mut rows = vec![row("B", "b", "1.00%", 1), row("A", "a", "2.00%", 1)];
        SortSpec::new().apply(&mut rows);
        assert_eq!(rows[0].container_id, "B");
    }
}
