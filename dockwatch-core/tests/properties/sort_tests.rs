//! Properties of the sort-toggle state machine and the sort itself

use dockwatch_core::sort::{Direction, SortSpec};
use dockwatch_core::stats::{ColumnId, StatsParser};
use proptest::prelude::*;

fn column(index: usize) -> ColumnId {
    ColumnId::ALL[index % ColumnId::ALL.len()]
}

proptest! {
    #[test]
    fn toggled_column_becomes_top_priority(toggles in proptest::collection::vec(0usize..12, 1..40)) {
        let mut spec = SortSpec::new();
        for &i in &toggles {
            spec.toggle(column(i));
        }
        let last = column(*toggles.last().unwrap());
        prop_assert_eq!(spec.keys()[0].column, last);
    }

    #[test]
    fn toggling_never_duplicates_keys(toggles in proptest::collection::vec(0usize..12, 0..40)) {
        let mut spec = SortSpec::new();
        for &i in &toggles {
            spec.toggle(column(i));
        }
        let mut columns: Vec<_> = spec.keys().iter().map(|k| k.column).collect();
        let len = columns.len();
        columns.sort_by_key(|c| format!("{c:?}"));
        columns.dedup();
        prop_assert_eq!(columns.len(), len);
        prop_assert!(len <= ColumnId::ALL.len());
    }

    #[test]
    fn double_toggle_flips_direction_only(i in 0usize..12) {
        let col = column(i);
        let once = SortSpec::new().toggled(col);
        let twice = once.toggled(col);
        prop_assert_eq!(once.keys()[0].direction, Direction::Descending);
        prop_assert_eq!(twice.keys()[0].direction, Direction::Ascending);
        prop_assert_eq!(once.keys().len(), twice.keys().len());
    }

    #[test]
    fn sorting_is_idempotent(cpus in proptest::collection::vec(0u32..10_000, 1..20)) {
        let mut rows: Vec<_> = cpus
            .iter()
            .enumerate()
            .map(|(n, cpu)| {
                let line = format!(
                    "id{n}  app{n}  {}.{:02}%  1MiB / 4MiB  25.00%  0B / 0B  0B / 0B  1",
                    cpu / 100,
                    cpu % 100
                );
                StatsParser::parse_record(&line).unwrap().unwrap()
            })
            .collect();

        let spec = SortSpec::single(ColumnId::CpuPercent, Direction::Descending);
        spec.apply(&mut rows);
        let once: Vec<_> = rows.iter().map(|r| r.container_id.clone()).collect();
        spec.apply(&mut rows);
        let twice: Vec<_> = rows.iter().map(|r| r.container_id.clone()).collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sorted_rows_are_ordered_by_canonical_value(cpus in proptest::collection::vec(0u32..10_000, 1..20)) {
        let mut rows: Vec<_> = cpus
            .iter()
            .enumerate()
            .map(|(n, cpu)| {
                let line = format!(
                    "id{n}  app{n}  {}.{:02}%  1MiB / 4MiB  25.00%  0B / 0B  0B / 0B  1",
                    cpu / 100,
                    cpu % 100
                );
                StatsParser::parse_record(&line).unwrap().unwrap()
            })
            .collect();

        let spec = SortSpec::single(ColumnId::CpuPercent, Direction::Ascending);
        spec.apply(&mut rows);
        for pair in rows.windows(2) {
            prop_assert!(pair[0].cpu_percent.value <= pair[1].cpu_percent.value);
        }
    }
}
