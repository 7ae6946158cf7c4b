//! Properties of stats record parsing

use dockwatch_core::stats::StatsParser;
use proptest::prelude::*;

proptest! {
    #[test]
    fn well_formed_records_decode_exactly(
        id in "[a-f0-9]{12}",
        name in "[a-z][a-z0-9_-]{1,20}",
        mem in 0u64..1_000_000_000,
        limit in 1u64..1_000_000_000,
        pids in 0u64..500,
    ) {
        let line = format!(
            "{id}  {name}  1.50%  {mem}B / {limit}B  5.00%  0B / 0B  0B / 0B  {pids}"
        );
        let row = StatsParser::parse_record(&line).unwrap().unwrap();
        prop_assert_eq!(row.container_id, id);
        prop_assert_eq!(row.name, name);
        prop_assert_eq!(row.mem_usage.bytes, mem);
        prop_assert_eq!(row.mem_limit.bytes, limit);
        prop_assert_eq!(row.pids, pids);
        prop_assert_eq!(row.running, pids != 0);
    }

    #[test]
    fn display_text_is_preserved_verbatim(mem in 0u64..1_000_000) {
        let token = format!("{mem}KiB");
        let line = format!(
            "abc123  web  1.50%  {token} / 1GiB  5.00%  0B / 0B  0B / 0B  1"
        );
        let row = StatsParser::parse_record(&line).unwrap().unwrap();
        prop_assert_eq!(row.mem_usage.display, token);
    }

    #[test]
    fn truncated_records_never_yield_rows(
        field_count in 1usize..8,
    ) {
        let fields = ["abc123", "web", "1.50%", "1MiB / 2MiB", "5.00%", "0B / 0B", "0B / 0B", "3"];
        let line = fields[..field_count].join("  ");
        prop_assert!(StatsParser::parse_record(&line).is_err());
    }
}
