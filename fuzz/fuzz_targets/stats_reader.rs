#![no_main]

use contentstats::config::{Config, RowPolicy};
use contentstats::dashboard::Dashboard;
use contentstats::reader::read_stats;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must produce a table or an error, never a panic
    for policy in [RowPolicy::Abort, RowPolicy::Skip] {
        if let Ok(table) = read_stats(data, policy) {
            let mut dashboard = Dashboard::new(Config {
                on_error: policy,
                ..Config::default()
            });
            let _ = dashboard.draw(&table);
        }
    }

    if let Ok(input) = std::str::from_utf8(data) {
        let _ = contentstats::aggregate::parse_invariant_decimal(input);
    }
});
