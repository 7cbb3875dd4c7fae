#![no_main]

use junit_diff::{run_diff, DiffInput, DiffOptions};
use libfuzzer_sys::fuzz_target;

const BASELINE: &str = r#"<testsuites><testsuite name="s"><testcase name="c" time="1"/></testsuite></testsuites>"#;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let options = DiffOptions::default();
        let _ = run_diff(
            DiffInput {
                content: BASELINE,
                file_name: "before",
            },
            DiffInput {
                content: s,
                file_name: "after",
            },
            &options,
        );
        let _ = run_diff(
            DiffInput {
                content: s,
                file_name: "before",
            },
            DiffInput {
                content: BASELINE,
                file_name: "after",
            },
            &options,
        );
    }
});
