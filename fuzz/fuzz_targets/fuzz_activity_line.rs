#![no_main]

use libfuzzer_sys::fuzz_target;

use chrono::NaiveDate;
use domain::activity::entry::{parse_line, ActivityEntry};

// Fuzz the log line parser and the format/parse round trip.
//
// Layout:
//   [0]  = selector (0=parse arbitrary bytes, 1=format then parse)
//   rest = for selector 0: raw line bytes
//          for selector 1: split in half into actor and action
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let selector = data[0] % 2;
    let rest = &data[1..];

    match selector {
        0 => {
            // Must never panic, whatever the input line looks like.
            if let Ok(line) = std::str::from_utf8(rest) {
                let _ = parse_line(line);
            }
        }
        _ => {
            let mid = rest.len() / 2;
            let (Ok(actor), Ok(action)) = (
                std::str::from_utf8(&rest[..mid]),
                std::str::from_utf8(&rest[mid..]),
            ) else {
                return;
            };

            let entry = ActivityEntry::new(actor, action);
            let at = NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_opt(14, 47, 0)
                .unwrap();
            let line = entry.format_line(at);

            // One entry is always one line.
            assert!(line.lines().count() <= 1);

            // Space-free actors (usernames) survive the trip exactly.
            if !entry.actor.contains(' ')
                && let Some(parsed) = parse_line(&line)
            {
                assert_eq!(parsed.actor, entry.actor);
                assert_eq!(parsed.action, entry.action);
            }
        }
    }
});
