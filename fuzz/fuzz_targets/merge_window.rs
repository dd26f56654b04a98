#![no_main]

use libfuzzer_sys::fuzz_target;
use subcast::fragment::Fragment;

fuzz_target!(|data: &[u8]| {
    let Some((&config, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    let max_lines = usize::from(config % 4) + 1;
    let width = usize::from(config / 4 % 32) + 1;

    // Each line is one revision: "<id> <text>".
    let mut snapshot: Vec<Fragment> = Vec::new();
    let mut snapshots = Vec::new();
    for line in text.lines() {
        let (id, body) = line.split_once(' ').unwrap_or((line, ""));
        let id = i64::from(id.bytes().next().unwrap_or(b'0') % 8);
        match snapshot.iter_mut().find(|fragment| fragment.id == id) {
            Some(existing) => existing.text = body.to_owned(),
            None => snapshot.push(Fragment::new(id, body, 0, 0)),
        }
        snapshots.push(snapshot.clone());
    }

    if let Ok(windows) = subcast::fuzzing::merge_snapshots_input(&snapshots, max_lines, width) {
        for window in &windows {
            for span in window.spans() {
                debug_assert!(span.range().start <= span.range().end);
                debug_assert!(span.range().end <= window.text().len());
                debug_assert!(window.text().is_char_boundary(span.range().start));
            }
        }
    }
});
