//! Fuzz target for options file decoding
//!
//! Feeds arbitrary bytes through the JSON decoder and normalization. Options
//! files are user-editable, so any bytes can show up on disk.
//!
//! The decoder should never panic. Bytes that do parse must normalize into a
//! shape a session can start from.

#![no_main]

use libfuzzer_sys::fuzz_target;
use turnclock_core::{MAX_PLAYERS, Options, Palette};

fuzz_target!(|data: &[u8]| {
    let Ok(options) = serde_json::from_slice::<Options>(data) else {
        return;
    };

    let normalized = options.normalized();
    assert!(normalized.player_count >= 1);
    assert!(normalized.player_count <= MAX_PLAYERS);
    assert!(normalized.player_names.len() >= normalized.player_count);
    assert!(normalized.active_ruleset().is_some());

    // Unknown palette names resolve to the fallback instead of failing.
    let palette = Palette::resolve(&normalized.palette_name);
    assert!(!palette.name.is_empty());
});
