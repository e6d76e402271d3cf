#![no_main]

use codec::{decode_snapshot, decode_snapshot_prefix, encode_snapshot};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = wire::Limits::for_testing();

    let Ok((snapshot, consumed)) = decode_snapshot_prefix(data, &limits) else {
        assert!(decode_snapshot(data, &limits).is_err());
        return;
    };
    assert!(consumed <= data.len());

    // Anything that decodes re-encodes to the consumed prefix, except for
    // non-canonical varints and nonzero reserved padding.
    if let Ok(encoded) = encode_snapshot(&snapshot, &limits) {
        let redecoded = decode_snapshot(&encoded, &limits).expect("re-encoded snapshot decodes");
        assert_eq!(redecoded.leaderboard, snapshot.leaderboard);
        assert_eq!(redecoded.summary, snapshot.summary);
        assert_eq!(redecoded.aggregates.worlds.len(), snapshot.aggregates.worlds.len());
    }
});
