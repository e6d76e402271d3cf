use codec::{
    decode_snapshot, encode_snapshot, GlobalSummary, Leaderboard, LeaderboardEntry, Limits, Seed,
    Snapshot, VersionTag, WorldAggregate, WorldAggregates,
};
use proptest::prelude::*;

fn entry_strategy() -> impl Strategy<Value = LeaderboardEntry> {
    (
        any::<i64>(),
        any::<i64>(),
        any::<u8>(),
        prop::collection::vec(any::<u8>(), 0..40),
        any::<i64>(),
        any::<bool>(),
    )
        .prop_map(|(seed, user_id, platform_id, display_name, capacity, is_anonymous)| {
            LeaderboardEntry {
                seed: Seed::new(seed),
                user_id,
                platform_id,
                display_name,
                raw_generation_capacity: capacity,
                is_anonymous,
            }
        })
}

fn world_strategy() -> impl Strategy<Value = WorldAggregate> {
    (any::<i64>(), -1.0e6f32..1.0e6, any::<i32>()).prop_map(|(seed, capacity, players)| {
        WorldAggregate {
            seed: Seed::new(seed),
            generation_capacity: capacity,
            player_count: players,
        }
    })
}

fn snapshot_strategy() -> impl Strategy<Value = Snapshot> {
    (
        any::<u32>(),
        prop::collection::vec(entry_strategy(), 0..8),
        any::<(i64, i64, i32, i32)>(),
        prop::collection::vec(world_strategy(), 0..8),
    )
        .prop_map(|(version, entries, totals, worlds)| Snapshot {
            format_version: VersionTag::new(version),
            leaderboard: Leaderboard {
                version: VersionTag::new(version),
                entries,
            },
            summary: GlobalSummary {
                version: VersionTag::new(version),
                total_generation_capacity: totals.0,
                total_sails_launched: totals.1,
                total_players: totals.2,
                total_dyson_spheres: totals.3,
            },
            aggregates: WorldAggregates {
                version: VersionTag::new(version),
                worlds,
            },
        })
}

proptest! {
    #[test]
    fn prop_decode_inverts_encode(snapshot in snapshot_strategy()) {
        let bytes = encode_snapshot(&snapshot, &Limits::for_testing()).unwrap();
        let decoded = decode_snapshot(&bytes, &Limits::for_testing()).unwrap();
        prop_assert_eq!(decoded, snapshot);
    }

    #[test]
    fn prop_any_strict_prefix_is_truncated(
        snapshot in snapshot_strategy(),
        cut_ratio in 0.0f64..1.0,
    ) {
        let bytes = encode_snapshot(&snapshot, &Limits::for_testing()).unwrap();
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let cut = ((bytes.len() as f64) * cut_ratio) as usize;
        let err = decode_snapshot(&bytes[..cut], &Limits::for_testing()).unwrap_err();
        prop_assert!(err.is_truncated(), "cut {} of {}: {}", cut, bytes.len(), err);
    }

    #[test]
    fn prop_arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = decode_snapshot(&bytes, &Limits::for_testing());
    }
}
