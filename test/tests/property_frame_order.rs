/// Property-based tests for frame acceptance: whatever order frames arrive
/// in, the client ends up holding the alive set of the last accepted frame

use std::collections::BTreeSet;

use proptest::prelude::*;

use tuio_client::ClientConfig;
use tuio_shared::{CursorSet, SessionId, TokenRecord, TUIO11_CURSOR_ADDRESS};
use tuio_test::{start_time, tuio11_client, tuio20_client, Tuio11FrameBuilder, Tuio20FrameBuilder};

fn frames() -> impl Strategy<Value = Vec<(u32, BTreeSet<SessionId>)>> {
    prop::collection::vec(
        (1u32..50, prop::collection::btree_set(1u32..10, 0..6)),
        1..25,
    )
}

proptest! {
    /// TUIO 1.1 applies a frame unless it is older than the current one
    #[test]
    fn prop_tuio11_alive_tracks_newest_frame(frames in frames()) {
        let (client, _clock, _log) = tuio11_client(ClientConfig::default());

        let mut current = 0;
        let mut expected = BTreeSet::new();
        for (frame_id, alive) in &frames {
            let ids: Vec<SessionId> = alive.iter().copied().collect();
            let bytes = ids
                .iter()
                .fold(Tuio11FrameBuilder::new(TUIO11_CURSOR_ADDRESS), |frame, id| {
                    frame.set(CursorSet { session_id: *id, x: 0.5, y: 0.5, ..CursorSet::default() })
                })
                .alive(&ids)
                .fseq(*frame_id);
            client.on_buffer(&bytes);

            if *frame_id >= current {
                current = *frame_id;
                expected = alive.clone();
            }
        }

        let cursors = client.get_tuio_cursors();
        let found: BTreeSet<SessionId> = cursors.iter().map(|c| c.session_id()).collect();
        prop_assert_eq!(found, expected);
        prop_assert_eq!(client.cursor_frame().0, current);

        let cursor_ids: BTreeSet<u32> = cursors.iter().map(|c| c.cursor_id()).collect();
        prop_assert_eq!(cursor_ids.len(), cursors.len());
    }

    /// TUIO 2.0 opens a frame only if its id is newer than the previous
    /// bundle's, and commits it only if it is not older than the last commit
    #[test]
    fn prop_tuio20_alive_tracks_newest_frame(frames in frames()) {
        let (client, _clock, _log) = tuio20_client(ClientConfig::default());

        let mut last_seen = 0;
        let mut committed = 0;
        let mut expected = BTreeSet::new();
        for (index, (frame_id, alive)) in frames.iter().enumerate() {
            let ids: Vec<SessionId> = alive.iter().copied().collect();
            let time = start_time().add_millis(10 * index as i64);
            let bytes = ids
                .iter()
                .fold(Tuio20FrameBuilder::new(*frame_id, time), |frame, id| {
                    frame.component(TokenRecord { session_id: *id, ..TokenRecord::default() })
                })
                .alive(&ids);
            client.on_buffer(&bytes);

            if *frame_id > last_seen && *frame_id >= committed {
                committed = *frame_id;
                expected = alive.clone();
            }
            last_seen = *frame_id;
        }

        let found: BTreeSet<SessionId> = client
            .get_tuio_objects()
            .iter()
            .map(|object| object.session_id())
            .collect();
        prop_assert_eq!(found, expected);
        prop_assert_eq!(client.frame().0, committed);
    }
}
