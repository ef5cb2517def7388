/// Assert the session ids a TUIO 1.1 client currently holds for one profile
#[macro_export]
macro_rules! assert_alive {
    ($entities:expr, [$($session_id:expr),* $(,)?]) => {
        let found: Vec<u32> = $entities.iter().map(|e| e.session_id()).collect();
        let expected: Vec<u32> = vec![$($session_id),*];
        assert_eq!(found, expected, "alive session ids differ");
    };
}

/// Assert the session ids of recorded add events, in delivery order
#[macro_export]
macro_rules! assert_added_tuio20 {
    ($events:expr, [$($session_id:expr),* $(,)?]) => {
        let added: Vec<u32> = $events
            .iter()
            .filter_map(|e| match e {
                $crate::Tuio20Event::Add(id) => Some(*id),
                _ => None,
            })
            .collect();
        let expected: Vec<u32> = vec![$($session_id),*];
        assert_eq!(added, expected, "added session ids differ");
    };
}
