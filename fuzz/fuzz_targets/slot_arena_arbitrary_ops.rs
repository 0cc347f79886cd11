#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::ds::SlotArena;

// Random insert/remove/get_mut/clear sequences on SlotArena.
//
// Freed slots are reused, so a removed id may later name a different value;
// the shadow vector tracks which ids are currently live.
fuzz_target!(|data: &[u8]| {
    let mut arena: SlotArena<u32> = SlotArena::new();
    let mut live: Vec<(lrukit::ds::SlotId, u32)> = Vec::new();

    for pair in data.chunks_exact(2) {
        let value = u32::from(pair[1]);

        match pair[0] % 6 {
            0 => {
                let id = arena.insert(value);
                assert_eq!(arena.get(id), Some(&value));
                live.push((id, value));
            }
            1 => {
                if !live.is_empty() {
                    let (id, expected) = live.swap_remove(value as usize % live.len());
                    assert_eq!(arena.remove(id), Some(expected));
                    assert!(!arena.contains(id));
                    assert_eq!(arena.remove(id), None);
                }
            }
            2 => {
                if !live.is_empty() {
                    let idx = value as usize % live.len();
                    let (id, _) = live[idx];
                    if let Some(slot) = arena.get_mut(id) {
                        *slot = value;
                    }
                    live[idx].1 = value;
                }
            }
            3 => {
                // next_occupied walks every live slot exactly once
                let mut cursor = arena.next_occupied(None);
                let mut walked = 0;
                while let Some(id) = cursor {
                    assert!(arena.contains(id));
                    walked += 1;
                    cursor = arena.next_occupied(Some(id));
                }
                assert_eq!(walked, arena.len());
            }
            4 => {
                assert_eq!(arena.iter().count(), arena.len());
            }
            5 => {
                arena.clear();
                live.clear();
                assert!(arena.is_empty());
            }
            _ => unreachable!(),
        }

        assert_eq!(arena.len(), live.len());
        for (id, expected) in &live {
            assert_eq!(arena.get(*id), Some(expected));
        }
    }
});
