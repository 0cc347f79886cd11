#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::ds::IntrusiveList;

// Random push/remove/relink sequences on IntrusiveList, mirrored against a
// Vec of ids in list order.
fuzz_target!(|data: &[u8]| {
    let mut list: IntrusiveList<u32> = IntrusiveList::new();
    let mut model = Vec::new();

    for pair in data.chunks_exact(2) {
        let value = u32::from(pair[1]);
        let pick = |len: usize| value as usize % len;

        match pair[0] % 9 {
            0 => {
                let id = list.push_front(value);
                model.insert(0, id);
            }
            1 => {
                let id = list.push_back(value);
                model.push(id);
            }
            2 => {
                if list.pop_front().is_some() {
                    model.remove(0);
                }
            }
            3 => {
                if !model.is_empty() {
                    let id = model.remove(pick(model.len()));
                    assert!(list.remove(id).is_some());
                }
            }
            4 => {
                if !model.is_empty() {
                    let id = model.remove(pick(model.len()));
                    assert!(list.move_to_back(id));
                    model.push(id);
                }
            }
            5 => {
                if !model.is_empty() {
                    let id = model.remove(pick(model.len()));
                    assert!(list.move_to_front(id));
                    model.insert(0, id);
                }
            }
            6 => {
                if model.len() >= 2 {
                    let id = model.remove(pick(model.len()));
                    let anchor_idx = pick(model.len());
                    let anchor = model[anchor_idx];
                    assert!(list.move_after(id, anchor));
                    model.insert(anchor_idx + 1, id);
                }
            }
            7 => {
                if !model.is_empty() {
                    let anchor_idx = pick(model.len());
                    let anchor = model[anchor_idx];
                    if let Ok(id) = list.insert_after(anchor, value) {
                        model.insert(anchor_idx + 1, id);
                    }
                }
            }
            8 => {
                list.clear();
                model.clear();
            }
            _ => unreachable!(),
        }

        list.debug_validate_invariants();
        assert_eq!(list.iter_ids().collect::<Vec<_>>(), model);
        assert_eq!(list.front_id(), model.first().copied());
        assert_eq!(list.back_id(), model.last().copied());
    }
});
