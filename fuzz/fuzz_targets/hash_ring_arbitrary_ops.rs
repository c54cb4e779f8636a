#![no_main]

use libfuzzer_sys::fuzz_target;
use ringkit::ring::Ring;

// Fuzz arbitrary membership and lookup sequences
//
// Each operation is two bytes: opcode and argument. Structural invariants are
// checked after every mutation, and lookups must resolve to a member whenever
// the ring is non-empty.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let max_replicas = (data[0] as usize % 32) + 1;
    let mut ring: Ring<String> = ringkit::builder::HashRingBuilder::new()
        .replicas(max_replicas)
        .build_ring();

    for op in data[1..].chunks(2) {
        let arg = op.get(1).copied().unwrap_or(0);
        let node = format!("node-{}", arg % 16);

        match op[0] % 6 {
            0 => {
                let placed = ring.add_node(node.clone());
                assert_eq!(placed, max_replicas);
                assert_eq!(ring.replicas_of(&node), Some(max_replicas));
            },
            1 => {
                let requested = (arg as usize) % 48;
                let placed = ring.add_node_with_replicas(node.clone(), requested);
                assert_eq!(placed, requested.min(max_replicas));
                assert_eq!(ring.contains(&node), placed > 0);
            },
            2 => {
                let was_member = ring.contains(&node);
                assert_eq!(ring.remove_node(&node), was_member);
                assert!(!ring.contains(&node));
            },
            3 => {
                let key = format!("key-{arg}");
                match ring.get(&key) {
                    Some(owner) => assert!(ring.contains(owner)),
                    None => assert!(ring.is_empty()),
                }
                assert_eq!(ring.get(&key), ring.get(&key));
            },
            4 => {
                let n = (arg as usize) % 8;
                let owners = ring.get_n(&format!("key-{arg}"), n);
                assert_eq!(owners.len(), n.min(ring.len()));
                if let Some(first) = owners.first() {
                    assert_eq!(Some(*first), ring.get(&format!("key-{arg}")));
                }
            },
            _ => {
                if arg % 8 == 0 {
                    ring.clear();
                    assert!(ring.is_empty());
                    assert_eq!(ring.vnode_count(), 0);
                }
            },
        }

        ring.check_invariants().unwrap();
    }
});
