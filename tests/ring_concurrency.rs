// ==============================================
// HASH RING CONCURRENCY TESTS (integration)
// ==============================================
//
// Readers and writers sharing one HashRing through Arc. These require
// multi-threaded execution and cannot live inline.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use ringkit::ring::{DEFAULT_REPLICAS, HashRing};

fn key(i: usize) -> String {
    format!("key:{i}")
}

// ==============================================
// Readers During Membership Churn
// ==============================================
//
// A node that stays registered for the whole test guarantees the ring is
// never empty, so every lookup must resolve even while other nodes are being
// added and removed.

mod churn {
    use super::*;

    #[test]
    fn readers_always_resolve_while_writers_churn() {
        let ring: Arc<HashRing<String>> = Arc::new(HashRing::new());
        ring.add_node("stable".to_string());

        let stop = Arc::new(AtomicBool::new(false));
        let misses = Arc::new(AtomicUsize::new(0));
        let barrier = Arc::new(Barrier::new(6));

        let mut writers = Vec::new();
        for w in 0..2 {
            let ring = ring.clone();
            let barrier = barrier.clone();
            writers.push(thread::spawn(move || {
                barrier.wait();
                for round in 0..200 {
                    let node = format!("churn-{w}-{}", round % 5);
                    ring.add_node_with_replicas(node.clone(), 10 + round % 90);
                    if round % 2 == 0 {
                        ring.remove_node(&node);
                    }
                }
            }));
        }

        let mut readers = Vec::new();
        for r in 0..4 {
            let ring = ring.clone();
            let barrier = barrier.clone();
            let stop = stop.clone();
            let misses = misses.clone();
            readers.push(thread::spawn(move || {
                barrier.wait();
                let mut i = r;
                while !stop.load(Ordering::Relaxed) {
                    if ring.get(&key(i)).is_none() {
                        misses.fetch_add(1, Ordering::Relaxed);
                    }
                    i += 4;
                }
            }));
        }

        for writer in writers {
            writer.join().unwrap();
        }
        stop.store(true, Ordering::Relaxed);
        for reader in readers {
            reader.join().unwrap();
        }

        assert_eq!(misses.load(Ordering::Relaxed), 0, "lookup missed on a non-empty ring");
        ring.check_invariants().unwrap();
        assert!(ring.contains("stable"));
    }

    #[test]
    fn readers_never_observe_partial_mutation() {
        let ring: Arc<HashRing<String>> = Arc::new(HashRing::new());
        ring.add_node("anchor".to_string());

        let stop = Arc::new(AtomicBool::new(false));
        let barrier = Arc::new(Barrier::new(3));

        let writer = {
            let ring = ring.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for round in 0..300 {
                    let node = format!("n{}", round % 7);
                    ring.add_node_with_replicas(node.clone(), 1 + round % DEFAULT_REPLICAS);
                    if round % 3 == 0 {
                        ring.remove_node(&node);
                    }
                }
            })
        };

        let checkers: Vec<_> = (0..2)
            .map(|_| {
                let ring = ring.clone();
                let barrier = barrier.clone();
                let stop = stop.clone();
                thread::spawn(move || {
                    barrier.wait();
                    let mut checks = 0usize;
                    while !stop.load(Ordering::Relaxed) || checks == 0 {
                        // One read lock for the whole validation pass.
                        ring.read_with(|view| view.check_invariants())
                            .expect("reader observed a torn ring");
                        checks += 1;
                    }
                    checks
                })
            })
            .collect();

        writer.join().unwrap();
        stop.store(true, Ordering::Relaxed);
        for checker in checkers {
            assert!(checker.join().unwrap() > 0);
        }
    }
}

// ==============================================
// Concurrent Writers
// ==============================================

mod writers {
    use super::*;

    #[test]
    fn concurrent_adds_of_distinct_nodes_all_land() {
        let ring: Arc<HashRing<String>> = Arc::new(HashRing::new());
        let threads = 8;
        let per_thread = 5;
        let barrier = Arc::new(Barrier::new(threads));

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let ring = ring.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    for n in 0..per_thread {
                        ring.add_node(format!("node-{t}-{n}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(ring.len(), threads * per_thread);
        ring.check_invariants().unwrap();
        for t in 0..threads {
            for n in 0..per_thread {
                assert_eq!(ring.replicas_of(&format!("node-{t}-{n}")), Some(DEFAULT_REPLICAS));
            }
        }
    }

    #[test]
    fn concurrent_re_adds_of_one_node_converge() {
        let ring: Arc<HashRing<String>> = Arc::new(HashRing::new());
        let barrier = Arc::new(Barrier::new(4));

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let ring = ring.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    for _ in 0..50 {
                        ring.add_node_with_replicas("shared".to_string(), 10 * (t + 1));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Whichever add ran last wins; there is never a mix of two adds.
        let replicas = ring.replicas_of("shared").unwrap();
        assert!([10, 20, 30, 40].contains(&replicas));
        assert_eq!(ring.len(), 1);
        assert_eq!(ring.vnode_count(), replicas);
        ring.check_invariants().unwrap();
    }

    #[test]
    fn writes_are_visible_to_lookups_after_return() {
        let ring: Arc<HashRing<String>> = Arc::new(HashRing::new());

        let writer = {
            let ring = ring.clone();
            thread::spawn(move || {
                ring.add_node("late".to_string());
            })
        };
        writer.join().unwrap();

        for i in 0..100 {
            assert_eq!(ring.get(&key(i)).as_deref(), Some("late"));
        }

        let remover = {
            let ring = ring.clone();
            thread::spawn(move || ring.remove_node("late"))
        };
        assert!(remover.join().unwrap());
        assert_eq!(ring.get(&key(0)), None);
    }
}
