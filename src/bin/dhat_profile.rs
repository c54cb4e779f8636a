//! DHAT heap profiler for ringkit.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use ringkit::ring::{DEFAULT_REPLICAS, Ring};

const LOOKUPS: usize = 100_000;

fn node(n: usize) -> String {
    format!("10.0.{}.{}:6379", n / 256, n % 256)
}

/// Lookups on a settled ring; these should not allocate beyond key rendering.
fn lookup_workload(ring: &Ring<String>, operations: usize) {
    let mut key = String::new();
    let mut resolved = 0usize;
    for i in 0..operations {
        key.clear();
        key.push_str("user:");
        key.push_str(&i.to_string());
        if ring.get(key.as_str()).is_some() {
            resolved += 1;
        }
    }
    println!("  Resolved: {resolved}/{operations}");
}

/// Replication lookups allocate one preference list per call.
fn preference_workload(ring: &Ring<String>, operations: usize) {
    let mut total = 0usize;
    for i in 0..operations {
        total += ring.get_n(&format!("blob:{i}"), 3).len();
    }
    println!("  Owners returned: {total}");
}

/// Nodes leaving and rejoining with varying weights.
fn churn_workload(ring: &mut Ring<String>, rounds: usize) {
    for round in 0..rounds {
        let n = round % 16;
        ring.remove_node(&node(n));
        ring.add_node_with_replicas(node(n), 25 + (round * 7) % (DEFAULT_REPLICAS - 25));
    }
    println!("  Vnodes after churn: {}", ring.vnode_count());
}

fn profile_small_ring() {
    println!("=== Profiling 8-node ring ===");
    let mut ring = Ring::new();
    for n in 0..8 {
        ring.add_node(node(n));
    }
    lookup_workload(&ring, LOOKUPS);
    preference_workload(&ring, LOOKUPS / 10);
    churn_workload(&mut ring, 200);
    println!("  Final members: {}", ring.len());
}

fn profile_large_ring() {
    println!("=== Profiling 512-node ring ===");
    let mut ring = Ring::new();
    for n in 0..512 {
        ring.add_node(node(n));
    }
    lookup_workload(&ring, LOOKUPS);
    preference_workload(&ring, LOOKUPS / 10);
    churn_workload(&mut ring, 1_000);
    ring.clear();
    println!("  Final members: {}", ring.len());
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("ringkit DHAT Heap Profiling");
    println!("===========================\n");

    profile_small_ring();
    profile_large_ring();

    println!("\n===========================");
    println!("Profile written to dhat-heap.json");
}
