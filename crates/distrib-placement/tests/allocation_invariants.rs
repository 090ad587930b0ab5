//! Invariant tests for the allocator.
//!
//! 1. Capacity: placed sizes on a node never exceed its capacity.
//! 2. Conservation: every item lands exactly once, placed or unplaced.
//! 3. Determinism: identical inputs give identical allocations.
//! 4. The indexed selection agrees with a plain linear scan.
//! 5. Scale: a large generated run keeps 1 and 2.

use distrib_core::{GeneratorOptions, Item, Node, generate_text, parse_records};
use distrib_placement::{Allocation, allocate, records_to_items, records_to_nodes};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn build_nodes(caps: &[u32]) -> Vec<Node> {
    caps.iter()
        .enumerate()
        .map(|(i, &c)| Node::new(format!("node_{i}"), f64::from(c)).unwrap())
        .collect()
}

fn build_items(sizes: &[u32]) -> Vec<Item> {
    sizes
        .iter()
        .enumerate()
        .map(|(i, &s)| Item::new(format!("file_{i}"), f64::from(s)).unwrap())
        .collect()
}

fn assert_capacity(nodes: &[Node], alloc: &Allocation) {
    for (i, node) in nodes.iter().enumerate() {
        let placed: f64 = alloc.placements[i].iter().map(Item::size).sum();
        assert!(
            placed <= node.capacity(),
            "node {} holds {} over capacity {}",
            node.name(),
            placed,
            node.capacity()
        );
        assert_eq!(alloc.residual[i], node.capacity() - placed);
    }
}

fn assert_conservation(items: &[Item], alloc: &Allocation) {
    let mut seen: Vec<&str> = alloc
        .placements
        .iter()
        .flatten()
        .chain(&alloc.unplaced)
        .map(Item::name)
        .collect();
    seen.sort_unstable();

    let mut expected: Vec<&str> = items.iter().map(Item::name).collect();
    expected.sort_unstable();

    assert_eq!(seen, expected);
}

/// Straightforward O(items × nodes) version of the placement rule.
fn linear_scan(nodes: &[Node], items: &[Item]) -> (Vec<Vec<String>>, Vec<String>) {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        items[b]
            .size()
            .partial_cmp(&items[a].size())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut used = vec![0.0; nodes.len()];
    let mut placed = vec![Vec::new(); nodes.len()];
    let mut unplaced = Vec::new();

    for idx in order {
        let item = &items[idx];
        let mut best: Option<usize> = None;
        for (n, node) in nodes.iter().enumerate() {
            if node.capacity() - used[n] >= item.size() && best.is_none_or(|b| used[n] < used[b]) {
                best = Some(n);
            }
        }
        match best {
            Some(n) => {
                used[n] += item.size();
                placed[n].push(item.name().to_string());
            }
            None => unplaced.push(item.name().to_string()),
        }
    }
    (placed, unplaced)
}

fn names(alloc: &Allocation) -> (Vec<Vec<String>>, Vec<String>) {
    let placed = alloc
        .placements
        .iter()
        .map(|p| p.iter().map(|i| i.name().to_string()).collect())
        .collect();
    let unplaced = alloc.unplaced.iter().map(|i| i.name().to_string()).collect();
    (placed, unplaced)
}

// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn capacity_and_conservation_hold(
        caps in proptest::collection::vec(0u32..=200, 0..12),
        sizes in proptest::collection::vec(0u32..=80, 0..150),
    ) {
        let nodes = build_nodes(&caps);
        let items = build_items(&sizes);
        let alloc = allocate(&nodes, &items).unwrap();

        assert_capacity(&nodes, &alloc);
        assert_conservation(&items, &alloc);
        prop_assert_eq!(alloc.placements.len(), nodes.len());
        prop_assert_eq!(alloc.placed_count() + alloc.unplaced_count(), items.len());
    }

    #[test]
    fn allocation_is_deterministic(
        caps in proptest::collection::vec(0u32..=200, 0..8),
        sizes in proptest::collection::vec(0u32..=50, 0..100),
    ) {
        let nodes = build_nodes(&caps);
        let items = build_items(&sizes);
        prop_assert_eq!(allocate(&nodes, &items).unwrap(), allocate(&nodes, &items).unwrap());
    }

    #[test]
    fn matches_linear_scan(
        caps in proptest::collection::vec(0u32..=100, 0..10),
        sizes in proptest::collection::vec(0u32..=40, 0..120),
    ) {
        let nodes = build_nodes(&caps);
        let items = build_items(&sizes);
        let alloc = allocate(&nodes, &items).unwrap();
        prop_assert_eq!(names(&alloc), linear_scan(&nodes, &items));
    }
}

// ── Scale ───────────────────────────────────────────────────────────────

fn generated_run(node_count: usize, file_count: usize) {
    let node_text = generate_text(&GeneratorOptions::new("nodes", node_count).with_seed(11)).unwrap();
    let file_text = generate_text(
        &GeneratorOptions::new("files", file_count)
            .with_bounds(10, 100)
            .with_seed(12),
    )
    .unwrap();

    let nodes = records_to_nodes(&parse_records(&node_text).unwrap()).unwrap();
    let items = records_to_items(&parse_records(&file_text).unwrap()).unwrap();
    let alloc = allocate(&nodes, &items).unwrap();

    assert_capacity(&nodes, &alloc);
    assert_conservation(&items, &alloc);
}

#[test]
fn scale_hundred_thousand_items() {
    generated_run(100, 100_000);
}

#[test]
#[ignore = "full-size run, slow in debug builds"]
fn scale_million_items_thousand_nodes() {
    generated_run(1_000, 1_000_000);
}
