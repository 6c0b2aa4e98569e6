use bst::tree::Tree;

use std::collections::{BTreeSet, HashSet};

/// The height a tree built from `n` distinct sorted keys must have.
fn minimal_height(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

fn sorted<'a>(keys: impl Iterator<Item = &'a i8>) -> Vec<i8> {
    let mut keys: Vec<i8> = keys.copied().collect();
    keys.sort_unstable();
    keys
}

fn is_strictly_ascending(xs: &[i8]) -> bool {
    xs.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn new_sorts_and_dedups(xs: Vec<i8>) -> bool {
    let tree = Tree::new(xs.clone());
    let expected: BTreeSet<_> = xs.into_iter().collect();

    tree.len() == expected.len() && tree.in_order().eq(expected.iter())
}

#[quickcheck]
fn new_has_minimal_height(xs: Vec<i16>) -> bool {
    let tree = Tree::new(xs);

    tree.height() == minimal_height(tree.len()) && tree.is_balanced()
}

#[quickcheck]
fn contains(xs: Vec<i8>, inserts: Vec<i8>) -> bool {
    let mut tree = Tree::new(xs.clone());
    tree.extend(inserts.iter().copied());

    xs.iter()
        .chain(&inserts)
        .all(|x| tree.find(x).map(|n| n.key()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::new(xs.clone());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new(xs.clone());
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present: BTreeSet<_> = xs.into_iter().collect();
    for delete in &deletes {
        still_present.remove(delete);
    }

    let in_order: Vec<i8> = tree.in_order().copied().collect();
    deletes.iter().all(|x| tree.find(x).is_none())
        && in_order.iter().eq(still_present.iter())
        && is_strictly_ascending(&in_order)
}

#[quickcheck]
fn delete_missing_keeps_shape(xs: Vec<i8>, inserts: Vec<i8>, missing: i8) -> bool {
    let mut tree = Tree::new(xs);
    tree.extend(inserts);
    if tree.contains(&missing) {
        return true;
    }
    let before: Vec<i8> = tree.level_order().copied().collect();

    !tree.delete(&missing) && tree.level_order().copied().eq(before)
}

#[quickcheck]
fn rebalance_keeps_order(xs: Vec<i8>, inserts: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new(xs);
    tree.extend(inserts);
    for delete in &deletes {
        tree.delete(delete);
    }
    let before: Vec<i8> = tree.in_order().copied().collect();

    tree.rebalance();

    tree.is_balanced()
        && tree.height() == minimal_height(before.len())
        && tree.in_order().copied().eq(before)
}

#[quickcheck]
fn traversals_visit_every_key_once(xs: Vec<i8>, inserts: Vec<i8>) -> bool {
    let mut tree = Tree::new(xs);
    tree.extend(inserts);

    let in_order: Vec<i8> = tree.in_order().copied().collect();

    sorted(tree.level_order()) == in_order
        && sorted(tree.pre_order()) == in_order
        && sorted(tree.post_order()) == in_order
}

#[quickcheck]
fn width_never_exceeds_len(xs: Vec<i8>, inserts: Vec<i8>) -> bool {
    let mut tree = Tree::new(xs);
    tree.extend(inserts);

    tree.width() <= tree.len()
        && tree.height() <= tree.len()
        && tree.width() * tree.height() >= tree.len()
}
