//! Exercises a tree with random keys: build it, print it, unbalance it with more inserts, then
//! rebalance it and print it again. Set `RUST_LOG=debug` to see what the tree logs.

use bst::tree::Tree;
use rand::Rng;

/// How many random keys to generate per batch.
const BATCH_SIZE: usize = 10;

/// Random keys are drawn from `0..KEY_RANGE`.
const KEY_RANGE: u32 = 100;

fn random_keys(rng: &mut impl Rng) -> Vec<u32> {
    (0..BATCH_SIZE).map(|_| rng.gen_range(0..KEY_RANGE)).collect()
}

fn join(keys: impl Iterator<Item = impl ToString>) -> String {
    keys.map(|key| key.to_string()).collect::<Vec<_>>().join(",")
}

fn report(tree: &Tree<u32>) {
    print!("{}", tree);
    println!("Is balanced? {}", tree.is_balanced());
    println!("Height: {}, width: {}", tree.height(), tree.width());
    println!("Level order traversal: {}", join(tree.level_order()));
    println!("Pre order traversal: {}", join(tree.pre_order()));
    println!("Post order traversal: {}", join(tree.post_order()));
    println!("In order traversal: {}", join(tree.in_order()));
}

fn main() {
    pretty_env_logger::init();
    let mut rng = rand::thread_rng();

    let mut tree = Tree::new(random_keys(&mut rng));
    report(&tree);

    // Keys above the initial range all land under the current maximum.
    let added = random_keys(&mut rng).into_iter().map(|key| key + KEY_RANGE);
    tree.extend(added);
    println!("Added {} numbers to the tree.", BATCH_SIZE);
    print!("{}", tree);
    println!("Is balanced? {}", tree.is_balanced());

    tree.rebalance();
    report(&tree);
}
