//! The player's clue notebook
//!
//! An unbalanced binary search tree of clue names. In-order traversal
//! gives the clues alphabetically.

use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueNode {
    pub clue: String,
    pub left: Option<Box<ClueNode>>,
    pub right: Option<Box<ClueNode>>,
}

impl ClueNode {
    pub fn new(clue: &str) -> Self {
        Self {
            clue: clue.to_string(),
            left: None,
            right: None,
        }
    }
}

/// Insert `clue` below `root` and hand back the root.
///
/// An empty tree becomes a single node. Equal keys insert nothing.
/// Callers rebind their handle to the returned root.
pub fn insert_clue(root: Option<Box<ClueNode>>, clue: &str) -> Option<Box<ClueNode>> {
    match root {
        None => Some(Box::new(ClueNode::new(clue))),
        Some(mut node) => {
            match clue.cmp(node.clue.as_str()) {
                Ordering::Less => node.left = insert_clue(node.left.take(), clue),
                Ordering::Greater => node.right = insert_clue(node.right.take(), clue),
                Ordering::Equal => {}
            }
            Some(node)
        }
    }
}

/// Ordered set of collected clues
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueSet {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clue. Returns false if it was already in the set.
    pub fn insert(&mut self, clue: &str) -> bool {
        if self.contains(clue) {
            return false;
        }
        self.root = insert_clue(self.root.take(), clue);
        self.len += 1;
        true
    }

    pub fn contains(&self, clue: &str) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match clue.cmp(node.clue.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Clue names in ascending order. Does not mutate, so it can be
    /// called as often as needed.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }

    pub fn root(&self) -> Option<&ClueNode> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree; a degenerate tree has depth == len
    pub fn depth(&self) -> usize {
        fn depth_of(node: Option<&ClueNode>) -> usize {
            match node {
                None => 0,
                Some(n) => 1 + depth_of(n.left.as_deref()).max(depth_of(n.right.as_deref())),
            }
        }
        depth_of(self.root.as_deref())
    }
}

impl<'a> IntoIterator for &'a ClueSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy in-order traversal
pub struct Iter<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(node.clue.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(set: &ClueSet) -> Vec<&str> {
        set.iter().collect()
    }

    #[test]
    fn empty_set() {
        let set = ClueSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().next(), None);
    }

    #[test]
    fn iterates_in_ascending_order() {
        let mut set = ClueSet::new();
        for clue in ["Relogio", "Faca", "Veneno", "Castiçal", "Luvas"] {
            assert!(set.insert(clue));
        }
        assert_eq!(collect(&set), vec!["Castiçal", "Faca", "Luvas", "Relogio", "Veneno"]);
        assert_eq!(set.len(), 5);
    }

    fn permutations(items: &[&'static str]) -> Vec<Vec<&'static str>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut out = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.to_vec();
            let first = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, first);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn every_insertion_order_iterates_ascending() {
        let clues = ["Faca", "Veneno", "Relogio", "Luvas", "Castiçal"];
        let orders = permutations(&clues);
        assert_eq!(orders.len(), 120);

        for order in orders {
            let mut set = ClueSet::new();
            for clue in &order {
                assert!(set.insert(clue));
            }
            // a repeat, picked from the middle of the order
            assert!(!set.insert(order[2]));

            let sorted = collect(&set);
            assert_eq!(sorted.len(), 5, "order {:?}", order);
            assert!(sorted.windows(2).all(|w| w[0] < w[1]), "order {:?} gave {:?}", order, sorted);
            assert_eq!(set.len(), 5);
        }
    }

    #[test]
    fn duplicate_insert_is_noop() {
        let mut set = ClueSet::new();
        set.insert("Faca");
        set.insert("Veneno");
        let before = set.clone();
        assert!(!set.insert("Faca"));
        assert_eq!(set, before);
        assert_eq!(collect(&set), vec!["Faca", "Veneno"]);
    }

    #[test]
    fn insert_clue_rebinds_root() {
        let root = insert_clue(None, "Luvas");
        let root = insert_clue(root, "Faca");
        let root = insert_clue(root, "Relogio");
        let root = insert_clue(root, "Faca");

        let node = root.as_deref().unwrap();
        assert_eq!(node.clue, "Luvas");
        assert_eq!(node.left.as_ref().unwrap().clue, "Faca");
        assert_eq!(node.right.as_ref().unwrap().clue, "Relogio");
        assert!(node.left.as_ref().unwrap().left.is_none());
        assert!(node.left.as_ref().unwrap().right.is_none());
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let mut set = ClueSet::new();
        set.insert("faca");
        set.insert("Faca");
        // uppercase sorts before lowercase
        assert_eq!(collect(&set), vec!["Faca", "faca"]);
    }

    #[test]
    fn sorted_insertion_degenerates() {
        let mut set = ClueSet::new();
        for clue in ["a", "b", "c", "d"] {
            set.insert(clue);
        }
        assert_eq!(set.depth(), 4);
        assert_eq!(collect(&set), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn traversal_is_restartable() {
        let mut set = ClueSet::new();
        set.insert("Veneno");
        set.insert("Faca");
        let first: Vec<_> = set.iter().collect();
        let second: Vec<_> = (&set).into_iter().collect();
        assert_eq!(first, second);
        assert!(set.contains("Faca"));
        assert!(!set.contains("Luvas"));
    }
}
