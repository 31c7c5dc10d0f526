use super::tree;
use super::PriorityQueue;

impl PriorityQueue {
    // moves the entry at `node` towards the root while it is
    // strictly greater than its parent
    pub(super) fn sift_up(&mut self, mut node: usize) {
        while let Some(parent) = tree::parent(node) {
            if self.entries.priority(node) <= self.entries.priority(parent) {
                break;
            }
            self.entries.swap(node, parent);
            node = parent;
        }
    }

    // moves the entry at `node` towards the leaves while one of
    // its children is strictly greater. the right child is only
    // chosen when it beats the left one
    pub(super) fn sift_down(&mut self, mut node: usize) {
        let len = self.entries.len();
        loop {
            let larger_child = match tree::children(node, len) {
                (None, _) => break,
                (Some(left), None) => left,
                (Some(left), Some(right)) => {
                    if self.entries.priority(right) > self.entries.priority(left) {
                        right
                    } else {
                        left
                    }
                }
            };
            if self.entries.priority(larger_child) <= self.entries.priority(node) {
                break;
            }
            self.entries.swap(node, larger_child);
            node = larger_child;
        }
    }
}
