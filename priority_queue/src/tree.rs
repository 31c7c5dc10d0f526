// index arithmetic for a complete binary tree laid out
// level by level in a flat array, root at index 0

enum TreeDir {
    Left,
    Right,
}

pub fn root() -> usize {
    0
}

pub fn parent(node: usize) -> Option<usize> {
    if node == root() {
        None
    } else {
        Some((node - 1) / 2)
    }
}

fn child(node: usize, dir: TreeDir, len: usize) -> Option<usize> {
    let child = match dir {
        TreeDir::Left => 2 * node + 1,
        TreeDir::Right => 2 * node + 2,
    };
    if child < len {
        Some(child)
    } else {
        None
    }
}

pub fn children(node: usize, len: usize) -> (Option<usize>, Option<usize>) {
    (
        child(node, TreeDir::Left, len),
        child(node, TreeDir::Right, len),
    )
}
