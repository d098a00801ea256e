//! Union-find (disjoint set union) used by Kruskal's algorithm.
//!
//! Sequential, index-based, with two-pass path compression and union by
//! component size. `union` expects roots that the caller has already
//! found; when both components have the same size, the root with the
//! smaller index becomes the parent, so merge results are reproducible.

#[derive(Clone, Debug)]
pub(super) struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    pub(super) fn new(vertex_count: usize) -> Self {
        Self {
            parent: (0..vertex_count).collect(),
            size: vec![1; vertex_count],
        }
    }

    /// Walks to the root, then re-points every visited vertex directly at
    /// it.
    pub(super) fn find(&mut self, mut vertex: usize) -> usize {
        let mut root = vertex;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[vertex] != vertex {
            let parent = self.parent[vertex];
            self.parent[vertex] = root;
            vertex = parent;
        }

        root
    }

    /// Merges two components given their roots and returns the surviving
    /// root. The smaller component hangs under the larger; equal sizes
    /// attach the larger-index root under the smaller-index root.
    pub(super) fn union(&mut self, a_root: usize, b_root: usize) -> usize {
        debug_assert_eq!(self.parent[a_root], a_root, "union expects a root");
        debug_assert_eq!(self.parent[b_root], b_root, "union expects a root");
        debug_assert_ne!(a_root, b_root, "union expects distinct roots");

        let (parent, child) = match self.size[a_root].cmp(&self.size[b_root]) {
            std::cmp::Ordering::Greater => (a_root, b_root),
            std::cmp::Ordering::Less => (b_root, a_root),
            std::cmp::Ordering::Equal if a_root < b_root => (a_root, b_root),
            std::cmp::Ordering::Equal => (b_root, a_root),
        };

        self.parent[child] = parent;
        self.size[parent] += self.size[child];
        parent
    }

    /// Size of the component containing `vertex`.
    pub(super) fn component_size(&mut self, vertex: usize) -> usize {
        let root = self.find(vertex);
        self.size[root]
    }
}
