/// Weighted quick-union over a fixed universe `0..len`.
///
/// Every element starts in its own component. Trees are merged by size, so
/// their height stays within `log2(len)` and `union`/`connected` are
/// logarithmic. Queries never restructure the trees and take `&self`.
///
/// Element indices are trusted: passing an index `>= len` panics the same
/// way slice indexing does.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the canonical root of the component containing `p`.
    pub fn find(&self, mut p: usize) -> usize {
        while self.parent[p] != p {
            p = self.parent[p];
        }
        p
    }

    pub fn connected(&self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }

    /// Merges components containing `p` and `q`.
    /// Returns `false` if they were already the same component.
    pub fn union(&mut self, p: usize, q: usize) -> bool {
        let root_p = self.find(p);
        let root_q = self.find(q);
        if root_p == root_q {
            return false;
        }

        // smaller tree goes under the larger one
        let (small, large) = if self.size[root_p] < self.size[root_q] {
            (root_p, root_q)
        } else {
            (root_q, root_p)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.count -= 1;
        true
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::UnionFind;

    #[test]
    fn starts_disjoint() {
        let uf = UnionFind::new(4);
        assert_eq!(uf.len(), 4);
        assert_eq!(uf.count(), 4);
        for i in 0..4 {
            assert_eq!(uf.find(i), i);
            for j in 0..4 {
                assert_eq!(uf.connected(i, j), i == j);
            }
        }
    }

    #[test]
    fn union_is_transitive() {
        let mut uf = UnionFind::new(6);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(!uf.connected(1, 2));
        assert!(uf.union(1, 3));
        assert!(uf.connected(0, 2));
        assert!(!uf.connected(0, 4));
        assert_eq!(uf.count(), 3);
    }

    #[test]
    fn repeated_union_is_noop() {
        let mut uf = UnionFind::new(3);
        assert!(uf.union(0, 2));
        assert!(!uf.union(2, 0));
        assert!(!uf.union(0, 0));
        assert_eq!(uf.count(), 2);
    }

    #[test]
    fn long_chain_stays_connected() {
        let n = 10_000;
        let mut uf = UnionFind::new(n);
        for i in 1..n {
            uf.union(i - 1, i);
        }
        assert_eq!(uf.count(), 1);
        assert!(uf.connected(0, n - 1));
        assert_eq!(uf.find(0), uf.find(n / 2));
    }

    #[test]
    fn trees_stay_shallow() {
        let n = 1 << 12;
        let mut uf = UnionFind::new(n);
        // equal-size merges are the worst case for tree height
        let mut step = 1;
        while step < n {
            for i in (0..n).step_by(2 * step) {
                uf.union(i, i + step);
            }
            step *= 2;
        }
        assert_eq!(uf.count(), 1);
        let depth = |mut p: usize| {
            let mut d = 0;
            while uf.parent[p] != p {
                p = uf.parent[p];
                d += 1;
            }
            d
        };
        assert!((0..n).all(|p| depth(p) <= 12));
    }

    #[test]
    fn empty() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.count(), 0);
    }

    #[test]
    #[should_panic]
    fn out_of_universe_panics() {
        let uf = UnionFind::new(2);
        uf.find(2);
    }
}
