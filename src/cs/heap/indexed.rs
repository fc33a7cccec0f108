use crate::graph::{Vertex, NIL};

/// Binary min-heap over vertex ids that tracks where every vertex sits.
///
/// The heap stores vertex ids only. Priorities live in a distance slice
/// owned by the caller and are passed to every operation that compares,
/// so the caller can lower `dist[v]` between calls and then repair the heap
/// in place with [`IndexedMinHeap::sift_up`] at `position(v)`.
///
/// Slots are 1-based: `a[1]` is the root, the children of slot `k` are
/// `2k` and `2k + 1`. Slot 0 is never occupied, which lets `position`
/// use 0 for "not in the heap".
///
/// # Examples
/// ```
/// use adjgraph::heap::IndexedMinHeap;
///
/// let mut dist = vec![u32::MAX, 7, 3, 5];
/// let mut heap = IndexedMinHeap::new(3);
/// for v in 1..=3 {
///     heap.insert(v, &dist);
/// }
///
/// // decrease-key: lower the priority, then sift at the known slot
/// dist[1] = 1;
/// heap.sift_up(heap.position(1), &dist);
///
/// assert_eq!(heap.remove(&dist), 1);
/// assert_eq!(heap.remove(&dist), 2);
/// assert_eq!(heap.remove(&dist), 3);
/// assert!(heap.is_empty());
/// ```
///
/// # Panics
/// Removing from an empty heap, inserting a vertex that is already present,
/// exceeding the capacity, or sifting an unoccupied slot panics. These are
/// logic errors in the caller and the heap refuses to continue with
/// corrupted bookkeeping.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    a: Vec<Vertex>,
    pos: Vec<usize>,
    len: usize,
}

impl IndexedMinHeap {
    /// Creates an empty heap for vertices `1..=capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            a: vec![NIL; capacity + 1],
            pos: vec![0; capacity + 1],
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.a.len() - 1
    }

    /// Slot currently holding `v`, or 0 if `v` is not in the heap.
    pub fn position(&self, v: Vertex) -> usize {
        self.pos[v]
    }

    pub fn contains(&self, v: Vertex) -> bool {
        v < self.pos.len() && self.pos[v] != 0
    }

    /// Vertex with the smallest priority, without removing it.
    pub fn peek(&self) -> Option<Vertex> {
        if self.is_empty() {
            None
        } else {
            Some(self.a[1])
        }
    }

    /// Appends `v` at the next free slot and sifts it up.
    pub fn insert<W: Ord>(&mut self, v: Vertex, dist: &[W]) {
        assert!(
            v != NIL && v < self.pos.len(),
            "vertex {v} outside heap capacity {}",
            self.capacity()
        );
        assert!(self.pos[v] == 0, "vertex {v} is already in the heap");
        assert!(self.len < self.capacity(), "heap is full");

        self.len += 1;
        self.a[self.len] = v;
        self.pos[v] = self.len;
        self.sift_up(self.len, dist);
    }

    /// Moves the vertex at slot `k` towards the root while its parent has a
    /// strictly greater priority.
    ///
    /// This is the decrease-key operation: the priority of `a[k]` must not
    /// have increased since it was last placed, because the vertex is never
    /// moved downwards here.
    pub fn sift_up<W: Ord>(&mut self, mut k: usize, dist: &[W]) {
        assert!(
            k >= 1 && k <= self.len,
            "slot {k} is not occupied (heap size {})",
            self.len
        );

        let v = self.a[k];
        while k > 1 && dist[v] < dist[self.a[k / 2]] {
            let parent = self.a[k / 2];
            self.a[k] = parent;
            self.pos[parent] = k;
            k /= 2;
        }
        self.a[k] = v;
        self.pos[v] = k;
    }

    /// Removes and returns the vertex with the smallest priority.
    pub fn remove<W: Ord>(&mut self, dist: &[W]) -> Vertex {
        assert!(!self.is_empty(), "remove called on an empty heap");

        let v = self.a[1];
        self.pos[v] = 0;
        self.a[1] = self.a[self.len];
        self.a[self.len] = NIL;
        self.len -= 1;
        if self.len > 0 {
            self.sift_down(1, dist);
        }
        v
    }

    fn sift_down<W: Ord>(&mut self, mut k: usize, dist: &[W]) {
        let v = self.a[k];
        while 2 * k <= self.len {
            let mut j = 2 * k;
            // ties stay with the left child
            if j < self.len && dist[self.a[j]] > dist[self.a[j + 1]] {
                j += 1;
            }
            if dist[v] <= dist[self.a[j]] {
                break;
            }
            let child = self.a[j];
            self.a[k] = child;
            self.pos[child] = k;
            k = j;
        }
        self.a[k] = v;
        self.pos[v] = k;
    }
}
