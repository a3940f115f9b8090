/// Iterates over every k-element subset of `0..n` as a bitmask.
///
/// Subsets come out in colexicographic order by stepping to the next
/// integer with the same number of set bits. It is memory efficient because
/// it does not store the subsets, and deterministic because it always
/// iterates in the same order.
pub struct Subsets {
    next: u32,
    n: usize,
}

impl Subsets {
    /// Lists the set bits of a subset mask, lowest first.
    pub fn indices<const K: usize>(mask: u32) -> [usize; K] {
        debug_assert!(mask.count_ones() as usize == K);
        let mut bits = mask;
        std::array::from_fn(|_| {
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            index
        })
    }

    fn exhausted(&self) -> bool {
        self.next >> self.n != 0
    }

    fn permute(&self) -> u32 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }
}

impl Iterator for Subsets {
    type Item = u32;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let mask = self.next;
            self.next = self.permute();
            Some(mask)
        }
    }
}

/// (n, k) — size is fixed at construction
impl From<(usize, usize)> for Subsets {
    fn from((n, k): (usize, usize)) -> Self {
        assert!(0 < k && k <= n && n < 32);
        Self {
            next: (1 << k) - 1,
            n,
        }
    }
}
