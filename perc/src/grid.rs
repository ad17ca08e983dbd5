use log::trace;

use crate::{Error, Result, UnionFind};

////////////////////////////////////////////////////////////////////////////////

/// An `n`-by-`n` grid of sites, each either blocked or open.
///
/// Rows and columns are 1-based. Connectivity between open sites is tracked
/// incrementally in a [`UnionFind`] over `n * n + 2` elements: one per site in
/// row-major order, plus a virtual top (`n * n`) wired to every site of the
/// first row and a virtual bottom (`n * n + 1`) wired to every site of the last
/// row. The grid percolates iff the two virtual sites share a component.
///
/// For `n == 1` the virtual sites are left unwired and the single site's open
/// flag answers both [`Grid::is_full`] and [`Grid::percolates`].
pub struct Grid {
    dimension: usize,
    open: Vec<bool>,
    open_count: usize,
    sites: UnionFind,
}

impl Grid {
    /// Creates a new grid with all sites blocked.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] if `n == 0` or `n * n + 2` overflows `usize`.
    pub fn new(n: usize) -> Result<Self> {
        let site_count = match n.checked_mul(n) {
            Some(count) if n > 0 && count.checked_add(2).is_some() => count,
            _ => return Err(Error::InvalidDimension(n)),
        };

        let mut grid = Self {
            dimension: n,
            open: vec![false; site_count],
            open_count: 0,
            sites: UnionFind::new(site_count + 2),
        };
        grid.wire_virtual_sites();
        Ok(grid)
    }

    /// Returns grid dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Opens site (`row`, `col`) if it is not open already and connects it
    /// to its open neighbours. Opening an open site does nothing.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let index = self.index(row, col)?;
        if self.open[index] {
            return Ok(());
        }

        self.open[index] = true;
        self.open_count += 1;
        trace!("open ({row}, {col}), {} sites open", self.open_count);

        let (r, c) = (row - 1, col - 1);
        let n = self.dimension;
        for (nr, nc) in self.neighbours(r, c) {
            let neighbour = nr * n + nc;
            if self.open[neighbour] {
                trace!("merge ({row}, {col}) with ({}, {})", nr + 1, nc + 1);
                self.sites.union(index, neighbour);
            }
        }
        Ok(())
    }

    /// Is site (`row`, `col`) open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.open[self.index(row, col)?])
    }

    /// Is site (`row`, `col`) full, i.e. open and connected to the top row
    /// through a chain of open sites?
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        let index = self.index(row, col)?;
        if self.dimension == 1 {
            return Ok(self.open[0]);
        }
        Ok(self.open[index] && self.sites.connected(index, self.virtual_top()))
    }

    /// Returns the number of open sites.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Does any open site of the bottom row connect to an open site of the top row?
    pub fn percolates(&self) -> bool {
        if self.dimension == 1 {
            return self.open[0];
        }
        let (top, bottom) = (self.virtual_top(), self.virtual_bottom());
        self.sites.connected(top, bottom)
    }

    fn virtual_top(&self) -> usize {
        self.dimension * self.dimension
    }

    fn virtual_bottom(&self) -> usize {
        self.dimension * self.dimension + 1
    }

    fn wire_virtual_sites(&mut self) {
        let n = self.dimension;
        if n == 1 {
            return;
        }
        let (top, bottom) = (self.virtual_top(), self.virtual_bottom());
        for col in 0..n {
            self.sites.union(col, top);
            self.sites.union((n - 1) * n + col, bottom);
        }
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        let n = self.dimension;
        if row == 0 || row > n {
            return Err(Error::RowOutOfBounds {
                index: row,
                dimension: n,
            });
        }
        if col == 0 || col > n {
            return Err(Error::ColumnOutOfBounds {
                index: col,
                dimension: n,
            });
        }
        Ok((row - 1) * n + (col - 1))
    }

    /// Up, down, left and right neighbours of 0-based (`r`, `c`) that lie
    /// inside the grid. No wraparound across row boundaries.
    fn neighbours(&self, r: usize, c: usize) -> impl Iterator<Item = (usize, usize)> {
        let n = self.dimension as isize;
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dr, dc)| {
                let r = r as isize + dr;
                let c = c as isize + dc;
                if r >= 0 && r < n && c >= 0 && c < n {
                    return Some((r as usize, c as usize));
                }
                None
            })
    }
}
