use std::ops::{Index, IndexMut};

use rand::Rng;

use crate::error::GridError;

/// Moore neighborhood offsets in the order returned by [`Grid::neighbors`]:
/// N, NW, W, SW, S, SE, E, NE (y grows downwards).
pub const MOORE_OFFSETS: [(i64, i64); 8] = [
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
];

/// Row-major flat grid of optional slots. `None` marks an empty slot.
/// Dimensions are fixed at construction; `data.len() == w * h` always holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<E> {
    data: Vec<Option<E>>,
    w: usize,
    h: usize,
}

fn invalid(w: usize, h: usize) -> GridError {
    GridError::InvalidDimension {
        width: i64::try_from(w).unwrap_or(i64::MAX),
        height: i64::try_from(h).unwrap_or(i64::MAX),
    }
}

impl<E> Grid<E> {
    /// All-empty grid. A zero width or height gives a valid size-0 grid.
    pub fn new(w: usize, h: usize) -> Result<Self, GridError> {
        let n = w.checked_mul(h).ok_or_else(|| invalid(w, h))?;
        let mut data = Vec::with_capacity(n);
        data.resize_with(n, || None);
        Ok(Self { data, w, h })
    }

    pub fn square(side: usize) -> Result<Self, GridError> {
        Self::new(side, side)
    }

    /// Like [`Grid::new`] for untrusted signed input. Negative dimensions are
    /// rejected.
    pub fn from_signed(width: i64, height: i64) -> Result<Self, GridError> {
        let err = GridError::InvalidDimension { width, height };
        let w = usize::try_from(width).map_err(|_| err.clone())?;
        let h = usize::try_from(height).map_err(|_| err)?;
        Self::new(w, h)
    }

    /// Wraps an existing row-major sequence.
    pub fn from_elements(w: usize, h: usize, data: Vec<Option<E>>) -> Result<Self, GridError> {
        let expected = w.checked_mul(h).ok_or_else(|| invalid(w, h))?;
        if data.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, w, h })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    /// Number of slots, empty ones included.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.w * self.h
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn elements(&self) -> &[Option<E>] {
        &self.data
    }

    /// Replaces every slot at once. The new sequence must have exactly
    /// `capacity()` entries.
    pub fn set_elements(&mut self, data: Vec<Option<E>>) -> Result<(), GridError> {
        if data.len() != self.capacity() {
            return Err(GridError::LengthMismatch {
                expected: self.capacity(),
                actual: data.len(),
            });
        }
        self.data = data;
        Ok(())
    }

    pub fn into_elements(self) -> Vec<Option<E>> {
        self.data
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.w && y < self.h);
        y * self.w + x
    }

    /// # Panics
    /// If the grid has zero width.
    #[inline]
    pub fn x(&self, idx: usize) -> usize {
        idx % self.w
    }

    /// # Panics
    /// If the grid has zero width.
    #[inline]
    pub fn y(&self, idx: usize) -> usize {
        idx / self.w
    }

    /// Element at (x, y). Off-grid coordinates read as an empty slot, which
    /// keeps edge and corner lookups free of special cases.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<&E> {
        if x < 0 || y < 0 || x >= self.w as i64 || y >= self.h as i64 {
            return None;
        }
        self.data[self.idx(x as usize, y as usize)].as_ref()
    }

    pub fn get_index(&self, idx: usize) -> Result<Option<&E>, GridError> {
        self.data
            .get(idx)
            .map(Option::as_ref)
            .ok_or(GridError::IndexOutOfRange {
                index: idx,
                size: self.data.len(),
            })
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Option<E>> {
        if x < self.w && y < self.h {
            let i = self.idx(x, y);
            Some(&mut self.data[i])
        } else {
            None
        }
    }

    /// Overwrites the slot at (x, y). Pass `None` to clear it.
    pub fn put(&mut self, x: usize, y: usize, element: impl Into<Option<E>>) -> Result<(), GridError> {
        if x >= self.w || y >= self.h {
            return Err(GridError::CoordinateOutOfRange {
                x,
                y,
                width: self.w,
                height: self.h,
            });
        }
        let i = self.idx(x, y);
        self.data[i] = element.into();
        Ok(())
    }

    /// Overwrites the slot at `idx`; never shifts other slots.
    pub fn put_index(&mut self, idx: usize, element: impl Into<Option<E>>) -> Result<(), GridError> {
        let size = self.data.len();
        match self.data.get_mut(idx) {
            Some(slot) => {
                *slot = element.into();
                Ok(())
            }
            None => Err(GridError::IndexOutOfRange { index: idx, size }),
        }
    }

    /// The 8 Moore neighbors of (x, y) in [`MOORE_OFFSETS`] order. Off-grid
    /// positions are reported as `None` rather than omitted.
    pub fn neighbors(&self, x: i64, y: i64) -> [Option<&E>; 8] {
        MOORE_OFFSETS.map(|(dx, dy)| {
            x.checked_add(dx)
                .zip(y.checked_add(dy))
                .and_then(|(nx, ny)| self.get(nx, ny))
        })
    }

    /// Neighbors of the cell at `idx`. Unlike [`Grid::neighbors`], the index
    /// itself must be in range.
    pub fn neighbors_of_index(&self, idx: usize) -> Result<[Option<&E>; 8], GridError> {
        if idx >= self.data.len() {
            return Err(GridError::IndexOutOfRange {
                index: idx,
                size: self.data.len(),
            });
        }
        Ok(self.neighbors(self.x(idx) as i64, self.y(idx) as i64))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Option<E>> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Option<E>> {
        self.data.iter_mut()
    }

    /// `(x, y, element)` for every slot in linear order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Option<&E>)> + '_ {
        let w = self.w;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, slot)| (i % w, i / w, slot.as_ref()))
    }

    /// Uniform index in `[0, size)`.
    pub fn random_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, GridError> {
        if self.data.is_empty() {
            return Err(GridError::EmptyDomain("random index of a size-0 grid"));
        }
        Ok(rng.gen_range(0..self.data.len()))
    }

    /// Overwrites every slot with an independent uniform pick from `values`.
    /// Values convert into slots, so `None` entries produce empty slots.
    pub fn populate<V, R>(&mut self, values: &[V], rng: &mut R) -> Result<(), GridError>
    where
        V: Clone + Into<Option<E>>,
        R: Rng + ?Sized,
    {
        if values.is_empty() {
            return Err(GridError::EmptyDomain("populate with no values"));
        }
        for slot in self.data.iter_mut() {
            *slot = values[rng.gen_range(0..values.len())].clone().into();
        }
        log::trace!("populated {}x{} grid from {} values", self.w, self.h, values.len());
        Ok(())
    }
}

impl<E: PartialEq> Grid<E> {
    /// Ascending indexes of slots equal to `value`. `None` matches empty slots.
    pub fn indexes_of(&self, value: Option<&E>) -> Vec<usize> {
        self.data
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| (slot.as_ref() == value).then_some(i))
            .collect()
    }

    pub fn count_of(&self, value: Option<&E>) -> usize {
        self.data.iter().filter(|slot| slot.as_ref() == value).count()
    }

    /// Index of a slot equal to `value`, found by scanning forward (with
    /// wrap-around) from a uniformly random start. Returns 0 when no slot
    /// matches.
    pub fn random_index_of<R: Rng + ?Sized>(
        &self,
        value: Option<&E>,
        rng: &mut R,
    ) -> Result<usize, GridError> {
        let n = self.data.len();
        if n == 0 {
            return Err(GridError::EmptyDomain("random index of a size-0 grid"));
        }
        let start = rng.gen_range(0..n);
        Ok((0..n)
            .map(|k| (start + k) % n)
            .find(|&i| self.data[i].as_ref() == value)
            .unwrap_or(0))
    }
}

impl<E> Index<usize> for Grid<E> {
    type Output = Option<E>;

    fn index(&self, idx: usize) -> &Option<E> {
        &self.data[idx]
    }
}

impl<E> IndexMut<usize> for Grid<E> {
    fn index_mut(&mut self, idx: usize) -> &mut Option<E> {
        &mut self.data[idx]
    }
}

impl<E> Index<(usize, usize)> for Grid<E> {
    type Output = Option<E>;

    fn index(&self, (x, y): (usize, usize)) -> &Option<E> {
        assert!(x < self.w && y < self.h, "({}, {}) outside {}x{} grid", x, y, self.w, self.h);
        &self.data[self.idx(x, y)]
    }
}

impl<E> IndexMut<(usize, usize)> for Grid<E> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Option<E> {
        assert!(x < self.w && y < self.h, "({}, {}) outside {}x{} grid", x, y, self.w, self.h);
        let i = self.idx(x, y);
        &mut self.data[i]
    }
}

impl<E> IntoIterator for Grid<E> {
    type Item = Option<E>;
    type IntoIter = std::vec::IntoIter<Option<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Grid<E> {
    type Item = &'a Option<E>;
    type IntoIter = std::slice::Iter<'a, Option<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, E> IntoIterator for &'a mut Grid<E> {
    type Item = &'a mut Option<E>;
    type IntoIter = std::slice::IterMut<'a, Option<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}
