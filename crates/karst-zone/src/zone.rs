//! The bordered zone: a 2D cell layer split into border and interior.

use crate::applicator::BinaryApplicator;
use crate::error::ZoneError;
use karst_geom::{Compass, Extent2, Offset2};
use karst_grid::{CellCodec, CodecError, Layer};
use rand::distributions::{Bernoulli, Distribution};
use rand::Rng;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::ops::{AddAssign, Index, IndexMut, SubAssign};
use std::path::Path;

/// Selects which cells of a zone an operation touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// No cells.
    None,
    /// The cells strictly inside the border frame.
    Interior,
    /// The border frame itself.
    Border,
    /// Every cell.
    All,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "None",
            Self::Interior => "Interior",
            Self::Border => "Border",
            Self::All => "All",
        })
    }
}

/// Visit every cell of `region` exactly once.
///
/// `All` and `Interior` walk row-major. `Border` walks the top band
/// row-major, then each middle row as alternating left/right column
/// pairs working inward, then the bottom band row-major. Callers rely
/// on this order being stable: randomization consumes one draw per
/// visited cell.
pub(crate) fn walk_region<F: FnMut(Offset2)>(
    size: Extent2,
    border: Extent2,
    region: Region,
    f: &mut F,
) {
    let (w, h) = (size.w as i32, size.h as i32);
    let (bw, bh) = (border.w as i32, border.h as i32);

    match region {
        Region::None => {}
        Region::All => {
            for y in 0..h {
                for x in 0..w {
                    f(Offset2::new(x, y));
                }
            }
        }
        Region::Interior => {
            for y in bh..h - bh {
                for x in bw..w - bw {
                    f(Offset2::new(x, y));
                }
            }
        }
        Region::Border => {
            for y in 0..h {
                if y < bh || y >= h - bh {
                    for x in 0..w {
                        f(Offset2::new(x, y));
                    }
                } else {
                    for i in 0..bw {
                        f(Offset2::new(i, y));
                        f(Offset2::new(w - 1 - i, y));
                    }
                }
            }
        }
    }
}

/// A fixed-extent 2D cell layer with a border frame.
///
/// The border is a rectangular frame of the given thickness on each
/// axis; everything inside it is the interior. A zero border makes the
/// whole zone interior. Construction requires the border to fit twice
/// along each axis, so the frame's opposite sides never overlap.
///
/// # Examples
///
/// ```
/// use karst_geom::{Extent2, Offset2};
/// use karst_zone::{Region, Zone};
///
/// let mut zone: Zone<bool> = Zone::new(Extent2::new(10, 8), Extent2::new(2, 2)).unwrap();
/// zone.set(Region::Border, &true);
/// assert!(zone[Offset2::new(0, 0)]);
/// assert!(!zone[Offset2::new(5, 4)]);
/// assert_eq!(zone.count(Region::Border, &true), zone.border_area());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Zone<T> {
    cells: Layer<T>,
    border: Extent2,
    interior_origin: Offset2,
    interior_extent: Offset2,
}

impl<T> Zone<T> {
    fn wrap(cells: Layer<T>, border: Extent2) -> Self {
        let size = cells.shape();
        let interior_origin = Offset2::new(border.w as i32, border.h as i32);
        let interior_extent = Offset2::new(
            size.w as i32 - 1 - border.w as i32,
            size.h as i32 - 1 - border.h as i32,
        );
        Self { cells, border, interior_origin, interior_extent }
    }

    /// Create a zone of default-initialised cells.
    ///
    /// Returns [`ZoneError::BorderTooLarge`] unless `size` covers the
    /// border twice along each axis, and propagates grid construction
    /// failures for degenerate or oversized extents.
    pub fn new(size: Extent2, border: Extent2) -> Result<Self, ZoneError>
    where
        T: Default + Clone,
    {
        if !size.covers(border * 2) {
            return Err(ZoneError::BorderTooLarge {
                size: size.to_string(),
                border: border.to_string(),
            });
        }
        Ok(Self::wrap(Layer::new(size)?, border))
    }

    /// Wrap an existing cell layer in a zone.
    pub fn from_layer(cells: Layer<T>, border: Extent2) -> Result<Self, ZoneError> {
        if !cells.shape().covers(border * 2) {
            return Err(ZoneError::BorderTooLarge {
                size: cells.shape().to_string(),
                border: border.to_string(),
            });
        }
        Ok(Self::wrap(cells, border))
    }

    // ── Geometry ────────────────────────────────────────────────

    /// The zone's extent.
    pub fn extent(&self) -> Extent2 {
        self.cells.shape()
    }

    /// The border thickness on each axis.
    pub fn border(&self) -> Extent2 {
        self.border
    }

    /// Total cell count.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Cell count of the interior rectangle.
    pub fn interior_area(&self) -> usize {
        (self.extent() - self.border * 2).area()
    }

    /// Cell count of the border frame.
    pub fn border_area(&self) -> usize {
        self.area() - self.interior_area()
    }

    /// Cell count of `region`.
    pub fn region_area(&self, region: Region) -> usize {
        match region {
            Region::None => 0,
            Region::Interior => self.interior_area(),
            Region::Border => self.border_area(),
            Region::All => self.area(),
        }
    }

    /// Top-left cell of the interior rectangle.
    pub fn interior_origin(&self) -> Offset2 {
        self.interior_origin
    }

    /// Bottom-right cell of the interior rectangle, inclusive.
    ///
    /// For an empty interior this lies before [`Zone::interior_origin`].
    pub fn interior_extent(&self) -> Offset2 {
        self.interior_extent
    }

    /// Whether `position` addresses a cell of this zone.
    pub fn within(&self, position: Offset2) -> bool {
        self.cells.contains(position)
    }

    /// Whether `position` lies in the interior rectangle.
    pub fn within_interior(&self, position: Offset2) -> bool {
        position.x >= self.interior_origin.x
            && position.x <= self.interior_extent.x
            && position.y >= self.interior_origin.y
            && position.y <= self.interior_extent.y
    }

    /// Whether `position` lies on the border frame.
    pub fn within_border(&self, position: Offset2) -> bool {
        self.within(position) && !self.within_interior(position)
    }

    /// Whether `position` lies in `region`.
    pub fn within_region(&self, region: Region, position: Offset2) -> bool {
        match region {
            Region::None => false,
            Region::Interior => self.within_interior(position),
            Region::Border => self.within_border(position),
            Region::All => self.within(position),
        }
    }

    // ── Edge classification ─────────────────────────────────────

    /// The set of grid boundaries `position` touches.
    ///
    /// A corner cell carries both of its cardinal flags, so its state
    /// equals the matching diagonal. Positions outside the zone still
    /// classify against the same rule; callers normally check
    /// [`Zone::within`] first.
    pub fn edge_state(&self, position: Offset2) -> Compass {
        let size = self.cells.shape();
        let mut state = Compass::CENTRAL;

        if position.x == 0 {
            state |= Compass::WEST;
        }
        if position.x == size.w as i32 - 1 {
            state |= Compass::EAST;
        }
        if position.y == 0 {
            state |= Compass::NORTH;
        }
        if position.y == size.h as i32 - 1 {
            state |= Compass::SOUTH;
        }

        state
    }

    /// Whether `position` touches any grid boundary.
    pub fn on_edge(&self, position: Offset2) -> bool {
        !self.edge_state(position).is_central()
    }

    /// Whether `position` touches the west or east boundary.
    pub fn on_x_edge(&self, position: Offset2) -> bool {
        position.x == 0 || position.x == self.cells.shape().w as i32 - 1
    }

    /// Whether `position` touches the north or south boundary.
    pub fn on_y_edge(&self, position: Offset2) -> bool {
        position.y == 0 || position.y == self.cells.shape().h as i32 - 1
    }

    // ── Cell access ─────────────────────────────────────────────

    /// The underlying cell layer.
    pub fn cells(&self) -> &Layer<T> {
        &self.cells
    }

    /// The underlying cell layer, mutably.
    pub fn cells_mut(&mut self) -> &mut Layer<T> {
        &mut self.cells
    }

    /// Checked read by coordinate.
    pub fn at(&self, position: Offset2) -> Result<&T, ZoneError> {
        Ok(self.cells.at(position)?)
    }

    /// Checked write access by coordinate.
    pub fn at_mut(&mut self, position: Offset2) -> Result<&mut T, ZoneError> {
        Ok(self.cells.at_mut(position)?)
    }

    // ── Bulk writes ─────────────────────────────────────────────

    /// Assign `value` to every cell of `region`.
    pub fn set(&mut self, region: Region, value: &T)
    where
        T: Clone,
    {
        let (size, border) = (self.cells.shape(), self.border);
        let cells = &mut self.cells;
        walk_region(size, border, region, &mut |p| cells[p] = value.clone());
    }

    /// Add `value` into every cell of `region`.
    pub fn apply<U: Copy>(&mut self, region: Region, value: U)
    where
        T: AddAssign<U>,
    {
        let (size, border) = (self.cells.shape(), self.border);
        let cells = &mut self.cells;
        walk_region(size, border, region, &mut |p| cells[p] += value);
    }

    /// Add each of `values` into every cell of `region`.
    pub fn apply_many<U: Copy>(&mut self, region: Region, values: &[U])
    where
        T: AddAssign<U>,
    {
        let (size, border) = (self.cells.shape(), self.border);
        let cells = &mut self.cells;
        walk_region(size, border, region, &mut |p| {
            for &value in values {
                cells[p] += value;
            }
        });
    }

    /// Subtract `value` from every cell of `region`.
    pub fn repeal<U: Copy>(&mut self, region: Region, value: U)
    where
        T: SubAssign<U>,
    {
        let (size, border) = (self.cells.shape(), self.border);
        let cells = &mut self.cells;
        walk_region(size, border, region, &mut |p| cells[p] -= value);
    }

    /// Subtract each of `values` from every cell of `region`.
    pub fn repeal_many<U: Copy>(&mut self, region: Region, values: &[U])
    where
        T: SubAssign<U>,
    {
        let (size, border) = (self.cells.shape(), self.border);
        let cells = &mut self.cells;
        walk_region(size, border, region, &mut |p| {
            for &value in values {
                cells[p] -= value;
            }
        });
    }

    // ── Randomization ───────────────────────────────────────────

    /// Coin-flip every cell of `region` between two values.
    ///
    /// Consumes exactly one draw per visited cell, in walk order, so a
    /// fixed seed reproduces the same zone.
    pub fn randomize<R: Rng>(
        &mut self,
        region: Region,
        rng: &mut R,
        probability: f64,
        when_true: T,
        when_false: T,
    ) -> Result<(), ZoneError>
    where
        T: Clone,
    {
        let applicator = BinaryApplicator::new(when_true, when_false);
        self.randomize_with(region, rng, probability, &applicator)
    }

    /// [`Zone::randomize`] with the value pair held by an applicator.
    pub fn randomize_with<R: Rng>(
        &mut self,
        region: Region,
        rng: &mut R,
        probability: f64,
        applicator: &BinaryApplicator<T>,
    ) -> Result<(), ZoneError>
    where
        T: Clone,
    {
        let dist = Bernoulli::new(probability)
            .map_err(|_| ZoneError::Probability { value: probability })?;
        let (size, border) = (self.cells.shape(), self.border);
        let cells = &mut self.cells;
        walk_region(size, border, region, &mut |p| {
            cells[p] = applicator.select(dist.sample(rng)).clone();
        });
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Number of cells in `region` equal to `value`.
    pub fn count(&self, region: Region, value: &T) -> usize
    where
        T: PartialEq,
    {
        let mut n = 0;
        walk_region(self.cells.shape(), self.border, region, &mut |p| {
            if self.cells[p] == *value {
                n += 1;
            }
        });
        n
    }

    /// Find a cell of `region` holding `value` by uniform rejection
    /// sampling, with one attempt per region cell.
    ///
    /// Every cell of the region is equally likely per attempt, the
    /// border included. Returns `None` for an empty region or when all
    /// attempts miss.
    pub fn find_random<R: Rng>(&self, region: Region, rng: &mut R, value: &T) -> Option<Offset2>
    where
        T: PartialEq,
    {
        let attempts = self.region_area(region);
        if attempts == 0 {
            return None;
        }

        let size = self.cells.shape();
        for _ in 0..attempts {
            let position = match region {
                Region::None => return None,
                Region::All => Offset2::new(
                    rng.gen_range(0..size.w as i32),
                    rng.gen_range(0..size.h as i32),
                ),
                Region::Interior => Offset2::new(
                    rng.gen_range(self.interior_origin.x..=self.interior_extent.x),
                    rng.gen_range(self.interior_origin.y..=self.interior_extent.y),
                ),
                Region::Border => self.border_cell(rng.gen_range(0..attempts)),
            };
            if self.cells[position] == *value {
                return Some(position);
            }
        }
        None
    }

    /// The border cell at linear position `index` in walk order bands:
    /// top rows, then middle column pairs, then bottom rows.
    fn border_cell(&self, index: usize) -> Offset2 {
        let size = self.cells.shape();
        let (w, h) = (size.w as usize, size.h as usize);
        let (bw, bh) = (self.border.w as usize, self.border.h as usize);

        let top = bh * w;
        if index < top {
            return Offset2::new((index % w) as i32, (index / w) as i32);
        }

        let per_row = 2 * bw;
        let middle = (h - 2 * bh) * per_row;
        let rest = index - top;
        if rest < middle {
            let y = bh + rest / per_row;
            let c = rest % per_row;
            let x = if c < bw { c } else { w - 1 - (c - bw) };
            return Offset2::new(x as i32, y as i32);
        }

        let rest = rest - middle;
        Offset2::new((rest % w) as i32, (h - bh + rest / w) as i32)
    }

    // ── Buffer exchange ─────────────────────────────────────────

    /// Exchange cell buffers with `buffer` in O(1).
    pub fn swap(&mut self, buffer: &mut Layer<T>) -> Result<(), ZoneError> {
        Ok(self.cells.swap(buffer)?)
    }

    /// Copy every cell from `buffer` into this zone.
    pub fn sync(&mut self, buffer: &Layer<T>) -> Result<(), ZoneError>
    where
        T: Clone,
    {
        Ok(self.cells.sync(buffer)?)
    }
}

// ── Persistence ─────────────────────────────────────────────────

impl<T: CellCodec> Zone<T> {
    /// Dump the cell layer to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ZoneError> {
        Ok(self.cells.save(path)?)
    }

    /// Load a zone of the given geometry from a dump file.
    pub fn load<P: AsRef<Path>>(
        size: Extent2,
        border: Extent2,
        path: P,
    ) -> Result<Self, ZoneError>
    where
        T: Default + Clone,
    {
        let mut zone = Self::new(size, border)?;
        let file = File::open(path).map_err(CodecError::from)?;
        zone.cells.read_from(&mut BufReader::new(file))?;
        Ok(zone)
    }

    /// Load a zone, falling back to default cells if the dump is
    /// missing or malformed.
    ///
    /// Geometry errors still fail; a dump problem is returned alongside
    /// the default-celled zone so callers can log it.
    pub fn load_or_default<P: AsRef<Path>>(
        size: Extent2,
        border: Extent2,
        path: P,
    ) -> Result<(Self, Option<CodecError>), ZoneError>
    where
        T: Default + Clone,
    {
        let mut zone = Self::new(size, border)?;
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => return Ok((zone, Some(CodecError::from(err)))),
        };
        match zone.cells.read_from(&mut BufReader::new(file)) {
            Ok(()) => Ok((zone, None)),
            Err(err) => Ok((zone, Some(err))),
        }
    }
}

impl<T> Index<Offset2> for Zone<T> {
    type Output = T;

    /// Caller-guaranteed access: panics if `position` is out of bounds.
    fn index(&self, position: Offset2) -> &T {
        &self.cells[position]
    }
}

impl<T> IndexMut<Offset2> for Zone<T> {
    fn index_mut(&mut self, position: Offset2) -> &mut T {
        &mut self.cells[position]
    }
}

impl<T> Index<usize> for Zone<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.cells[index]
    }
}

impl<T> IndexMut<usize> for Zone<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.cells[index]
    }
}
