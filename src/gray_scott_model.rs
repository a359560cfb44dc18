use crate::error::{GridError, Result};
use crate::laplacian::laplacian;
use crate::progress::Progress;
use bytemuck::{Pod, Zeroable};
use log::debug;
use rayon::prelude::*;
use std::mem;
use std::time::Instant;

pub const DEFAULT_DIFFUSE_A: f64 = 1.0;
pub const DEFAULT_DIFFUSE_B: f64 = 0.5;
pub const DEFAULT_FEED: f64 = 0.0545;
pub const DEFAULT_KILL: f64 = 0.062;

/// Concentrations of both species at one grid point.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Cell {
    pub a: f64,
    pub b: f64,
}

impl Cell {
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    pub fn get(&self, cs: ChemicalSpecies) -> f64 {
        match cs {
            ChemicalSpecies::A => self.a,
            ChemicalSpecies::B => self.b,
        }
    }

    fn set(&mut self, cs: ChemicalSpecies, v: f64) {
        match cs {
            ChemicalSpecies::A => self.a = v,
            ChemicalSpecies::B => self.b = v,
        }
    }
}

/// The steady state background: all A, no B.
impl Default for Cell {
    fn default() -> Self {
        Self::new(1.0, 0.0)
    }
}

/// Per-cell constants consumed by one update of one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CellRates {
    feed: f64,
    /// `kill + feed`
    kill_feed: f64,
    diffuse_a: f64,
    diffuse_b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChemicalSpecies {
    A,
    B,
}

/// A Gray-Scott reaction-diffusion system on a fixed-size grid.
///
/// Cells are stored row-major (`y * width + x`) in two equally sized
/// buffers. Every pass reads `current`, writes `scratch` and then swaps
/// the two, so no cell ever sees a value written during the same pass.
/// Border cells are never recomputed; they keep whatever the caller put
/// there.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    current: Vec<Cell>,
    scratch: Vec<Cell>,
    pub diffuse_a: f64,
    pub diffuse_b: f64,
    pub feed: f64,
    pub kill: f64,
}

impl Grid {
    /// Creates a `width` x `height` grid filled with `a = 1, b = 0`.
    ///
    /// Both dimensions must be at least 3 so there is an interior to
    /// update.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width <= 2 || height <= 2 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        let len = width
            .checked_mul(height)
            .ok_or(GridError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            current: vec![Cell::default(); len],
            scratch: vec![Cell::default(); len],
            diffuse_a: DEFAULT_DIFFUSE_A,
            diffuse_b: DEFAULT_DIFFUSE_B,
            feed: DEFAULT_FEED,
            kill: DEFAULT_KILL,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Copies a `(feed, kill)` pair, e.g. one of [`crate::model_presets`].
    pub fn set_preset(&mut self, (feed, kill): (f64, f64)) {
        self.feed = feed;
        self.kill = kill;
    }

    fn index(&self, x: usize, y: usize) -> usize {
        // Without this an x past the right edge would land on the next row.
        assert!(
            x < self.width,
            "x = {} is outside a grid {} cells wide",
            x,
            self.width
        );
        y * self.width + x
    }

    pub fn cell(&self, x: usize, y: usize) -> Cell {
        let index = self.index(x, y);
        *self.current.get(index).unwrap_or_else(|| {
            panic!(
                "Tried to get cell ({}, {}) of a {}x{} grid",
                x, y, self.width, self.height
            )
        })
    }

    pub fn get(&self, cs: ChemicalSpecies, x: usize, y: usize) -> f64 {
        self.cell(x, y).get(cs)
    }

    pub fn set(&mut self, cs: ChemicalSpecies, x: usize, y: usize, v: f64) {
        let index = self.index(x, y);
        let (width, height) = (self.width, self.height);
        self.current
            .get_mut(index)
            .unwrap_or_else(|| {
                panic!(
                    "Tried to set {:?} of cell ({}, {}) of a {}x{} grid",
                    cs, x, y, width, height
                )
            })
            .set(cs, v);
    }

    pub fn get_a(&self, x: usize, y: usize) -> f64 {
        self.get(ChemicalSpecies::A, x, y)
    }

    pub fn get_b(&self, x: usize, y: usize) -> f64 {
        self.get(ChemicalSpecies::B, x, y)
    }

    pub fn set_a(&mut self, x: usize, y: usize, v: f64) {
        self.set(ChemicalSpecies::A, x, y, v)
    }

    pub fn set_b(&mut self, x: usize, y: usize, v: f64) {
        self.set(ChemicalSpecies::B, x, y, v)
    }

    /// Advances the simulation `iterations` passes using the grid's own
    /// constants.
    ///
    /// Around 50 iterations gives a decent change between animation
    /// frames. For a still image one large call is cheaper than many
    /// small ones. With `feedback` set, an `Iteration: i/n` line is
    /// redrawn on stdout after every pass.
    pub fn update(&mut self, iterations: usize, feedback: bool) {
        let started = Instant::now();
        let mut progress = Progress::stdout(iterations, feedback);

        for i in 0..iterations {
            let rates = CellRates {
                feed: self.feed,
                kill_feed: self.kill + self.feed,
                diffuse_a: self.diffuse_a,
                diffuse_b: self.diffuse_b,
            };
            self.pass(|_, _| rates);
            progress.tick(i + 1);
        }
        progress.finish();

        debug!(
            "{} iterations on {}x{} took {:?}",
            iterations,
            self.width,
            self.height,
            started.elapsed()
        );
    }

    /// Like [`Grid::update`], but feed, kill and both diffusion rates are
    /// sampled per cell per pass from the given functions, which lets the
    /// pattern vary across the grid (and, by closing over a frame
    /// percent, over time). Each function is called once per interior
    /// cell per pass, possibly from several threads, and must be pure.
    pub fn update_advanced<F, K, DA, DB>(
        &mut self,
        iterations: usize,
        feed: F,
        kill: K,
        diffuse_a: DA,
        diffuse_b: DB,
        feedback: bool,
    ) where
        F: Fn(usize, usize) -> f64 + Sync,
        K: Fn(usize, usize) -> f64 + Sync,
        DA: Fn(usize, usize) -> f64 + Sync,
        DB: Fn(usize, usize) -> f64 + Sync,
    {
        let started = Instant::now();
        let mut progress = Progress::stdout(iterations, feedback);

        for i in 0..iterations {
            self.pass(|x, y| {
                let f = feed(x, y);
                CellRates {
                    feed: f,
                    kill_feed: kill(x, y) + f,
                    diffuse_a: diffuse_a(x, y),
                    diffuse_b: diffuse_b(x, y),
                }
            });
            progress.tick(i + 1);
        }
        progress.finish();

        debug!(
            "{} advanced iterations on {}x{} took {:?}",
            iterations,
            self.width,
            self.height,
            started.elapsed()
        );
    }

    /// One full pass. Rows are computed in parallel into `scratch`; the
    /// buffers only swap once every row is done.
    fn pass<R>(&mut self, rates_at: R)
    where
        R: Fn(usize, usize) -> CellRates + Sync,
    {
        let (width, height) = (self.width, self.height);
        let current = &self.current;

        self.scratch
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                let source = &current[y * width..(y + 1) * width];
                if y == 0 || y == height - 1 {
                    row.copy_from_slice(source);
                    return;
                }

                row[0] = source[0];
                row[width - 1] = source[width - 1];
                for x in 1..width - 1 {
                    row[x] = react(current, width, x, y, rates_at(x, y));
                }
            });

        mem::swap(&mut self.current, &mut self.scratch);
    }

    /// RGBA8 grayscale snapshot of one species, one pixel per cell in
    /// row-major order. Alpha is always 255.
    pub fn get_image_data(&self, cs: ChemicalSpecies) -> Vec<u8> {
        self.current
            .iter()
            .flat_map(|cell| {
                let g = to_byte(cell.get(cs));
                [g, g, g, 255]
            })
            .collect()
    }

    pub fn get_image_data_a(&self) -> Vec<u8> {
        self.get_image_data(ChemicalSpecies::A)
    }

    pub fn get_image_data_b(&self) -> Vec<u8> {
        self.get_image_data(ChemicalSpecies::B)
    }

    /// Interleaved `a, b` values of the current buffer, ready for upload
    /// to a two-channel float texture.
    pub fn as_raw(&self) -> &[f64] {
        bytemuck::cast_slice(&self.current)
    }
}

fn react(current: &[Cell], width: usize, x: usize, y: usize, rates: CellRates) -> Cell {
    let Cell { a, b } = current[y * width + x];
    let abb = a * b * b;
    let lap_a = laplacian(current, width, ChemicalSpecies::A, x, y);
    let lap_b = laplacian(current, width, ChemicalSpecies::B, x, y);

    let a1 = a + rates.diffuse_a * lap_a - abb + rates.feed * (1.0 - a);
    let b1 = b + rates.diffuse_b * lap_b + abb - rates.kill_feed * b;

    Cell::new(a1.clamp(0.0, 1.0), b1.clamp(0.0, 1.0))
}

fn to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
