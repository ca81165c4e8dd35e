//! 2D Distribution.

use super::Distribution2DError;
use crate::geometry::*;
use crate::pbrt::*;

/// A uniform sample warped through a `Distribution2D`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Warp {
    /// Selected row, chosen by the x-component of the sample.
    pub row: usize,

    /// Selected column, chosen by the y-component of the sample.
    pub column: usize,

    /// The sample rescaled to [0, 1) relative to the selected cell so it can be
    /// reused as a fresh uniform sample.
    pub remapped: Point2f,
}

/// Represents a piecewise-constant 2D function’s PDF and CDF over a
/// `width x height` grid and provides methods to perform this sampling
/// efficiently.
///
/// All tables are row-major; the cell `(row, column)` lives at
/// `row * width + column` and its row's CDF starts at `row * (width + 1)`.
#[derive(Clone, Debug)]
pub struct Distribution2D {
    /// Number of columns.
    width: usize,

    /// Number of rows.
    height: usize,

    /// Sum of all input weights.
    integral: Float,

    /// Conditional probability of each column given its row.
    conditional_pdf: Vec<Float>,

    /// Conditional CDF for each row, `width + 1` entries per row.
    conditional_cdf: Vec<Float>,

    /// Marginal probability of each row.
    marginal_pdf: Vec<Float>,

    /// Marginal CDF over rows, `height + 1` entries.
    marginal_cdf: Vec<Float>,
}

impl Distribution2D {
    /// Returns a new `Distribution2D` for a row-major grid of weights.
    ///
    /// Rows whose weights sum to zero are sampled uniformly if they are ever
    /// selected; their marginal probability is zero so they never are in
    /// practice.
    ///
    /// * `weights` - Non-negative weights, `width * height` of them.
    /// * `width`   - Number of columns.
    /// * `height`  - Number of rows.
    pub fn new(weights: Vec<Float>, width: usize, height: usize) -> Result<Self, Distribution2DError> {
        if width == 0 || height == 0 || width.checked_mul(height) != Some(weights.len()) {
            return Err(Distribution2DError::InvalidDimensions {
                width,
                height,
                len: weights.len(),
            });
        }

        if let Some((index, &value)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !(w.is_finite() && **w >= 0.0))
        {
            return Err(Distribution2DError::InvalidWeight { index, value });
        }

        let mut conditional_pdf = weights;
        let mut conditional_cdf = vec![0.0; height * (width + 1)];
        let mut marginal_pdf = vec![0.0; height];
        let mut marginal_cdf = vec![0.0; height + 1];

        // Running sums for each row and over the row totals.
        for (y, (row, cdf)) in conditional_pdf
            .chunks_exact(width)
            .zip(conditional_cdf.chunks_exact_mut(width + 1))
            .enumerate()
        {
            for (x, w) in row.iter().enumerate() {
                cdf[x + 1] = cdf[x] + w;
            }
            marginal_pdf[y] = cdf[width];
            marginal_cdf[y + 1] = marginal_cdf[y] + marginal_pdf[y];
        }

        let integral = marginal_cdf[height];
        if !(integral > 0.0 && integral.is_finite()) {
            return Err(Distribution2DError::DegenerateWeights { total: integral });
        }

        for (y, (pdf, cdf)) in conditional_pdf
            .chunks_exact_mut(width)
            .zip(conditional_cdf.chunks_exact_mut(width + 1))
            .enumerate()
        {
            if normalize(cdf, pdf) == 0.0 {
                debug!("Row {y} has zero weight; its columns fall back to uniform");
            }
        }
        normalize(&mut marginal_cdf, &mut marginal_pdf);

        debug!("Built {width}x{height} distribution with integral {integral}");

        Ok(Self {
            width,
            height,
            integral,
            conditional_pdf,
            conditional_cdf,
            marginal_pdf,
            marginal_cdf,
        })
    }

    /// Returns a new `Distribution2D` for a grid given as a list of rows of
    /// equal length.
    ///
    /// * `rows` - Weights for each row.
    pub fn from_rows(rows: Vec<Vec<Float>>) -> Result<Self, Distribution2DError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(Distribution2DError::InvalidDimensions {
                width,
                height,
                len: rows.iter().map(Vec::len).sum(),
            });
        }

        Self::new(rows.into_iter().flatten().collect(), width, height)
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the sum of the weights the distribution was built from.
    pub fn integral(&self) -> Float {
        self.integral
    }

    /// Returns the probability of selecting each row.
    pub fn marginal_pdf(&self) -> &[Float] {
        &self.marginal_pdf
    }

    /// Returns the CDF over rows.
    pub fn marginal_cdf(&self) -> &[Float] {
        &self.marginal_cdf
    }

    /// Returns the probability of each column given `row`.
    ///
    /// * `row` - The row.
    pub fn conditional_pdf(&self, row: usize) -> &[Float] {
        &self.conditional_pdf[row * self.width..(row + 1) * self.width]
    }

    /// Returns the CDF over columns given `row`.
    ///
    /// * `row` - The row.
    pub fn conditional_cdf(&self, row: usize) -> &[Float] {
        let n = self.width + 1;
        &self.conditional_cdf[row * n..(row + 1) * n]
    }

    /// Selects a cell for a uniform sample and rescales the sample to [0, 1)
    /// within that cell.
    ///
    /// Components outside [0, 1) are clamped.
    ///
    /// * `u` - The random sample; `u.x` selects the row and `u.y` the column.
    pub fn warp(&self, u: &Point2f) -> Warp {
        debug_assert!(!u.has_nans(), "NaN sample {u}");
        let u = u.clamp(0.0, ONE_MINUS_EPSILON);

        let row = find_interval(self.marginal_cdf.len(), |i| self.marginal_cdf[i] <= u.x);
        let remapped_x = remap(u.x, self.marginal_cdf[row], self.marginal_pdf[row]);

        let cdf = self.conditional_cdf(row);
        let pdf = self.conditional_pdf(row);
        let column = find_interval(cdf.len(), |i| cdf[i] <= u.y);
        let remapped_y = remap(u.y, cdf[column], pdf[column]);

        Warp {
            row,
            column,
            remapped: Point2f::new(remapped_x, remapped_y),
        }
    }

    /// Return a sample point in the unit square and its area density given a
    /// random sample.
    ///
    /// * `u` - The random sample.
    pub fn sample_continuous(&self, u: &Point2f) -> (Point2f, Float) {
        let Warp { row, column, remapped } = self.warp(u);

        let p = Point2f::new(
            min((row as Float + remapped.x) / self.height as Float, ONE_MINUS_EPSILON),
            min((column as Float + remapped.y) / self.width as Float, ONE_MINUS_EPSILON),
        );

        (p, self.area_density(row, column))
    }

    /// Returns the probability of selecting the cell `(row, column)`.
    ///
    /// Panics if the cell is outside the grid.
    ///
    /// * `row`    - The row.
    /// * `column` - The column.
    pub fn pdf(&self, row: usize, column: usize) -> Float {
        assert!(
            row < self.height && column < self.width,
            "cell ({row}, {column}) outside {}x{} grid",
            self.width,
            self.height
        );
        self.conditional_pdf[row * self.width + column] * self.marginal_pdf[row]
    }

    /// Returns the density of the cell `(row, column)` with respect to area in
    /// the unit square.
    ///
    /// * `row`    - The row.
    /// * `column` - The column.
    pub fn area_density(&self, row: usize, column: usize) -> Float {
        self.pdf(row, column) * (self.width * self.height) as Float
    }

    /// Return the area density for a point in the unit square.
    ///
    /// * `p` - The point; `p.x` locates the row and `p.y` the column.
    pub fn pdf_continuous(&self, p: &Point2f) -> Float {
        let row = min((p.x * self.height as Float) as usize, self.height - 1);
        let column = min((p.y * self.width as Float) as usize, self.width - 1);
        self.area_density(row, column)
    }
}

/// Turns the running sums in `cdf` into a normalized CDF and stores the
/// probability of each interval in `pdf`. Returns the unnormalized total.
///
/// A zero total yields a uniform distribution. The last CDF entry is always
/// exactly 1.
///
/// * `cdf` - Running sums, `pdf.len() + 1` entries starting at 0.
/// * `pdf` - Receives `cdf[i + 1] - cdf[i]`.
fn normalize(cdf: &mut [Float], pdf: &mut [Float]) -> Float {
    let n = pdf.len();
    let total = cdf[n];

    if total > 0.0 {
        for c in cdf.iter_mut().take(n) {
            *c /= total;
        }
    } else {
        for (i, c) in cdf.iter_mut().enumerate().take(n) {
            *c = i as Float / n as Float;
        }
    }
    cdf[n] = 1.0;

    for (p, c) in pdf.iter_mut().zip(cdf.windows(2)) {
        *p = c[1] - c[0];
    }

    total
}

/// Rescales `u` from `[start, start + pdf)` to [0, 1).
#[inline(always)]
fn remap(u: Float, start: Float, pdf: Float) -> Float {
    if pdf > 0.0 {
        clamp((u - start) / pdf, 0.0, ONE_MINUS_EPSILON)
    } else {
        0.0
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
