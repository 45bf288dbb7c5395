use strata_image::ImageError;

/// A square matrix of weights with an odd side length.
///
/// Weights are stored row-major, so the weight at row `i` and column `j` lives at
/// `i * size + j`.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from its rows of weights.
    ///
    /// # Arguments
    ///
    /// * `rows` - The kernel rows, top to bottom.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel is empty, not square, or has an even side length.
    ///
    /// # Example
    ///
    /// ```
    /// use strata_imgproc::filter::Kernel;
    ///
    /// let kernel = Kernel::new(vec![vec![0.0, 0.0, 0.0], vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 0.0]]).unwrap();
    /// assert_eq!(kernel.size(), 3);
    /// assert_eq!(kernel.radius(), 1);
    ///
    /// assert!(Kernel::new(vec![vec![1.0, 1.0], vec![1.0, 1.0]]).is_err());
    /// ```
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, ImageError> {
        let size = rows.len();
        if size == 0 {
            return Err(ImageError::EmptyKernel);
        }

        if let Some(row) = rows.iter().find(|row| row.len() != size) {
            return Err(ImageError::NonSquareKernel(size, row.len()));
        }

        if size % 2 == 0 {
            return Err(ImageError::EvenKernelSize(size));
        }

        Ok(Self {
            size,
            weights: rows.into_iter().flatten().collect(),
        })
    }

    /// The side length of the kernel.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells between the center and an edge of the kernel.
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// The weight at kernel row `row` and column `col`.
    ///
    /// PRECONDITION: `row` and `col` are smaller than [`Kernel::size`].
    pub fn weight(&self, row: usize, col: usize) -> f64 {
        self.weights[row * self.size + col]
    }

    /// The weights in row-major order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

/// Create the 3x3 gaussian-like blur kernel.
///
/// The weights sum to one and the center carries the largest share.
pub fn blur_kernel() -> Kernel {
    #[rustfmt::skip]
    let weights = vec![
        0.0625, 0.125, 0.0625,
        0.125,  0.25,  0.125,
        0.0625, 0.125, 0.0625,
    ];
    Kernel { size: 3, weights }
}

/// Create the 5x5 sharpen kernel.
///
/// The outer ring subtracts neighbor detail, the inner ring adds it back and the center keeps
/// the original value. The outer weight two columns right of the center is `-0.12` instead of
/// `-0.125`, so the weights sum to 1.005 and the kernel is slightly asymmetric.
pub fn sharpen_kernel() -> Kernel {
    const O: f64 = -0.125;
    const I: f64 = 0.25;
    #[rustfmt::skip]
    let weights = vec![
        O, O, O,   O, O,
        O, I, I,   I, O,
        O, I, 1.0, I, -0.12,
        O, I, I,   I, O,
        O, O, O,   O, O,
    ];
    Kernel { size: 5, weights }
}
