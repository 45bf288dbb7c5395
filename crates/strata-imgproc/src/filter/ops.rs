use strata_image::{Color, Image, ImageError};

use super::{kernels, Kernel};

/// Convolve an image with a square kernel.
///
/// Every output pixel is the weighted sum of its neighborhood. Neighbors that fall outside of the
/// grid contribute zero, each weighted neighbor channel is truncated toward zero before it is
/// accumulated, and the per-channel sums are clamped to [0, 255].
///
/// # Arguments
///
/// * `src` - The source image.
/// * `kernel` - The kernel to apply. Its center is aligned with the output pixel.
///
/// # Returns
///
/// A new image with the same size and pixel positions as `src`.
///
/// # Example
///
/// ```
/// use strata_image::{Color, Image, ImageSize};
/// use strata_imgproc::filter::{convolve, Kernel};
///
/// let image = Image::from_size_val(ImageSize { width: 3, height: 3 }, Color::from_rgb(10, 20, 30));
/// let identity = Kernel::new(vec![vec![0.0, 0.0, 0.0], vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 0.0]]).unwrap();
///
/// let filtered = convolve(&image, &identity).unwrap();
/// assert_eq!(filtered, image);
/// ```
pub fn convolve(src: &Image, kernel: &Kernel) -> Result<Image, ImageError> {
    log::debug!(
        "convolving {} with a {}x{} kernel",
        src.size(),
        kernel.size(),
        kernel.size()
    );

    let width = src.width() as isize;
    let height = src.height() as isize;
    let radius = kernel.radius() as isize;
    let src_data = src.as_slice();

    let dst = Image::from_fn(src.size(), |position| {
        let mut sum = [0i64; 3];

        for i in -radius..=radius {
            let y = position.y as isize + i;
            if y < 0 || y >= height {
                continue;
            }
            for j in -radius..=radius {
                let x = position.x as isize + j;
                if x < 0 || x >= width {
                    continue;
                }

                let weight = kernel.weight((i + radius) as usize, (j + radius) as usize);
                let neighbor = src_data[(y * width + x) as usize].color();
                for (acc, channel) in sum.iter_mut().zip(neighbor.channels()) {
                    *acc = acc.saturating_add((channel as f64 * weight) as i64);
                }
            }
        }

        Color::clamped(sum[0], sum[1], sum[2])
    });

    Ok(dst)
}

/// Blur an image with the 3x3 blur kernel.
///
/// # Arguments
///
/// * `src` - The source image.
pub fn blur(src: &Image) -> Result<Image, ImageError> {
    convolve(src, &kernels::blur_kernel())
}

/// Sharpen an image with the 5x5 sharpen kernel.
///
/// # Arguments
///
/// * `src` - The source image.
pub fn sharpen(src: &Image) -> Result<Image, ImageError> {
    convolve(src, &kernels::sharpen_kernel())
}
