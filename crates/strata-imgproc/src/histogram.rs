use std::hash::{Hash, Hasher};

use strata_image::{Image, ImageError};

/// Number of bins of every channel table, one per channel value.
pub const NUM_BINS: usize = 256;

/// The channels tracked by a [`Histogram`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HistogramChannel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
    /// The mean of the three channels, `(r + g + b) / 3`.
    Intensity,
}

impl HistogramChannel {
    /// Every channel, in plotting order.
    pub const ALL: [HistogramChannel; 4] = [
        HistogramChannel::Red,
        HistogramChannel::Green,
        HistogramChannel::Blue,
        HistogramChannel::Intensity,
    ];
}

/// A point of a frequency plot: `x` is the channel value and `y` its frequency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// The channel value.
    pub x: usize,
    /// The frequency.
    pub y: usize,
}

/// An undirected line segment between two points.
///
/// Two lines are equal when they join the same two points, in either direction.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    /// The first endpoint.
    pub start: Point,
    /// The second endpoint.
    pub end: Point,
}

impl Line {
    /// Create a new line.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    fn endpoints(&self) -> (Point, Point) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.endpoints() == other.endpoints()
    }
}

impl Eq for Line {}

impl Hash for Line {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.endpoints().hash(state);
    }
}

/// Per-channel frequency tables of one image snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    red: [usize; NUM_BINS],
    green: [usize; NUM_BINS],
    blue: [usize; NUM_BINS],
    intensity: [usize; NUM_BINS],
}

impl Histogram {
    /// Count the channel values of every pixel of `src`.
    pub fn new(src: &Image) -> Self {
        let mut hist = Self {
            red: [0; NUM_BINS],
            green: [0; NUM_BINS],
            blue: [0; NUM_BINS],
            intensity: [0; NUM_BINS],
        };

        for color in src.colors() {
            let [r, g, b] = color.channels().map(usize::from);
            hist.red[r] += 1;
            hist.green[g] += 1;
            hist.blue[b] += 1;
            hist.intensity[(r + g + b) / 3] += 1;
        }

        hist
    }

    /// The frequency table of a channel, indexed by channel value.
    pub fn frequencies(&self, channel: HistogramChannel) -> &[usize; NUM_BINS] {
        match channel {
            HistogramChannel::Red => &self.red,
            HistogramChannel::Green => &self.green,
            HistogramChannel::Blue => &self.blue,
            HistogramChannel::Intensity => &self.intensity,
        }
    }

    /// The highest frequency across every channel, useful to scale a plot.
    pub fn max_frequency(&self) -> usize {
        HistogramChannel::ALL
            .iter()
            .flat_map(|&channel| self.frequencies(channel).iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// The polyline of one channel: 255 segments joining `(i, freq[i])` to `(i + 1, freq[i + 1])`.
    pub fn channel_lines(&self, channel: HistogramChannel) -> Vec<Line> {
        self.frequencies(channel)
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                Line::new(
                    Point { x: i, y: pair[0] },
                    Point {
                        x: i + 1,
                        y: pair[1],
                    },
                )
            })
            .collect()
    }

    /// The polylines of every channel, tagged with their channel.
    pub fn lines(&self) -> Vec<(HistogramChannel, Line)> {
        HistogramChannel::ALL
            .iter()
            .flat_map(|&channel| {
                self.channel_lines(channel)
                    .into_iter()
                    .map(move |line| (channel, line))
            })
            .collect()
    }
}

/// Compute the red, green, blue and intensity histogram of an image.
///
/// # Arguments
///
/// * `src` - The input image to compute the histogram.
///
/// # Example
///
/// ```
/// use strata_image::{Color, Image, ImageSize};
/// use strata_imgproc::histogram::{compute_histogram, HistogramChannel};
///
/// let image = Image::from_size_val(ImageSize { width: 3, height: 3 }, Color::from_rgb(0, 128, 255));
///
/// let histogram = compute_histogram(&image).unwrap();
/// assert_eq!(histogram.frequencies(HistogramChannel::Green)[128], 9);
/// assert_eq!(histogram.frequencies(HistogramChannel::Intensity)[127], 9);
/// ```
pub fn compute_histogram(src: &Image) -> Result<Histogram, ImageError> {
    log::debug!("computing histogram of {}", src.size());
    Ok(Histogram::new(src))
}
