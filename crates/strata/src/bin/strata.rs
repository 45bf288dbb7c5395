use argh::FromArgs;
use std::path::PathBuf;

use strata::{
    image::Image,
    imgproc::{
        histogram::{compute_histogram, HistogramChannel},
        transform::Transform,
    },
    io::{
        functional::{self as F, ImageFormat},
        project,
    },
    layers::LayerStore,
};

#[derive(FromArgs)]
/// Apply transforms to the layers of an image or a project directory
struct Args {
    /// path to an image (.ppm, .png, .jpg) or a project directory
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path of the output image, or of the output project directory with --project
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// transform to apply, repeatable (e.g. blur, sepia, brighten=20)
    #[argh(option)]
    op: Vec<String>,

    /// layer the transforms apply to, defaults to the topmost visible layer
    #[argh(option, short = 'l')]
    layer: Option<String>,

    /// layers to hide before writing, repeatable
    #[argh(option)]
    hide: Vec<String>,

    /// write a project directory in this format (ppm, png or jpeg)
    #[argh(option, short = 'p')]
    project: Option<String>,

    /// log the histogram of the output image
    #[argh(switch)]
    histogram: bool,

    /// quality of jpeg output
    #[argh(option, short = 'q', default = "95")]
    quality: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // parse every transform before touching any file
    let transforms = args
        .op
        .iter()
        .map(|op| op.parse::<Transform>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut store = if args.input.is_dir() {
        project::read_project(&args.input)?
    } else {
        let name = args
            .input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("image")
            .to_string();
        let mut store = LayerStore::new();
        store.add(name, F::read_image_any(&args.input)?)?;
        store
    };

    let target = match args.layer {
        Some(name) => Some(name),
        None => store.topmost_visible().map(|(name, _)| name.to_string()),
    };

    if let Some(target) = target {
        for transform in &transforms {
            log::info!("applying {} to layer {}", transform, target);
            store.apply(&target, |image| transform.apply(image))?;
        }
    } else if !transforms.is_empty() {
        log::warn!("no visible layer to transform");
    }

    for name in &args.hide {
        store.hide(name)?;
    }

    let placeholder = Image::placeholder();
    let output = match store.topmost_visible() {
        Some((_, image)) => image,
        None => &placeholder,
    };

    if args.histogram {
        let histogram = compute_histogram(output)?;
        for channel in HistogramChannel::ALL {
            let freq = histogram.frequencies(channel);
            let total: usize = freq.iter().sum();
            let mean = if total == 0 {
                0.0
            } else {
                freq.iter().enumerate().map(|(v, n)| v * n).sum::<usize>() as f64 / total as f64
            };
            log::info!("histogram {:?}: mean {:.2} over {} pixels", channel, mean, total);
        }
        log::info!("histogram peak frequency: {}", histogram.max_frequency());
    }

    match args.project {
        Some(format) => {
            let format: ImageFormat = format
                .parse()
                .map_err(|_| format!("unsupported project format: {format}"))?;
            project::write_project(&args.output, format, &store)?;
        }
        None => {
            let format = ImageFormat::from_path(&args.output)?;
            F::write_image_format(&args.output, output, format, args.quality)?;
        }
    }

    Ok(())
}
