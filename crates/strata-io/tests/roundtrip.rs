use strata_image::{Color, ImageSize};
use strata_imgproc::{generate::checkerboard, transform::Transform};
use strata_io::{
    functional::{read_image_any, write_image_any, ImageFormat},
    ppm::{read_image_ppm, write_image_ppm},
    project::{read_project, write_project},
    IoError,
};
use strata_layers::LayerStore;

#[test]
fn ppm_roundtrip_keeps_pixels_and_positions() -> Result<(), IoError> {
    let tmp_dir = tempfile::tempdir()?;
    let file_path = tmp_dir.path().join("board.ppm");

    let board = checkerboard(
        ImageSize::from([5, 3]),
        Color::from_rgb(255, 0, 0),
        Color::from_rgb(0, 255, 0),
    );
    let sepia = Transform::sepia().apply(&board)?;

    write_image_ppm(&file_path, &sepia)?;
    let back = read_image_ppm(&file_path)?;

    assert_eq!(back.size(), sepia.size());
    for (a, b) in back.as_slice().iter().zip(sepia.as_slice()) {
        assert_eq!(a.position(), b.position());
        assert_eq!(a.color(), b.color());
    }
    Ok(())
}

#[test]
fn convert_between_formats() -> Result<(), IoError> {
    let tmp_dir = tempfile::tempdir()?;
    let board = checkerboard(ImageSize::from([6, 4]), Color::WHITE, Color::BLACK);

    let ppm_path = tmp_dir.path().join("board.ppm");
    let png_path = tmp_dir.path().join("board.png");
    write_image_any(&ppm_path, &board)?;
    write_image_any(&png_path, &read_image_any(&ppm_path)?)?;

    assert_eq!(read_image_any(&png_path)?, board);
    Ok(())
}

#[test]
fn project_roundtrip_as_png() -> Result<(), IoError> {
    let tmp_dir = tempfile::tempdir()?;
    let dir = tmp_dir.path().join("layers");

    let size = ImageSize::from([4, 4]);
    let mut store = LayerStore::new();
    store.add("base", checkerboard(size, Color::WHITE, Color::BLACK))?;
    store.add("tint", checkerboard(size, Color::from_rgb(255, 0, 0), Color::BLACK))?;
    store.apply("tint", |image| Transform::greyscale().apply(image))?;
    store.hide("base")?;

    write_project(&dir, ImageFormat::Png, &store)?;
    let back = read_project(&dir)?;

    assert_eq!(back, store);
    let (name, _) = back
        .topmost_visible()
        .ok_or_else(|| IoError::InvalidLayerName(String::new()))?;
    assert_eq!(name, "tint");
    Ok(())
}
