use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use strata_layers::LayerStore;

use crate::{
    error::IoError,
    functional::{read_image_any, write_image_format, ImageFormat},
    jpeg,
};

const VISIBLE: &str = "visible";
const INVISIBLE: &str = "invisible";

/// The path of the manifest of a project directory: `<dir>/<dir-name>.txt`.
pub fn manifest_path(dir: impl AsRef<Path>) -> Result<PathBuf, IoError> {
    let dir = dir.as_ref();
    let name = dir.file_name().ok_or_else(|| {
        IoError::InvalidProjectManifest(dir.to_path_buf(), "directory has no name".to_string())
    })?;
    let mut file_name = name.to_os_string();
    file_name.push(".txt");
    Ok(dir.join(file_name))
}

/// Write every layer of a store into a project directory.
///
/// Each layer is written as `<dir>/<layer-name>.<ext>`. The manifest `<dir>/<dir-name>.txt` holds
/// the format on its first line, then one `<file-name> <layer-name> visible|invisible` line per
/// layer in store order.
///
/// # Arguments
///
/// * `dir` - The project directory, created if missing.
/// * `format` - The format used for every layer image.
/// * `store` - The layers to write.
///
/// # Errors
///
/// Returns [`IoError::InvalidLayerName`] before writing anything if a layer name is empty,
/// contains whitespace or a path separator.
pub fn write_project(
    dir: impl AsRef<Path>,
    format: ImageFormat,
    store: &LayerStore,
) -> Result<(), IoError> {
    let dir = dir.as_ref();
    let manifest = manifest_path(dir)?;

    if let Some((name, _)) = store.layers().find(|(name, _)| !is_valid_layer_name(name)) {
        return Err(IoError::InvalidLayerName(name.to_string()));
    }

    fs::create_dir_all(dir)?;
    log::info!(
        "writing project {} with {} layers as {}",
        dir.display(),
        store.len(),
        format
    );

    let hidden = store.visibility();
    let mut contents = format!("{format}\n");
    for (name, image) in store.layers() {
        let file_name = format!("{name}.{}", format.extension());
        write_image_format(dir.join(&file_name), image, format, jpeg::DEFAULT_QUALITY)?;

        let status = if hidden.contains(name) {
            INVISIBLE
        } else {
            VISIBLE
        };
        contents.push_str(&format!("{file_name} {name} {status}\n"));
    }

    fs::write(manifest, contents)?;
    Ok(())
}

/// Read a project directory written by [`write_project`] into a new store.
///
/// # Arguments
///
/// * `dir` - The project directory.
pub fn read_project(dir: impl AsRef<Path>) -> Result<LayerStore, IoError> {
    let dir = dir.as_ref();
    let manifest = manifest_path(dir)?;
    if !manifest.exists() {
        return Err(IoError::FileDoesNotExist(manifest));
    }

    log::info!("reading project {}", dir.display());
    let text = fs::read_to_string(&manifest)?;
    let invalid = |reason: String| IoError::InvalidProjectManifest(manifest.clone(), reason);

    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let format_line = lines
        .next()
        .ok_or_else(|| invalid("missing format line".to_string()))?
        .trim();
    let format: ImageFormat = format_line
        .parse()
        .map_err(|_| invalid(format!("unknown format {format_line}")))?;
    log::debug!("project format is {}", format);

    let mut images = Vec::new();
    let mut hidden = Vec::new();
    for line in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [file_name, name, status] = fields[..] else {
            return Err(invalid(format!("expected 3 fields in line {line:?}")));
        };

        if !is_plain_file_name(file_name) {
            return Err(invalid(format!("file {file_name} is outside the project")));
        }

        match status {
            VISIBLE => {}
            INVISIBLE => hidden.push(name.to_string()),
            other => return Err(invalid(format!("unknown visibility {other}"))),
        }

        let image = read_image_any(dir.join(file_name))?;
        images.push((name.to_string(), image));
    }

    let mut store = LayerStore::new();
    store.add_multiple(images, hidden)?;
    Ok(store)
}

// a single normal component, so the layer file stays inside the project directory
fn is_plain_file_name(file_name: &str) -> bool {
    let mut components = Path::new(file_name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn is_valid_layer_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || std::path::is_separator(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_image::{Color, Image, ImageSize};

    fn filled(color: Color) -> Image {
        Image::from_size_val(ImageSize::from([3, 2]), color)
    }

    #[test]
    fn write_read_project() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let dir = tmp_dir.path().join("poster");

        let mut store = LayerStore::new();
        store.add("sky", filled(Color::from_rgb(0, 0, 200)))?;
        store.add("ground", filled(Color::from_rgb(0, 120, 0)))?;
        store.add("sun", filled(Color::from_rgb(250, 220, 0)))?;
        store.hide("ground")?;

        write_project(&dir, ImageFormat::Ppm, &store)?;

        let manifest = fs::read_to_string(dir.join("poster.txt"))?;
        assert_eq!(
            manifest,
            "ppm\nsky.ppm sky visible\nground.ppm ground invisible\nsun.ppm sun visible\n"
        );

        let store_back = read_project(&dir)?;
        assert_eq!(store_back, store);
        Ok(())
    }

    #[test]
    fn rejects_names_with_whitespace() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let dir = tmp_dir.path().join("bad");

        let mut store = LayerStore::new();
        store.add("two words", filled(Color::WHITE))?;

        assert!(matches!(
            write_project(&dir, ImageFormat::Png, &store),
            Err(IoError::InvalidLayerName(_))
        ));
        assert!(!dir.exists());
        Ok(())
    }

    #[test]
    fn rejects_bad_manifest() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let dir = tmp_dir.path().join("broken");
        fs::create_dir_all(&dir)?;

        fs::write(dir.join("broken.txt"), "gif\n")?;
        assert!(matches!(
            read_project(&dir),
            Err(IoError::InvalidProjectManifest(..))
        ));

        fs::write(dir.join("broken.txt"), "ppm\nlayer.ppm layer\n")?;
        assert!(matches!(
            read_project(&dir),
            Err(IoError::InvalidProjectManifest(..))
        ));

        fs::write(dir.join("broken.txt"), "ppm\nlayer.ppm layer maybe\n")?;
        assert!(matches!(
            read_project(&dir),
            Err(IoError::InvalidProjectManifest(..))
        ));
        Ok(())
    }

    #[test]
    fn rejects_files_outside_project() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let dir = tmp_dir.path().join("escape");
        fs::create_dir_all(&dir)?;

        // a readable image next to the project directory
        let outside = tmp_dir.path().join("outside.ppm");
        crate::ppm::write_image_ppm(&outside, &filled(Color::WHITE))?;

        for file_name in [
            "../outside.ppm".to_string(),
            "sub/layer.ppm".to_string(),
            "..".to_string(),
            outside.display().to_string(),
        ] {
            fs::write(
                dir.join("escape.txt"),
                format!("ppm\n{file_name} layer visible\n"),
            )?;
            assert!(matches!(
                read_project(&dir),
                Err(IoError::InvalidProjectManifest(..))
            ));
        }

        fs::copy(&outside, dir.join("inside.ppm"))?;
        fs::write(dir.join("escape.txt"), "ppm\ninside.ppm layer visible\n")?;
        assert_eq!(read_project(&dir)?.len(), 1);
        Ok(())
    }
}
