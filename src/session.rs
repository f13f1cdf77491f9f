use std::path::Path;

use crate::buffer::ImageData;
use crate::error::Result;
use crate::image_io::{self, LoadedImage};
use crate::transform::{self, TransformParams};

/// Viewer state: the pristine decoded source, the current slider factors
/// and the image derived from them.
///
/// The displayed image is always `transform(source, params)`, recomputed
/// from the pristine source on every change so repeated slider moves never
/// compound rounding or clamping error. On any failure the previous image,
/// parameters and status survive untouched.
pub struct ViewerSession {
    source: Option<LoadedImage>,
    params: TransformParams,
    display: Option<ImageData>,
    status: String,
}

impl ViewerSession {
    pub fn new() -> Self {
        let params = TransformParams::default();
        Self {
            source: None,
            display: None,
            status: params_status(&params),
            params,
        }
    }

    /// Decode `path` and derive the display image with the current factors.
    /// The previous state is kept on any error.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let loaded = image_io::load_image(path)?;
        let display = transform::point_transform(&loaded.image, &self.params)?;
        self.status = format!(
            "{}, {}x{}, {} Bytes",
            loaded.path.display(),
            loaded.image.width,
            loaded.image.height,
            loaded.file_size
        );
        self.source = Some(loaded);
        self.display = Some(display);
        Ok(())
    }

    /// Re-derive the display image for new slider factors. No-op when the
    /// factors are unchanged; on engine error the last valid image and
    /// factors are kept.
    pub fn set_params(&mut self, params: TransformParams) -> Result<()> {
        if params == self.params {
            return Ok(());
        }
        if let Some(source) = &self.source {
            self.display = Some(transform::point_transform(&source.image, &params)?);
        }
        self.params = params;
        self.status = params_status(&params);
        Ok(())
    }

    pub fn params(&self) -> TransformParams {
        self.params
    }

    pub fn display(&self) -> Option<&ImageData> {
        self.display.as_ref()
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_ref().map(|s| s.path.as_path())
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new()
    }
}

fn params_status(params: &TransformParams) -> String {
    format!("a={}, b={}, gamma={}", params.a, params.b, params.gamma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ChannelLayout;
    use std::path::PathBuf;

    fn factors(a: f64, b: f64, gamma: f64) -> TransformParams {
        TransformParams { a, b, gamma }
    }

    /// Write a small gradient PNG to a temp path so `open` exercises the
    /// real decode path.
    fn temp_png(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("lumaview_test_{name}.png"));
        let img = image::RgbImage::from_fn(4, 2, |x, y| {
            image::Rgb([(x * 40) as u8, (y * 100) as u8, 30])
        });
        img.save(&path).expect("writing test png");
        path
    }

    #[test]
    fn new_session_reports_default_factors() {
        let session = ViewerSession::new();
        assert_eq!(session.status(), "a=1, b=0, gamma=1");
        assert!(session.display().is_none());
    }

    #[test]
    fn open_decodes_and_reports_file_status() {
        let path = temp_png("open");
        let mut session = ViewerSession::new();
        session.open(&path).unwrap();

        let display = session.display().expect("image displayed after open");
        assert_eq!((display.width, display.height), (4, 2));
        assert_eq!(display.layout, ChannelLayout::Rgb);

        let size = std::fs::metadata(&path).unwrap().len();
        assert_eq!(
            session.status(),
            format!("{}, 4x2, {} Bytes", path.display(), size)
        );
        assert_eq!(session.source_path(), Some(path.as_path()));
    }

    #[test]
    fn open_failure_keeps_previous_image() {
        let path = temp_png("keep");
        let mut session = ViewerSession::new();
        session.open(&path).unwrap();
        let before = session.display().unwrap().clone();
        let status_before = session.status().to_string();

        let err = session.open(Path::new("/nonexistent/not_an_image.png"));
        assert!(err.is_err());
        assert_eq!(session.display().unwrap(), &before);
        assert_eq!(session.status(), status_before);
        assert_eq!(session.source_path(), Some(path.as_path()));
    }

    #[test]
    fn params_update_status_even_without_an_image() {
        let mut session = ViewerSession::new();
        session.set_params(factors(2.0, 10.0, 3.0)).unwrap();
        assert_eq!(session.status(), "a=2, b=10, gamma=3");
        assert!(session.display().is_none());
    }

    #[test]
    fn parameter_changes_recompute_from_pristine_source() {
        let path = temp_png("pristine");
        let mut session = ViewerSession::new();
        session.open(&path).unwrap();
        let original = session.display().unwrap().clone();

        // Push the image through a lossy setting and back; clamping and
        // rounding must not accumulate because each change starts from the
        // pristine decode.
        session.set_params(factors(10.0, 50.0, 1.0)).unwrap();
        session.set_params(factors(1.0, 0.0, 1.0)).unwrap();
        assert_eq!(session.display().unwrap(), &original);
    }

    #[test]
    fn same_factors_twice_match_once() {
        let path = temp_png("idempotent");
        let mut session = ViewerSession::new();
        session.open(&path).unwrap();

        session.set_params(factors(2.0, 10.0, 2.0)).unwrap();
        let once = session.display().unwrap().clone();
        session.set_params(factors(1.0, 0.0, 1.0)).unwrap();
        session.set_params(factors(2.0, 10.0, 2.0)).unwrap();
        assert_eq!(session.display().unwrap(), &once);
    }

    #[test]
    fn engine_error_keeps_last_valid_image_and_factors() {
        let path = temp_png("engine_err");
        let mut session = ViewerSession::new();
        session.open(&path).unwrap();
        session.set_params(factors(2.0, 0.0, 1.0)).unwrap();
        let before = session.display().unwrap().clone();

        let err = session.set_params(factors(f64::NAN, 0.0, 1.0));
        assert!(err.is_err());
        assert_eq!(session.display().unwrap(), &before);
        assert_eq!(session.params(), factors(2.0, 0.0, 1.0));
        assert_eq!(session.status(), "a=2, b=0, gamma=1");
    }
}
