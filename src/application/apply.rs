// SPDX-License-Identifier: MPL-2.0
//! The "apply wallpaper" use case.
//!
//! Applying runs in two asynchronous steps driven by the UI:
//!
//! 1. **Capturing**: the editor chrome is hidden, a frame is rendered and the
//!    window screenshot is requested.
//! 2. **Installing**: the canvas region is cropped from the screenshot and
//!    handed to the [`WallpaperSink`] on a blocking worker.
//!
//! [`ApplySession`] enforces single flight and tags each attempt with an
//! [`ApplyToken`] so that results arriving after a timeout are dropped.

use crate::application::port::{ScreenCapture, WallpaperSink};
use crate::domain::capture::{capture_region, CaptureError};
use crate::domain::geometry::{PixelRect, Rect};
use crate::error::WallpaperError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why an apply attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("An apply is already in progress")]
    AlreadyPending,

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Wallpaper(#[from] WallpaperError),
}

impl ApplyError {
    /// Returns the i18n message key shown to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApplyError::AlreadyPending => "notification-apply-pending",
            ApplyError::Capture(err) => err.i18n_key(),
            ApplyError::Wallpaper(err) => err.i18n_key(),
        }
    }

    /// Where the captured image was left when the desktop refused it.
    #[must_use]
    pub fn saved_path(&self) -> Option<&Path> {
        match self {
            ApplyError::Wallpaper(err) => err.saved_path(),
            _ => None,
        }
    }
}

/// Identifies one apply attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApplyToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplyPhase {
    #[default]
    Idle,
    /// Waiting for a chrome-free frame and its screenshot.
    Capturing(ApplyToken),
    /// Cropping and handing the image to the wallpaper sink.
    Installing(ApplyToken),
}

/// Single-flight state of the apply workflow.
#[derive(Debug, Clone, Default)]
pub struct ApplySession {
    phase: ApplyPhase,
    issued: u64,
}

impl ApplySession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> ApplyPhase {
        self.phase
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.phase != ApplyPhase::Idle
    }

    /// Editor chrome must stay hidden until the screenshot is taken.
    #[must_use]
    pub fn hides_chrome(&self) -> bool {
        matches!(self.phase, ApplyPhase::Capturing(_))
    }

    /// Starts a new attempt.
    ///
    /// # Errors
    ///
    /// Returns [`ApplyError::AlreadyPending`] while another attempt runs.
    pub fn begin(&mut self) -> Result<ApplyToken, ApplyError> {
        if self.is_pending() {
            return Err(ApplyError::AlreadyPending);
        }
        self.issued += 1;
        let token = ApplyToken(self.issued);
        self.phase = ApplyPhase::Capturing(token);
        Ok(token)
    }

    /// Moves a capturing attempt to the installing step.
    ///
    /// Returns `false` for a stale token, in which case the screenshot must
    /// be discarded.
    pub fn captured(&mut self, token: ApplyToken) -> bool {
        if self.phase == ApplyPhase::Capturing(token) {
            self.phase = ApplyPhase::Installing(token);
            true
        } else {
            false
        }
    }

    /// Abandons the attempt if it is still waiting for its screenshot.
    ///
    /// Returns `true` when the timeout took effect.
    pub fn timed_out(&mut self, token: ApplyToken) -> bool {
        if self.phase == ApplyPhase::Capturing(token) {
            self.phase = ApplyPhase::Idle;
            true
        } else {
            false
        }
    }

    /// Ends the attempt. Returns `false` for a stale token.
    pub fn finish(&mut self, token: ApplyToken) -> bool {
        match self.phase {
            ApplyPhase::Capturing(current) | ApplyPhase::Installing(current)
                if current == token =>
            {
                self.phase = ApplyPhase::Idle;
                true
            }
            _ => false,
        }
    }
}

/// Maps the canvas rectangle to a region of the screenshot.
///
/// `canvas` and `window_size` are logical window coordinates; the scale is
/// derived from the screenshot width. Without a measured canvas the whole
/// frame is used.
///
/// # Errors
///
/// Returns [`CaptureError::EmptyRegion`] when the canvas lies outside the
/// frame or the frame is empty.
pub fn physical_region(
    canvas: Option<Rect>,
    window_size: (f32, f32),
    frame_width: u32,
    frame_height: u32,
) -> Result<PixelRect, CaptureError> {
    let (logical_width, _) = window_size;
    #[allow(clippy::cast_precision_loss)]
    let scale = if logical_width > 0.0 {
        frame_width as f32 / logical_width
    } else {
        1.0
    };
    let window = PixelRect::from_size(frame_width, frame_height);
    capture_region(canvas.map(|rect| PixelRect::from_logical(rect, scale)), window)
}

/// Crops the captured region and installs it as the wallpaper.
///
/// Blocking; run it off the UI thread.
///
/// # Errors
///
/// Returns the capture or wallpaper failure, unchanged.
pub fn install_region<C, S>(capture: &C, sink: &S, region: PixelRect) -> Result<PathBuf, ApplyError>
where
    C: ScreenCapture + ?Sized,
    S: WallpaperSink + ?Sized,
{
    let image = capture.capture(region)?;
    tracing::debug!(
        width = image.width(),
        height = image.height(),
        "captured canvas region"
    );
    let path = sink.set_wallpaper(&image)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::image::RawImage;
    use std::sync::Mutex;

    struct FakeCapture {
        frame: RawImage,
    }

    impl ScreenCapture for FakeCapture {
        fn capture(&self, region: PixelRect) -> Result<RawImage, CaptureError> {
            self.frame.crop(region).ok_or(CaptureError::OutOfBounds {
                region,
                frame_width: self.frame.width(),
                frame_height: self.frame.height(),
            })
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        received: Mutex<Vec<(u32, u32)>>,
        fail: bool,
    }

    impl WallpaperSink for RecordingSink {
        fn set_wallpaper(&self, image: &RawImage) -> Result<PathBuf, WallpaperError> {
            if self.fail {
                return Err(WallpaperError::CommandFailed {
                    path: PathBuf::from("/tmp/wallpaper.png"),
                    message: "rejected".into(),
                });
            }
            self.received
                .lock()
                .unwrap()
                .push((image.width(), image.height()));
            Ok(PathBuf::from("/tmp/wallpaper.png"))
        }
    }

    fn frame(width: u32, height: u32) -> RawImage {
        RawImage::try_from_rgba(width, height, vec![200; (width * height * 4) as usize]).unwrap()
    }

    #[test]
    fn second_begin_is_rejected_while_pending() {
        let mut session = ApplySession::new();
        let token = session.begin().unwrap();
        assert_eq!(session.begin(), Err(ApplyError::AlreadyPending));

        assert!(session.captured(token));
        assert_eq!(session.begin(), Err(ApplyError::AlreadyPending));

        assert!(session.finish(token));
        assert!(session.begin().is_ok());
    }

    #[test]
    fn chrome_hidden_only_while_capturing() {
        let mut session = ApplySession::new();
        assert!(!session.hides_chrome());
        let token = session.begin().unwrap();
        assert!(session.hides_chrome());
        session.captured(token);
        assert!(!session.hides_chrome());
        assert!(session.is_pending());
    }

    #[test]
    fn late_screenshot_after_timeout_is_ignored() {
        let mut session = ApplySession::new();
        let first = session.begin().unwrap();
        assert!(session.timed_out(first));
        assert!(!session.is_pending());

        let second = session.begin().unwrap();
        assert!(!session.captured(first));
        assert!(!session.finish(first));
        assert_eq!(session.phase(), ApplyPhase::Capturing(second));
    }

    #[test]
    fn timeout_does_not_abort_installation() {
        let mut session = ApplySession::new();
        let token = session.begin().unwrap();
        session.captured(token);
        assert!(!session.timed_out(token));
        assert_eq!(session.phase(), ApplyPhase::Installing(token));
    }

    #[test]
    fn region_scales_logical_canvas_to_frame() {
        let canvas = Rect::new(0.0, 10.0, 400.0, 700.0);
        let region = physical_region(Some(canvas), (400.0, 800.0), 800, 1600).unwrap();
        assert_eq!(region, PixelRect::new(0, 20, 800, 1420));
    }

    #[test]
    fn region_is_clipped_to_frame() {
        let canvas = Rect::new(-50.0, 0.0, 500.0, 900.0);
        let region = physical_region(Some(canvas), (400.0, 800.0), 400, 800).unwrap();
        assert_eq!(region, PixelRect::new(0, 0, 400, 800));
    }

    #[test]
    fn canvas_outside_window_is_empty_region() {
        let canvas = Rect::new(500.0, 0.0, 100.0, 100.0);
        assert_eq!(
            physical_region(Some(canvas), (400.0, 800.0), 400, 800),
            Err(CaptureError::EmptyRegion)
        );
    }

    #[test]
    fn unknown_canvas_uses_whole_frame() {
        assert_eq!(
            physical_region(None, (400.0, 800.0), 800, 1600),
            Ok(PixelRect::new(0, 0, 800, 1600))
        );
    }

    #[test]
    fn install_region_hands_cropped_image_to_sink() {
        let capture = FakeCapture { frame: frame(40, 30) };
        let sink = RecordingSink::default();

        let path = install_region(&capture, &sink, PixelRect::new(5, 5, 25, 15)).unwrap();

        assert_eq!(path, PathBuf::from("/tmp/wallpaper.png"));
        assert_eq!(*sink.received.lock().unwrap(), vec![(20, 10)]);
    }

    #[test]
    fn capture_failure_skips_sink() {
        let capture = FakeCapture { frame: frame(10, 10) };
        let sink = RecordingSink::default();

        let err = install_region(&capture, &sink, PixelRect::new(0, 0, 20, 20)).unwrap_err();

        assert!(matches!(err, ApplyError::Capture(CaptureError::OutOfBounds { .. })));
        assert_eq!(err.i18n_key(), "notification-capture-error");
        assert!(sink.received.lock().unwrap().is_empty());
    }

    #[test]
    fn sink_failure_is_reported() {
        let capture = FakeCapture { frame: frame(10, 10) };
        let sink = RecordingSink {
            fail: true,
            ..RecordingSink::default()
        };

        let err = install_region(&capture, &sink, PixelRect::new(0, 0, 10, 10)).unwrap_err();
        assert_eq!(err.i18n_key(), "notification-wallpaper-rejected");
    }
}
