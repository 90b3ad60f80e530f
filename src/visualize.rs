use log::{debug, warn};
use std::time::{Duration, Instant};

use crate::algorithms::convex_hull;
use crate::data::{DirectedEdge, Hull, Point};
use crate::{Error, PolygonScalar};

/// RGB color of drawn edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
  pub const RED: Color = Color(255, 0, 0);
}

/// Failure reported by a [`Renderer`]. Rendering is best effort, so these are
/// logged and never abort a hull computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
  /// The display has gone away.
  Disconnected,
  /// Renderer specific failure.
  Other(String),
}

impl std::fmt::Display for RenderError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      RenderError::Disconnected => write!(f, "Renderer is disconnected"),
      RenderError::Other(msg) => write!(f, "Renderer failed: {}", msg),
    }
  }
}

impl std::error::Error for RenderError {}

/// Something that can display hull edges and a line of status text.
pub trait Renderer<T> {
  fn draw(&mut self, edges: &[DirectedEdge<T>], color: Color) -> Result<(), RenderError>;
  fn clear(&mut self, edges: &[DirectedEdge<T>]) -> Result<(), RenderError>;
  fn set_status(&mut self, text: &str) -> Result<(), RenderError>;
}

/// Display pacing for [`compute_hull`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HullOptions {
  /// Sleep after every draw so the result can be watched.
  pub pause: bool,
  pub pause_delay: Duration,
}

impl Default for HullOptions {
  fn default() -> Self {
    HullOptions {
      pause: false,
      pause_delay: Duration::from_millis(250),
    }
  }
}

impl HullOptions {
  #[must_use]
  pub fn with_pause(mut self, pause: bool) -> Self {
    self.pause = pause;
    self
  }

  #[must_use]
  pub fn with_pause_delay(mut self, pause_delay: Duration) -> Self {
    self.pause_delay = pause_delay;
    self
  }
}

// Forwards to an optional renderer and swallows its errors.
struct View<'a, 'r, T> {
  renderer: Option<&'r mut dyn Renderer<T>>,
  options: &'a HullOptions,
}

impl<T> View<'_, '_, T> {
  fn show(&mut self, edges: &[DirectedEdge<T>], color: Color) {
    if let Some(renderer) = self.renderer.as_deref_mut() {
      if let Err(err) = renderer.draw(edges, color) {
        warn!("failed to draw {} edges: {}", edges.len(), err);
      }
      if self.options.pause {
        std::thread::sleep(self.options.pause_delay);
      }
    }
  }

  fn status(&mut self, text: &str) {
    if let Some(renderer) = self.renderer.as_deref_mut() {
      if let Err(err) = renderer.set_status(text) {
        warn!("failed to set status: {}", err);
      }
    }
  }
}

/// Compute the hull of `points` and report it to `renderer`.
///
/// The boundary is drawn in [`Color::RED`] and the status text is set to the
/// elapsed computation time. Renderer failures are logged and otherwise
/// ignored; the returned hull is always the one [`convex_hull`] computes.
///
/// # Errors
/// Same as [`convex_hull`].
///
/// # Examples
///
/// ```rust
/// # use dchull::data::Point;
/// # use dchull::{compute_hull, HullOptions};
/// let pts = vec![Point::new([0, 0]), Point::new([2, 1]), Point::new([1, 3])];
/// let hull = compute_hull(pts, None, &HullOptions::default())?;
/// assert_eq!(hull.len(), 3);
/// # Ok::<(), dchull::Error>(())
/// ```
pub fn compute_hull<T>(
  points: Vec<Point<T>>,
  renderer: Option<&mut dyn Renderer<T>>,
  options: &HullOptions,
) -> Result<Hull<T>, Error>
where
  T: PolygonScalar,
{
  let mut view = View { renderer, options };
  let start = Instant::now();
  let hull = convex_hull(points)?;
  let elapsed = start.elapsed();
  debug!("hull of {} edges in {:?}", hull.len(), elapsed);
  view.show(hull.edges(), Color::RED);
  view.status(&format!(
    "Time Elapsed (Convex Hull): {:.3} sec",
    elapsed.as_secs_f64()
  ));
  Ok(hull)
}
