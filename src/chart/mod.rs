//! Chart data adapter and rendering contract
//!
//! A chart lives on a [`RenderTarget`]. The caller keeps the returned
//! [`ChartHandle`] and passes it back on the next [`render`] call, which
//! destroys the old chart before creating the new one. A target therefore
//! never holds more than one live chart from this adapter.

mod series;
mod memory;
mod terminal;

pub use series::{
    to_series, ChartConfig, ChartKind, ChartOptions, ChartSeries, Dataset, LegendPosition,
    BALANCE_COLOR, CONTRIBUTION_COLOR, INTEREST_COLOR,
};
pub use memory::{MemorySurface, SurfaceEvent};
pub use terminal::TerminalSurface;

use crate::error::{Result, SimulatorError};
use crate::observer::{NoopObserver, SimulationObserver};

/// Opaque reference to a live chart on a surface.
///
/// Not `Clone`: a handle is consumed when its chart is destroyed.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ChartHandle(u64);

impl ChartHandle {
    /// Surfaces mint handles from their own id space
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A drawing surface that can host charts
pub trait RenderTarget {
    /// Whether the surface is ready to draw on
    fn is_attached(&self) -> bool;

    /// Construct a chart and return its handle
    fn create_chart(&mut self, config: &ChartConfig) -> Result<ChartHandle>;

    /// Release a chart previously created on this surface. Must work while detached.
    fn destroy_chart(&mut self, handle: ChartHandle);
}

/// Render `series` on `surface`, replacing `previous` if given
pub fn render<T: RenderTarget + ?Sized>(
    series: &ChartSeries,
    surface: &mut T,
    previous: Option<ChartHandle>,
) -> Result<ChartHandle> {
    render_observed(series, surface, previous, &NoopObserver)
}

/// [`render`] with destroy/create events reported to `observer`
///
/// `previous` is always destroyed, even when the surface turns out to be
/// detached, so its chart cannot outlive the handle. A detached surface then
/// fails with `TargetUnavailable` and nothing new is created.
pub fn render_observed<T: RenderTarget + ?Sized>(
    series: &ChartSeries,
    surface: &mut T,
    previous: Option<ChartHandle>,
    observer: &dyn SimulationObserver,
) -> Result<ChartHandle> {
    if let Some(handle) = previous {
        let id = handle.id();
        surface.destroy_chart(handle);
        observer.on_chart_destroyed(id);
    }

    if !surface.is_attached() {
        return Err(SimulatorError::TargetUnavailable);
    }

    let handle = surface.create_chart(&series.to_config())?;
    observer.on_chart_created(&handle);
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionInput};
    use std::cell::RefCell;

    fn series(years: u32) -> ChartSeries {
        let result = ProjectionEngine::new(ProjectionConfig {
            base_year: Some(2023),
            ..Default::default()
        })
        .project(&ProjectionInput::new(1000.0, 200.0, 5.0, years));
        to_series(&result)
    }

    #[test]
    fn test_first_render_creates_chart() {
        let mut surface = MemorySurface::attached();
        let handle = render(&series(2), &mut surface, None).unwrap();

        assert_eq!(surface.live_count(), 1);
        assert_eq!(surface.events(), &[SurfaceEvent::Created(handle.id())]);
        let config = surface.chart(&handle).unwrap();
        assert_eq!(config.kind, ChartKind::Bar);
        assert_eq!(config.labels, vec!["2024", "2025"]);
    }

    #[test]
    fn test_rerender_destroys_before_create() {
        let mut surface = MemorySurface::attached();
        let first = render(&series(2), &mut surface, None).unwrap();
        let first_id = first.id();
        let second = render(&series(3), &mut surface, Some(first)).unwrap();
        let second_id = second.id();
        let third = render(&series(4), &mut surface, Some(second)).unwrap();

        assert_eq!(
            surface.events(),
            &[
                SurfaceEvent::Created(first_id),
                SurfaceEvent::Destroyed(first_id),
                SurfaceEvent::Created(second_id),
                SurfaceEvent::Destroyed(second_id),
                SurfaceEvent::Created(third.id()),
            ]
        );
        assert_eq!(surface.live_count(), 1);
        assert!(surface.is_live(&third));
        assert_eq!(surface.chart(&third).unwrap().labels.len(), 4);
    }

    #[test]
    fn test_detached_surface_is_unavailable() {
        let mut surface = MemorySurface::detached();
        let err = render(&series(2), &mut surface, None).unwrap_err();

        assert!(matches!(err, SimulatorError::TargetUnavailable));
        assert!(surface.events().is_empty());
        assert_eq!(surface.live_count(), 0);
    }

    #[test]
    fn test_detached_render_releases_previous_chart() {
        let mut surface = MemorySurface::attached();
        let first = render(&series(2), &mut surface, None).unwrap();
        let first_id = first.id();

        surface.detach();
        let err = render(&series(3), &mut surface, Some(first)).unwrap_err();
        assert!(matches!(err, SimulatorError::TargetUnavailable));
        assert_eq!(surface.live_count(), 0);

        surface.attach();
        let second = render(&series(3), &mut surface, None).unwrap();

        assert_eq!(surface.live_count(), 1);
        assert!(surface.is_live(&second));
        assert_eq!(
            surface.events(),
            &[
                SurfaceEvent::Created(first_id),
                SurfaceEvent::Destroyed(first_id),
                SurfaceEvent::Created(second.id()),
            ]
        );
    }

    #[test]
    fn test_render_after_attach() {
        let mut surface = MemorySurface::detached();
        assert!(render(&series(1), &mut surface, None).is_err());

        surface.attach();
        let handle = render(&series(1), &mut surface, None).unwrap();
        assert!(surface.is_live(&handle));
    }

    #[test]
    fn test_empty_series_still_renders() {
        let mut surface = MemorySurface::attached();
        let handle = render(&series(0), &mut surface, None).unwrap();
        let config = surface.chart(&handle).unwrap();

        assert!(config.labels.is_empty());
        assert_eq!(config.datasets.len(), 3);
        assert!(config.datasets.iter().all(|d| d.data.is_empty()));
    }

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<String>>,
    }

    impl SimulationObserver for Recorder {
        fn on_chart_destroyed(&self, handle_id: u64) {
            self.events.borrow_mut().push(format!("destroyed {handle_id}"));
        }

        fn on_chart_created(&self, handle: &ChartHandle) {
            self.events.borrow_mut().push(format!("created {}", handle.id()));
        }
    }

    #[test]
    fn test_observer_sees_replacement_order() {
        let recorder = Recorder::default();
        let mut surface = MemorySurface::attached();
        let first = render_observed(&series(1), &mut surface, None, &recorder).unwrap();
        let first_id = first.id();
        let second = render_observed(&series(1), &mut surface, Some(first), &recorder).unwrap();

        assert_eq!(
            *recorder.events.borrow(),
            vec![
                format!("created {first_id}"),
                format!("destroyed {first_id}"),
                format!("created {}", second.id()),
            ]
        );
    }
}
