use super::{ChartConfig, ChartHandle, RenderTarget};
use crate::error::{Result, SimulatorError};
use std::collections::HashMap;

/// Lifecycle event recorded by [`MemorySurface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    Created(u64),
    Destroyed(u64),
}

/// Headless surface that keeps chart configs in memory.
///
/// Records every create/destroy in order so callers can check replacement
/// behaviour without a real drawing backend.
#[derive(Debug, Default)]
pub struct MemorySurface {
    attached: bool,
    next_id: u64,
    live: HashMap<u64, ChartConfig>,
    events: Vec<SurfaceEvent>,
}

impl MemorySurface {
    pub fn attached() -> Self {
        Self {
            attached: true,
            ..Default::default()
        }
    }

    pub fn detached() -> Self {
        Self::default()
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn chart(&self, handle: &ChartHandle) -> Option<&ChartConfig> {
        self.live.get(&handle.id())
    }

    pub fn is_live(&self, handle: &ChartHandle) -> bool {
        self.live.contains_key(&handle.id())
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }
}

impl RenderTarget for MemorySurface {
    fn is_attached(&self) -> bool {
        self.attached
    }

    fn create_chart(&mut self, config: &ChartConfig) -> Result<ChartHandle> {
        if !self.attached {
            return Err(SimulatorError::TargetUnavailable);
        }
        self.next_id += 1;
        let id = self.next_id;
        self.live.insert(id, config.clone());
        self.events.push(SurfaceEvent::Created(id));
        Ok(ChartHandle::new(id))
    }

    fn destroy_chart(&mut self, handle: ChartHandle) {
        if self.live.remove(&handle.id()).is_some() {
            self.events.push(SurfaceEvent::Destroyed(handle.id()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartSeries;

    #[test]
    fn test_ids_are_unique() {
        let mut surface = MemorySurface::attached();
        let config = ChartSeries::default().to_config();
        let a = surface.create_chart(&config).unwrap();
        let b = surface.create_chart(&config).unwrap();

        assert_ne!(a.id(), b.id());
        assert_eq!(surface.live_count(), 2);
    }

    #[test]
    fn test_destroying_unknown_handle_is_ignored() {
        let mut surface = MemorySurface::attached();
        surface.destroy_chart(ChartHandle::new(42));

        assert!(surface.events().is_empty());
        assert_eq!(surface.live_count(), 0);
    }

    #[test]
    fn test_create_on_detached_surface_fails() {
        let mut surface = MemorySurface::attached();
        surface.detach();
        let result = surface.create_chart(&ChartSeries::default().to_config());
        assert!(matches!(result, Err(SimulatorError::TargetUnavailable)));
    }
}
