// File: crates/chart-core/src/host.rs
// Summary: Render-surface lifecycle: one backend instance per host, created on first use,
// updated in place, resized on notification, disposed exactly once.

use tracing::{debug, info};

use crate::chart::ChartSpec;
use crate::config::ChartConfig;
use crate::error::RenderError;
use crate::pipeline::{prepare, ChartState};
use crate::record::RawRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// External renderer that turns a chart spec into pixels on a surface it owns.
pub trait RenderBackend {
    type Instance;

    fn create(&mut self, size: SurfaceSize) -> Result<Self::Instance, RenderError>;
    /// Replace the displayed chart with `spec`.
    fn apply(&mut self, instance: &mut Self::Instance, spec: &ChartSpec) -> Result<(), RenderError>;
    fn show_placeholder(&mut self, instance: &mut Self::Instance) -> Result<(), RenderError>;
    fn resize(&mut self, instance: &mut Self::Instance, size: SurfaceSize) -> Result<(), RenderError>;
    fn dispose(&mut self, instance: Self::Instance);
}

/// Owner of a single render instance for one mount point.
pub struct ChartHost<B: RenderBackend> {
    backend: B,
    instance: Option<B::Instance>,
    size: SurfaceSize,
    config: ChartConfig,
    state: ChartState,
    disposed: bool,
}

impl<B: RenderBackend> ChartHost<B> {
    pub fn new(backend: B, size: SurfaceSize, config: ChartConfig) -> Self {
        Self { backend, instance: None, size, config, state: ChartState::NoData, disposed: false }
    }

    /// Recompute the chart from `records` and push it to the surface. The instance is
    /// created the first time there is data to show.
    pub fn update(&mut self, records: &[RawRecord]) -> Result<&ChartState, RenderError> {
        if self.disposed {
            return Err(RenderError::Disposed);
        }
        self.state = prepare(records, &self.config);
        match &self.state {
            ChartState::Ready(spec) => {
                if self.instance.is_none() {
                    info!(width = self.size.width, height = self.size.height, "creating render instance");
                    self.instance = Some(self.backend.create(self.size)?);
                }
                if let Some(instance) = self.instance.as_mut() {
                    self.backend.apply(instance, spec)?;
                }
            }
            ChartState::NoData => {
                if let Some(instance) = self.instance.as_mut() {
                    self.backend.show_placeholder(instance)?;
                }
            }
        }
        Ok(&self.state)
    }

    /// Forward a container resize. Stored for later creation when not yet mounted.
    pub fn resize(&mut self, size: SurfaceSize) -> Result<(), RenderError> {
        if self.disposed {
            return Err(RenderError::Disposed);
        }
        self.size = size;
        if let Some(instance) = self.instance.as_mut() {
            debug!(width = size.width, height = size.height, "resizing render instance");
            self.backend.resize(instance, size)?;
        }
        Ok(())
    }

    /// Release the instance. Later calls are no-ops.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if let Some(instance) = self.instance.take() {
            info!("disposing render instance");
            self.backend.dispose(instance);
        }
    }

    pub fn state(&self) -> &ChartState {
        &self.state
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn is_mounted(&self) -> bool {
        self.instance.is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Backend plus live instance, for reading back rendered output.
    pub fn instance_mut(&mut self) -> Option<(&mut B, &mut B::Instance)> {
        let instance = self.instance.as_mut()?;
        Some((&mut self.backend, instance))
    }
}

impl<B: RenderBackend> Drop for ChartHost<B> {
    fn drop(&mut self) {
        self.dispose();
    }
}
