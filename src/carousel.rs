//! Carousel position arithmetic and resize debouncing.
//!
//! The strip holds two copies of one image series. Snapping back to zero
//! once the first copy has scrolled past is invisible because the second
//! copy looks identical.

use std::cell::Cell;

/// Inline style for one slide. A series always spans exactly one viewport,
/// which is the width [`CarouselState`] wraps at.
pub fn slide_style(series_len: usize) -> String {
    let series_len = series_len.max(1);
    format!("flex: 0 0 calc(100vw / {series_len}); width: calc(100vw / {series_len});")
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselState {
    position: f64,
    unit_width: f64,
    wrap_boundary: f64,
    series_len: usize,
}

impl CarouselState {
    pub fn new(viewport_width: f64, series_len: usize) -> Self {
        let series_len = series_len.max(1);
        let unit_width = viewport_width.max(0.0) / series_len as f64;
        Self {
            position: 0.0,
            unit_width,
            wrap_boundary: unit_width * series_len as f64,
            series_len,
        }
    }

    #[cfg(test)]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[cfg(test)]
    pub fn unit_width(&self) -> f64 {
        self.unit_width
    }

    #[cfg(test)]
    pub fn wrap_boundary(&self) -> f64 {
        self.wrap_boundary
    }

    /// Move one frame left. Returns the new position.
    pub fn advance(&mut self, speed: f64) -> f64 {
        self.position -= speed;
        if self.position.abs() >= self.wrap_boundary {
            self.position = 0.0;
        }
        self.position
    }

    /// Recompute the geometry for a new viewport, keeping the offset
    /// proportional to the image width.
    pub fn resize(&mut self, viewport_width: f64) {
        let unit_width = viewport_width.max(0.0) / self.series_len as f64;
        if self.unit_width > 0.0 {
            self.position = self.position / self.unit_width * unit_width;
        }
        self.unit_width = unit_width;
        self.wrap_boundary = unit_width * self.series_len as f64;
    }

    pub fn transform(&self) -> String {
        format!("translateX({}px)", self.position)
    }
}

/// Latest-wins debouncing: every trigger invalidates earlier tickets.
#[derive(Debug, Default)]
pub struct Debounce {
    generation: Cell<u64>,
}

impl Debounce {
    pub fn trigger(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.generation.get() == ticket
    }
}
