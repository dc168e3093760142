//! Wall-clock timing for the per-step perf metrics.
//!
//! Wasm has no monotonic `Instant`, so there timings come from
//! `js_sys::Date::now()` at millisecond resolution; native builds use
//! `std::time::Instant`.

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    origin_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    origin: std::time::Instant,
}

impl PerfTimer {
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn start() -> Self {
        PerfTimer {
            origin_ms: js_sys::Date::now(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn start() -> Self {
        PerfTimer {
            origin: std::time::Instant::now(),
        }
    }

    /// Milliseconds since `start`, the unit every `*_ms` field of
    /// `PerfStats` carries.
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn elapsed_ms(&self) -> f64 {
        js_sys::Date::now() - self.origin_ms
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn elapsed_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}
