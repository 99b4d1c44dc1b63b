//! Mock HAL implementation for testing the screen coordinates channel
//!
//! This provides a mock implementation of the channel HAL traits that can
//! be used for unit testing the responder and the embedder client without
//! requiring a browser.

#![no_std]
extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::sync::atomic::{AtomicU64, Ordering};
use periscope_hal::{ChannelHal, GuestHal, HalError, NumericEndpoint, ScreenGeometry};

/// Mock HAL for unit testing
///
/// Provides scripted screen geometry, captured message dispatches, and a
/// captured debug log for testing channel logic without a real platform.
pub struct MockHal {
    /// Geometry returned by the next screen sample
    geometry: Cell<ScreenGeometry>,
    /// Number of live geometry samples taken
    geometry_samples: AtomicU64,
    /// When set, screen sampling fails
    geometry_unavailable: Cell<bool>,
    /// When set, the next notify fails and the flag clears
    fail_next_notify: Cell<bool>,
    /// Captured outbound messages (target, body)
    sent: RefCell<Vec<(NumericEndpoint, String)>>,
    /// Captured debug messages
    debug_log: RefCell<Vec<String>>,
}

impl MockHal {
    /// Create a new mock HAL with the window parked at the origin
    pub fn new() -> Self {
        Self::with_geometry(ScreenGeometry::at(0, 0))
    }

    /// Create a mock HAL with a specific starting geometry
    pub fn with_geometry(geometry: ScreenGeometry) -> Self {
        Self {
            geometry: Cell::new(geometry),
            geometry_samples: AtomicU64::new(0),
            geometry_unavailable: Cell::new(false),
            fail_next_notify: Cell::new(false),
            sent: RefCell::new(Vec::new()),
            debug_log: RefCell::new(Vec::new()),
        }
    }

    /// Script the geometry reported by subsequent samples ("move" the window)
    pub fn set_geometry(&self, geometry: ScreenGeometry) {
        self.geometry.set(geometry);
    }

    /// Number of live geometry samples taken so far
    ///
    /// Lets tests prove that replies sample at request time instead of
    /// caching an earlier value.
    pub fn geometry_sample_count(&self) -> u64 {
        self.geometry_samples.load(Ordering::SeqCst)
    }

    /// Make screen sampling fail until re-enabled
    pub fn set_geometry_unavailable(&self, unavailable: bool) {
        self.geometry_unavailable.set(unavailable);
    }

    /// Make the next notify fail with `HalError::PostFailed`
    pub fn fail_next_notify(&self) {
        self.fail_next_notify.set(true);
    }

    /// Get all captured outbound messages
    pub fn sent(&self) -> Vec<(NumericEndpoint, String)> {
        self.sent.borrow().clone()
    }

    /// Get the bodies of messages sent to a specific endpoint
    pub fn sent_to(&self, target: NumericEndpoint) -> Vec<String> {
        self.sent
            .borrow()
            .iter()
            .filter(|(ep, _)| *ep == target)
            .map(|(_, body)| body.clone())
            .collect()
    }

    /// Drain and return all captured outbound messages
    pub fn take_sent(&self) -> Vec<(NumericEndpoint, String)> {
        self.sent.borrow_mut().drain(..).collect()
    }

    /// Get the number of captured outbound messages
    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }

    /// Get all captured debug messages
    pub fn get_debug_log(&self) -> Vec<String> {
        self.debug_log.borrow().clone()
    }

    /// Clear the debug log
    pub fn clear_debug_log(&self) {
        self.debug_log.borrow_mut().clear();
    }

    /// Check if a specific message was logged
    pub fn has_log_containing(&self, substr: &str) -> bool {
        self.debug_log
            .borrow()
            .iter()
            .any(|msg| msg.contains(substr))
    }

    /// Get the number of debug messages
    pub fn debug_log_count(&self) -> usize {
        self.debug_log.borrow().len()
    }
}

impl Default for MockHal {
    fn default() -> Self {
        Self::new()
    }
}

// MockHal is Send + Sync because the atomic counter is thread-safe and the
// Cell/RefCell state is only accessed in single-threaded test contexts
unsafe impl Send for MockHal {}
unsafe impl Sync for MockHal {}

impl ChannelHal for MockHal {
    type Endpoint = NumericEndpoint;

    fn notify(&self, target: &Self::Endpoint, body: &str) -> Result<(), HalError> {
        if self.fail_next_notify.replace(false) {
            return Err(HalError::PostFailed);
        }
        self.sent.borrow_mut().push((*target, String::from(body)));
        Ok(())
    }

    fn debug_write(&self, msg: &str) {
        self.debug_log.borrow_mut().push(String::from(msg));
    }
}

impl GuestHal for MockHal {
    fn screen_geometry(&self) -> Result<ScreenGeometry, HalError> {
        if self.geometry_unavailable.get() {
            return Err(HalError::GeometryUnavailable);
        }
        self.geometry_samples.fetch_add(1, Ordering::SeqCst);
        Ok(self.geometry.get())
    }
}
