//! Indicator panel: the combined LED/buzzer/display feedback hardware.
//!
//! The orchestrator drives the panel through the [`IndicatorPanel`] trait so
//! the same sequencing runs against the real GPIO hardware (behind the
//! `hardware` feature), a console stand-in off the device, and recording
//! mocks in tests.

pub mod alert;
pub mod console;
pub mod display;
#[cfg(feature = "hardware")]
pub mod gpio;

pub use console::ConsolePanel;
pub use display::{wrap_lines, LINE_COUNT, LINE_WIDTH};
#[cfg(feature = "hardware")]
pub use gpio::GpioPanel;

use crate::messages::Role;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle to the one physical panel. The mutex keeps acknowledge/show
/// sequences from concurrent sessions from interleaving on the hardware.
pub type PanelHandle = Arc<Mutex<Box<dyn IndicatorPanel>>>;

/// Output-only feedback device: two LEDs, two buzzers, a 16x2 display.
///
/// Both operations are fire-and-forget; failures are logged by the driver,
/// never surfaced to the caller.
#[async_trait]
pub trait IndicatorPanel: Send {
    /// Drive the role's LED for a fixed hold time. For [`Role::Magician`]
    /// the alert melody plays on the buzzer before the LED step.
    async fn acknowledge(&mut self, role: Role);

    /// Clear the display and render `text` wrapped across the two lines.
    async fn show(&mut self, text: &str);
}

/// Wrap a panel driver in the shared handle the orchestrator expects.
pub fn shared(panel: impl IndicatorPanel + 'static) -> PanelHandle {
    let boxed: Box<dyn IndicatorPanel> = Box::new(panel);
    Arc::new(Mutex::new(boxed))
}
