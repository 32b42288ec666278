//! Console stand-in for the physical panel.
//!
//! Used for development off the device (default build, no `hardware`
//! feature). Feedback cues go through tracing with the same timing as the
//! real panel so the orchestrator's pacing is representative.

use crate::messages::Role;
use crate::panel::alert::{melody_duration, LED_HOLD};
use crate::panel::display::wrap_lines;
use crate::panel::IndicatorPanel;
use async_trait::async_trait;
use tokio::time::sleep;
use tracing::info;

#[derive(Debug, Default)]
pub struct ConsolePanel;

impl ConsolePanel {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl IndicatorPanel for ConsolePanel {
    async fn acknowledge(&mut self, role: Role) {
        match role {
            Role::User => {
                info!("[panel] user LED on");
                sleep(LED_HOLD).await;
                info!("[panel] user LED off");
            }
            Role::Magician => {
                info!("[panel] magician alert melody");
                sleep(melody_duration()).await;
                info!("[panel] magician LED on");
                sleep(LED_HOLD).await;
                info!("[panel] magician LED off");
            }
        }
    }

    async fn show(&mut self, text: &str) {
        let [top, bottom] = wrap_lines(text);
        info!("[panel] |{:<16}|", top);
        info!("[panel] |{:<16}|", bottom);
    }
}
