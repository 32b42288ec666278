//! GPIO/I2C driver for the real feedback hardware.
//!
//! LEDs and buzzers hang off GPIO pins; the 16x2 LCD sits behind a PCF8574
//! I2C backpack driven in 4-bit mode. Buzzer tones use software PWM.
//!
//! Panel operations are fire-and-forget per the [`IndicatorPanel`] contract,
//! so runtime pin/bus failures are logged and swallowed. Only probing and
//! initialization report errors, and those abort startup.

use crate::messages::Role;
use crate::panel::alert::{LED_HOLD, MAGIC_NOTES, MELODY_REPEATS, NOTE_DURATION};
use crate::panel::display::wrap_lines;
use crate::panel::IndicatorPanel;
use crate::{MagicBoxError, Result};
use async_trait::async_trait;
use rppal::gpio::{Gpio, OutputPin};
use rppal::i2c::I2c;
use std::thread;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// BCM pin numbers for the feedback devices.
pub const USER_BUZZER_PIN: u8 = 6;
pub const MAGICIAN_BUZZER_PIN: u8 = 12;
pub const USER_LED_PIN: u8 = 26;
pub const MAGICIAN_LED_PIN: u8 = 20;

/// Candidate addresses for the LCD backpack. PCF8574T answers at 0x27,
/// PCF8574AT at 0x3F.
pub const LCD_ADDRESSES: [u16; 2] = [0x27, 0x3F];

// PCF8574 bit assignments on the LCD backpack.
const LCD_RS: u8 = 0x01;
const LCD_EN: u8 = 0x04;
const LCD_BACKLIGHT: u8 = 0x08;

// HD44780 commands.
const CMD_CLEAR: u8 = 0x01;
const CMD_LINE_ADDR: [u8; 2] = [0x80, 0xC0];

pub struct GpioPanel {
    i2c: I2c,
    user_led: OutputPin,
    magician_led: OutputPin,
    magician_buzzer: OutputPin,
    // Driven as a plain output; only the magician cue is melodic.
    _user_buzzer: OutputPin,
}

impl GpioPanel {
    /// Probe the I2C bus for the LCD backpack and claim the GPIO pins.
    ///
    /// Fatal if no backpack answers at any known address or a pin cannot be
    /// claimed; the box is useless without its feedback hardware.
    pub fn probe() -> Result<Self> {
        let mut i2c =
            I2c::new().map_err(|e| MagicBoxError::DeviceInit(format!("I2C bus unavailable: {e}")))?;

        let mut found = None;
        for addr in LCD_ADDRESSES {
            if i2c.set_slave_address(addr).is_ok() && i2c.write(&[0]).is_ok() {
                info!("found LCD backpack at 0x{addr:02x}");
                found = Some(addr);
                break;
            }
            warn!("no device at 0x{addr:02x}");
        }
        let addr = found.ok_or_else(|| {
            MagicBoxError::DeviceInit(
                "no LCD backpack at any known I2C address; check the bus with 'i2cdetect -y 1'"
                    .to_string(),
            )
        })?;
        i2c.set_slave_address(addr)
            .map_err(|e| MagicBoxError::DeviceInit(e.to_string()))?;

        let gpio =
            Gpio::new().map_err(|e| MagicBoxError::DeviceInit(format!("GPIO unavailable: {e}")))?;
        let claim = |pin: u8| -> Result<OutputPin> {
            Ok(gpio
                .get(pin)
                .map_err(|e| MagicBoxError::DeviceInit(format!("cannot claim GPIO {pin}: {e}")))?
                .into_output())
        };

        let mut panel = Self {
            i2c,
            user_led: claim(USER_LED_PIN)?,
            magician_led: claim(MAGICIAN_LED_PIN)?,
            magician_buzzer: claim(MAGICIAN_BUZZER_PIN)?,
            _user_buzzer: claim(USER_BUZZER_PIN)?,
        };
        panel.lcd_init()?;
        Ok(panel)
    }

    fn lcd_init(&mut self) -> Result<()> {
        // Standard HD44780 4-bit init: sync nibbles, then function set
        // (2 lines, 5x8), display on, entry mode, clear.
        for cmd in [0x33, 0x32, 0x28, 0x0C, 0x06, CMD_CLEAR] {
            self.lcd_command(cmd)
                .map_err(|e| MagicBoxError::DeviceInit(format!("LCD init failed: {e}")))?;
        }
        thread::sleep(Duration::from_millis(2));
        Ok(())
    }

    fn lcd_command(&mut self, byte: u8) -> rppal::i2c::Result<()> {
        self.lcd_write(byte, false)
    }

    fn lcd_write(&mut self, byte: u8, is_data: bool) -> rppal::i2c::Result<()> {
        let rs = if is_data { LCD_RS } else { 0 };
        for nibble in [byte & 0xF0, (byte << 4) & 0xF0] {
            let frame = nibble | rs | LCD_BACKLIGHT;
            self.i2c.write(&[frame | LCD_EN])?;
            thread::sleep(Duration::from_micros(50));
            self.i2c.write(&[frame])?;
            thread::sleep(Duration::from_micros(50));
        }
        Ok(())
    }

    fn lcd_render(&mut self, text: &str) -> rppal::i2c::Result<()> {
        self.lcd_command(CMD_CLEAR)?;
        thread::sleep(Duration::from_millis(2));

        let lines = wrap_lines(text);
        for (row, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            self.lcd_command(CMD_LINE_ADDR[row])?;
            // The HD44780 character ROM is 8-bit; anything outside ASCII
            // renders as a placeholder.
            for ch in line.chars() {
                let byte = if ch.is_ascii() { ch as u8 } else { b'?' };
                self.lcd_write(byte, true)?;
            }
        }
        Ok(())
    }

    async fn play_melody(&mut self) {
        for _ in 0..MELODY_REPEATS {
            for note in MAGIC_NOTES {
                if let Err(e) = self.magician_buzzer.set_pwm_frequency(note as f64, 0.5) {
                    warn!("buzzer PWM failed: {e}");
                    return;
                }
                sleep(NOTE_DURATION).await;
            }
        }
        if let Err(e) = self.magician_buzzer.clear_pwm() {
            warn!("buzzer PWM stop failed: {e}");
        }
    }
}

#[async_trait]
impl IndicatorPanel for GpioPanel {
    async fn acknowledge(&mut self, role: Role) {
        if role == Role::Magician {
            self.play_melody().await;
        }
        let led = match role {
            Role::User => &mut self.user_led,
            Role::Magician => &mut self.magician_led,
        };
        led.set_high();
        sleep(LED_HOLD).await;
        led.set_low();
    }

    async fn show(&mut self, text: &str) {
        if let Err(e) = self.lcd_render(text) {
            warn!("LCD write failed: {e}");
        }
    }
}
