//! Board configuration.
//!
//! Read once at startup and handed to [`Board::new`](crate::board::Board::new) by value. Every field
//! has a hardware default, so a JSON document only needs the keys it wants to change.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{BoardError, Result};

/// Visible scanlines per frame (the monitor is rotated, so this is the raster "height").
pub const RASTER_HEIGHT: usize = 224;
/// Pixels per scanline.
pub const RASTER_WIDTH: usize = 256;

/// DIP switches 3 and 5: ships per game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum ShipSwitch {
    #[default]
    Three,
    Four,
    Five,
    Six,
}

impl ShipSwitch {
    /// Two-bit code presented on input port 2, bits 0-1.
    pub const fn code(self) -> u8 {
        match self {
            ShipSwitch::Three => 0b00,
            ShipSwitch::Four => 0b01,
            ShipSwitch::Five => 0b10,
            ShipSwitch::Six => 0b11,
        }
    }
}

/// DIP switch 6: score needed for the extra base.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum ExtraLifeSwitch {
    #[default]
    OneThousandFiveHundred,
    OneThousand,
}

impl ExtraLifeSwitch {
    pub const fn code(self) -> u8 {
        match self {
            ExtraLifeSwitch::OneThousandFiveHundred => 0,
            ExtraLifeSwitch::OneThousand => 1,
        }
    }
}

/// DIP switch 7: coin information shown during the attract demo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum DemoCoinInfoSwitch {
    #[default]
    On,
    Off,
}

impl DemoCoinInfoSwitch {
    pub const fn code(self) -> u8 {
        match self {
            DemoCoinInfoSwitch::On => 0,
            DemoCoinInfoSwitch::Off => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub rom_directory: PathBuf,
    pub sound_directory: PathBuf,
    pub cycles_per_second: i32,
    pub frames_per_second: i32,
    /// Two-sided table cabinet: honour the board's flip latch when drawing.
    pub cocktail_table: bool,
    /// Echo characters written to the watchdog port.
    pub show_watchdog_output: bool,
    /// Trace every port access through the `log` facade.
    pub debug_mode: bool,
    pub pixel_size: usize,
    pub ships: ShipSwitch,
    pub extra_life: ExtraLifeSwitch,
    pub demo_coin_info: DemoCoinInfoSwitch,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            rom_directory: PathBuf::from("roms"),
            sound_directory: PathBuf::from("sounds"),
            cycles_per_second: 2_000_000,
            frames_per_second: 60,
            cocktail_table: false,
            show_watchdog_output: false,
            debug_mode: false,
            pixel_size: 2,
            ships: ShipSwitch::default(),
            extra_life: ExtraLifeSwitch::default(),
            demo_coin_info: DemoCoinInfoSwitch::default(),
        }
    }
}

impl Configuration {
    /// Parse a JSON object of overrides; missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Both rates must be positive and leave at least one cycle per scanline.
    pub fn validate(&self) -> Result<()> {
        if self.cycles_per_second <= 0 {
            return Err(BoardError::InvalidTiming(format!(
                "cycles_per_second is {}",
                self.cycles_per_second
            )));
        }
        if self.frames_per_second <= 0 {
            return Err(BoardError::InvalidTiming(format!(
                "frames_per_second is {}",
                self.frames_per_second
            )));
        }
        if self.cycles_per_scanline() <= 0 {
            return Err(BoardError::InvalidTiming(format!(
                "{} cycles/s at {} frames/s leaves no cycles per scanline",
                self.cycles_per_second, self.frames_per_second
            )));
        }
        Ok(())
    }

    /// Zero when the rates are unusable; [`Configuration::validate`] reports why.
    pub fn cycles_per_frame(&self) -> i32 {
        self.cycles_per_second.checked_div(self.frames_per_second).unwrap_or(0)
    }

    /// One sixth of every frame is vertical blank.
    pub fn cycles_per_vertical_blank(&self) -> i32 {
        self.cycles_per_frame() / 6
    }

    pub fn cycles_per_raster_scan(&self) -> i32 {
        self.cycles_per_frame() - self.cycles_per_vertical_blank()
    }

    pub fn cycles_per_scanline(&self) -> i32 {
        self.cycles_per_raster_scan() / RASTER_HEIGHT as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing_matches_two_megahertz_at_sixty_hertz() {
        let config = Configuration::default();
        assert_eq!(config.cycles_per_frame(), 33_333);
        assert_eq!(config.cycles_per_vertical_blank(), 5_555);
        assert_eq!(config.cycles_per_raster_scan(), 27_778);
        assert_eq!(config.cycles_per_scanline(), 124);
    }

    #[test]
    fn json_overrides_only_named_keys() {
        let config = Configuration::from_json(
            r#"{ "ships": "Five", "cocktail_table": true, "frames_per_second": 50 }"#,
        )
        .unwrap();
        assert_eq!(config.ships, ShipSwitch::Five);
        assert!(config.cocktail_table);
        assert_eq!(config.frames_per_second, 50);
        assert_eq!(config.cycles_per_second, 2_000_000);
        assert_eq!(config.extra_life, ExtraLifeSwitch::OneThousandFiveHundred);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = Configuration::from_json("{ ships: ").unwrap_err();
        assert!(matches!(err, BoardError::Config(_)));
    }

    #[test]
    fn zero_frame_rate_is_rejected() {
        let err = Configuration::from_json(r#"{ "frames_per_second": 0 }"#).unwrap_err();
        assert!(matches!(err, BoardError::InvalidTiming(_)));
    }

    #[test]
    fn negative_clock_is_rejected() {
        let err = Configuration::from_json(r#"{ "cycles_per_second": -2000000 }"#).unwrap_err();
        assert!(matches!(err, BoardError::InvalidTiming(_)));
    }

    #[test]
    fn clock_too_slow_for_a_scanline_is_rejected() {
        let err = Configuration::from_json(r#"{ "cycles_per_second": 6000 }"#).unwrap_err();
        assert!(matches!(err, BoardError::InvalidTiming(_)));
    }

    #[test]
    fn unusable_rates_give_empty_budgets_instead_of_dividing_by_zero() {
        let config = Configuration {
            frames_per_second: 0,
            ..Configuration::default()
        };
        assert_eq!(config.cycles_per_frame(), 0);
        assert_eq!(config.cycles_per_scanline(), 0);
    }

    #[test]
    fn switch_codes() {
        assert_eq!(ShipSwitch::Six.code(), 0b11);
        assert_eq!(ExtraLifeSwitch::OneThousand.code(), 1);
        assert_eq!(DemoCoinInfoSwitch::Off.code(), 1);
    }
}
