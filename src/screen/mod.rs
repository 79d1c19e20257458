use crate::core::{MoveToken, Promotion, Side, Square};
use anyhow::ensure;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A pixel on the device screen. Origin is the top-left corner,
/// y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// Screen layout and timing for one device/app combination.
///
/// Every value here is device-specific, so the whole struct can be loaded
/// from a JSON file and re-tuned without rebuilding. Defaults match a
/// 1080x1920 phone with the board filling the screen width.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub board_x0: i32,
    pub board_y0: i32,
    pub board_x1: i32,
    pub board_y1: i32,
    pub menu: Point,
    pub close_menu: Point,
    pub save_game: Point,
    pub ok_button: Point,
    pub back_button: Point,
    /// Queen, rook, bishop, knight, left to right in the promotion dialog.
    pub promotion_buttons: [Point; 4],
    /// Pause between consecutive taps, for UI animations.
    pub tap_delay_ms: u64,
    /// Pause after submitting a move, before reading the transcript back.
    pub move_settle_ms: u64,
    /// Pause after starting the clipboard service.
    pub startup_delay_ms: u64,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig {
            board_x0: 0,
            board_y0: 412,
            board_x1: 1080,
            board_y1: 1492,
            menu: Point::new(1000, 70),
            close_menu: Point::new(80, 70),
            save_game: Point::new(550, 580),
            ok_button: Point::new(545, 1115),
            back_button: Point::new(215, 1640),
            promotion_buttons: [
                Point::new(220, 950),
                Point::new(440, 950),
                Point::new(660, 950),
                Point::new(880, 950),
            ],
            tap_delay_ms: 200,
            move_settle_ms: 2000,
            startup_delay_ms: 500,
        }
    }
}

impl ScreenConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: ScreenConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|_| Self::default())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.board_x1 > self.board_x0 && self.board_y1 > self.board_y0,
            "board bounds are not ordered: ({}, {}) .. ({}, {})",
            self.board_x0,
            self.board_y0,
            self.board_x1,
            self.board_y1
        );
        // One field size serves both axes, so the region must be square.
        ensure!(
            self.board_x1 - self.board_x0 == self.board_y1 - self.board_y0,
            "board region must be square, got {}x{}",
            self.board_x1 - self.board_x0,
            self.board_y1 - self.board_y0
        );
        Ok(())
    }

    pub fn field_size(&self) -> f64 {
        (self.board_x1 - self.board_x0) as f64 / 8.0
    }

    /// Pixel center of a board square, in screen coordinates.
    ///
    /// Board coordinates grow up and right from a1; the screen's vertical
    /// axis grows downward, so y is inverted against the bottom edge.
    pub fn square_center(&self, square: Square, side: Side) -> Point {
        let fs = self.field_size();
        let (file, rank) = square.oriented(side);
        let x = (file as f64 * fs + fs / 2.0) as i32;
        let y = (rank as f64 * fs + fs / 2.0) as i32;
        Point::new(self.board_x0 + x, self.board_y1 - y)
    }

    pub fn promotion_button(&self, piece: Promotion) -> Point {
        self.promotion_buttons[piece.button_index()]
    }

    /// The tap sequence for one move: source square, destination square,
    /// and the promotion button when the token carries a fifth character.
    pub fn move_taps(&self, mv: &MoveToken, side: Side) -> Vec<Point> {
        let mut taps = vec![
            self.square_center(mv.from, side),
            self.square_center(mv.to, side),
        ];
        if let Some(piece) = mv.promotion {
            taps.push(self.promotion_button(piece));
        }
        taps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        ScreenConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_non_square_board() {
        let config = ScreenConfig {
            board_y1: 1400,
            ..ScreenConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_inverted_bounds() {
        let config = ScreenConfig {
            board_x0: 1080,
            board_x1: 0,
            ..ScreenConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = ScreenConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ScreenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.menu, config.menu);
        assert_eq!(back.promotion_buttons, config.promotion_buttons);
        assert_eq!(back.move_settle_ms, config.move_settle_ms);
    }
}
