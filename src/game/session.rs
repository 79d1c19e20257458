use crate::core::{MoveToken, Side};
use crate::device::{broadcast_payload, Device};
use crate::game::{GameStatus, MoveOutcome, Transcript};
use crate::screen::ScreenConfig;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;
use tracing::info;

/// One sitting against the app: a fixed side, a screen layout and a device.
///
/// Everything is synchronous and blocking; the fixed delays exist to let
/// the remote UI finish its animations between taps. If the device is
/// slower than the delays, a move can be misreported as illegal.
pub struct Session<D: Device> {
    config: ScreenConfig,
    device: D,
    side: Side,
    transcript: Transcript,
}

impl<D: Device> Session<D> {
    pub fn new(config: ScreenConfig, device: D, side: Side) -> Self {
        Session {
            config,
            device,
            side,
            transcript: Transcript::new(),
        }
    }

    fn pause(&self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }

    /// Tap out a move on the board, square by square.
    pub fn submit_move(&self, mv: &MoveToken) -> Result<()> {
        info!(%mv, side = ?self.side, "submitting move");
        for point in self.config.move_taps(mv, self.side) {
            self.device.tap(point)?;
            self.pause(self.config.tap_delay_ms);
        }
        Ok(())
    }

    /// Drive the in-app save dialog and pull the export off the clipboard.
    pub fn fetch_transcript(&self) -> Result<String> {
        let steps = [
            self.config.menu,
            self.config.save_game,
            self.config.ok_button,
            self.config.close_menu,
        ];
        for point in steps {
            self.device.tap(point)?;
            self.pause(self.config.tap_delay_ms);
        }
        let raw = self.device.read_clipboard()?;
        Ok(broadcast_payload(&raw))
    }

    /// Tap the in-app undo button (the operator's `back` command).
    pub fn undo(&self) -> Result<()> {
        self.device.tap(self.config.back_button)
    }

    /// Submit one move, wait for the UI to settle, then read the new
    /// transcript back and diff it against the previous one.
    pub fn play_turn(&mut self, mv: &MoveToken) -> Result<MoveOutcome> {
        self.submit_move(mv)?;
        self.pause(self.config.move_settle_ms);
        let export = self.fetch_transcript()?;
        Ok(self.transcript.update(&export))
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The interactive loop: read move tokens from stdin until the game
    /// ends or the operator quits.
    pub fn run(&mut self) -> Result<()> {
        self.device.start_clipboard_service()?;
        self.pause(self.config.startup_delay_ms);

        println!(
            "Playing as {:?}. Enter moves like e2e4, or e7e8q to promote.",
            self.side
        );
        println!("Commands: back (undo last move), quit.");

        let stdin = io::stdin();
        loop {
            print!("Your move: ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // EOF, operator hung up
            }
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            match input {
                "quit" | "q" => break,
                "back" => {
                    self.undo()?;
                    continue;
                }
                _ => {}
            }

            let mv: MoveToken = match input.parse() {
                Ok(mv) => mv,
                Err(e) => {
                    println!("{:#}", e);
                    continue;
                }
            };

            match self.play_turn(&mv)? {
                MoveOutcome::Rejected => println!("Illegal move."),
                MoveOutcome::Accepted { last_move, status } => match status {
                    GameStatus::Ongoing => println!("Last move: {}", last_move),
                    GameStatus::Finished(result) => {
                        println!("Last move: {}", last_move);
                        println!("Game over: {}", result);
                        break;
                    }
                },
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Point;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Records every tap and replays canned clipboard output.
    struct ScriptedDevice {
        taps: RefCell<Vec<Point>>,
        exports: RefCell<VecDeque<String>>,
    }

    impl ScriptedDevice {
        fn new(exports: &[&str]) -> Self {
            ScriptedDevice {
                taps: RefCell::new(Vec::new()),
                exports: RefCell::new(exports.iter().map(|s| s.to_string()).collect()),
            }
        }
    }

    impl Device for ScriptedDevice {
        fn tap(&self, point: Point) -> Result<()> {
            self.taps.borrow_mut().push(point);
            Ok(())
        }

        fn start_clipboard_service(&self) -> Result<()> {
            Ok(())
        }

        fn read_clipboard(&self) -> Result<String> {
            Ok(self
                .exports
                .borrow_mut()
                .pop_front()
                .unwrap_or_default())
        }
    }

    fn quick_config() -> ScreenConfig {
        ScreenConfig {
            tap_delay_ms: 0,
            move_settle_ms: 0,
            startup_delay_ms: 0,
            ..ScreenConfig::default()
        }
    }

    #[test]
    fn play_turn_taps_move_then_save_sequence() {
        let config = quick_config();
        let device = ScriptedDevice::new(&["Broadcast completed: result=-1, data=\"1. e4 e5 *\""]);
        let mut session = Session::new(config.clone(), device, Side::White);

        let mv: MoveToken = "e2e4".parse().unwrap();
        let outcome = session.play_turn(&mv).unwrap();

        assert_eq!(
            outcome,
            MoveOutcome::Accepted {
                last_move: "e5".to_string(),
                status: GameStatus::Ongoing,
            }
        );
        let taps = session.device.taps.borrow();
        let expected = vec![
            config.square_center(mv.from, Side::White),
            config.square_center(mv.to, Side::White),
            config.menu,
            config.save_game,
            config.ok_button,
            config.close_menu,
        ];
        assert_eq!(*taps, expected);
        assert_eq!(session.transcript.text(), "1. e4 e5 *");
    }

    #[test]
    fn promotion_adds_a_third_board_tap() {
        let config = quick_config();
        let device = ScriptedDevice::new(&["data=\"1. e4 e5 *\""]);
        let mut session = Session::new(config.clone(), device, Side::White);

        let mv: MoveToken = "e7e8n".parse().unwrap();
        session.play_turn(&mv).unwrap();

        let taps = session.device.taps.borrow();
        assert_eq!(taps[2], config.promotion_buttons[3]);
        assert_eq!(taps.len(), 3 + 4); // move taps + save sequence
    }

    #[test]
    fn unchanged_export_is_reported_as_rejected() {
        let export = "Broadcast completed: result=-1, data=\"1. e4 e5 *\"";
        let device = ScriptedDevice::new(&[export, export]);
        let mut session = Session::new(quick_config(), device, Side::White);

        let mv: MoveToken = "e2e4".parse().unwrap();
        assert!(matches!(
            session.play_turn(&mv).unwrap(),
            MoveOutcome::Accepted { .. }
        ));
        assert_eq!(session.play_turn(&mv).unwrap(), MoveOutcome::Rejected);
        assert_eq!(session.transcript.text(), "1. e4 e5 *");
    }
}
