pub mod session;

pub use session::Session;

/// Whether the exported game is still running.
///
/// The save-game export ends with a status token: `*` while the game is in
/// progress, a result token (`1-0`, `0-1`, `1/2-1/2`) once it is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished(String),
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::Ongoing
    }
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }
}

/// Outcome of one transcript read relative to the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Transcript unchanged: the app rejected the submitted move.
    Rejected,
    /// The board moved on; `last_move` is the newest move on it.
    Accepted {
        last_move: String,
        status: GameStatus,
    },
}

/// Last known game export, replaced wholesale on every accepted read.
#[derive(Debug, Default)]
pub struct Transcript {
    text: String,
    status: GameStatus,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare a fresh export against the stored one.
    ///
    /// An export identical to the stored text means the app ignored the
    /// submitted move; the stored text and status stay as they were.
    /// Otherwise the last two whitespace tokens are (latest move, status)
    /// and the stored transcript is replaced. An export too short to carry
    /// both tokens is treated like a rejection and not stored.
    pub fn update(&mut self, new_text: &str) -> MoveOutcome {
        if new_text == self.text {
            return MoveOutcome::Rejected;
        }
        let mut tail = new_text.split_whitespace().rev();
        let (status_token, last_move) = match (tail.next(), tail.next()) {
            (Some(status), Some(mv)) => (status, mv.to_string()),
            _ => return MoveOutcome::Rejected,
        };
        let status = if status_token.contains('*') {
            GameStatus::Ongoing
        } else {
            GameStatus::Finished(status_token.to_string())
        };
        self.text = new_text.to_string();
        self.status = status.clone();
        MoveOutcome::Accepted { last_move, status }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }
}
