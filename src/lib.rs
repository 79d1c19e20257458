//! Command line tool to play blind chess against the Play Magnus Android app:
//! <https://play.google.com/store/apps/details?id=pl.mw.playmagnus>
//!
//! Moves are tapped onto the device screen over `adb`; the game transcript is
//! read back through the Clipper clipboard app
//! (<https://github.com/majido/clipper>) after driving the in-app save dialog.

pub mod core;
pub mod device;
pub mod game;
pub mod screen;
