//! # Keyscript
//!
//! Converts plain-text files into AppleScript that "types" the original text
//! back, one simulated keystroke at a time, with randomized human-like delays.
//!
//! Point the tool at a file (or a directory of files) and it emits one `.scpt`
//! source file per input. Running a generated script under the macOS
//! automation host brings iTerm to the front and replays the text into it
//! character by character, so prepared input is indistinguishable from manual
//! entry. Useful for demos, screencasts, and automating interactive shells.
//!
//! ## Quick start
//!
//! ```
//! use keyscript::{DelayRange, translate};
//!
//! fn main() -> anyhow::Result<()> {
//!     let delays = DelayRange::new(1, 2)?;
//!     let script = translate("ls\n", &delays);
//!     assert!(script.contains("keystroke \"l\""));
//!     assert!(script.contains("key code 36"));
//!     assert!(script.contains("delay 0.1"));
//!     Ok(())
//! }
//! ```
//!
//! ## Emission rules
//!
//! | Input character | Emitted instruction |
//! |-----------------|---------------------|
//! | line feed | `key code 36` (the return key) |
//! | `"` | `keystroke "\""` (escaped) |
//! | anything else | `keystroke "<char>"` verbatim |
//!
//! Every instruction is followed by a `delay 0.<n>` line, with `<n>` drawn
//! fresh per character from the configured [`DelayRange`].
//!
//! ## Output naming
//!
//! Output files are named from the input's base name with every `.` replaced
//! by `-`, plus the `.scpt` extension: `notes.v1.txt` becomes
//! `notes-v1-txt.scpt`, written into the current working directory. Distinct
//! inputs sharing a base name overwrite each other's output; there is no
//! collision handling.

pub mod convert;
pub mod script;

pub use convert::{list_dir, output_name, process_path};
pub use script::{DelayRange, EPILOGUE, Instruction, PROLOGUE, translate};
