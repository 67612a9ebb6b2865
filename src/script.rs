//! The generator core: the instruction model, the delay model, and [`translate`].

use anyhow::{Result, bail};
use rand::Rng;

/// Opening lines of every generated script: bring iTerm to the front and open
/// the System Events block the keystroke instructions live in.
pub const PROLOGUE: &str =
    "on run {input, parameters}\n\n\ttell application \"iTerm\" to activate\n\n\ttell application \"System Events\"\n";

/// Closing lines: end the System Events block and hand the run input back
/// unchanged, as the automation host expects.
pub const EPILOGUE: &str = "\tend tell\n\n\treturn input\nend run\n";

/// Inclusive-min, exclusive-max bounds for the per-keystroke delay draw.
///
/// The drawn integer becomes the fractional part of a `delay 0.<n>` line, so a
/// range of `0..3` produces pauses of 0.0, 0.1, or 0.2 seconds between
/// keystrokes.
#[derive(Debug, Clone, Copy)]
pub struct DelayRange {
    min: u32,
    max: u32,
}

impl DelayRange {
    /// Create a delay range. `max` is exclusive and must be greater than `min`.
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if max <= min {
            bail!("delay range is empty: max ({max}) must be greater than min ({min})");
        }
        Ok(Self { min, max })
    }

    /// Draw one delay value uniformly from `[min, max)`.
    fn sample(&self, rng: &mut impl Rng) -> u32 {
        rng.gen_range(self.min..self.max)
    }
}

/// One statement of the generated script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Simulate pressing the key for a literal character.
    Keystroke(char),
    /// Simulate pressing the return key (`key code 36`).
    PressReturn,
    /// Pause for `0.<n>` seconds before the next instruction.
    Delay(u32),
}

impl Instruction {
    /// The instruction that types `ch`: the return key for a line feed, a
    /// literal keystroke for everything else.
    pub fn for_char(ch: char) -> Self {
        if ch == '\n' {
            Instruction::PressReturn
        } else {
            Instruction::Keystroke(ch)
        }
    }

    /// Append this instruction to `script` as one line.
    ///
    /// A double-quote keystroke is escaped with a backslash so the generated
    /// AppleScript string stays closed; no other character is escaped.
    fn render_into(&self, script: &mut String) {
        match self {
            Instruction::Keystroke('"') => script.push_str("\t\tkeystroke \"\\\"\"\n"),
            Instruction::Keystroke(ch) => {
                script.push_str("\t\tkeystroke \"");
                script.push(*ch);
                script.push_str("\"\n");
            }
            Instruction::PressReturn => script.push_str("\t\tkey code 36\n"),
            Instruction::Delay(n) => {
                script.push_str("\t\tdelay 0.");
                script.push_str(&n.to_string());
                script.push('\n');
            }
        }
    }
}

/// Translate `document` into a complete typing script.
///
/// Emits one instruction per character of the input, in order, each followed
/// by a delay instruction with a fresh random draw from `delays`, the whole
/// sequence wrapped in [`PROLOGUE`] and [`EPILOGUE`]. An empty document
/// produces just the prologue and epilogue.
///
/// # Example
///
/// ```
/// use keyscript::{DelayRange, translate};
///
/// let delays = DelayRange::new(1, 2).unwrap();
/// let script = translate("hi\n", &delays);
/// assert!(script.contains("keystroke \"h\""));
/// assert!(script.contains("key code 36"));
/// ```
pub fn translate(document: &str, delays: &DelayRange) -> String {
    let mut rng = rand::thread_rng();
    let mut script = String::from(PROLOGUE);
    for ch in document.chars() {
        Instruction::for_char(ch).render_into(&mut script);
        Instruction::Delay(delays.sample(&mut rng)).render_into(&mut script);
    }
    script.push_str(EPILOGUE);
    script
}
