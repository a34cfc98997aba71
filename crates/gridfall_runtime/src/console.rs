//! Console output with paced "typewriter" emission.

use std::io::{self, Write as _};
use std::thread;
use std::time::Duration;

use gridfall_foundation::{Output, TypeWriteOptions};
use rand::Rng;

/// Per-character pause while erasing a simulated typo.
const TYPO_PAUSE_MS: u64 = 150;

/// The console implementation of the output collaborator.
///
/// In plain mode (piped output, tests, `--plain`) every pacing request is
/// a no-op and text lands immediately.
pub struct ConsoleOutput {
    plain: bool,
}

impl ConsoleOutput {
    /// Creates a paced console output.
    #[must_use]
    pub const fn new() -> Self {
        Self { plain: false }
    }

    /// Creates an unpaced console output: no delays, no typewriter.
    #[must_use]
    pub const fn plain() -> Self {
        Self { plain: true }
    }

    fn flush() {
        let _ = io::stdout().flush();
    }

    fn sleep(ms: u64) {
        if ms > 0 {
            thread::sleep(Duration::from_millis(ms));
        }
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for ConsoleOutput {
    fn write(&mut self, text: &str) {
        print!("{text}");
        Self::flush();
    }

    fn write_line(&mut self, text: &str) {
        println!("{text}");
        Self::flush();
    }

    fn delay(&mut self, ms: u64) {
        if !self.plain {
            Self::sleep(ms);
        }
    }

    fn type_write(&mut self, text: &str, options: &TypeWriteOptions) {
        if self.plain {
            self.write(text);
            return;
        }

        let mut rng = rand::thread_rng();
        // Typos stay off for fast text and for text that already carries
        // backspaces, where the erase-and-retype dance would garble it.
        let typos = options.typos && options.speed_ms <= 50 && !text.contains('\u{8}');
        let jitter_cap = options.random_ms.min(options.speed_ms);

        for ch in text.chars() {
            if typos && ch.is_ascii_alphabetic() && rng.gen_ratio(1, 30) {
                let wrong = rng.gen_range(b'a'..=b'z') as char;
                print!("{wrong}");
                Self::flush();
                Self::sleep(TYPO_PAUSE_MS);
                print!("\u{8} \u{8}");
                Self::flush();
                Self::sleep(TYPO_PAUSE_MS);
            }
            print!("{ch}");
            Self::flush();
            let jitter = if jitter_cap == 0 {
                0
            } else {
                rng.gen_range(0..=jitter_cap)
            };
            Self::sleep(options.speed_ms + jitter);
        }

        Self::sleep(options.pause_ms);
    }
}
