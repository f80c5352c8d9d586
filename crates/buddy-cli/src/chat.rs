//! Interactive Chat Loop
//!
//! Line-oriented read-eval-print loop. Generic over the reader and writer so
//! tests can drive it with in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use crypto_buddy::{classify, wrap, Intent, ReplyPicker, Responder, BOT_NAME};

/// Column width replies are wrapped to
pub const WRAP_WIDTH: usize = 80;

const RULE_WIDTH: usize = 60;

pub struct ChatLoop<P: ReplyPicker> {
    responder: Responder<P>,
    wrap_width: usize,
}

impl<P: ReplyPicker> ChatLoop<P> {
    pub const fn new(responder: Responder<P>, wrap_width: usize) -> Self {
        Self {
            responder,
            wrap_width,
        }
    }

    /// Run until a goodbye or end of input. Returns the number of exchanges.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<usize> {
        write_banner(&mut output)?;

        let mut exchanges = 0;
        let mut buf = Vec::new();

        loop {
            write!(output, "\nYou: ")?;
            output.flush().context("failed to flush prompt")?;

            // Bytes, not `read_line`: invalid UTF-8 is still a query
            buf.clear();
            let read = input.read_until(b'\n', &mut buf).context("failed to read input")?;
            if read == 0 {
                tracing::info!(exchanges, "End of input");
                writeln!(output)?;
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            let message = line.trim();
            if message.is_empty() {
                writeln!(output, "{BOT_NAME}: Say something (or 'quit' to exit).")?;
                continue;
            }

            let reply = self.responder.respond(message);
            writeln!(output, "\n{BOT_NAME}: {}", wrap::fill(&reply, self.wrap_width))?;
            exchanges += 1;

            if classify(message) == Intent::Goodbye {
                tracing::info!(exchanges, "Goodbye received");
                break;
            }
        }

        output.flush()?;
        Ok(exchanges)
    }
}

fn write_banner<W: Write>(output: &mut W) -> Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(output, "{rule}")?;
    writeln!(output, "Welcome to {BOT_NAME} — Your First AI-Powered Financial Sidekick!")?;
    writeln!(
        output,
        "Type questions like: 'Which crypto is trending up?' or 'Which is the most sustainable coin?'"
    )?;
    writeln!(output, "Type 'exit' or 'quit' to end.")?;
    writeln!(output, "{rule}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crypto_buddy::{Dataset, FirstPicker};
    use std::io::Cursor;

    fn run(script: &str) -> (usize, String) {
        let mut chat = ChatLoop::new(Responder::new(Dataset::builtin(), FirstPicker), WRAP_WIDTH);
        let mut out = Vec::new();
        let exchanges = chat.run(Cursor::new(script), &mut out).unwrap();
        (exchanges, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_banner_printed_once() {
        let (_, out) = run("hello\nhi\nbye\n");
        assert_eq!(out.matches("Welcome to CryptoBuddy").count(), 1);
        assert!(out.starts_with(&"=".repeat(60)));
    }

    #[test]
    fn test_goodbye_stops_loop() {
        let (exchanges, out) = run("Which crypto is trending up?\nquit\nhello\n");
        assert_eq!(exchanges, 2);
        assert!(out.contains("CryptoBuddy: Coins trending up right now: Bitcoin, Cardano."));
        assert!(out.contains("Goodbye! Trade safe"));
        assert!(!out.contains("Hey! I'm CryptoBuddy"));
    }

    #[test]
    fn test_blank_input_prompts_and_is_not_counted() {
        let (exchanges, out) = run("   \n\nbye\n");
        assert_eq!(exchanges, 1);
        assert_eq!(out.matches("CryptoBuddy: Say something (or 'quit' to exit).").count(), 2);
    }

    #[test]
    fn test_end_of_input_is_graceful() {
        let (exchanges, out) = run("asdkfjasldkf\n");
        assert_eq!(exchanges, 1);
        assert!(out.contains("I didn't quite catch that."));
        assert!(out.trim_end().ends_with("You:"));
    }

    #[test]
    fn test_invalid_utf8_is_still_answered() {
        let mut chat = ChatLoop::new(Responder::new(Dataset::builtin(), FirstPicker), WRAP_WIDTH);
        let mut out = Vec::new();
        let exchanges = chat
            .run(Cursor::new(b"caf\xe9 trending?\nbye\n"), &mut out)
            .unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(exchanges, 2);
        assert!(out.contains("CryptoBuddy: Coins trending up right now: Bitcoin, Cardano."));
        assert!(out.contains("Goodbye! Trade safe"));
    }

    #[test]
    fn test_compare_keeps_two_lines() {
        let (_, out) = run("Compare Bitcoin and Cardano\n");
        assert!(out.contains(
            "CryptoBuddy: Bitcoin (BTC): trend=rising, market_cap=high, sustainability=3.0/10\n\
             Cardano (ADA): trend=rising, market_cap=medium, sustainability=8.0/10\n"
        ));
    }

    #[test]
    fn test_replies_are_wrapped() {
        let mut chat = ChatLoop::new(Responder::new(Dataset::builtin(), FirstPicker), 30);
        let mut out = Vec::new();
        chat.run(Cursor::new("asdkfjasldkf\n"), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        let reply = out.split("CryptoBuddy: ").nth(1).unwrap();
        let reply = reply.split("\n\nYou:").next().unwrap();
        for line in reply.lines() {
            assert!(line.chars().count() <= 30, "{line:?}");
        }
    }
}
