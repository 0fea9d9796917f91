//! Terminal front end: prompts on stdout, reads whitespace-separated input.
//!
//! Input is consumed token-wise rather than line-wise. A name is the next
//! whitespace-delimited word; a run/fight answer is the next non-whitespace
//! character, so `"xf"` on one line is an invalid `x` followed by `f`.

use crate::character::Player;
use crate::combat::{Choice, CombatEvent};
use crate::core::game_loop::{GameSummary, PlayerController};
use crate::monster::Monster;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub const NAME_PROMPT: &str = "Enter your name: ";
pub const CHOICE_PROMPT: &str = "(R)un or (F)ight: ";

/// Stdin/stdout controller for a human player.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<char>,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes `text` without a newline and flushes so it shows before blocking.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()
    }

    pub fn say(&mut self, line: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }

    /// Pulls another line into the buffer. False at end of input.
    fn fill(&mut self) -> io::Result<bool> {
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(false);
        }
        // Undecodable bytes become U+FFFD, which no prompt accepts
        self.pending.extend(String::from_utf8_lossy(&line).chars());
        Ok(true)
    }

    fn skip_whitespace(&mut self) -> io::Result<()> {
        loop {
            while let Some(&c) = self.pending.front() {
                if !c.is_whitespace() {
                    return Ok(());
                }
                self.pending.pop_front();
            }
            if !self.fill()? {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed while waiting for the player",
                ));
            }
        }
    }

    /// Next non-whitespace character.
    pub fn read_char(&mut self) -> io::Result<char> {
        self.skip_whitespace()?;
        self.pending.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input closed")
        })
    }

    /// Next whitespace-delimited word.
    pub fn read_word(&mut self) -> io::Result<String> {
        self.skip_whitespace()?;
        let mut word = String::new();
        while let Some(&c) = self.pending.front() {
            if c.is_whitespace() {
                break;
            }
            word.push(c);
            self.pending.pop_front();
        }
        Ok(word)
    }

    /// Prompts for the player's name and greets them.
    pub fn ask_name(&mut self) -> io::Result<String> {
        self.prompt(NAME_PROMPT)?;
        let name = self.read_word()?;
        self.say(format_args!("\nWelcome, {}", name))?;
        Ok(name)
    }

    /// Re-prompts until the answer is r/R/f/F.
    pub fn ask_choice(&mut self) -> io::Result<Choice> {
        loop {
            self.prompt(CHOICE_PROMPT)?;
            if let Some(choice) = Choice::from_char(self.read_char()?) {
                return Ok(choice);
            }
        }
    }

    /// Prints the final summary. Both outcomes end with a newline.
    pub fn report(&mut self, summary: &GameSummary) -> io::Result<()> {
        self.say(summary)?;
        self.writer.flush()
    }
}

impl<R: BufRead, W: Write> PlayerController for Console<R, W> {
    fn choose(&mut self, _player: &Player, _monster: &Monster) -> io::Result<Choice> {
        self.ask_choice()
    }

    fn narrate(&mut self, event: &CombatEvent) -> io::Result<()> {
        self.say(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[test]
    fn test_ask_name_reads_first_word() {
        let mut c = console("  Ayla the Bold\n");
        assert_eq!(c.ask_name().unwrap(), "Ayla");
        assert_eq!(output(c), "Enter your name: \nWelcome, Ayla\n");
    }

    #[test]
    fn test_read_word_then_char_share_a_line() {
        let mut c = console("Ayla f\n");
        assert_eq!(c.read_word().unwrap(), "Ayla");
        assert_eq!(c.read_char().unwrap(), 'f');
    }

    #[test]
    fn test_read_char_skips_blank_lines() {
        let mut c = console("\n\n   \n R\n");
        assert_eq!(c.read_char().unwrap(), 'R');
    }

    #[test]
    fn test_ask_choice_reprompts_on_invalid_input() {
        let mut c = console("X\nq\nF\n");
        assert_eq!(c.ask_choice().unwrap(), Choice::Fight);
        assert_eq!(output(c), CHOICE_PROMPT.repeat(3));
    }

    #[test]
    fn test_ask_choice_reads_one_char_at_a_time() {
        let mut c = console("xr\n");
        assert_eq!(c.ask_choice().unwrap(), Choice::Run);
        assert_eq!(output(c), CHOICE_PROMPT.repeat(2));
    }

    #[test]
    fn test_invalid_utf8_is_reprompted() {
        let mut c = Console::new(Cursor::new(vec![0xFF, b'\n', b'f', b'\n']), Vec::new());
        assert_eq!(c.ask_choice().unwrap(), Choice::Fight);
        assert_eq!(output(c), CHOICE_PROMPT.repeat(2));
    }

    #[test]
    fn test_invalid_utf8_inside_a_name_is_replaced() {
        let mut c = Console::new(Cursor::new(vec![b'A', 0xFE, b'l', b'\n']), Vec::new());
        assert_eq!(c.read_word().unwrap(), "A\u{FFFD}l");
    }

    #[test]
    fn test_eof_is_unexpected_eof() {
        let mut c = console("x\n");
        let err = c.ask_choice().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_narrate_writes_a_line() {
        let mut c = console("");
        c.narrate(&CombatEvent::Fled).unwrap();
        assert_eq!(output(c), "You successfully fled.\n");
    }

    #[test]
    fn test_report_ends_defeat_with_newline() {
        let mut c = console("");
        c.report(&GameSummary::Defeat { level: 4, gold: 60 }).unwrap();
        assert_eq!(
            output(c),
            "You died at level 4 and with 60 gold.\nToo bad you can't take it with you!\n"
        );
    }

    #[test]
    fn test_report_prints_summary() {
        let mut c = console("");
        c.report(&GameSummary::Victory { gold: 5 }).unwrap();
        assert_eq!(
            output(c),
            "You are victorious!\nYou now possess 5 gold. Your wealth grows along with your legend!\n"
        );
    }
}
