use super::menu::{Menu, Role};
use crate::domain::tier::CardBin;
use crate::error::{QueueError, Result};
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

/// Line-oriented question and answer over any reader/writer pair.
///
/// Every `ask_*` method keeps re-prompting until it gets a usable answer. The
/// only way out without one is the input running dry, reported as
/// [`QueueError::InputClosed`].
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn ask_role(&mut self) -> Result<Role> {
        loop {
            let answer =
                self.ask("Are you a Customer or Bank Staff? (Enter 'customer' or 'staff'): ")?;
            match Role::parse(&answer) {
                Some(role) => return Ok(role),
                None => writeln!(
                    self.writer,
                    "Invalid input! Please enter 'customer' or 'staff'."
                )?,
            }
        }
    }

    /// Anything other than `yes` (any case) counts as no.
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(question)?;
        Ok(answer.eq_ignore_ascii_case("yes"))
    }

    /// Prints the menu and returns the selected action.
    pub fn choose<M: Menu>(&mut self) -> Result<M> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", M::TITLE)?;
        for (number, (_, label)) in M::OPTIONS.iter().enumerate() {
            writeln!(self.writer, "{}. {}", number + 1, label)?;
        }

        let max = M::OPTIONS.len() as u32;
        let out_of_range = format!("Invalid choice! Please enter a number between 1 and {max}.");
        let choice = self.ask_number(
            "Enter your choice: ",
            1..=max,
            "Invalid input! Please enter a number.",
            &out_of_range,
        )?;
        Ok(M::OPTIONS[(choice - 1) as usize].0)
    }

    pub fn ask_card_bin(&mut self) -> Result<CardBin> {
        let value = self.ask_number(
            "Please enter the first 6 digits of your card number (BIN): ",
            CardBin::RANGE,
            "Invalid input! Please enter a valid 6-digit BIN number.",
            "Invalid BIN! Please enter a valid 6-digit BIN number.",
        )?;
        CardBin::new(value)
    }

    fn ask_number(
        &mut self,
        question: &str,
        range: RangeInclusive<u32>,
        not_a_number: &str,
        out_of_range: &str,
    ) -> Result<u32> {
        loop {
            let answer = self.ask(question)?;
            match answer.parse::<i64>() {
                Ok(value) => match u32::try_from(value) {
                    Ok(value) if range.contains(&value) => return Ok(value),
                    _ => writeln!(self.writer, "{out_of_range}")?,
                },
                Err(_) => writeln!(self.writer, "{not_a_number}")?,
            }
        }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.writer, "{question}")?;
        self.writer.flush()?;

        // Undecodable bytes become U+FFFD and fail validation like any other typo.
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Err(QueueError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::console::menu::{CustomerAction, StaffAction};

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    fn output(prompter: Prompter<&[u8], Vec<u8>>) -> String {
        String::from_utf8(prompter.into_writer()).unwrap()
    }

    #[test]
    fn test_menu_choice_reprompts_until_valid() {
        let mut p = prompter("abc\n7\n2\n");
        let action: StaffAction = p.choose().unwrap();
        assert_eq!(action, StaffAction::Display);

        let out = output(p);
        assert_eq!(out.matches("Enter your choice: ").count(), 3);
        assert!(out.contains("Invalid input! Please enter a number."));
        assert!(out.contains("Invalid choice! Please enter a number between 1 and 4."));
        assert!(out.contains("--- Bank Staff Mode ---\n1. Serve customer\n2. Display queue"));
    }

    #[test]
    fn test_menu_choice_survives_invalid_utf8() {
        let mut p = Prompter::new(&b"\xff\xfe\n2\n"[..], Vec::new());
        let action: StaffAction = p.choose().unwrap();
        assert_eq!(action, StaffAction::Display);

        let out = output(p);
        assert_eq!(out.matches("Enter your choice: ").count(), 2);
        assert!(out.contains("Invalid input! Please enter a number."));
    }

    #[test]
    fn test_role_survives_invalid_utf8() {
        let mut p = Prompter::new(&b"cust\xc3omer\nstaff\n"[..], Vec::new());
        assert_eq!(p.ask_role().unwrap(), Role::Staff);
        assert!(output(p).contains("Invalid input! Please enter 'customer' or 'staff'."));
    }

    #[test]
    fn test_customer_menu_rejects_four() {
        let mut p = prompter("4\n3\n");
        let action: CustomerAction = p.choose().unwrap();
        assert_eq!(action, CustomerAction::Exit);
        assert!(output(p).contains("Invalid choice! Please enter a number between 1 and 3."));
    }

    #[test]
    fn test_role_reprompts() {
        let mut p = prompter("banker\n  Staff  \n");
        assert_eq!(p.ask_role().unwrap(), Role::Staff);
        assert!(output(p).contains("Invalid input! Please enter 'customer' or 'staff'."));
    }

    #[test]
    fn test_card_bin_validation() {
        let mut p = prompter("12ab\n99999\n1000000\n450000\n");
        let bin = p.ask_card_bin().unwrap();
        assert_eq!(bin.value(), 450_000);

        let out = output(p);
        assert_eq!(
            out.matches("Invalid BIN! Please enter a valid 6-digit BIN number.")
                .count(),
            2
        );
        assert!(out.contains("Invalid input! Please enter a valid 6-digit BIN number."));
    }

    #[test]
    fn test_yes_no() {
        let mut p = prompter("YES\nno\nmaybe\n");
        assert!(p.ask_yes_no("? ").unwrap());
        assert!(!p.ask_yes_no("? ").unwrap());
        assert!(!p.ask_yes_no("? ").unwrap());
    }

    #[test]
    fn test_closed_input() {
        let mut p = prompter("");
        assert!(matches!(p.ask_role(), Err(QueueError::InputClosed)));
    }
}
