//! Interactive console menu.

use std::io::{self, BufRead, Write};

use serde::Serialize;

use crate::core::{CheckError, StoreError, VerificationRecord};

const SEPARATOR: &str = "----------------------------";

/// The checks the menu can dispatch to.
pub trait Checks {
    fn eu_vat(&self, country_code: &str, vat_number: &str)
    -> Result<VerificationRecord, CheckError>;
    fn norway(&self, org_nr: &str) -> Result<VerificationRecord, StoreError>;
    fn sweden(&self, org_nr: &str) -> Result<VerificationRecord, StoreError>;
    fn iceland(&self, company_number: &str) -> Result<VerificationRecord, StoreError>;
}

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    EuVat,
    Norway,
    Sweden,
    Iceland,
    Exit,
}

impl Choice {
    /// Parse a trimmed menu entry ("1" to "5").
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::EuVat),
            "2" => Some(Self::Norway),
            "3" => Some(Self::Sweden),
            "4" => Some(Self::Iceland),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Menu loop over any line-based input and output.
#[derive(Debug)]
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the menu and hand back the output, e.g. to inspect it.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user picks Exit or input ends.
    ///
    /// Check failures are printed and the loop carries on; only console I/O
    /// errors end it early.
    pub fn run<C: Checks>(&mut self, checks: &C) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter option number: ")? else {
                break;
            };

            let completed = match Choice::parse(&line) {
                Some(Choice::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                Some(choice) => self.dispatch(choice, checks)?,
                None => {
                    writeln!(self.output, "Invalid input. Try again.")?;
                    true
                }
            };
            if !completed {
                break;
            }

            writeln!(self.output, "\n{SEPARATOR}")?;
        }

        log::debug!("input closed, leaving menu");
        Ok(())
    }

    /// Ask for the inputs of `choice` and run it. `Ok(false)` means input
    /// ended before all answers were read.
    fn dispatch<C: Checks>(&mut self, choice: Choice, checks: &C) -> io::Result<bool> {
        match choice {
            Choice::EuVat => {
                let Some(cc) = self.prompt("Enter EU country code (e.g., DK, FI, DE): ")? else {
                    return Ok(false);
                };
                let Some(vat) = self.prompt("Enter VAT number: ")? else {
                    return Ok(false);
                };
                match checks.eu_vat(&cc.to_uppercase(), &vat) {
                    Ok(record) => self.print_json(&record)?,
                    Err(CheckError::Lookup(failure)) => self.print_json(&failure)?,
                    Err(CheckError::Store(e)) => self.report_store_error(&e)?,
                }
            }
            Choice::Norway => {
                let Some(org) = self.prompt("Enter Norwegian Org.nr: ")? else {
                    return Ok(false);
                };
                self.print_logged(checks.norway(&org))?;
            }
            Choice::Sweden => {
                let Some(org) = self.prompt("Enter Swedish Org.nr: ")? else {
                    return Ok(false);
                };
                self.print_logged(checks.sweden(&org))?;
            }
            Choice::Iceland => {
                let Some(number) = self.prompt("Enter Icelandic company number: ")? else {
                    return Ok(false);
                };
                self.print_logged(checks.iceland(&number))?;
            }
            Choice::Exit => {}
        }
        Ok(true)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nNordic VAT Firewall - Interactive Checker")?;
        writeln!(self.output, "Choose a country:")?;
        writeln!(self.output, "1. EU VIES VAT Check")?;
        writeln!(self.output, "2. Norway (Brreg) Company Check")?;
        writeln!(self.output, "3. Sweden Allabolag Check")?;
        writeln!(self.output, "4. Iceland Manual Check Link")?;
        writeln!(self.output, "5. Exit")
    }

    /// Print `message`, read one line and trim it. `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so a bad
    /// line is just an unknown answer.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    fn print_logged(&mut self, result: Result<VerificationRecord, StoreError>) -> io::Result<()> {
        match result {
            Ok(record) => self.print_json(&record),
            Err(e) => self.report_store_error(&e),
        }
    }

    fn print_json<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        writeln!(self.output, "{text}")
    }

    fn report_store_error(&mut self, e: &StoreError) -> io::Result<()> {
        log::error!("{e}");
        writeln!(self.output, "Could not update the verification log: {e}")
    }
}
