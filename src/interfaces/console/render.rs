use crate::domain::entry::Entry;
use crate::domain::queue::{Admission, Snapshot};
use crate::domain::tier::Tier;
use crate::error::Result;
use crate::interfaces::csv::queue_writer::QueueWriter;
use clap::ValueEnum;
use std::io::Write;

/// How the staff "display queue" option prints the waiting customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DisplayFormat {
    #[default]
    Text,
    Csv,
    Json,
}

pub fn write_tier<W: Write>(out: &mut W, tier: Tier) -> Result<()> {
    let message = match tier {
        Tier::Platinum => "You have a Platinum Card!",
        Tier::Golden => "You have a Golden Card!",
        Tier::Silver => "You have a Silver Card!",
        Tier::Regular => "You are a Regular customer.",
        Tier::Prioritized => "You will be prioritized.",
        Tier::Standard => return Ok(()),
    };
    writeln!(out, "{message}")?;
    Ok(())
}

pub fn write_admission<W: Write>(out: &mut W, admission: &Admission) -> Result<()> {
    writeln!(
        out,
        "Customer with serial number {} added to the queue with priority {}.",
        admission.entry.serial_number, admission.entry.priority
    )?;
    Ok(())
}

pub fn write_served<W: Write>(out: &mut W, served: Option<Entry>) -> Result<()> {
    match served {
        Some(entry) => writeln!(
            out,
            "Customer with serial number {} has been served.",
            entry.serial_number
        )?,
        None => writeln!(out, "No customer to serve! The queue is empty.")?,
    }
    Ok(())
}

/// An empty queue prints the same notice in every format.
pub fn write_snapshot<W: Write>(
    out: &mut W,
    snapshot: &Snapshot,
    format: DisplayFormat,
) -> Result<()> {
    let entries = match snapshot {
        Snapshot::Empty => {
            writeln!(out, "Queue is empty!")?;
            return Ok(());
        }
        Snapshot::Waiting(entries) => entries,
    };

    match format {
        DisplayFormat::Text => {
            writeln!(out, "Current Queue (Priority):")?;
            for entry in entries {
                writeln!(
                    out,
                    "Serial Number: {} (Priority: {})",
                    entry.serial_number, entry.priority
                )?;
            }
        }
        DisplayFormat::Csv => QueueWriter::new(&mut *out).write_entries(entries)?,
        DisplayFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, entries)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
