use super::SessionConfig;
use super::menu::{CustomerAction, Role, StaffAction};
use super::prompt::Prompter;
use super::render;
use crate::application::counter::ServiceCounter;
use crate::domain::tier::Tier;
use crate::error::{QueueError, Result};
use log::{debug, warn};
use std::io::{BufRead, Write};

/// One interactive run at the counter.
///
/// The session alternates between the customer and staff menus until someone
/// picks "Exit" or the input runs out. The counter is borrowed for the whole
/// run so queue contents and serial numbers survive role switches.
pub struct Session<'a, R, W> {
    counter: &'a mut ServiceCounter,
    prompter: Prompter<R, W>,
    config: SessionConfig,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(counter: &'a mut ServiceCounter, reader: R, writer: W, config: SessionConfig) -> Self {
        Self {
            counter,
            prompter: Prompter::new(reader, writer),
            config,
        }
    }

    /// Runs until exit. Running out of input ends the session normally.
    pub async fn run(&mut self) -> Result<()> {
        match self.drive().await {
            Err(QueueError::InputClosed) => {
                writeln!(self.prompter.writer())?;
                warn!("input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    pub fn into_writer(self) -> W {
        self.prompter.into_writer()
    }

    async fn drive(&mut self) -> Result<()> {
        writeln!(
            self.prompter.writer(),
            "--- Welcome to {} ---",
            self.config.bank_name
        )?;
        let mut role = self.prompter.ask_role()?;

        loop {
            let next = match role {
                Role::Customer => self.customer_mode().await?,
                Role::Staff => self.staff_mode().await?,
            };
            match next {
                Some(next) => {
                    debug!("switching from {role:?} to {next:?}");
                    role = next;
                }
                None => return Ok(()),
            }
        }
    }

    /// Returns the role to switch to, or `None` on exit.
    async fn customer_mode(&mut self) -> Result<Option<Role>> {
        loop {
            match self.prompter.choose::<CustomerAction>()? {
                CustomerAction::JoinQueue => self.join_queue().await?,
                CustomerAction::SwitchToStaff => {
                    writeln!(self.prompter.writer(), "Switching to Bank Staff Mode...")?;
                    return Ok(Some(Role::Staff));
                }
                CustomerAction::Exit => {
                    writeln!(self.prompter.writer(), "Exiting Customer Mode. Goodbye!")?;
                    return Ok(None);
                }
            }
        }
    }

    async fn staff_mode(&mut self) -> Result<Option<Role>> {
        loop {
            match self.prompter.choose::<StaffAction>()? {
                StaffAction::Serve => {
                    let served = self.counter.serve().await?;
                    render::write_served(self.prompter.writer(), served)?;
                }
                StaffAction::Display => {
                    let snapshot = self.counter.snapshot(self.config.display_order).await?;
                    render::write_snapshot(self.prompter.writer(), &snapshot, self.config.format)?;
                }
                StaffAction::SwitchToCustomer => {
                    writeln!(self.prompter.writer(), "Switching to Customer Mode...")?;
                    return Ok(Some(Role::Customer));
                }
                StaffAction::Exit => {
                    writeln!(self.prompter.writer(), "Exiting Bank Staff Mode. Goodbye!")?;
                    return Ok(None);
                }
            }
        }
    }

    async fn join_queue(&mut self) -> Result<()> {
        let tier = if self.prompter.ask_yes_no("Are you a bank customer? (yes/no): ")? {
            let bin = self.prompter.ask_card_bin()?;
            Tier::from_bin(bin)
        } else {
            let aged_or_disabled = self
                .prompter
                .ask_yes_no("Are you aged or disabled? (yes/no): ")?;
            Tier::for_walk_in(aged_or_disabled)
        };
        render::write_tier(self.prompter.writer(), tier)?;

        match self.counter.admit(tier).await {
            Ok(admission) => render::write_admission(self.prompter.writer(), &admission),
            Err(QueueError::SerialsExhausted) => {
                warn!("serial numbers exhausted, admission refused");
                writeln!(
                    self.prompter.writer(),
                    "Sorry! No more serial numbers can be issued today."
                )?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
