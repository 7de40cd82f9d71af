//! Interactive prompt driving one split session.

use std::io::{BufRead, Write};

use split_engine::{EngineState, SlotAction, SplitEngine};

use crate::{
    commands::{Command, HELP, parse_command},
    error::Result,
};

pub struct Prompt<W> {
    engine: SplitEngine,
    out: W,
    summary_json: bool,
}

impl<W: Write> Prompt<W> {
    pub fn new(engine: SplitEngine, out: W, summary_json: bool) -> Self {
        Self {
            engine,
            out,
            summary_json,
        }
    }

    /// Reads commands until `quit` or end of input. Returns the engine so the
    /// caller can inspect the final state.
    pub fn run(mut self, input: impl BufRead) -> Result<SplitEngine> {
        self.show_item()?;
        for line in input.lines() {
            let line = line?;
            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(err) => {
                    writeln!(self.out, "{err}")?;
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }
            if let Err(err) = self.dispatch(command) {
                tracing::debug!("command failed: {err}");
                writeln!(self.out, "error: {err}")?;
            }
        }
        Ok(self.engine)
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Item => self.show_item()?,
            Command::Press(index) => match self.engine.press_slot(index)? {
                SlotAction::Toggled { index, selected } => {
                    let name = &self.engine.roster().participant(index)?.display_name;
                    let mark = if selected { "selected" } else { "unselected" };
                    writeln!(self.out, "{name} ({index}) {mark}")?;
                }
                SlotAction::RenameRequested(index) => {
                    writeln!(self.out, "type `rename {index} <name>`")?;
                }
                SlotAction::Ignored => writeln!(self.out, "slot {index} cannot be renamed")?,
            },
            Command::SelectAll => {
                self.engine.select_all()?;
                writeln!(self.out, "everyone selected")?;
            }
            Command::Clear => self.engine.clear_selection(),
            Command::Confirm => match self.engine.confirm_selection()? {
                EngineState::Active(_) => self.show_item()?,
                EngineState::Complete => {
                    writeln!(self.out, "split complete, check the summary")?;
                    self.show_summary()?;
                }
            },
            Command::Undo => {
                if !self.engine.can_rollback() {
                    writeln!(self.out, "nothing to undo")?;
                } else {
                    self.engine.rollback();
                    self.show_item()?;
                }
            }
            Command::Edit => {
                let mode = if self.engine.toggle_edit_mode() {
                    "edit"
                } else {
                    "select"
                };
                writeln!(self.out, "{mode} mode")?;
            }
            Command::Rename { index, name } => {
                self.engine.rename_participant(index, &name)?;
                let stored = &self.engine.roster().participant(index)?.display_name;
                writeln!(self.out, "slot {index} is now {stored}")?;
            }
            Command::Summary => self.show_summary()?,
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn show_item(&mut self) -> Result<()> {
        let item = self.engine.current_item()?;
        let (done, total) = self.engine.progress();
        writeln!(
            self.out,
            "[{done}/{total}] {} / {}: {} x {} = {}",
            item.place_name, item.product_name, item.unit_price, item.quantity, item.line_total
        )?;
        Ok(())
    }

    fn show_summary(&mut self) -> Result<()> {
        let summary = self.engine.summary()?;
        if self.summary_json {
            serde_json::to_writer_pretty(&mut self.out, &summary)?;
            writeln!(self.out)?;
            return Ok(());
        }
        for person in &summary {
            writeln!(self.out, "{}: {}", person.name, person.total)?;
            for line in &person.lines {
                writeln!(
                    self.out,
                    "  {} / {}: {}",
                    line.place_name, line.product_name, line.share
                )?;
            }
        }
        Ok(())
    }
}
