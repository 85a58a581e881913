use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::app::config::SessionConfig;
use crate::app::menu::MenuOption;
use crate::app::Session;
use crate::catalog::{Catalog, Item, Outcome};
use crate::ui;

/// Whether the loop should keep going after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Run a session on the process's stdin/stdout until the user exits.
pub fn run_app(config: &SessionConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(
        Catalog::new(config.catalog_name.clone()),
        stdin.lock(),
        stdout.lock(),
    );
    session.run()
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(catalog = %self.catalog.name(), "session started");
        while self.step()? == Flow::Continue {}
        tracing::info!(items = self.catalog.len(), "session ended");
        Ok(())
    }

    /// Show the menu, read one selection and carry it out.
    pub fn step(&mut self) -> Result<Flow> {
        ui::render_menu(&mut self.output, self.catalog.name()).context("write menu")?;
        let Some(line) = self.prompt(ui::PROMPT_SELECTION)? else {
            return Ok(Flow::Stop);
        };
        match MenuOption::parse(&line) {
            Some(option) => {
                tracing::debug!(?option, "dispatching");
                self.dispatch(option)
            }
            None => {
                tracing::debug!(input = %line, "invalid menu selection");
                writeln!(self.output, "{}", ui::INVALID_OPTION).context("write output")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch(&mut self, option: MenuOption) -> Result<Flow> {
        let outcome = match option {
            MenuOption::Exit => return Ok(Flow::Stop),
            MenuOption::ListAvailable => {
                ui::render_available(&mut self.output, self.catalog.available())
                    .context("write listing")?;
                return Ok(Flow::Continue);
            }
            MenuOption::Add => {
                let labels = [ui::PROMPT_TITLE, ui::PROMPT_AUTHOR, ui::PROMPT_ID];
                match self.fields(labels)? {
                    Some([title, author, id]) => self.catalog.add(Item::new(title, author, id)),
                    None => return Ok(Flow::Stop),
                }
            }
            MenuOption::Modify => {
                let labels = [ui::PROMPT_MODIFY_ID, ui::PROMPT_NEW_TITLE, ui::PROMPT_NEW_AUTHOR];
                match self.fields(labels)? {
                    Some([id, title, author]) => {
                        self.catalog.modify(&id, non_blank(&title), non_blank(&author))
                    }
                    None => return Ok(Flow::Stop),
                }
            }
            MenuOption::Delete => match self.fields([ui::PROMPT_DELETE_ID])? {
                Some([id]) => self.catalog.delete(&id),
                None => return Ok(Flow::Stop),
            },
            MenuOption::Lend => match self.fields([ui::PROMPT_LEND_ID])? {
                Some([id]) => self.catalog.lend(&id),
                None => return Ok(Flow::Stop),
            },
            MenuOption::Return => match self.fields([ui::PROMPT_RETURN_ID])? {
                Some([id]) => self.catalog.return_item(&id),
                None => return Ok(Flow::Stop),
            },
        };
        self.report(&outcome)?;
        Ok(Flow::Continue)
    }

    fn report(&mut self, outcome: &Outcome) -> Result<()> {
        tracing::debug!(success = outcome.is_success(), %outcome, "operation finished");
        ui::render_outcome(&mut self.output, outcome).context("write output")
    }

    /// Prompt for each label in turn. `None` if input ends before all are answered.
    fn fields<const N: usize>(&mut self, labels: [&str; N]) -> Result<Option<[String; N]>> {
        let mut values = Vec::with_capacity(N);
        for label in labels {
            match self.prompt(label)? {
                Some(value) => values.push(value),
                None => return Ok(None),
            }
        }
        Ok(values.try_into().ok())
    }

    /// Print `label` and read one line. `None` once the input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        ui::render_prompt(&mut self.output, label).context("write prompt")?;
        let mut line = String::new();
        let n = self.input.read_line(&mut line).context("read input")?;
        if n == 0 {
            tracing::info!("end of input, closing session");
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

fn non_blank(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}
