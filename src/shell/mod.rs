//! Line-oriented shell over a [`CatalogState`] (impure).
//!
//! Reads one [`Command`] per line, applies it to the catalog and writes the
//! re-rendered page window or a [`Notification`]. Delete confirmation and the
//! edit prompt live here; the catalog itself deletes unconditionally.

pub mod command;
pub mod render;

pub use command::{Command, CommandError};
pub use render::{Notification, NotificationKind, DEFAULT_TITLE_WIDTH};

use crate::model::{CatalogError, ProductId};
use crate::state::CatalogState;
use std::io::{self, BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Commands:
  list                 show loaded products
  search <text>        filter by title or category (empty clears)
  more                 load the next page
  info <id>            show product details
  edit <id> [title]    rename a product (prompts when no title is given)
  delete <id>          delete a product
  help                 show this help
  quit                 exit
";

/// Presentation settings for the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOptions {
    /// Title column width in display columns.
    pub title_width: usize,
    /// Ask before deleting.
    pub confirm_delete: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            title_width: DEFAULT_TITLE_WIDTH,
            confirm_delete: true,
        }
    }
}

/// Whether the loop should continue after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop reading.
    Quit,
}

/// Interactive front end owning the catalog.
#[derive(Debug)]
pub struct Shell {
    state: CatalogState,
    options: ShellOptions,
}

impl Shell {
    /// Wrap a catalog.
    pub fn new(state: CatalogState, options: ShellOptions) -> Self {
        Self { state, options }
    }

    /// The catalog being driven.
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Render the page, then process lines until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from `input` or `out`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        self.render(out)?;

        let mut line = String::new();
        loop {
            write!(out, "> ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            let flow = match Command::parse(&line) {
                Ok(command) => self.execute(command, input, out)?,
                Err(e) => {
                    writeln!(out, "{}", Notification::error(e.to_string()))?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Apply one command.
    ///
    /// `input` is only read when a delete needs confirmation or an edit
    /// was given without a title.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from `input` or `out`.
    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        command: Command,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<Flow> {
        debug!(?command, "Executing command");

        match command {
            Command::List => self.render(out)?,
            Command::Search(query) => {
                self.state.search(&query);
                self.render(out)?;
            }
            Command::More => {
                if self.state.load_more() {
                    self.render(out)?;
                } else {
                    writeln!(out, "{}", Notification::info("All products are shown"))?;
                }
            }
            Command::Info(id) => match self.state.find(id) {
                Some(product) => {
                    write!(out, "{}", render::render_info(product))?;
                    writeln!(
                        out,
                        "{}",
                        Notification::info(format!("Viewing details for: {}", product.title()))
                    )?;
                }
                None => writeln!(out, "{}", not_found(id))?,
            },
            Command::Edit { id, title } => self.edit(id, title, input, out)?,
            Command::Delete(id) => self.delete(id, input, out)?,
            Command::Help => write!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn edit<R: BufRead, W: Write>(
        &mut self,
        id: ProductId,
        mut title: String,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<()> {
        if title.trim().is_empty() {
            let Some(product) = self.state.find(id) else {
                writeln!(out, "{}", not_found(id))?;
                return Ok(());
            };

            write!(out, "New title for \"{}\": ", product.title())?;
            out.flush()?;

            title.clear();
            input.read_line(&mut title)?;
        }

        match self.state.update(id, &title) {
            Ok(()) => {
                self.render(out)?;
                writeln!(
                    out,
                    "{}",
                    Notification::success("Product updated successfully!")
                )?;
            }
            Err(CatalogError::Validation(_)) => {
                writeln!(out, "{}", Notification::error("Please enter a valid title"))?;
            }
            Err(e) => writeln!(out, "{}", Notification::error(e.to_string()))?,
        }
        Ok(())
    }

    fn delete<R: BufRead, W: Write>(
        &mut self,
        id: ProductId,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<()> {
        let Some(product) = self.state.find(id) else {
            writeln!(out, "{}", not_found(id))?;
            return Ok(());
        };

        if self.options.confirm_delete {
            write!(
                out,
                "Are you sure you want to delete \"{}\"? [y/N] ",
                product.title()
            )?;
            out.flush()?;

            let mut answer = String::new();
            input.read_line(&mut answer)?;
            if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
                writeln!(out, "{}", Notification::info("Delete cancelled"))?;
                return Ok(());
            }
        }

        match self.state.delete(id) {
            Ok(_) => {
                self.render(out)?;
                writeln!(
                    out,
                    "{}",
                    Notification::success("Product deleted successfully!")
                )?;
            }
            Err(_) => writeln!(out, "{}", Notification::error("Failed to delete product"))?,
        }
        Ok(())
    }

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(
            out,
            "{}",
            render::render_page(&self.state, self.options.title_width)
        )
    }
}

fn not_found(id: ProductId) -> Notification {
    Notification::error(CatalogError::NotFound { id }.to_string())
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
