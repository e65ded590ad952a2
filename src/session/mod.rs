//! Interactive selection → generation → command-menu loop.

mod selection;
mod spinner;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::advisor::SuggestionGenerator;
use crate::catalog::CourseSearch;
use crate::topics::TopicCatalog;

use selection::{parse_selection, parse_selection_quietly};

pub use spinner::Progress;

const SELECTION_PROMPT: &str = "Enter the numbers of your interests (comma-separated): ";
const MENU_PROMPT: &str = "Enter 'r' to regenerate, 's' to select new interests, or 'q' to quit: ";
const NO_SELECTION: &str = "No valid interests selected.";
const NO_COURSES: &str = "No courses found for this interest.";

/// Opens the stream the progress spinner draws on.
type ProgressOutput<'a> = Box<dyn Fn() -> Box<dyn Write + Send> + 'a>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    SelectingInterests,
    Generating,
    MenuIdle,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuCommand {
    Regenerate,
    Reselect,
    Quit,
    Unknown,
}

impl MenuCommand {
    fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "r" => MenuCommand::Regenerate,
            "s" => MenuCommand::Reselect,
            "q" => MenuCommand::Quit,
            _ => MenuCommand::Unknown,
        }
    }
}

pub struct Session<'a, R, W> {
    topics: &'a TopicCatalog,
    courses: &'a dyn CourseSearch,
    advisor: &'a dyn SuggestionGenerator,
    input: R,
    output: W,
    progress: Progress,
    progress_output: ProgressOutput<'a>,
    selection: Vec<String>,
    state: SessionState,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        topics: &'a TopicCatalog,
        courses: &'a dyn CourseSearch,
        advisor: &'a dyn SuggestionGenerator,
        input: R,
        output: W,
    ) -> Self {
        Self {
            topics,
            courses,
            advisor,
            input,
            output,
            progress: Progress::Hidden,
            progress_output: Box::new(|| Box::new(io::stdout())),
            selection: Vec::new(),
            state: SessionState::SelectingInterests,
        }
    }

    pub fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = progress;
        self
    }

    /// Redirects the spinner away from stdout.
    #[cfg(test)]
    pub fn with_progress_output<F>(mut self, open: F) -> Self
    where
        F: Fn() -> Box<dyn Write + Send> + 'a,
    {
        self.progress_output = Box::new(open);
        self
    }

    #[cfg(test)]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[cfg(test)]
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// Drives the session until the user quits or input ends.
    ///
    /// Upstream failures never end the session; only terminal I/O errors are returned.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            tracing::debug!(state = ?self.state, "session step");
            self.state = match self.state {
                SessionState::SelectingInterests => self.select_initial()?,
                SessionState::Generating => {
                    self.generate_and_display().await?;
                    SessionState::MenuIdle
                }
                SessionState::MenuIdle => self.handle_menu()?,
                SessionState::Terminated => return Ok(()),
            };
        }
    }

    fn select_initial(&mut self) -> Result<SessionState> {
        self.print_topics()?;
        let Some(line) = self.read_line(SELECTION_PROMPT)? else {
            return Ok(SessionState::Terminated);
        };

        self.selection = parse_selection_quietly(&line, self.topics);
        if self.selection.is_empty() {
            writeln!(self.output, "{}", NO_SELECTION.yellow())?;
            return Ok(SessionState::MenuIdle);
        }
        Ok(SessionState::Generating)
    }

    fn reselect(&mut self) -> Result<SessionState> {
        self.print_topics()?;
        let Some(line) = self.read_line(SELECTION_PROMPT)? else {
            return Ok(SessionState::Terminated);
        };

        let parsed = parse_selection(&line, self.topics);
        for issue in &parsed.issues {
            writeln!(self.output, "{}", issue.to_string().red())?;
        }

        self.selection = parsed.topics;
        if self.selection.is_empty() {
            Ok(SessionState::MenuIdle)
        } else {
            Ok(SessionState::Generating)
        }
    }

    fn handle_menu(&mut self) -> Result<SessionState> {
        writeln!(self.output)?;
        let Some(line) = self.read_line(MENU_PROMPT)? else {
            return Ok(SessionState::Terminated);
        };

        match MenuCommand::parse(&line) {
            MenuCommand::Regenerate if self.selection.is_empty() => {
                writeln!(self.output, "{}", NO_SELECTION.yellow())?;
                Ok(SessionState::MenuIdle)
            }
            MenuCommand::Regenerate => Ok(SessionState::Generating),
            MenuCommand::Reselect => self.reselect(),
            MenuCommand::Quit => Ok(SessionState::Terminated),
            MenuCommand::Unknown => {
                writeln!(
                    self.output,
                    "{}",
                    "Invalid input. Please enter 'r', 's', or 'q'.".red()
                )?;
                Ok(SessionState::MenuIdle)
            }
        }
    }

    async fn generate_and_display(&mut self) -> Result<()> {
        if self.selection.is_empty() {
            writeln!(self.output, "{}", NO_SELECTION.yellow())?;
            return Ok(());
        }

        writeln!(
            self.output,
            "\n{}",
            "Generating personalized learning path...".cyan()
        )?;
        self.output.flush()?;

        let suggestions = self
            .progress
            .track_with(
                (self.progress_output)(),
                self.advisor.generate(&self.selection),
            )
            .await;

        writeln!(self.output, "\n{}", "AI-Generated Learning Path:".bold().green())?;
        writeln!(self.output, "{suggestions}")?;

        writeln!(
            self.output,
            "\n{}",
            "Recommended Coursera Courses:".bold().green()
        )?;
        for topic in &self.selection {
            writeln!(self.output, "\nCourses for {topic}:")?;

            let courses = self.courses.search(topic).await;
            if courses.is_empty() {
                writeln!(self.output, "{}", NO_COURSES.yellow())?;
                continue;
            }
            for course in courses {
                writeln!(self.output, "- {}", course.name.bold())?;
                writeln!(self.output, "  URL: {}", course.url.cyan())?;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn print_topics(&mut self) -> Result<()> {
        writeln!(self.output, "{}", "Available tech interests:".bold())?;
        for (number, topic) in self.topics.numbered() {
            writeln!(self.output, "{}. {}", number.to_string().cyan(), topic)?;
        }
        Ok(())
    }

    /// Prompts and reads one trimmed line; `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
