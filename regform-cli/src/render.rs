//! Line-oriented terminal renderer for a [`FormBinding`].
//!
//! Prompts for each field, submits on the user's confirmation, prints each
//! error under its field, and shows the success banner until the form's
//! feedback cycle ends.

use std::io::{self, Write};
use std::time::Duration;

use log::debug;
use regform::form::FormBinding;
use regform::messages::MessageCatalog;
use regform::validation::{FieldKind, FieldSchema};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

use crate::error::CliError;

/// How often the banner state is polled while waiting for input.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Input typed to clear a field.
const CLEAR: &str = "-";

pub struct Terminal<B, M, R> {
    form: B,
    messages: M,
    lines: Lines<BufReader<R>>,
}

impl<B, M, R> Terminal<B, M, R>
where
    B: FormBinding,
    M: MessageCatalog,
    R: AsyncRead + Unpin,
{
    pub fn new(form: B, messages: M, input: R) -> Self {
        Self {
            form,
            messages,
            lines: BufReader::new(input).lines(),
        }
    }

    /// Run registrations until the user declines another one or input ends.
    pub async fn run(&mut self) -> Result<(), CliError> {
        println!("Tech Conference Registration");
        println!("Press Enter to keep a value, '{CLEAR}' to clear it.\n");

        let mut pending: Vec<String> = self.field_names();
        loop {
            for name in &pending {
                if !self.prompt_field(name).await? {
                    return Ok(());
                }
            }

            let outcome = self.form.submit();
            if outcome.accepted {
                let banner = self.messages.success_banner(&self.form.feedback().submitted_name);
                println!("\n  ✓ {banner}\n");
                if !self.ask_again().await? {
                    return Ok(());
                }
                pending = self.field_names();
                continue;
            }

            println!();
            for error in &outcome.errors {
                let label = self
                    .form
                    .schema()
                    .field(&error.field)
                    .map(FieldSchema::label)
                    .unwrap_or(error.field.as_str());
                println!("  {label}");
                println!("    ✗ {}", error.message(&self.messages));
            }
            println!();
            pending = outcome.errors.fields().map(str::to_string).collect();
        }
    }

    fn field_names(&self) -> Vec<String> {
        self.form
            .schema()
            .fields()
            .iter()
            .map(|field| field.name().to_string())
            .collect()
    }

    /// Prompt for one field. Returns `false` when input is exhausted.
    async fn prompt_field(&mut self, name: &str) -> Result<bool, CliError> {
        let Some(field) = self.form.schema().field(name).cloned() else {
            return Ok(true);
        };
        let current = self.form.get_value(name)?.display_text();

        if let FieldKind::Choice { options } = field.kind() {
            for (i, option) in options.iter().enumerate() {
                println!("    {}) {option}", i + 1);
            }
        }
        let hint = match field.kind() {
            FieldKind::Flag => " [y/n]",
            _ => "",
        };
        prompt(&format!("{}{hint} [{current}]: ", field.label()))?;

        let Some(line) = self.next_line().await? else {
            return Ok(false);
        };
        let input = line.trim();
        if input.is_empty() {
            return Ok(true);
        }
        let raw = if input == CLEAR {
            String::new()
        } else {
            resolve_option(&field, input)
        };
        self.form.set_input(name, &raw)?;
        Ok(true)
    }

    /// Ask whether to register again while watching for the banner to expire.
    async fn ask_again(&mut self) -> Result<bool, CliError> {
        prompt("Register another participant? [y/N]: ")?;
        let mut ticker = tokio::time::interval(POLL_INTERVAL);
        loop {
            tokio::select! {
                line = self.lines.next_line() => {
                    let answer = line?.unwrap_or_default();
                    return Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"));
                }
                _ = ticker.tick() => {
                    if self.form.feedback_changed() && !self.form.feedback().active {
                        debug!("Success banner hidden");
                        println!("\n  (registration banner dismissed)");
                        prompt("Register another participant? [y/N]: ")?;
                    }
                }
            }
        }
    }

    async fn next_line(&mut self) -> Result<Option<String>, CliError> {
        Ok(self.lines.next_line().await?)
    }
}

fn prompt(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{text}")?;
    stdout.flush()
}

/// Map a 1-based option number to its option text; other input passes through.
fn resolve_option(field: &FieldSchema, input: &str) -> String {
    if let FieldKind::Choice { options } = field.kind() {
        if let Ok(index) = input.parse::<usize>() {
            if let Some(option) = index.checked_sub(1).and_then(|i| options.get(i)) {
                return option.clone();
            }
        }
    }
    input.to_string()
}
