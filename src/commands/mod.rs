//! Built-in REPL commands prefixed with `/`.
//!
//! Commands implement the [`Command`] trait and are registered in a
//! [`CommandRegistry`]. The registry handles dispatch, alias resolution,
//! and help generation. Any line the registry does not claim is treated
//! as a submission.

mod quit;
mod status;

use async_trait::async_trait;

use crate::coordinator::SessionStats;

/// Session facts commands may show. Borrowed from the REPL for the
/// duration of one dispatch.
pub struct SessionInfo<'a> {
    pub backend: &'a str,
    pub endpoint: &'a str,
    pub db_path: &'a str,
    pub stats: SessionStats,
    pub last_greeting: Option<String>,
}

/// What the REPL should do after a command runs.
pub enum CommandResult {
    /// Not a command; the line is a submission.
    NotACommand,
    /// Command handled, continue the loop.
    Handled,
    /// Exit the REPL.
    Quit,
}

/// A REPL command. Implement this trait to add new ones.
#[async_trait]
pub trait Command: Send + Sync {
    /// Primary name, e.g. `"/status"`.
    fn name(&self) -> &str;

    /// Alternative spellings, e.g. `&["quit", "exit"]`.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line description for `/help`.
    fn description(&self) -> &str;

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult;
}

/// Holds the built-in commands.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: vec![Box::new(status::StatusCommand), Box::new(quit::QuitCommand)],
        }
    }

    /// Dispatch input to a matching command, or return `NotACommand`.
    pub async fn dispatch(&self, input: &str, info: &SessionInfo<'_>) -> CommandResult {
        let cmd = input.trim();

        // /help needs the registry itself to list everything
        if cmd == "/help" || cmd == "/h" || cmd == "/?" {
            print!("{}", self.help_text());
            return CommandResult::Handled;
        }

        for command in &self.commands {
            if cmd == command.name() || command.aliases().contains(&cmd) {
                return command.execute(info).await;
            }
        }

        if cmd.starts_with('/') {
            println!("unknown command: {cmd}");
            println!("type /help for available commands");
            return CommandResult::Handled;
        }

        CommandResult::NotACommand
    }

    /// Generate help text from all registered commands.
    pub fn help_text(&self) -> String {
        let mut entries = vec![("/help (/h, /?)".to_string(), "show this help")];
        entries.extend(
            self.commands
                .iter()
                .map(|c| (format_label(c.name(), c.aliases()), c.description())),
        );

        let max_width = entries
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(10);

        let mut out = String::new();
        for (label, desc) in &entries {
            out.push_str(&format!("  {label:<max_width$}  {desc}\n"));
        }
        out
    }

    /// All registered command names.
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// All registered names and aliases (for duplicate detection).
    pub fn all_triggers(&self) -> Vec<&str> {
        let mut triggers = Vec::new();
        for cmd in &self.commands {
            triggers.push(cmd.name());
            triggers.extend_from_slice(cmd.aliases());
        }
        triggers
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn format_label(name: &str, aliases: &[&str]) -> String {
    if aliases.is_empty() {
        name.to_string()
    } else {
        format!("{} ({})", name, aliases.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn test_info() -> SessionInfo<'static> {
        SessionInfo {
            backend: "local",
            endpoint: "http://127.0.0.1:4943",
            db_path: ":memory:",
            stats: SessionStats::default(),
            last_greeting: None,
        }
    }

    #[test]
    fn all_builtins_registered() {
        let reg = CommandRegistry::new();
        let names = reg.names();
        assert!(names.contains(&"/status"));
        assert!(names.contains(&"/quit"));
    }

    #[test]
    fn no_duplicate_triggers() {
        let reg = CommandRegistry::new();
        let triggers = reg.all_triggers();
        let mut seen = Vec::new();
        for t in &triggers {
            assert!(!seen.contains(t), "duplicate trigger: {t}");
            seen.push(t);
        }
    }

    #[test]
    fn help_text_includes_all_commands() {
        let reg = CommandRegistry::new();
        let help = reg.help_text();
        assert!(help.contains("/help"));
        assert!(help.contains("/status"));
        assert!(help.contains("/quit"));
    }

    #[tokio::test]
    async fn plain_text_is_not_a_command() {
        let reg = CommandRegistry::new();
        assert!(matches!(
            reg.dispatch("Ada", &test_info()).await,
            CommandResult::NotACommand
        ));
    }

    #[tokio::test]
    async fn unknown_slash_command_is_handled() {
        let reg = CommandRegistry::new();
        assert!(matches!(
            reg.dispatch("/frobnicate", &test_info()).await,
            CommandResult::Handled
        ));
    }

    #[tokio::test]
    async fn quit_alias_resolves() {
        let reg = CommandRegistry::new();
        assert!(matches!(
            reg.dispatch("exit", &test_info()).await,
            CommandResult::Quit
        ));
    }

    #[tokio::test]
    async fn dispatch_trims_surrounding_whitespace() {
        let reg = CommandRegistry::new();
        assert!(matches!(
            reg.dispatch("  /quit  ", &test_info()).await,
            CommandResult::Quit
        ));
    }
}
