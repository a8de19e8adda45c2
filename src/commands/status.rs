use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

pub struct StatusCommand;

#[async_trait]
impl Command for StatusCommand {
    fn name(&self) -> &str {
        "/status"
    }

    fn aliases(&self) -> &[&str] {
        &["/s"]
    }

    fn description(&self) -> &str {
        "show backend, endpoint, and session counts"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        println!("  backend     {} ({})", info.backend, info.endpoint);
        println!("  settings    {}", info.db_path);
        match &info.last_greeting {
            Some(text) => println!("  last reply  {text}"),
            None => println!("  last reply  —"),
        }
        println!(
            "  session     {} greeted, {} failed",
            info.stats.completed, info.stats.failed
        );
        CommandResult::Handled
    }
}
