//! Destination prompts.

use dialoguer::Input;
use tracing::debug;

use crate::shutdown;

use super::{DestinationPrompt, PromptReply};

fn reply_for(name: &str) -> PromptReply {
    let name = name.trim();
    if name.is_empty() {
        PromptReply::FromSelection
    } else {
        PromptReply::Name(name.to_owned())
    }
}

/// Non-interactive: the name from flags or config, if any.
#[derive(Debug, Clone, Default)]
pub struct FixedPrompt {
    name: Option<String>,
}

impl FixedPrompt {
    pub fn new(name: Option<String>) -> Self {
        Self { name }
    }
}

impl DestinationPrompt for FixedPrompt {
    fn ask(&self) -> PromptReply {
        if shutdown::is_requested() {
            return PromptReply::Abort;
        }
        reply_for(self.name.as_deref().unwrap_or(""))
    }
}

/// Asks on the terminal. An empty answer promotes the first selected
/// directory; Ctrl-C or a terminal error aborts.
#[derive(Debug, Clone, Default)]
pub struct ConsolePrompt {
    initial: Option<String>,
}

impl ConsolePrompt {
    pub fn new(initial: Option<String>) -> Self {
        Self { initial }
    }
}

impl DestinationPrompt for ConsolePrompt {
    fn ask(&self) -> PromptReply {
        let mut input = Input::<String>::new()
            .with_prompt("Destination folder (empty: first selected folder)")
            .allow_empty(true);
        if let Some(initial) = &self.initial {
            input = input.with_initial_text(initial.clone());
        }
        let answer = input.interact_text();
        if shutdown::is_requested() {
            return PromptReply::Abort;
        }
        match answer {
            Ok(name) => reply_for(&name),
            Err(e) => {
                debug!(error = %e, "destination prompt aborted");
                PromptReply::Abort
            }
        }
    }
}
