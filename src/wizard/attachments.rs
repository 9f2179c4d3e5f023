//! Database and broker attachment steps
//!
//! Each collection is gathered by its own [`AttachmentLoop`]: a yes/no
//! question, then a short sub-wizard (type, version, name) per "yes".

use crate::error::Result;
use crate::manifest::{Attachment, ServiceKind};
use crate::wizard::prompt::Prompter;
use colored::Colorize;

/// Most "add one?" confirmations asked per collection
pub const MAX_ATTACHMENT_PROMPTS: usize = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    AskFirst,
    AskMore,
    Done,
}

/// Confirmation state machine shared by the database and broker steps
#[derive(Debug)]
pub struct AttachmentLoop {
    state: LoopState,
    asked: usize,
}

impl Default for AttachmentLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl AttachmentLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::AskFirst,
            asked: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Question to ask next, or `None` once the loop is over
    pub fn question<K: ServiceKind>(&self) -> Option<&'static str> {
        match self.state {
            LoopState::AskFirst => Some(K::FIRST_QUESTION),
            LoopState::AskMore => Some(K::MORE_QUESTION),
            LoopState::Done => None,
        }
    }

    /// Record the user's answer to the current question
    pub fn answer(&mut self, yes: bool) {
        if self.state == LoopState::Done {
            return;
        }
        self.asked += 1;
        self.state = if !yes || self.asked >= MAX_ATTACHMENT_PROMPTS {
            LoopState::Done
        } else {
            LoopState::AskMore
        };
    }
}

/// Ask for one service: type, then version, then instance name
///
/// Backing out of either menu, or a type without versions, yields no
/// attachment.
pub fn attachment_wizard<K: ServiceKind>(
    prompter: &mut dyn Prompter,
) -> Result<Option<Attachment<K>>> {
    let labels: Vec<String> = K::all().iter().map(|k| k.label().to_string()).collect();
    let message = format!("Choose the {} you want to add", K::NOUN);
    let Some(choice) = prompter.select(&message, &labels, None)? else {
        return Ok(None);
    };

    let versions: Vec<String> = K::versions_for(&choice)
        .iter()
        .map(|v| v.to_string())
        .collect();
    let Some(version) =
        prompter.select(&format!("Choose the {} version you want", choice), &versions, None)?
    else {
        log::debug!("No version chosen for {}, skipping", choice);
        return Ok(None);
    };

    let name = prompter.input(&format!("Set the {} name", K::NOUN), false)?;

    let attachment = K::parse(&choice).and_then(|kind| Attachment::new(name, kind, &version));
    if let Some(attachment) = &attachment {
        println!(
            "{} Added {} {} {} ({})",
            "✓".green(),
            K::NOUN,
            attachment.name.cyan(),
            attachment.kind.label(),
            attachment.version
        );
    }
    Ok(attachment)
}

/// Run one attachment loop to completion
pub fn collect_attachments<K: ServiceKind>(
    prompter: &mut dyn Prompter,
) -> Result<Vec<Attachment<K>>> {
    collect_with(prompter, attachment_wizard::<K>)
}

fn collect_with<K, F>(prompter: &mut dyn Prompter, mut sub_wizard: F) -> Result<Vec<Attachment<K>>>
where
    K: ServiceKind,
    F: FnMut(&mut dyn Prompter) -> Result<Option<Attachment<K>>>,
{
    let mut attachments = Vec::new();
    let mut control = AttachmentLoop::new();

    while let Some(question) = control.question::<K>() {
        let yes = prompter.confirm(question, false)?;
        control.answer(yes);
        if yes {
            if let Some(attachment) = sub_wizard(prompter)? {
                attachments.push(attachment);
            }
        }
    }

    log::debug!("Collected {} {}(s)", attachments.len(), K::NOUN);
    Ok(attachments)
}
