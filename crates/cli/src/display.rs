// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;
use td_core::view::Screen;
use td_core::{Counts, Filter, Item, SyncError};

use crate::config::DeploymentType;

/// Format an item as a single line.
///
/// Output format: `[x] Buy milk  (6f1c2d7e-...)`
pub fn format_item_line(item: &Item) -> String {
    let mark = if item.completed { "x" } else { " " };
    format!("[{}] {}  ({})", mark, item.text, item.id)
}

/// Summary line shown under a non-empty list.
pub fn format_footer(counts: &Counts, filter: Filter) -> String {
    let mut footer = format!("{} | filter: {}", counts.items_left_label(), filter);
    if counts.can_clear() {
        footer.push_str(&format!(
            " | {} completed (td clear-completed)",
            counts.completed
        ));
    }
    footer
}

/// Render a screen as text lines.
///
/// `hint` is appended to the error screen, below the message.
pub fn render_screen(screen: &Screen<'_>, hint: Option<&str>) -> Vec<String> {
    match screen {
        Screen::Loading => vec!["loading...".to_string()],
        Screen::Error { message } => {
            let mut lines = vec![format!("error: {}", message)];
            if let Some(hint) = hint {
                lines.push(format!("  hint: {}", hint));
            }
            lines.push("  retry: td list".to_string());
            lines
        }
        Screen::Empty => vec!["No todos yet. Add one with: td add <text>".to_string()],
        Screen::List {
            items,
            counts,
            filter,
        } => {
            let mut lines = if items.is_empty() {
                vec![format!("No {} todos.", filter)]
            } else {
                items.iter().copied().map(format_item_line).collect()
            };
            lines.push(String::new());
            lines.push(format_footer(counts, *filter));
            lines
        }
    }
}

/// Deployment-specific advice for a failure, if there is any.
pub fn deployment_hint(error: &SyncError, deployment: DeploymentType) -> Option<&'static str> {
    if let SyncError::Transport { .. } = error {
        return (deployment == DeploymentType::ApiGateway)
            .then_some("make sure the API is deployed and CORS is enabled on its routes");
    }
    match (error.status(), deployment) {
        (Some(403), DeploymentType::ApiGateway) => {
            Some("API Gateway returns 403 for unknown routes and stages; check the stage in the URL")
        }
        (Some(403), DeploymentType::LambdaUrl) => {
            Some("the function URL must use auth type NONE and allow this origin")
        }
        _ => None,
    }
}

/// JSON form of a list screen.
#[derive(Serialize)]
#[serde(untagged)]
pub enum ScreenJson<'a> {
    List {
        filter: Filter,
        items: Vec<&'a Item>,
        counts: Counts,
    },
    Error {
        error: String,
    },
}

impl<'a> ScreenJson<'a> {
    pub fn from_screen(screen: Screen<'a>, filter: Filter) -> Self {
        match screen {
            Screen::List {
                items,
                counts,
                filter,
            } => ScreenJson::List {
                filter,
                items,
                counts,
            },
            Screen::Error { message } => ScreenJson::Error { error: message },
            Screen::Empty | Screen::Loading => ScreenJson::List {
                filter,
                items: Vec::new(),
                counts: Counts::default(),
            },
        }
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
