//! Typed plugin message contract.
//!
//! The plugin UI historically spoke a duck-typed `{type: ...}` message
//! protocol; here it is a closed serde tagged union, so every inbound kind
//! has a statically known payload shape and unknown kinds are rejected at
//! deserialization time.

use crate::docs::ComponentDoc;
use crate::relay::Answer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Messages the plugin UI can send.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InboundMessage {
    /// Ask a free-text question about a component.
    AskAi { component: String, question: String },
    /// Request the full documentation dataset.
    GetInitialData,
    /// Look up the Storybook link for a component.
    OpenStorybook { component: String },
}

/// Messages sent back to the plugin UI.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum OutboundMessage {
    AiResponse {
        #[serde(flatten)]
        answer: Answer,
    },
    LoadDocumentation {
        data: HashMap<String, ComponentDoc>,
    },
    StorybookUrl {
        component: String,
        url: String,
    },
    Error {
        message: String,
    },
}
