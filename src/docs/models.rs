//! Documentation dataset records.
//!
//! Mirrors the shape of the component documentation JSON: per-component
//! prose sections as HTML fragments, preview rendering hints, optional
//! variants, code examples and a Storybook link.

use serde::{Deserialize, Serialize};

/// Documentation record for one design-system component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDoc {
    pub name: String,
    pub description: String,
    pub preview: Preview,
    pub usage: String,
    pub best_practices: String,
    pub dos_and_donts: String,
    pub accessibility: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storybook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Variant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_examples: Option<Vec<CodeExample>>,
}

/// Rendering hints for the component preview swatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub width: u32,
    pub height: u32,
    pub background_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub name: String,
    pub description: String,
    pub preview: Preview,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeExample {
    pub language: String,
    pub code: String,
}
