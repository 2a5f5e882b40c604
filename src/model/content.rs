// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

/// One node of the recursive rich-text document inside an annotation.
///
/// `text` and `marks` are only meaningful on leaf `text` nodes; `content`
/// only on container types; `attrs.order` only on `bullet_list` children.
/// Optional fields are skipped when absent so equal subtrees always
/// serialize to the same string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: BlockType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ContentBlock>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attrs: Option<BlockAttrs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marks: Option<Vec<Mark>>,
}

impl ContentBlock {
    pub fn paragraph(content: Vec<ContentBlock>) -> Self {
        Self {
            kind: BlockType::Paragraph,
            content: Some(content),
            attrs: None,
            text: None,
            marks: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: BlockType::Text,
            content: None,
            attrs: None,
            text: Some(text.into()),
            marks: None,
        }
    }

    pub fn marked_text(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Self {
            kind: BlockType::Text,
            content: None,
            attrs: None,
            text: Some(text.into()),
            marks: Some(marks),
        }
    }

    pub fn hard_break() -> Self {
        Self {
            kind: BlockType::HardBreak,
            content: None,
            attrs: None,
            text: None,
            marks: None,
        }
    }

    pub fn bullet_list(content: Vec<ContentBlock>) -> Self {
        Self {
            kind: BlockType::BulletList,
            content: Some(content),
            attrs: None,
            text: None,
            marks: None,
        }
    }

    pub fn horizontal_rule() -> Self {
        Self {
            kind: BlockType::HorizontalRule,
            content: None,
            attrs: None,
            text: None,
            marks: None,
        }
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.attrs = Some(BlockAttrs { order });
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    Paragraph,
    Text,
    HardBreak,
    BulletList,
    HorizontalRule,
}

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Text => "text",
            Self::HardBreak => "hard_break",
            Self::BulletList => "bullet_list",
            Self::HorizontalRule => "horizontal_rule",
        }
    }
}

/// Block attributes; `order` carries the 1-based position of a list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockAttrs {
    pub order: i64,
}

/// An inline style applied to a leaf `text` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: MarkType,
}

impl Mark {
    pub fn new(kind: MarkType) -> Self {
        Self { kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkType {
    Bold,
    Italic,
    Strike,
    Underline,
}
