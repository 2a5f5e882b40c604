// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::content::ContentBlock;

/// A user-authored note attached to a location on the canvas.
///
/// Owned by the host store. The reconciler receives immutable `previous` and
/// `next` snapshots per pass and never mutates them. Identity is `id`, but
/// `id` may itself be reassigned by upstream re-indexing; that reassignment
/// is what triggers reorder mode. Field names on the wire follow the host
/// convention (`colorThemeId`, `isDeleted`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub id: String,
    pub title: String,
    pub content: Vec<ContentBlock>,
    pub color_theme_id: String,
    pub is_deleted: bool,
}

impl Annotation {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: Vec::new(),
            color_theme_id: String::new(),
            is_deleted: false,
        }
    }

    pub fn with_content(mut self, content: Vec<ContentBlock>) -> Self {
        self.content = content;
        self
    }

    pub fn with_color_theme(mut self, color_theme_id: impl Into<String>) -> Self {
        self.color_theme_id = color_theme_id.into();
        self
    }
}
