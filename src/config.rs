// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared configuration: node naming, plugin-data keys and payloads, badge
//! geometry, and the badge color palette.
//!
//! Every module must agree on these values; node lookups match on the name
//! prefixes below and placement math depends on the badge geometry.

use serde::{Deserialize, Serialize};

use crate::model::ContentBlock;
use crate::scene::Rgb;

/// Plugin-data key holding [`WrapperData`] on a wrapper frame.
pub const WRAPPER_DATA_KEY: &str = "annotWrapper";
/// Plugin-data key holding the full annotation record on its item node.
pub const ITEM_DATA_KEY: &str = "annotItem";
/// Plugin-data key holding [`BadgeData`] on a badge marker.
pub const BADGE_DATA_KEY: &str = "annotBadge";

pub const WRAPPER_NAME_PREFIX: &str = "Annotation Wrapper";
pub const ITEM_NAME_PREFIX: &str = "Annotation Item";
pub const BADGE_NAME_PREFIX: &str = "Annotation Badge";
pub const HEADER_NAME: &str = "Header";
pub const HEADER_TEXT_NAME: &str = "Header/Text";
pub const BODY_NAME: &str = "Body";
pub const BADGE_LABEL_NAME: &str = "Badge/Label";

/// Badge markers are square.
pub const BADGE_SIZE: f64 = 24.0;
/// Badges intentionally overlap their anchor's left edge by this amount.
pub const BADGE_ANCHOR_OVERLAP: f64 = 8.0;
/// Vertical gap between stacked badges.
pub const BADGE_STACK_GAP: f64 = 8.0;

pub const ITEM_WIDTH: f64 = 320.0;
pub const HEADER_HEIGHT: f64 = 28.0;
pub const BLOCK_HEIGHT: f64 = 20.0;
pub const BLOCK_SPACING: f64 = 4.0;

/// Shown in the header when an annotation title is empty.
pub const TITLE_PLACEHOLDER: &str = "Untitled annotation";
pub const PLACEHOLDER_FILL: Rgb = Rgb::new(153, 153, 153);
pub const TEXT_FILL: Rgb = Rgb::new(34, 34, 34);

/// Wrapper-level metadata written by the host when it connects a wrapper to
/// a frame on the canvas. Read by badge placement as the anchor fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrapperData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_frame_id: Option<String>,
}

/// Badge-level metadata tagging a marker with its annotation and the index
/// it displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeData {
    pub annotation_id: String,
    pub index: usize,
}

/// Fallback content for a block whose serialized content is absent.
pub fn default_paragraph_content() -> Vec<ContentBlock> {
    vec![ContentBlock::text("")]
}

/// Resolves a color theme id to its badge fill. Unknown ids fall back to the
/// default theme.
pub fn badge_theme_fill(color_theme_id: &str) -> Rgb {
    match color_theme_id {
        "red" => Rgb::new(229, 72, 77),
        "orange" => Rgb::new(247, 104, 8),
        "green" => Rgb::new(48, 164, 108),
        "violet" => Rgb::new(110, 86, 207),
        "pink" => Rgb::new(214, 64, 159),
        _ => Rgb::new(0, 145, 255),
    }
}
