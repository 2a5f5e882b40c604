// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::annotation::Annotation;
use super::content::ContentBlock;

pub(crate) fn paragraph(text: &str) -> ContentBlock {
    ContentBlock::paragraph(vec![ContentBlock::text(text)])
}

pub(crate) fn annot(id: &str, title: &str, body: &str) -> Annotation {
    Annotation::new(id, title)
        .with_content(vec![paragraph(body)])
        .with_color_theme("blue")
}

pub(crate) fn annots_pair() -> Vec<Annotation> {
    vec![
        annot("a1", "First note", "alpha"),
        annot("a2", "Second note", "beta"),
    ]
}

pub(crate) fn annots_rich(id: &str) -> Annotation {
    Annotation::new(id, "Rich note")
        .with_content(vec![
            paragraph("lead"),
            ContentBlock::bullet_list(vec![
                paragraph("one").with_order(1),
                paragraph("two").with_order(2),
            ]),
            ContentBlock::horizontal_rule(),
        ])
        .with_color_theme("violet")
}
