// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Structural diff over annotation snapshots.
//!
//! The engine is a pure function over canonicalized JSON values; it holds no
//! state between calls. Objects are compared field-wise, arrays slot-wise
//! (pairwise over the common prefix, surplus slots reported as added or
//! deleted), scalars by equality. Consumers walk the resulting record tree:
//! the reconciler over annotation records, the content patcher over the
//! nested `content` item records.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde_json::Value;

use crate::model::Annotation;

pub mod serialize;

pub use serialize::canonicalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStatus {
    Added,
    Modified,
    Deleted,
    Unchanged,
}

/// The per-value change report.
///
/// `changes` counts the immediate child records (fields or items) whose own
/// status is not `Unchanged`; for scalar leaves it is `1` when the value
/// differs. A record with `changes == 0` always has status `Unchanged`.
/// `fields` is populated only on modified objects and then carries every
/// field, changed or not; `items` mirrors array slots the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffRecord {
    status: DiffStatus,
    changes: usize,
    original: Value,
    current: Value,
    fields: BTreeMap<String, DiffRecord>,
    items: Vec<DiffRecord>,
}

impl DiffRecord {
    fn leaf(status: DiffStatus, changes: usize, original: Value, current: Value) -> Self {
        Self {
            status,
            changes,
            original,
            current,
            fields: BTreeMap::new(),
            items: Vec::new(),
        }
    }

    pub fn status(&self) -> DiffStatus {
        self.status
    }

    pub fn changes(&self) -> usize {
        self.changes
    }

    pub fn original(&self) -> &Value {
        &self.original
    }

    pub fn current(&self) -> &Value {
        &self.current
    }

    pub fn fields(&self) -> &BTreeMap<String, DiffRecord> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&DiffRecord> {
        self.fields.get(name)
    }

    pub fn items(&self) -> &[DiffRecord] {
        &self.items
    }

    /// The current value of a field, when it is a string.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.field(name)?.current().as_str()
    }
}

/// Compares two annotation snapshots and returns one record per slot:
/// one for each element of `next` (added / modified / unchanged) and one for
/// each surplus element of `previous` (deleted). Deletion initiated by the
/// host store arrives as a modified record whose `isDeleted` field became
/// true, not as array shrinkage.
pub fn diff_annotations(previous: &[Annotation], next: &[Annotation]) -> Vec<DiffRecord> {
    let original = serialize::canonicalize(previous);
    let current = serialize::canonicalize(next);
    diff_slots(&original, &current)
}

/// True when any record carries an identity change, which marks the whole
/// batch as a pure reorder: upstream re-indexing reassigned ids, so content
/// diffs in the same batch are noise.
pub fn is_reorder(records: &[DiffRecord]) -> bool {
    records.iter().any(|record| {
        record.status() == DiffStatus::Modified
            && record
                .field("id")
                .is_some_and(|field| field.status() == DiffStatus::Modified)
    })
}

fn diff_slots(original: &[Value], current: &[Value]) -> Vec<DiffRecord> {
    let len = original.len().max(current.len());
    (0..len)
        .map(|index| compare_slot(original.get(index), current.get(index)))
        .collect()
}

fn compare_slot(original: Option<&Value>, current: Option<&Value>) -> DiffRecord {
    match (original, current) {
        (Some(original), Some(current)) => compare_values(original, current),
        (None, Some(current)) => DiffRecord::leaf(
            DiffStatus::Added,
            1,
            Value::Null,
            current.clone(),
        ),
        (Some(original), None) => DiffRecord::leaf(
            DiffStatus::Deleted,
            1,
            original.clone(),
            Value::Null,
        ),
        (None, None) => DiffRecord::leaf(DiffStatus::Unchanged, 0, Value::Null, Value::Null),
    }
}

fn compare_values(original: &Value, current: &Value) -> DiffRecord {
    match (original, current) {
        (Value::Object(original_fields), Value::Object(current_fields)) => {
            let keys: BTreeSet<&String> = original_fields
                .keys()
                .chain(current_fields.keys())
                .collect();
            let mut fields = BTreeMap::new();
            let mut changes = 0;
            for key in keys {
                let record = compare_slot(original_fields.get(key), current_fields.get(key));
                if record.status() != DiffStatus::Unchanged {
                    changes += 1;
                }
                fields.insert(key.clone(), record);
            }
            if changes == 0 {
                return DiffRecord::leaf(
                    DiffStatus::Unchanged,
                    0,
                    original.clone(),
                    current.clone(),
                );
            }
            DiffRecord {
                status: DiffStatus::Modified,
                changes,
                original: original.clone(),
                current: current.clone(),
                fields,
                items: Vec::new(),
            }
        }
        (Value::Array(original_items), Value::Array(current_items)) => {
            let items = diff_slots(original_items, current_items);
            let changes = items
                .iter()
                .filter(|record| record.status() != DiffStatus::Unchanged)
                .count();
            if changes == 0 {
                return DiffRecord::leaf(
                    DiffStatus::Unchanged,
                    0,
                    original.clone(),
                    current.clone(),
                );
            }
            DiffRecord {
                status: DiffStatus::Modified,
                changes,
                original: original.clone(),
                current: current.clone(),
                fields: BTreeMap::new(),
                items,
            }
        }
        _ => {
            if original == current {
                DiffRecord::leaf(DiffStatus::Unchanged, 0, original.clone(), current.clone())
            } else {
                DiffRecord::leaf(DiffStatus::Modified, 1, original.clone(), current.clone())
            }
        }
    }
}
