// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::format::gedcom::Record;

/// Ids of `SOUR` citations nested under any occurrence of `event_tag`.
///
/// Each occurrence is scanned independently: the scan runs forward from
/// the event line and stops at the first line whose level drops back to
/// the event's level or above. Ids are de-duplicated in first-seen order.
pub fn extract_event_sources(record: &Record, event_tag: &str) -> Vec<String> {
    collect_event_pointers(record, event_tag, "SOUR")
}

/// Ids of `OBJE` media pointers nested under any occurrence of `event_tag`.
pub fn extract_event_media(record: &Record, event_tag: &str) -> Vec<String> {
    collect_event_pointers(record, event_tag, "OBJE")
}

fn collect_event_pointers(record: &Record, event_tag: &str, pointer_tag: &str) -> Vec<String> {
    let lines = record.lines();
    let mut ids: Vec<String> = Vec::new();

    for &event_index in record.tag_index().all(event_tag) {
        let event_level = lines[event_index].level();
        for line in &lines[event_index + 1..] {
            if line.level() <= event_level {
                break;
            }
            if line.tag() != pointer_tag {
                continue;
            }
            let Some(pointer) = line.pointer() else {
                continue;
            };
            if !ids.iter().any(|seen| seen == pointer) {
                ids.push(pointer.to_owned());
            }
        }
    }

    ids
}
