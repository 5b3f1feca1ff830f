// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Filesystem boundary.
//!
//! Everything impure lives here: reading/writing documents, asking what
//! today is, and checking media paths on disk. Validation only ever
//! produces warnings; it never alters parsed data.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::format::gedcom::{parse, GedcomParseError, ParseOutcome, ParsedObject, ValidationWarning};

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Parse(GedcomParseError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error on {}: {source}", path.display()),
            Self::Parse(source) => write!(f, "parse error: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(source) => Some(source),
        }
    }
}

impl From<GedcomParseError> for StoreError {
    fn from(source: GedcomParseError) -> Self {
        Self::Parse(source)
    }
}

pub fn read_document(path: &Path) -> Result<String, StoreError> {
    fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_document(path: &Path, text: &str) -> Result<(), StoreError> {
    fs::write(path, text).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a document in one step.
pub fn load(path: &Path) -> Result<ParseOutcome, StoreError> {
    let text = read_document(path)?;
    Ok(parse(&text)?)
}

/// Check media references against a base directory.
///
/// Absolute paths are flagged as-is; relative paths are flagged when the
/// file does not exist under `base_dir`. Placeholder paths from records
/// that had no `FILE` line are skipped, they were already reported.
pub fn validate_media_paths(objects: &[ParsedObject], base_dir: &Path) -> Vec<ValidationWarning> {
    let mut warnings: Vec<ValidationWarning> = Vec::new();

    for object in objects {
        if object.file_path == "UNKNOWN" {
            continue;
        }
        let path = Path::new(&object.file_path);
        if path.is_absolute() {
            warnings.push(ValidationWarning::AbsoluteMediaPath {
                record_id: object.id.clone(),
                path: object.file_path.clone(),
            });
            continue;
        }
        if !base_dir.join(path).exists() {
            warnings.push(ValidationWarning::MediaFileNotFound {
                record_id: object.id.clone(),
                path: object.file_path.clone(),
            });
        }
    }

    warnings
}

/// Today's civil date as `YYYY-MM-DD`, for callers that want a header date.
pub fn system_date_iso() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let (year, month, day) = civil_from_days((secs / 86_400) as i64);
    format!("{year:04}-{month:02}-{day:02}")
}

// Howard Hinnant's days-to-civil algorithm; exact for the whole proleptic
// Gregorian calendar.
fn civil_from_days(days_since_epoch: i64) -> (i64, u32, u32) {
    let z = days_since_epoch + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = (z - era * 146_097) as u64;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    (if month <= 2 { year + 1 } else { year }, month, day)
}
