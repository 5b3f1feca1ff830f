// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Warning class, for reporting and filtering. Mirrors the recoverable
/// half of the error taxonomy; hard failures are their own error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarningKind {
    Structural,
    MissingField,
    Referential,
    Path,
}

impl WarningKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::MissingField => "missing_field",
            Self::Referential => "referential",
            Self::Path => "path",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Warning,
    Error,
}

/// A recoverable problem found while parsing, mapping, or validating.
///
/// Parsing is resilient by default: these never abort the document, at
/// worst the affected record is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationWarning {
    MalformedLine {
        line_no: usize,
        detail: String,
    },
    LevelJump {
        line_no: usize,
        level: u8,
        previous: u8,
    },
    UnsupportedVersion {
        value: String,
    },
    MissingSourceTitle {
        record_id: String,
    },
    MissingMediaFile {
        record_id: String,
    },
    DanglingReference {
        tag: String,
        from_id: String,
        target_id: String,
    },
    AbsoluteMediaPath {
        record_id: String,
        path: String,
    },
    MediaFileNotFound {
        record_id: String,
        path: String,
    },
}

impl ValidationWarning {
    pub fn kind(&self) -> WarningKind {
        match self {
            Self::MalformedLine { .. } | Self::LevelJump { .. } | Self::UnsupportedVersion { .. } => {
                WarningKind::Structural
            }
            Self::MissingSourceTitle { .. } | Self::MissingMediaFile { .. } => {
                WarningKind::MissingField
            }
            Self::DanglingReference { .. } => WarningKind::Referential,
            Self::AbsoluteMediaPath { .. } | Self::MediaFileNotFound { .. } => WarningKind::Path,
        }
    }

    pub fn severity(&self) -> Severity {
        Severity::Warning
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine { line_no, detail } => {
                write!(f, "malformed line {line_no}: {detail}")
            }
            Self::LevelJump {
                line_no,
                level,
                previous,
            } => write!(
                f,
                "level jump on line {line_no}: {level} after {previous}, record skipped"
            ),
            Self::UnsupportedVersion { value } => {
                write!(f, "unsupported gedcom version {value:?}, assuming 5.5.1")
            }
            Self::MissingSourceTitle { record_id } => {
                write!(f, "source {record_id} has no TITL, using placeholder title")
            }
            Self::MissingMediaFile { record_id } => {
                write!(f, "media object {record_id} has no FILE, using placeholder path")
            }
            Self::DanglingReference {
                tag,
                from_id,
                target_id,
            } => write!(
                f,
                "{tag} on {from_id} points at {target_id}, which is not in this document"
            ),
            Self::AbsoluteMediaPath { record_id, path } => {
                write!(f, "media object {record_id} uses an absolute path: {path}")
            }
            Self::MediaFileNotFound { record_id, path } => {
                write!(f, "media file for {record_id} not found: {path}")
            }
        }
    }
}

impl std::error::Error for ValidationWarning {}
