// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire-format codecs.
//!
//! Currently this module covers the GEDCOM family-tree exchange format in
//! its "5.5.1" and "7.0" dialects.

pub mod gedcom;
