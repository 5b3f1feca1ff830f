// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over grouped records.
//!
//! Queries derive views the projections do not carry, e.g. which citations
//! and media belong to a specific life event.

pub mod events;

pub use events::{extract_event_media, extract_event_sources};
