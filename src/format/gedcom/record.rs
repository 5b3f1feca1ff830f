// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use smol_str::SmolStr;

use super::date::GedcomVersion;
use super::line::GedcomLine;

/// Record kind, taken from the level-0 opening tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    Individual,
    Family,
    Header,
    Trailer,
    Source,
    Object,
    Other,
}

impl RecordType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "INDI" => Self::Individual,
            "FAM" => Self::Family,
            "HEAD" => Self::Header,
            "TRLR" => Self::Trailer,
            "SOUR" => Self::Source,
            "OBJE" => Self::Object,
            _ => Self::Other,
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Individual => "INDI",
            Self::Family => "FAM",
            Self::Header => "HEAD",
            Self::Trailer => "TRLR",
            Self::Source => "SOUR",
            Self::Object => "OBJE",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Explicit ordered multimap: tag → indices of every line carrying that
/// tag anywhere in the record, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    entries: BTreeMap<SmolStr, Vec<usize>>,
}

impl TagIndex {
    fn insert(&mut self, tag: &str, index: usize) {
        self.entries.entry(SmolStr::new(tag)).or_default().push(index);
    }

    pub fn first(&self, tag: &str) -> Option<usize> {
        self.entries.get(tag).and_then(|indices| indices.first().copied())
    }

    pub fn all(&self, tag: &str) -> &[usize] {
        self.entries.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }
}

/// A level-0 line and everything beneath it, with continuations already
/// folded back into their carrying lines and a tag index built over the
/// result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    record_type: RecordType,
    id: Option<String>,
    lines: Vec<GedcomLine>,
    tag_index: TagIndex,
}

impl Record {
    /// Build a record from grouped physical lines (opening line first).
    ///
    /// CONT/CONC lines are folded into the preceding line's value here,
    /// before the tag index exists and before any projector can look.
    pub fn from_lines(lines: Vec<GedcomLine>) -> Self {
        let mut folded: Vec<GedcomLine> = Vec::with_capacity(lines.len());
        for line in lines {
            match line.tag() {
                "CONT" if !folded.is_empty() => {
                    let target = folded.last_mut().expect("non-empty folded");
                    target.append_to_value(Some('\n'), line.value());
                }
                "CONC" if !folded.is_empty() => {
                    let target = folded.last_mut().expect("non-empty folded");
                    target.append_to_value(None, line.value());
                }
                _ => folded.push(line),
            }
        }

        let (record_type, id) = match folded.first() {
            Some(opening) => (
                RecordType::from_tag(opening.tag()),
                opening.xref_id().map(str::to_owned),
            ),
            None => (RecordType::Other, None),
        };

        let mut tag_index = TagIndex::default();
        for (index, line) in folded.iter().enumerate() {
            tag_index.insert(line.tag(), index);
        }

        Self {
            record_type,
            id,
            lines: folded,
            tag_index,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn lines(&self) -> &[GedcomLine] {
        &self.lines
    }

    pub fn tag_index(&self) -> &TagIndex {
        &self.tag_index
    }

    /// Value of the first line carrying `tag`, at any depth.
    pub fn first_value(&self, tag: &str) -> Option<&str> {
        self.tag_index
            .first(tag)
            .map(|index| self.lines[index].value())
            .filter(|value| !value.is_empty())
    }

    /// Values of every line carrying `tag`, in document order.
    pub fn values(&self, tag: &str) -> Vec<&str> {
        self.tag_index
            .all(tag)
            .iter()
            .map(|&index| self.lines[index].value())
            .collect()
    }

    /// Stripped pointer ids of every line carrying `tag`, in document order.
    pub fn pointer_values(&self, tag: &str) -> Vec<String> {
        self.tag_index
            .all(tag)
            .iter()
            .filter_map(|&index| self.lines[index].pointer())
            .map(str::to_owned)
            .collect()
    }

    /// First position after `index` whose level is ≤ the level at `index`;
    /// `lines[index + 1..subtree_end(index)]` is the subtree under `index`.
    pub fn subtree_end(&self, index: usize) -> usize {
        let level = self.lines[index].level();
        self.lines
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|(_, line)| line.level() <= level)
            .map(|(end, _)| end)
            .unwrap_or(self.lines.len())
    }

    /// Value of the first `tag` line strictly inside the subtree under the
    /// line at `parent_index`.
    pub fn child_value(&self, parent_index: usize, tag: &str) -> Option<&str> {
        let end = self.subtree_end(parent_index);
        self.lines[parent_index + 1..end]
            .iter()
            .find(|line| line.tag() == tag)
            .map(GedcomLine::value)
            .filter(|value| !value.is_empty())
    }
}

/// A fully grouped document. Created only by the parser; read-only after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GedcomFile {
    header: Option<Record>,
    trailer: Option<Record>,
    individuals: Vec<Record>,
    families: Vec<Record>,
    sources: Vec<Record>,
    objects: Vec<Record>,
    others: Vec<Record>,
    version: GedcomVersion,
    charset: String,
}

impl GedcomFile {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        header: Option<Record>,
        trailer: Option<Record>,
        individuals: Vec<Record>,
        families: Vec<Record>,
        sources: Vec<Record>,
        objects: Vec<Record>,
        others: Vec<Record>,
        version: GedcomVersion,
        charset: String,
    ) -> Self {
        Self {
            header,
            trailer,
            individuals,
            families,
            sources,
            objects,
            others,
            version,
            charset,
        }
    }

    pub fn header(&self) -> Option<&Record> {
        self.header.as_ref()
    }

    pub fn trailer(&self) -> Option<&Record> {
        self.trailer.as_ref()
    }

    pub fn individuals(&self) -> &[Record] {
        &self.individuals
    }

    pub fn families(&self) -> &[Record] {
        &self.families
    }

    pub fn sources(&self) -> &[Record] {
        &self.sources
    }

    pub fn objects(&self) -> &[Record] {
        &self.objects
    }

    pub fn others(&self) -> &[Record] {
        &self.others
    }

    pub fn version(&self) -> GedcomVersion {
        self.version
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    pub fn record_count(&self) -> usize {
        self.header.iter().count()
            + self.trailer.iter().count()
            + self.individuals.len()
            + self.families.len()
            + self.sources.len()
            + self.objects.len()
            + self.others.len()
    }
}
