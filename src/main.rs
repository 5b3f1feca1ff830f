// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Kindred CLI entrypoint.
//!
//! Parses a GEDCOM file and reports a summary plus warnings on stderr.
//! `--json` dumps the typed projections to stdout; `--emit <version>`
//! regenerates the document in the requested dialect.

use std::error::Error;
use std::path::Path;

use serde::Serialize;

use kindred::format::gedcom::{
    generate, parse_family, parse_individual, parse_object, parse_source, GedcomVersion,
    GeneratorConfig, ParsedFamily, ParsedIndividual, ParsedObject, ParsedSource,
    ValidationWarning,
};
use kindred::map::{map_from_gedcom, map_to_gedcom};
use kindred::store;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <file.ged> [--json] [--emit <5.5.1|7.0>] [--out <path>] [--media-dir <dir>]\n\nParses a GEDCOM file and prints a summary plus warnings to stderr.\n\n--json dumps the typed projections (individuals, families, sources, media,\nwarnings) to stdout as JSON.\n--emit regenerates the document in the given dialect, to stdout or --out.\n--media-dir checks referenced media files against the given directory."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    input: Option<String>,
    json: bool,
    emit: Option<GedcomVersion>,
    out: Option<String>,
    media_dir: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => {
                if options.json {
                    return Err(());
                }
                options.json = true;
            }
            "--emit" => {
                if options.emit.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let version: GedcomVersion = raw.parse().map_err(|_| ())?;
                options.emit = Some(version);
            }
            "--out" => {
                if options.out.is_some() {
                    return Err(());
                }
                options.out = Some(args.next().ok_or(())?);
            }
            "--media-dir" => {
                if options.media_dir.is_some() {
                    return Err(());
                }
                options.media_dir = Some(args.next().ok_or(())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(arg);
            }
        }
    }

    if options.input.is_none() {
        return Err(());
    }
    if options.out.is_some() && options.emit.is_none() {
        return Err(());
    }

    Ok(options)
}

#[derive(Debug, Serialize)]
struct JsonReport {
    version: String,
    charset: String,
    individuals: Vec<ParsedIndividual>,
    families: Vec<ParsedFamily>,
    sources: Vec<ParsedSource>,
    media: Vec<ParsedObject>,
    warnings: Vec<ValidationWarning>,
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "kindred".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let input = options.input.as_deref().expect("input is required");
        let path = Path::new(input);
        let outcome = store::load(path)?;
        let file = outcome.file();
        let mut warnings = outcome.warnings().to_vec();

        let version = file.version();
        let individuals: Vec<ParsedIndividual> = file
            .individuals()
            .iter()
            .map(|record| parse_individual(record, version))
            .collect();
        let families: Vec<ParsedFamily> = file
            .families()
            .iter()
            .map(|record| parse_family(record, version))
            .collect();
        let sources: Vec<ParsedSource> = file
            .sources()
            .iter()
            .map(|record| parse_source(record, &mut warnings))
            .collect();
        let media: Vec<ParsedObject> = file
            .objects()
            .iter()
            .map(|record| parse_object(record, &mut warnings))
            .collect();

        if let Some(media_dir) = options.media_dir.as_deref() {
            warnings.extend(store::validate_media_paths(&media, Path::new(media_dir)));
        }

        let (tree, map_warnings) = map_from_gedcom(file);
        warnings.extend(map_warnings);

        eprintln!(
            "{}: dialect {}, {} individuals, {} families, {} sources, {} media",
            path.display(),
            version,
            individuals.len(),
            families.len(),
            sources.len(),
            media.len(),
        );
        for warning in &warnings {
            eprintln!("warning[{}]: {warning}", warning.kind());
        }

        if options.json {
            let report = JsonReport {
                version: version.to_string(),
                charset: file.charset().to_owned(),
                individuals,
                families,
                sources,
                media,
                warnings,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        if let Some(emit_version) = options.emit {
            let (out_individuals, out_families) = map_to_gedcom(&tree);
            let config = GeneratorConfig {
                version: emit_version,
                file_date: Some(store::system_date_iso()),
                ..GeneratorConfig::default()
            };
            let text = generate(&config, &out_individuals, &out_families);
            match options.out.as_deref() {
                Some(out) => store::write_document(Path::new(out), &text)?,
                None => print!("{text}"),
            }
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("kindred: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::parse_options;
    use kindred::format::gedcom::GedcomVersion;

    fn options(args: &[&str]) -> Result<super::CliOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn requires_an_input_file() {
        assert!(options(&[]).is_err());
        assert!(options(&["--json"]).is_err());
    }

    #[test]
    fn parses_flags_and_input() {
        let parsed = options(&["family.ged", "--json", "--emit", "7.0", "--out", "x.ged"])
            .expect("options");
        assert_eq!(parsed.input.as_deref(), Some("family.ged"));
        assert!(parsed.json);
        assert_eq!(parsed.emit, Some(GedcomVersion::V70));
        assert_eq!(parsed.out.as_deref(), Some("x.ged"));
    }

    #[test]
    fn rejects_out_without_emit_and_unknown_flags() {
        assert!(options(&["family.ged", "--out", "x.ged"]).is_err());
        assert!(options(&["family.ged", "--frobnicate"]).is_err());
        assert!(options(&["family.ged", "--emit", "6.0"]).is_err());
        assert!(options(&["a.ged", "b.ged"]).is_err());
    }
}
