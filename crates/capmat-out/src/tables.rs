//! CSV rendering and re-reading for every table shape.
//!
//! Identifier and release-name cells are plain tokens; only extension
//! descriptions (and comma-joined versions) can contain CSV metacharacters,
//! so those fields get minimal RFC-4180 quoting.

use capmat_core::{
    CapabilityRecord, CapmatError, ExtensionRecord, ExtensionTable, IdentifierSet,
    ReleaseRecordSet, VersionMatrix,
};

/// Sentinel marking a supported (release, compiler) cell. Absence is an
/// empty cell.
pub const PRESENT: &str = "X";

const CPU_HEADER: &str = "CPU,GCC,Clang";

/// Per-compiler CPU table: `Architecture,CPU`, rows in set order.
pub fn render_compiler_cpus(architecture: &str, identifiers: &IdentifierSet) -> String {
    let mut out = String::from("Architecture,CPU\n");
    for identifier in identifiers {
        out.push_str(architecture);
        out.push(',');
        out.push_str(identifier);
        out.push('\n');
    }
    out
}

/// Per-release merged table: `CPU,GCC,Clang` with the presence sentinel.
pub fn render_release_cpus(set: &ReleaseRecordSet) -> String {
    let mut out = String::from(CPU_HEADER);
    out.push('\n');
    for record in set.records.values() {
        out.push_str(&record.identifier);
        out.push(',');
        out.push_str(flag(record.gcc));
        out.push(',');
        out.push_str(flag(record.clang));
        out.push('\n');
    }
    out
}

/// Reads a merged table back into a record set (the cache path). The
/// architecture tag is not stored in this shape and comes back as
/// `unknown`; nothing downstream of the merge consumes it.
pub fn parse_release_cpus(release: &str, text: &str) -> Result<ReleaseRecordSet, CapmatError> {
    let mut lines = text.lines();
    match lines.next() {
        Some(header) if header.trim_end() == CPU_HEADER => {}
        other => {
            return Err(CapmatError::Report(format!(
                "merged table for {release}: expected header {CPU_HEADER:?}, got {other:?}"
            )))
        }
    }

    let mut set = ReleaseRecordSet::new(release);
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 3 {
            return Err(CapmatError::Report(format!(
                "merged table for {release}: malformed row {line:?}"
            )));
        }
        let gcc = fields[1] == PRESENT;
        let clang = fields[2] == PRESENT;
        if !gcc && !clang {
            return Err(CapmatError::Report(format!(
                "merged table for {release}: row {:?} supported by neither compiler",
                fields[0]
            )));
        }
        set.insert(CapabilityRecord {
            identifier: fields[0].to_string(),
            architecture: "unknown".to_string(),
            gcc,
            clang,
        });
    }
    Ok(set)
}

/// Final comparison matrix: `CPU`, then `<release>-GCC,<release>-Clang`
/// per processed release in order.
pub fn render_matrix(matrix: &VersionMatrix) -> String {
    let mut out = String::from("CPU");
    for release in &matrix.releases {
        out.push_str(&format!(",{release}-GCC,{release}-Clang"));
    }
    out.push('\n');

    for identifier in matrix.identifiers() {
        out.push_str(identifier);
        for release in &matrix.releases {
            let cell = matrix.presence(identifier, release);
            out.push(',');
            out.push_str(flag(cell.gcc));
            out.push(',');
            out.push_str(flag(cell.clang));
        }
        out.push('\n');
    }
    out
}

/// Per-compiler extension table: `Name,Version,Description`.
pub fn render_compiler_extensions(records: &[ExtensionRecord]) -> String {
    let mut out = String::from("Name,Version,Description\n");
    for record in records {
        out.push_str(&escape(&record.name));
        out.push(',');
        out.push_str(&escape(&record.version));
        out.push(',');
        out.push_str(&escape(&record.description));
        out.push('\n');
    }
    out
}

/// Reads a per-compiler extension table back (the cache path for the
/// extension flow).
pub fn parse_extension_rows(text: &str) -> Result<Vec<ExtensionRecord>, CapmatError> {
    let mut lines = text.lines();
    match lines.next() {
        Some(header) if header.trim_end() == "Name,Version,Description" => {}
        other => {
            return Err(CapmatError::Report(format!(
                "extension table: expected header \"Name,Version,Description\", got {other:?}"
            )))
        }
    }

    let mut records = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_quoted(line);
        if fields.len() < 2 {
            return Err(CapmatError::Report(format!(
                "extension table: malformed row {line:?}"
            )));
        }
        records.push(ExtensionRecord {
            name: fields[0].clone(),
            version: fields[1].clone(),
            description: fields.get(2).cloned().unwrap_or_default(),
        });
    }
    Ok(records)
}

/// Merged extension matrix: key columns plus one `Y`/`N` column per
/// source listing, in source order.
pub fn render_extension_table(table: &ExtensionTable) -> String {
    let mut out = String::from("Name,Version,Description");
    for source in &table.sources {
        out.push(',');
        out.push_str(source);
    }
    out.push('\n');

    for ((name, version), entry) in &table.entries {
        out.push_str(&escape(name));
        out.push(',');
        out.push_str(&escape(version));
        out.push(',');
        out.push_str(&escape(&entry.description));
        for source in &table.sources {
            out.push(',');
            out.push_str(if entry.present_in.contains(source) { "Y" } else { "N" });
        }
        out.push('\n');
    }
    out
}

fn flag(present: bool) -> &'static str {
    if present {
        PRESENT
    } else {
        ""
    }
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn split_quoted(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
