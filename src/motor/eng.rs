use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

use super::curve::ThrustSample;
use super::decode::{self, TextEncoding};

// ---------------------------------------------------------------------------
// RASP (.eng) motor file
// ---------------------------------------------------------------------------

/// Errors raised while loading a motor file.
#[derive(Debug, Error)]
pub enum MotorFileError {
    #[error("motor file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read motor file '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("motor file '{}' is not valid text in any of: {tried}", path.display())]
    Decode { path: PathBuf, tried: String },

    #[error("no specification line found (expected at least 6 fields)")]
    MissingSpecLine,

    #[error("malformed specification line {line}: {reason}")]
    MalformedSpecLine { line: usize, reason: String },
}

/// Specification line of a RASP motor file, e.g.
/// `F35 29 95 0-4-6-8 0.090 0.118 TSP`.
#[derive(Debug, Clone, PartialEq)]
pub struct EngHeader {
    pub name: String,
    pub diameter_mm: f64,
    pub length_mm: f64,
    pub delays: String,
    pub propellant_mass: f64, // kg
    pub total_mass: f64,      // kg
    pub manufacturer: Option<String>,
}

/// Parsed motor file: header plus raw thrust samples in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct EngFile {
    pub header: EngHeader,
    pub samples: Vec<ThrustSample>,
}

fn is_skipped(line: &str) -> bool {
    line.is_empty() || line.starts_with(';')
}

fn parse_field(value: &str, field: &str, line: usize) -> Result<f64, MotorFileError> {
    let malformed = |what: &str| MotorFileError::MalformedSpecLine {
        line,
        reason: format!("{} '{}' {}", field, value, what),
    };
    let x = value.parse::<f64>().map_err(|_| malformed("is not a number"))?;
    if !x.is_finite() {
        return Err(malformed("is not finite"));
    }
    Ok(x)
}

fn parse_mass(value: &str, field: &str, line: usize) -> Result<f64, MotorFileError> {
    let m = parse_field(value, field, line)?;
    if m <= 0.0 {
        return Err(MotorFileError::MalformedSpecLine {
            line,
            reason: format!("{} must be positive, got {}", field, m),
        });
    }
    Ok(m)
}

impl EngHeader {
    fn parse(fields: &[&str], line: usize) -> Result<Self, MotorFileError> {
        Ok(EngHeader {
            name: fields[0].to_string(),
            diameter_mm: parse_field(fields[1], "diameter", line)?,
            length_mm: parse_field(fields[2], "length", line)?,
            delays: fields[3].to_string(),
            propellant_mass: parse_mass(fields[4], "propellant mass", line)?,
            total_mass: parse_mass(fields[5], "total mass", line)?,
            manufacturer: fields.get(6).map(|s| s.to_string()),
        })
    }
}

impl EngFile {
    /// Parse motor file lines.
    ///
    /// The first non-comment line with at least six fields is the
    /// specification line. Every later line whose first two fields are
    /// numbers is a `(time, thrust)` sample; anything else is skipped.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, MotorFileError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut header: Option<EngHeader> = None;
        let mut samples = Vec::new();

        for (idx, raw) in lines.into_iter().enumerate() {
            let line = raw.as_ref().trim();
            let line_no = idx + 1;
            if is_skipped(line) {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();

            if header.is_none() {
                if fields.len() >= 6 {
                    header = Some(EngHeader::parse(&fields, line_no)?);
                } else {
                    debug!("line {}: skipping short line before specification", line_no);
                }
                continue;
            }

            if fields.len() < 2 {
                debug!("line {}: skipping, fewer than two fields", line_no);
                continue;
            }
            match (fields[0].parse::<f64>(), fields[1].parse::<f64>()) {
                (Ok(time), Ok(thrust))
                    if time.is_finite() && thrust.is_finite() && time >= 0.0 && thrust >= 0.0 =>
                {
                    samples.push(ThrustSample::new(time, thrust));
                }
                (Ok(_), Ok(_)) => debug!("line {}: skipping negative or non-finite sample", line_no),
                _ => debug!("line {}: skipping malformed data line '{}'", line_no, line),
            }
        }

        let header = header.ok_or(MotorFileError::MissingSpecLine)?;
        if samples.len() < 2 {
            warn!(
                "motor '{}' has {} thrust sample(s); it will produce no thrust",
                header.name,
                samples.len()
            );
        }
        Ok(EngFile { header, samples })
    }

    pub fn parse(text: &str) -> Result<Self, MotorFileError> {
        Self::from_lines(text.lines())
    }

    /// Load and parse a motor file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MotorFileError> {
        let lines = read_lines(path)?;
        Self::from_lines(&lines)
    }
}

/// Read a text file as lines, trying each candidate encoding in turn.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, MotorFileError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            MotorFileError::NotFound { path: path.to_path_buf() }
        } else {
            MotorFileError::Io { path: path.to_path_buf(), source }
        }
    })?;

    let (text, encoding) = decode::decode(&bytes).ok_or_else(|| MotorFileError::Decode {
        path: path.to_path_buf(),
        tried: TextEncoding::CANDIDATES
            .iter()
            .map(|e| e.label())
            .collect::<Vec<_>>()
            .join(", "),
    })?;
    debug!("decoded '{}' as {}", path.display(), encoding);

    Ok(text.lines().map(str::to_owned).collect())
}
