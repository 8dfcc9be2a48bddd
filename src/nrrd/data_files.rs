//! Detached data file resolution
//!
//! A detached header names its data files in one of three ways:
//!
//! * a single file name: `data file: scan.raw`
//! * a list on the lines after the header: `data file: LIST [<subdim>]`
//! * a numbered pattern: `data file: slice%03d.raw <min> <max> <step> [<subdim>]`
//!
//! Each resolved path must exist, and the number of files must agree with
//! the array sizes and the subdimension each file spans.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};

use crate::nrrd::constants::{fields, limits, tokens};
use crate::nrrd::errors::{NrrdError, NrrdResult};
use crate::nrrd::fields::FieldAccessor;
use crate::nrrd::raw_header::RawHeader;

lazy_static! {
    // A printf conversion for one integer, or an escaped percent sign
    static ref PRINTF_CONVERSION: Regex =
        Regex::new(r"%(?:%|([-+ 0]*)(\d*)([diuoxX]))").expect("valid printf pattern");
}

/// Answers whether a data file exists
///
/// The parser never opens data files; it only needs to know they are
/// there. Interactive front ends may substitute a locator that asks the
/// user or searches elsewhere.
pub trait FileLocator {
    fn exists(&self, path: &Path) -> bool;
}

/// Checks the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLocator;

impl FileLocator for FsLocator {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

impl FileLocator for HashSet<PathBuf> {
    fn exists(&self, path: &Path) -> bool {
        self.contains(path)
    }
}

/// Array layout the file count is checked against
#[derive(Debug, Clone, Copy)]
pub struct ArrayLayout<'a> {
    pub sizes: &'a [u64],
    pub sample_count: u64,
    pub byte_count: u64,
}

impl ArrayLayout<'_> {
    fn dimension(&self) -> usize {
        self.sizes.len()
    }
}

/// Outcome of data file resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDataFiles {
    pub files: Vec<PathBuf>,
    /// Number of slowest axes spanned by each file, when given or implied
    pub subdim: Option<usize>,
    /// Bytes per file, when the file count divides the byte count
    pub slab_byte_count: Option<u64>,
}

/// Resolves data files for a header, detached or not
///
/// A header that is not detached holds its own samples, so its single data
/// file is the header file itself.
pub fn resolve_data_files(
    header: &RawHeader,
    layout: &ArrayLayout<'_>,
    locator: &dyn FileLocator,
) -> NrrdResult<ResolvedDataFiles> {
    if !header.is_detached() {
        return Ok(ResolvedDataFiles {
            files: vec![header.directory().join(header.filename())],
            subdim: None,
            slab_byte_count: Some(layout.byte_count),
        });
    }

    let accessor = FieldAccessor::new(header);
    let entries = accessor
        .raw(fields::DATA_FILE)
        .ok_or_else(|| NrrdError::MissingField { field: fields::DATA_FILE.to_string() })?;

    let resolver = DataFileResolver {
        directory: header.directory(),
        locator,
    };

    let dimension = layout.dimension();
    let (files, subdim) = match entries.len() {
        1 | 2 if entries[0] == tokens::LIST => {
            let subdim = match entries.get(1) {
                Some(token) => parse_field_int(token)?,
                None => dimension as i64 - 1,
            };
            (resolver.resolve_list(header.data_files())?, Some(subdim))
        }
        1 => (vec![resolver.check(&entries[0])?], None),
        4 | 5 => {
            let pattern = FilePattern::parse(entries, dimension)?;
            (resolver.resolve_pattern(&pattern, layout)?, Some(pattern.subdim))
        }
        n => return Err(NrrdError::MalformedDataFileField(n)),
    };

    debug!("Resolved {} data files (subdim {:?})", files.len(), subdim);

    let subdim = match subdim {
        Some(subdim) => Some(validate_file_count(files.len(), subdim, layout)?),
        None => None,
    };

    let count = files.len() as u64;
    let slab_byte_count = (layout.byte_count % count == 0).then(|| layout.byte_count / count);

    Ok(ResolvedDataFiles {
        files,
        subdim,
        slab_byte_count,
    })
}

struct DataFileResolver<'a> {
    directory: &'a Path,
    locator: &'a dyn FileLocator,
}

impl DataFileResolver<'_> {
    /// Resolves a path against the header directory and checks it exists
    fn check(&self, name: &str) -> NrrdResult<PathBuf> {
        let path = Path::new(name);
        let resolved = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.directory.join(path)
        };

        if !self.locator.exists(&resolved) {
            return Err(NrrdError::DataFileNotFound(resolved));
        }

        Ok(resolved)
    }

    fn resolve_list(&self, names: &[String]) -> NrrdResult<Vec<PathBuf>> {
        if names.is_empty() {
            return Err(NrrdError::EmptyFileList);
        }
        names.iter().map(|name| self.check(name)).collect()
    }

    /// Checks each generated name in turn; files can never outnumber samples
    fn resolve_pattern(&self, pattern: &FilePattern, layout: &ArrayLayout<'_>) -> NrrdResult<Vec<PathBuf>> {
        let count = pattern.count()?;
        if count > layout.sample_count {
            return Err(NrrdError::InvalidPatternSpec(format!(
                "range {}..{} by {} yields {} files for {} samples",
                pattern.min, pattern.max, pattern.step, count, layout.sample_count
            )));
        }

        let mut files = Vec::new();
        for name in pattern.file_names()? {
            files.push(self.check(&name?)?);
        }
        Ok(files)
    }
}

/// `<format> <min> <max> <step> [<subdim>]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePattern {
    pub format: String,
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub subdim: i64,
}

impl FilePattern {
    /// Parses the tokens of a pattern `data file` field
    pub fn parse(entries: &[String], dimension: usize) -> NrrdResult<Self> {
        let number = |index: usize, name: &str| -> NrrdResult<i64> {
            entries[index].parse::<i64>().map_err(|_| {
                NrrdError::InvalidPatternSpec(format!("{} '{}' is not an integer", name, entries[index]))
            })
        };

        let min = number(1, "min")?;
        let max = number(2, "max")?;
        let step = number(3, "step")?;
        let subdim = match entries.len() {
            5 => number(4, "subdim")?,
            _ => dimension as i64 - 1,
        };

        if step == 0 {
            return Err(NrrdError::InvalidPatternSpec("step must not be 0".to_string()));
        }

        Ok(FilePattern {
            format: entries[0].clone(),
            min,
            max,
            step,
            subdim,
        })
    }

    /// Number of files the pattern generates
    pub fn count(&self) -> NrrdResult<u64> {
        let count = self
            .max
            .checked_sub(self.min)
            .and_then(|span| span.checked_div(self.step))
            .and_then(|steps| steps.checked_add(1))
            .ok_or_else(|| self.range_error("overflows"))?;

        if count < 1 {
            return Err(self.range_error("yields no files"));
        }
        Ok(count as u64)
    }

    /// Generates the file names lazily, from `min` stepping by `step`
    pub fn file_names(&self) -> NrrdResult<impl Iterator<Item = NrrdResult<String>> + '_> {
        let count = self.count()?;
        Ok((0..count).map(move |i| {
            let num = i64::try_from(i)
                .ok()
                .and_then(|i| i.checked_mul(self.step))
                .and_then(|offset| offset.checked_add(self.min))
                .ok_or_else(|| self.range_error("overflows"))?;
            format_file_name(&self.format, num)
        }))
    }

    fn range_error(&self, problem: &str) -> NrrdError {
        NrrdError::InvalidPatternSpec(format!(
            "range {}..{} by {} {}",
            self.min, self.max, self.step, problem
        ))
    }
}

/// Substitutes `num` into a printf-style format with one integer conversion
///
/// Supports `%d %i %u %o %x %X` with flags `-+ 0` and a width of at most
/// [`limits::PATTERN_WIDTH_MAX`]; `%%` is a literal percent sign.
pub fn format_file_name(format: &str, num: i64) -> NrrdResult<String> {
    let mut conversions = 0;
    let mut bad_width = None;
    let formatted = PRINTF_CONVERSION.replace_all(format, |caps: &Captures<'_>| {
        match caps.get(3) {
            Some(conversion) => {
                conversions += 1;
                let flags = caps.get(1).map_or("", |m| m.as_str());
                let width = match caps.get(2).map_or("", |m| m.as_str()) {
                    "" => 0,
                    digits => match digits.parse::<usize>() {
                        Ok(width) if width <= limits::PATTERN_WIDTH_MAX => width,
                        _ => {
                            bad_width = Some(digits.to_string());
                            0
                        }
                    },
                };
                format_integer(num, flags, width, conversion.as_str())
            }
            None => "%".to_string(),
        }
    });

    if let Some(width) = bad_width {
        return Err(NrrdError::InvalidPatternSpec(format!(
            "width {} in '{}' exceeds {}",
            width,
            format,
            limits::PATTERN_WIDTH_MAX
        )));
    }
    if conversions != 1 {
        return Err(NrrdError::InvalidPatternSpec(format!(
            "format '{}' must contain exactly one integer conversion",
            format
        )));
    }

    Ok(formatted.into_owned())
}

fn format_integer(num: i64, flags: &str, width: usize, conversion: &str) -> String {
    let magnitude = num.unsigned_abs();
    let digits = match conversion {
        "o" => format!("{:o}", magnitude),
        "x" => format!("{:x}", magnitude),
        "X" => format!("{:X}", magnitude),
        _ => magnitude.to_string(),
    };

    let sign = if num < 0 {
        "-"
    } else if flags.contains('+') {
        "+"
    } else if flags.contains(' ') {
        " "
    } else {
        ""
    };

    let len = sign.len() + digits.len();
    if len >= width {
        return format!("{}{}", sign, digits);
    }

    let pad = width - len;
    if flags.contains('-') {
        format!("{}{}{}", sign, digits, " ".repeat(pad))
    } else if flags.contains('0') {
        format!("{}{}{}", sign, "0".repeat(pad), digits)
    } else {
        format!("{}{}{}", " ".repeat(pad), sign, digits)
    }
}

fn parse_field_int(token: &str) -> NrrdResult<i64> {
    token.parse::<i64>().map_err(|_| NrrdError::NumericParse {
        field: fields::DATA_FILE.to_string(),
        token: token.to_string(),
    })
}

/// Checks the file count against the axes each file spans
///
/// * `subdim == dimension`: files are slabs that must evenly divide the samples
/// * `subdim < dimension - 1`: one file per combination of the slowest
///   `dimension - subdim` axes
/// * `subdim == dimension - 1`: a single file, or one per slowest-axis sample
pub fn validate_file_count(files: usize, subdim: i64, layout: &ArrayLayout<'_>) -> NrrdResult<usize> {
    let dimension = layout.dimension();
    if subdim < 1 || subdim > dimension as i64 {
        return Err(NrrdError::SubdimOutOfRange { subdim, dimension });
    }
    let subdim = subdim as usize;
    let count = files as u64;

    if subdim == dimension {
        if layout.sample_count % count != 0 {
            return Err(NrrdError::SlabCountMismatch {
                files,
                samples: layout.sample_count,
            });
        }
    } else if subdim < dimension - 1 {
        let expected: u64 = layout.sizes[subdim..].iter().product();
        if count != expected {
            return Err(NrrdError::FileCountMismatch { files, expected });
        }
    } else {
        let slowest = layout.sizes[dimension - 1];
        if count != 1 && count != slowest {
            return Err(NrrdError::FileCountMismatch {
                files,
                expected: slowest,
            });
        }
    }

    Ok(subdim)
}
