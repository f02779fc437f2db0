//! Loading airfoil profiles from tabular files.
//!
//! Two layouts are accepted:
//!
//! - **CSV** with a header row. Angle, lift and drag columns are located by
//!   name, ignoring case: `alpha`/`angle`/`aoa`, `cl`/`lift`/`cl_coeff` and
//!   `cd`/`drag`/`cd_coeff`. Extra columns are ignored.
//! - **Text** with one `alpha CL CD` row per line, separated by spaces or
//!   tabs. Blank lines and lines starting with `#` are ignored.
//!
//! In both layouts, rows whose values do not parse as numbers are skipped.
//! The surviving rows are checked against [`ProfileBounds`] and the
//! [`AirfoilProfile`] invariants.

use std::{
    ffi::OsStr,
    fs::{self, File},
    io::Read,
    ops::RangeInclusive,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use super::{AirfoilProfile, Column, ProfileError, ProfileRepository};

const ALPHA_HEADERS: [&str; 3] = ["alpha", "angle", "aoa"];
const LIFT_HEADERS: [&str; 3] = ["cl", "lift", "cl_coeff"];
const DRAG_HEADERS: [&str; 3] = ["cd", "drag", "cd_coeff"];

/// Errors that can occur while loading a profile file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read profile file")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV")]
    Csv(#[from] csv::Error),

    /// The CSV header does not name an angle, lift and drag column.
    #[error("required columns not found (expected alpha, CL, CD); found: {}", .found.join(", "))]
    MissingColumns { found: Vec<String> },

    /// No row of the file contained three numeric values.
    #[error("no valid data found")]
    NoData,

    /// A value lies outside the accepted range for its column.
    #[error("{column} value {value} is outside [{min}, {max}]")]
    OutOfRange {
        column: Column,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The file name has no usable stem to derive a profile id from.
    #[error("cannot derive a profile id from {0:?}")]
    InvalidFileName(PathBuf),

    /// The parsed rows do not form a valid profile.
    #[error("invalid profile table")]
    Profile(#[from] ProfileError),
}

/// Accepted value ranges for loaded profile tables.
///
/// The defaults accept angles from -30° to 30°, lift coefficients from -3
/// to 3 and drag coefficients from 0 to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileBounds {
    /// Angle-of-attack range, in degrees.
    pub alpha_deg: RangeInclusive<f64>,

    /// Lift coefficient range.
    pub lift: RangeInclusive<f64>,

    /// Drag coefficient range.
    pub drag: RangeInclusive<f64>,
}

impl Default for ProfileBounds {
    fn default() -> Self {
        Self {
            alpha_deg: -30.0..=30.0,
            lift: -3.0..=3.0,
            drag: 0.0..=1.0,
        }
    }
}

impl ProfileBounds {
    /// Checks every row of `table` against these bounds.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::OutOfRange`] for the first offending value,
    /// checking angles, then lift, then drag.
    pub fn check(&self, table: &RawTable) -> Result<(), LoadError> {
        check_range(Column::Alpha, &self.alpha_deg, &table.alpha_deg)?;
        check_range(Column::Lift, &self.lift, &table.lift)?;
        check_range(Column::Drag, &self.drag, &table.drag)
    }
}

fn check_range(
    column: Column,
    range: &RangeInclusive<f64>,
    values: &[f64],
) -> Result<(), LoadError> {
    for &value in values {
        if !range.contains(&value) {
            return Err(LoadError::OutOfRange {
                column,
                value,
                min: *range.start(),
                max: *range.end(),
            });
        }
    }
    Ok(())
}

/// Columns parsed from a profile file, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub alpha_deg: Vec<f64>,
    pub lift: Vec<f64>,
    pub drag: Vec<f64>,
}

impl RawTable {
    fn push(&mut self, alpha_deg: f64, lift: f64, drag: f64) {
        self.alpha_deg.push(alpha_deg);
        self.lift.push(lift);
        self.drag.push(drag);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alpha_deg.is_empty()
    }

    /// Validates the table and builds a profile from it.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NoData`] for an empty table,
    /// [`LoadError::OutOfRange`] if a value falls outside `bounds`, or
    /// [`LoadError::Profile`] if the rows violate a profile invariant.
    pub fn into_profile(
        self,
        id: impl Into<String>,
        bounds: &ProfileBounds,
    ) -> Result<AirfoilProfile, LoadError> {
        if self.is_empty() {
            return Err(LoadError::NoData);
        }
        bounds.check(&self)?;
        Ok(AirfoilProfile::from_degrees(
            id,
            self.alpha_deg,
            self.lift,
            self.drag,
        )?)
    }
}

/// Parses CSV profile data with a header row.
///
/// # Errors
///
/// Returns [`LoadError::MissingColumns`] if the header lacks an angle, lift or
/// drag column, or [`LoadError::Csv`] if the input is not readable CSV.
pub fn parse_csv<R: Read>(reader: R) -> Result<RawTable, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let (Some(alpha_idx), Some(lift_idx), Some(drag_idx)) = (
        find_column(&headers, &ALPHA_HEADERS),
        find_column(&headers, &LIFT_HEADERS),
        find_column(&headers, &DRAG_HEADERS),
    ) else {
        return Err(LoadError::MissingColumns {
            found: headers.iter().map(str::to_owned).collect(),
        });
    };

    let mut table = RawTable::default();
    for record in rdr.records() {
        let record = record?;
        if let (Some(alpha), Some(lift), Some(drag)) = (
            parse_cell(&record, alpha_idx),
            parse_cell(&record, lift_idx),
            parse_cell(&record, drag_idx),
        ) {
            table.push(alpha, lift, drag);
        }
    }

    Ok(table)
}

fn find_column(headers: &StringRecord, aliases: &[&str]) -> Option<usize> {
    aliases.iter().find_map(|alias| {
        headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(alias))
    })
}

fn parse_cell(record: &StringRecord, index: usize) -> Option<f64> {
    record.get(index)?.parse().ok()
}

/// Parses whitespace-delimited `alpha CL CD` rows.
///
/// Fields beyond the third are ignored.
#[must_use]
pub fn parse_text(text: &str) -> RawTable {
    let mut table = RawTable::default();

    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace().map(str::parse::<f64>);
        if let (Some(Ok(alpha)), Some(Ok(lift)), Some(Ok(drag))) =
            (fields.next(), fields.next(), fields.next())
        {
            table.push(alpha, lift, drag);
        }
    }

    table
}

/// Loads a profile from a `.csv` or text file.
///
/// The profile id is the upper-cased file stem, so `clark_y.csv` becomes
/// `CLARK_Y`.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be read or parsed, or if its
/// rows do not form a valid profile within `bounds`.
pub fn load_profile(path: &Path, bounds: &ProfileBounds) -> Result<AirfoilProfile, LoadError> {
    let stem = path
        .file_stem()
        .and_then(OsStr::to_str)
        .filter(|stem| !stem.trim().is_empty())
        .ok_or_else(|| LoadError::InvalidFileName(path.to_path_buf()))?;

    let file_name = path
        .file_name()
        .map(OsStr::to_string_lossy)
        .unwrap_or_default();

    // `Path::extension` is `None` for a bare `.csv`, so match the suffix.
    let is_csv = file_name.to_ascii_lowercase().ends_with(".csv");

    let table = if is_csv {
        parse_csv(File::open(path)?)?
    } else {
        parse_text(&fs::read_to_string(path)?)
    };

    Ok(table
        .into_profile(stem.to_uppercase(), bounds)?
        .with_description(format!("Custom profile loaded from {file_name}")))
}

/// Loads a profile file and adds it to `repository` under a unique id.
///
/// Returns the identifier the profile was stored under.
///
/// # Errors
///
/// Returns a [`LoadError`] under the same conditions as [`load_profile`];
/// the repository is left unchanged on error.
pub fn load_into(
    repository: &ProfileRepository,
    path: &Path,
    bounds: &ProfileBounds,
) -> Result<String, LoadError> {
    let profile = load_profile(path, bounds)?;
    Ok(repository.insert_unique(profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use approx::assert_relative_eq;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn csv_with_alias_headers() {
        let data = "AoA, Lift, Drag, Cm\n-5, -0.3, 0.02, 0.0\n0, 0.2, 0.01, 0.0\n5, 0.7, 0.015, 0.0\n";

        let table = parse_csv(data.as_bytes()).unwrap();

        assert_eq!(table.alpha_deg, vec![-5.0, 0.0, 5.0]);
        assert_eq!(table.lift, vec![-0.3, 0.2, 0.7]);
        assert_eq!(table.drag, vec![0.02, 0.01, 0.015]);
    }

    #[test]
    fn csv_prefers_canonical_names_and_any_column_order() {
        let data = "CD,lift,CL,alpha\n0.01,9,0.1,0\n0.02,9,0.6,5\n";

        let table = parse_csv(data.as_bytes()).unwrap();

        assert_eq!(table.lift, vec![0.1, 0.6]);
        assert_eq!(table.alpha_deg, vec![0.0, 5.0]);
    }

    #[test]
    fn csv_skips_unparsable_rows() {
        let data = "alpha,CL,CD\n0,0.1,0.01\nn/a,0.2,0.02\n5,,0.03\n10,1.0,0.04\n";

        let table = parse_csv(data.as_bytes()).unwrap();

        assert_eq!(table.alpha_deg, vec![0.0, 10.0]);
    }

    #[test]
    fn csv_missing_columns() {
        let data = "angle,CL,moment\n0,0.1,0.0\n";

        let err = parse_csv(data.as_bytes()).unwrap_err();

        match err {
            LoadError::MissingColumns { found } => {
                assert_eq!(found, vec!["angle", "CL", "moment"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn text_rows() {
        let text = "# alpha CL CD\n\n-5\t-0.3\t0.02\n0 0.2 0.01 extra\nbad row here\n5 0.7\n10 1.1 0.03\n";

        let table = parse_text(text);

        assert_eq!(table.alpha_deg, vec![-5.0, 0.0, 10.0]);
        assert_eq!(table.lift, vec![-0.3, 0.2, 1.1]);
        assert_eq!(table.drag, vec![0.02, 0.01, 0.03]);
    }

    #[test]
    fn empty_table_has_no_data() {
        let err = parse_text("# nothing\n")
            .into_profile("EMPTY", &ProfileBounds::default())
            .unwrap_err();

        assert!(matches!(err, LoadError::NoData));
    }

    #[test]
    fn bounds_are_enforced() {
        let table = RawTable {
            alpha_deg: vec![0.0, 10.0, 35.0],
            lift: vec![0.1, 0.9, 1.2],
            drag: vec![0.01, 0.02, 0.05],
        };

        let err = table
            .clone()
            .into_profile("STEEP", &ProfileBounds::default())
            .unwrap_err();
        match err {
            LoadError::OutOfRange {
                column,
                value,
                min,
                max,
            } => {
                assert_eq!(column, Column::Alpha);
                assert_relative_eq!(value, 35.0);
                assert_eq!((min, max), (-30.0, 30.0));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let relaxed = ProfileBounds {
            alpha_deg: -40.0..=40.0,
            ..ProfileBounds::default()
        };
        assert!(table.into_profile("STEEP", &relaxed).is_ok());
    }

    #[test]
    fn boundary_values_are_accepted() {
        let table = RawTable {
            alpha_deg: vec![-30.0, 0.0, 30.0],
            lift: vec![-3.0, 0.0, 3.0],
            drag: vec![0.0, 0.5, 1.0],
        };

        assert!(table.into_profile("EDGES", &ProfileBounds::default()).is_ok());
    }

    #[test]
    fn drag_above_one_is_rejected() {
        let table = RawTable {
            alpha_deg: vec![0.0, 5.0, 10.0],
            lift: vec![0.1, 0.5, 0.9],
            drag: vec![0.01, 0.02, 1.5],
        };

        let err = table
            .into_profile("DRAGGY", &ProfileBounds::default())
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::OutOfRange {
                column: Column::Drag,
                ..
            }
        ));
    }

    #[test]
    fn table_invariants_surface_as_profile_errors() {
        let table = RawTable {
            alpha_deg: vec![10.0, 5.0, 0.0],
            lift: vec![0.9, 0.5, 0.1],
            drag: vec![0.03, 0.02, 0.01],
        };

        let err = table
            .into_profile("DESC", &ProfileBounds::default())
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Profile(ProfileError::NotAscending { index: 1 })
        ));
    }

    #[test]
    fn load_csv_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "clark_y.CSV",
            "alpha,CL,CD\n-5,-0.1,0.015\n0,0.4,0.008\n5,0.9,0.012\n",
        );

        let profile = load_profile(&path, &ProfileBounds::default()).unwrap();

        assert_eq!(profile.id(), "CLARK_Y");
        assert_eq!(
            profile.description(),
            Some("Custom profile loaded from clark_y.CSV")
        );
        assert_eq!(profile.sample_count(), 3);
    }

    #[test]
    fn bare_csv_file_name_is_read_as_csv() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            ".csv",
            "alpha,CL,CD\n-5,-0.1,0.015\n0,0.4,0.008\n5,0.9,0.012\n",
        );

        let profile = load_profile(&path, &ProfileBounds::default()).unwrap();

        assert_eq!(profile.id(), ".CSV");
        assert_eq!(profile.lift_coefficients(), &[-0.1, 0.4, 0.9]);
    }

    #[test]
    fn load_text_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "e387.dat", "-5 -0.1 0.015\n0 0.4 0.008\n5 0.9 0.012\n");

        let profile = load_profile(&path, &ProfileBounds::default()).unwrap();

        assert_eq!(profile.id(), "E387");
        assert_eq!(profile.lift_coefficients(), &[-0.1, 0.4, 0.9]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.csv");

        let err = load_profile(&path, &ProfileBounds::default()).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn load_into_uses_unique_ids() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "wing.txt", "0 0.1 0.01\n5 0.6 0.02\n10 1.0 0.04\n");
        let repository = ProfileRepository::standard();

        let first = load_into(&repository, &path, &ProfileBounds::default()).unwrap();
        let second = load_into(&repository, &path, &ProfileBounds::default()).unwrap();

        assert_eq!(first, "WING");
        assert_eq!(second, "WING_1");
        assert_eq!(repository.len(), 10);
    }

    #[test]
    fn failed_load_leaves_repository_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "short.txt", "0 0.1 0.01\n5 0.6 0.02\n");
        let repository = ProfileRepository::new();

        let err = load_into(&repository, &path, &ProfileBounds::default()).unwrap_err();

        assert!(matches!(
            err,
            LoadError::Profile(ProfileError::TooFewSamples { found: 2, .. })
        ));
        assert!(repository.is_empty());
    }
}
