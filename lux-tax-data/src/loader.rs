use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use lux_tax_core::{
    BracketSchedule, FilingMethod, ScheduleError, TaxBracket, TaxationEngine,
    luxembourg_individual, luxembourg_joint,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading bracket schedules.
#[derive(Debug, Error)]
pub enum ScheduleLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Invalid filing method '{0}' (expected 'joint' or 'individual')")]
    InvalidMethod(String),

    #[error("No brackets found for the {0} schedule")]
    MissingSchedule(FilingMethod),

    #[error("Invalid {method} schedule: {source}")]
    Schedule {
        method: FilingMethod,
        #[source]
        source: ScheduleError,
    },

    #[error("Cannot write schedules: {0}")]
    Write(#[source] csv::Error),

    #[error("Cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<csv::Error> for ScheduleLoaderError {
    fn from(err: csv::Error) -> Self {
        ScheduleLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a bracket schedule CSV file.
///
/// - `schedule`: filing method the bracket belongs to (`joint` or `individual`)
/// - `min_income`: inclusive lower bound
/// - `max_income`: exclusive upper bound (empty for unlimited)
/// - `rate`: marginal rate as a decimal (e.g., 0.39 for 39%)
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ScheduleRecord {
    pub schedule: String,
    pub min_income: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// The joint and individual schedules an engine is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSet {
    pub joint: BracketSchedule,
    pub individual: BracketSchedule,
}

impl ScheduleSet {
    /// The schedules compiled into `lux-tax-core`.
    pub fn luxembourg() -> Self {
        Self {
            joint: luxembourg_joint(),
            individual: luxembourg_individual(),
        }
    }

    pub fn get(
        &self,
        method: FilingMethod,
    ) -> &BracketSchedule {
        match method {
            FilingMethod::Joint => &self.joint,
            FilingMethod::Individual => &self.individual,
        }
    }

    pub fn into_engine(self) -> TaxationEngine {
        TaxationEngine::new(self.joint, self.individual)
    }
}

/// Loader for bracket schedules stored as CSV.
pub struct ScheduleLoader;

impl ScheduleLoader {
    /// Parse schedule records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ScheduleRecord>, ScheduleLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: ScheduleRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Group records by filing method and validate each group into a schedule.
    ///
    /// Records keep their file order within a group, so each schedule must be
    /// listed from the lowest bracket up.
    pub fn build(records: &[ScheduleRecord]) -> Result<ScheduleSet, ScheduleLoaderError> {
        let mut groups: HashMap<FilingMethod, Vec<TaxBracket>> = HashMap::new();

        for record in records {
            let method = FilingMethod::parse(&record.schedule)
                .ok_or_else(|| ScheduleLoaderError::InvalidMethod(record.schedule.clone()))?;
            groups.entry(method).or_default().push(TaxBracket::new(
                record.min_income,
                record.max_income,
                record.rate,
            ));
        }

        let mut take = |method: FilingMethod| -> Result<BracketSchedule, ScheduleLoaderError> {
            let brackets = groups
                .remove(&method)
                .ok_or(ScheduleLoaderError::MissingSchedule(method))?;
            debug!(%method, brackets = brackets.len(), "validating schedule");
            BracketSchedule::new(brackets)
                .map_err(|source| ScheduleLoaderError::Schedule { method, source })
        };

        Ok(ScheduleSet {
            joint: take(FilingMethod::Joint)?,
            individual: take(FilingMethod::Individual)?,
        })
    }

    /// Read, parse and validate a schedule file.
    pub fn load_from_file(path: &Path) -> Result<ScheduleSet, ScheduleLoaderError> {
        let file = File::open(path).map_err(|source| ScheduleLoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records = Self::parse(file)?;
        debug!(path = %path.display(), records = records.len(), "parsed schedule file");
        Self::build(&records)
    }

    /// Flatten a schedule set back into CSV records, joint schedule first.
    pub fn records(schedules: &ScheduleSet) -> Vec<ScheduleRecord> {
        FilingMethod::all()
            .iter()
            .flat_map(|method| {
                schedules
                    .get(*method)
                    .brackets()
                    .iter()
                    .map(move |b| ScheduleRecord {
                        schedule: method.as_str().to_string(),
                        min_income: b.min_income,
                        max_income: b.max_income,
                        rate: b.tax_rate,
                    })
            })
            .collect()
    }

    /// Write a schedule set as CSV in the format [`ScheduleLoader::parse`] reads.
    pub fn write<W: Write>(
        writer: W,
        schedules: &ScheduleSet,
    ) -> Result<(), ScheduleLoaderError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in Self::records(schedules) {
            csv_writer
                .serialize(record)
                .map_err(ScheduleLoaderError::Write)?;
        }
        csv_writer
            .flush()
            .map_err(|e| ScheduleLoaderError::Write(e.into()))
    }
}
