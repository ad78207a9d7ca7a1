use log::debug;
use rand::Rng;

use crate::error::{Result, SharedError};
use crate::models::stage::{reference_records, InformationalRecord, StageClass};

/// Validated, non-empty set of stage records.
#[derive(Debug, Clone, PartialEq)]
pub struct StageCatalog {
    records: Vec<InformationalRecord>,
}

impl StageCatalog {
    pub fn new(records: Vec<InformationalRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(SharedError::Configuration(
                "stage catalog must contain at least one record".to_string(),
            ));
        }
        for record in &records {
            record.validate()?;
        }
        debug!("Stage catalog built with {} records", records.len());
        Ok(Self { records })
    }

    pub fn reference() -> Result<Self> {
        Self::new(reference_records())
    }

    /// Parse a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<InformationalRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[InformationalRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&InformationalRecord> {
        self.records.get(index)
    }

    pub fn by_class(&self, class: StageClass) -> Option<&InformationalRecord> {
        self.records.iter().find(|r| r.class == class)
    }

    /// Uniform index in `[0, len)`.
    pub fn pick_index<R: Rng>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.records.len())
    }

    pub fn pick<R: Rng>(&self, rng: &mut R) -> &InformationalRecord {
        &self.records[self.pick_index(rng)]
    }
}
