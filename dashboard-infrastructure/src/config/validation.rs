use std::collections::HashSet;

use anyhow::{anyhow, Result};

use dashboard_domain::AnomalyRecord;

/// Rejects a record set that could not have been written down by hand
/// correctly. Runs once at load time; rendering never re-checks.
pub fn validate_records(records: &[AnomalyRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        validate_record(record)
            .map_err(|err| anyhow!("record #{} ({}): {}", index, record.transaction_id, err))?;
        if !seen.insert(record.transaction_id.as_str()) {
            return Err(anyhow!(
                "record #{}: duplicate transactionId '{}'",
                index,
                record.transaction_id
            ));
        }
    }
    Ok(())
}

pub fn validate_record(record: &AnomalyRecord) -> Result<()> {
    if record.transaction_id.as_str().trim().is_empty() {
        return Err(anyhow!("transactionId is empty"));
    }
    if !is_upper_code(&record.currency, 3) {
        return Err(anyhow!(
            "currency must be 3 uppercase letters, got '{}'",
            record.currency
        ));
    }
    if !is_upper_code(&record.country, 2) {
        return Err(anyhow!(
            "country must be 2 uppercase letters, got '{}'",
            record.country
        ));
    }
    if !record.amount.is_finite() || record.amount < 0.0 {
        return Err(anyhow!("amount must be a finite, non-negative number"));
    }
    if !record.score.is_finite() {
        return Err(anyhow!("score must be a finite number"));
    }
    Ok(())
}

fn is_upper_code(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|ch| ch.is_ascii_uppercase())
}
