//! Input validation helpers shared by the statistics modules.

use crate::stats::error::{StatsError, StatsResult};

/// Reject empty input and non-finite values.
pub(crate) fn validate_sample(x: &[f64], context: &str) -> StatsResult<()> {
    if x.is_empty() {
        return Err(StatsError::EmptyData {
            context: context.to_string(),
        });
    }
    if let Some(&bad) = x.iter().find(|v| !v.is_finite()) {
        return Err(StatsError::InvalidParameter {
            name: context.to_string(),
            value: bad,
            reason: "observations must be finite".to_string(),
        });
    }
    Ok(())
}

/// Validate every group and require at least `min_groups` of them.
pub(crate) fn validate_groups<G: AsRef<[f64]>>(
    groups: &[G],
    min_groups: usize,
    context: &str,
) -> StatsResult<()> {
    if groups.len() < min_groups {
        return Err(StatsError::InsufficientData {
            required: min_groups,
            got: groups.len(),
            context: context.to_string(),
        });
    }
    for (i, g) in groups.iter().enumerate() {
        validate_sample(g.as_ref(), &format!("{} (group {})", context, i))?;
    }
    Ok(())
}

/// Concatenate groups into one vector, preserving order.
pub fn flatten<G: AsRef<[f64]>>(groups: &[G]) -> Vec<f64> {
    let total = groups.iter().map(|g| g.as_ref().len()).sum();
    let mut out = Vec::with_capacity(total);
    for g in groups {
        out.extend_from_slice(g.as_ref());
    }
    out
}
