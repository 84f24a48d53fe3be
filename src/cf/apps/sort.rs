//! Deterministic report ordering

use std::cmp::Ordering;

use super::aggregator::AppRecord;

/// Compare two records by (org, space, app name), byte-wise and case-sensitive
pub fn compare_app_records(a: &AppRecord, b: &AppRecord) -> Ordering {
    a.parent
        .org_name
        .cmp(&b.parent.org_name)
        .then_with(|| a.parent.space_name.cmp(&b.parent.space_name))
        .then_with(|| a.name.cmp(&b.name))
}

/// Sort records ascending; `sort_by` is stable so equal keys keep input order
pub fn sort_app_records(records: &mut [AppRecord]) {
    records.sort_by(compare_app_records);
}
