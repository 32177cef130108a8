use std::{fs, path::Path};

use schedule_ast::TimeSlot;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Counts gathered while converting one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub courses: usize,
    pub groups: usize,
    pub slots: usize,
    /// Slots that did not match and were written as `null`.
    pub unmatched: usize,
}

pub fn load(path: &Path) -> Result<Value> {
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document = serde_json::from_slice(&bytes).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), bytes = bytes.len(), "loaded document");
    Ok(document)
}

/// Replaces every `courses[*].groups[*].time_slots` string with a parsed
/// [`TimeSlot`] object, or `null` when the string does not match.
///
/// Order and length of each `time_slots` array are kept and no other field is
/// touched. On error the document may be partially converted and should be
/// discarded.
pub fn convert(document: &mut Value) -> Result<ConversionReport> {
    let mut report = ConversionReport::default();

    let courses = array_field(document, "courses", "")?;
    for (course_idx, course) in courses.iter_mut().enumerate() {
        let course_at = format!("courses[{course_idx}]");
        let groups = array_field(course, "groups", &course_at)?;

        for (group_idx, group) in groups.iter_mut().enumerate() {
            let group_at = format!("{course_at}.groups[{group_idx}]");
            let slots_at = format!("{group_at}.time_slots");
            let raw_slots = array_field(group, "time_slots", &group_at)?;

            let mut converted = Vec::with_capacity(raw_slots.len());
            for (slot_idx, raw) in raw_slots.iter().enumerate() {
                let raw = raw
                    .as_str()
                    .ok_or_else(|| Error::structure(format!("{slots_at}[{slot_idx}]"), "a string"))?;

                let slot = slot_parser::parse(raw);
                match &slot {
                    Some(slot) if slot.is_inverted() => {
                        debug!(location = %slots_at, index = slot_idx, ?slot, "slot ends before it starts")
                    }
                    Some(_) => {}
                    None => {
                        warn!(location = %slots_at, index = slot_idx, raw, "unrecognised time slot, writing null");
                        report.unmatched += 1;
                    }
                }
                converted.push(slot);
            }

            report.slots += converted.len();
            *raw_slots = encode_slots(converted)?;
            debug!(location = %group_at, "converted group");
            report.groups += 1;
        }

        report.courses += 1;
    }

    Ok(report)
}

/// Writes the document with two-space indentation, replacing whatever
/// `path` held. The write is not atomic.
pub fn save(path: &Path, document: &Value) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(document)?;
    fs::write(path, &bytes).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), bytes = bytes.len(), "saved document");
    Ok(())
}

fn array_field<'a>(value: &'a mut Value, key: &str, location: &str) -> Result<&'a mut Vec<Value>> {
    let field_at = if location.is_empty() {
        key.to_string()
    } else {
        format!("{location}.{key}")
    };

    let object = value.as_object_mut().ok_or_else(|| {
        let at = if location.is_empty() { "document root" } else { location };
        Error::structure(at, "an object")
    })?;

    object
        .get_mut(key)
        .ok_or_else(|| Error::structure(field_at.clone(), "a field"))?
        .as_array_mut()
        .ok_or_else(|| Error::structure(field_at, "an array"))
}

fn encode_slots(slots: Vec<Option<TimeSlot>>) -> Result<Vec<Value>> {
    slots
        .into_iter()
        .map(|slot| serde_json::to_value(slot).map_err(Error::from))
        .collect()
}
