use once_cell::sync::Lazy;
use regex::Regex;
use schedule_ast::TimeSlot;

// Anchored at the start only: anything after the end time is ignored.
// The day is letters, digits and underscore; combining marks do not count.
// The separator also accepts the \x1c-\x1f information separators.
static SLOT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([\p{L}\p{N}_]+)[\s\x1c-\x1f](\d{2}:\d{2})-(\d{2}:\d{2})")
        .expect("time slot pattern is valid")
});

/// Parses `"<day> <HH:MM>-<HH:MM>"` into a [`TimeSlot`].
///
/// This is best-effort: a string that does not match yields `None` rather
/// than an error, and the caller decides what a missing slot means. Captures
/// are copied verbatim, so `"Monday 25:00-26:00"` still parses.
pub fn parse(raw: &str) -> Option<TimeSlot> {
    let captures = SLOT_PATTERN.captures(raw)?;

    Some(TimeSlot::new(&captures[1], &captures[2], &captures[3]))
}
