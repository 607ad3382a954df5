//! Date/time display utilities.
//!
//! Wraps stored timestamp text so it can be dropped into `format!` and
//! `writeln!` calls and come out in the friendly form produced by
//! [`crate::timestamp::format_display`].

use std::fmt;

use crate::timestamp::format_display;

/// A stored timestamp shown through the `Display` trait.
///
/// # Format
///
/// `17th October 2025, Friday, 5 pm`, with minutes when they are non-zero
/// (`5:07 pm`). Empty text shows as `—`; text that is not a date-time is
/// shown unchanged.
///
/// # Examples
///
/// ```rust
/// use taskdb_core::display::FriendlyTime;
///
/// assert_eq!(
///     FriendlyTime("2025-10-17T17:07:00").to_string(),
///     "17th October 2025, Friday, 5:07 pm"
/// );
/// assert_eq!(FriendlyTime("").to_string(), "—");
/// ```
pub struct FriendlyTime<'a>(pub &'a str);

impl<'a> fmt::Display for FriendlyTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_display(self.0))
    }
}
