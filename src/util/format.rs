// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use chrono::DateTime;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const WEEK_MS: i64 = 7 * DAY_MS;

/// Formats when something was played, relative to `now`.
///
/// Recent plays are shown as an elapsed time, anything older than a week
/// as a date. Both arguments are epoch milliseconds.
///
/// ```text
/// 30 seconds ago  -> "just now"
/// 5 minutes ago   -> "5m ago"
/// 10 days ago     -> "2023-11-14"
/// ```
pub(crate) fn format_elapsed(played_at: i64, now: i64) -> String {
    let elapsed = now.saturating_sub(played_at).max(0);

    match elapsed {
        e if e < MINUTE_MS => "just now".to_string(),
        e if e < HOUR_MS => format!("{}m ago", e / MINUTE_MS),
        e if e < DAY_MS => format!("{}h ago", e / HOUR_MS),
        e if e < WEEK_MS => format!("{}d ago", e / DAY_MS),
        _ => DateTime::from_timestamp_millis(played_at)
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
    }
}
