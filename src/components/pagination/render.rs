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

//! UI rendering logic for the page strip.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    components::{PageMarker, Pagination},
    theme::Theme,
};

const PREVIOUS_LABEL: &str = "‹ Prev";
const NEXT_LABEL: &str = "Next ›";
const ELLIPSIS: &str = "…";

impl Pagination {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let strip = Paragraph::new(self.strip(theme)).alignment(Alignment::Center);
        f.render_widget(strip, area);
    }

    /// Builds the strip as a single line: previous, page markers, next.
    ///
    /// The current page is highlighted, and the previous/next labels are
    /// dimmed when there is nowhere to go.
    pub(crate) fn strip(&self, theme: &Theme) -> Line<'static> {
        let enabled = Style::default().fg(theme.accent_colour);
        let disabled = Style::default().fg(theme.muted_colour);

        let mut spans = Vec::new();

        spans.push(Span::styled(
            PREVIOUS_LABEL,
            if self.has_previous() { enabled } else { disabled },
        ));
        spans.push(Span::raw(" "));

        for marker in self.markers() {
            let span = match marker {
                PageMarker::Page(page) if page == self.current_page() => Span::styled(
                    format!("[{}]", page),
                    Style::default()
                        .fg(theme.highlight_fg)
                        .bg(theme.highlight_bg)
                        .add_modifier(Modifier::BOLD),
                ),
                PageMarker::Page(page) => Span::raw(format!(" {} ", page)),
                PageMarker::Ellipsis => Span::styled(format!(" {} ", ELLIPSIS), disabled),
            };
            spans.push(span);
        }

        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            NEXT_LABEL,
            if self.has_next() { enabled } else { disabled },
        ));

        Line::from(spans)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn should_mark_current_page_and_ellipses() {
        let theme = Theme::default();
        let mut pagination = Pagination::new(10);
        pagination.set_total_items(100);
        pagination.goto(5);

        assert_eq!(
            text(&pagination.strip(&theme)),
            "‹ Prev  1  …  3  4 [5] 6  7  …  10  Next ›"
        );
    }

    #[test]
    fn should_dim_unavailable_arrows() {
        let theme = Theme::default();
        let pagination = Pagination::new(10);

        let line = pagination.strip(&theme);
        assert_eq!(text(&line), "‹ Prev [1] Next ›");

        let first = line.spans.first().unwrap();
        let last = line.spans.last().unwrap();
        assert_eq!(first.style.fg, Some(theme.muted_colour));
        assert_eq!(last.style.fg, Some(theme.muted_colour));
    }
}
