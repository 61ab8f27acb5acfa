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

//! Input handling for the page strip.
//!
//! Keys are mapped to the page the user is asking for. Nothing is changed
//! here, the caller decides whether to apply the request.

use crossterm::event::{Event, KeyCode};

use crate::components::Pagination;

impl Pagination {
    /// Returns the page requested by `event`, if any.
    ///
    /// Requests past either end are dropped, just as the strip's previous
    /// and next arrows are disabled on the first and last page.
    pub(crate) fn process_event(&self, event: &Event) -> Option<usize> {
        let Event::Key(key_event) = event else {
            return None;
        };

        let last = self.total_pages().get();

        let page = match key_event.code {
            KeyCode::Char('[') if self.has_previous() => self.current_page() - 1,
            KeyCode::Char(']') if self.has_next() => self.current_page() + 1,
            KeyCode::Char('{') => 1,
            KeyCode::Char('}') => last,
            _ => return None,
        };

        (page != self.current_page()).then_some(page)
    }
}

#[cfg(test)]
mod test {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn should_request_adjacent_pages() {
        let mut pagination = Pagination::new(10);
        pagination.set_total_items(50);
        pagination.goto(3);

        assert_eq!(pagination.process_event(&key('[')), Some(2));
        assert_eq!(pagination.process_event(&key(']')), Some(4));
        assert_eq!(pagination.process_event(&key('{')), Some(1));
        assert_eq!(pagination.process_event(&key('}')), Some(5));

        // The state itself is untouched
        assert_eq!(pagination.current_page(), 3);
    }

    #[test]
    fn should_ignore_requests_past_the_ends() {
        let mut pagination = Pagination::new(10);
        pagination.set_total_items(50);

        assert_eq!(pagination.process_event(&key('[')), None);
        assert_eq!(pagination.process_event(&key('{')), None);

        pagination.goto(5);
        assert_eq!(pagination.process_event(&key(']')), None);
        assert_eq!(pagination.process_event(&key('}')), None);
    }

    #[test]
    fn should_ignore_other_keys() {
        let pagination = Pagination::new(10);
        assert_eq!(pagination.process_event(&key('x')), None);
    }
}
