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

//! League data shaping.
//!
//! Helpers that clean up freshly loaded leagues and derive the aggregate
//! views shown in the UI: leagues grouped by category, and the top of a
//! league's standings.

use std::{cmp::Ordering, collections::BTreeMap};

use crate::model::{League, Standing};

pub(crate) const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Fills in the values older fixtures leave out.
///
/// * A missing id becomes a slug of the title.
/// * A missing category becomes [`DEFAULT_CATEGORY`].
/// * Rounds without an id are numbered in fixture order.
/// * Standings are sorted best first, and any missing rank is assigned with
///   competition ranking, so equal points share a rank.
pub(crate) fn normalize_league(mut league: League) -> League {
    league.title = league.title.trim().to_string();

    if league.id.trim().is_empty() {
        league.id = slugify(&league.title);
    }

    league.category = league.category.trim().to_string();
    if league.category.is_empty() {
        league.category = DEFAULT_CATEGORY.to_string();
    }

    for (index, round) in league.rounds.iter_mut().enumerate() {
        if round.id.trim().is_empty() {
            round.id = format!("round-{}", index + 1);
        }
    }

    league.league_standings.sort_by(compare_standings);

    let mut previous: Option<(i64, u32)> = None;
    for (index, standing) in league.league_standings.iter_mut().enumerate() {
        let rank = match previous {
            Some((points, rank)) if points == standing.points => rank,
            _ => index as u32 + 1,
        };
        previous = Some((standing.points, rank));

        standing.rank.get_or_insert(rank);
    }

    league
}

/// Orders leagues by category, then title.
pub(crate) fn sort_leagues(leagues: &mut [League]) {
    leagues.sort_by(|a, b| {
        a.category
            .to_lowercase()
            .cmp(&b.category.to_lowercase())
            .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
    });
}

pub(crate) fn group_by_category(leagues: &[League]) -> BTreeMap<&str, Vec<&League>> {
    let mut groups: BTreeMap<&str, Vec<&League>> = BTreeMap::new();
    for league in leagues {
        groups.entry(league.category.as_str()).or_default().push(league);
    }
    groups
}

/// Returns leagues whose category matches `category`, ignoring case.
///
/// With no category every league is returned.
pub(crate) fn filter_by_category<'a>(leagues: &'a [League], category: Option<&str>) -> Vec<&'a League> {
    match category {
        Some(category) => leagues
            .iter()
            .filter(|l| l.category.eq_ignore_ascii_case(category))
            .collect(),
        None => leagues.iter().collect(),
    }
}

/// Returns the best `n` standings, most points first.
pub(crate) fn top_standings(standings: &[Standing], n: usize) -> Vec<&Standing> {
    let mut ranked: Vec<&Standing> = standings.iter().collect();
    ranked.sort_by(|a, b| compare_standings(a, b));
    ranked.truncate(n);
    ranked
}

fn compare_standings(a: &Standing, b: &Standing) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::Round;

    fn standing(name: &str, points: i64) -> Standing {
        Standing {
            name: name.to_string(),
            points,
            rank: None,
        }
    }

    fn league(title: &str, category: &str) -> League {
        League {
            id: String::new(),
            title: title.to_string(),
            category: category.to_string(),
            rounds: vec![],
            league_standings: vec![],
        }
    }

    #[test]
    fn should_fill_missing_id_and_category() {
        let league = normalize_league(league("  Friends & Family: Season 2 ", ""));
        assert_eq!(league.title, "Friends & Family: Season 2");
        assert_eq!(league.id, "friends-family-season-2");
        assert_eq!(league.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn should_keep_existing_id() {
        let mut l = league("Work League", "Office");
        l.id = "work-2024".to_string();
        let l = normalize_league(l);
        assert_eq!(l.id, "work-2024");
        assert_eq!(l.category, "Office");
    }

    #[test]
    fn should_number_rounds_without_ids() {
        let mut l = league("Work League", "Office");
        l.rounds = vec![
            Round { id: String::new(), name: "Covers".to_string(), description: None, playlist_url: None, submissions: vec![] },
            Round { id: "custom".to_string(), name: "Duets".to_string(), description: None, playlist_url: None, submissions: vec![] },
            Round { id: String::new(), name: "B-Sides".to_string(), description: None, playlist_url: None, submissions: vec![] },
        ];
        let l = normalize_league(l);
        let ids: Vec<&str> = l.rounds.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["round-1", "custom", "round-3"]);
    }

    #[test]
    fn should_rank_standings_with_shared_ranks_for_ties() {
        let mut l = league("Work League", "Office");
        l.league_standings = vec![
            standing("dave", 10),
            standing("alice", 30),
            standing("carol", 20),
            standing("bob", 20),
        ];
        let l = normalize_league(l);

        let ranked: Vec<(&str, Option<u32>)> = l
            .league_standings
            .iter()
            .map(|s| (s.name.as_str(), s.rank))
            .collect();
        assert_eq!(
            ranked,
            [("alice", Some(1)), ("bob", Some(2)), ("carol", Some(2)), ("dave", Some(4))]
        );
    }

    #[test]
    fn should_keep_ranks_given_by_fixture() {
        let mut l = league("Work League", "Office");
        l.league_standings = vec![
            Standing { name: "alice".to_string(), points: 30, rank: Some(7) },
            standing("bob", 20),
        ];
        let l = normalize_league(l);
        assert_eq!(l.league_standings[0].rank, Some(7));
        assert_eq!(l.league_standings[1].rank, Some(2));
    }

    #[test]
    fn should_return_top_standings_in_order() {
        let standings = vec![
            standing("dave", 10),
            standing("alice", 30),
            standing("Carol", 20),
            standing("bob", 20),
        ];

        let top: Vec<&str> = top_standings(&standings, 3).iter().map(|s| s.name.as_str()).collect();
        assert_eq!(top, ["alice", "bob", "Carol"]);

        assert_eq!(top_standings(&standings, 10).len(), 4);
        assert!(top_standings(&[], 3).is_empty());
    }

    #[test]
    fn should_group_and_filter_by_category() {
        let mut leagues = vec![
            normalize_league(league("Zeta", "Rock")),
            normalize_league(league("Alpha", "indie")),
            normalize_league(league("Beta", "Rock")),
            normalize_league(league("Gamma", "")),
        ];
        sort_leagues(&mut leagues);

        let titles: Vec<&str> = leagues.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, ["Alpha", "Beta", "Zeta", "Gamma"]);

        let groups = group_by_category(&leagues);
        let keys: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(keys, ["Rock", DEFAULT_CATEGORY, "indie"]);
        assert_eq!(groups["Rock"].len(), 2);

        let rock: Vec<&str> = filter_by_category(&leagues, Some("ROCK"))
            .iter()
            .map(|l| l.title.as_str())
            .collect();
        assert_eq!(rock, ["Beta", "Zeta"]);
        assert_eq!(filter_by_category(&leagues, None).len(), 4);
        assert!(filter_by_category(&leagues, Some("jazz")).is_empty());
    }

    #[test]
    fn should_report_league_leader() {
        let mut l = league("Work League", "Office");
        assert!(l.leader().is_none());

        l.league_standings = vec![standing("bob", 5), standing("alice", 9)];
        assert_eq!(l.leader().map(|s| s.name.as_str()), Some("alice"));
    }
}
