use crate::author::AuthorNormalizer;
use crate::model::{AuthorCredit, CommitRecord, CreditUser};
use std::borrow::Borrow;
use std::collections::btree_map::{self, BTreeMap};

/// Records between two progress notifications.
pub const PROGRESS_INTERVAL: usize = 100;

/// Folds commits into per-author credit statistics keyed by canonical name.
#[derive(Debug, Clone, Default)]
pub struct Credits {
    normalizer: AuthorNormalizer,
    users: BTreeMap<String, CreditUser>,
}

impl Credits {
    pub fn new(normalizer: AuthorNormalizer) -> Self {
        Self {
            normalizer,
            users: BTreeMap::new(),
        }
    }

    pub fn process_commit(&mut self, commit: &CommitRecord) {
        let author = self.normalizer.canonical(&commit.author);
        let year = commit.year();
        self.users
            .entry(author)
            .or_insert_with(|| CreditUser::new(year))
            .add_commit(year);
    }

    /// Process every commit in order, calling `progress` with the zero-based
    /// index of each record whose index is a multiple of [`PROGRESS_INTERVAL`].
    /// Returns the number of commits processed.
    pub fn process<I, F>(&mut self, commits: I, mut progress: F) -> usize
    where
        I: IntoIterator,
        I::Item: Borrow<CommitRecord>,
        F: FnMut(usize),
    {
        let mut processed = 0;
        for (index, commit) in commits.into_iter().enumerate() {
            self.process_commit(commit.borrow());
            if index % PROGRESS_INTERVAL == 0 {
                progress(index);
            }
            processed += 1;
        }
        processed
    }

    /// Fold a partial aggregate into this one.
    pub fn merge(&mut self, other: Credits) {
        for (name, user) in other.users {
            self.merge_user(name, user);
        }
    }

    fn merge_user(&mut self, name: String, user: CreditUser) {
        match self.users.entry(name) {
            btree_map::Entry::Occupied(mut entry) => entry.get_mut().merge(&user),
            btree_map::Entry::Vacant(entry) => {
                entry.insert(user);
            }
        }
    }

    pub fn get(&self, author: &str) -> Option<&CreditUser> {
        self.users.get(author)
    }

    /// Users in ascending canonical-name order.
    pub fn users(&self) -> impl Iterator<Item = (&str, &CreditUser)> {
        self.users.iter().map(|(name, user)| (name.as_str(), user))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn total_commits(&self) -> u64 {
        self.users.values().map(|u| u.commit_total as u64).sum()
    }

    pub fn to_author_credits(&self) -> Vec<AuthorCredit> {
        self.users()
            .map(|(name, user)| AuthorCredit {
                name: name.to_string(),
                commit_total: user.commit_total,
                year_min: user.year_min,
                year_max: user.year_max,
            })
            .collect()
    }
}

impl FromIterator<(String, CreditUser)> for Credits {
    fn from_iter<I: IntoIterator<Item = (String, CreditUser)>>(iter: I) -> Self {
        let mut credits = Credits::default();
        for (name, user) in iter {
            credits.merge_user(name, user);
        }
        credits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn commit(author: &str, year: i32) -> CommitRecord {
        CommitRecord {
            id: format!("{author}-{year}"),
            author: author.to_string(),
            timestamp: Utc.with_ymd_and_hms(year, 6, 15, 12, 0, 0).unwrap(),
            files: vec!["src/main.c".to_string()],
        }
    }

    fn snapshot(credits: &Credits) -> Vec<(String, CreditUser)> {
        credits.users().map(|(n, u)| (n.to_string(), *u)).collect()
    }

    #[test]
    fn aggregation_is_order_independent() {
        let mut forward = Credits::default();
        forward.process(vec![commit("A", 2020), commit("B", 2021), commit("A", 2022)], |_| {});

        let mut shuffled = Credits::default();
        shuffled.process(vec![commit("B", 2021), commit("A", 2020), commit("A", 2022)], |_| {});

        assert_eq!(snapshot(&forward), snapshot(&shuffled));
        assert_eq!(
            forward.get("A"),
            Some(&CreditUser { commit_total: 2, year_min: 2020, year_max: 2022 })
        );
        assert_eq!(
            forward.get("B"),
            Some(&CreditUser { commit_total: 1, year_min: 2021, year_max: 2021 })
        );
    }

    #[test]
    fn aliases_and_composition_collapse_to_one_user() {
        let mut credits = Credits::default();
        credits.process(
            vec![
                commit("mont29", 2012),
                commit("bastien", 2015),
                commit("Bastien Montagne", 2019),
                commit("Cle\u{301}ment", 2018),
                commit("Cl\u{e9}ment", 2020),
            ],
            |_| {},
        );
        assert_eq!(credits.len(), 2);
        assert_eq!(
            credits.get("Bastien Montagne"),
            Some(&CreditUser { commit_total: 3, year_min: 2012, year_max: 2019 })
        );
        assert_eq!(credits.get("Cl\u{e9}ment Foucault").map(|u| u.commit_total), Some(2));
    }

    #[test]
    fn totals_match_processed_count_and_years_stay_ordered() {
        let mut credits = Credits::default();
        let commits: Vec<_> = (0..250)
            .map(|i| commit(["x", "y", "z"][i % 3], 2000 + (i * 7 % 23) as i32))
            .collect();
        let processed = credits.process(&commits, |_| {});
        assert_eq!(processed, 250);
        assert_eq!(credits.total_commits(), 250);
        assert!(credits.users().all(|(_, u)| u.year_min <= u.year_max));
    }

    #[test]
    fn progress_fires_every_hundred_records() {
        let commits: Vec<_> = (0..250).map(|_| commit("A", 2020)).collect();
        let mut ticks = Vec::new();
        Credits::default().process(&commits, |i| ticks.push(i));
        assert_eq!(ticks, vec![0, 100, 200]);
    }

    #[test]
    fn users_iterate_in_name_order() {
        let mut credits = Credits::default();
        credits.process(vec![commit("Zoe", 2020), commit("Ada", 2020), commit("Mia", 2020)], |_| {});
        let names: Vec<_> = credits.users().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Ada", "Mia", "Zoe"]);
    }

    #[test]
    fn merged_partitions_equal_sequential_run() {
        let all = vec![
            commit("A", 2020),
            commit("B", 2021),
            commit("A", 2022),
            commit("C", 2010),
            commit("B", 2018),
        ];

        let mut sequential = Credits::default();
        sequential.process(&all, |_| {});

        let mut left = Credits::default();
        left.process(&all[..2], |_| {});
        let mut right = Credits::default();
        right.process(&all[2..], |_| {});

        let mut right_first = right.clone();
        right_first.merge(left.clone());
        left.merge(right);

        assert_eq!(snapshot(&left), snapshot(&sequential));
        assert_eq!(snapshot(&right_first), snapshot(&sequential));
    }
}
