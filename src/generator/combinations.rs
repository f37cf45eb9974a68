//! Group-combination timetable generator.
//!
//! # Algorithm
//!
//! 1. Drop repeated course codes from the selection (first position wins).
//! 2. Start from a single empty candidate.
//! 3. For each selected course, extend every candidate with every group
//!    bundle of that course. Unless overlaps are allowed, keep an extension
//!    only if the bundle is collision-free internally and against every
//!    session already in the candidate.
//! 4. If a course leaves no candidate, stop: nothing can satisfy the
//!    remaining courses.
//! 5. Score every finished candidate and stable-sort by descending score.
//!
//! # Complexity
//! Worst case O(g^c) candidates for c courses of g groups each; pruning in
//! step 3 keeps only live partial candidates in memory.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::{GenerateRequest, Preference};
use crate::catalog::Catalog;
use crate::models::{GroupBundle, Session, Timetable};

/// Enumerates and ranks timetables over a catalog.
///
/// # Example
///
/// ```
/// use u_timetable::catalog::Catalog;
/// use u_timetable::generator::{Preference, ScheduleGenerator};
/// use u_timetable::models::{Session, Weekday};
///
/// let catalog = Catalog::from_sessions(vec![
///     Session::new("EA", "10", Weekday::Monday, 8, 2).with_weeks(1..=13),
///     Session::new("EA", "11", Weekday::Monday, 15, 2).with_weeks(1..=13),
///     Session::new("FO", "1", Weekday::Monday, 9, 1).with_weeks(1..=13),
/// ]);
/// let generator = ScheduleGenerator::new(catalog);
///
/// let timetables = generator.generate(&["EA", "FO"], Preference::EarlyPreferred, false);
/// assert_eq!(timetables.len(), 1);
/// assert_eq!(timetables[0].session_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleGenerator {
    catalog: Catalog,
}

impl ScheduleGenerator {
    /// Creates a generator over a catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog this generator reads.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Distinct course codes in the catalog, sorted.
    pub fn available_courses(&self) -> Vec<String> {
        self.catalog.courses()
    }

    /// Generates timetables for the selected courses, best score first.
    ///
    /// Returns an empty list when nothing is selected, when a selected
    /// course is unknown, or when no conflict-free combination exists.
    /// Equal scores keep generation order: selection order, then each
    /// course's bundle order.
    pub fn generate<S: AsRef<str>>(
        &self,
        courses: &[S],
        preference: Preference,
        allow_overlap: bool,
    ) -> Vec<Timetable> {
        let mut seen = HashSet::new();
        let courses: Vec<&str> = courses
            .iter()
            .map(AsRef::as_ref)
            .filter(|c| seen.insert(*c))
            .collect();

        if courses.is_empty() {
            debug!("no course selected");
            return Vec::new();
        }

        let mut candidates: Vec<Vec<Session>> = vec![Vec::new()];

        for course in &courses {
            let bundles: Vec<&GroupBundle> = self
                .catalog
                .bundles(course)
                .iter()
                .filter(|b| allow_overlap || !b.self_collides())
                .collect();

            let mut extended = Vec::with_capacity(candidates.len() * bundles.len());
            for candidate in &candidates {
                for bundle in &bundles {
                    if !allow_overlap && bundle.collides_with_any(candidate) {
                        trace!(course, group = %bundle.group, "extension pruned");
                        continue;
                    }
                    let mut sessions = Vec::with_capacity(candidate.len() + bundle.sessions.len());
                    sessions.extend_from_slice(candidate);
                    sessions.extend_from_slice(&bundle.sessions);
                    extended.push(sessions);
                }
            }

            debug!(
                course,
                groups = bundles.len(),
                candidates = extended.len(),
                "course expanded"
            );

            if extended.is_empty() {
                debug!(course, "no feasible combination");
                return Vec::new();
            }
            candidates = extended;
        }

        let mut timetables: Vec<Timetable> = candidates
            .into_iter()
            .map(|sessions| {
                let score = preference.score(&sessions);
                Timetable::new(sessions, score)
            })
            .collect();

        // Stable: equal scores keep generation order.
        timetables.sort_by(|a, b| b.score.cmp(&a.score));

        debug!(
            courses = courses.len(),
            ?preference,
            allow_overlap,
            timetables = timetables.len(),
            "timetables generated"
        );
        timetables
    }

    /// Generates timetables from a request.
    pub fn generate_request(&self, request: &GenerateRequest) -> Vec<Timetable> {
        self.generate(&request.courses, request.preference, request.allow_overlap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GroupId, SessionKind, Weekday};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn weekly(course: &str, group: &str, day: Weekday, start: u32, duration: u32) -> Session {
        Session::new(course, group, day, start, duration).with_weeks(1..=13)
    }

    fn generator(sessions: Vec<Session>) -> ScheduleGenerator {
        ScheduleGenerator::new(Catalog::from_sessions(sessions))
    }

    /// A: "10" Mon 8-10, "11" Mon 8-10. B: "1" Mon 9-10.
    fn clashing_pair() -> ScheduleGenerator {
        generator(vec![
            weekly("A", "10", Weekday::Monday, 8, 2),
            weekly("A", "11", Weekday::Monday, 8, 2),
            weekly("B", "1", Weekday::Monday, 9, 1),
        ])
    }

    fn group_keys(t: &Timetable) -> Vec<String> {
        t.groups()
            .into_iter()
            .map(|(c, g)| format!("{c}{g}"))
            .collect()
    }

    #[test]
    fn test_available_courses() {
        let g = generator(vec![
            weekly("FO", "1", Weekday::Monday, 8, 1),
            weekly("EA", "1", Weekday::Monday, 8, 1),
            weekly("FO", "2", Weekday::Friday, 8, 1),
        ]);
        assert_eq!(g.available_courses(), vec!["EA", "FO"]);
        assert_eq!(g.catalog().len(), 3);
    }

    #[test]
    fn test_empty_selection() {
        let g = clashing_pair();
        let none: [&str; 0] = [];
        assert!(g.generate(&none, Preference::EarlyPreferred, true).is_empty());
    }

    #[test]
    fn test_unknown_course_empties_result() {
        let g = clashing_pair();
        assert!(g.generate(&["A", "ZZ"], Preference::NoPreference, true).is_empty());
        assert!(g.generate(&["ZZ"], Preference::NoPreference, true).is_empty());
    }

    #[test]
    fn test_all_groups_collide() {
        let g = clashing_pair();
        assert!(g.generate(&["A", "B"], Preference::EarlyPreferred, false).is_empty());
    }

    #[test]
    fn test_overlap_allowed_keeps_collisions() {
        let g = clashing_pair();
        let result = g.generate(&["A", "B"], Preference::EarlyPreferred, true);
        assert_eq!(result.len(), 2);
        for t in &result {
            assert_eq!(t.session_count(), 2);
            assert!(t.has_collision());
            // 8 -> 14, 9 -> 13, plus B at 9 -> 13
            assert_eq!(t.score, 40);
        }
        assert_eq!(group_keys(&result[0]), vec!["A10", "B1"]);
        assert_eq!(group_keys(&result[1]), vec!["A11", "B1"]);

        let late = g.generate(&["A", "B"], Preference::LatePreferred, true);
        assert!(late.iter().all(|t| t.score == 0));
    }

    #[test]
    fn test_single_course_yields_each_group() {
        let g = generator(vec![
            weekly("A", "1", Weekday::Monday, 8, 2),
            weekly("A", "2", Weekday::Monday, 8, 2),
            weekly("A", "3", Weekday::Tuesday, 8, 2),
            weekly("A", "4", Weekday::Monday, 9, 2),
        ]);
        assert_eq!(g.generate(&["A"], Preference::NoPreference, true).len(), 4);
        // Groups of one course never compete with each other.
        assert_eq!(g.generate(&["A"], Preference::NoPreference, false).len(), 4);
    }

    #[test]
    fn test_bundle_is_atomic() {
        let g = generator(vec![
            weekly("A", "1", Weekday::Monday, 8, 2),
            weekly("A", "1", Weekday::Wednesday, 15, 2).with_kind(SessionKind::Lab),
            weekly("B", "1", Weekday::Wednesday, 16, 1),
            weekly("B", "2", Weekday::Thursday, 16, 1),
        ]);
        let result = g.generate(&["A", "B"], Preference::NoPreference, false);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].session_count(), 3);
        assert_eq!(result[0].group_for("A"), Some(&GroupId::from("1")));
        assert_eq!(result[0].group_for("B"), Some(&GroupId::from("2")));
    }

    #[test]
    fn test_self_colliding_bundle_excluded() {
        let g = generator(vec![
            weekly("A", "1", Weekday::Monday, 8, 2),
            weekly("A", "1", Weekday::Monday, 9, 1).with_kind(SessionKind::Problems),
            weekly("A", "2", Weekday::Tuesday, 8, 2),
        ]);
        let strict = g.generate(&["A"], Preference::NoPreference, false);
        assert_eq!(strict.len(), 1);
        assert_eq!(strict[0].group_for("A"), Some(&GroupId::from("2")));

        let loose = g.generate(&["A"], Preference::NoPreference, true);
        assert_eq!(loose.len(), 2);
    }

    #[test]
    fn test_disjoint_weeks_do_not_conflict() {
        let g = generator(vec![
            Session::new("A", "1", Weekday::Monday, 15, 2).with_weeks([1, 3, 5]),
            Session::new("B", "1", Weekday::Monday, 15, 2).with_weeks([2, 4, 6]),
        ]);
        let result = g.generate(&["A", "B"], Preference::LatePreferred, false);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].score, 15 + 16 + 15 + 16);
    }

    #[test]
    fn test_sorted_by_preference() {
        let g = generator(vec![
            weekly("A", "late", Weekday::Monday, 17, 2),
            weekly("A", "early", Weekday::Monday, 8, 2),
            weekly("A", "noon", Weekday::Monday, 12, 2),
        ]);

        let early = g.generate(&["A"], Preference::EarlyPreferred, false);
        let order: Vec<_> = early.iter().map(|t| t.group_for("A").cloned()).collect();
        assert_eq!(
            order,
            vec![
                Some(GroupId::from("early")),
                Some(GroupId::from("noon")),
                Some(GroupId::from("late"))
            ]
        );
        assert_eq!(early[0].score, 14 + 13);

        let late = g.generate(&["A"], Preference::LatePreferred, false);
        assert_eq!(late[0].group_for("A"), Some(&GroupId::from("late")));
        // Remaining two tie at 0 and keep catalog order.
        assert_eq!(late[1].group_for("A"), Some(&GroupId::from("early")));
        assert_eq!(late[2].group_for("A"), Some(&GroupId::from("noon")));
    }

    #[test]
    fn test_no_preference_keeps_generation_order() {
        let g = generator(vec![
            weekly("A", "1", Weekday::Monday, 8, 1),
            weekly("A", "2", Weekday::Tuesday, 8, 1),
            weekly("B", "1", Weekday::Wednesday, 8, 1),
            weekly("B", "2", Weekday::Thursday, 8, 1),
        ]);
        let result = g.generate(&["A", "B"], Preference::NoPreference, false);
        let keys: Vec<_> = result.iter().map(group_keys).collect();
        assert_eq!(
            keys,
            vec![
                vec!["A1", "B1"],
                vec!["A1", "B2"],
                vec!["A2", "B1"],
                vec!["A2", "B2"],
            ]
        );
        assert!(result.iter().all(|t| t.score == 0));
    }

    #[test]
    fn test_selection_order_drives_concatenation() {
        let g = generator(vec![
            weekly("A", "1", Weekday::Monday, 8, 1),
            weekly("B", "1", Weekday::Tuesday, 8, 1),
        ]);
        let result = g.generate(&["B", "A"], Preference::NoPreference, false);
        assert_eq!(result[0].sessions[0].course, "B");
        assert_eq!(result[0].sessions[1].course, "A");
    }

    #[test]
    fn test_repeated_course_counted_once() {
        let g = generator(vec![
            weekly("A", "1", Weekday::Monday, 8, 1),
            weekly("A", "2", Weekday::Tuesday, 8, 1),
        ]);
        let result = g.generate(&["A", "A"], Preference::NoPreference, false);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|t| t.session_count() == 1));
    }

    #[test]
    fn test_generate_request() {
        let g = clashing_pair();
        let request = GenerateRequest::new(["A", "B"])
            .with_preference(Preference::EarlyPreferred)
            .with_overlap(true);
        assert_eq!(g.generate_request(&request).len(), 2);
        assert!(g
            .generate_request(&request.clone().with_overlap(false))
            .is_empty());
    }

    /// Random catalog: `courses` courses with 1..=4 groups, each group 1..=2 sessions.
    fn random_catalog(rng: &mut StdRng, courses: usize) -> (Vec<String>, Vec<Session>) {
        let mut codes = Vec::new();
        let mut sessions = Vec::new();
        for c in 0..courses {
            let code = format!("C{c}");
            for g in 0..rng.random_range(1..=4) {
                for _ in 0..rng.random_range(1..=2) {
                    let first_week = rng.random_range(1..=4);
                    sessions.push(
                        Session::new(
                            code.clone(),
                            g as i64,
                            Weekday::ALL[rng.random_range(0..2)],
                            rng.random_range(8..18),
                            rng.random_range(1..=3),
                        )
                        .with_weeks(first_week..first_week + rng.random_range(1..=3)),
                    );
                }
            }
            codes.push(code);
        }
        (codes, sessions)
    }

    /// Counts conflict-free combinations by brute force.
    fn brute_force_count(catalog: &Catalog, codes: &[String]) -> usize {
        let per_course: Vec<&[GroupBundle]> = codes.iter().map(|c| catalog.bundles(c)).collect();
        let mut count = 0;
        let mut index = vec![0usize; codes.len()];
        loop {
            let sessions: Vec<Session> = index
                .iter()
                .zip(&per_course)
                .flat_map(|(&i, bundles)| bundles[i].sessions.clone())
                .collect();
            if !Timetable::new(sessions, 0).has_collision() {
                count += 1;
            }

            // Odometer increment.
            let mut pos = codes.len();
            loop {
                if pos == 0 {
                    return count;
                }
                pos -= 1;
                index[pos] += 1;
                if index[pos] < per_course[pos].len() {
                    break;
                }
                index[pos] = 0;
            }
        }
    }

    #[test]
    fn test_random_catalogs_properties() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..40 {
            let courses = rng.random_range(1..=4);
            let (codes, sessions) = random_catalog(&mut rng, courses);
            let g = generator(sessions);

            let product: usize = codes.iter().map(|c| g.catalog().bundles(c).len()).product();
            let loose = g.generate(&codes, Preference::EarlyPreferred, true);
            assert_eq!(loose.len(), product);

            let strict = g.generate(&codes, Preference::LatePreferred, false);
            assert_eq!(strict.len(), brute_force_count(g.catalog(), &codes));
            for t in &strict {
                assert!(!t.has_collision());
                assert_eq!(t.groups().len(), codes.len());
            }

            for result in [&loose, &strict] {
                assert!(result.windows(2).all(|w| w[0].score >= w[1].score));
            }
        }
    }
}
