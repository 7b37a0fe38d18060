//! Predicates and list views over catalog records.
//!
//! Everything here is a pure function of the records it is given; the
//! store applies predicates through [`CatalogStore::filter_by`].
//!
//! [`CatalogStore::filter_by`]: crate::catalog::CatalogStore::filter_by

use std::collections::BTreeSet;
use std::fmt;

use crate::model::{Activity, Career, Entity, NewsArticle, Program, Record, School, Teacher};

/// Label of the chip that disables a category filter.
pub const ALL_LABEL: &str = "All";

/// A boolean test over a record, composable with `and`, `or` and `!`.
pub struct Predicate<T> {
    test: Box<dyn Fn(&Record<T>) -> bool>,
}

impl<T> Predicate<T> {
    pub fn matches(&self, record: &Record<T>) -> bool {
        (self.test)(record)
    }
}

impl<T: 'static> Predicate<T> {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&Record<T>) -> bool + 'static,
    {
        Self {
            test: Box::new(test),
        }
    }

    /// Matches every record.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    pub fn and(self, other: Predicate<T>) -> Self {
        Self::new(move |r| self.matches(r) && other.matches(r))
    }

    pub fn or(self, other: Predicate<T>) -> Self {
        Self::new(move |r| self.matches(r) || other.matches(r))
    }
}

impl<T: 'static> std::ops::Not for Predicate<T> {
    type Output = Predicate<T>;

    fn not(self) -> Self::Output {
        Predicate::new(move |r| !self.matches(r))
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate")
    }
}

/// Case-insensitive substring search over `fields`.
///
/// A blank needle matches everything, like an empty search bar.
pub fn matches_text(fields: &[&str], needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Free-text search over an entity's searchable fields.
pub fn text_search<T: Entity + 'static>(needle: &str) -> Predicate<T> {
    let needle = needle.to_string();
    Predicate::new(move |r: &Record<T>| matches_text(&r.fields.search_fields(), &needle))
}

/// An exact-match filter on a category-like field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Interprets a chip label; `"All"` disables filtering.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    pub fn accepts(&self, value: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == value,
        }
    }
}

/// Schools whose name or address contains `search`.
pub fn schools_matching(search: &str) -> Predicate<School> {
    text_search(search)
}

/// Teachers in `subject` whose name or subject contains `search`.
pub fn teachers_matching(subject: CategoryFilter, search: &str) -> Predicate<Teacher> {
    Predicate::new(move |t: &Record<Teacher>| subject.accepts(&t.subject))
        .and(text_search(search))
}

/// Programs in an age band such as "Primary" or "Secondary".
///
/// The band is looked up in both the age group and the program name, since
/// sample age groups read "Ages 6-12" rather than naming the band.
pub fn programs_in_band(band: CategoryFilter) -> Predicate<Program> {
    Predicate::new(move |p: &Record<Program>| match &band {
        CategoryFilter::All => true,
        CategoryFilter::Only(band) => {
            p.age_group.contains(band.as_str()) || p.name.contains(band.as_str())
        }
    })
}

pub fn activities_in(category: CategoryFilter) -> Predicate<Activity> {
    Predicate::new(move |a: &Record<Activity>| category.accepts(&a.category))
}

pub fn news_in(category: CategoryFilter) -> Predicate<NewsArticle> {
    Predicate::new(move |n: &Record<NewsArticle>| category.accepts(&n.category))
}

/// Active openings of the given job type.
pub fn open_positions(job_type: CategoryFilter) -> Predicate<Career> {
    Predicate::new(move |c: &Record<Career>| c.is_active && job_type.accepts(&c.job_type))
}

/// `"All"` followed by the distinct values in sorted order.
pub fn category_options<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let distinct: BTreeSet<&str> = values
        .into_iter()
        .filter(|v| *v != ALL_LABEL)
        .collect();
    std::iter::once(ALL_LABEL.to_string())
        .chain(distinct.into_iter().map(str::to_string))
        .collect()
}

/// The `limit` most recently published articles, newest first.
pub fn latest_news(mut news: Vec<Record<NewsArticle>>, limit: usize) -> Vec<Record<NewsArticle>> {
    news.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    news.truncate(limit);
    news
}
