use std::borrow::Cow;
use std::ops::Range;

use ratatui::layout::Constraint;

use crate::models::sort::SortSpec;
use crate::models::{Field, Person};
use crate::utils::columns::{ColDef, SortKey};

/// Read-only dataset plus its records in the order of the current [`SortSpec`].
#[derive(Debug)]
pub struct People {
    records: &'static [Person],
    view: Vec<&'static Person>,
}

impl People {
    pub fn new(records: &'static [Person], spec: SortSpec) -> Self {
        Self { records, view: sort(records, spec) }
    }

    pub fn compute_view(&mut self, spec: SortSpec) {
        self.view = sort(self.records, spec);
    }

    pub fn len(&self) -> usize {
        self.view.len()
    }

    /// Records at display positions `range`, clamped to the view.
    pub fn rows(&self, range: Range<usize>) -> impl Iterator<Item = &'static Person> {
        let end = range.end.min(self.view.len());
        let start = range.start.min(end);
        self.view[start..end].iter().copied()
    }
}

/// Returns `records` ordered by `spec`, leaving `records` untouched.
///
/// The sort is stable and descending reverses the comparator, so records with equal keys keep
/// their dataset order in both directions.
pub fn sort(records: &[Person], spec: SortSpec) -> Vec<&Person> {
    let col_def = col_def(spec.field);
    let mut sorted: Vec<&Person> = records.iter().collect();
    sorted.sort_by(|a, b| col_def.ordering(a, b, spec.dir));
    sorted
}

#[inline]
pub fn col_def(field: Field) -> &'static ColDef<Person> {
    &PEOPLE_COLS[field.index()]
}

/// One entry per [`Field`], in the same order.
pub static PEOPLE_COLS: &[ColDef<Person>] = &[
    ColDef {
        title: "ID",
        width: Constraint::Length(6),
        accessor: |p: &Person| Cow::Owned(p.id.to_string()),
        sort_key: Some(|p: &Person| SortKey::U64(p.id)),
    },
    ColDef {
        title: "First name",
        width: Constraint::Fill(2),
        accessor: |p: &Person| Cow::Borrowed(p.first_name.as_str()),
        sort_key: None,
    },
    ColDef {
        title: "Last name",
        width: Constraint::Fill(2),
        accessor: |p: &Person| Cow::Borrowed(p.last_name.as_str()),
        sort_key: None,
    },
    ColDef {
        title: "Email",
        width: Constraint::Fill(4),
        accessor: |p: &Person| Cow::Borrowed(p.email.as_str()),
        sort_key: None,
    },
    ColDef {
        title: "Gender",
        width: Constraint::Fill(2),
        accessor: |p: &Person| Cow::Borrowed(p.gender.as_str()),
        sort_key: None,
    },
    ColDef {
        title: "IP address",
        width: Constraint::Fill(3),
        accessor: |p: &Person| Cow::Borrowed(p.ip_address.as_str()),
        sort_key: None,
    },
];

#[cfg(test)]
pub(crate) mod tests {
    use strum::{EnumCount, IntoEnumIterator};

    use super::*;
    use crate::models::sort::SortDir;

    pub(crate) fn person(id: u64, first_name: &str, last_name: &str) -> Person {
        Person {
            id,
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: format!("{}@example.com", first_name.to_lowercase()),
            gender: if id % 2 == 0 { "Female" } else { "Male" }.to_owned(),
            ip_address: format!("10.0.0.{id}"),
        }
    }

    fn ids(rows: &[&Person]) -> Vec<u64> {
        rows.iter().map(|p| p.id).collect()
    }

    fn sample() -> Vec<Person> {
        vec![
            person(2, "Bryn", "Beta"),
            person(10, "Ada", "Gamma"),
            person(1, "Cass", "Alpha"),
            person(9, "Dora", "Beta"),
        ]
    }

    #[test]
    fn test_cols_match_fields() {
        assert_eq!(PEOPLE_COLS.len(), Field::COUNT);
        for field in Field::iter() {
            assert_eq!(col_def(field).title, field.label());
        }
    }

    #[test]
    fn test_sort_last_name() {
        let records = vec![person(2, "B", "Beta"), person(1, "A", "Alpha")];
        let asc = sort(&records, SortSpec::new(Field::LastName, SortDir::Asc));
        assert_eq!(ids(&asc), vec![1, 2]);
        let desc = sort(&records, SortSpec::new(Field::LastName, SortDir::Desc));
        assert_eq!(ids(&desc), vec![2, 1]);
        // source is untouched
        assert_eq!(records[0].id, 2);
    }

    #[test]
    fn test_sort_id_is_numeric() {
        let records = sample();
        let asc = sort(&records, SortSpec::new(Field::Id, SortDir::Asc));
        assert_eq!(ids(&asc), vec![1, 2, 9, 10]);
        let desc = sort(&records, SortSpec::new(Field::Id, SortDir::Desc));
        assert_eq!(ids(&desc), vec![10, 9, 2, 1]);
    }

    #[test]
    fn test_sort_ties_keep_dataset_order() {
        let records = sample();
        let asc = sort(&records, SortSpec::new(Field::LastName, SortDir::Asc));
        assert_eq!(ids(&asc), vec![1, 2, 9, 10]);
        let desc = sort(&records, SortSpec::new(Field::LastName, SortDir::Desc));
        assert_eq!(ids(&desc), vec![10, 2, 9, 1]);
    }

    #[test]
    fn test_sort_preserves_records() {
        let records = sample();
        for field in Field::iter() {
            for dir in [SortDir::Asc, SortDir::Desc] {
                let mut sorted = ids(&sort(&records, SortSpec::new(field, dir)));
                sorted.sort_unstable();
                assert_eq!(sorted, vec![1, 2, 9, 10], "field={field} dir={dir:?}");
            }
        }
    }

    #[test]
    fn test_sort_empty() {
        assert!(sort(&[], SortSpec::default()).is_empty());
        assert_eq!(People::new(&[], SortSpec::default()).len(), 0);
    }

    #[test]
    fn test_store_view() {
        let mut store = People::new(sample().leak(), SortSpec::default());
        let rows: Vec<u64> = store.rows(0..store.len()).map(|p| p.id).collect();
        assert_eq!(rows, vec![1, 2, 9, 10]);

        store.compute_view(SortSpec::new(Field::FirstName, SortDir::Asc));
        let rows: Vec<u64> = store.rows(1..3).map(|p| p.id).collect();
        assert_eq!(rows, vec![2, 1]);

        // out of range is clamped
        assert_eq!(store.rows(3..100).count(), 1);
        assert_eq!(store.rows(7..9).count(), 0);
    }

    #[test]
    fn test_store_view_is_sort_output() {
        let records: &'static [Person] = sample().leak();
        let mut store = People::new(records, SortSpec::default());
        for field in Field::iter() {
            for dir in [SortDir::Asc, SortDir::Desc] {
                let spec = SortSpec::new(field, dir);
                store.compute_view(spec);
                let shown: Vec<u64> = store.rows(0..store.len()).map(|p| p.id).collect();
                assert_eq!(shown, ids(&sort(records, spec)), "field={field} dir={dir:?}");
            }
        }
    }
}
