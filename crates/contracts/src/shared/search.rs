//! Search/filter over record collections.
//!
//! The filtered view is a throwaway: it is recomputed from the full
//! collection on every input event and never persisted.

/// Records that expose a fixed set of text fields to the search box.
pub trait Searchable {
    /// Field values the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match on any search field. An empty term
    /// matches every record.
    fn matches_term(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.search_fields()
            .iter()
            .any(|value| value.to_lowercase().contains(&term))
    }
}

/// Records passing the search term and an extra predicate, in input order.
pub fn filter_records<T, P>(records: &[T], term: &str, extra: P) -> Vec<T>
where
    T: Searchable + Clone,
    P: Fn(&T) -> bool,
{
    records
        .iter()
        .filter(|record| record.matches_term(term) && extra(record))
        .cloned()
        .collect()
}

/// Records passing the search term alone.
pub fn search<T: Searchable + Clone>(records: &[T], term: &str) -> Vec<T> {
    filter_records(records, term, |_| true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        title: String,
        body: String,
    }

    impl Searchable for Note {
        fn search_fields(&self) -> Vec<&str> {
            vec![&self.title, &self.body]
        }
    }

    fn notes() -> Vec<Note> {
        vec![
            Note { title: "Apples".into(), body: "red".into() },
            Note { title: "Milk".into(), body: "cold DAIRY".into() },
        ]
    }

    #[test]
    fn test_empty_term_matches_all() {
        assert_eq!(search(&notes(), "").len(), 2);
    }

    #[test]
    fn test_case_insensitive_any_field() {
        let found = search(&notes(), "dairy");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Milk");
        assert_eq!(search(&notes(), "APP").len(), 1);
        assert!(search(&notes(), "bread").is_empty());
    }

    #[test]
    fn test_extra_predicate_is_conjunctive() {
        let found = filter_records(&notes(), "", |n| n.title.starts_with('A'));
        assert_eq!(found.len(), 1);
        let found = filter_records(&notes(), "milk", |n| n.title.starts_with('A'));
        assert!(found.is_empty());
    }
}
