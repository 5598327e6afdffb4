use crate::repository::Repository;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    EmptyQuery,
    Match(usize),
    NoMatch,
}

struct SearchIndex {
    titles: Vec<String>,
    keywords: Vec<Vec<String>>,
}

#[derive(Clone)]
pub struct SearchEngine {
    index: Rc<SearchIndex>,
}

impl SearchEngine {

    pub fn new(repository: Repository<'static>) -> Self {
        let titles = repository
            .courses()
            .iter()
            .map(|course| course.title.to_lowercase())
            .collect();

        let keywords = repository
            .courses()
            .iter()
            .map(|course| {
                course.keywords
                    .iter()
                    .map(|keyword| keyword.to_lowercase())
                    .collect()
            })
            .collect();

        let index = Rc::new(SearchIndex { titles, keywords });

        Self { index }
    }

    fn normalize_query(query: &str) -> String {
        query.trim().to_lowercase()
    }

    // Title containment only; keyword matching belongs to submit().
    pub fn suggestions(&self, query: &str) -> Vec<usize> {
        let normalized = Self::normalize_query(query);
        if normalized.is_empty() {
            return Vec::new();
        }

        self.index.titles
            .iter()
            .enumerate()
            .filter(|(_, title)| title.contains(&normalized))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn submit(&self, query: &str) -> SubmitOutcome {
        let normalized = Self::normalize_query(query);
        if normalized.is_empty() {
            return SubmitOutcome::EmptyQuery;
        }

        self.index.keywords
            .iter()
            .position(|keywords| keywords.iter().any(|keyword| keyword.contains(&normalized)))
            .map_or(SubmitOutcome::NoMatch, SubmitOutcome::Match)
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::APP_CATALOG;

    fn engine() -> SearchEngine {
        SearchEngine::new(Repository::new(&APP_CATALOG))
    }

    fn suggestion_titles(query: &str) -> Vec<&'static str> {
        engine()
            .suggestions(query)
            .into_iter()
            .map(|index| APP_CATALOG.courses[index].title)
            .collect()
    }

    #[test]
    fn blank_queries_produce_no_suggestions() {
        let engine = engine();
        assert!(engine.suggestions("").is_empty());
        assert!(engine.suggestions("   ").is_empty());
        assert!(engine.suggestions("\t\n").is_empty());
    }

    #[test]
    fn suggestions_contain_exactly_the_title_matches_in_catalog_order() {
        let expected: Vec<usize> = APP_CATALOG.courses
            .iter()
            .enumerate()
            .filter(|(_, course)| course.title.to_lowercase().contains("a"))
            .map(|(index, _)| index)
            .collect();

        assert_eq!(engine().suggestions("a"), expected);
    }

    #[test]
    fn suggestions_ignore_query_case_and_surrounding_whitespace() {
        let engine = engine();
        assert_eq!(engine.suggestions("JAVA"), engine.suggestions("java"));
        assert_eq!(engine.suggestions("  java  "), engine.suggestions("java"));
    }

    #[test]
    fn suggestions_are_idempotent() {
        let engine = engine();
        assert_eq!(engine.suggestions("data"), engine.suggestions("data"));
    }

    #[test]
    fn suggestions_match_titles_not_keywords() {
        // "frontend" is a keyword of the web development course but
        // appears in no title.
        assert!(suggestion_titles("frontend").is_empty());
        assert_eq!(engine().submit("frontend"), SubmitOutcome::Match(3));
    }

    #[test]
    fn query_java_suggests_the_java_course() {
        assert_eq!(suggestion_titles("java"), vec!["Java Course"]);
    }

    #[test]
    fn query_course_suggests_only_titles_containing_course() {
        assert_eq!(suggestion_titles("course"), vec!["Java Course"]);
    }

    #[test]
    fn unmatched_query_suggests_nothing() {
        assert!(suggestion_titles("xyz123").is_empty());
    }

    #[test]
    fn blank_submissions_are_reported_as_empty() {
        let engine = engine();
        assert_eq!(engine.submit(""), SubmitOutcome::EmptyQuery);
        assert_eq!(engine.submit("   "), SubmitOutcome::EmptyQuery);
    }

    #[test]
    fn submit_java_resolves_the_java_course_page() {
        let SubmitOutcome::Match(index) = engine().submit("java") else {
            panic!("expected a match for 'java'");
        };
        assert_eq!(APP_CATALOG.courses[index].page, "courses/java.html");
    }

    #[test]
    fn submit_returns_the_first_keyword_match_in_catalog_order() {
        // "course" is a keyword substring of both the java and the python
        // records; the earlier record wins.
        assert_eq!(engine().submit("course"), SubmitOutcome::Match(0));
    }

    #[test]
    fn submit_ignores_query_case_and_surrounding_whitespace() {
        let engine = engine();
        assert_eq!(engine.submit("PYTHON"), SubmitOutcome::Match(1));
        assert_eq!(engine.submit("  machine learning  "), SubmitOutcome::Match(2));
    }

    #[test]
    fn submit_with_no_keyword_match_reports_no_match() {
        assert_eq!(engine().submit("xyz123"), SubmitOutcome::NoMatch);
    }

    #[test]
    fn submit_agrees_with_a_linear_scan_of_the_keyword_lists() {
        let engine = engine();

        for query in ["sql", "cloud", "ownership", "probability", "ml"] {
            let expected = APP_CATALOG.courses
                .iter()
                .position(|course| {
                    course.keywords
                        .iter()
                        .any(|keyword| keyword.to_lowercase().contains(query))
                })
                .map_or(SubmitOutcome::NoMatch, SubmitOutcome::Match);

            assert_eq!(engine.submit(query), expected, "query '{query}'");
        }
    }
}
