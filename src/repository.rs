use super::models::{Catalog, Course};

#[derive(Clone, Copy)]
pub struct Repository<'a> {
    catalog: &'a Catalog,
}

impl<'a> Repository<'a> {

    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn courses(&self) -> &'static [Course] {
        self.catalog.courses
    }

    pub fn course_by_index(&self, index: usize) -> Option<&'static Course> {
        self.catalog.courses.get(index)
    }

    pub fn course_by_slug(&self, slug: &str) -> Option<&'static Course> {
        self.catalog.slug_map
            .get(slug)
            .and_then(|&index| self.catalog.courses.get(index))
    }

    pub fn len(&self) -> usize {
        self.catalog.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.courses.is_empty()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::APP_CATALOG;
    use std::collections::HashSet;

    fn repository() -> Repository<'static> {
        Repository::new(&APP_CATALOG)
    }

    #[test]
    fn catalog_is_not_empty() {
        assert!(!repository().is_empty());
    }

    #[test]
    fn slugs_are_unique() {
        let repository = repository();
        let slugs: HashSet<&str> = repository.courses().iter().map(|course| course.slug).collect();
        assert_eq!(slugs.len(), repository.len());
    }

    #[test]
    fn every_course_has_title_page_and_keywords() {
        for course in repository().courses() {
            assert!(!course.title.is_empty(), "course '{}' has an empty title", course.slug);
            assert!(!course.page.is_empty(), "course '{}' has an empty page", course.slug);
            assert!(!course.keywords.is_empty(), "course '{}' has no keywords", course.slug);
        }
    }

    #[test]
    fn slug_map_points_at_matching_courses() {
        let repository = repository();
        for (index, course) in repository.courses().iter().enumerate() {
            let found = repository.course_by_slug(course.slug);
            assert_eq!(found.map(|c| c.slug), Some(course.slug));
            assert_eq!(APP_CATALOG.slug_map.get(course.slug), Some(&index));
        }
    }

    #[test]
    fn course_lookup_by_index_matches_catalog_order() {
        let repository = repository();
        for index in 0..repository.len() {
            let course = repository.course_by_index(index).unwrap();
            assert_eq!(course.slug, repository.courses()[index].slug);
        }
    }

    #[test]
    fn unknown_lookups_return_none() {
        let repository = repository();
        assert!(repository.course_by_slug("not-a-course").is_none());
        assert!(repository.course_by_index(repository.len()).is_none());
    }
}
