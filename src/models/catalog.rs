use super::course::Course;

#[derive(Debug)]
pub struct Catalog {
    pub courses: &'static [Course],
    pub slug_map: phf::Map<&'static str, usize>,
}
