use super::{Keywords, String};

#[derive(Debug, Clone)]
pub struct Course {
    pub title: String,
    pub slug: String,
    pub keywords: Keywords,
    pub page: String,
}
