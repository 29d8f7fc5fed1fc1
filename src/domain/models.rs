use serde::Serialize;

/// One catalogue entry as listed on a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub title: String,
    pub price: String, // Raw currency text, e.g. "£51.77"
    pub rating: Rating,
}

impl Book {
    pub fn new(title: impl Into<String>, price: impl Into<String>, rating: Rating) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            rating,
        }
    }
}

/// Star rating in the range 0..=5, where 0 means unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Map a rating class token ("One".."Five") to its star count.
    /// Unrecognized or missing tokens yield 0.
    pub fn from_token(token: Option<&str>) -> Self {
        let stars = match token {
            Some("One") => 1,
            Some("Two") => 2,
            Some("Three") => 3,
            Some("Four") => 4,
            Some("Five") => 5,
            _ => 0,
        };
        Self(stars)
    }

    pub fn stars(self) -> u8 {
        self.0
    }
}

/// Result of extracting a single catalogue page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapedPage {
    pub books: Vec<Book>,
    pub next_url: Option<String>,
}

impl ScrapedPage {
    /// Page that yields nothing and ends pagination
    pub fn terminal() -> Self {
        Self::default()
    }
}

/// Everything collected by one pagination run
#[derive(Debug, Clone, Default)]
pub struct ScrapeSummary {
    pub books: Vec<Book>,
    pub pages_scraped: usize,
}

impl ScrapeSummary {
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_rating_tokens() {
        let tokens = ["One", "Two", "Three", "Four", "Five"];
        for (expected, token) in (1..=5).zip(tokens) {
            assert_eq!(Rating::from_token(Some(token)).stars(), expected);
        }
    }

    #[test]
    fn test_unrecognized_rating_tokens_default_to_zero() {
        assert_eq!(Rating::from_token(None).stars(), 0);
        assert_eq!(Rating::from_token(Some("one")).stars(), 0);
        assert_eq!(Rating::from_token(Some("FIVE")).stars(), 0);
        assert_eq!(Rating::from_token(Some("One-unrecognized")).stars(), 0);
        assert_eq!(Rating::from_token(Some("")).stars(), 0);
    }
}
