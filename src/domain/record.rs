//! Blog post domain model.
//!
//! A [`ContentRecord`] is one entry of the record store. Records are immutable for
//! the lifetime of a session; the query engine only ever borrows them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single blog post as supplied by the content source.
///
/// # Fields
///
/// - `id`: Unique identifier within the store
/// - `title`, `excerpt`, `category`, `tags`: Searchable text
/// - `content`: Markdown body shown on the detail view, never searched
/// - `published_at`: Publication date, day precision
/// - `view_count`, `like_count`: Popularity counters used for sorting
/// - `comments`: Comment count, display-only
/// - `published`: Drafts (`false`) never appear in query results
/// - `author`, `read_time`, `featured`: Display-only metadata
///
/// The JSON form uses camelCase keys (`publishedAt`, `viewCount`, ...) and dates
/// formatted as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: u64,
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published_at: NaiveDate,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub comments: u64,
    pub published: bool,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub read_time: String,
    #[serde(default)]
    pub featured: bool,
}

impl ContentRecord {
    /// Creates a published record with empty text fields and zero counters.
    ///
    /// Mostly useful for building fixtures; real records come from JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use folio::ContentRecord;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
    /// let record = ContentRecord::new(1, "Scaling Node.js", "Backend Development", date)
    ///     .with_counts(1247, 89)
    ///     .with_tags(["Node.js", "Docker"]);
    /// assert!(record.published);
    /// assert_eq!(record.view_count, 1247);
    /// assert_eq!(record.tags.len(), 2);
    /// ```
    #[must_use]
    pub fn new(
        id: u64,
        title: impl Into<String>,
        category: impl Into<String>,
        published_at: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            excerpt: String::new(),
            content: String::new(),
            category: category.into(),
            tags: Vec::new(),
            published_at,
            view_count: 0,
            like_count: 0,
            comments: 0,
            published: true,
            author: String::new(),
            read_time: String::new(),
            featured: false,
        }
    }

    /// Sets the excerpt.
    #[must_use]
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    /// Sets the markdown body.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Replaces the tag list.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets view and like counters.
    #[must_use]
    pub const fn with_counts(mut self, views: u64, likes: u64) -> Self {
        self.view_count = views;
        self.like_count = likes;
        self
    }

    /// Marks the record as a draft.
    #[must_use]
    pub const fn unpublished(mut self) -> Self {
        self.published = false;
        self
    }

    /// Formats the publication date the way the listing cards show it,
    /// e.g. `"Dec 15, 2024"`.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.published_at.format("%b %-d, %Y").to_string()
    }

    /// Returns `true` when `needle_lower` (already lowercased) occurs in the title,
    /// the excerpt, or any tag, ignoring case. An empty needle matches everything.
    /// The body is not searched.
    #[must_use]
    pub fn mentions(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle_lower)
            || self.excerpt.to_lowercase().contains(needle_lower)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle_lower))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn deserializes_camel_case_json_with_defaults() {
        let json = r#"{
            "id": 7,
            "title": "Clean Code",
            "excerpt": "Writing maintainable software",
            "category": "Software Engineering",
            "publishedAt": "2024-11-15",
            "published": true
        }"#;

        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.published_at, date(2024, 11, 15));
        assert!(record.tags.is_empty());
        assert!(record.content.is_empty());
        assert_eq!(record.view_count, 0);
        assert_eq!(record.comments, 0);
        assert!(!record.featured);
    }

    #[test]
    fn mentions_is_case_insensitive_across_title_excerpt_and_tags() {
        let record = ContentRecord::new(1, "Building Microservices", "Backend", date(2024, 1, 1))
            .with_excerpt("Handle millions of requests")
            .with_tags(["Docker", "DevOps"]);

        assert!(record.mentions("microservices"));
        assert!(record.mentions("millions"));
        assert!(record.mentions("dock"));
        assert!(record.mentions(""));
        assert!(!record.mentions("react"));
    }

    #[test]
    fn body_and_comment_count_deserialize_but_body_is_not_searched() {
        let json = r###"{
            "id": 1,
            "title": "Microservices",
            "excerpt": "",
            "content": "## Docker Configuration",
            "category": "Backend",
            "publishedAt": "2024-12-15",
            "comments": 12,
            "published": true
        }"###;

        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.content, "## Docker Configuration");
        assert_eq!(record.comments, 12);
        assert!(!record.mentions("docker"));
    }

    #[test]
    fn display_date_uses_short_month_format() {
        let record = ContentRecord::new(1, "t", "c", date(2024, 12, 5));
        assert_eq!(record.display_date(), "Dec 5, 2024");
    }
}
