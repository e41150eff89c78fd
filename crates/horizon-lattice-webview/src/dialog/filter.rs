//! Accept filters attached to a file dialog request.
//!
//! The host describes acceptable file types with three parallel columns: the
//! raw filter token, the extensions it resolved for that token, and a
//! human-readable description. Entries line up by index, so they are stored
//! here as one [`AcceptFilter`] per row and never handled column by column.
//!
//! A raw token is one of:
//!
//! - a lower-cased MIME type such as `"text/*"` or `"image/png"`
//! - a single extension such as `".txt"`
//! - a description and extension list such as `"Image Types|.png;.gif;.jpg"`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What a raw filter token denotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptFilterKind<'a> {
    /// A MIME type or MIME wildcard, e.g. `image/*`.
    MimeType(&'a str),
    /// A single extension, e.g. `.png`.
    Extension(&'a str),
    /// A description with its own extension list, e.g. `Images|.png;.jpg`.
    Composite {
        description: &'a str,
        extensions: Vec<&'a str>,
    },
    /// Anything else. The host passes it through untouched, and so do we.
    Unknown(&'a str),
}

/// One row of a request's accept filters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AcceptFilter {
    filter: String,
    extensions: String,
    description: String,
}

impl AcceptFilter {
    /// Create a filter row from its three columns.
    pub fn new(
        filter: impl Into<String>,
        extensions: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            filter: filter.into(),
            extensions: extensions.into(),
            description: description.into(),
        }
    }

    /// The raw filter token.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// The semicolon-delimited extensions the host resolved, or `""` if unknown.
    pub fn extensions(&self) -> &str {
        &self.extensions
    }

    /// The description the host resolved, or `""` if unknown.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Classify the raw filter token.
    pub fn kind(&self) -> AcceptFilterKind<'_> {
        let token = self.filter.as_str();
        if let Some((description, extensions)) = token.split_once('|') {
            AcceptFilterKind::Composite {
                description,
                extensions: split_extensions(extensions).collect(),
            }
        } else if token.contains('/') {
            AcceptFilterKind::MimeType(token)
        } else if token.starts_with('.') {
            AcceptFilterKind::Extension(token)
        } else {
            AcceptFilterKind::Unknown(token)
        }
    }

    /// Extensions this row accepts, each with its leading dot as given.
    ///
    /// Uses the resolved extensions column when present, otherwise whatever
    /// the raw token itself names. A bare MIME type with no resolution yields
    /// nothing.
    pub fn resolved_extensions(&self) -> Vec<&str> {
        if !self.extensions.trim().is_empty() {
            return split_extensions(&self.extensions).collect();
        }
        match self.kind() {
            AcceptFilterKind::Extension(ext) => vec![ext],
            AcceptFilterKind::Composite { extensions, .. } => extensions,
            AcceptFilterKind::MimeType(_) | AcceptFilterKind::Unknown(_) => Vec::new(),
        }
    }

    /// Label suitable for a filter drop-down.
    pub fn display_name(&self) -> &str {
        if !self.description.is_empty() {
            return &self.description;
        }
        match self.kind() {
            AcceptFilterKind::Composite { description, .. } if !description.is_empty() => {
                description
            }
            _ => &self.filter,
        }
    }

    /// Check whether a path's extension is one this row accepts.
    ///
    /// Comparison ignores ASCII case and the leading dot.
    pub fn matches_path(&self, path: impl AsRef<Path>) -> bool {
        let Some(ext) = path.as_ref().extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.resolved_extensions()
            .iter()
            .any(|candidate| candidate.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

fn split_extensions(list: &str) -> impl Iterator<Item = &str> {
    list.split(';').map(str::trim).filter(|s| !s.is_empty())
}

/// The ordered accept filters of a request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AcceptFilters {
    rows: Vec<AcceptFilter>,
}

impl AcceptFilters {
    /// No filters; the host accepts any file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zip the host's three parallel columns into rows.
    ///
    /// The extensions and descriptions columns must either match the filters
    /// column in length or be empty, in which case every row gets `""` for
    /// that column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FilterLengthMismatch`] when a non-empty column has a
    /// different length than the filters column.
    pub fn from_parallel<F, E, D>(filters: F, extensions: E, descriptions: D) -> Result<Self>
    where
        F: IntoIterator,
        F::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let filters: Vec<String> = filters.into_iter().map(Into::into).collect();
        let extensions: Vec<String> = extensions.into_iter().map(Into::into).collect();
        let descriptions: Vec<String> = descriptions.into_iter().map(Into::into).collect();

        let len = filters.len();
        let column_fits = |column_len: usize| column_len == len || column_len == 0;
        if !column_fits(extensions.len()) || !column_fits(descriptions.len()) {
            return Err(Error::filter_length_mismatch(
                len,
                extensions.len(),
                descriptions.len(),
            ));
        }

        let mut extensions = extensions.into_iter();
        let mut descriptions = descriptions.into_iter();
        let rows = filters
            .into_iter()
            .map(|filter| AcceptFilter {
                filter,
                extensions: extensions.next().unwrap_or_default(),
                description: descriptions.next().unwrap_or_default(),
            })
            .collect();

        Ok(Self { rows })
    }

    /// Number of filter rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the request restricts file types at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&AcceptFilter> {
        self.rows.get(index)
    }

    /// Iterate the rows in host order.
    pub fn iter(&self) -> std::slice::Iter<'_, AcceptFilter> {
        self.rows.iter()
    }

    /// The raw filter tokens, in host order.
    pub fn filters(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(AcceptFilter::filter)
    }

    /// The resolved extension lists, in host order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(AcceptFilter::extensions)
    }

    /// The descriptions, in host order.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(AcceptFilter::description)
    }

    /// Whether any row accepts `path`. An empty filter set accepts everything.
    pub fn accepts_path(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.is_empty() || self.rows.iter().any(|row| row.matches_path(path))
    }
}

impl FromIterator<AcceptFilter> for AcceptFilters {
    fn from_iter<T: IntoIterator<Item = AcceptFilter>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AcceptFilters {
    type Item = &'a AcceptFilter;
    type IntoIter = std::slice::Iter<'a, AcceptFilter>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parallel_keeps_rows_aligned() {
        let filters = AcceptFilters::from_parallel(
            ["image/*", ".txt"],
            [".png;.jpg;.bmp", ".txt"],
            ["Image Files", "Text"],
        )
        .unwrap();

        assert_eq!(filters.len(), 2);
        let first = filters.get(0).unwrap();
        assert_eq!(first.filter(), "image/*");
        assert_eq!(first.extensions(), ".png;.jpg;.bmp");
        assert_eq!(first.description(), "Image Files");
        assert_eq!(filters.filters().collect::<Vec<_>>(), vec!["image/*", ".txt"]);
    }

    #[test]
    fn test_from_parallel_empty_columns_mean_unknown() {
        let filters =
            AcceptFilters::from_parallel([".csv"], Vec::<String>::new(), Vec::<String>::new())
                .unwrap();
        let row = filters.get(0).unwrap();
        assert_eq!(row.extensions(), "");
        assert_eq!(row.description(), "");
    }

    #[test]
    fn test_from_parallel_rejects_mismatch() {
        let err = AcceptFilters::from_parallel(["a/b", ".c"], ["x"], ["d", "e"]).unwrap_err();
        assert!(matches!(
            err,
            Error::FilterLengthMismatch {
                filters: 2,
                extensions: 1,
                descriptions: 2
            }
        ));
    }

    #[test]
    fn test_from_parallel_rejects_columns_without_filters() {
        let result = AcceptFilters::from_parallel(Vec::<String>::new(), [".png"], [""]);
        assert!(result.is_err());
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            AcceptFilter::new("text/*", "", "").kind(),
            AcceptFilterKind::MimeType("text/*")
        );
        assert_eq!(
            AcceptFilter::new(".png", "", "").kind(),
            AcceptFilterKind::Extension(".png")
        );
        assert_eq!(
            AcceptFilter::new("Image Types|.png;.gif;.jpg", "", "").kind(),
            AcceptFilterKind::Composite {
                description: "Image Types",
                extensions: vec![".png", ".gif", ".jpg"],
            }
        );
        assert_eq!(
            AcceptFilter::new("png", "", "").kind(),
            AcceptFilterKind::Unknown("png")
        );
    }

    #[test]
    fn test_resolved_extensions_prefers_column() {
        let row = AcceptFilter::new("image/*", ".png; .jpg;;.bmp", "Image Files");
        assert_eq!(row.resolved_extensions(), vec![".png", ".jpg", ".bmp"]);

        let bare_mime = AcceptFilter::new("image/*", "", "");
        assert!(bare_mime.resolved_extensions().is_empty());

        let composite = AcceptFilter::new("Docs|.md;.txt", "", "");
        assert_eq!(composite.resolved_extensions(), vec![".md", ".txt"]);
    }

    #[test]
    fn test_display_name_fallbacks() {
        assert_eq!(AcceptFilter::new("image/*", "", "Images").display_name(), "Images");
        assert_eq!(AcceptFilter::new("Docs|.md", "", "").display_name(), "Docs");
        assert_eq!(AcceptFilter::new(".md", "", "").display_name(), ".md");
    }

    #[test]
    fn test_matches_path() {
        let row = AcceptFilter::new("image/*", ".png;.jpg", "Images");
        assert!(row.matches_path("/tmp/photo.PNG"));
        assert!(row.matches_path("shot.jpg"));
        assert!(!row.matches_path("notes.txt"));
        assert!(!row.matches_path("no_extension"));
    }

    #[test]
    fn test_accepts_path() {
        assert!(AcceptFilters::new().accepts_path("anything.bin"));

        let filters: AcceptFilters = [AcceptFilter::new(".txt", "", "")].into_iter().collect();
        assert!(filters.accepts_path("readme.txt"));
        assert!(!filters.accepts_path("readme.md"));
    }
}
