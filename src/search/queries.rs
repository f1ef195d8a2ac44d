//! Parameterized queries against the Bear schema.
//!
//! Every note query excludes archived and trashed notes. Substring filters
//! lower-case both sides and wrap the bound value in `%` wildcards, so a
//! bound value may itself carry `%` to express gaps between words.

/// Column holding a note's unique identifier.
pub(crate) const ID_COLUMN: &str = "ZUNIQUEIDENTIFIER";

/// Column holding a note's (or tag's) title.
pub(crate) const TITLE_COLUMN: &str = "ZTITLE";

/// Default cap on rows returned by a single query.
pub const DEFAULT_LIMIT: usize = 25;

/// A named SQL template with positional parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Query {
    pub(crate) name: &'static str,
    pub(crate) sql: &'static str,
}

impl Query {
    /// Returns the SQL with a trailing row cap.
    pub(crate) fn limited(&self, limit: usize) -> String {
        format!("{} LIMIT {}", self.sql.trim_end(), limit)
    }
}

pub(crate) const TAGS: Query = Query {
    name: "tags",
    sql: "
        SELECT DISTINCT
            t.ZTITLE
        FROM
            ZSFNOTE n
            INNER JOIN Z_5TAGS nt ON n.Z_PK = nt.Z_5NOTES
            INNER JOIN ZSFNOTETAG t ON nt.Z_10TAGS = t.Z_PK
        WHERE
            n.ZARCHIVED = 0
            AND n.ZTRASHED = 0
            AND lower(t.ZTITLE) LIKE lower('%' || ?1 || '%')
        ORDER BY
            t.ZMODIFICATIONDATE DESC
    ",
};

pub(crate) const RECENT: Query = Query {
    name: "recent",
    sql: "
        SELECT DISTINCT
            ZUNIQUEIDENTIFIER, ZTITLE
        FROM
            ZSFNOTE
        WHERE
            ZARCHIVED = 0
            AND ZTRASHED = 0
        ORDER BY
            ZMODIFICATIONDATE DESC
    ",
};

pub(crate) const TITLE_BY_ID: Query = Query {
    name: "title_by_id",
    sql: "
        SELECT DISTINCT
            ZTITLE
        FROM
            ZSFNOTE
        WHERE
            ZARCHIVED = 0
            AND ZTRASHED = 0
            AND ZUNIQUEIDENTIFIER = ?1
        ORDER BY
            ZMODIFICATIONDATE DESC
    ",
};

pub(crate) const NOTES_BY_TITLE: Query = Query {
    name: "notes_by_title",
    sql: "
        SELECT DISTINCT
            ZUNIQUEIDENTIFIER, ZTITLE
        FROM
            ZSFNOTE
        WHERE
            ZARCHIVED = 0
            AND ZTRASHED = 0
            AND lower(ZTITLE) LIKE lower('%' || ?1 || '%')
        ORDER BY
            ZMODIFICATIONDATE DESC
    ",
};

pub(crate) const NOTES_BY_TEXT: Query = Query {
    name: "notes_by_text",
    sql: "
        SELECT DISTINCT
            ZUNIQUEIDENTIFIER, ZTITLE
        FROM
            ZSFNOTE
        WHERE
            ZARCHIVED = 0
            AND ZTRASHED = 0
            AND lower(ZTEXT) LIKE lower('%' || ?1 || '%')
        ORDER BY
            ZMODIFICATIONDATE DESC
    ",
};

/// Builds the word-gap pattern for a phrase, or `None` for a single word.
///
/// Words are split on single spaces and rejoined with `% %`, so
/// `"foo bar"` becomes `"foo% %bar"`.
pub(crate) fn gap_pattern(fill: &str) -> Option<String> {
    let words: Vec<&str> = fill.split(' ').collect();
    if words.len() > 1 {
        Some(words.join("% %"))
    } else {
        None
    }
}
