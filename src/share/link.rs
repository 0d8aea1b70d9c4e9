use tracing::{debug, warn};

use super::codec;
use crate::content::QuizContent;
use crate::error::ScoringError;
use crate::scoring::{AnswerSet, CategoryKey};

/// Query parameter carrying the category key as plain text.
pub const RESULT_PARAM: &str = "k";
/// Query parameter carrying the answer token.
pub const DATA_PARAM: &str = "data";

/// The two query fields of a shareable result URL.
///
/// Fields hold the raw (already percent-decoded) values as found in the link;
/// nothing is trusted until [`ShareLink::resolve`] checks it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareLink {
    pub result: Option<String>,
    pub data: Option<String>,
}

/// Where a resolved category came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Recomputed from the shared answers.
    Verified,
    /// Taken from the result field because the answers were unusable or disagreed.
    Advertised,
    /// Neither field was usable.
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub key: CategoryKey,
    pub source: ResolutionSource,
    pub answers: AnswerSet,
}

impl ShareLink {
    pub fn new(key: CategoryKey, answers: &AnswerSet) -> Self {
        Self {
            result: Some(key.to_string()),
            data: Some(codec::encode(answers)),
        }
    }

    /// Render as `data=<token>&k=<key>`, percent-encoding both values.
    pub fn to_query(&self) -> String {
        let mut parts = Vec::new();
        if let Some(data) = &self.data {
            parts.push(format!("{}={}", DATA_PARAM, urlencoding::encode(data)));
        }
        if let Some(result) = &self.result {
            parts.push(format!("{}={}", RESULT_PARAM, urlencoding::encode(result)));
        }
        parts.join("&")
    }

    /// Parse a bare query, a `?query`, or a full URL. Unknown parameters are
    /// ignored and values with broken percent-escapes are dropped.
    pub fn parse(input: &str) -> Self {
        let query = input.split_once('?').map_or(input, |(_, q)| q);
        let query = query.split_once('#').map_or(query, |(q, _)| q);

        let mut link = Self::default();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (name, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let value = match urlencoding::decode(raw) {
                Ok(v) => v.into_owned(),
                Err(e) => {
                    debug!(param = name, error = %e, "dropping undecodable query value");
                    continue;
                }
            };
            match name {
                RESULT_PARAM => link.result = Some(value),
                DATA_PARAM => link.data = Some(value),
                _ => {}
            }
        }
        link
    }

    /// The advertised key, if it names a known category.
    pub fn advertised_key(&self) -> Option<CategoryKey> {
        self.result.as_deref().and_then(|k| k.parse().ok())
    }

    /// The shared answers; empty when the data field is absent or malformed.
    pub fn answers(&self) -> AnswerSet {
        self.data.as_deref().map(codec::decode).unwrap_or_default()
    }

    /// Reconstruct the shared result against the current content.
    ///
    /// Answers are only re-scored when at least one of them names a
    /// configured question and option. Re-scored answers that reproduce the
    /// advertised key (or arrive without one) are `Verified`. Otherwise a
    /// valid advertised key wins, and failing that the content's default
    /// category is used.
    pub fn resolve(&self, content: &QuizContent) -> Result<Resolution, ScoringError> {
        let advertised = self.advertised_key();
        if advertised.is_none() && self.result.is_some() {
            warn!(result = ?self.result, "ignoring unknown category in share link");
        }

        let answers = self.answers();
        if answers.recognized(&content.questions) > 0 {
            let recomputed = content.score(&answers)?;
            match advertised {
                Some(key) if key != recomputed => {
                    warn!(advertised = %key, recomputed = %recomputed, "shared answers no longer match advertised result");
                    return Ok(Resolution { key, source: ResolutionSource::Advertised, answers });
                }
                _ => {
                    return Ok(Resolution { key: recomputed, source: ResolutionSource::Verified, answers });
                }
            }
        }

        if !answers.is_empty() {
            warn!(answers = answers.len(), "shared answers match no configured question");
        }
        Ok(match advertised {
            Some(key) => Resolution { key, source: ResolutionSource::Advertised, answers },
            None => Resolution { key: content.default_key, source: ResolutionSource::Default, answers },
        })
    }
}
