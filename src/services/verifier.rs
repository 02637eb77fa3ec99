//! Query integrity verification.
//!
//! Two independent decisions over an executed search:
//! - did the server silently rewrite the query before executing it
//!   (`query_rewrite` / `was_modified`), inferred by comparing the `text`
//!   parameter of the requested URL against the server's `alternate_url`
//!   echo — the only signal the response carries;
//! - do the returned items genuinely contain the query's literal text
//!   (`satisfies_query`), which only makes sense for exact-match queries
//!   (`!word`, quoted phrases).

use crate::domain::models::{ResponseEnvelope, Rewrite, SearchQuery, VacancySummary};
use crate::services::api::{ApiClient, ProbeError};
use url::Url;

/// URL-decoded value of the `text` query-string parameter.
pub fn text_param(raw: &str) -> Result<String, ProbeError> {
    let url = Url::parse(raw).map_err(|_| ProbeError::BadUrl(raw.to_string()))?;
    url.query_pairs()
        .find(|(k, _)| k == "text")
        .map(|(_, v)| v.into_owned())
        .ok_or_else(|| ProbeError::MissingTextParam(raw.to_string()))
}

/// `Some(Rewrite)` when the decoded `text` of the requested URL and of the
/// server's `alternate_url` echo differ, `None` when they are identical.
pub fn query_rewrite(envelope: &ResponseEnvelope) -> Result<Option<Rewrite>, ProbeError> {
    let sent = text_param(&envelope.original_url)?;
    let executed = text_param(&envelope.alternate_url)?;
    if sent == executed {
        Ok(None)
    } else {
        Ok(Some(Rewrite { sent, executed }))
    }
}

pub fn was_modified(envelope: &ResponseEnvelope) -> Result<bool, ProbeError> {
    Ok(query_rewrite(envelope)?.is_some())
}

/// The substring exact-match results must contain: the query text with the
/// exact-match markers `!` and `"` stripped, case-folded.
pub fn literal_needle(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '!' | '"'))
        .collect::<String>()
        .to_lowercase()
}

/// Lazy sequence of detail documents, one fetch per item, in result order.
/// Finite and not restartable; consuming it partially skips the remaining
/// fetches.
pub fn detail_texts<'a>(
    client: &'a ApiClient,
    items: &'a [VacancySummary],
) -> impl Iterator<Item = Result<String, ProbeError>> + 'a {
    items.iter().map(move |item| client.vacancy_detail(&item.id))
}

/// True iff every item's detail document contains the stripped, case-folded
/// query text as a contiguous substring. The first non-matching item
/// short-circuits the remaining fetches; a failed fetch is an error, not a
/// skipped item.
pub fn satisfies_query(
    client: &ApiClient,
    envelope: &ResponseEnvelope,
    query: &SearchQuery,
) -> Result<bool, ProbeError> {
    let needle = literal_needle(&query.text);
    for text in detail_texts(client, &envelope.items) {
        if !text?.to_lowercase().contains(&needle) {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(original_url: &str, alternate_url: &str) -> ResponseEnvelope {
        ResponseEnvelope {
            items: vec![],
            found: None,
            original_url: original_url.to_string(),
            alternate_url: alternate_url.to_string(),
        }
    }

    #[test]
    fn text_param_decodes_percent_encoding_and_plus() {
        let got = text_param(
            "https://api.hh.ru/vacancies?text=Java+%D0%BF%D1%80%D0%BE%D1%81%D0%BF%D0%B5%D0%BA%D1%82&page=0",
        )
        .unwrap();
        assert_eq!(got, "Java проспект");
    }

    #[test]
    fn text_param_handles_embedded_delimiters_in_value() {
        // A literal `&` or `=` inside the decoded text must not split the
        // parameter, which is exactly where naive splitting breaks.
        let got = text_param("https://api.hh.ru/vacancies?text=C%26C%3D1&area=1").unwrap();
        assert_eq!(got, "C&C=1");
    }

    #[test]
    fn text_param_missing_is_a_lookup_error() {
        let err = text_param("https://api.hh.ru/vacancies?page=0").unwrap_err();
        assert_eq!(err.code(), "MISSING_TEXT_PARAM");
    }

    #[test]
    fn text_param_rejects_unparseable_url() {
        let err = text_param("not a url").unwrap_err();
        assert_eq!(err.code(), "BAD_URL");
    }

    #[test]
    fn rewrite_none_when_decoded_texts_are_identical() {
        let env = envelope(
            "https://api.hh.ru/vacancies?text=Java",
            "https://hh.ru/search/vacancy?text=Java&from=api",
        );
        assert_eq!(query_rewrite(&env).unwrap(), None);
        assert!(!was_modified(&env).unwrap());
    }

    #[test]
    fn rewrite_detected_when_server_changed_the_text() {
        let env = envelope(
            "https://api.hh.ru/vacancies?text=%22Java+%D0%BF%D1%80%D0%BE%D1%81%D0%BF%D0%B5%D0%BA%D1%82%22",
            "https://hh.ru/search/vacancy?text=Java+%D0%BF%D1%80%D0%BE%D1%81%D0%BF%D0%B5%D0%BA%D1%82",
        );
        let rewrite = query_rewrite(&env).unwrap().expect("rewrite detected");
        assert_eq!(rewrite.sent, "\"Java проспект\"");
        assert_eq!(rewrite.executed, "Java проспект");
        assert!(was_modified(&env).unwrap());
    }

    #[test]
    fn rewrite_comparison_ignores_unrelated_parameters() {
        let env = envelope(
            "https://api.hh.ru/vacancies?text=Java&per_page=20",
            "https://hh.ru/search/vacancy?enable_snippets=true&text=Java",
        );
        assert_eq!(query_rewrite(&env).unwrap(), None);
    }

    #[test]
    fn missing_text_in_alternate_url_fails_the_check() {
        let env = envelope(
            "https://api.hh.ru/vacancies?text=Java",
            "https://hh.ru/search/vacancy?from=api",
        );
        assert!(was_modified(&env).is_err());
    }

    #[test]
    fn needle_strips_markers_and_case_folds() {
        assert_eq!(literal_needle("!Хедхантер"), "хедхантер");
        assert_eq!(literal_needle("!\"Программист Python\""), "программист python");
        assert_eq!(literal_needle("Java"), "java");
    }
}
