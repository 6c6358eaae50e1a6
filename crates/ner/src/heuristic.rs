use std::collections::HashSet;

use desk_core::{EntityLabel, EntitySource, NameLexicon, NamedEntity};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::gazetteer::Gazetteer;

// Names with no reliable gender coding; they still mark a PERSON span.
const COMMON_GIVEN_NAMES: &[&str] = &[
    "alex", "andrea", "chris", "kai", "kim", "luca", "robin", "sascha", "toni",
];
const HONORIFICS: &[&str] = &["frau", "herr", "herrn", "dr", "prof", "mrs", "mr", "ms"];
const NAME_PARTICLES: &[&str] = &["von", "van", "de", "zu", "der", "den"];

static NUMERIC_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,2}\.\d{1,2}\.\d{4}\b").expect("valid numeric date regex"));

static WRITTEN_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b\d{1,2}\.\s*(?:Januar|Februar|März|Maerz|April|Mai|Juni|Juli|August|September|Oktober|November|Dezember)(?:\s+\d{4})?\b",
    )
    .expect("valid written date regex")
});

static AMOUNT_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d+(?:\.\d{3})*(?:,\d{2})?\s*(?:Euro\b|EUR\b|€)").expect("valid amount regex")
});

static AMOUNT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:€|\bEUR)\s*\d+(?:\.\d{3})*(?:,\d{2})?\b").expect("valid amount regex")
});

#[derive(Debug, Clone)]
struct Span {
    start: usize,
    end: usize,
    label: EntityLabel,
}

#[derive(Debug, Clone, Copy)]
struct Word<'a> {
    start: usize,
    end: usize,
    text: &'a str,
}

#[derive(Debug, Clone)]
pub struct HeuristicEntitySource {
    given_names: HashSet<String>,
    honorifics: HashSet<String>,
}

impl HeuristicEntitySource {
    pub fn new(lexicon: &NameLexicon) -> Self {
        let mut given_names = lexicon
            .given_names()
            .map(str::to_string)
            .collect::<HashSet<_>>();
        given_names.extend(COMMON_GIVEN_NAMES.iter().map(|name| name.to_string()));

        Self {
            given_names,
            honorifics: HONORIFICS.iter().map(|value| value.to_string()).collect(),
        }
    }

    pub fn with_gazetteer(mut self, gazetteer: Gazetteer) -> Self {
        self.given_names.extend(
            gazetteer
                .given_names
                .into_iter()
                .map(|name| name.trim().to_lowercase()),
        );
        self.honorifics.extend(
            gazetteer
                .honorifics
                .into_iter()
                .map(|value| value.trim().trim_end_matches('.').to_lowercase()),
        );
        self
    }

    pub fn known_given_names(&self) -> usize {
        self.given_names.len()
    }

    fn pattern_spans(text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        for (regex, label) in [
            (&*NUMERIC_DATE, EntityLabel::Date),
            (&*WRITTEN_DATE, EntityLabel::Date),
            (&*AMOUNT_SUFFIX, EntityLabel::Money),
            (&*AMOUNT_PREFIX, EntityLabel::Money),
        ] {
            spans.extend(regex.find_iter(text).map(|found| Span {
                start: found.start(),
                end: found.end(),
                label: label.clone(),
            }));
        }
        spans
    }

    fn person_spans(&self, text: &str) -> Vec<Span> {
        let words = text
            .split_word_bound_indices()
            .filter(|(_, segment)| segment.chars().next().is_some_and(char::is_alphanumeric))
            .map(|(start, segment)| Word {
                start,
                end: start + segment.len(),
                text: segment,
            })
            .collect::<Vec<_>>();

        let mut spans = Vec::new();
        let mut idx = 0;
        while idx < words.len() {
            let word = words[idx];
            let lower = word.text.to_lowercase();

            if is_capitalized(word.text) && self.given_names.contains(&lower) {
                if let Some(last) = self.name_tail(text, &words, idx) {
                    spans.push(Span {
                        start: word.start,
                        end: words[last].end,
                        label: EntityLabel::Person,
                    });
                    idx = last + 1;
                    continue;
                }
            }

            if self.honorifics.contains(&lower) {
                if let Some(next) = words.get(idx + 1) {
                    let gap = &text[word.end..next.start];
                    if is_honorific_gap(gap) && self.honorifics.contains(&next.text.to_lowercase())
                    {
                        idx += 1;
                        continue;
                    }
                    if is_honorific_gap(gap) && is_capitalized(next.text) {
                        let end = if self.given_names.contains(&next.text.to_lowercase()) {
                            self.name_tail(text, &words, idx + 1)
                                .map_or(next.end, |last| words[last].end)
                        } else {
                            next.end
                        };
                        spans.push(Span {
                            start: next.start,
                            end,
                            label: EntityLabel::Person,
                        });
                        idx = words
                            .iter()
                            .position(|candidate| candidate.start >= end)
                            .unwrap_or(words.len());
                        continue;
                    }
                }
            }

            idx += 1;
        }

        spans
    }

    // Index of the family name closing a name that starts at `first`:
    // optional further given names, optional particles, one capitalized word.
    fn name_tail(&self, text: &str, words: &[Word<'_>], first: usize) -> Option<usize> {
        let mut cursor = first;
        loop {
            let current = words.get(cursor)?;
            let next = words.get(cursor + 1)?;
            if !text[current.end..next.start].chars().all(char::is_whitespace)
                || text[current.end..next.start].is_empty()
            {
                return None;
            }

            let lower = next.text.to_lowercase();
            if NAME_PARTICLES.contains(&lower.as_str()) {
                cursor += 1;
                continue;
            }
            if !is_capitalized(next.text) {
                return None;
            }
            let has_more = words
                .get(cursor + 2)
                .is_some_and(|after| {
                    is_capitalized(after.text)
                        && text[next.end..after.start].chars().all(char::is_whitespace)
                        && !text[next.end..after.start].is_empty()
                });
            if self.given_names.contains(&lower) && has_more {
                cursor += 1;
                continue;
            }
            return Some(cursor + 1);
        }
    }
}

impl EntitySource for HeuristicEntitySource {
    fn source_name(&self) -> &'static str {
        "heuristic-gazetteer"
    }

    fn annotate(&self, text: &str) -> Vec<NamedEntity> {
        let mut spans = Self::pattern_spans(text);
        spans.extend(self.person_spans(text));
        spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut covered_until = 0usize;
        let mut entities = Vec::with_capacity(spans.len());
        for span in spans {
            if span.start < covered_until {
                continue;
            }
            covered_until = span.end;
            entities.push(NamedEntity::new(&text[span.start..span.end], span.label));
        }
        entities
    }
}

fn is_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(char::is_uppercase) && chars.any(char::is_lowercase)
}

fn is_honorific_gap(gap: &str) -> bool {
    let rest = gap.strip_prefix('.').unwrap_or(gap);
    !rest.is_empty() && rest.chars().all(char::is_whitespace)
}
