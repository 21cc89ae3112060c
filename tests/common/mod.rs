//! Shared fixtures for integration tests
//!
//! Two small filters built the way real ones would be: a keyword list on
//! Aho-Corasick that scans lazily with views, and a regex filter that collects
//! its spans up front.

#![allow(dead_code)]

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use anyhow::{Context, Result};
use counterspam::{Filter, FilterRef, FilterWithOptions, MatchResult, Matches, ViewMatchResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Install a test subscriber once; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordOptions {
    pub keywords: Vec<String>,
    pub case_insensitive: bool,
}

impl Default for KeywordOptions {
    fn default() -> Self {
        Self {
            keywords: vec!["viagra".to_string(), "casino".to_string()],
            case_insensitive: true,
        }
    }
}

/// Word-list filter
pub struct KeywordFilter {
    options: KeywordOptions,
    automaton: AhoCorasick,
}

impl KeywordFilter {
    pub fn new(options: KeywordOptions) -> Result<Self> {
        let keywords: Vec<&str> = options
            .keywords
            .iter()
            .map(String::as_str)
            .filter(|k| !k.is_empty())
            .collect();

        let automaton = AhoCorasickBuilder::new()
            .ascii_case_insensitive(options.case_insensitive)
            .match_kind(MatchKind::LeftmostLongest)
            .build(keywords)
            .context("Failed to build keyword automaton")?;

        Ok(Self { options, automaton })
    }
}

impl Filter for KeywordFilter {
    fn name(&self) -> &'static str {
        "KeywordFilter"
    }

    fn count(&self, text: &str) -> usize {
        self.automaton.find_iter(text).count()
    }

    fn is_match(&self, text: &str) -> bool {
        self.automaton.is_match(text)
    }

    fn matches(self: Arc<Self>, text: Arc<str>) -> Matches {
        let handle: FilterRef = self.clone();
        Box::new(KeywordMatches {
            filter: self,
            handle,
            text,
            pos: 0,
        })
    }
}

impl FilterWithOptions for KeywordFilter {
    type Options = KeywordOptions;

    fn options(&self) -> &KeywordOptions {
        &self.options
    }
}

/// Walks the text one match at a time
struct KeywordMatches {
    filter: Arc<KeywordFilter>,
    handle: FilterRef,
    text: Arc<str>,
    pos: usize,
}

impl Iterator for KeywordMatches {
    type Item = MatchResult;

    fn next(&mut self) -> Option<MatchResult> {
        let rest = self.text.get(self.pos..)?;
        let found = self.filter.automaton.find(rest)?;
        let (start, end) = (self.pos + found.start(), self.pos + found.end());
        self.pos = end;

        let view = ViewMatchResult::with_range(&self.handle, &self.text, start, end).ok()?;
        Some(view.into_shared(&self.text))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternOptions {
    pub pattern: String,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            pattern: r"https?://\S+".to_string(),
        }
    }
}

/// Regex filter
pub struct PatternFilter {
    options: PatternOptions,
    regex: Regex,
}

impl PatternFilter {
    pub fn new(options: PatternOptions) -> Result<Self> {
        let regex = Regex::new(&options.pattern)
            .with_context(|| format!("Invalid regex pattern: {}", options.pattern))?;
        Ok(Self { options, regex })
    }
}

impl Filter for PatternFilter {
    fn name(&self) -> &'static str {
        "PatternFilter"
    }

    fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    fn matches(self: Arc<Self>, text: Arc<str>) -> Matches {
        let spans: Vec<_> = self.regex.find_iter(&text).map(|m| m.range()).collect();
        let filter: FilterRef = self;
        Box::new(spans.into_iter().filter_map(move |span| {
            MatchResult::with_range(filter.clone(), text.clone(), span.start, span.end).ok()
        }))
    }
}

impl FilterWithOptions for PatternFilter {
    type Options = PatternOptions;

    fn options(&self) -> &PatternOptions {
        &self.options
    }
}
