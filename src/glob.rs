//! Shell-style glob lists matched against whole names or paths.

use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};

use crate::error::{Error, Result};

/// An ordered list of compiled globs.
#[derive(Debug, Clone, Default)]
pub struct PatternList {
    patterns: Vec<String>,
    set: GlobSet,
}

impl PatternList {
    /// Compile every pattern, failing on the first invalid one.
    pub fn strict<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        let mut kept = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let pattern = pattern.as_ref();
            builder.add(compile(pattern)?);
            kept.push(pattern.to_string());
        }
        Self::finish(builder, kept)
    }

    /// Compile what can be compiled. Invalid patterns are skipped with a
    /// warning and therefore never match.
    pub fn lenient<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut builder = GlobSetBuilder::new();
        let mut kept = Vec::with_capacity(patterns.len());
        let mut invalid = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            match compile(pattern) {
                Ok(g) => {
                    builder.add(g);
                    kept.push(pattern.to_string());
                }
                Err(_) => invalid.push(pattern.to_string()),
            }
        }
        if !invalid.is_empty() {
            tracing::warn!(?invalid, "invalid glob pattern(s), skipped");
        }
        Self::finish(builder, kept).unwrap_or_else(|e| {
            tracing::warn!("failed to build glob set: {}", e);
            Self::default()
        })
    }

    fn finish(builder: GlobSetBuilder, patterns: Vec<String>) -> Result<Self> {
        let set = builder.build().map_err(|source| Error::InvalidPattern {
            pattern: patterns.join(", "),
            source,
        })?;
        Ok(Self { patterns, set })
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        self.set.is_match(candidate)
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

/// Compile a single glob with fnmatch syntax: `*`, `?` and `[...]` classes
/// only. Braces and backslashes match themselves.
pub fn compile(pattern: &str) -> Result<Glob> {
    GlobBuilder::new(&fnmatch_syntax(pattern))
        .backslash_escape(false)
        .build()
        .map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Rewrite braces outside character classes into single-member classes so
/// globset reads them literally.
fn fnmatch_syntax(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '[' => {
                let mut j = i + 1;
                if chars.get(j) == Some(&'!') {
                    j += 1;
                }
                if chars.get(j) == Some(&']') {
                    j += 1;
                }
                while j < chars.len() && chars[j] != ']' {
                    j += 1;
                }
                if j >= chars.len() {
                    // unclosed; left for globset to reject
                    out.extend(&chars[i..]);
                    return out;
                }
                out.extend(&chars[i..=j]);
                i = j + 1;
                continue;
            }
            '{' => out.push_str("[{]"),
            '}' => out.push_str("[}]"),
            c => out.push(c),
        }
        i += 1;
    }
    out
}

/// Compile a single glob into a matcher, or `None` when it is invalid.
pub fn matcher(pattern: &str) -> Option<GlobMatcher> {
    match compile(pattern) {
        Ok(g) => Some(g.compile_matcher()),
        Err(e) => {
            tracing::warn!("{}", e);
            None
        }
    }
}
