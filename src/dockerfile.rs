//! Minimal Dockerfile reader.
//!
//! Only what the convention checks need is parsed: logical instructions
//! (continuations joined, comments dropped), `FROM` image references and
//! `LABEL` key/value pairs. Nothing is executed or resolved.

#[derive(Debug, Clone, PartialEq, Eq)]
/// A logical instruction with its 1-based starting line.
pub struct Instruction {
    pub line: usize,
    /// Upper-cased keyword, e.g. `FROM`.
    pub keyword: String,
    pub args: String,
}

/// Escape character declared by a `# escape=` parser directive, if any.
///
/// Directives are only honored before the first comment, blank line or
/// instruction.
fn escape_char(lines: &[String]) -> char {
    let mut escape = '\\';
    for line in lines {
        let Some(body) = line.trim().strip_prefix('#') else {
            break;
        };
        let Some((key, value)) = body.split_once('=') else {
            break;
        };
        let key = key.trim();
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphabetic()) {
            break;
        }
        if key.eq_ignore_ascii_case("escape") {
            match value.trim() {
                "`" => escape = '`',
                "\\" => escape = '\\',
                _ => {}
            }
        }
    }
    escape
}

/// Split raw lines into logical instructions.
pub fn instructions(lines: &[String]) -> Vec<Instruction> {
    let escape = escape_char(lines);
    let mut out = Vec::new();
    let mut current: Option<(usize, String)> = None;

    for (idx, raw) in lines.iter().enumerate() {
        let trimmed = raw.trim();
        // Comments and blank lines never end a continuation.
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let body = raw.trim_end();
        let (text, continues) = match body.strip_suffix(escape) {
            Some(head) => (head, true),
            None => (body, false),
        };
        let (start, buf) = current.get_or_insert_with(|| (idx + 1, String::new()));
        buf.push_str(text);
        if !continues {
            let (start, buf) = (*start, std::mem::take(buf));
            current = None;
            if let Some(ins) = split_instruction(start, &buf) {
                out.push(ins);
            }
        }
    }
    // A trailing escape on the last line still terminates the instruction.
    if let Some((start, buf)) = current {
        if let Some(ins) = split_instruction(start, &buf) {
            out.push(ins);
        }
    }
    out
}

fn split_instruction(line: usize, text: &str) -> Option<Instruction> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let (keyword, args) = match text.split_once(char::is_whitespace) {
        Some((k, a)) => (k, a.trim()),
        None => (text, ""),
    };
    Some(Instruction {
        line,
        keyword: keyword.to_ascii_uppercase(),
        args: args.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Image reference of a `FROM` instruction.
pub struct ImageRef {
    pub registry: Option<String>,
    pub name: String,
    pub tag: Option<String>,
    /// Build stage name from `AS <alias>`.
    pub alias: Option<String>,
}

const DOCKER_HUB: &[&str] = &["docker.io", "index.docker.io", "registry-1.docker.io"];

impl ImageRef {
    /// Parse the arguments of a `FROM` instruction; `--flag`s are skipped.
    pub fn from_args(args: &str) -> Option<Self> {
        let words: Vec<&str> = args.split_whitespace().collect();
        let pos = words.iter().take_while(|w| w.starts_with("--")).count();
        let reference = *words.get(pos)?;
        let alias = match (words.get(pos + 1), words.get(pos + 2)) {
            (Some(kw), Some(name)) if kw.eq_ignore_ascii_case("as") => Some(name.to_string()),
            _ => None,
        };
        let mut image = Self::parse(reference);
        image.alias = alias;
        Some(image)
    }

    /// Parse `[registry/]name[:tag][@digest]`; the digest is dropped.
    pub fn parse(reference: &str) -> Self {
        let rest = reference.split_once('@').map_or(reference, |(r, _)| r);
        // A colon after the last slash is a tag; before it, a registry port.
        let last_slash = rest.rfind('/').map(|i| i + 1).unwrap_or(0);
        let (path, tag) = match rest[last_slash..].rfind(':') {
            Some(i) => (
                &rest[..last_slash + i],
                Some(rest[last_slash + i + 1..].to_string()),
            ),
            None => (rest, None),
        };
        let (registry, name) = match path.split_once('/') {
            Some((first, tail))
                if first.contains('.') || first.contains(':') || first == "localhost" =>
            {
                (Some(first.to_string()), tail.to_string())
            }
            _ => (None, path.to_string()),
        };
        ImageRef {
            registry,
            name,
            tag,
            alias: None,
        }
    }

    /// Name with Docker Hub defaults folded away: `docker.io/library/r-base`
    /// and `r-base` both become `r-base`.
    pub fn canonical_name(&self) -> String {
        let hub = match self.registry.as_deref() {
            None => true,
            Some(r) => DOCKER_HUB.contains(&r),
        };
        if hub {
            self.name
                .strip_prefix("library/")
                .unwrap_or(&self.name)
                .to_string()
        } else {
            format!("{}/{}", self.registry.as_deref().unwrap_or_default(), self.name)
        }
    }
}

struct Word {
    text: String,
    /// Byte offset in `text` of the first `=` outside quotes.
    eq: Option<usize>,
}

/// Shell-like word splitting honoring single/double quotes and backslash escapes.
fn words(args: &str) -> Vec<Word> {
    let mut out = Vec::new();
    let mut text = String::new();
    let mut eq = None;
    let mut started = false;
    let mut quote: Option<char> = None;
    let mut chars = args.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some('\''), '\'') | (Some('"'), '"') => quote = None,
            (Some('\''), _) => text.push(c),
            (_, '\\') => {
                if let Some(next) = chars.next() {
                    text.push(next);
                }
                started = true;
            }
            (Some(_), _) => text.push(c),
            (None, '"') | (None, '\'') => {
                quote = Some(c);
                started = true;
            }
            (None, c) if c.is_whitespace() => {
                if started {
                    out.push(Word {
                        text: std::mem::take(&mut text),
                        eq: eq.take(),
                    });
                    started = false;
                }
            }
            (None, '=') => {
                if eq.is_none() {
                    eq = Some(text.len());
                }
                text.push('=');
                started = true;
            }
            (None, _) => {
                text.push(c);
                started = true;
            }
        }
    }
    if started {
        out.push(Word { text, eq });
    }
    out
}

/// Key/value pairs of a `LABEL` instruction.
///
/// Accepts `key=value ...` (quoted or not) and the legacy `key value` form.
pub fn label_pairs(args: &str) -> Vec<(String, String)> {
    let ws = words(args);
    match ws.first() {
        None => Vec::new(),
        Some(first) if first.eq.is_none() => {
            let value = ws[1..]
                .iter()
                .map(|w| w.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            vec![(first.text.clone(), value)]
        }
        Some(_) => ws
            .into_iter()
            .map(|w| match w.eq {
                Some(i) => (w.text[..i].to_string(), w.text[i + 1..].to_string()),
                None => (w.text, String::new()),
            })
            .collect(),
    }
}
