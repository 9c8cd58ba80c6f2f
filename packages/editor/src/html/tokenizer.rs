use logos::Logos;
use std::borrow::Cow;

/// Lexical pieces of an HTML fragment.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum HtmlToken<'src> {
    /// `<!doctype ...>`, `<!-- ... -->` and friends. Dropped by the parser.
    #[regex(r"<![^>]*>", |lex| lex.slice())]
    Declaration(&'src str),

    #[regex(r"</[a-zA-Z][a-zA-Z0-9-]*[^>]*>", |lex| lex.slice())]
    EndTag(&'src str),

    #[regex(r"<[a-zA-Z][a-zA-Z0-9-]*[^>]*>", |lex| lex.slice())]
    StartTag(&'src str),

    #[regex(r"[^<]+", |lex| lex.slice())]
    Text(&'src str),

    /// A `<` that does not open a tag.
    #[token("<")]
    Lt,
}

impl<'src> HtmlToken<'src> {
    /// Lowercased element name of a start or end tag.
    pub fn tag_name(&self) -> Option<String> {
        let raw = match self {
            HtmlToken::StartTag(raw) => raw.strip_prefix('<')?,
            HtmlToken::EndTag(raw) => raw.strip_prefix("</")?,
            _ => return None,
        };
        let name: String = raw
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        (!name.is_empty()).then_some(name)
    }

    /// `<br/>` style start tags.
    pub fn is_self_closing(&self) -> bool {
        matches!(self, HtmlToken::StartTag(raw) if raw.trim_end_matches('>').trim_end().ends_with('/'))
    }
}

/// Tokenize a fragment. Input the lexer cannot classify comes back as text.
pub fn tokenize(source: &str) -> Vec<HtmlToken<'_>> {
    HtmlToken::lexer(source)
        .spanned()
        .map(|(result, span)| result.unwrap_or(HtmlToken::Text(&source[span])))
        .collect()
}

/// Decode the character references an editor is likely to receive.
/// Unknown references are kept verbatim.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let decoded = rest
            .find(';')
            .filter(|end| *end <= 10)
            .and_then(|end| decode_reference(&rest[1..end]).map(|c| (c, end)));

        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &rest[end + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

fn decode_reference(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" | "#39" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let number = name.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
