//! Conversion of service records into display-ready questions.

use std::borrow::Cow;

use html_escape::decode_html_entities;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{NormalizedQuestion, RawQuestion};

/// Named references still recognised without a terminating semicolon.
const BARE_ENTITIES: [&str; 16] = [
    "amp", "AMP", "lt", "LT", "gt", "GT", "quot", "QUOT", "nbsp", "copy", "COPY", "reg", "REG",
    "deg", "eacute", "uuml",
];

fn decode(text: &str) -> String {
    decode_html_entities(&terminate_entities(text)).into_owned()
}

/// Add the missing `;` to bare named and numeric references so the
/// decoder picks them up. Already terminated references pass through, so
/// nothing is decoded twice.
fn terminate_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 4);
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..=pos]);
        let after = &rest[pos + 1..];
        let len = reference_len(after);
        out.push_str(&after[..len]);
        if len > 0 && !after[len..].starts_with(';') {
            out.push(';');
        }
        rest = &after[len..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Length of the reference name following an `&`, or 0 if there is none.
fn reference_len(after: &str) -> usize {
    if let Some(number) = after.strip_prefix('#') {
        let (digits, prefix) = match number.strip_prefix(['x', 'X']) {
            Some(hex) => (hex.chars().take_while(char::is_ascii_hexdigit).count(), 2),
            None => (number.chars().take_while(char::is_ascii_digit).count(), 1),
        };
        return if digits == 0 { 0 } else { prefix + digits };
    }

    let name = after.chars().take_while(char::is_ascii_alphanumeric).count();
    if after[name..].starts_with(';') {
        return name;
    }
    BARE_ENTITIES
        .iter()
        .filter(|entity| after.starts_with(**entity))
        .map(|entity| entity.len())
        .max()
        .unwrap_or(0)
}

/// Decode entities in every text field and shuffle the correct answer in
/// among the incorrect ones.
pub fn normalize_question<R: Rng + ?Sized>(raw: &RawQuestion, rng: &mut R) -> NormalizedQuestion {
    let answer = decode(&raw.correct_answer);

    let mut options: Vec<String> = raw.incorrect_answers.iter().map(|a| decode(a)).collect();
    options.push(answer.clone());
    options.shuffle(rng);

    NormalizedQuestion {
        question: decode(&raw.question),
        options,
        answer,
        kind: raw.kind,
        difficulty: raw.difficulty,
        category: decode(&raw.category),
    }
}
