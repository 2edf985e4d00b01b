//! Fixed escape-token table.
//!
//! A token is `x<name>x`. Names never contain the mark letter, and a literal
//! mark in the input is itself escaped, so in an escaped stream every `x`
//! opens a token and the next `x` closes it.

/// Letter that opens and closes every escape token.
pub const ESCAPE_MARK: char = 'x';

static TABLE: [(char, &str); 12] = [
    ('0', "zero"),
    ('1', "one"),
    ('2', "two"),
    ('3', "three"),
    ('4', "four"),
    ('5', "five"),
    ('6', "siks"),
    ('7', "seven"),
    ('8', "eight"),
    ('9', "nine"),
    (' ', "space"),
    (ESCAPE_MARK, "ks"),
];

/// Token name for `c`, if `c` is escaped.
pub fn escape_name(c: char) -> Option<&'static str> {
    TABLE.iter().find(|(k, _)| *k == c).map(|(_, name)| *name)
}

/// Every letter a token can emit, mark included.
pub fn token_symbols() -> impl Iterator<Item = char> {
    TABLE
        .iter()
        .flat_map(|(_, name)| name.chars())
        .chain(core::iter::once(ESCAPE_MARK))
}

/// Character encoded by a token name.
pub(crate) fn lookup_name(name: &str) -> Option<char> {
    TABLE.iter().find(|(_, n)| *n == name).map(|(k, _)| *k)
}

/// Appends the token carrying `name` to `out`.
pub(crate) fn push_token(out: &mut String, name: &str) {
    out.push(ESCAPE_MARK);
    out.push_str(name);
    out.push(ESCAPE_MARK);
}
