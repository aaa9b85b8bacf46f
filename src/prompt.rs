//! Prompt template rendering. Templates come from the session environment
//! (the `PROMPT` variable) and may reference other variables as `$NAME` or
//! `${NAME}`; unknown variables render as empty, like a POSIX shell.

use std::collections::BTreeMap;
use std::iter::Peekable;
use std::str::Chars;

pub fn render(env: &BTreeMap<String, String>, template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('{') => {
                chars.next();
                let name = read_braced_name(&mut chars);
                push_var(&mut out, env, &name);
            }
            Some(&c) if is_name_char(c) => {
                let name = read_bare_name(&mut chars);
                push_var(&mut out, env, &name);
            }
            _ => out.push('$'),
        }
    }
    out
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn read_braced_name(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut name = String::new();
    for c in chars.by_ref() {
        if c == '}' {
            break;
        }
        name.push(c);
    }
    name
}

fn read_bare_name(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if !is_name_char(c) {
            break;
        }
        name.push(c);
        chars.next();
    }
    name
}

fn push_var(out: &mut String, env: &BTreeMap<String, String>, name: &str) {
    if let Some(value) = env.get(name) {
        out.push_str(value);
    }
}
