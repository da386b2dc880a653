//! Input-bar parsing: slash aliases and command decoding.

use crate::palette::ColorRole;

/// Which export snippet to copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyTarget {
    Tailwind,
    Css,
}

/// What a submitted input line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Generate(String),
    Set { role: ColorRole, value: String },
    /// Set the role currently selected in the editor.
    Edit(String),
    Reset,
    Copy(CopyTarget),
    Help,
    Quit,
}

/// Slash command to internal command name.
const SLASH_MAP: &[(&str, &str)] = &[
    ("/help", "help"),
    ("/h", "help"),
    ("/?", "help"),
    ("/set", "set"),
    ("/edit", "edit"),
    ("/e", "edit"),
    ("/primary", "set primary"),
    ("/secondary", "set secondary"),
    ("/accent", "set accent"),
    ("/background", "set background"),
    ("/bg", "set background"),
    ("/surface", "set surface"),
    ("/reset", "reset"),
    ("/default", "reset"),
    ("/copy", "copy"),
    ("/tailwind", "copy tailwind"),
    ("/css", "copy css"),
    ("/quit", "quit"),
    ("/q", "quit"),
    ("/exit", "quit"),
];

pub fn normalize_slash_command(raw: &str) -> String {
    let raw = raw.trim();
    if !raw.starts_with('/') {
        return raw.to_string();
    }
    let parts: Vec<&str> = raw.splitn(2, char::is_whitespace).collect();
    let head = parts[0].to_lowercase();
    let tail = parts.get(1).map(|s| s.trim()).unwrap_or("");
    let mapped = SLASH_MAP
        .iter()
        .find(|(k, _)| *k == head)
        .map(|(_, v)| *v)
        .unwrap_or(head.trim_start_matches('/'));
    format!("{} {}", mapped, tail).trim().to_string()
}

/// Decodes one input line. Anything not starting with `/` is a description.
pub fn parse_command(raw: &str) -> Result<Command, String> {
    let raw = raw.trim();
    if !raw.starts_with('/') {
        return Ok(Command::Generate(raw.to_string()));
    }
    let normalized = normalize_slash_command(raw);
    let mut parts = normalized.split_whitespace();
    let name = parts.next().unwrap_or("");
    let args: Vec<&str> = parts.collect();

    match name {
        "help" => Ok(Command::Help),
        "quit" => Ok(Command::Quit),
        "reset" => Ok(Command::Reset),
        "set" => match args.as_slice() {
            [role, value] => ColorRole::from_key(role)
                .map(|role| Command::Set { role, value: value.to_string() })
                .ok_or_else(|| format!("Unknown color role: {role}")),
            _ => Err("Usage: /set <role> <color>".to_string()),
        },
        "edit" => match args.as_slice() {
            [value] => Ok(Command::Edit(value.to_string())),
            _ => Err("Usage: /edit <color>".to_string()),
        },
        "copy" => match args.as_slice() {
            ["tailwind"] => Ok(Command::Copy(CopyTarget::Tailwind)),
            ["css"] => Ok(Command::Copy(CopyTarget::Css)),
            _ => Err("Usage: /copy tailwind|css".to_string()),
        },
        other => Err(format!("Unknown command: /{other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_description() {
        assert_eq!(
            parse_command("  Scandinavian forest morning "),
            Ok(Command::Generate("Scandinavian forest morning".to_string()))
        );
    }

    #[test]
    fn aliases_expand() {
        assert_eq!(normalize_slash_command("/bg #fff"), "set background #fff");
        assert_eq!(normalize_slash_command("/Q"), "quit");
        assert_eq!(normalize_slash_command("/unknown x"), "unknown x");
    }

    #[test]
    fn set_and_role_shortcuts() {
        let expected = Command::Set { role: ColorRole::Accent, value: "#ff0066".to_string() };
        assert_eq!(parse_command("/set accent #ff0066"), Ok(expected.clone()));
        assert_eq!(parse_command("/accent #ff0066"), Ok(expected));
        assert!(parse_command("/set border #fff").is_err());
        assert!(parse_command("/set accent").is_err());
    }

    #[test]
    fn copy_targets() {
        assert_eq!(parse_command("/tailwind"), Ok(Command::Copy(CopyTarget::Tailwind)));
        assert_eq!(parse_command("/copy css"), Ok(Command::Copy(CopyTarget::Css)));
        assert!(parse_command("/copy scss").is_err());
    }

    #[test]
    fn edit_and_reset() {
        assert_eq!(parse_command("/e 123456"), Ok(Command::Edit("123456".to_string())));
        assert_eq!(parse_command("/default"), Ok(Command::Reset));
        assert!(parse_command("/nope").is_err());
    }
}
